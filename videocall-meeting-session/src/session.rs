/*
 * Copyright 2025 Security Union LLC
 *
 * Licensed under either of
 *
 * * Apache License, Version 2.0
 *   (http://www.apache.org/licenses/LICENSE-2.0)
 * * MIT license
 *   (http://opensource.org/licenses/MIT)
 *
 * at your option.
 */

//! The meeting page's controller: resolver, gate, and identity together.

use crate::backend::LookupOutcome;
use crate::error::SessionError;
use crate::gate::{GateState, IdentityReadiness, SessionGate, View};
use crate::meeting_id::MeetingId;
use crate::resolver::{CallResolver, Completion, LookupTicket, ResolutionStatus};

/// State behind one meeting page.
///
/// The page is the single writer: it forwards route changes, identity
/// readiness, lookup results, and the setup button, then reads
/// [`view`](Self::view) to decide what to draw.
#[derive(Debug, Default)]
pub struct MeetingSession {
    resolver: CallResolver,
    gate: Option<SessionGate>,
    identity: IdentityReadiness,
}

impl MeetingSession {
    pub fn new() -> Self {
        Self::default()
    }

    /// The route now points at `meeting_id`.
    ///
    /// A different id starts a new session with setup not yet done.
    /// Returns a ticket when the caller must run a backend lookup.
    pub fn enter(&mut self, meeting_id: MeetingId) -> Option<LookupTicket> {
        let same_meeting = self
            .gate
            .as_ref()
            .is_some_and(|gate| gate.meeting_id() == &meeting_id);
        if !same_meeting {
            log::info!("Entering meeting {meeting_id}");
            self.gate = Some(SessionGate::new(meeting_id.clone()));
        }

        let ticket = self.resolver.request(&meeting_id);
        self.sync_gate();
        ticket
    }

    /// The user left the meeting route. Every cached call and every
    /// outstanding lookup is forgotten.
    pub fn leave(&mut self) {
        if let Some(gate) = self.gate.take() {
            log::info!("Leaving meeting {}", gate.meeting_id());
        }
        self.resolver.reset();
    }

    pub fn identity_loaded(&mut self) {
        if !self.identity.is_loaded() {
            log::debug!("Identity loaded");
        }
        self.identity.mark_loaded();
        self.sync_gate();
    }

    pub fn complete_lookup(&mut self, ticket: LookupTicket, outcome: LookupOutcome) -> Completion {
        let completion = self.resolver.complete(ticket, outcome);
        self.sync_gate();
        completion
    }

    /// Retry a failed lookup for the current meeting.
    pub fn retry(&mut self) -> Option<LookupTicket> {
        self.gate.as_ref()?;
        self.resolver.retry()
    }

    /// The user finished the pre-join setup.
    pub fn complete_setup(&mut self) -> Result<GateState, SessionError> {
        let gate = self.gate.as_mut().ok_or(SessionError::IdentifierMissing)?;
        let state = gate.complete_setup()?;
        log::info!("Setup complete for meeting {}", gate.meeting_id());
        Ok(state)
    }

    pub fn view(&self) -> View {
        match &self.gate {
            None => View::NoMeeting,
            Some(gate) => gate.view(self.identity, self.resolver.status()),
        }
    }

    /// The view for a page that is showing `meeting_id`.
    ///
    /// Until that id has been entered, the session still describes the
    /// previous meeting (or none), so the page gets `Loading` rather than
    /// another meeting's view.
    pub fn view_for(&self, meeting_id: &MeetingId) -> View {
        if self.meeting_id() == Some(meeting_id) {
            self.view()
        } else {
            View::Loading
        }
    }

    pub fn meeting_id(&self) -> Option<&MeetingId> {
        self.gate.as_ref().map(SessionGate::meeting_id)
    }

    pub fn status(&self) -> &ResolutionStatus {
        self.resolver.status()
    }

    pub fn identity(&self) -> IdentityReadiness {
        self.identity
    }

    pub fn gate_state(&self) -> Option<GateState> {
        self.gate.as_ref().map(SessionGate::state)
    }

    fn sync_gate(&mut self) {
        if let Some(gate) = self.gate.as_mut() {
            gate.observe(self.identity, self.resolver.status());
        }
    }
}
