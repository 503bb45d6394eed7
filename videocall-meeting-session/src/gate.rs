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

//! The session gate: which of the mutually exclusive meeting views is active.

use crate::call::CallHandle;
use crate::error::{ResolveFailure, SessionError};
use crate::meeting_id::MeetingId;
use crate::resolver::ResolutionStatus;

/// Gate states. `InCall` is terminal for the session.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum GateState {
    #[default]
    AwaitingPrerequisites,
    Setup,
    InCall,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GateEvent {
    /// Identity is loaded and the call is resolved.
    PrerequisitesMet,
    /// The user finished the pre-join setup.
    SetupCompleted,
}

/// Pure gate transition. Every edge moves forward; unlisted pairs leave the
/// state unchanged.
pub fn transition(state: GateState, event: GateEvent) -> GateState {
    match (state, event) {
        (GateState::AwaitingPrerequisites, GateEvent::PrerequisitesMet) => GateState::Setup,
        (GateState::Setup, GateEvent::SetupCompleted) => GateState::InCall,
        (state, _) => state,
    }
}

/// Whether the identity provider has finished loading the user.
///
/// Only ever goes from pending to loaded.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct IdentityReadiness {
    loaded: bool,
}

impl IdentityReadiness {
    pub fn loaded() -> Self {
        Self { loaded: true }
    }

    pub fn mark_loaded(&mut self) {
        self.loaded = true;
    }

    pub fn is_loaded(&self) -> bool {
        self.loaded
    }
}

/// What the meeting page should render.
#[derive(Debug, Clone, PartialEq)]
pub enum View {
    /// No meeting id was given.
    NoMeeting,
    Loading,
    NotFound,
    /// Resolution failed; the page offers a retry.
    Failed(ResolveFailure),
    Setup(CallHandle),
    InCall(CallHandle),
}

/// Per-meeting gate. A new meeting id means a new gate.
#[derive(Debug, Clone, PartialEq)]
pub struct SessionGate {
    meeting_id: MeetingId,
    state: GateState,
}

impl SessionGate {
    pub fn new(meeting_id: MeetingId) -> Self {
        Self {
            meeting_id,
            state: GateState::default(),
        }
    }

    pub fn meeting_id(&self) -> &MeetingId {
        &self.meeting_id
    }

    pub fn state(&self) -> GateState {
        self.state
    }

    pub fn is_setup_complete(&self) -> bool {
        self.state == GateState::InCall
    }

    /// Fire `PrerequisitesMet` once identity and call are both there.
    pub fn observe(
        &mut self,
        identity: IdentityReadiness,
        status: &ResolutionStatus,
    ) -> GateState {
        if identity.is_loaded() && status.call().is_some() {
            self.apply(GateEvent::PrerequisitesMet);
        }
        self.state
    }

    /// The user finished setup.
    ///
    /// Completing again once in the call is harmless; completing before the
    /// setup view was reachable is an error and changes nothing.
    pub fn complete_setup(&mut self) -> Result<GateState, SessionError> {
        match self.state {
            GateState::AwaitingPrerequisites => Err(SessionError::SetupUnavailable),
            GateState::Setup | GateState::InCall => Ok(self.apply(GateEvent::SetupCompleted)),
        }
    }

    /// Select the view for the given inputs.
    ///
    /// Identity and resolution are checked on every read, so the call views
    /// are only produced while both hold, whatever the latched state. A gate
    /// that has not observed its prerequisites yet stays on `Loading`, so
    /// `Setup` is only shown when `complete_setup` would accept it.
    pub fn view(&self, identity: IdentityReadiness, status: &ResolutionStatus) -> View {
        if !identity.is_loaded() {
            return View::Loading;
        }
        match (self.state, status) {
            (_, ResolutionStatus::Pending) => View::Loading,
            (_, ResolutionStatus::NotFound) => View::NotFound,
            (_, ResolutionStatus::Failed(reason)) => View::Failed(reason.clone()),
            (GateState::AwaitingPrerequisites, ResolutionStatus::Resolved(_)) => View::Loading,
            (GateState::Setup, ResolutionStatus::Resolved(call)) => View::Setup(call.clone()),
            (GateState::InCall, ResolutionStatus::Resolved(call)) => View::InCall(call.clone()),
        }
    }

    fn apply(&mut self, event: GateEvent) -> GateState {
        let next = transition(self.state, event);
        if next != self.state {
            log::debug!(
                "Meeting {} gate: {:?} -> {:?}",
                self.meeting_id,
                self.state,
                next
            );
        }
        self.state = next;
        next
    }
}
