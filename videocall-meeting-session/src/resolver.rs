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

//! Meeting id → call resolution with per-session memoization.
//!
//! The resolver does no I/O. [`CallResolver::request`] returns a
//! [`LookupTicket`] when the backend has to be asked; whoever runs the lookup
//! hands the ticket back to [`CallResolver::complete`] with the outcome. A
//! ticket is only honoured if it is still the live lookup for the meeting the
//! page currently shows. Anything else is dropped as stale.

use std::collections::HashMap;

use crate::backend::LookupOutcome;
use crate::call::CallHandle;
use crate::error::ResolveFailure;
use crate::meeting_id::MeetingId;

/// Where resolution of the current meeting id stands.
#[derive(Debug, Clone, PartialEq, Default)]
pub enum ResolutionStatus {
    #[default]
    Pending,
    Resolved(CallHandle),
    NotFound,
    Failed(ResolveFailure),
}

impl ResolutionStatus {
    /// The resolved call, if there is one.
    pub fn call(&self) -> Option<&CallHandle> {
        match self {
            ResolutionStatus::Resolved(call) => Some(call),
            _ => None,
        }
    }

    /// True while a lookup for the current meeting is outstanding.
    pub fn is_call_loading(&self) -> bool {
        matches!(self, ResolutionStatus::Pending)
    }
}

/// Permission to deliver one lookup result.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LookupTicket {
    meeting_id: MeetingId,
    seq: u64,
}

impl LookupTicket {
    pub fn meeting_id(&self) -> &MeetingId {
        &self.meeting_id
    }
}

/// What [`CallResolver::complete`] did with a result.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Completion {
    Applied,
    /// The ticket was superseded or the page moved to another meeting.
    Stale,
}

/// Terminal answers worth remembering. Failures are not memoized so that a
/// retry reaches the backend.
#[derive(Debug, Clone)]
enum Memo {
    Resolved(CallHandle),
    NotFound,
}

impl From<&Memo> for ResolutionStatus {
    fn from(memo: &Memo) -> Self {
        match memo {
            Memo::Resolved(call) => ResolutionStatus::Resolved(call.clone()),
            Memo::NotFound => ResolutionStatus::NotFound,
        }
    }
}

/// Resolves meeting ids to calls, last-requested-id-wins.
///
/// One resolver lives as long as the meeting page; [`reset`](Self::reset) is
/// the eviction point when the user navigates away.
#[derive(Debug, Default)]
pub struct CallResolver {
    current: Option<MeetingId>,
    status: ResolutionStatus,
    memo: HashMap<MeetingId, Memo>,
    in_flight: HashMap<MeetingId, u64>,
    // Never reset, so tickets from before a reset can't match again.
    next_seq: u64,
}

impl CallResolver {
    pub fn new() -> Self {
        Self::default()
    }

    /// Make `meeting_id` the current meeting.
    ///
    /// Returns a ticket only when a backend lookup must be started. Memoized
    /// answers are served directly and a lookup already in flight for the
    /// same id is reused.
    pub fn request(&mut self, meeting_id: &MeetingId) -> Option<LookupTicket> {
        self.current = Some(meeting_id.clone());

        if let Some(memo) = self.memo.get(meeting_id) {
            log::debug!("Meeting {meeting_id} served from the session cache");
            self.status = memo.into();
            return None;
        }

        self.status = ResolutionStatus::Pending;
        if self.in_flight.contains_key(meeting_id) {
            log::debug!("Lookup for meeting {meeting_id} already in flight");
            return None;
        }
        Some(self.issue(meeting_id.clone()))
    }

    /// Deliver the outcome of the lookup started for `ticket`.
    pub fn complete(&mut self, ticket: LookupTicket, outcome: LookupOutcome) -> Completion {
        let LookupTicket { meeting_id, seq } = ticket;

        if self.in_flight.get(&meeting_id) != Some(&seq) {
            log::debug!("Dropping result of superseded lookup #{seq} for {meeting_id}");
            return Completion::Stale;
        }
        self.in_flight.remove(&meeting_id);

        if self.current.as_ref() != Some(&meeting_id) {
            log::debug!("Dropping result for {meeting_id}, the page has moved on");
            return Completion::Stale;
        }

        self.status = match outcome {
            LookupOutcome::Found(call) => {
                log::info!("Meeting {meeting_id} resolved");
                self.memo.insert(meeting_id, Memo::Resolved(call.clone()));
                ResolutionStatus::Resolved(call)
            }
            LookupOutcome::NotFound => {
                log::info!("Meeting {meeting_id} does not exist");
                self.memo.insert(meeting_id, Memo::NotFound);
                ResolutionStatus::NotFound
            }
            LookupOutcome::Failed(reason) => {
                log::warn!("Resolving meeting {meeting_id} failed: {reason}");
                ResolutionStatus::Failed(reason)
            }
        };
        Completion::Applied
    }

    /// Ask the backend again after a failure. No-op in any other state.
    pub fn retry(&mut self) -> Option<LookupTicket> {
        if !matches!(self.status, ResolutionStatus::Failed(_)) {
            return None;
        }
        let meeting_id = self.current.clone()?;
        log::info!("Retrying lookup for meeting {meeting_id}");
        self.status = ResolutionStatus::Pending;
        Some(self.issue(meeting_id))
    }

    /// Forget the memoized answer for one meeting. The current status is
    /// left alone; the next [`request`](Self::request) asks the backend.
    pub fn evict(&mut self, meeting_id: &MeetingId) {
        self.memo.remove(meeting_id);
    }

    /// Drop everything: memoized answers, the current meeting, and all
    /// outstanding tickets.
    pub fn reset(&mut self) {
        self.current = None;
        self.status = ResolutionStatus::Pending;
        self.memo.clear();
        self.in_flight.clear();
    }

    pub fn current(&self) -> Option<&MeetingId> {
        self.current.as_ref()
    }

    pub fn status(&self) -> &ResolutionStatus {
        &self.status
    }

    pub fn call(&self) -> Option<&CallHandle> {
        self.status.call()
    }

    pub fn is_call_loading(&self) -> bool {
        self.status.is_call_loading()
    }

    fn issue(&mut self, meeting_id: MeetingId) -> LookupTicket {
        self.next_seq += 1;
        let seq = self.next_seq;
        log::info!("Resolving meeting {meeting_id} (lookup #{seq})");
        self.in_flight.insert(meeting_id.clone(), seq);
        LookupTicket { meeting_id, seq }
    }
}
