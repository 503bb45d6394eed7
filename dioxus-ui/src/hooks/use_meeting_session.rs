// SPDX-License-Identifier: MIT OR Apache-2.0

//! Drives a [`MeetingSession`] from inside a component.
//!
//! The session itself is synchronous. This hook owns it in a signal, spawns
//! the backend lookups it asks for, and feeds the outcomes back. Lookups are
//! tasks of the calling component, so they are cancelled when it unmounts.

use dioxus::prelude::*;
use gloo_timers::future::TimeoutFuture;
use videocall_meeting_session::{run_lookup, LookupTicket, MeetingId, MeetingSession, View};

use crate::constants::call_lookup_timeout_ms;
use crate::context::{CallBackendCtx, IdentityCtx};
use crate::meeting_api::ApiCallBackend;

/// What a meeting page needs from its session.
#[derive(Clone)]
pub struct MeetingSessionHandle {
    meeting_id: MeetingId,
    session: Signal<MeetingSession>,
    backend: ApiCallBackend,
}

impl MeetingSessionHandle {
    /// The active view for the meeting this render was asked for. Reading it
    /// subscribes the caller to changes.
    ///
    /// The session only learns about a new id in an effect, after the first
    /// render with it, so until then this is `Loading`.
    pub fn view(&self) -> View {
        self.session.read().view_for(&self.meeting_id)
    }

    pub fn complete_setup(&self) {
        let mut session = self.session;
        if let Err(e) = session.write().complete_setup() {
            log::warn!("Ignoring setup completion: {e}");
        };
    }

    pub fn retry(&self) {
        let mut session = self.session;
        let ticket = session.write().retry();
        if let Some(ticket) = ticket {
            spawn_lookup(self.session, self.backend.clone(), ticket);
        }
    }
}

pub fn use_meeting_session(meeting_id: MeetingId) -> MeetingSessionHandle {
    let backend = use_context::<CallBackendCtx>();
    let identity = use_context::<IdentityCtx>();
    let mut session = use_signal(MeetingSession::new);

    {
        let backend = backend.clone();
        use_effect(use_reactive((&meeting_id,), move |(meeting_id,)| {
            let ticket = session.write().enter(meeting_id);
            if let Some(ticket) = ticket {
                spawn_lookup(session, backend.clone(), ticket);
            }
        }));
    }

    use_effect(move || {
        if identity.read().is_loaded() {
            session.write().identity_loaded();
        }
    });

    use_drop(move || {
        if let Ok(mut session) = session.try_write() {
            session.leave();
        }
    });

    MeetingSessionHandle {
        meeting_id,
        session,
        backend,
    }
}

fn spawn_lookup(
    mut session: Signal<MeetingSession>,
    backend: ApiCallBackend,
    ticket: LookupTicket,
) {
    let timeout_ms = call_lookup_timeout_ms();
    spawn(async move {
        let outcome = run_lookup(&backend, &ticket, TimeoutFuture::new(timeout_ms)).await;
        session.write().complete_lookup(ticket, outcome);
    });
}
