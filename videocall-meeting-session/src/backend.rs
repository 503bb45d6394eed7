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

//! The call backend boundary and the lookup driver.

use std::future::Future;

use futures::future::{self, Either};
use futures::pin_mut;

use crate::call::CallHandle;
use crate::error::ResolveFailure;
use crate::meeting_id::MeetingId;
use crate::resolver::LookupTicket;

/// The one operation the session needs from the call backend.
///
/// Implementations return `Ok(None)` when the meeting does not exist (and
/// was not created), and `Err` for everything that prevented an answer.
/// Futures need not be `Send`: the browser runs them on its event loop.
#[allow(async_fn_in_trait)]
pub trait CallBackend {
    async fn resolve_or_create_call(
        &self,
        meeting_id: &MeetingId,
    ) -> Result<Option<CallHandle>, ResolveFailure>;
}

/// Result of one backend lookup, as fed back into the resolver.
#[derive(Debug, Clone, PartialEq)]
pub enum LookupOutcome {
    Found(CallHandle),
    NotFound,
    Failed(ResolveFailure),
}

impl From<Result<Option<CallHandle>, ResolveFailure>> for LookupOutcome {
    fn from(result: Result<Option<CallHandle>, ResolveFailure>) -> Self {
        match result {
            Ok(Some(call)) => LookupOutcome::Found(call),
            Ok(None) => LookupOutcome::NotFound,
            Err(reason) => LookupOutcome::Failed(reason),
        }
    }
}

/// Run the lookup for `ticket`, giving up when `deadline` completes first.
///
/// The deadline is any future, so the caller picks the timer: a
/// `gloo_timers` timeout in the browser, `tokio::time::sleep` in tests.
pub async fn run_lookup<B, D>(backend: &B, ticket: &LookupTicket, deadline: D) -> LookupOutcome
where
    B: CallBackend,
    D: Future<Output = ()>,
{
    let lookup = backend.resolve_or_create_call(ticket.meeting_id());
    pin_mut!(lookup);
    pin_mut!(deadline);

    match future::select(lookup, deadline).await {
        Either::Left((result, _)) => result.into(),
        Either::Right(((), _)) => {
            log::warn!(
                "Lookup for meeting {} timed out, giving up",
                ticket.meeting_id()
            );
            LookupOutcome::Failed(ResolveFailure::TimedOut)
        }
    }
}
