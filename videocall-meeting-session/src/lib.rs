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

//! Call-session lifecycle for the meeting page.
//!
//! A meeting page goes through three questions before it can show a call:
//! is the user's identity loaded, does the meeting id from the route resolve
//! to a call, and has the user finished the pre-join setup? This crate answers
//! them without any UI or HTTP dependency:
//!
//! - [`CallResolver`] turns a [`MeetingId`] into a [`ResolutionStatus`]. It
//!   hands out a [`LookupTicket`] whenever a backend lookup is needed and
//!   discards results whose ticket has been superseded.
//! - [`SessionGate`] is the `AwaitingPrerequisites → Setup → InCall` state
//!   machine. Its [`transition`] function is pure and one-way.
//! - [`MeetingSession`] composes both with the identity signal and produces
//!   the [`View`] the rendering layer draws.
//!
//! The caller owns the event loop: it runs [`run_lookup`] for each ticket
//! against a [`CallBackend`] and feeds the outcome back.
//!
//! ```
//! use videocall_meeting_session::{LookupOutcome, MeetingId, MeetingSession, View};
//! # use videocall_meeting_session::CallHandle;
//! # use videocall_meeting_types::responses::MeetingInfoResponse;
//! # let handle = CallHandle::new(MeetingInfoResponse {
//! #     meeting_id: "standup".into(), state: "active".into(), host: "a@b.c".into(),
//! #     host_display_name: None, has_password: false,
//! # });
//!
//! let mut session = MeetingSession::new();
//! let ticket = session
//!     .enter(MeetingId::from_route(Some("standup")).unwrap())
//!     .expect("first visit needs a lookup");
//! assert_eq!(session.view(), View::Loading);
//!
//! session.identity_loaded();
//! session.complete_lookup(ticket, LookupOutcome::Found(handle.clone()));
//! assert_eq!(session.view(), View::Setup(handle.clone()));
//!
//! session.complete_setup().unwrap();
//! assert_eq!(session.view(), View::InCall(handle));
//! ```

pub mod backend;
pub mod call;
pub mod error;
pub mod gate;
pub mod meeting_id;
pub mod resolver;
pub mod session;

pub use backend::{run_lookup, CallBackend, LookupOutcome};
pub use call::CallHandle;
pub use error::{ResolveFailure, SessionError};
pub use gate::{transition, GateEvent, GateState, IdentityReadiness, SessionGate, View};
pub use meeting_id::MeetingId;
pub use resolver::{CallResolver, Completion, LookupTicket, ResolutionStatus};
pub use session::MeetingSession;
