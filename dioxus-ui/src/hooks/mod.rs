// SPDX-License-Identifier: MIT OR Apache-2.0

pub mod use_identity;
pub mod use_meeting_session;

pub use use_identity::use_identity_provider;
pub use use_meeting_session::{use_meeting_session, MeetingSessionHandle};
