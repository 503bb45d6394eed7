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

//! Error types for the meeting session.

use thiserror::Error;

/// Errors surfaced to the page by [`MeetingSession`](crate::MeetingSession).
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum SessionError {
    /// The route carried no meeting id, or an empty one.
    #[error("No meeting was requested")]
    IdentifierMissing,

    /// Setup was completed before the call was ready to set up.
    #[error("Setup is not available until the meeting has loaded")]
    SetupUnavailable,
}

/// Why a call lookup ended without a call.
///
/// A meeting that does not exist is not a failure; it is
/// [`ResolutionStatus::NotFound`](crate::ResolutionStatus::NotFound).
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ResolveFailure {
    /// The lookup deadline fired before the backend answered.
    #[error("The meeting service did not respond in time")]
    TimedOut,

    /// The backend rejected our credentials.
    #[error("You are not signed in to the meeting service")]
    Unauthorized,

    /// Any other backend or network error.
    #[error("The meeting service returned an error: {0}")]
    Backend(String),
}
