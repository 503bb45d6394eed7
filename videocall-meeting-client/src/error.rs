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

//! Error types for the meeting API client.

use thiserror::Error;
use videocall_meeting_types::{APIError, APIResponse};

/// Errors returned by [`MeetingApiClient`](crate::MeetingApiClient) methods.
#[derive(Debug, Error)]
pub enum ApiError {
    /// The session JWT is missing, expired, or invalid (HTTP 401).
    #[error("Not authenticated. Please log in.")]
    NotAuthenticated,

    /// The server denied access (HTTP 403).
    #[error("Access denied: {0}")]
    Forbidden(String),

    /// The requested resource was not found (HTTP 404).
    #[error("Not found: {0}")]
    NotFound(String),

    /// The resource already exists (HTTP 409), e.g. a meeting created
    /// concurrently by another participant.
    #[error("Conflict: {0}")]
    Conflict(String),

    /// A server error with status code and body.
    #[error("Server error ({status}): {body}")]
    ServerError { status: u16, body: String },

    /// A network or transport error.
    #[error("Network error: {0}")]
    Network(#[from] reqwest::Error),
}

impl ApiError {
    /// Map a non-success HTTP status and its body to an error.
    ///
    /// Bodies in the `{ "success": false, "result": <APIError> }` envelope
    /// contribute their display message; anything else is kept verbatim.
    /// A 409 only counts as a [`Conflict`](ApiError::Conflict) when the
    /// server says the meeting already exists.
    pub(crate) fn from_status(status: u16, body: String) -> Self {
        let envelope = serde_json::from_str::<APIResponse<APIError>>(&body)
            .ok()
            .map(|envelope| envelope.result);
        let message = envelope
            .as_ref()
            .map_or_else(|| body.clone(), |err| err.message.clone());

        match status {
            401 => ApiError::NotAuthenticated,
            403 => ApiError::Forbidden(message),
            404 => ApiError::NotFound(message),
            409 if envelope
                .as_ref()
                .map_or(true, |err| err.is(APIError::MEETING_EXISTS)) =>
            {
                ApiError::Conflict(message)
            }
            _ => ApiError::ServerError {
                status,
                body: message,
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn maps_known_statuses() {
        assert!(matches!(
            ApiError::from_status(401, String::new()),
            ApiError::NotAuthenticated
        ));
        assert!(matches!(
            ApiError::from_status(403, "nope".into()),
            ApiError::Forbidden(body) if body == "nope"
        ));
        assert!(matches!(
            ApiError::from_status(404, "gone".into()),
            ApiError::NotFound(body) if body == "gone"
        ));
        assert!(matches!(
            ApiError::from_status(409, "taken".into()),
            ApiError::Conflict(body) if body == "taken"
        ));
    }

    #[test]
    fn error_envelope_supplies_the_message() {
        let body = r#"{"success":false,"result":{"code":"MEETING_NOT_FOUND","message":"Meeting 'standup' not found"}}"#;
        assert!(matches!(
            ApiError::from_status(404, body.into()),
            ApiError::NotFound(message) if message == "Meeting 'standup' not found"
        ));
    }

    #[test]
    fn conflict_requires_meeting_exists_code() {
        let exists = r#"{"success":false,"result":{"code":"MEETING_EXISTS","message":"taken"}}"#;
        assert!(matches!(
            ApiError::from_status(409, exists.into()),
            ApiError::Conflict(message) if message == "taken"
        ));

        let other = r#"{"success":false,"result":{"code":"MEETING_LOCKED","message":"locked"}}"#;
        assert!(matches!(
            ApiError::from_status(409, other.into()),
            ApiError::ServerError { status: 409, body } if body == "locked"
        ));
    }

    #[test]
    fn unknown_status_keeps_code_and_body() {
        match ApiError::from_status(502, "bad gateway".into()) {
            ApiError::ServerError { status, body } => {
                assert_eq!(status, 502);
                assert_eq!(body, "bad gateway");
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }
}
