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

//! Response types for the meeting API.
//!
//! Every endpoint returns an [`APIResponse<T>`] envelope:
//! - On success: `{ "success": true,  "result": <T> }`
//! - On failure: `{ "success": false, "result": <APIError> }`

use serde::{Deserialize, Serialize};

// ---------------------------------------------------------------------------
// Generic envelope
// ---------------------------------------------------------------------------

/// Top-level API response envelope.
#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct APIResponse<A: Serialize> {
    pub success: bool,
    pub result: A,
}

// ---------------------------------------------------------------------------
// Endpoint-specific response payloads
// ---------------------------------------------------------------------------

/// Response payload for `POST /api/v1/meetings` (201 Created).
#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct CreateMeetingResponse {
    pub meeting_id: String,
    pub host: String,
    /// Unix timestamp in seconds when the meeting was created.
    pub created_at: i64,
    pub state: String,
    pub attendees: Vec<String>,
    pub has_password: bool,
}

/// Response payload for `GET /api/v1/meetings/{meeting_id}`.
///
/// This is the call resource the browser resolves a meeting id into.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct MeetingInfoResponse {
    pub meeting_id: String,
    pub state: String,
    pub host: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub host_display_name: Option<String>,
    pub has_password: bool,
}

impl From<CreateMeetingResponse> for MeetingInfoResponse {
    /// A freshly created meeting has no display name for its host yet.
    fn from(created: CreateMeetingResponse) -> Self {
        Self {
            meeting_id: created.meeting_id,
            state: created.state,
            host: created.host,
            host_display_name: None,
            has_password: created.has_password,
        }
    }
}

/// Response payload for `GET /profile`.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct ProfileResponse {
    pub email: String,
    pub name: String,
}
