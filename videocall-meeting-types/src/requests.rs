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

//! Request bodies sent by the client.

use serde::{Deserialize, Serialize};

/// Request body for `POST /api/v1/meetings`.
///
/// The browser only creates meetings on demand, for an id the user already
/// navigated to, so the id is always present.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct CreateMeetingRequest {
    pub meeting_id: Option<String>,

    #[serde(default)]
    pub attendees: Vec<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub password: Option<String>,
}

impl CreateMeetingRequest {
    /// An open meeting (no attendee list, no password) with a fixed id.
    pub fn with_id(meeting_id: &str) -> Self {
        Self {
            meeting_id: Some(meeting_id.to_string()),
            attendees: Vec::new(),
            password: None,
        }
    }
}
