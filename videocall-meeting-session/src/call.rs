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

use std::sync::Arc;

use videocall_meeting_types::responses::MeetingInfoResponse;

/// Reference to a resolved call resource.
///
/// The session only stores and hands out handles; reading the meeting behind
/// one is left to the in-call rendering. Clones share the same resource.
#[derive(Debug, Clone, PartialEq)]
pub struct CallHandle {
    meeting: Arc<MeetingInfoResponse>,
}

impl CallHandle {
    pub fn new(meeting: MeetingInfoResponse) -> Self {
        Self {
            meeting: Arc::new(meeting),
        }
    }

    /// The meeting resource this handle refers to.
    pub fn meeting(&self) -> &MeetingInfoResponse {
        &self.meeting
    }
}

impl From<MeetingInfoResponse> for CallHandle {
    fn from(meeting: MeetingInfoResponse) -> Self {
        Self::new(meeting)
    }
}
