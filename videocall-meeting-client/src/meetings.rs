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

//! Meeting lookup endpoints: get, create, and the get-or-create combination
//! used to resolve a route's meeting id into a call.

use videocall_meeting_types::{
    requests::CreateMeetingRequest,
    responses::{CreateMeetingResponse, MeetingInfoResponse},
};

use crate::error::ApiError;
use crate::{parse_api_response, MeetingApiClient};

impl MeetingApiClient {
    /// Create a new meeting. The authenticated user becomes the host.
    ///
    /// Calls `POST /api/v1/meetings`.
    pub async fn create_meeting(
        &self,
        request: &CreateMeetingRequest,
    ) -> Result<CreateMeetingResponse, ApiError> {
        let response = self.post("/api/v1/meetings").json(request).send().await?;
        parse_api_response(response).await
    }

    /// Get information about a specific meeting.
    ///
    /// Calls `GET /api/v1/meetings/{meeting_id}`.
    pub async fn get_meeting(&self, meeting_id: &str) -> Result<MeetingInfoResponse, ApiError> {
        let path = meeting_path(meeting_id);
        let response = self.get(&path).send().await?;
        parse_api_response(response).await
    }

    /// Look a meeting up, creating it with this id if it does not exist yet.
    ///
    /// A `409` from the create call means somebody else created the meeting
    /// between our two requests; the meeting is read again in that case.
    pub async fn get_or_create_meeting(
        &self,
        meeting_id: &str,
    ) -> Result<MeetingInfoResponse, ApiError> {
        match self.get_meeting(meeting_id).await {
            Err(ApiError::NotFound(_)) => {}
            other => return other,
        }

        log::info!("Meeting {meeting_id} does not exist, creating it");
        match self
            .create_meeting(&CreateMeetingRequest::with_id(meeting_id))
            .await
        {
            Ok(created) => Ok(created.into()),
            Err(ApiError::Conflict(_)) => {
                log::info!("Meeting {meeting_id} was created concurrently, reading it back");
                self.get_meeting(meeting_id).await
            }
            Err(e) => Err(e),
        }
    }
}

/// Path of a single meeting resource. The id is opaque, so it is
/// percent-encoded as one path segment.
fn meeting_path(meeting_id: &str) -> String {
    format!("/api/v1/meetings/{}", urlencoding::encode(meeting_id))
}

#[cfg(test)]
mod tests {
    use super::meeting_path;

    #[test]
    fn plain_ids_are_untouched() {
        assert_eq!(meeting_path("standup-2024"), "/api/v1/meetings/standup-2024");
    }

    #[test]
    fn reserved_characters_stay_inside_the_segment() {
        assert_eq!(meeting_path("a/b?c"), "/api/v1/meetings/a%2Fb%3Fc");
        assert_eq!(meeting_path("team sync"), "/api/v1/meetings/team%20sync");
    }
}
