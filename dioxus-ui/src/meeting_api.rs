// SPDX-License-Identifier: MIT OR Apache-2.0

//! The meeting API as the session's call backend.

use videocall_meeting_client::{ApiError, MeetingApiClient};
use videocall_meeting_session::{CallBackend, CallHandle, MeetingId, ResolveFailure};

use crate::constants::RuntimeConfig;

/// Resolves meeting ids against the meeting REST API.
#[derive(Debug, Clone)]
pub struct ApiCallBackend {
    client: MeetingApiClient,
    create_missing: bool,
}

impl ApiCallBackend {
    pub fn new(client: MeetingApiClient, create_missing: bool) -> Self {
        Self {
            client,
            create_missing,
        }
    }

    pub fn from_config(config: &RuntimeConfig) -> Self {
        Self::new(config.meeting_api_client(), config.create_missing_meetings())
    }
}

impl CallBackend for ApiCallBackend {
    async fn resolve_or_create_call(
        &self,
        meeting_id: &MeetingId,
    ) -> Result<Option<CallHandle>, ResolveFailure> {
        let result = if self.create_missing {
            self.client.get_or_create_meeting(meeting_id.as_str()).await
        } else {
            self.client.get_meeting(meeting_id.as_str()).await
        };

        match result {
            Ok(info) => {
                log::info!(
                    "Meeting {} resolved: state={}, host={}",
                    info.meeting_id,
                    info.state,
                    info.host
                );
                Ok(Some(CallHandle::new(info)))
            }
            Err(ApiError::NotFound(_)) => Ok(None),
            Err(e) => Err(resolve_failure(e)),
        }
    }
}

/// Map client errors onto the session's failure reasons.
pub fn resolve_failure(error: ApiError) -> ResolveFailure {
    match error {
        ApiError::NotAuthenticated => ResolveFailure::Unauthorized,
        other => ResolveFailure::Backend(other.to_string()),
    }
}
