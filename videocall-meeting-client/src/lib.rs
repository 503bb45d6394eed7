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

//! Cross-platform REST client for the videocall.rs meeting API.
//!
//! Works on WASM (browser), desktop, and mobile targets via [`reqwest`].
//! The browser meeting page uses it for two things: checking that the user's
//! identity is loaded, and resolving the meeting id from the route into a
//! meeting resource.
//!
//! # Example
//!
//! ```no_run
//! use videocall_meeting_client::{MeetingApiClient, AuthMode};
//!
//! # async fn example() -> Result<(), videocall_meeting_client::ApiError> {
//! // Browser: cookies are sent automatically
//! let client = MeetingApiClient::new("http://localhost:8081", AuthMode::Cookie);
//!
//! client.check_session().await?;
//! let meeting = client.get_or_create_meeting("standup-2024").await?;
//! println!("Meeting {} is {}", meeting.meeting_id, meeting.state);
//! # Ok(())
//! # }
//! ```

pub mod auth;
pub mod error;
pub mod meetings;

pub use error::ApiError;
pub use videocall_meeting_types;

use reqwest::Client;

/// How the client authenticates with the meeting API.
#[derive(Debug, Clone)]
pub enum AuthMode {
    /// Browser mode: send credentials (cookies) automatically via `fetch`.
    Cookie,
    /// Bearer token mode: attach `Authorization: Bearer <token>` to every
    /// request. Used by native tools and integration tests.
    Bearer(String),
}

/// A typed REST client for the videocall.rs meeting API.
///
/// All methods return strongly-typed responses from
/// [`videocall_meeting_types`] and map HTTP errors to [`ApiError`].
#[derive(Debug, Clone)]
pub struct MeetingApiClient {
    base_url: String,
    auth: AuthMode,
    http: Client,
}

impl MeetingApiClient {
    /// Create a new client pointing at the given meeting-api base URL.
    ///
    /// # Arguments
    ///
    /// * `base_url` - e.g. `"http://localhost:8081"`
    /// * `auth` - how to authenticate requests
    pub fn new(base_url: &str, auth: AuthMode) -> Self {
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            auth,
            http: Client::new(),
        }
    }

    /// Base URL with any trailing slash removed.
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Build a GET request with auth applied.
    pub(crate) fn get(&self, path: &str) -> reqwest::RequestBuilder {
        self.apply_auth(self.http.get(self.url(path)))
    }

    /// Build a POST request with auth applied.
    pub(crate) fn post(&self, path: &str) -> reqwest::RequestBuilder {
        self.apply_auth(self.http.post(self.url(path)))
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    fn apply_auth(&self, builder: reqwest::RequestBuilder) -> reqwest::RequestBuilder {
        match &self.auth {
            AuthMode::Cookie => {
                #[cfg(target_arch = "wasm32")]
                {
                    builder.fetch_credentials_include()
                }
                #[cfg(not(target_arch = "wasm32"))]
                {
                    builder
                }
            }
            AuthMode::Bearer(token) => {
                builder.header(reqwest::header::AUTHORIZATION, format!("Bearer {token}"))
            }
        }
    }
}

/// Parse a standard `APIResponse<T>` body, returning `T` on success or
/// mapping the error to [`ApiError`].
pub(crate) async fn parse_api_response<T: serde::de::DeserializeOwned + serde::Serialize>(
    response: reqwest::Response,
) -> Result<T, ApiError> {
    let status = response.status().as_u16();
    match status {
        200 | 201 => {
            let wrapper: videocall_meeting_types::responses::APIResponse<T> =
                response.json().await?;
            Ok(wrapper.result)
        }
        _ => {
            let text = response.text().await.unwrap_or_default();
            Err(ApiError::from_status(status, text))
        }
    }
}

/// Parse a response where we only care about the status code, not the body.
pub(crate) async fn parse_status_only(response: reqwest::Response) -> Result<(), ApiError> {
    let status = response.status().as_u16();
    match status {
        200..=299 => Ok(()),
        _ => {
            let text = response.text().await.unwrap_or_default();
            Err(ApiError::from_status(status, text))
        }
    }
}
