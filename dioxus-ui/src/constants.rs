// SPDX-License-Identifier: MIT OR Apache-2.0

//! Runtime configuration injected by the hosting page as `window.__APP_CONFIG`.

use serde::Deserialize;
use serde_wasm_bindgen::from_value as from_js_value;
use wasm_bindgen::JsValue;
use web_sys::window;

/// Lookup deadline used when the config does not set one.
pub const DEFAULT_CALL_LOOKUP_TIMEOUT_MS: u32 = 15_000;

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct RuntimeConfig {
    #[serde(rename = "apiBaseUrl")]
    pub api_base_url: String,
    #[serde(rename = "meetingApiBaseUrl")]
    #[serde(default)]
    pub meeting_api_base_url: Option<String>,
    #[serde(rename = "oauthEnabled")]
    pub oauth_enabled: String,
    /// Create the meeting when the route names one that does not exist yet.
    #[serde(rename = "createMissingMeetings")]
    #[serde(default)]
    pub create_missing_meetings: Option<String>,
    #[serde(rename = "callLookupTimeoutMs")]
    #[serde(default)]
    pub call_lookup_timeout_ms: Option<u32>,
}

impl RuntimeConfig {
    pub fn meeting_api_base_url(&self) -> String {
        self.meeting_api_base_url
            .clone()
            .filter(|url| !url.is_empty())
            .unwrap_or_else(|| self.api_base_url.clone())
    }

    pub fn oauth_enabled(&self) -> bool {
        truthy(Some(self.oauth_enabled.as_str()))
    }

    /// Defaults to on: a meeting link doubles as an invitation to start it.
    pub fn create_missing_meetings(&self) -> bool {
        self.create_missing_meetings
            .as_deref()
            .map_or(true, |value| truthy(Some(value)))
    }

    pub fn call_lookup_timeout_ms(&self) -> u32 {
        self.call_lookup_timeout_ms
            .filter(|ms| *ms > 0)
            .unwrap_or(DEFAULT_CALL_LOOKUP_TIMEOUT_MS)
    }

    pub fn meeting_api_client(&self) -> videocall_meeting_client::MeetingApiClient {
        videocall_meeting_client::MeetingApiClient::new(
            &self.meeting_api_base_url(),
            videocall_meeting_client::AuthMode::Cookie,
        )
    }
}

pub fn app_config() -> Result<RuntimeConfig, String> {
    let win = window().ok_or_else(|| "No browser window available".to_string())?;
    let config = js_sys::Reflect::get(&win, &JsValue::from_str("__APP_CONFIG"))
        .unwrap_or(JsValue::UNDEFINED);
    if config.is_undefined() || config.is_null() {
        return Err("Runtime configuration not found (window.__APP_CONFIG missing)".to_string());
    }
    from_js_value::<RuntimeConfig>(config)
        .map_err(|e| format!("Failed to parse __APP_CONFIG: {e:?}"))
}

/// `"true"` and `"1"` (any case) are on, everything else is off.
pub fn truthy(s: Option<&str>) -> bool {
    if let Some(s) = s {
        ["true", "1"].contains(&s.to_lowercase().as_str())
    } else {
        false
    }
}

pub fn call_lookup_timeout_ms() -> u32 {
    app_config()
        .map(|c| c.call_lookup_timeout_ms())
        .unwrap_or(DEFAULT_CALL_LOOKUP_TIMEOUT_MS)
}

pub fn meeting_api_base_url() -> Result<String, String> {
    app_config().map(|c| c.meeting_api_base_url())
}

pub fn login_url() -> Result<String, String> {
    meeting_api_base_url().map(|url| format!("{}/login", url))
}

pub fn meeting_api_client() -> Result<videocall_meeting_client::MeetingApiClient, String> {
    app_config().map(|c| c.meeting_api_client())
}
