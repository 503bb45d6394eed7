// SPDX-License-Identifier: MIT OR Apache-2.0

//! Authentication module
//!
//! Session validation and profile fetching via [`videocall_meeting_client`].
//! Together these decide when the user's identity counts as loaded.

use crate::constants::{login_url, meeting_api_client};
use anyhow::anyhow;
use videocall_meeting_types::responses::ProfileResponse;
use web_sys::window;

pub type UserProfile = ProfileResponse;

pub async fn check_session() -> anyhow::Result<()> {
    let client = meeting_api_client().map_err(|e| anyhow!("Config error: {e}"))?;
    client.check_session().await.map_err(|e| anyhow!("{e}"))
}

pub async fn get_user_profile() -> anyhow::Result<UserProfile> {
    let client = meeting_api_client().map_err(|e| anyhow!("Config error: {e}"))?;
    client.get_profile().await.map_err(|e| anyhow!("{e}"))
}

/// Send the browser to the login page, asking it to come back here.
pub fn redirect_to_login() {
    let Some(win) = window() else {
        return;
    };
    let login = match login_url() {
        Ok(url) => url,
        Err(e) => {
            log::error!("Cannot redirect to login: {e}");
            return;
        }
    };
    if let Ok(current_url) = win.location().href() {
        let target = format!("{login}?returnTo={}", urlencoding::encode(&current_url));
        let _ = win.location().set_href(&target);
    }
}
