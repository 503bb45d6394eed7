// SPDX-License-Identifier: MIT OR Apache-2.0

//! Context providers for the application
//!
//! Shared state that components reach through Dioxus's context system
//! instead of props drilling.

use dioxus::prelude::*;
use videocall_meeting_session::IdentityReadiness;

use crate::auth::UserProfile;
use crate::meeting_api::ApiCallBackend;

/// The call backend every meeting page resolves against.
pub type CallBackendCtx = ApiCallBackend;

// -----------------------------------------------------------------------------
// Identity Context
// -----------------------------------------------------------------------------

/// Who the local user is, as far as the client knows.
///
/// `readiness` only ever moves from pending to loaded. `profile` is filled in
/// afterwards when OAuth is enabled and is display-only.
#[derive(Clone, Debug, PartialEq, Default)]
pub struct Identity {
    pub readiness: IdentityReadiness,
    pub profile: Option<UserProfile>,
}

impl Identity {
    pub fn loaded() -> Self {
        Self {
            readiness: IdentityReadiness::loaded(),
            profile: None,
        }
    }

    pub fn is_loaded(&self) -> bool {
        self.readiness.is_loaded()
    }

    pub fn display_name(&self) -> Option<&str> {
        self.profile.as_ref().map(|p| p.name.as_str())
    }
}

pub type IdentityCtx = Signal<Identity>;

// -----------------------------------------------------------------------------
// Media preferences
// -----------------------------------------------------------------------------

/// Device choices made on the setup screen and carried into the call.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct MediaPreferences {
    pub camera_enabled: bool,
    pub microphone_enabled: bool,
}

impl Default for MediaPreferences {
    fn default() -> Self {
        Self {
            camera_enabled: true,
            microphone_enabled: true,
        }
    }
}
