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

//! Error payload carried by failed API responses.

use serde::{Deserialize, Serialize};

/// Structured error returned in the `result` field of a failed [`super::APIResponse`].
///
/// `code` is machine-readable (e.g. `"MEETING_NOT_FOUND"`), `message` is
/// suitable for display.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct APIError {
    pub code: String,

    pub message: String,

    /// Debug-level detail. Servers omit it in production.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub engineering_error: Option<String>,
}

impl APIError {
    /// Code the server uses when a meeting id is already taken.
    pub const MEETING_EXISTS: &'static str = "MEETING_EXISTS";

    /// Whether this payload carries the given machine-readable code.
    pub fn is(&self, code: &str) -> bool {
        self.code == code
    }
}

impl std::fmt::Display for APIError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "[{}] {}", self.code, self.message)
    }
}

impl std::error::Error for APIError {}
