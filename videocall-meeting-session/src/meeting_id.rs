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

use std::fmt;

use crate::error::SessionError;

/// Opaque meeting identifier taken from the route.
///
/// The only check is that it is present and not blank; the value is
/// otherwise passed to the backend exactly as it appeared in the route.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct MeetingId(String);

impl MeetingId {
    /// Build an id from the route parameter, if there is one.
    pub fn from_route(param: Option<&str>) -> Result<Self, SessionError> {
        match param {
            Some(value) if !value.trim().is_empty() => Ok(Self(value.to_string())),
            _ => Err(SessionError::IdentifierMissing),
        }
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for MeetingId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<str> for MeetingId {
    fn as_ref(&self) -> &str {
        &self.0
    }
}
