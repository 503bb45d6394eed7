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

//! Wire types for the meeting API as seen by the browser client.
//!
//! Only the endpoints the call-session lifecycle touches are modelled here:
//! session/profile for identity, and get/create for resolving a meeting id
//! into a call. No HTTP or UI framework types leak into this crate.

pub mod error;
pub mod requests;
pub mod responses;

pub use error::APIError;
pub use responses::APIResponse;
