// SPDX-License-Identifier: MIT OR Apache-2.0

pub mod call_failed;
pub mod config_error;
pub mod loader;
pub mod meeting_not_found;
pub mod meeting_room;
pub mod meeting_setup;
pub mod no_meeting;
