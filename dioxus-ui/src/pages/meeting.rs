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

//! The meeting page renders whichever view the session selects.

use dioxus::prelude::*;
use videocall_meeting_session::{MeetingId, View};

use crate::components::call_failed::CallFailed;
use crate::components::loader::Loader;
use crate::components::meeting_not_found::MeetingNotFound;
use crate::components::meeting_room::MeetingRoom;
use crate::components::meeting_setup::MeetingSetup;
use crate::components::no_meeting::NoMeeting;
use crate::context::MediaPreferences;
use crate::hooks::use_meeting_session;
use crate::routing::Route;

#[component]
pub fn MeetingPage(id: String) -> Element {
    match MeetingId::from_route(Some(&id)) {
        Ok(meeting_id) => rsx! {
            MeetingSessionView { meeting_id }
        },
        Err(e) => {
            log::debug!("Meeting route without a usable id: {e}");
            rsx! { NoMeeting {} }
        }
    }
}

/// `/meeting` with no id.
#[component]
pub fn MeetingIndex() -> Element {
    rsx! { NoMeeting {} }
}

#[component]
fn MeetingSessionView(meeting_id: MeetingId) -> Element {
    let session = use_meeting_session(meeting_id.clone());
    let mut preferences = use_signal(MediaPreferences::default);
    let navigator = use_navigator();

    match session.view() {
        View::NoMeeting => rsx! { NoMeeting {} },
        View::Loading => rsx! {
            Loader { message: "Loading meeting…".to_string() }
        },
        View::NotFound => rsx! {
            MeetingNotFound { meeting_id: meeting_id.to_string() }
        },
        View::Failed(reason) => rsx! {
            CallFailed { reason, on_retry: move |_| session.retry() }
        },
        View::Setup(call) => rsx! {
            MeetingSetup {
                call,
                on_join: move |choice: MediaPreferences| {
                    preferences.set(choice);
                    session.complete_setup();
                },
            }
        },
        View::InCall(call) => rsx! {
            MeetingRoom {
                call,
                preferences: preferences(),
                on_leave: move |_| {
                    navigator.push(Route::Home {});
                },
            }
        },
    }
}
