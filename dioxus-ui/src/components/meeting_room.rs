// SPDX-License-Identifier: MIT OR Apache-2.0

//! In-call surface for a resolved meeting.

use dioxus::prelude::*;
use videocall_meeting_session::CallHandle;

use crate::context::{IdentityCtx, MediaPreferences};

#[derive(Props, Clone, PartialEq)]
pub struct MeetingRoomProps {
    pub call: CallHandle,
    pub preferences: MediaPreferences,
    pub on_leave: EventHandler<()>,
}

#[component]
pub fn MeetingRoom(props: MeetingRoomProps) -> Element {
    let identity = try_use_context::<IdentityCtx>();
    let mut display_name = "You".to_string();
    if let Some(identity) = identity {
        if let Some(name) = identity.read().display_name() {
            display_name = name.to_string();
        }
    }

    let on_leave = props.on_leave;
    let meeting = props.call.meeting();
    let host = meeting
        .host_display_name
        .clone()
        .unwrap_or_else(|| meeting.host.clone());
    let camera = if props.preferences.camera_enabled {
        "Camera on"
    } else {
        "Camera off"
    };
    let microphone = if props.preferences.microphone_enabled {
        "Microphone on"
    } else {
        "Muted"
    };

    rsx! {
        div { class: "meeting-room", "data-meeting-id": "{meeting.meeting_id}",
            header { class: "meeting-room-header",
                h2 { class: "meeting-room-title", "{meeting.meeting_id}" }
                span { class: "meeting-room-host", "Host: {host}" }
                if meeting.has_password {
                    span { class: "meeting-room-locked", "Password protected" }
                }
            }
            div { class: "meeting-room-stage",
                div { class: "peer-tile local-peer",
                    span { class: "peer-name", "{display_name}" }
                    span { class: "peer-camera", "{camera}" }
                    span { class: "peer-microphone", "{microphone}" }
                }
            }
            footer { class: "meeting-room-controls",
                button {
                    class: "btn-apple btn-danger leave-button",
                    onclick: move |_| on_leave.call(()),
                    "Leave meeting"
                }
            }
        }
    }
}
