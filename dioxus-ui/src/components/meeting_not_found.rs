// SPDX-License-Identifier: MIT OR Apache-2.0

use dioxus::prelude::*;

#[component]
pub fn MeetingNotFound(meeting_id: String) -> Element {
    rsx! {
        div { class: "status-container",
            div { class: "status-card card-apple meeting-not-found",
                h2 { "Meeting not found" }
                p { class: "status-message",
                    "There is no meeting called "
                    strong { "{meeting_id}" }
                    "."
                }
                a { class: "btn-apple btn-secondary", href: "/", "Return to Home" }
            }
        }
    }
}
