// SPDX-License-Identifier: MIT OR Apache-2.0

use dioxus::prelude::*;

/// Rendered when the route carries no meeting id.
#[component]
pub fn NoMeeting() -> Element {
    rsx! {
        div { class: "status-container",
            div { class: "status-card card-apple no-meeting",
                h2 { "No meeting selected" }
                p { class: "status-message",
                    "Open a meeting link to join a call."
                }
            }
        }
    }
}
