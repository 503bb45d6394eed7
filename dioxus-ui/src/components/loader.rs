// SPDX-License-Identifier: MIT OR Apache-2.0

use dioxus::prelude::*;

#[component]
pub fn Loader(message: Option<String>) -> Element {
    rsx! {
        div { class: "loader-container", role: "status", aria_live: "polite",
            div { class: "loader-spinner",
                div { class: "spinner-dot" }
                div { class: "spinner-dot" }
                div { class: "spinner-dot" }
            }
            if let Some(message) = message {
                p { class: "loader-message", "{message}" }
            }
        }
    }
}
