// SPDX-License-Identifier: MIT OR Apache-2.0

use dioxus::prelude::*;

/// Shown instead of the router when `window.__APP_CONFIG` is unusable.
#[component]
pub fn ConfigError(message: String) -> Element {
    rsx! {
        div { class: "error-container config-error",
            h2 { "Configuration error" }
            p { class: "error-message", "{message}" }
            p {
                "The page must define "
                code { "window.__APP_CONFIG" }
                " with at least "
                code { "apiBaseUrl" }
                " and "
                code { "oauthEnabled" }
                " before the client loads."
            }
        }
    }
}
