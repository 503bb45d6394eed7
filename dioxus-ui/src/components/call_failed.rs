// SPDX-License-Identifier: MIT OR Apache-2.0

//! Error view for a meeting lookup that could not complete.

use dioxus::prelude::*;
use videocall_meeting_session::ResolveFailure;

#[derive(Props, Clone, PartialEq)]
pub struct CallFailedProps {
    pub reason: ResolveFailure,
    pub on_retry: EventHandler<()>,
}

#[component]
pub fn CallFailed(props: CallFailedProps) -> Element {
    let message = props.reason.to_string();
    let signed_out = props.reason == ResolveFailure::Unauthorized;
    let on_retry = props.on_retry;

    rsx! {
        div { class: "status-container",
            div { class: "status-card card-apple call-failed",
                h2 { "Unable to load meeting" }
                p { class: "status-message", "{message}" }
                if signed_out {
                    p { class: "status-detail", "Sign in again, then try once more." }
                }
                div { class: "status-actions",
                    button {
                        class: "btn-apple btn-primary retry-button",
                        onclick: move |_| on_retry.call(()),
                        "Try again"
                    }
                    a { class: "btn-apple btn-secondary", href: "/", "Return to Home" }
                }
            }
        }
    }
}
