// SPDX-License-Identifier: MIT OR Apache-2.0

//! Application route definitions.

use dioxus::prelude::*;

use crate::components::no_meeting::NoMeeting;
use crate::pages::meeting::{MeetingIndex, MeetingPage};

#[derive(Clone, Routable, PartialEq, Debug)]
pub enum Route {
    #[route("/", NoMeeting)]
    Home {},
    #[route("/meeting", MeetingIndex)]
    MeetingIndex {},
    #[route("/meeting/:id", MeetingPage)]
    Meeting { id: String },
    #[route("/:..segments")]
    NotFound { segments: Vec<String> },
}

/// Simple 404 page component.
#[component]
fn NotFound(segments: Vec<String>) -> Element {
    let path = format!("/{}", segments.join("/"));
    rsx! {
        div { class: "status-container",
            div { class: "status-card card-apple page-not-found",
                h1 { "404" }
                p { "Page not found: {path}" }
                a { href: "/", "Go Home" }
            }
        }
    }
}
