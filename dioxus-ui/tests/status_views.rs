// Copyright 2025 Security Union LLC
// Licensed under MIT OR Apache-2.0
//
// Rendering tests for the views a meeting page shows before the call.

#![cfg(all(target_arch = "wasm32", not(target_os = "wasi")))]

mod support;

use std::cell::Cell;

use support::{cleanup, click, create_mount_point, has, render_into, yield_now};
use wasm_bindgen_test::*;

use dioxus::prelude::*;
use dioxus_ui::components::call_failed::CallFailed;
use dioxus_ui::components::loader::Loader;
use dioxus_ui::components::meeting_not_found::MeetingNotFound;
use dioxus_ui::components::no_meeting::NoMeeting;
use videocall_meeting_session::ResolveFailure;

wasm_bindgen_test::wasm_bindgen_test_configure!(run_in_browser);

thread_local! {
    static RETRIES: Cell<u32> = const { Cell::new(0) };
}

#[wasm_bindgen_test]
async fn loader_shows_message() {
    let mount = create_mount_point();
    render_into(&mount, || {
        rsx! { Loader { message: "Loading meeting…".to_string() } }
    });
    yield_now().await;

    assert!(has(&mount, ".loader-spinner"));
    let text = mount.text_content().unwrap_or_default();
    assert!(text.contains("Loading meeting"), "message missing: {text}");

    cleanup(&mount);
}

#[wasm_bindgen_test]
async fn no_meeting_explains_what_to_do() {
    let mount = create_mount_point();
    render_into(&mount, || rsx! { NoMeeting {} });
    yield_now().await;

    let text = mount.text_content().unwrap_or_default();
    assert!(text.contains("No meeting selected"));

    cleanup(&mount);
}

#[wasm_bindgen_test]
async fn not_found_names_the_meeting() {
    let mount = create_mount_point();
    render_into(&mount, || {
        rsx! { MeetingNotFound { meeting_id: "standup".to_string() } }
    });
    yield_now().await;

    assert!(has(&mount, ".meeting-not-found"));
    let text = mount.text_content().unwrap_or_default();
    assert!(text.contains("Meeting not found"));
    assert!(text.contains("standup"));
    assert!(!has(&mount, ".retry-button"), "not found must not offer retry");

    cleanup(&mount);
}

#[wasm_bindgen_test]
async fn failure_offers_retry() {
    RETRIES.with(|r| r.set(0));
    let mount = create_mount_point();
    render_into(&mount, || {
        rsx! {
            CallFailed {
                reason: ResolveFailure::TimedOut,
                on_retry: move |_| RETRIES.with(|r| r.set(r.get() + 1)),
            }
        }
    });
    yield_now().await;

    let text = mount.text_content().unwrap_or_default();
    assert!(text.contains("did not respond in time"), "reason missing: {text}");

    click(&mount, ".retry-button");
    yield_now().await;
    assert_eq!(RETRIES.with(|r| r.get()), 1);

    cleanup(&mount);
}

#[wasm_bindgen_test]
async fn unauthorized_failure_asks_to_sign_in() {
    let mount = create_mount_point();
    render_into(&mount, || {
        rsx! {
            CallFailed { reason: ResolveFailure::Unauthorized, on_retry: move |_| {} }
        }
    });
    yield_now().await;

    let text = mount.text_content().unwrap_or_default();
    assert!(text.contains("Sign in again"), "sign-in hint missing: {text}");

    cleanup(&mount);
}
