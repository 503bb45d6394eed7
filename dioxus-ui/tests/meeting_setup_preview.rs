// Copyright 2025 Security Union LLC
// Licensed under MIT OR Apache-2.0
//
// Tests for the setup preview's camera stream lifecycle.
//
// `getUserMedia` is replaced by a stub that resolves after a delay with a
// stream of fake tracks counting their `stop()` calls, so the tests can
// leave the setup screen while the request is still pending.

#![cfg(all(target_arch = "wasm32", not(target_os = "wasi")))]

mod support;

use support::{cleanup, click, create_mount_point, has, render_into, settle, yield_now};
use wasm_bindgen_test::*;

use dioxus::prelude::*;
use dioxus_ui::components::meeting_setup::MeetingSetup;
use videocall_meeting_session::CallHandle;
use videocall_meeting_types::responses::MeetingInfoResponse;

wasm_bindgen_test::wasm_bindgen_test_configure!(run_in_browser);

fn install_slow_user_media(delay_ms: u32) {
    js_sys::eval(&format!(
        r#"
        window.__stopped_tracks = 0;
        navigator.mediaDevices.getUserMedia = function() {{
            var track = function() {{
                return {{ enabled: true, stop: function() {{ window.__stopped_tracks++; }} }};
            }};
            var video = track();
            var audio = track();
            var stream = {{
                getTracks: function() {{ return [video, audio]; }},
                getVideoTracks: function() {{ return [video]; }},
                getAudioTracks: function() {{ return [audio]; }}
            }};
            return new Promise(function(resolve) {{
                setTimeout(function() {{ resolve(stream); }}, {delay_ms});
            }});
        }};
        "#
    ))
    .expect("failed to stub getUserMedia");
}

fn restore_user_media() {
    js_sys::eval("delete navigator.mediaDevices.getUserMedia; delete window.__stopped_tracks;")
        .expect("failed to restore getUserMedia");
}

fn stopped_tracks() -> u32 {
    js_sys::eval("window.__stopped_tracks")
        .unwrap()
        .as_f64()
        .unwrap_or(0.0) as u32
}

async fn sleep_ms(ms: i32) {
    let promise = js_sys::Promise::new(&mut |resolve, _| {
        gloo_utils::window()
            .set_timeout_with_callback_and_timeout_and_arguments_0(&resolve, ms)
            .unwrap();
    });
    wasm_bindgen_futures::JsFuture::from(promise).await.unwrap();
}

fn call() -> CallHandle {
    CallHandle::new(MeetingInfoResponse {
        meeting_id: "standup".to_string(),
        state: "active".to_string(),
        host: "alice@example.com".to_string(),
        host_display_name: Some("Alice".to_string()),
        has_password: false,
    })
}

/// Setup screen that can be taken away by the "hide" button.
#[component]
fn RemovableSetup() -> Element {
    let mut shown = use_signal(|| true);
    rsx! {
        button { class: "hide-setup", onclick: move |_| shown.set(false), "hide" }
        if shown() {
            MeetingSetup { call: call(), on_join: move |_| {} }
        }
    }
}

#[wasm_bindgen_test]
async fn stream_granted_after_join_is_stopped() {
    install_slow_user_media(200);

    let mount = create_mount_point();
    render_into(&mount, || rsx! { RemovableSetup {} });
    yield_now().await;

    click(&mount, ".join-button");
    sleep_ms(400).await;

    assert_eq!(stopped_tracks(), 2, "late preview tracks must be stopped");

    cleanup(&mount);
    restore_user_media();
}

#[wasm_bindgen_test]
async fn stream_granted_after_unmount_is_stopped() {
    install_slow_user_media(200);

    let mount = create_mount_point();
    render_into(&mount, || rsx! { RemovableSetup {} });
    yield_now().await;
    assert!(has(&mount, ".meeting-setup"));

    click(&mount, ".hide-setup");
    settle().await;
    assert!(!has(&mount, ".meeting-setup"));

    sleep_ms(400).await;
    assert_eq!(stopped_tracks(), 2, "tracks must not outlive the setup screen");

    cleanup(&mount);
    restore_user_media();
}
