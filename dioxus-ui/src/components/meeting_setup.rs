// SPDX-License-Identifier: MIT OR Apache-2.0

//! Pre-join setup: local preview with camera and microphone toggles.
//!
//! Joining stops the preview stream and hands the chosen
//! [`MediaPreferences`] to the caller, which completes setup on the session.

use dioxus::prelude::*;
use std::cell::RefCell;
use std::rc::Rc;
use videocall_meeting_session::CallHandle;
use wasm_bindgen::{JsCast, JsValue};
use wasm_bindgen_futures::JsFuture;
use web_sys::{HtmlVideoElement, MediaStream, MediaStreamConstraints, MediaStreamTrack};

use crate::context::MediaPreferences;

pub const PREVIEW_ELEMENT_ID: &str = "setup-preview";

/// The preview stream, plus whether the preview has been closed.
///
/// `getUserMedia` can resolve after Join or unmount; a stream that arrives
/// once `closed` is set is stopped on arrival instead of being kept.
#[derive(Default)]
struct PreviewState {
    stream: Option<MediaStream>,
    closed: bool,
}

impl PreviewState {
    /// Keep `stream`, or stop it straight away if the preview is closed.
    /// Returns whether it was kept.
    fn accept(&mut self, stream: MediaStream) -> bool {
        if self.closed {
            stop_tracks(&stream);
            return false;
        }
        self.stream = Some(stream);
        true
    }

    fn close(&mut self) {
        self.closed = true;
        if let Some(stream) = self.stream.take() {
            stop_tracks(&stream);
        }
    }
}

type StreamHolder = Rc<RefCell<PreviewState>>;

#[derive(Props, Clone, PartialEq)]
pub struct MeetingSetupProps {
    pub call: CallHandle,
    pub on_join: EventHandler<MediaPreferences>,
}

#[component]
pub fn MeetingSetup(props: MeetingSetupProps) -> Element {
    let mut preferences = use_signal(MediaPreferences::default);
    let mut preview_error = use_signal(|| None::<String>);
    let stream_holder: StreamHolder = use_hook(|| Rc::new(RefCell::new(PreviewState::default())));

    {
        let holder = stream_holder.clone();
        use_effect(move || {
            let holder = holder.clone();
            // Not tied to the component scope: the request must finish so
            // a late stream can still be stopped.
            wasm_bindgen_futures::spawn_local(async move {
                let result = open_preview().await;
                if holder.borrow().closed {
                    if let Ok(stream) = result {
                        log::debug!("Preview stream arrived after close, stopping it");
                        holder.borrow_mut().accept(stream);
                    }
                    return;
                }
                match result {
                    Ok(stream) => {
                        attach_preview(&stream);
                        apply_preferences(&stream, *preferences.peek());
                        holder.borrow_mut().accept(stream);
                    }
                    Err(e) => {
                        log::warn!("Camera preview unavailable: {e}");
                        preview_error.set(Some(e));
                    }
                }
            });
        });
    }

    {
        let holder = stream_holder.clone();
        use_drop(move || holder.borrow_mut().close());
    }

    let toggle_camera = {
        let holder = stream_holder.clone();
        move |_| {
            let enabled = !preferences.peek().camera_enabled;
            preferences.write().camera_enabled = enabled;
            if let Some(stream) = holder.borrow().stream.as_ref() {
                apply_preferences(stream, *preferences.peek());
            }
        }
    };

    let toggle_microphone = {
        let holder = stream_holder.clone();
        move |_| {
            let enabled = !preferences.peek().microphone_enabled;
            preferences.write().microphone_enabled = enabled;
            if let Some(stream) = holder.borrow().stream.as_ref() {
                apply_preferences(stream, *preferences.peek());
            }
        }
    };

    let join = {
        let holder = stream_holder.clone();
        let on_join = props.on_join;
        move |_| {
            holder.borrow_mut().close();
            on_join.call(*preferences.peek());
        }
    };

    let meeting = props.call.meeting();
    let host = meeting
        .host_display_name
        .clone()
        .unwrap_or_else(|| meeting.host.clone());
    let current = *preferences.read();

    rsx! {
        div { class: "meeting-setup-container",
            div { class: "meeting-setup card-apple",
                h2 { "Ready to join?" }
                p { class: "meeting-setup-title",
                    "Meeting "
                    strong { "{meeting.meeting_id}" }
                    " hosted by {host}"
                }
                div { class: "setup-preview",
                    video {
                        id: PREVIEW_ELEMENT_ID,
                        autoplay: true,
                        muted: true,
                        playsinline: true,
                        hidden: !current.camera_enabled,
                    }
                    if !current.camera_enabled {
                        div { class: "setup-preview-off", "Camera is off" }
                    }
                }
                if let Some(err) = preview_error.read().as_ref() {
                    p { class: "setup-preview-error", "Could not start preview: {err}" }
                }
                div { class: "setup-controls",
                    button {
                        class: "btn-apple btn-secondary toggle-camera",
                        aria_pressed: "{current.camera_enabled}",
                        onclick: toggle_camera,
                        if current.camera_enabled { "Turn camera off" } else { "Turn camera on" }
                    }
                    button {
                        class: "btn-apple btn-secondary toggle-microphone",
                        aria_pressed: "{current.microphone_enabled}",
                        onclick: toggle_microphone,
                        if current.microphone_enabled { "Mute microphone" } else { "Unmute microphone" }
                    }
                }
                button { class: "btn-apple btn-primary join-button", onclick: join, "Join meeting" }
            }
        }
    }
}

async fn open_preview() -> Result<MediaStream, String> {
    let media_devices = gloo_utils::window()
        .navigator()
        .media_devices()
        .map_err(|e| format!("{e:?}"))?;
    let constraints = MediaStreamConstraints::new();
    constraints.set_audio(&JsValue::TRUE);
    constraints.set_video(&JsValue::TRUE);
    let promise = media_devices
        .get_user_media_with_constraints(&constraints)
        .map_err(|e| format!("{e:?}"))?;
    let stream = JsFuture::from(promise)
        .await
        .map_err(|e| format!("{e:?}"))?;
    Ok(stream.unchecked_into())
}

fn attach_preview(stream: &MediaStream) {
    let video = gloo_utils::document()
        .get_element_by_id(PREVIEW_ELEMENT_ID)
        .and_then(|el| el.dyn_into::<HtmlVideoElement>().ok());
    if let Some(video) = video {
        video.set_src_object(Some(stream));
    }
}

fn apply_preferences(stream: &MediaStream, preferences: MediaPreferences) {
    for track in stream.get_video_tracks().iter() {
        track
            .unchecked_into::<MediaStreamTrack>()
            .set_enabled(preferences.camera_enabled);
    }
    for track in stream.get_audio_tracks().iter() {
        track
            .unchecked_into::<MediaStreamTrack>()
            .set_enabled(preferences.microphone_enabled);
    }
}

fn stop_tracks(stream: &MediaStream) {
    for track in stream.get_tracks().iter() {
        track.unchecked_into::<MediaStreamTrack>().stop();
    }
}
