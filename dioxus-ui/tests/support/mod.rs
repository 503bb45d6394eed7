// Copyright 2025 Security Union LLC
// Licensed under MIT OR Apache-2.0
//
// Shared test harness for dioxus-ui component tests.
//
// Provides mount/cleanup helpers, runtime config injection, fetch mocking
// and Dioxus rendering helpers so that individual test files stay focused
// on assertions rather than boilerplate.
#![allow(dead_code)]

use dioxus::prelude::*;
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::JsFuture;

// ---------------------------------------------------------------------------
// DOM helpers
// ---------------------------------------------------------------------------

/// Create a fresh `<div>`, attach it to `<body>`, and return it.
pub fn create_mount_point() -> web_sys::Element {
    let document = gloo_utils::document();
    let div = document.create_element("div").unwrap();
    document.body().unwrap().append_child(&div).unwrap();
    div
}

/// Remove the mount-point from `<body>` so subsequent tests start clean.
pub fn cleanup(mount: &web_sys::Element) {
    gloo_utils::document()
        .body()
        .unwrap()
        .remove_child(mount)
        .ok();
}

pub fn has(mount: &web_sys::Element, selector: &str) -> bool {
    mount.query_selector(selector).unwrap().is_some()
}

pub fn click(mount: &web_sys::Element, selector: &str) {
    mount
        .query_selector(selector)
        .unwrap()
        .unwrap_or_else(|| panic!("{selector} not rendered"))
        .unchecked_into::<web_sys::HtmlElement>()
        .click();
}

/// Point the browser at `path` before the router reads it.
pub fn set_url(path: &str) {
    gloo_utils::window()
        .history()
        .unwrap()
        .push_state_with_url(&wasm_bindgen::JsValue::NULL, "", Some(path))
        .unwrap();
}

/// Start recording whether an element matching `selector` is ever inserted
/// under `mount`, even if a later render removes it again.
pub fn record_appearances(mount: &web_sys::Element, selector: &str) {
    let install = js_sys::Function::new_with_args(
        "mount, selector",
        r#"
        window.__appeared = window.__appeared || {};
        window.__appeared[selector] = false;
        new MutationObserver(function(records) {
            records.forEach(function(record) {
                record.addedNodes.forEach(function(node) {
                    if (node.nodeType === 1 &&
                        (node.matches(selector) || node.querySelector(selector))) {
                        window.__appeared[selector] = true;
                    }
                });
            });
        }).observe(mount, { childList: true, subtree: true });
        "#,
    );
    install
        .call2(&wasm_bindgen::JsValue::NULL, mount, &selector.into())
        .unwrap();
}

/// Whether `selector` was seen since [`record_appearances`] started.
pub fn appeared(selector: &str) -> bool {
    let seen = js_sys::eval("window.__appeared || {}").unwrap();
    js_sys::Reflect::get(&seen, &selector.into())
        .unwrap()
        .as_bool()
        .unwrap_or(false)
}

// ---------------------------------------------------------------------------
// Dioxus rendering helper
// ---------------------------------------------------------------------------

/// Render a Dioxus component into the given mount element.
///
/// ```ignore
/// let mount = create_mount_point();
/// render_into(&mount, || rsx! { MyComponent { prop: "value" } });
/// yield_now().await;
/// // assert on mount.query_selector(...)
/// cleanup(&mount);
/// ```
pub fn render_into(mount: &web_sys::Element, root: fn() -> Element) {
    let cfg = dioxus::web::Config::new().rootelement(mount.clone());
    dioxus::web::launch::launch_virtual_dom(VirtualDom::new(root), cfg);
}

/// Yield to the browser event loop so Dioxus can process its mutations.
pub async fn yield_now() {
    for _ in 0..2 {
        let promise = js_sys::Promise::new(&mut |resolve, _| {
            // requestAnimationFrame fires after the current microtask queue is
            // drained and before the next paint.
            gloo_utils::window()
                .request_animation_frame(&resolve)
                .unwrap();
        });
        JsFuture::from(promise).await.unwrap();
    }
}

/// Wait for mocked fetches to resolve and the resulting re-render to land.
pub async fn settle() {
    yield_now().await;
    let promise = js_sys::Promise::new(&mut |resolve, _| {
        gloo_utils::window()
            .set_timeout_with_callback_and_timeout_and_arguments_0(&resolve, 100)
            .unwrap();
    });
    JsFuture::from(promise).await.unwrap();
    yield_now().await;
}

// ---------------------------------------------------------------------------
// Runtime config injection
// ---------------------------------------------------------------------------

/// Inject a `window.__APP_CONFIG` with OAuth disabled.
pub fn inject_app_config(create_missing_meetings: bool) {
    let config = js_sys::Object::new();
    let set = |key: &str, val: &wasm_bindgen::JsValue| {
        js_sys::Reflect::set(&config, &key.into(), val).unwrap();
    };
    set("apiBaseUrl", &"http://test:8080".into());
    set("oauthEnabled", &"false".into());
    set(
        "createMissingMeetings",
        &create_missing_meetings.to_string().into(),
    );
    set("callLookupTimeoutMs", &wasm_bindgen::JsValue::from(2000));

    let frozen = js_sys::Object::freeze(&config);
    let window = gloo_utils::window();
    js_sys::Reflect::set(&window, &"__APP_CONFIG".into(), &frozen).unwrap();
}

/// Remove `window.__APP_CONFIG` so tests don't leak state.
pub fn remove_app_config() {
    let window = gloo_utils::window();
    let _ = js_sys::Reflect::delete_property(&window.into(), &"__APP_CONFIG".into());
}

// ---------------------------------------------------------------------------
// Fetch mocking
// ---------------------------------------------------------------------------

pub const MEETING_INFO_JSON: &str = r#"{"success":true,"result":{"meeting_id":"standup","state":"active","host":"alice@example.com","host_display_name":"Alice","has_password":false}}"#;

pub const CREATED_MEETING_JSON: &str = r#"{"success":true,"result":{"meeting_id":"standup","host":"bob@example.com","created_at":1700000000,"state":"idle","attendees":[],"has_password":false}}"#;

/// Answer every GET with `get` and every POST with `post`, each given as
/// `(status, body)`. Requests are counted in `window.__fetch_calls`.
pub fn mock_fetch(get: (u16, &str), post: (u16, &str)) {
    let script = format!(
        r#"
        window.__original_fetch = window.__original_fetch || window.fetch;
        window.__fetch_calls = [];
        window.fetch = function(input, init) {{
            var url = typeof input === 'string' ? input : input.url;
            var method = (init && init.method) || (typeof input === 'string' ? 'GET' : input.method);
            window.__fetch_calls.push(method + ' ' + url);
            var reply = method === 'POST' ? [{post_status}, {post_body:?}] : [{get_status}, {get_body:?}];
            var resp = new Response(reply[1], {{
                status: reply[0],
                headers: {{ 'Content-Type': 'application/json' }}
            }});
            Object.defineProperty(resp, 'url', {{ value: url }});
            return Promise.resolve(resp);
        }};
        "#,
        get_status = get.0,
        get_body = get.1,
        post_status = post.0,
        post_body = post.1,
    );
    js_sys::eval(&script).expect("failed to mock fetch");
}

/// Accept every request and never answer, so lookups stay in flight.
pub fn mock_fetch_pending() {
    js_sys::eval(
        r#"
        window.__original_fetch = window.__original_fetch || window.fetch;
        window.__fetch_calls = [];
        window.fetch = function(input, init) {
            var url = typeof input === 'string' ? input : input.url;
            var method = (init && init.method) || (typeof input === 'string' ? 'GET' : input.method);
            window.__fetch_calls.push(method + ' ' + url);
            return new Promise(function() {});
        };
        "#,
    )
    .expect("failed to mock pending fetch");
}

/// Requests seen by the mock since it was installed, as `"METHOD url"`.
pub fn fetch_calls() -> Vec<String> {
    let calls = js_sys::eval("window.__fetch_calls || []").unwrap();
    js_sys::Array::from(&calls)
        .iter()
        .filter_map(|v| v.as_string())
        .collect()
}

pub fn restore_fetch() {
    js_sys::eval(
        r#"
        if (window.__original_fetch) {
            window.fetch = window.__original_fetch;
            delete window.__original_fetch;
        }
        delete window.__fetch_calls;
        "#,
    )
    .expect("failed to restore fetch");
}
