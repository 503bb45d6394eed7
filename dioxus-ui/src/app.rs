// SPDX-License-Identifier: MIT OR Apache-2.0

//! App root: config check, context providers, router.

use dioxus::prelude::*;

use crate::components::config_error::ConfigError;
use crate::constants::{app_config, RuntimeConfig};
use crate::hooks::use_identity_provider;
use crate::meeting_api::ApiCallBackend;
use crate::routing::Route;

#[component]
pub fn App() -> Element {
    match app_config() {
        Ok(config) => rsx! {
            AppShell { config }
        },
        Err(e) => {
            log::error!("{e}");
            rsx! {
                ConfigError { message: e }
            }
        }
    }
}

#[component]
fn AppShell(config: RuntimeConfig) -> Element {
    use_context_provider(|| ApiCallBackend::from_config(&config));
    use_identity_provider(config.oauth_enabled());

    rsx! {
        Router::<Route> {}
    }
}
