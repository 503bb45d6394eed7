// SPDX-License-Identifier: MIT OR Apache-2.0

//! Provides the [`IdentityCtx`] for the whole app.

use dioxus::prelude::*;

use crate::auth::{check_session, get_user_profile, redirect_to_login};
use crate::context::{Identity, IdentityCtx};

/// Install the identity context at the app root.
///
/// With OAuth disabled the identity is loaded straight away. Otherwise it
/// loads once `/session` succeeds; a failed check sends the browser to the
/// login page and the identity stays pending.
pub fn use_identity_provider(oauth_enabled: bool) -> IdentityCtx {
    let mut identity = use_signal(|| {
        if oauth_enabled {
            Identity::default()
        } else {
            Identity::loaded()
        }
    });
    use_context_provider(|| identity);

    use_effect(move || {
        if !oauth_enabled {
            return;
        }
        spawn(async move {
            match check_session().await {
                Ok(()) => {
                    log::info!("Session valid, identity loaded");
                    identity.write().readiness.mark_loaded();
                    match get_user_profile().await {
                        Ok(profile) => identity.write().profile = Some(profile),
                        Err(e) => log::warn!("Failed to fetch profile: {e}"),
                    }
                }
                Err(e) => {
                    log::warn!("Session check failed: {e}");
                    redirect_to_login();
                }
            }
        });
    });

    identity
}
