//! Shared access-gate helpers for route and chrome call sites.
//!
//! SYSTEM CONTEXT
//! ==============
//! Route components and the navigation chrome must apply identical redirect
//! behavior; both call through here so the decision logic lives in one place.

#[cfg(test)]
#[path = "auth_test.rs"]
mod auth_test;

use leptos::prelude::*;
use leptos_router::NavigateOptions;

use crate::state::auth::Credential;
use crate::util::credentials::Credentials;
use crate::util::gate::{AccessGate, GateDecision};

/// Replace-style navigation options used for every gate redirect, so guarded
/// pages never enter the history stack.
pub(crate) fn redirect_options() -> NavigateOptions {
    NavigateOptions {
        replace: true,
        ..NavigateOptions::default()
    }
}

/// Where the gate would send `credential` for `path`, if anywhere.
pub fn redirect_target(gate: &AccessGate, credential: &Credential, path: &str) -> Option<String> {
    match gate.evaluate(credential, path) {
        GateDecision::Render => None,
        GateDecision::Redirect { target, .. } => Some(target),
    }
}

/// Re-evaluate the gate on every location change and redirect whenever the
/// current path is not renderable for the stored credential.
///
/// Chrome-level counterpart of the `ProtectedRoute` component; both consume
/// [`redirect_target`].
pub fn install_access_redirect<F>(
    gate: AccessGate,
    credentials: Credentials,
    pathname: Memo<String>,
    navigate: F,
) where
    F: Fn(&str, NavigateOptions) + Clone + 'static,
{
    let navigate = navigate.clone();
    Effect::new(move || {
        let path = pathname.get();
        if let Some(target) = redirect_target(&gate, &credentials.load(), &path) {
            #[cfg(feature = "hydrate")]
            log::debug!("access gate: {path} -> {target}");
            navigate(&target, redirect_options());
        }
    });
}
