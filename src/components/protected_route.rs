//! Route-level guard wrapping every authenticated page.
//!
//! SYSTEM CONTEXT
//! ==============
//! Mounted between the router and each guarded page. The wrapped view is a
//! closure, so a redirected page is never constructed and none of its data
//! fetching starts.

use leptos::either::Either;
use leptos::prelude::*;
use leptos_router::hooks::{use_location, use_navigate};

use crate::util::auth::{redirect_options, redirect_target};
use crate::util::credentials::Credentials;
use crate::util::gate::AccessGate;

/// Render `children` only when the access gate allows the current path for
/// the stored credential; otherwise issue a replace-navigation.
///
/// Expects an [`AccessGate`] and a [`Credentials`] handle in context,
/// provided once by the application shell.
#[component]
pub fn ProtectedRoute(children: ChildrenFn) -> impl IntoView {
    let gate = expect_context::<AccessGate>();
    let credentials = expect_context::<Credentials>();
    let pathname = use_location().pathname;
    let navigate = use_navigate();

    // Recomputed from storage on every location change; no cached session.
    let target = Memo::new(move |_| {
        redirect_target(&gate, &credentials.load(), &pathname.get())
    });

    Effect::new(move || {
        if let Some(target) = target.get() {
            #[cfg(feature = "hydrate")]
            log::debug!("protected route: redirect -> {target}");
            navigate(&target, redirect_options());
        }
    });

    move || match target.get() {
        None => Either::Left(children()),
        Some(_) => Either::Right(()),
    }
}
