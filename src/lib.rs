//! Access-gate layer for the job-portal client.
//!
//! SYSTEM CONTEXT
//! ==============
//! Job seekers and employers share one router; which routes each may see is
//! decided here, from the credential persisted at login and a static route
//! classification table. Pages, forms, and HTTP calls live elsewhere in the
//! client and only consume the decisions made by this crate.

pub mod components;
pub mod state;
pub mod util;

/// Initialize console logging for the browser build.
///
/// Called once from the hydrate entry point before the app mounts.
#[cfg(feature = "hydrate")]
pub fn init_log() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Debug);
}
