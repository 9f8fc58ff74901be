//! Utility helpers shared across client modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Utility modules isolate browser/environment concerns from routing and
//! chrome logic to improve reuse and testability.

pub mod auth;
pub mod credentials;
pub mod gate;
pub mod persistence;
pub mod routes;
