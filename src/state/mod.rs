//! Client-side state models shared by guard and chrome code.
//!
//! SYSTEM CONTEXT
//! ==============
//! State modules hold plain data types with no browser or framework
//! dependencies so they stay testable on any target.

pub mod auth;
