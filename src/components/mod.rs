//! Routing guard components.
//!
//! ARCHITECTURE
//! ============
//! Guard components own redirect orchestration and delegate the actual
//! decision to `util::gate`; they render nothing of their own.

pub mod protected_route;
