//! Credential and role model for the current browser user.
//!
//! SYSTEM CONTEXT
//! ==============
//! Used by the route guard and navigation chrome to coordinate role-based
//! redirects. The raw role string is parsed into [`Role`] here, at the
//! storage boundary, so nothing downstream branches on strings.

#[cfg(test)]
#[path = "auth_test.rs"]
mod auth_test;

use serde::{Deserialize, Serialize};

/// Marker substring identifying an employer role string.
pub const EMPLOYER_MARKER: &str = "employer";

/// Marker substring identifying a job-seeker role string.
pub const SEEKER_MARKER: &str = "JobSeeker";

/// The minimal stored proof of login: an opaque identifier plus the raw role
/// string, exactly as the login flow persisted them.
///
/// The identifier is not a bearer token; the backend consumes it as a bare ID
/// path segment. Absent fields mean "not logged in".
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Credential {
    pub identifier: Option<String>,
    pub role: Option<String>,
}

impl Credential {
    /// Credential as written by a successful login.
    pub fn new(identifier: impl Into<String>, role: impl Into<String>) -> Self {
        Self {
            identifier: Some(identifier.into()),
            role: Some(role.into()),
        }
    }

    /// Whether an identifier is present at all.
    pub fn is_logged_in(&self) -> bool {
        self.identifier.is_some()
    }

    /// Role under the authorization rule (see [`Role::resolve`]).
    pub fn role(&self) -> Role {
        Role::resolve(self.role.as_deref())
    }

    /// Role under the navigation-chrome rule (see [`Role::resolve_lenient`]).
    pub fn nav_role(&self) -> Role {
        Role::resolve_lenient(self.role.as_deref())
    }
}

/// Coarse user category controlling which routes are reachable.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum Role {
    Employer,
    Seeker,
    /// No credential, or a role string matching neither marker. The route
    /// guard treats this the same as "not logged in".
    #[default]
    None,
}

impl Role {
    /// Authorization rule: case-sensitive substring match on the literal
    /// markers written at login. No trimming, no normalization; anything that
    /// matches neither marker resolves to [`Role::None`].
    pub fn resolve(raw: Option<&str>) -> Self {
        match raw {
            Some(s) if s.contains(EMPLOYER_MARKER) => Self::Employer,
            Some(s) if s.contains(SEEKER_MARKER) => Self::Seeker,
            _ => Self::None,
        }
    }

    /// Navigation-chrome rule: anything that is not an employer counts as a
    /// seeker, never [`Role::None`]. Disagrees with [`Role::resolve`] for
    /// unrecognized strings; the two rules are kept separate on purpose (see
    /// DESIGN.md).
    pub fn resolve_lenient(raw: Option<&str>) -> Self {
        match raw {
            Some(s) if s.contains(EMPLOYER_MARKER) => Self::Employer,
            _ => Self::Seeker,
        }
    }
}
