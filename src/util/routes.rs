//! Route classification table for the job portal.
//!
//! SYSTEM CONTEXT
//! ==============
//! The router owns which paths exist; this table only records which role a
//! path requires. Classifications are static at runtime: the gate receives
//! the table as configuration and never mutates it.

#[cfg(test)]
#[path = "routes_test.rs"]
mod routes_test;

use serde::{Deserialize, Serialize};

/// Required role for a family of paths.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum RouteClass {
    /// Renders unconditionally: landing, role selection, login, signup.
    Public,
    /// Job-seeker routes; everyone else is sent to the employer dashboard.
    SeekerOnly,
    /// Employer routes; everyone else is sent to the seeker home.
    EmployerOnly,
    /// Any logged-in user may render; the unauthenticated land on `/`.
    #[default]
    AnyAuthenticated,
}

/// One `(path, classification)` entry.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct RouteRule {
    pub path: String,
    /// Exact rules apply to the path alone; prefix rules also cover every
    /// path below them.
    #[serde(default)]
    pub exact: bool,
    pub class: RouteClass,
}

impl RouteRule {
    /// Rule matching `path` and everything below it.
    pub fn prefix(path: &str, class: RouteClass) -> Self {
        Self {
            path: path.to_owned(),
            exact: false,
            class,
        }
    }

    /// Rule matching `path` alone.
    pub fn exact(path: &str, class: RouteClass) -> Self {
        Self {
            path: path.to_owned(),
            exact: true,
            class,
        }
    }

    fn matches(&self, path: &str) -> bool {
        if self.exact {
            path == self.path
        } else {
            path.starts_with(self.path.as_str())
        }
    }
}

/// Ordered classification rules; the first matching rule wins and unmatched
/// paths fall back to [`RouteClass::AnyAuthenticated`].
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct RouteTable {
    pub rules: Vec<RouteRule>,
}

impl RouteTable {
    pub fn new(rules: Vec<RouteRule>) -> Self {
        Self { rules }
    }

    /// The portal's route families as the application shell registers them.
    pub fn portal() -> Self {
        Self::new(vec![
            RouteRule::exact("/", RouteClass::Public),
            RouteRule::prefix("/role", RouteClass::Public),
            RouteRule::prefix("/login", RouteClass::Public),
            RouteRule::prefix("/signup", RouteClass::Public),
            RouteRule::prefix("/employer", RouteClass::EmployerOnly),
            RouteRule::prefix("/jobs", RouteClass::SeekerOnly),
            RouteRule::prefix("/applied-jobs", RouteClass::SeekerOnly),
            RouteRule::prefix("/job-status", RouteClass::SeekerOnly),
            RouteRule::prefix("/interviews", RouteClass::SeekerOnly),
            RouteRule::prefix("/ats-checker", RouteClass::SeekerOnly),
            RouteRule::prefix("/jobseeker", RouteClass::SeekerOnly),
            RouteRule::exact("/mainpage", RouteClass::SeekerOnly),
        ])
    }

    /// Classification of `path`; unlisted paths require any logged-in user.
    pub fn classify(&self, path: &str) -> RouteClass {
        self.rules
            .iter()
            .find(|rule| rule.matches(path))
            .map_or(RouteClass::AnyAuthenticated, |rule| rule.class)
    }
}

impl Default for RouteTable {
    fn default() -> Self {
        Self::portal()
    }
}
