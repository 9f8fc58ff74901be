//! The access gate: role-based authorization for route rendering.
//!
//! SYSTEM CONTEXT
//! ==============
//! Both the route guard and the navigation chrome consume this one decision
//! function, so redirect behavior cannot drift between call sites. The gate
//! never touches the network; it is a pure function of the stored credential,
//! the requested path, and the static route table, recomputed fresh on every
//! navigation.

#[cfg(test)]
#[path = "gate_test.rs"]
mod gate_test;

use serde::{Deserialize, Serialize};

use crate::state::auth::{Credential, Role};
use crate::util::routes::{RouteClass, RouteTable};

/// Why a redirect was issued. Informational only; every reason is handled by
/// navigation, never surfaced to the user as an error.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RedirectReason {
    /// No identifier in storage; treated as not logged in.
    MissingCredential,
    /// A credential is present but its role string matches no known marker.
    UnrecognizedRole,
    /// A recognized role requested a route reserved for the other role.
    WrongRole,
}

/// Outcome of one gate evaluation.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum GateDecision {
    /// Mount the requested view.
    Render,
    /// Navigate to `target` instead; the requested view must never mount.
    Redirect {
        target: String,
        reason: RedirectReason,
    },
}

impl GateDecision {
    pub fn is_render(&self) -> bool {
        matches!(self, Self::Render)
    }

    fn redirect(target: &str, reason: RedirectReason) -> Self {
        Self::Redirect {
            target: target.to_owned(),
            reason,
        }
    }
}

/// Route table plus the three fixed redirect destinations, as supplied by
/// the application shell.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct AccessGate {
    pub table: RouteTable,
    /// Where the unauthenticated land.
    pub landing: String,
    /// Seeker home; also where non-employers bounced off employer routes go.
    pub seeker_home: String,
    /// Employer dashboard; also where non-seekers bounced off seeker routes
    /// go.
    pub employer_home: String,
}

impl Default for AccessGate {
    fn default() -> Self {
        Self {
            table: RouteTable::portal(),
            landing: "/".to_owned(),
            seeker_home: "/mainpage".to_owned(),
            employer_home: "/employer/dashboard".to_owned(),
        }
    }
}

impl AccessGate {
    /// Decide whether `path` may render for `credential`.
    ///
    /// There is no cached session: two evaluations with unchanged storage
    /// always agree.
    pub fn evaluate(&self, credential: &Credential, path: &str) -> GateDecision {
        let class = self.table.classify(path);

        // Public routes render unconditionally, logged in or not.
        if class == RouteClass::Public {
            return GateDecision::Render;
        }

        if !credential.is_logged_in() {
            return GateDecision::redirect(&self.landing, RedirectReason::MissingCredential);
        }

        let role = credential.role();
        let reason = if role == Role::None {
            RedirectReason::UnrecognizedRole
        } else {
            RedirectReason::WrongRole
        };

        match class {
            RouteClass::EmployerOnly if role != Role::Employer => {
                GateDecision::redirect(&self.seeker_home, reason)
            }
            RouteClass::SeekerOnly if role != Role::Seeker => {
                GateDecision::redirect(&self.employer_home, reason)
            }
            _ => GateDecision::Render,
        }
    }

    /// Home destination for navigation chrome.
    ///
    /// Uses the lenient role rule: any logged-in non-employer is pointed at
    /// the seeker home, even when the strict rule would resolve no role.
    pub fn home_route(&self, credential: &Credential) -> &str {
        if !credential.is_logged_in() {
            return &self.landing;
        }
        match credential.nav_role() {
            Role::Employer => &self.employer_home,
            _ => &self.seeker_home,
        }
    }
}
