//! Injectable credential store backing the access gate.
//!
//! SYSTEM CONTEXT
//! ==============
//! Login and logout flows write through this store; the route guard and
//! navigation chrome only read it. Keeping it behind a trait lets tests and
//! SSR substitute an in-memory store for browser localStorage.

#[cfg(test)]
#[path = "credentials_test.rs"]
mod credentials_test;

use std::fmt;
use std::sync::{Arc, Mutex};

use crate::state::auth::Credential;
use crate::util::persistence;

/// localStorage key for the opaque login identifier.
///
/// Named "token" for interop with the existing login flow, although the
/// stored value is a bare ID rather than a bearer token.
pub const TOKEN_KEY: &str = "token";

/// localStorage key for the raw role string.
pub const ROLE_KEY: &str = "role";

/// Durable key-value persistence of the last successful login.
///
/// Not a security boundary: no encryption, no expiry, no network.
pub trait CredentialStore: Send + Sync {
    /// Read the stored credential. Never fails; absent entries yield `None`
    /// fields.
    fn load(&self) -> Credential;

    /// Overwrite both entries with a fresh login result.
    fn store(&self, identifier: &str, role: &str);

    /// Remove both entries (logout, account deletion).
    fn clear(&self);
}

/// Credential store backed by browser `localStorage`.
///
/// Reads and writes are best-effort: outside a browser (SSR, tests) every
/// operation is a no-op and `load` returns an empty credential.
#[derive(Clone, Copy, Debug, Default)]
pub struct BrowserCredentialStore;

impl CredentialStore for BrowserCredentialStore {
    fn load(&self) -> Credential {
        Credential {
            identifier: persistence::load_string(TOKEN_KEY),
            role: persistence::load_string(ROLE_KEY),
        }
    }

    fn store(&self, identifier: &str, role: &str) {
        persistence::save_string(TOKEN_KEY, identifier);
        persistence::save_string(ROLE_KEY, role);
    }

    fn clear(&self) {
        persistence::remove_key(TOKEN_KEY);
        persistence::remove_key(ROLE_KEY);
    }
}

/// In-memory credential store for tests and server-side rendering.
#[derive(Debug, Default)]
pub struct MemoryCredentialStore {
    entries: Mutex<Credential>,
}

impl CredentialStore for MemoryCredentialStore {
    fn load(&self) -> Credential {
        self.entries.lock().map(|c| c.clone()).unwrap_or_default()
    }

    fn store(&self, identifier: &str, role: &str) {
        if let Ok(mut entries) = self.entries.lock() {
            entries.identifier = Some(identifier.to_owned());
            entries.role = Some(role.to_owned());
        }
    }

    fn clear(&self) {
        if let Ok(mut entries) = self.entries.lock() {
            *entries = Credential::default();
        }
    }
}

/// Cloneable handle to a shared credential store, suitable for Leptos
/// context injection.
#[derive(Clone)]
pub struct Credentials(Arc<dyn CredentialStore>);

impl Credentials {
    /// Wrap any store implementation.
    pub fn new(store: Arc<dyn CredentialStore>) -> Self {
        Self(store)
    }

    /// Store backed by browser localStorage (no-op outside the browser).
    pub fn browser() -> Self {
        Self(Arc::new(BrowserCredentialStore))
    }

    /// Isolated in-memory store.
    pub fn in_memory() -> Self {
        Self(Arc::new(MemoryCredentialStore::default()))
    }

    /// Read the stored credential.
    pub fn load(&self) -> Credential {
        self.0.load()
    }

    /// Overwrite both entries with a fresh login result.
    pub fn store(&self, identifier: &str, role: &str) {
        self.0.store(identifier, role);
    }

    /// Remove both entries.
    pub fn clear(&self) {
        self.0.clear();
    }
}

impl fmt::Debug for Credentials {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("Credentials").finish()
    }
}
