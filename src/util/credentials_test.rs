use super::*;

// =============================================================
// MemoryCredentialStore
// =============================================================

#[test]
fn memory_store_load_before_any_store_is_empty() {
    let store = MemoryCredentialStore::default();
    assert_eq!(store.load(), Credential::default());
}

#[test]
fn memory_store_round_trips_identifier_and_role() {
    let store = MemoryCredentialStore::default();
    store.store("42", "employer");
    let credential = store.load();
    assert_eq!(credential.identifier.as_deref(), Some("42"));
    assert_eq!(credential.role.as_deref(), Some("employer"));
}

#[test]
fn memory_store_overwrites_previous_login() {
    let store = MemoryCredentialStore::default();
    store.store("42", "employer");
    store.store("7", "JobSeeker");
    let credential = store.load();
    assert_eq!(credential.identifier.as_deref(), Some("7"));
    assert_eq!(credential.role.as_deref(), Some("JobSeeker"));
}

#[test]
fn memory_store_clear_removes_both_entries() {
    let store = MemoryCredentialStore::default();
    store.store("42", "employer");
    store.clear();
    let credential = store.load();
    assert!(credential.identifier.is_none());
    assert!(credential.role.is_none());
}

#[test]
fn memory_store_load_is_stable_without_writes() {
    let store = MemoryCredentialStore::default();
    store.store("7", "JobSeeker");
    assert_eq!(store.load(), store.load());
}

// =============================================================
// Credentials handle
// =============================================================

#[test]
fn handle_clones_share_one_store() {
    let credentials = Credentials::in_memory();
    let login_flow = credentials.clone();
    login_flow.store("42", "employer");
    assert_eq!(credentials.load().identifier.as_deref(), Some("42"));
    login_flow.clear();
    assert!(!credentials.load().is_logged_in());
}

// =============================================================
// BrowserCredentialStore (no browser available under test)
// =============================================================

#[cfg(not(feature = "hydrate"))]
#[test]
fn browser_store_is_empty_outside_the_browser() {
    let store = BrowserCredentialStore;
    store.store("42", "employer");
    assert_eq!(store.load(), Credential::default());
    store.clear();
    assert_eq!(store.load(), Credential::default());
}
