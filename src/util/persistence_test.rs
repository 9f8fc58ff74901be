#![cfg(not(feature = "hydrate"))]

use super::*;

#[test]
fn load_string_is_none_in_non_hydrate_tests() {
    assert!(load_string("token").is_none());
}

#[test]
fn save_and_remove_are_noop_but_callable() {
    save_string("token", "42");
    assert!(load_string("token").is_none());
    remove_key("token");
    assert!(load_string("token").is_none());
}
