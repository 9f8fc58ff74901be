use super::*;

// =============================================================
// Portal table classification
// =============================================================

#[test]
fn landing_is_public_but_only_exactly() {
    let table = RouteTable::portal();
    assert_eq!(table.classify("/"), RouteClass::Public);
    assert_eq!(table.classify("/anything"), RouteClass::AnyAuthenticated);
}

#[test]
fn auth_entry_routes_are_public() {
    let table = RouteTable::portal();
    assert_eq!(table.classify("/role"), RouteClass::Public);
    assert_eq!(table.classify("/login/jobseeker"), RouteClass::Public);
    assert_eq!(table.classify("/login/employer"), RouteClass::Public);
    assert_eq!(table.classify("/signup/employer"), RouteClass::Public);
}

#[test]
fn employer_prefix_covers_all_employer_routes() {
    let table = RouteTable::portal();
    assert_eq!(table.classify("/employer"), RouteClass::EmployerOnly);
    assert_eq!(table.classify("/employer/dashboard"), RouteClass::EmployerOnly);
    assert_eq!(table.classify("/employer/job/9/edit"), RouteClass::EmployerOnly);
}

#[test]
fn seeker_prefixes_cover_all_seeker_routes() {
    let table = RouteTable::portal();
    for path in [
        "/jobs",
        "/applied-jobs",
        "/job-status/3",
        "/interviews",
        "/ats-checker",
        "/jobseeker/profile",
        "/mainpage",
    ] {
        assert_eq!(table.classify(path), RouteClass::SeekerOnly, "path {path}");
    }
}

#[test]
fn mainpage_rule_is_exact() {
    let table = RouteTable::portal();
    assert_eq!(table.classify("/mainpage"), RouteClass::SeekerOnly);
    assert_eq!(table.classify("/mainpage/extra"), RouteClass::AnyAuthenticated);
}

#[test]
fn unlisted_paths_require_any_authenticated_user() {
    let table = RouteTable::portal();
    assert_eq!(table.classify("/logout"), RouteClass::AnyAuthenticated);
    assert_eq!(table.classify("/apply/17"), RouteClass::AnyAuthenticated);
    assert_eq!(table.classify("/settings"), RouteClass::AnyAuthenticated);
}

// =============================================================
// Rule matching and ordering
// =============================================================

#[test]
fn first_matching_rule_wins() {
    let table = RouteTable::new(vec![
        RouteRule::exact("/admin/help", RouteClass::Public),
        RouteRule::prefix("/admin", RouteClass::EmployerOnly),
    ]);
    assert_eq!(table.classify("/admin/help"), RouteClass::Public);
    assert_eq!(table.classify("/admin/users"), RouteClass::EmployerOnly);
}

#[test]
fn empty_table_classifies_everything_any_authenticated() {
    let table = RouteTable::new(Vec::new());
    assert_eq!(table.classify("/"), RouteClass::AnyAuthenticated);
    assert_eq!(table.classify("/jobs"), RouteClass::AnyAuthenticated);
}

#[test]
fn default_table_is_the_portal_table() {
    assert_eq!(RouteTable::default(), RouteTable::portal());
}

// =============================================================
// Table as configuration
// =============================================================

#[test]
fn custom_table_deserializes_from_json() {
    let raw = r#"{
        "rules": [
            { "path": "/admin", "class": "employer-only" },
            { "path": "/welcome", "exact": true, "class": "public" }
        ]
    }"#;
    let table: RouteTable = serde_json::from_str(raw).expect("valid table json");
    assert_eq!(table.classify("/admin/users"), RouteClass::EmployerOnly);
    assert_eq!(table.classify("/welcome"), RouteClass::Public);
    assert_eq!(table.classify("/welcome/more"), RouteClass::AnyAuthenticated);
}

#[test]
fn table_serialization_round_trips() {
    let table = RouteTable::portal();
    let raw = serde_json::to_string(&table).expect("serializable table");
    let back: RouteTable = serde_json::from_str(&raw).expect("valid table json");
    assert_eq!(back, table);
}
