use std::fs;
use std::path::PathBuf;
use tempfile::TempDir;

use fleetctx_core::config::{Config, DEFAULT_MAX_RESULTS};
use fleetctx_core::scope::{OrgTree, ScopeFilter, MAX_DEPTH};
use fleetctx_core::types::{Driver, OrgContext, Organization, OrganizationType, PermissionScope};
use fleetctx_core::FleetSnapshot;

fn org(id: &str, kind: OrganizationType, parent: Option<&str>) -> Organization {
    Organization {
        id: id.to_string(),
        name: format!("{} name", id),
        code: id.to_lowercase(),
        kind,
        parent_id: parent.map(str::to_string),
        is_active: true,
    }
}

fn chain_tree() -> OrgTree {
    OrgTree::new(vec![
        org("C1", OrganizationType::Company, None),
        org("D1", OrganizationType::Division, Some("C1")),
        org("Dept1", OrganizationType::Department, Some("D1")),
        org("T1", OrganizationType::Terminal, Some("Dept1")),
    ])
}

fn driver(id: &str, ctx: Option<OrgContext>) -> Driver {
    Driver { id: id.to_string(), first_name: id.to_string(), organizational_context: ctx, ..Default::default() }
}

fn ctx(company: &str, division: Option<&str>, department: Option<&str>, terminal: Option<&str>) -> OrgContext {
    OrgContext {
        company_id: Some(company.to_string()),
        division_id: division.map(str::to_string),
        department_id: department.map(str::to_string),
        terminal_id: terminal.map(str::to_string),
    }
}

fn fixture_path() -> PathBuf {
    // crates/fleetctx-core -> crates -> repo root
    PathBuf::from(env!("CARGO_MANIFEST_DIR")).ancestors().nth(2).unwrap().join("test_data/fleet.json")
}

#[test]
fn ancestor_chain_is_leaf_first_and_bounded() {
    let tree = chain_tree();
    let ids: Vec<&str> = tree.ancestor_chain("T1").iter().map(|o| o.id.as_str()).collect();
    assert_eq!(ids, vec!["T1", "Dept1", "D1", "C1"]);
    assert_eq!(tree.ancestor_chain("C1").len(), 1);
    assert!(tree.ancestor_chain("missing").is_empty());
}

#[test]
fn ancestor_chain_terminates_on_cycle() {
    let tree = OrgTree::new(vec![
        org("A", OrganizationType::Division, Some("B")),
        org("B", OrganizationType::Department, Some("A")),
    ]);
    assert_eq!(tree.ancestor_chain("A").len(), MAX_DEPTH);
}

#[test]
fn ancestor_chain_stops_at_dangling_parent() {
    let tree = OrgTree::new(vec![org("T9", OrganizationType::Terminal, Some("gone"))]);
    assert_eq!(tree.ancestor_chain("T9").len(), 1);
}

#[test]
fn build_filter_for_terminal_sets_every_level() {
    let filter = chain_tree().build_filter("T1");
    assert_eq!(
        filter,
        ScopeFilter {
            company_id: Some("C1".into()),
            division_id: Some("D1".into()),
            department_id: Some("Dept1".into()),
            terminal_id: Some("T1".into()),
        }
    );
}

#[test]
fn build_filter_for_company_sets_only_company() {
    let filter = chain_tree().build_filter("C1");
    assert_eq!(filter, ScopeFilter { company_id: Some("C1".into()), ..Default::default() });
}

#[test]
fn build_filter_for_unknown_node_is_empty() {
    let filter = chain_tree().build_filter("unknown-id");
    assert!(filter.is_empty());
    assert_eq!(serde_json::to_string(&filter).unwrap(), "{}");
}

#[test]
fn empty_filter_matches_everything() {
    let filter = ScopeFilter::default();
    assert!(filter.matches(None));
    assert!(filter.matches(Some(&OrgContext::default())));
    assert!(filter.matches(Some(&ctx("C9", Some("D9"), None, Some("T9")))));
}

#[test]
fn filter_is_permissive_for_missing_context_and_missing_levels() {
    let filter = chain_tree().build_filter("T1");
    assert!(filter.matches(None), "entity without a context stays visible");
    assert!(filter.matches(Some(&ctx("C1", Some("D1"), None, None))), "absent levels do not exclude");
    assert!(!filter.matches(Some(&ctx("C1", Some("D1"), Some("Dept1"), Some("T2")))));
    assert!(!filter.matches(Some(&ctx("C2", None, None, None))));
}

#[test]
fn apply_preserves_order_and_handles_empty_input() {
    let filter = chain_tree().build_filter("D1");
    let drivers = vec![
        driver("a", Some(ctx("C1", Some("D1"), Some("Dept1"), Some("T1")))),
        driver("b", Some(ctx("C1", Some("D2"), None, None))),
        driver("c", None),
        driver("d", Some(ctx("C1", None, None, None))),
    ];
    let kept: Vec<&str> = filter.apply(&drivers).iter().map(|d| d.id.as_str()).collect();
    assert_eq!(kept, vec!["a", "c", "d"]);

    let none: Vec<Driver> = Vec::new();
    assert!(filter.apply(&none).is_empty());
}

#[test]
fn hierarchy_navigation_helpers() {
    let snapshot = FleetSnapshot::load(&fixture_path()).expect("fixture");
    let tree = snapshot.org_tree();
    let parents: Vec<&str> = tree.parents("ORG004").iter().map(|o| o.id.as_str()).collect();
    assert_eq!(parents, vec!["ORG001", "ORG002", "ORG003"]);
    let children: Vec<&str> = tree.children("ORG003").iter().map(|o| o.id.as_str()).collect();
    assert_eq!(children, vec!["ORG004", "ORG005"]);
    assert_eq!(tree.by_type(OrganizationType::Division).len(), 2);
    assert_eq!(tree.data_scope(Some("ORG003")), PermissionScope::Department);
    assert_eq!(tree.data_scope(Some("nope")), PermissionScope::Own);
    assert_eq!(tree.data_scope(None), PermissionScope::Own);
}

#[test]
fn organization_type_levels() {
    assert_eq!(OrganizationType::Terminal.parent_type(), Some(OrganizationType::Department));
    assert_eq!(OrganizationType::Company.parent_type(), None);
    assert_eq!(OrganizationType::Terminal.child_type(), None);
    assert!(OrganizationType::Company < OrganizationType::Terminal);
}

#[test]
fn snapshot_scoped_view_for_dallas_terminal() {
    let snapshot = FleetSnapshot::load(&fixture_path()).expect("fixture");
    let filter = snapshot.org_tree().build_filter("ORG005");
    let view = snapshot.scoped(&filter);

    let drivers: Vec<&str> = view.drivers.iter().map(|d| d.id.as_str()).collect();
    // D003 sits under another division; D004 has no context at all.
    assert_eq!(drivers, vec!["D002", "D004"]);
    let trucks: Vec<&str> = view.trucks.iter().map(|t| t.id.as_str()).collect();
    assert_eq!(trucks, vec!["T002", "T003"], "T003 has no terminal and stays visible");
    assert_eq!(view.loads.len(), 2);
    assert_eq!(snapshot.view().len(), 12);
}

#[test]
fn snapshot_tolerates_missing_collections() {
    let snapshot = FleetSnapshot::from_json_str(r#"{"drivers":[{"id":"D1"}]}"#).expect("parse");
    assert_eq!(snapshot.drivers.len(), 1);
    assert!(snapshot.loads.is_empty());
    assert!(FleetSnapshot::from_json_str("not json").is_err());
}

#[test]
fn config_layers_env_file_over_base() {
    let tmp = TempDir::new().unwrap();
    let dir = tmp.path();
    fs::write(dir.join("config.toml"), "[data]\nsnapshot_path = \"data/fleet.json\"\n[search]\nmax_results = 20\n").unwrap();
    fs::write(dir.join("config.test.toml"), "[search]\nmax_results = 5\n[scope]\ndefault_org = \"ORG004\"\n").unwrap();

    let config = Config::load_for_env(dir, "test").expect("load");
    assert_eq!(config.search_settings().unwrap().max_results, 5);
    assert_eq!(config.default_org().unwrap().as_deref(), Some("ORG004"));
    assert_eq!(config.snapshot_path().unwrap(), dir.join("data/fleet.json"));

    let dev = Config::load_for_env(dir, "dev").expect("load dev");
    assert_eq!(dev.search_settings().unwrap().max_results, 20);
    assert_eq!(dev.default_org().unwrap(), None);
}

#[test]
fn config_defaults_without_files() {
    let tmp = TempDir::new().unwrap();
    let config = Config::load_for_env(tmp.path(), "test").expect("load");
    assert_eq!(config.search_settings().unwrap().max_results, DEFAULT_MAX_RESULTS);
    assert!(config.snapshot_path().is_err());
}

#[test]
fn config_rejects_zero_max_results() {
    let tmp = TempDir::new().unwrap();
    fs::write(tmp.path().join("config.toml"), "[search]\nmax_results = 0\n").unwrap();
    assert!(Config::load_for_env(tmp.path(), "prod").is_err());
}

#[test]
fn config_rejects_mistyped_settings() {
    let tmp = TempDir::new().unwrap();
    fs::write(tmp.path().join("config.toml"), "[search]\nmax_results = \"five\"\n").unwrap();
    let err = Config::load_for_env(tmp.path(), "prod").err().expect("mistyped max_results");
    assert!(err.to_string().contains("search"));

    fs::write(tmp.path().join("config.toml"), "[scope]\ndefault_org = 5\n").unwrap();
    assert!(Config::load_for_env(tmp.path(), "prod").is_err());
}
