#![cfg(unix)]

use hoptrace_testing::{TestWorld, assertions, fixtures};

fn world_with_runs(count: usize) -> TestWorld {
    let world = TestWorld::new()
        .with_fake_tool("traceroute", fixtures::LINUX_TRACE, 0)
        .unwrap();
    for _ in 0..count {
        let result = world.run(&["run", "traceroute", "example.com"]).unwrap();
        assert!(result.success(), "stderr: {}", result.stderr());
    }
    world
}

#[test]
fn test_empty_history() {
    let world = TestWorld::new();

    let json = world.run_json(&["history", "list"]).unwrap().json().unwrap();
    assertions::assert_run_count(&json, 0).unwrap();
    assertions::assert_badge_level(&json, "info").unwrap();
    assert_eq!(json["content"]["scope"], "history");
}

#[test]
fn test_list_is_newest_first_and_limited() {
    let world = world_with_runs(3);

    let json = world
        .run_json(&["history", "list", "--limit", "2"])
        .unwrap()
        .json()
        .unwrap();
    assertions::assert_run_count(&json, 2).unwrap();
    assert_eq!(json["content"]["runs"][0]["id"], 3);
    assert_eq!(json["content"]["runs"][1]["id"], 2);
}

#[test]
fn test_show_run() {
    let world = world_with_runs(1);

    let json = world
        .run_json(&["history", "show", "1"])
        .unwrap()
        .json()
        .unwrap();
    assert_eq!(json["content"]["id"], 1);
    assert_eq!(json["content"]["command"], "traceroute example.com");
    assertions::assert_hop_count(&json, 3).unwrap();
}

#[test]
fn test_show_missing_run_is_not_found() {
    let world = TestWorld::new();

    let result = world.run_json(&["history", "show", "99"]).unwrap();
    assert_eq!(result.code(), Some(2));

    let json = result.json().unwrap();
    assertions::assert_error_status(&json, "not_found").unwrap();
    assert_eq!(json["error"], "Request not found");
}

#[test]
fn test_delete_then_show() {
    let world = world_with_runs(2);

    let result = world.run_json(&["history", "delete", "1"]).unwrap();
    assert!(result.success());

    let result = world.run_json(&["history", "show", "1"]).unwrap();
    assert_eq!(result.code(), Some(2));

    let result = world.run_json(&["history", "delete", "1"]).unwrap();
    assertions::assert_error_status(&result.json().unwrap(), "not_found").unwrap();

    let json = world.run_json(&["history", "list"]).unwrap().json().unwrap();
    assertions::assert_run_count(&json, 1).unwrap();
}

#[test]
fn test_clear_reports_removed_count() {
    let world = world_with_runs(2);

    let json = world
        .run_json(&["history", "clear"])
        .unwrap()
        .json()
        .unwrap();
    assert_eq!(json["content"]["affected"], 2);

    let json = world.run_json(&["history", "list"]).unwrap().json().unwrap();
    assertions::assert_run_count(&json, 0).unwrap();
}
