#![cfg(unix)]

use hoptrace_testing::{TestWorld, assertions, fixtures};

#[test]
fn test_paths_run_builds_tree() {
    let world = TestWorld::new()
        .with_fake_tool("traceroute", fixtures::LINUX_TRACE, 0)
        .unwrap();
    let result = world.run_json(&["paths", "run", "traceroute", "example.com"]).unwrap();
    assert!(result.success(), "stderr: {}", result.stderr());
    assert_eq!(result.json().unwrap()["content"]["saved_as"], 1);

    let world = world
        .with_fake_tool("traceroute", fixtures::LINUX_TRACE_ALT, 0)
        .unwrap();
    let result = world.run(&["paths", "run", "traceroute", "example.com"]).unwrap();
    assert!(result.success());
    assert!(result.stdout().contains("hoptrace paths history show 2"));

    let json = world.run_json(&["paths", "tree"]).unwrap().json().unwrap();
    let target = assertions::find_path_target(&json, "example.com").unwrap();
    assert_eq!(target["depth"], 3);
    assert_eq!(target["branching_hops"], serde_json::json!([1]));
    assert_eq!(
        target["hops"][0]["ips"],
        serde_json::json!(["192.168.1.1", "192.168.1.254"])
    );

    let summary = world
        .run_json(&["paths", "tree", "--summary"])
        .unwrap()
        .json()
        .unwrap();
    let target = assertions::find_path_target(&summary, "example.com").unwrap();
    assert!(target.get("hops").is_none());
}

#[test]
fn test_paths_runs_stay_out_of_history() {
    let world = TestWorld::new()
        .with_fake_tool("traceroute", fixtures::LINUX_TRACE, 0)
        .unwrap();
    world.run(&["paths", "run", "traceroute", "example.com"]).unwrap();

    let history = world.run_json(&["history", "list"]).unwrap().json().unwrap();
    assertions::assert_run_count(&history, 0).unwrap();

    let paths = world
        .run_json(&["paths", "history", "list"])
        .unwrap()
        .json()
        .unwrap();
    assertions::assert_run_count(&paths, 1).unwrap();
    assert_eq!(paths["content"]["scope"], "paths");
}

#[test]
fn test_path_history_clear_keeps_tree() {
    let world = TestWorld::new()
        .with_fake_tool("traceroute", fixtures::LINUX_TRACE, 0)
        .unwrap();
    world.run(&["paths", "run", "traceroute", "example.com"]).unwrap();

    let json = world
        .run_json(&["paths", "history", "clear"])
        .unwrap()
        .json()
        .unwrap();
    assert_eq!(json["content"]["affected"], 1);

    let tree = world.run_json(&["paths", "tree"]).unwrap().json().unwrap();
    assert!(assertions::find_path_target(&tree, "example.com").is_ok());
}

#[test]
fn test_reset_empties_tree_and_path_history() {
    let world = TestWorld::new()
        .with_fake_tool("traceroute", fixtures::LINUX_TRACE, 0)
        .unwrap();
    world.run(&["paths", "run", "traceroute", "example.com"]).unwrap();

    let result = world.run_json(&["paths", "reset"]).unwrap();
    assert!(result.success());

    let tree = world.run_json(&["paths", "tree"]).unwrap().json().unwrap();
    assert_eq!(tree["content"]["targets"], serde_json::json!([]));
    assertions::assert_badge_level(&tree, "info").unwrap();

    let paths = world
        .run_json(&["paths", "history", "list"])
        .unwrap()
        .json()
        .unwrap();
    assertions::assert_run_count(&paths, 0).unwrap();
}

#[test]
fn test_silent_trace_adds_nothing_to_tree() {
    let world = TestWorld::new()
        .with_fake_tool("traceroute", fixtures::SILENT_TRACE, 0)
        .unwrap();
    world.run(&["paths", "run", "traceroute", "10.255.255.1"]).unwrap();

    let tree = world.run_json(&["paths", "tree"]).unwrap().json().unwrap();
    assert!(assertions::find_path_target(&tree, "10.255.255.1").is_err());
}
