#![cfg(unix)]

use hoptrace_testing::{TestWorld, assertions, fixtures};

#[test]
fn test_batch_builds_trace_commands() {
    let world = TestWorld::new()
        .with_recording_tool("traceroute", fixtures::LINUX_TRACE)
        .unwrap();

    let result = world
        .run_json(&[
            "batch",
            "-n",
            "--max-hops",
            "5",
            "--wait-ms",
            "3000",
            "example.com",
        ])
        .unwrap();
    assert!(result.success(), "stderr: {}", result.stderr());

    assert_eq!(
        world.recorded_args("traceroute").unwrap(),
        ["-n", "-m", "5", "-w", "3", "example.com"]
    );

    let json = result.json().unwrap();
    assert_eq!(json["content"]["count"], 1);
    assert_eq!(
        json["content"]["results"][0]["command"],
        "traceroute -n -m 5 -w 3 example.com"
    );
    assert_eq!(json["content"]["results"][0]["saved_as"], 1);
}

#[test]
fn test_batch_feeds_history_and_tree() {
    let world = TestWorld::new()
        .with_fake_tool("traceroute", fixtures::LINUX_TRACE, 0)
        .unwrap();

    let result = world.run_json(&["batch", "8.8.8.8", "1.1.1.1"]).unwrap();
    assert!(result.success());
    assertions::assert_badge_level(&result.json().unwrap(), "success").unwrap();

    let history = world.run_json(&["history", "list"]).unwrap().json().unwrap();
    assertions::assert_run_count(&history, 2).unwrap();

    let tree = world.run_json(&["paths", "tree"]).unwrap().json().unwrap();
    assert!(assertions::find_path_target(&tree, "8.8.8.8").is_ok());
    assert!(assertions::find_path_target(&tree, "1.1.1.1").is_ok());

    let paths = world
        .run_json(&["paths", "history", "list"])
        .unwrap()
        .json()
        .unwrap();
    assertions::assert_run_count(&paths, 0).unwrap();
}

#[test]
fn test_empty_batch_is_rejected() {
    let world = TestWorld::new();

    let result = world.run_json(&["batch"]).unwrap();
    assert_eq!(result.code(), Some(2));

    let json = result.json().unwrap();
    assertions::assert_error_status(&json, "client_error").unwrap();
    assert_eq!(json["error"], "No targets provided");
}

#[test]
fn test_oversized_batch_runs_nothing() {
    let world = TestWorld::new()
        .with_recording_tool("traceroute", fixtures::LINUX_TRACE)
        .unwrap()
        .with_config(|config| config.batch.max_targets = 1)
        .unwrap();

    let result = world.run_json(&["batch", "a.example", "b.example"]).unwrap();
    assert_eq!(result.code(), Some(2));
    assert_eq!(result.json().unwrap()["error"], "Too many targets (max 1)");
    assert!(world.recorded_args("traceroute").unwrap().is_empty());
}
