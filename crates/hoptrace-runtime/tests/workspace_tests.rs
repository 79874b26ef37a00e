use hoptrace_core::ValidationError;
use hoptrace_runtime::{
    BatchOptions, Config, Error, FailurePolicy, HopTrace, ParsedOutput, ProcessOutput,
};
use hoptrace_testing::{ScriptedRunner, fixtures};
use hoptrace_types::{Platform, RunId};
use std::path::PathBuf;
use tempfile::TempDir;

fn unix_config() -> Config {
    Config {
        platform: Some(Platform::Unix),
        ..Config::default()
    }
}

fn workspace(dir: &TempDir, config: Config, runner: &ScriptedRunner) -> HopTrace {
    HopTrace::open_with(dir.path().to_path_buf(), config)
        .unwrap()
        .with_runner(runner.clone())
}

#[test]
fn test_empty_batch_runs_nothing() {
    let dir = TempDir::new().unwrap();
    let runner = ScriptedRunner::new().respond_stdout("traceroute", fixtures::LINUX_TRACE);
    let ws = workspace(&dir, unix_config(), &runner);

    let err = ws
        .batch()
        .run(&["", "   "], BatchOptions::default())
        .unwrap_err();
    assert!(matches!(err, Error::Validation(ValidationError::NoTargets)));
    assert!(err.is_client_error());
    assert_eq!(err.to_string(), "No targets provided");
    assert_eq!(runner.call_count(), 0);

    let empty: [&str; 0] = [];
    assert!(ws.batch().run(&empty, BatchOptions::default()).is_err());
    assert_eq!(runner.call_count(), 0);
}

#[test]
fn test_oversized_batch_runs_nothing() {
    let dir = TempDir::new().unwrap();
    let runner = ScriptedRunner::new().respond_stdout("traceroute", fixtures::LINUX_TRACE);
    let ws = workspace(&dir, unix_config(), &runner);

    let targets: Vec<String> = (0..51).map(|i| format!("10.0.0.{}", i)).collect();
    let err = ws
        .batch()
        .run(&targets, BatchOptions::default())
        .unwrap_err();
    assert_eq!(err.to_string(), "Too many targets (max 50)");
    assert_eq!(runner.call_count(), 0);
}

#[test]
fn test_forbidden_command_is_not_executed() {
    let dir = TempDir::new().unwrap();
    let runner = ScriptedRunner::new();
    let ws = workspace(&dir, unix_config(), &runner);

    let err = ws.commands().run(Some("rm -rf /")).unwrap_err();
    match &err {
        Error::Validation(validation) => {
            assert!(validation.is_forbidden());
            assert!(
                validation
                    .allowed_commands()
                    .unwrap()
                    .iter()
                    .any(|c| c == "dig")
            );
        }
        other => panic!("unexpected error: {other}"),
    }
    assert_eq!(runner.call_count(), 0);

    assert!(matches!(
        ws.commands().run(None),
        Err(Error::Validation(ValidationError::MissingCommand))
    ));
}

#[test]
fn test_run_saves_to_history_only() {
    let dir = TempDir::new().unwrap();
    let runner = ScriptedRunner::new().respond_stdout("traceroute", fixtures::LINUX_TRACE);
    let ws = workspace(&dir, unix_config(), &runner);

    let outcome = ws
        .commands()
        .run(Some("traceroute -n example.com"))
        .unwrap();
    assert_eq!(outcome.command_type, "traceroute");
    assert_eq!(outcome.argv, ["traceroute", "-n", "example.com"]);
    assert_eq!(outcome.hops().len(), 3);
    let id = outcome.saved_as.expect("run should be saved");

    let runs = ws.history().list(10).unwrap();
    assert_eq!(runs.len(), 1);
    assert_eq!(runs[0].id, id);
    assert_eq!(runs[0].target, "example.com");
    assert_eq!(runs[0].hop_count, 3);

    let stored = ws.history().show(id).unwrap();
    assert_eq!(stored.run.command, "traceroute -n example.com");
    assert_eq!(stored.run.hops[1].ip_address, "timeout");

    assert!(ws.paths().tree().unwrap().is_empty());
    assert!(ws.paths().history_list(10).unwrap().is_empty());
}

#[test]
fn test_paths_run_accumulates_tree() {
    let dir = TempDir::new().unwrap();
    let runner = ScriptedRunner::new()
        .respond_stdout("traceroute", fixtures::LINUX_TRACE)
        .respond_stdout("traceroute", fixtures::LINUX_TRACE_ALT);
    let ws = workspace(&dir, unix_config(), &runner);

    ws.paths().run(Some("traceroute example.com")).unwrap();
    let tree = ws.paths().tree().unwrap();
    let views = &tree["example.com"];
    assert_eq!(views.len(), 2);
    assert_eq!(views[0].hop_number, 1);
    assert_eq!(views[0].nodes, ["router"]);
    assert_eq!(views[1].hop_number, 3);

    ws.paths().run(Some("traceroute example.com")).unwrap();
    let tree = ws.paths().tree().unwrap();
    assert_eq!(tree["example.com"][0].ips, ["192.168.1.1", "192.168.1.254"]);

    let summary = ws.paths().summary().unwrap();
    assert_eq!(summary.len(), 1);
    assert_eq!(summary[0].depth, 3);
    assert_eq!(summary[0].branching_hops, [1]);

    assert_eq!(ws.paths().history_list(10).unwrap().len(), 2);
    assert!(ws.history().list(10).unwrap().is_empty());
}

#[test]
fn test_paths_reset_clears_tree_and_runs() {
    let dir = TempDir::new().unwrap();
    let runner = ScriptedRunner::new().respond_stdout("traceroute", fixtures::LINUX_TRACE);
    let ws = workspace(&dir, unix_config(), &runner);

    let outcome = ws.paths().run(Some("traceroute example.com")).unwrap();
    let id = outcome.saved_as.unwrap();

    ws.paths().history_delete(id).unwrap();
    assert!(!ws.paths().tree().unwrap().is_empty());

    ws.paths().run(Some("traceroute example.com")).unwrap();
    ws.paths().reset().unwrap();
    assert!(ws.paths().tree().unwrap().is_empty());
    assert!(ws.paths().history_list(10).unwrap().is_empty());
}

#[test]
fn test_lookup_is_passed_through_and_not_saved() {
    let dir = TempDir::new().unwrap();
    let runner = ScriptedRunner::new().respond_stdout("dig", fixtures::DIG_OUTPUT);
    let ws = workspace(&dir, unix_config(), &runner);

    let outcome = ws.commands().run(Some("dig example.com")).unwrap();
    assert_eq!(outcome.command_type, "dns");
    match &outcome.parsed {
        Some(ParsedOutput::Lookup(lookup)) => {
            assert!(lookup.raw_output.contains("93.184.216.34"))
        }
        other => panic!("unexpected parse: {other:?}"),
    }
    assert!(outcome.saved_as.is_none());
    assert!(ws.history().list(10).unwrap().is_empty());
}

#[test]
fn test_timeout_is_reported_and_not_saved() {
    let dir = TempDir::new().unwrap();
    let runner = ScriptedRunner::new().respond("traceroute", ProcessOutput::timed_out());
    let ws = workspace(&dir, unix_config(), &runner);

    let outcome = ws.commands().run(Some("traceroute example.com")).unwrap();
    assert!(outcome.output.is_timeout());
    assert_eq!(outcome.output.return_code, -1);
    assert!(outcome.parsed.is_none());
    assert!(outcome.saved_as.is_none());
    assert_eq!(ws.history().count().unwrap(), 0);
}

#[test]
fn test_batch_traces_each_target() {
    let dir = TempDir::new().unwrap();
    let runner = ScriptedRunner::new()
        .respond_stdout("traceroute", fixtures::LINUX_TRACE)
        .respond_stdout("traceroute", fixtures::SILENT_TRACE);
    let ws = workspace(&dir, unix_config(), &runner);

    let options = BatchOptions {
        numeric: true,
        max_hops: Some(5),
        wait_ms: Some(3000),
    };
    let report = ws
        .batch()
        .run(&[" example.com ", "", "10.255.255.1"], options)
        .unwrap();

    assert_eq!(report.count, 2);
    let calls = runner.calls();
    assert_eq!(calls.len(), 2);
    assert_eq!(
        calls[0].argv,
        ["traceroute", "-n", "-m", "5", "-w", "3", "example.com"]
    );
    assert_eq!(report.results[0].command, "traceroute -n -m 5 -w 3 example.com");
    assert!(report.results[0].saved_as.is_some());

    // Every hop of the second target timed out: saved, but adds nothing to the tree.
    assert_eq!(report.results[1].hops.as_ref().map(Vec::len), Some(2));

    assert_eq!(ws.history().list(10).unwrap().len(), 2);
    let tree = ws.paths().tree().unwrap();
    assert_eq!(tree.len(), 1);
    assert!(tree.contains_key("example.com"));
    assert!(ws.paths().history_list(10).unwrap().is_empty());
}

#[test]
fn test_batch_rejects_flag_like_target() {
    let dir = TempDir::new().unwrap();
    let runner = ScriptedRunner::new();
    let ws = workspace(&dir, unix_config(), &runner);

    let err = ws
        .batch()
        .run(&["example.com", "-q"], BatchOptions::default())
        .unwrap_err();
    assert!(err.is_client_error());
    assert_eq!(runner.call_count(), 0);
}

#[test]
fn test_windows_dialect_translation() {
    let dir = TempDir::new().unwrap();
    let runner = ScriptedRunner::new().respond_stdout("tracert", fixtures::WINDOWS_TRACE);
    let config = Config {
        platform: Some(Platform::Windows),
        ..Config::default()
    };
    let ws = workspace(&dir, config, &runner);

    let outcome = ws
        .commands()
        .run(Some("tracert -d -h 5 -w 2000 example.com"))
        .unwrap();
    assert_eq!(
        outcome.argv,
        ["tracert", "-d", "-h", "5", "-w", "2000", "example.com"]
    );
    assert_eq!(outcome.hops().len(), 4);

    // The Windows allow-list has neither dig nor traceroute.
    assert!(ws.commands().run(Some("dig example.com")).is_err());
    assert!(ws.commands().run(Some("traceroute example.com")).is_err());

    let options = BatchOptions {
        numeric: true,
        max_hops: Some(5),
        wait_ms: Some(2000),
    };
    ws.batch().run(&["example.com"], options).unwrap();
    assert_eq!(
        runner.calls().last().unwrap().argv,
        ["tracert", "-d", "-h", "5", "-w", "2000", "example.com"]
    );
}

#[test]
fn test_tool_override_and_timeout_from_config() {
    let dir = TempDir::new().unwrap();
    let runner = ScriptedRunner::new().respond_stdout("traceroute", fixtures::LINUX_TRACE);
    let mut config = unix_config();
    config.execution.timeout_secs = 7;
    config.tools.insert(
        "traceroute".to_string(),
        PathBuf::from("/opt/net/bin/traceroute"),
    );
    let ws = workspace(&dir, config, &runner);

    ws.commands().run(Some("traceroute example.com")).unwrap();
    let call = &runner.calls()[0];
    assert_eq!(call.program(), "/opt/net/bin/traceroute");
    assert_eq!(call.timeout.as_secs(), 7);
}

#[test]
fn test_missing_runs_are_not_found() {
    let dir = TempDir::new().unwrap();
    let runner = ScriptedRunner::new();
    let ws = workspace(&dir, unix_config(), &runner);

    let err = ws.history().show(RunId::new(42)).unwrap_err();
    assert!(matches!(err, Error::NotFound(_)));
    assert!(err.is_client_error());
    assert_eq!(err.to_string(), "Request not found");

    assert!(ws.history().delete(RunId::new(42)).is_err());
    assert!(ws.paths().history_show(RunId::new(42)).is_err());
}

#[test]
fn test_history_delete_and_clear() {
    let dir = TempDir::new().unwrap();
    let runner = ScriptedRunner::new().respond_stdout("traceroute", fixtures::LINUX_TRACE);
    let ws = workspace(&dir, unix_config(), &runner);

    let first = ws.commands().run(Some("traceroute a.example")).unwrap();
    ws.commands().run(Some("traceroute b.example")).unwrap();
    ws.commands().run(Some("traceroute c.example")).unwrap();

    ws.history().delete(first.saved_as.unwrap()).unwrap();
    assert_eq!(ws.history().list(10).unwrap().len(), 2);
    assert_eq!(ws.history().clear().unwrap(), 2);
    assert!(ws.history().list(10).unwrap().is_empty());
}

#[test]
fn test_best_effort_runs_without_stores() {
    let dir = TempDir::new().unwrap();
    // A directory where the database file should be cannot be opened.
    std::fs::create_dir_all(dir.path().join("history.db")).unwrap();
    std::fs::create_dir_all(dir.path().join("paths.db")).unwrap();

    let runner = ScriptedRunner::new().respond_stdout("traceroute", fixtures::LINUX_TRACE);
    let ws = workspace(&dir, unix_config(), &runner);
    assert!(!ws.stores_available());

    let outcome = ws.commands().run(Some("traceroute example.com")).unwrap();
    assert_eq!(outcome.hops().len(), 3);
    assert!(outcome.saved_as.is_none());
    assert!(ws.history().list(10).unwrap().is_empty());
    assert!(ws.paths().tree().unwrap().is_empty());
}

#[test]
fn test_strict_policy_fails_to_open() {
    let dir = TempDir::new().unwrap();
    std::fs::create_dir_all(dir.path().join("history.db")).unwrap();

    let mut config = unix_config();
    config.storage.failure_policy = FailurePolicy::Strict;
    let result = HopTrace::open_with(dir.path().to_path_buf(), config);
    assert!(matches!(result, Err(Error::Index(_))));
}

#[test]
fn test_open_reads_config_file() {
    let dir = TempDir::new().unwrap();
    let mut config = unix_config();
    config.batch.max_targets = 1;
    config
        .save_to(&dir.path().join(hoptrace_runtime::CONFIG_FILE))
        .unwrap();

    let runner = ScriptedRunner::new();
    let ws = HopTrace::open(dir.path().to_path_buf())
        .unwrap()
        .with_runner(runner.clone());
    assert_eq!(ws.config().batch.max_targets, 1);

    let err = ws
        .batch()
        .run(&["a.example", "b.example"], BatchOptions::default())
        .unwrap_err();
    assert_eq!(err.to_string(), "Too many targets (max 1)");
}

#[test]
fn test_network_info_from_probes() {
    let dir = TempDir::new().unwrap();
    let runner = ScriptedRunner::new()
        .respond_stdout("ip", "1: lo: <LOOPBACK,UP>\n")
        .respond_stdout("curl", " 203.0.113.9\n")
        .respond_stdout("hostname", "probe-box\n");
    let ws = workspace(&dir, unix_config(), &runner);

    let info = ws.network().info();
    assert_eq!(info.ip_addresses, "1: lo: <LOOPBACK,UP>\n");
    // Same scripted `ip` output answers the route probe.
    assert_eq!(info.default_route, "1: lo: <LOOPBACK,UP>\n");
    assert_eq!(info.external_ip, "203.0.113.9");
    assert_eq!(info.hostname, "probe-box");
    assert!(!info.timestamp.is_empty());

    let curl = runner.calls_to("curl");
    assert_eq!(curl[0].argv, ["curl", "-s", "ifconfig.me"]);
    assert_eq!(curl[0].timeout.as_secs(), 5);
}

#[test]
fn test_network_info_placeholders() {
    let dir = TempDir::new().unwrap();
    let runner = ScriptedRunner::new();
    let ws = workspace(&dir, unix_config(), &runner);

    let info = ws.network().info();
    assert_eq!(info.ip_addresses, "Error getting IP info");
    assert_eq!(info.default_route, "No default route");
    assert_eq!(info.external_ip, "Unknown");
    assert_eq!(info.hostname, "unknown");
    assert!(runner.calls_to("ipconfig").is_empty());
}

#[test]
fn test_network_info_windows_fallbacks() {
    let dir = TempDir::new().unwrap();
    let runner = ScriptedRunner::new()
        .respond_stdout("ipconfig", "Windows IP Configuration\n")
        .respond_stdout("route", "IPv4 Route Table\n");
    let config = Config {
        platform: Some(Platform::Windows),
        ..Config::default()
    };
    let ws = workspace(&dir, config, &runner);

    let info = ws.network().info();
    assert_eq!(info.ip_addresses, "Windows IP Configuration\n");
    assert_eq!(info.default_route, "IPv4 Route Table\n");
    assert_eq!(runner.calls_to("powershell")[0].timeout.as_secs(), 8);
}
