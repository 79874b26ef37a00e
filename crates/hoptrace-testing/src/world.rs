//! TestWorld pattern for declarative integration test setup.

use anyhow::Result;
use assert_cmd::Command;
use hoptrace_runtime::{CONFIG_FILE, Config};
use hoptrace_types::Platform;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

use crate::fixtures;

/// Isolated data directory, fake tool binaries and a config that points at
/// them.
///
/// # Example
/// ```no_run
/// use hoptrace_testing::{TestWorld, fixtures};
///
/// let world = TestWorld::new()
///     .with_fake_tool("traceroute", fixtures::LINUX_TRACE, 0)
///     .unwrap();
///
/// let result = world.run(&["run", "traceroute", "example.com"]).unwrap();
/// assert!(result.success());
/// ```
pub struct TestWorld {
    temp_dir: TempDir,
    data_dir: PathBuf,
    tools_dir: PathBuf,
    config: Config,
}

impl Default for TestWorld {
    fn default() -> Self {
        Self::new()
    }
}

impl TestWorld {
    /// Create a new isolated test environment pinned to the Unix dialect.
    pub fn new() -> Self {
        let temp_dir = TempDir::new().expect("Failed to create temp dir");
        let data_dir = temp_dir.path().join(".hoptrace");
        let tools_dir = temp_dir.path().join("bin");
        std::fs::create_dir_all(&data_dir).expect("Failed to create data dir");

        let config = Config {
            platform: Some(Platform::Unix),
            ..Config::default()
        };
        config
            .save_to(&data_dir.join(CONFIG_FILE))
            .expect("Failed to write config");

        Self {
            temp_dir,
            data_dir,
            tools_dir,
            config,
        }
    }

    pub fn data_dir(&self) -> &Path {
        &self.data_dir
    }

    pub fn tools_dir(&self) -> &Path {
        &self.tools_dir
    }

    pub fn temp_dir(&self) -> &Path {
        self.temp_dir.path()
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Edit the config and write it back to the data directory.
    pub fn with_config(mut self, edit: impl FnOnce(&mut Config)) -> Result<Self> {
        edit(&mut self.config);
        self.config.save_to(&self.data_dir.join(CONFIG_FILE))?;
        Ok(self)
    }

    /// Install a script standing in for `name` and route the config to it.
    #[cfg(unix)]
    pub fn with_fake_tool(self, name: &str, stdout: &str, exit_code: i32) -> Result<Self> {
        let script = fixtures::write_fake_tool(&self.tools_dir, name, stdout, exit_code)?;
        self.with_config(|config| {
            config.tools.insert(name.to_string(), script);
        })
    }

    /// Like [`Self::with_fake_tool`], but the script also logs its arguments.
    #[cfg(unix)]
    pub fn with_recording_tool(self, name: &str, stdout: &str) -> Result<Self> {
        let script = fixtures::write_recording_tool(&self.tools_dir, name, stdout)?;
        self.with_config(|config| {
            config.tools.insert(name.to_string(), script);
        })
    }

    /// Arguments seen by a tool installed with [`Self::with_recording_tool`].
    pub fn recorded_args(&self, name: &str) -> Result<Vec<String>> {
        fixtures::recorded_args(&self.tools_dir, name)
    }

    /// Point `--data-dir` at this world.
    pub fn configure_command<'a>(&self, cmd: &'a mut Command) -> &'a mut Command {
        cmd.arg("--data-dir").arg(self.data_dir());
        cmd.current_dir(self.temp_dir.path());
        cmd.env_remove("RUST_LOG");
        cmd
    }

    /// Execute the `hoptrace` binary with text output.
    #[allow(deprecated)]
    pub fn run(&self, args: &[&str]) -> Result<CliResult> {
        let mut cmd = Command::cargo_bin("hoptrace")
            .map_err(|e| anyhow::anyhow!("Failed to find hoptrace binary: {}", e))?;
        self.configure_command(&mut cmd);
        cmd.args(args);

        let output = cmd.output()?;
        Ok(CliResult {
            status: output.status,
            stdout: String::from_utf8_lossy(&output.stdout).to_string(),
            stderr: String::from_utf8_lossy(&output.stderr).to_string(),
        })
    }

    /// Execute with `--format json`.
    pub fn run_json(&self, args: &[&str]) -> Result<CliResult> {
        let mut full = vec!["--format", "json"];
        full.extend_from_slice(args);
        self.run(&full)
    }
}

/// Result of a CLI command execution.
#[derive(Debug)]
pub struct CliResult {
    pub status: std::process::ExitStatus,
    pub stdout: String,
    pub stderr: String,
}

impl CliResult {
    pub fn success(&self) -> bool {
        self.status.success()
    }

    pub fn code(&self) -> Option<i32> {
        self.status.code()
    }

    /// Parse stdout as JSON.
    pub fn json(&self) -> Result<serde_json::Value> {
        Ok(serde_json::from_str(&self.stdout)?)
    }

    pub fn stdout(&self) -> &str {
        &self.stdout
    }

    pub fn stderr(&self) -> &str {
        &self.stderr
    }
}
