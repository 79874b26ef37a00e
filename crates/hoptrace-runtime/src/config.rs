use crate::{Error, Result};
use hoptrace_core::{MAX_BATCH_TARGETS, MAX_COMMAND_LEN};
use hoptrace_types::Platform;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::ffi::OsString;
use std::path::{Path, PathBuf};
use std::time::Duration;

pub const CONFIG_FILE: &str = "config.toml";

/// Overrides the data directory when `--data-dir` is not given.
pub const DATA_DIR_ENV: &str = "HOPTRACE_PATH";

/// Directory holding `config.toml`, `history.db` and `paths.db`.
///
/// Resolution: `explicit`, then `$HOPTRACE_PATH`, then `<data dir>/hoptrace`,
/// then `~/.hoptrace`.
pub fn data_dir(explicit: Option<&Path>) -> Result<PathBuf> {
    pick_data_dir(
        explicit,
        std::env::var_os(DATA_DIR_ENV),
        dirs::data_dir(),
        dirs::home_dir(),
    )
    .ok_or_else(|| {
        Error::Config(format!(
            "no data directory: pass --data-dir or set {}",
            DATA_DIR_ENV
        ))
    })
}

fn pick_data_dir(
    explicit: Option<&Path>,
    env: Option<OsString>,
    system: Option<PathBuf>,
    home: Option<PathBuf>,
) -> Option<PathBuf> {
    if let Some(path) = explicit {
        return Some(path.to_path_buf());
    }
    if let Some(path) = env.filter(|p| !p.is_empty()) {
        return Some(PathBuf::from(path));
    }
    system
        .map(|dir| dir.join("hoptrace"))
        .or_else(|| home.map(|dir| dir.join(".hoptrace")))
}

/// How store failures are treated.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FailurePolicy {
    /// Log a warning and carry on with an empty or no-op result.
    #[default]
    BestEffort,
    /// Surface the error to the caller.
    Strict,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ExecutionConfig {
    pub timeout_secs: u64,
    pub max_command_len: usize,
}

impl Default for ExecutionConfig {
    fn default() -> Self {
        Self {
            timeout_secs: 120,
            max_command_len: MAX_COMMAND_LEN,
        }
    }
}

impl ExecutionConfig {
    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs.max(1))
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct StorageConfig {
    /// Relative paths are resolved against the data directory.
    pub history_db: PathBuf,
    pub paths_db: PathBuf,
    pub failure_policy: FailurePolicy,
}

impl Default for StorageConfig {
    fn default() -> Self {
        Self {
            history_db: PathBuf::from("history.db"),
            paths_db: PathBuf::from("paths.db"),
            failure_policy: FailurePolicy::default(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct BatchConfig {
    pub max_targets: usize,
}

impl Default for BatchConfig {
    fn default() -> Self {
        Self {
            max_targets: MAX_BATCH_TARGETS,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
pub struct Config {
    /// Force a tool dialect instead of the build target's.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub platform: Option<Platform>,
    #[serde(default)]
    pub execution: ExecutionConfig,
    #[serde(default)]
    pub storage: StorageConfig,
    #[serde(default)]
    pub batch: BatchConfig,
    /// Binary overrides keyed by tool name, e.g. `traceroute = "/usr/sbin/traceroute"`.
    #[serde(default)]
    pub tools: BTreeMap<String, PathBuf>,
}

impl Config {
    pub fn load_from(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Ok(Self::default());
        }

        let content = std::fs::read_to_string(path)?;
        let config: Config = toml::from_str(&content)?;
        Ok(config)
    }

    pub fn save_to(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let content = toml::to_string_pretty(self)?;
        std::fs::write(path, content)?;
        Ok(())
    }

    pub fn platform(&self) -> Platform {
        self.platform.unwrap_or_else(Platform::current)
    }

    /// Binary to launch for `tool`, honouring `[tools]` overrides.
    pub fn binary_for(&self, tool: &str) -> String {
        self.tools
            .get(tool)
            .map(|path| path.display().to_string())
            .unwrap_or_else(|| tool.to_string())
    }

    pub fn history_db_path(&self, data_dir: &Path) -> PathBuf {
        data_dir.join(&self.storage.history_db)
    }

    pub fn paths_db_path(&self, data_dir: &Path) -> PathBuf {
        data_dir.join(&self.storage.paths_db)
    }
}
