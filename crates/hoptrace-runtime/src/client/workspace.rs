use crate::config::{CONFIG_FILE, Config, FailurePolicy};
use crate::executor::{ProcessRunner, SystemRunner};
use crate::ops::{BatchOps, CommandOps, Context, HistoryOps, NetworkOps, PathOps};
use crate::{Error, Result};
use hoptrace_index::{HistoryStore, PathStore};
use std::path::{Path, PathBuf};
use tracing::{info, warn};

/// Entry point for everything hoptrace does against one data directory.
pub struct HopTrace {
    ctx: Context,
    data_dir: PathBuf,
}

impl HopTrace {
    /// Open with `config.toml` from `data_dir` (defaults when absent).
    pub fn open(data_dir: PathBuf) -> Result<Self> {
        let config = Config::load_from(&data_dir.join(CONFIG_FILE))?;
        Self::open_with(data_dir, config)
    }

    pub fn open_with(data_dir: PathBuf, config: Config) -> Result<Self> {
        let policy = config.storage.failure_policy;
        let history = open_store(
            policy,
            &config.history_db_path(&data_dir),
            HistoryStore::open,
        )?;
        let paths = open_store(policy, &config.paths_db_path(&data_dir), PathStore::open)?;

        info!(data_dir = %data_dir.display(), platform = %config.platform(), "workspace opened");

        Ok(Self {
            ctx: Context {
                config,
                runner: Box::new(SystemRunner::new()),
                history,
                paths,
            },
            data_dir,
        })
    }

    /// Replace the process runner, e.g. with a scripted one in tests.
    pub fn with_runner(mut self, runner: impl ProcessRunner + 'static) -> Self {
        self.ctx.runner = Box::new(runner);
        self
    }

    pub fn commands(&self) -> CommandOps<'_> {
        CommandOps::new(&self.ctx)
    }

    pub fn batch(&self) -> BatchOps<'_> {
        BatchOps::new(&self.ctx)
    }

    pub fn history(&self) -> HistoryOps<'_> {
        HistoryOps::new(&self.ctx)
    }

    pub fn paths(&self) -> PathOps<'_> {
        PathOps::new(&self.ctx)
    }

    pub fn network(&self) -> NetworkOps<'_> {
        NetworkOps::new(&self.ctx)
    }

    pub fn config(&self) -> &Config {
        &self.ctx.config
    }

    pub fn data_dir(&self) -> &Path {
        &self.data_dir
    }

    /// Whether both stores opened.
    pub fn stores_available(&self) -> bool {
        self.ctx.history.is_some() && self.ctx.paths.is_some()
    }
}

fn open_store<S>(
    policy: FailurePolicy,
    path: &Path,
    open: impl FnOnce(&Path) -> hoptrace_index::Result<S>,
) -> Result<Option<S>> {
    match open(path) {
        Ok(store) => Ok(Some(store)),
        Err(err) if policy == FailurePolicy::Strict => Err(Error::Index(err)),
        Err(err) => {
            warn!(path = %path.display(), error = %err, "store unavailable, running without it");
            Ok(None)
        }
    }
}
