mod batch;
mod command;
mod history;
mod network;
mod paths;

pub use batch::{BatchItem, BatchOps, BatchOptions, BatchReport};
pub use command::{CommandOps, CommandOutcome, ParsedOutput};
pub use history::{DEFAULT_LIMIT, HistoryOps};
pub use network::{NetworkInfo, NetworkOps};
pub use paths::PathOps;

use crate::config::{Config, FailurePolicy};
use crate::executor::{ProcessOutput, ProcessRunner};
use crate::{Error, Result};
use hoptrace_core::CommandPolicy;
use hoptrace_index::{HistoryStore, PathStore};
use hoptrace_types::Platform;
use std::time::Duration;
use tracing::warn;

/// Everything an operation needs: settings, the process seam, and the stores.
///
/// A store is `None` only when it failed to open under
/// [`FailurePolicy::BestEffort`].
pub(crate) struct Context {
    pub config: Config,
    pub runner: Box<dyn ProcessRunner>,
    pub history: Option<HistoryStore>,
    pub paths: Option<PathStore>,
}

impl Context {
    pub fn platform(&self) -> Platform {
        self.config.platform()
    }

    pub fn failure_policy(&self) -> FailurePolicy {
        self.config.storage.failure_policy
    }

    pub fn command_policy(&self) -> CommandPolicy {
        CommandPolicy::new(self.platform())
            .with_max_len(self.config.execution.max_command_len)
            .with_max_targets(self.config.batch.max_targets)
    }

    /// Run `argv` after applying `[tools]` binary overrides.
    pub fn run(&self, mut argv: Vec<String>, timeout: Duration) -> ProcessOutput {
        if let Some(program) = argv.first_mut() {
            *program = self.config.binary_for(program);
        }
        self.runner.run(&argv, timeout)
    }

    pub fn run_default(&self, argv: Vec<String>) -> ProcessOutput {
        self.run(argv, self.config.execution.timeout())
    }

    pub fn with_history<T>(
        &self,
        what: &str,
        call: impl FnOnce(&HistoryStore) -> hoptrace_index::Result<T>,
        fallback: impl FnOnce() -> T,
    ) -> Result<T> {
        guarded(self.history.as_ref(), self.failure_policy(), what, call, fallback)
    }

    pub fn with_paths<T>(
        &self,
        what: &str,
        call: impl FnOnce(&PathStore) -> hoptrace_index::Result<T>,
        fallback: impl FnOnce() -> T,
    ) -> Result<T> {
        guarded(self.paths.as_ref(), self.failure_policy(), what, call, fallback)
    }
}

impl FailurePolicy {
    /// Apply the policy to a store result.
    pub fn absorb<T>(
        self,
        what: &str,
        result: hoptrace_index::Result<T>,
        fallback: impl FnOnce() -> T,
    ) -> Result<T> {
        match (result, self) {
            (Ok(value), _) => Ok(value),
            (Err(err), FailurePolicy::Strict) => Err(Error::Index(err)),
            (Err(err), FailurePolicy::BestEffort) => {
                warn!(operation = what, error = %err, "store operation failed, continuing");
                Ok(fallback())
            }
        }
    }
}

fn guarded<S, T>(
    store: Option<&S>,
    policy: FailurePolicy,
    what: &str,
    call: impl FnOnce(&S) -> hoptrace_index::Result<T>,
    fallback: impl FnOnce() -> T,
) -> Result<T> {
    match store {
        Some(store) => policy.absorb(what, call(store), fallback),
        None => Ok(fallback()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn failing() -> hoptrace_index::Result<u32> {
        Err(hoptrace_index::Error::Query("boom".to_string()))
    }

    #[test]
    fn test_best_effort_degrades() {
        let value = FailurePolicy::BestEffort
            .absorb("read", failing(), || 7)
            .unwrap();
        assert_eq!(value, 7);
    }

    #[test]
    fn test_strict_propagates() {
        let err = FailurePolicy::Strict
            .absorb("read", failing(), || 7)
            .unwrap_err();
        assert!(matches!(err, Error::Index(_)));
    }

    #[test]
    fn test_missing_store_uses_fallback() {
        let store: Option<&HistoryStore> = None;
        let value = guarded(store, FailurePolicy::Strict, "list", |_| Ok(1), || 0).unwrap();
        assert_eq!(value, 0);
    }
}
