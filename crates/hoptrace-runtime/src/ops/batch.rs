use crate::Result;
use crate::executor::ProcessOutput;
use crate::ops::Context;
use crate::ops::command::hops_from;
use hoptrace_core::{WaitTime, trace_binary, translate};
use hoptrace_types::{DiagnosticRun, HopObservation, Platform, RunId};
use serde::Serialize;
use tracing::{info, warn};

/// Flags applied to every target of a batch.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct BatchOptions {
    pub numeric: bool,
    pub max_hops: Option<u32>,
    pub wait_ms: Option<u64>,
}

impl BatchOptions {
    /// Trace command for `target` in the dialect of `platform`.
    ///
    /// Zero values are treated as unset.
    pub fn command_for(&self, target: &str, platform: Platform) -> String {
        let mut parts = vec![trace_binary(platform).to_string()];

        if self.numeric {
            parts.push(
                match platform {
                    Platform::Unix => "-n",
                    Platform::Windows => "-d",
                }
                .to_string(),
            );
        }
        if let Some(max_hops) = self.max_hops.filter(|n| *n > 0) {
            let flag = match platform {
                Platform::Unix => "-m",
                Platform::Windows => "-h",
            };
            parts.push(flag.to_string());
            parts.push(max_hops.to_string());
        }
        if let Some(wait_ms) = self.wait_ms.filter(|ms| *ms > 0) {
            parts.push("-w".to_string());
            parts.push(WaitTime::from_millis(wait_ms).render(platform));
        }

        parts.push(target.to_string());
        parts.join(" ")
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BatchItem {
    pub target: String,
    pub command: String,
    #[serde(flatten)]
    pub output: ProcessOutput,
    /// `None` when the process left nothing to parse.
    pub hops: Option<Vec<HopObservation>>,
    pub saved_as: Option<RunId>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BatchReport {
    pub count: usize,
    pub results: Vec<BatchItem>,
}

pub struct BatchOps<'a> {
    ctx: &'a Context,
}

impl<'a> BatchOps<'a> {
    pub(crate) fn new(ctx: &'a Context) -> Self {
        Self { ctx }
    }

    /// Trace each target in turn.
    ///
    /// Every target and every generated command is validated before the
    /// first process starts; a rejected batch runs nothing.
    pub fn run<S: AsRef<str>>(&self, targets: &[S], options: BatchOptions) -> Result<BatchReport> {
        let policy = self.ctx.command_policy();
        let platform = self.ctx.platform();
        let targets = policy.validate_targets(targets)?;

        let commands = targets
            .iter()
            .map(|target| {
                let command = options.command_for(target, platform);
                policy.validate(Some(&command)).map(|v| v.command)
            })
            .collect::<std::result::Result<Vec<_>, _>>()?;

        info!(count = targets.len(), "starting batch trace");

        let mut results = Vec::with_capacity(targets.len());
        for (target, command) in targets.into_iter().zip(commands) {
            let argv = translate(&command, platform);
            let output = self.ctx.run_default(argv);
            if output.is_timeout() {
                warn!(dest = %target, "batch trace timed out");
            }

            let hops = hops_from(&output);
            let mut saved_as = None;
            if let Some(hops) = hops.as_ref().filter(|h| !h.is_empty()) {
                let run = DiagnosticRun::new(command.clone(), hops.clone());
                saved_as = self
                    .ctx
                    .with_history("save batch run", |store| store.save(&run).map(Some), || None)?;
                self.ctx.with_paths(
                    "accumulate batch path",
                    |store| store.accumulate(&run.target, &run.hops),
                    || (),
                )?;
            }

            results.push(BatchItem {
                target,
                command,
                output,
                hops,
                saved_as,
            });
        }

        Ok(BatchReport {
            count: results.len(),
            results,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_plain_command() {
        let options = BatchOptions::default();
        assert_eq!(options.command_for("8.8.8.8", Platform::Unix), "traceroute 8.8.8.8");
        assert_eq!(options.command_for("8.8.8.8", Platform::Windows), "tracert 8.8.8.8");
    }

    #[test]
    fn test_all_flags_unix() {
        let options = BatchOptions {
            numeric: true,
            max_hops: Some(15),
            wait_ms: Some(2000),
        };
        assert_eq!(
            options.command_for("example.com", Platform::Unix),
            "traceroute -n -m 15 -w 2 example.com"
        );
    }

    #[test]
    fn test_all_flags_windows() {
        let options = BatchOptions {
            numeric: true,
            max_hops: Some(15),
            wait_ms: Some(1500),
        };
        assert_eq!(
            options.command_for("example.com", Platform::Windows),
            "tracert -d -h 15 -w 1500 example.com"
        );
    }

    #[test]
    fn test_zero_values_are_skipped() {
        let options = BatchOptions {
            numeric: false,
            max_hops: Some(0),
            wait_ms: Some(0),
        };
        assert_eq!(options.command_for("host", Platform::Unix), "traceroute host");
    }
}
