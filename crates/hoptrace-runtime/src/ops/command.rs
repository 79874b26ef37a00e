use crate::Result;
use crate::executor::ProcessOutput;
use crate::ops::Context;
use hoptrace_core::{CommandType, translate};
use hoptrace_parser::{LookupOutput, parse_trace, passthrough};
use hoptrace_types::{DiagnosticRun, HopObservation, RunId};
use serde::Serialize;
use tracing::info;

/// What the output of a command turned into.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum ParsedOutput {
    Hops(Vec<HopObservation>),
    Lookup(LookupOutput),
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CommandOutcome {
    /// Command as the operator typed it (trimmed).
    pub command: String,
    pub command_type: &'static str,
    /// Argument vector actually launched.
    pub argv: Vec<String>,
    #[serde(flatten)]
    pub output: ProcessOutput,
    pub parsed: Option<ParsedOutput>,
    /// Row id when the hops were persisted.
    pub saved_as: Option<RunId>,
}

impl CommandOutcome {
    pub fn hops(&self) -> &[HopObservation] {
        match &self.parsed {
            Some(ParsedOutput::Hops(hops)) => hops,
            _ => &[],
        }
    }
}

/// Where traced hops are recorded.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Destination {
    /// Plain history.
    History,
    /// Path-page history plus the aggregated tree.
    Paths,
}

pub struct CommandOps<'a> {
    ctx: &'a Context,
}

impl<'a> CommandOps<'a> {
    pub(crate) fn new(ctx: &'a Context) -> Self {
        Self { ctx }
    }

    /// Validate, run and parse a command, saving traced hops to history.
    ///
    /// `None` means no command was supplied at all.
    pub fn run(&self, command: Option<&str>) -> Result<CommandOutcome> {
        self.execute(command, Destination::History)
    }

    pub(crate) fn execute(
        &self,
        command: Option<&str>,
        destination: Destination,
    ) -> Result<CommandOutcome> {
        let validated = self.ctx.command_policy().validate(command)?;
        let argv = translate(&validated.command, self.ctx.platform());
        let output = self.ctx.run_default(argv.clone());

        let parsed = output.usable_stdout().map(|stdout| match validated.command_type {
            CommandType::Traceroute => ParsedOutput::Hops(parse_trace(stdout)),
            CommandType::Dns => ParsedOutput::Lookup(passthrough(stdout)),
        });

        let mut outcome = CommandOutcome {
            command: validated.command,
            command_type: validated.command_type.as_str(),
            argv,
            output,
            parsed,
            saved_as: None,
        };

        if !outcome.hops().is_empty() {
            let run = DiagnosticRun::new(outcome.command.clone(), outcome.hops().to_vec());
            outcome.saved_as = self.record(&run, destination)?;
        }

        info!(
            command = %outcome.command,
            return_code = outcome.output.return_code,
            hops = outcome.hops().len(),
            "command finished"
        );
        Ok(outcome)
    }

    fn record(&self, run: &DiagnosticRun, destination: Destination) -> Result<Option<RunId>> {
        match destination {
            Destination::History => self
                .ctx
                .with_history("save run", |store| store.save(run).map(Some), || None),
            Destination::Paths => {
                let id = self
                    .ctx
                    .with_paths("save path run", |store| store.save(run).map(Some), || None)?;
                self.ctx.with_paths(
                    "accumulate path",
                    |store| store.accumulate(&run.target, &run.hops),
                    || (),
                )?;
                Ok(id)
            }
        }
    }
}

/// Convenience for callers that only have process output.
pub(crate) fn hops_from(output: &ProcessOutput) -> Option<Vec<HopObservation>> {
    output.usable_stdout().map(parse_trace)
}
