use crate::ops::Context;
use crate::ops::command::{CommandOps, CommandOutcome, Destination};
use crate::ops::history::NOT_FOUND;
use crate::{Error, Result};
use hoptrace_engine::{TargetSummary, summarize};
use hoptrace_index::StoredRun;
use hoptrace_types::{PathSnapshot, RunId, RunSummary};
use tracing::info;

/// The path page: its own run history plus the aggregated per-target tree.
pub struct PathOps<'a> {
    ctx: &'a Context,
}

impl<'a> PathOps<'a> {
    pub(crate) fn new(ctx: &'a Context) -> Self {
        Self { ctx }
    }

    /// Like [`CommandOps::run`], but traced hops go to the path store and
    /// are folded into the tree.
    pub fn run(&self, command: Option<&str>) -> Result<CommandOutcome> {
        CommandOps::new(self.ctx).execute(command, Destination::Paths)
    }

    pub fn tree(&self) -> Result<PathSnapshot> {
        self.ctx
            .with_paths("load path tree", |store| store.snapshot(), PathSnapshot::new)
    }

    pub fn summary(&self) -> Result<Vec<TargetSummary>> {
        Ok(summarize(&self.tree()?))
    }

    /// Forget every accumulated path and the path run history.
    pub fn reset(&self) -> Result<()> {
        self.ctx.with_paths("reset paths", |store| store.reset(), || ())?;
        info!("path tree reset");
        Ok(())
    }

    pub fn history_list(&self, limit: usize) -> Result<Vec<RunSummary>> {
        self.ctx
            .with_paths("list path history", |store| store.list_recent(limit), Vec::new)
    }

    pub fn history_show(&self, id: RunId) -> Result<StoredRun> {
        self.ctx
            .with_paths("load path run", |store| store.load_run(id), || None)?
            .ok_or_else(|| Error::NotFound(NOT_FOUND.to_string()))
    }

    /// Deleting a path run leaves the tree as it is.
    pub fn history_delete(&self, id: RunId) -> Result<()> {
        let deleted = self
            .ctx
            .with_paths("delete path run", |store| store.delete_run(id), || false)?;
        if deleted {
            Ok(())
        } else {
            Err(Error::NotFound(NOT_FOUND.to_string()))
        }
    }

    /// Drop the path run history but keep the tree.
    pub fn history_clear(&self) -> Result<usize> {
        self.ctx
            .with_paths("clear path history", |store| store.clear_runs(), || 0)
    }
}
