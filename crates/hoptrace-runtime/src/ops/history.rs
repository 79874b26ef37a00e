use crate::ops::Context;
use crate::{Error, Result};
use hoptrace_index::StoredRun;
use hoptrace_types::{RunId, RunSummary};

pub(crate) const NOT_FOUND: &str = "Request not found";

/// Default page size for listings.
pub const DEFAULT_LIMIT: usize = 50;

pub struct HistoryOps<'a> {
    ctx: &'a Context,
}

impl<'a> HistoryOps<'a> {
    pub(crate) fn new(ctx: &'a Context) -> Self {
        Self { ctx }
    }

    /// Newest runs first.
    pub fn list(&self, limit: usize) -> Result<Vec<RunSummary>> {
        self.ctx
            .with_history("list history", |store| store.list_recent(limit), Vec::new)
    }

    pub fn show(&self, id: RunId) -> Result<StoredRun> {
        self.ctx
            .with_history("load run", |store| store.load_run(id), || None)?
            .ok_or_else(|| Error::NotFound(NOT_FOUND.to_string()))
    }

    pub fn delete(&self, id: RunId) -> Result<()> {
        let deleted = self
            .ctx
            .with_history("delete run", |store| store.delete_run(id), || false)?;
        if deleted {
            Ok(())
        } else {
            Err(Error::NotFound(NOT_FOUND.to_string()))
        }
    }

    pub fn count(&self) -> Result<usize> {
        self.ctx.with_history("count history", |store| store.count(), || 0)
    }

    /// Remove every run; returns how many were removed.
    pub fn clear(&self) -> Result<usize> {
        self.ctx.with_history("clear history", |store| store.clear(), || 0)
    }
}
