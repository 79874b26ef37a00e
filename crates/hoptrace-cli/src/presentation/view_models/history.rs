use serde::Serialize;

use super::common::HopRowViewModel;
use crate::args::hints::fmt;

/// Which run history a listing came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum RunScope {
    History,
    Paths,
}

impl RunScope {
    /// Command that shows run `id` from this history.
    pub fn show_command(self, id: i64) -> String {
        match self {
            RunScope::History => fmt::history_show(id),
            RunScope::Paths => fmt::paths_history_show(id),
        }
    }
}

#[derive(Debug, Serialize)]
pub struct RunListViewModel {
    pub scope: RunScope,
    pub runs: Vec<RunEntryViewModel>,
}

#[derive(Debug, Serialize)]
pub struct RunEntryViewModel {
    pub id: i64,
    pub command: String,
    pub target: String,
    pub hop_count: usize,
    pub timestamp: String,
}

#[derive(Debug, Serialize)]
pub struct RunDetailViewModel {
    pub id: i64,
    pub command: String,
    pub target: String,
    pub timestamp: Option<String>,
    pub hops: Vec<HopRowViewModel>,
}
