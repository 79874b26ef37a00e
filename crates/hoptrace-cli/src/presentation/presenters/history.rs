use crate::args::hints::{cmd, fmt};
use crate::presentation::presenters::hop_rows;
use crate::presentation::view_models::{
    ActionViewModel, CommandResultViewModel, RunDetailViewModel, RunEntryViewModel,
    RunListViewModel, RunScope, count_label,
};
use hoptrace_index::StoredRun;
use hoptrace_types::RunSummary;

pub fn present_run_list(
    runs: &[RunSummary],
    scope: RunScope,
    limit: usize,
) -> CommandResultViewModel<RunListViewModel> {
    let entries: Vec<RunEntryViewModel> = runs
        .iter()
        .map(|run| RunEntryViewModel {
            id: run.id.get(),
            command: run.command.clone(),
            target: run.target.clone(),
            hop_count: run.hop_count,
            timestamp: run.timestamp.clone(),
        })
        .collect();

    let count = entries.len();
    let content = RunListViewModel {
        scope,
        runs: entries,
    };

    if count == 0 {
        let example = match scope {
            RunScope::History => cmd::RUN_EXAMPLE,
            RunScope::Paths => cmd::PATHS_RUN_EXAMPLE,
        };
        return CommandResultViewModel::info(content, "No saved runs")
            .suggest("Trace something first", example);
    }

    let result = CommandResultViewModel::success(content, count_label(count, "run"));
    if count == limit && scope == RunScope::History {
        return result.suggest("Show more", fmt::history_list_limit(limit * 2));
    }
    result
}

pub fn present_run_detail(stored: &StoredRun) -> CommandResultViewModel<RunDetailViewModel> {
    let content = RunDetailViewModel {
        id: stored.id.get(),
        command: stored.run.command.clone(),
        target: stored.run.target.clone(),
        timestamp: stored.timestamp.clone(),
        hops: hop_rows(&stored.run.hops),
    };
    let label = format!("Run {}", content.id);
    CommandResultViewModel::info(content, label)
}

pub fn present_deleted(id: i64) -> CommandResultViewModel<ActionViewModel> {
    let content = ActionViewModel {
        message: format!("Deleted run {}", id),
        affected: Some(1),
    };
    CommandResultViewModel::success(content, "Deleted")
}

pub fn present_cleared(count: usize) -> CommandResultViewModel<ActionViewModel> {
    let content = ActionViewModel {
        message: "History cleared".to_string(),
        affected: Some(count),
    };
    CommandResultViewModel::success(content, "Cleared")
}
