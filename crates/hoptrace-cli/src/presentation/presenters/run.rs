use crate::args::hints::cmd;
use crate::presentation::presenters::hop_rows;
use crate::presentation::view_models::{
    BatchEntryViewModel, BatchViewModel, CommandResultViewModel, CommandViewModel, RunScope,
    StatusBadge, count_label,
};
use hoptrace_runtime::{BatchReport, CommandOutcome, ParsedOutput};

pub fn present_command(
    outcome: &CommandOutcome,
    scope: RunScope,
) -> CommandResultViewModel<CommandViewModel> {
    let (hops, output) = match &outcome.parsed {
        Some(ParsedOutput::Hops(hops)) => (Some(hop_rows(hops)), None),
        Some(ParsedOutput::Lookup(lookup)) => (None, Some(lookup.raw_output.clone())),
        None => (None, None),
    };

    let content = CommandViewModel {
        command: outcome.command.clone(),
        command_type: outcome.command_type.to_string(),
        argv: outcome.argv.clone(),
        return_code: outcome.output.return_code,
        stderr: outcome.output.stderr.clone(),
        timed_out: outcome.output.is_timeout(),
        hops,
        output,
        saved_as: outcome.saved_as.map(|id| id.get()),
    };

    let badge = StatusBadge::for_tool_run(
        content.timed_out,
        content.return_code,
        content.hops.as_ref().map(Vec::len),
    );
    let saved_as = content.saved_as;
    CommandResultViewModel::with_badge(content, badge).saved_run(scope, saved_as)
}

pub fn present_batch(report: &BatchReport) -> CommandResultViewModel<BatchViewModel> {
    let results: Vec<BatchEntryViewModel> = report
        .results
        .iter()
        .map(|item| BatchEntryViewModel {
            target: item.target.clone(),
            command: item.command.clone(),
            return_code: item.output.return_code,
            stderr: item.output.stderr.clone(),
            timed_out: item.output.is_timeout(),
            hops: item.hops.as_deref().map(hop_rows),
            saved_as: item.saved_as.map(|id| id.get()),
        })
        .collect();

    let traced = results
        .iter()
        .filter(|r| r.hops.as_ref().is_some_and(|h| !h.is_empty()))
        .count();
    let total = results.len();
    let content = BatchViewModel {
        count: report.count,
        results,
    };
    let result = if traced == total {
        CommandResultViewModel::success(content, format!("Traced {}", count_label(total, "target")))
    } else {
        CommandResultViewModel::warning(content, format!("Traced {} of {} targets", traced, total))
    };
    result.suggest("Merged routes", cmd::PATHS_TREE)
}
