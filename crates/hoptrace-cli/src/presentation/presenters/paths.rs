use crate::args::hints::cmd;
use crate::presentation::view_models::{
    ActionViewModel, CommandResultViewModel, PathHopViewModel, PathTargetViewModel,
    PathTreeViewModel, count_label,
};
use hoptrace_engine::summarize;
use hoptrace_types::PathSnapshot;

/// `summary_only` drops the per-hop detail.
pub fn present_path_tree(
    snapshot: &PathSnapshot,
    summary_only: bool,
) -> CommandResultViewModel<PathTreeViewModel> {
    let summaries = summarize(snapshot);

    let targets: Vec<PathTargetViewModel> = summaries
        .into_iter()
        .map(|summary| {
            let hops = (!summary_only).then(|| {
                snapshot
                    .get(&summary.target)
                    .map(|views| {
                        views
                            .iter()
                            .map(|view| PathHopViewModel {
                                hop: view.hop_number,
                                nodes: view.nodes.clone(),
                                ips: view.ips.clone(),
                            })
                            .collect::<Vec<_>>()
                    })
                    .unwrap_or_default()
            });
            PathTargetViewModel {
                target: summary.target,
                depth: summary.depth,
                branching_hops: summary.branching_hops,
                hops,
            }
        })
        .collect();

    if targets.is_empty() {
        return CommandResultViewModel::info(PathTreeViewModel { targets }, "No paths recorded")
            .suggest("Record a route", cmd::PATHS_RUN_EXAMPLE)
            .suggest("Trace many targets", cmd::BATCH_EXAMPLE);
    }

    let label = count_label(targets.len(), "target");
    CommandResultViewModel::success(PathTreeViewModel { targets }, label)
}

pub fn present_paths_reset() -> CommandResultViewModel<ActionViewModel> {
    let content = ActionViewModel {
        message: "Path tree and path history cleared".to_string(),
        affected: None,
    };
    CommandResultViewModel::success(content, "Reset")
}
