use super::HandlerContext;
use crate::presentation::presenters;
use crate::presentation::view_models::RunScope;
use anyhow::Result;
use hoptrace_runtime::HopTrace;
use hoptrace_types::RunId;

pub fn handle_run(workspace: &HopTrace, command: Option<&str>, ctx: &HandlerContext) -> Result<()> {
    let outcome = workspace.paths().run(command)?;
    ctx.render(presenters::present_command(&outcome, RunScope::Paths))
}

pub fn handle_tree(workspace: &HopTrace, summary_only: bool, ctx: &HandlerContext) -> Result<()> {
    let snapshot = workspace.paths().tree()?;
    ctx.render(presenters::present_path_tree(&snapshot, summary_only))
}

pub fn handle_reset(workspace: &HopTrace, ctx: &HandlerContext) -> Result<()> {
    workspace.paths().reset()?;
    ctx.render(presenters::present_paths_reset())
}

pub fn handle_history_list(workspace: &HopTrace, limit: usize, ctx: &HandlerContext) -> Result<()> {
    let runs = workspace.paths().history_list(limit)?;
    ctx.render(presenters::present_run_list(&runs, RunScope::Paths, limit))
}

pub fn handle_history_show(workspace: &HopTrace, id: i64, ctx: &HandlerContext) -> Result<()> {
    let stored = workspace.paths().history_show(RunId::new(id))?;
    ctx.render(presenters::present_run_detail(&stored))
}

pub fn handle_history_delete(workspace: &HopTrace, id: i64, ctx: &HandlerContext) -> Result<()> {
    workspace.paths().history_delete(RunId::new(id))?;
    ctx.render(presenters::present_deleted(id))
}

pub fn handle_history_clear(workspace: &HopTrace, ctx: &HandlerContext) -> Result<()> {
    let removed = workspace.paths().history_clear()?;
    ctx.render(presenters::present_cleared(removed))
}
