use super::HandlerContext;
use crate::presentation::presenters;
use crate::presentation::view_models::RunScope;
use anyhow::Result;
use hoptrace_runtime::HopTrace;
use hoptrace_types::RunId;

pub fn handle_list(workspace: &HopTrace, limit: usize, ctx: &HandlerContext) -> Result<()> {
    let runs = workspace.history().list(limit)?;
    ctx.render(presenters::present_run_list(&runs, RunScope::History, limit))
}

pub fn handle_show(workspace: &HopTrace, id: i64, ctx: &HandlerContext) -> Result<()> {
    let stored = workspace.history().show(RunId::new(id))?;
    ctx.render(presenters::present_run_detail(&stored))
}

pub fn handle_delete(workspace: &HopTrace, id: i64, ctx: &HandlerContext) -> Result<()> {
    workspace.history().delete(RunId::new(id))?;
    ctx.render(presenters::present_deleted(id))
}

pub fn handle_clear(workspace: &HopTrace, ctx: &HandlerContext) -> Result<()> {
    let removed = workspace.history().clear()?;
    ctx.render(presenters::present_cleared(removed))
}
