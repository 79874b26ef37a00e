use super::HandlerContext;
use crate::presentation::presenters;
use crate::presentation::view_models::RunScope;
use anyhow::Result;
use hoptrace_runtime::HopTrace;

pub fn handle(workspace: &HopTrace, command: Option<&str>, ctx: &HandlerContext) -> Result<()> {
    let outcome = workspace.commands().run(command)?;
    ctx.render(presenters::present_command(&outcome, RunScope::History))
}
