use super::HandlerContext;
use crate::presentation::presenters;
use anyhow::Result;
use hoptrace_runtime::HopTrace;

pub fn handle(workspace: &HopTrace, ctx: &HandlerContext) -> Result<()> {
    let info = workspace.network().info();
    ctx.render(presenters::present_network_info(info))
}
