use super::HandlerContext;
use crate::presentation::presenters;
use anyhow::Result;
use hoptrace_runtime::{BatchOptions, HopTrace};

pub fn handle(
    workspace: &HopTrace,
    targets: &[String],
    options: BatchOptions,
    ctx: &HandlerContext,
) -> Result<()> {
    let report = workspace.batch().run(targets, options)?;
    ctx.render(presenters::present_batch(&report))
}
