use super::HandlerContext;
use crate::presentation::presenters;
use anyhow::{Context, Result};
use hoptrace_parser::{classify_lines, parse_trace};
use std::io::Read;
use tracing::debug;

/// Parse captured output from `file`, or stdin when no file is given.
pub fn handle(file: Option<&str>, explain: bool, ctx: &HandlerContext) -> Result<()> {
    let text = match file {
        Some(path) => std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read {}", path))?,
        None => {
            let mut buf = String::new();
            std::io::stdin()
                .read_to_string(&mut buf)
                .context("Failed to read stdin")?;
            buf
        }
    };

    debug!(bytes = text.len(), "parsing captured output");
    let hops = parse_trace(&text);
    let lines = explain.then(|| classify_lines(&text));
    ctx.render(presenters::present_parse(&hops, lines.as_deref()))
}
