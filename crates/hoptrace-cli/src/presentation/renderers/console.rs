use anyhow::Result;
use serde::Serialize;
use std::fmt::Display;
use std::io::{self, Write};

use super::traits::Renderer;
use crate::presentation::formatters::style;
use crate::presentation::view_models::CommandResultViewModel;
use crate::types::OutputFormat;

/// Writes results to stdout in the selected `--format`.
pub struct ConsoleRenderer {
    format: OutputFormat,
}

impl ConsoleRenderer {
    pub fn new(format: OutputFormat) -> Self {
        Self { format }
    }

    fn write<T, W>(&self, out: &mut W, result: &CommandResultViewModel<T>) -> Result<()>
    where
        T: Serialize + Display,
        W: Write,
    {
        match self.format {
            OutputFormat::Json => {
                serde_json::to_writer_pretty(&mut *out, result)?;
                writeln!(out)?;
            }
            OutputFormat::Text => write_text(out, result)?,
        }
        Ok(())
    }
}

/// Status line, blank line, content, then the follow-up commands aligned in
/// one column.
fn write_text<T, W>(out: &mut W, result: &CommandResultViewModel<T>) -> io::Result<()>
where
    T: Serialize + Display,
    W: Write,
{
    let badge = &result.badge;
    writeln!(
        out,
        "{} {}",
        style::level(badge.level, badge.level.marker()),
        style::bold(&badge.label)
    )?;
    writeln!(out)?;
    write!(out, "{}", result.content)?;

    if result.suggestions.is_empty() {
        return Ok(());
    }
    let width = result
        .suggestions
        .iter()
        .map(|s| s.command.chars().count())
        .max()
        .unwrap_or(0);
    writeln!(out, "\n{}", style::dim("Next:"))?;
    for next in &result.suggestions {
        let pad = width - next.command.chars().count();
        writeln!(
            out,
            "  {}{}  {}",
            style::command(&next.command),
            " ".repeat(pad),
            style::dim(&next.description)
        )?;
    }
    Ok(())
}

impl Renderer for ConsoleRenderer {
    fn render<T>(&self, result: CommandResultViewModel<T>) -> Result<()>
    where
        T: Serialize + Display,
    {
        let stdout = io::stdout();
        let mut out = stdout.lock();
        self.write(&mut out, &result)?;
        out.flush()?;
        Ok(())
    }
}
