use std::fmt;

use super::HopTable;
use crate::presentation::formatters::{style, text};
use crate::presentation::view_models::{RunDetailViewModel, RunListViewModel};

impl fmt::Display for RunListViewModel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.runs.is_empty() {
            return Ok(());
        }

        writeln!(
            f,
            "{}",
            style::bold(&format!(
                "{:>6}  {:<25} {:<30} {:>4}  COMMAND",
                "ID", "TIME", "TARGET", "HOPS"
            ))
        )?;
        for run in &self.runs {
            writeln!(
                f,
                "{:>6}  {:<25} {:<30} {:>4}  {}",
                run.id,
                text::truncate(&run.timestamp, 25),
                text::truncate(&run.target, 30),
                run.hop_count,
                text::truncate(&run.command, 60)
            )?;
        }
        Ok(())
    }
}

impl fmt::Display for RunDetailViewModel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Command: {}", style::command(&self.command))?;
        writeln!(f, "Target:  {}", self.target)?;
        writeln!(
            f,
            "Saved:   {}",
            self.timestamp.as_deref().unwrap_or("(unknown)")
        )?;
        writeln!(f)?;
        write!(f, "{}", HopTable::new(&self.hops))
    }
}
