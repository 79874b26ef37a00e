use std::fmt;

use super::HopTable;
use crate::presentation::formatters::style;
use crate::presentation::view_models::{BatchViewModel, CommandViewModel};

impl fmt::Display for CommandViewModel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "$ {}", style::command(&self.argv.join(" ")))?;
        writeln!(f)?;

        if let Some(hops) = &self.hops {
            write!(f, "{}", HopTable::new(hops))?;
        }
        if let Some(output) = &self.output {
            writeln!(f, "{}", output.trim_end())?;
        }
        if self.hops.is_none() && self.output.is_none() {
            writeln!(f, "No output.")?;
        }
        if !self.stderr.trim().is_empty() {
            writeln!(f)?;
            writeln!(f, "{}", style::warn("stderr:"))?;
            writeln!(f, "{}", self.stderr.trim_end())?;
        }
        if let Some(id) = self.saved_as {
            writeln!(f)?;
            writeln!(f, "{}", style::dim(&format!("Saved as run {}", id)))?;
        }
        Ok(())
    }
}

impl fmt::Display for BatchViewModel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, entry) in self.results.iter().enumerate() {
            if i > 0 {
                writeln!(f)?;
            }
            writeln!(
                f,
                "{} {}",
                style::bold(&entry.target),
                style::dim(&format!("({})", entry.command))
            )?;

            match &entry.hops {
                Some(hops) => write!(f, "{}", HopTable::new(hops))?,
                None if entry.timed_out => writeln!(f, "{}", style::warn("Timed out."))?,
                None => writeln!(f, "{}", style::warn(entry.stderr.trim()))?,
            }
        }
        Ok(())
    }
}
