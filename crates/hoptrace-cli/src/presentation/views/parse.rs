use std::fmt;

use super::HopTable;
use crate::presentation::formatters::{style, text};
use crate::presentation::view_models::ParseViewModel;

impl fmt::Display for ParseViewModel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if let Some(lines) = &self.lines {
            for line in lines {
                let hop = line
                    .hop
                    .map(|h| format!("hop {}", h))
                    .unwrap_or_default();
                writeln!(
                    f,
                    "{:>4}  {:<12} {:<7} {}",
                    line.line_number,
                    line.kind,
                    hop,
                    style::dim(&text::truncate(&line.text, 80))
                )?;
            }
            writeln!(f)?;
        }
        write!(f, "{}", HopTable::new(&self.hops))
    }
}
