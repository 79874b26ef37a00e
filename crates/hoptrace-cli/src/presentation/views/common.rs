use std::fmt;

use crate::presentation::formatters::{style, text};
use crate::presentation::view_models::{ActionViewModel, HopRowViewModel};
use hoptrace_types::TIMEOUT_IP;

/// Fixed-width hop table.
pub struct HopTable<'a> {
    rows: &'a [HopRowViewModel],
}

impl<'a> HopTable<'a> {
    pub fn new(rows: &'a [HopRowViewModel]) -> Self {
        Self { rows }
    }
}

impl fmt::Display for HopTable<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.rows.is_empty() {
            return writeln!(f, "No hops.");
        }

        writeln!(
            f,
            "{}",
            style::bold(&format!(
                "{:>3}  {:<32} {:<16} {:>10} {:>10} {:>10}",
                "HOP", "HOST", "IP", "RTT1", "RTT2", "RTT3"
            ))
        )?;
        for row in self.rows {
            let line = format!(
                "{:>3}  {:<32} {:<16} {:>10} {:>10} {:>10}",
                row.hop,
                text::truncate(&row.hostname, 32),
                row.ip,
                text::rtt(row.rtt1.as_deref()),
                text::rtt(row.rtt2.as_deref()),
                text::rtt(row.rtt3.as_deref()),
            );
            if row.ip == TIMEOUT_IP {
                writeln!(f, "{}", style::dim(&line))?;
            } else {
                writeln!(f, "{}", line)?;
            }
        }
        Ok(())
    }
}

impl fmt::Display for ActionViewModel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.affected {
            Some(count) => writeln!(f, "{} ({} affected)", self.message, count),
            None => writeln!(f, "{}", self.message),
        }
    }
}
