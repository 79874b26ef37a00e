use std::fmt;

use crate::presentation::formatters::style;
use crate::presentation::view_models::NetworkViewModel;

impl fmt::Display for NetworkViewModel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{} {}", style::bold("Hostname:"), self.hostname)?;
        writeln!(f, "{} {}", style::bold("External IP:"), self.external_ip)?;
        writeln!(f, "{} {}", style::bold("Collected:"), self.timestamp)?;
        writeln!(f)?;
        writeln!(f, "{}", style::bold("Default route"))?;
        writeln!(f, "{}", self.default_route.trim_end())?;
        writeln!(f)?;
        writeln!(f, "{}", style::bold("Interfaces"))?;
        writeln!(f, "{}", self.ip_addresses.trim_end())
    }
}
