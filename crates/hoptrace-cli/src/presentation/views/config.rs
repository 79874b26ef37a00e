use std::fmt;

use crate::presentation::formatters::style;
use crate::presentation::view_models::ConfigViewModel;

impl fmt::Display for ConfigViewModel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{}", style::dim(&format!("# {}", self.path)))?;
        write!(f, "{}", self.rendered)
    }
}
