//! Terminal colouring, disabled for pipes and when `NO_COLOR` is set.

use crate::presentation::view_models::StatusLevel;
use is_terminal::IsTerminal;
use owo_colors::OwoColorize;
use std::sync::LazyLock;

static STDOUT_COLOR: LazyLock<bool> =
    LazyLock::new(|| std::env::var_os("NO_COLOR").is_none() && std::io::stdout().is_terminal());

static STDERR_COLOR: LazyLock<bool> =
    LazyLock::new(|| std::env::var_os("NO_COLOR").is_none() && std::io::stderr().is_terminal());

pub fn enabled() -> bool {
    *STDOUT_COLOR
}

pub fn bold(text: &str) -> String {
    if enabled() {
        text.bold().to_string()
    } else {
        text.to_string()
    }
}

pub fn dim(text: &str) -> String {
    if enabled() {
        text.dimmed().to_string()
    } else {
        text.to_string()
    }
}

pub fn warn(text: &str) -> String {
    if enabled() {
        text.yellow().to_string()
    } else {
        text.to_string()
    }
}

/// Colour by status: green success, yellow warning, plain info.
pub fn level(level: StatusLevel, text: &str) -> String {
    if !enabled() {
        return text.to_string();
    }
    match level {
        StatusLevel::Success => text.green().to_string(),
        StatusLevel::Warning => text.yellow().to_string(),
        StatusLevel::Info => text.to_string(),
    }
}

pub fn command(text: &str) -> String {
    if enabled() {
        text.cyan().to_string()
    } else {
        text.to_string()
    }
}

/// `Error:` prefix for stderr.
pub fn error_label() -> String {
    if *STDERR_COLOR {
        "Error:".red().bold().to_string()
    } else {
        "Error:".to_string()
    }
}
