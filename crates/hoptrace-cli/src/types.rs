//! Values of the global `--format` and `--log-level` flags.

use clap::ValueEnum;

/// Where and how command results are written.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// Status line, tables and follow-up commands; errors go to stderr.
    Text,
    /// The result envelope as pretty JSON; errors are JSON on stdout too.
    Json,
}

/// Verbosity of hoptrace's own diagnostics on stderr.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, ValueEnum)]
pub enum LogLevel {
    Error,
    Warn,
    Info,
    /// Adds per-line parser classification and argv translation.
    Debug,
    Trace,
}

/// Crates whose events follow `--log-level`.
const HOPTRACE_CRATES: &[&str] = &[
    "hoptrace",
    "hoptrace_core",
    "hoptrace_parser",
    "hoptrace_engine",
    "hoptrace_index",
    "hoptrace_runtime",
];

impl LogLevel {
    pub fn as_str(self) -> &'static str {
        match self {
            LogLevel::Error => "error",
            LogLevel::Warn => "warn",
            LogLevel::Info => "info",
            LogLevel::Debug => "debug",
            LogLevel::Trace => "trace",
        }
    }

    /// `EnvFilter` directives: hoptrace crates at this level, everything else
    /// no noisier than `warn`.
    pub fn directives(self) -> String {
        let others = self.min(LogLevel::Warn).as_str();
        let mut directives = others.to_string();
        for krate in HOPTRACE_CRATES {
            directives.push_str(&format!(",{}={}", krate, self.as_str()));
        }
        directives
    }
}
