pub mod hints;

use crate::types::{LogLevel, OutputFormat};
use clap::{Parser, Subcommand};
use hoptrace_runtime::DEFAULT_LIMIT;
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "hoptrace")]
#[command(
    about = "Run route-tracing and name-lookup tools, parse hops, and keep a per-target path tree",
    long_about = None
)]
#[command(version)]
pub struct Cli {
    /// Data directory (default: $HOPTRACE_PATH, then the system data dir)
    #[arg(long, global = true)]
    pub data_dir: Option<PathBuf>,

    #[arg(long, default_value = "text", global = true)]
    pub format: OutputFormat,

    #[arg(long, default_value = "warn", global = true)]
    pub log_level: LogLevel,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Run an allowed diagnostic command and save traced hops to history
    Run {
        /// Command line, e.g. `traceroute -n example.com`
        #[arg(trailing_var_arg = true, allow_hyphen_values = true)]
        command: Vec<String>,
    },

    /// Trace several targets one after another
    Batch {
        /// Numeric output only (no reverse lookups)
        #[arg(long, short = 'n')]
        numeric: bool,

        #[arg(long)]
        max_hops: Option<u32>,

        /// Per-probe wait in milliseconds
        #[arg(long)]
        wait_ms: Option<u64>,

        targets: Vec<String>,
    },

    History {
        #[command(subcommand)]
        command: HistoryCommand,
    },

    Paths {
        #[command(subcommand)]
        command: PathsCommand,
    },

    /// Show local network configuration
    Netinfo,

    /// Parse saved traceroute/tracert output without running anything
    Parse {
        /// Read from a file instead of stdin
        #[arg(long)]
        file: Option<String>,

        /// Show how every line was classified
        #[arg(long)]
        explain: bool,
    },

    Config {
        #[command(subcommand)]
        command: ConfigCommand,
    },
}

#[derive(Subcommand)]
pub enum HistoryCommand {
    List {
        #[arg(long, default_value_t = DEFAULT_LIMIT)]
        limit: usize,
    },

    Show {
        id: i64,
    },

    Delete {
        id: i64,
    },

    Clear,
}

#[derive(Subcommand)]
pub enum PathsCommand {
    /// Run a command and fold its hops into the path tree
    Run {
        #[arg(trailing_var_arg = true, allow_hyphen_values = true)]
        command: Vec<String>,
    },

    /// Show every hop ever seen per target
    Tree {
        /// Only list targets with their depth and branching hops
        #[arg(long)]
        summary: bool,
    },

    /// Forget the tree and the path run history
    Reset,

    History {
        #[command(subcommand)]
        command: PathsHistoryCommand,
    },
}

#[derive(Subcommand)]
pub enum PathsHistoryCommand {
    List {
        #[arg(long, default_value_t = DEFAULT_LIMIT)]
        limit: usize,
    },

    Show {
        id: i64,
    },

    Delete {
        id: i64,
    },

    /// Drop path runs but keep the tree
    Clear,
}

#[derive(Subcommand)]
pub enum ConfigCommand {
    /// Print the effective configuration
    Show,

    /// Write a default config.toml into the data directory
    Init {
        /// Overwrite an existing file
        #[arg(long)]
        force: bool,
    },
}
