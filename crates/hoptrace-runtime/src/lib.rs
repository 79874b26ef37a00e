//! Orchestration for hoptrace: configuration, process execution and the
//! operations behind every command (run, batch, history, paths, netinfo).

pub mod client;
pub mod config;
pub mod error;
pub mod executor;
pub mod ops;

pub use client::HopTrace;
pub use config::{
    BatchConfig, CONFIG_FILE, Config, DATA_DIR_ENV, ExecutionConfig, FailurePolicy,
    StorageConfig, data_dir,
};
pub use error::{Error, Result};
pub use executor::{EMPTY_COMMAND, ProcessOutput, ProcessRunner, SystemRunner, TIMED_OUT};
pub use ops::{
    BatchItem, BatchOps, BatchOptions, BatchReport, CommandOps, CommandOutcome, DEFAULT_LIMIT,
    HistoryOps, NetworkInfo, NetworkOps, ParsedOutput, PathOps,
};
