mod args;
mod commands;
mod errors;
mod handlers;
mod logging;
pub mod presentation;
pub mod types;

pub use args::{Cli, Commands, ConfigCommand, HistoryCommand, PathsCommand, PathsHistoryCommand};
pub use commands::run;
pub use errors::{Failure, FailureStatus};
