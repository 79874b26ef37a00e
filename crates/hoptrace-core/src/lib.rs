pub mod command;
pub mod policy;

pub use command::{ToolFamily, WaitTime, trace_binary, translate};
pub use policy::{
    CommandPolicy, CommandType, MAX_BATCH_TARGETS, MAX_COMMAND_LEN, ValidatedCommand,
    ValidationError,
};
