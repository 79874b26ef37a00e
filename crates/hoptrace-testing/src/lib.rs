//! Testing infrastructure for hoptrace integration tests.
//!
//! - `TestWorld`: isolated data directory plus CLI execution
//! - `ScriptedRunner`: process runner that replays canned tool output
//! - `fixtures`: sample tool output and fake tool binaries
//! - `assertions`: checks over the CLI's JSON envelope

pub mod assertions;
pub mod fixtures;
pub mod runner;
pub mod world;

pub use runner::{Invocation, ScriptedRunner};
pub use world::{CliResult, TestWorld};
