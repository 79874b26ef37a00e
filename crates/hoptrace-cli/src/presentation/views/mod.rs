//! Text-mode rendering of the view models.

mod common;
mod config;
mod history;
mod network;
mod parse;
mod paths;
mod run;

pub use common::HopTable;
