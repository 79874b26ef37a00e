mod context;

pub mod batch;
pub mod config;
pub mod history;
pub mod netinfo;
pub mod parse;
pub mod paths;
pub mod run;

pub use context::HandlerContext;
