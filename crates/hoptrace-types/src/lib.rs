pub mod domain;
pub mod error;
pub mod hop;

pub use domain::*;
pub use error::{Error, Result};
pub use hop::*;
