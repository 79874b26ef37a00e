mod path;
mod platform;
mod run;

pub use path::*;
pub use platform::*;
pub use run::*;
