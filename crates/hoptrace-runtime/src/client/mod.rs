mod workspace;

pub use workspace::HopTrace;
