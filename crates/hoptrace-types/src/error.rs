use std::fmt;

/// Result type for hoptrace-types operations
pub type Result<T> = std::result::Result<T, Error>;

/// Error types that can occur in the types layer
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Error {
    /// Platform name is not one of the supported values
    UnknownPlatform(String),
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::UnknownPlatform(name) => {
                write!(f, "Unknown platform '{}' (expected unix or windows)", name)
            }
        }
    }
}

impl std::error::Error for Error {}
