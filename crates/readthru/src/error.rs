//! Error types for readthru

use std::fmt;

/// Result type alias for readthru operations
pub type Result<T> = std::result::Result<T, Error>;

/// Error types for cache and provider operations
#[derive(Debug)]
pub enum Error {
    /// Cache constructed with an unusable capacity (must be at least 1)
    InvalidCapacity(usize),

    /// Provider has no value for the requested key
    NotFound,

    /// Provider failed while producing a value
    Provider(String),
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::InvalidCapacity(n) => write!(f, "Invalid capacity: {} (must be at least 1)", n),
            Error::NotFound => write!(f, "Key not found"),
            Error::Provider(msg) => write!(f, "Provider error: {}", msg),
        }
    }
}

impl std::error::Error for Error {}
