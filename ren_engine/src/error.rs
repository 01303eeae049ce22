//! Errors raised while building offscreen render targets

use std::fmt;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, Clone)]
pub enum Error {
    /// The graphics backend refused to create a GPU object
    ///
    /// Built by `engine_err!`, so the message has already been logged.
    Backend(String),

    /// A requested target is unusable as given, e.g. a zero-sized extent
    InvalidResource(String),
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::Backend(msg) => write!(f, "graphics backend: {}", msg),
            Error::InvalidResource(msg) => write!(f, "invalid render target: {}", msg),
        }
    }
}

impl std::error::Error for Error {}

#[cfg(test)]
#[path = "error_tests.rs"]
mod tests;
