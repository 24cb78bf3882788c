//! Error handling for Beltkit
//!
//! Rendering treats an unresolved catalog id as a fatal precondition
//! violation: the design record is internally inconsistent, and silently
//! substituting a default would produce paperwork for the wrong belt.
//!
//! All error types use `thiserror` for ergonomic error handling.

use thiserror::Error;

/// Rendering error type
///
/// Raised by either renderer when a design record cannot be resolved
/// against the catalogs.
#[derive(Error, Debug, Clone)]
pub enum RenderError {
    /// Leather color id not present in the catalog
    #[error("Unknown leather color: {id}")]
    UnknownColor {
        /// The color id that failed to resolve.
        id: String,
    },
}

/// Main error type for Beltkit
///
/// A unified error type used in public APIs that can fail for more than
/// one reason.
#[derive(Error, Debug)]
pub enum Error {
    /// Rendering error
    #[error(transparent)]
    Render(#[from] RenderError),

    /// Standard I/O error
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Generic error
    #[error("{0}")]
    Other(String),
}

impl Error {
    /// Create an error from a string message
    pub fn other(msg: impl Into<String>) -> Self {
        Error::Other(msg.into())
    }
}

/// Result type using Error
pub type Result<T> = std::result::Result<T, Error>;
