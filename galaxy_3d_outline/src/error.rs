//! Error types for the outline renderer
//!
//! Errors only travel across the backend seams (command encoding,
//! sequence attach/detach). The camera hooks turn them into a skipped
//! outline frame and a log line; they never reach the host.

use std::fmt;

/// Result type for outline operations
pub type Result<T> = std::result::Result<T, Error>;

/// Outline renderer errors
#[derive(Debug, Clone, PartialEq)]
pub enum Error {
    /// Backend-specific error (attach/detach failure, encoder failure, etc.)
    BackendError(String),

    /// Invalid resource (unknown temporary target, dead object, etc.)
    InvalidResource(String),

    /// Operation attempted in the wrong state (double attach, cycle in hierarchy, etc.)
    InvalidState(String),
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::BackendError(msg) => write!(f, "Backend error: {}", msg),
            Error::InvalidResource(msg) => write!(f, "Invalid resource: {}", msg),
            Error::InvalidState(msg) => write!(f, "Invalid state: {}", msg),
        }
    }
}

impl std::error::Error for Error {}

/// Build an [`Error`] and log it at ERROR severity.
///
/// The first form picks the variant, the second one defaults to
/// `BackendError`.
///
/// ```ignore
/// let err = engine_err!(InvalidResource, "galaxy3d::CommandSequence", "'{}' not allocated", name);
/// let err = engine_err!("galaxy3d::Backend", "device lost");
/// ```
#[macro_export]
macro_rules! engine_err {
    ($kind:ident, $source:expr, $($arg:tt)*) => {{
        let message = format!($($arg)*);
        $crate::engine_error!($source, "{}", message);
        $crate::galaxy3d::Error::$kind(message)
    }};
    ($source:expr, $($arg:tt)*) => {{
        let message = format!($($arg)*);
        $crate::engine_error!($source, "{}", message);
        $crate::galaxy3d::Error::BackendError(message)
    }};
}

/// Log an error and return it from the enclosing function.
#[macro_export]
macro_rules! engine_bail {
    ($($arg:tt)*) => {
        return Err($crate::engine_err!($($arg)*))
    };
}

#[cfg(test)]
#[path = "error_tests.rs"]
mod tests;
