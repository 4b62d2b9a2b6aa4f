//! Error types for the Reelfind client.
//!
//! This module defines the centralized error type [`ReelfindError`], the
//! cloneable [`SearchFailure`] that crosses the worker thread boundary, and a
//! [`Result`] alias used throughout the crate. All errors are implemented using
//! the `thiserror` crate.

use thiserror::Error;

/// User-facing text shown when the search service rate-limits the client.
pub const RATE_LIMITED_MESSAGE: &str = "Too many requests. Please wait a moment and try again.";

/// The main error type for Reelfind operations.
///
/// Search failures (`RateLimited`, `Server`, `Transport`) format to the exact
/// message shown to the user. The remaining variants cover persistence,
/// filesystem, and configuration problems.
///
/// # Examples
///
/// ```
/// use reelfind::ReelfindError;
///
/// let err = ReelfindError::Server(503);
/// assert_eq!(err.to_string(), "Server error (503). Please try again later.");
/// ```
#[derive(Debug, Error)]
pub enum ReelfindError {
    /// The search service answered HTTP 429.
    #[error("Too many requests. Please wait a moment and try again.")]
    RateLimited,

    /// The search service answered with a non-2xx status other than 429.
    #[error("Server error ({0}). Please try again later.")]
    Server(u16),

    /// No usable response: connection failure, timeout, or an undecodable body.
    ///
    /// The string is surfaced to the user unchanged.
    #[error("{0}")]
    Transport(String),

    /// Reading or writing durable storage failed.
    #[error("Storage error: {0}")]
    Storage(String),

    /// Filesystem or terminal I/O failed.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Configuration is invalid or missing.
    #[error("Configuration error: {0}")]
    Config(String),
}

/// A specialized `Result` type for Reelfind operations.
pub type Result<T> = std::result::Result<T, ReelfindError>;

/// Search failure captured for delivery from the worker thread.
///
/// [`ReelfindError`] wraps `std::io::Error` and is therefore not `Clone`;
/// worker responses carry this narrower type instead. Its `Display` output is
/// identical to the corresponding [`ReelfindError`] variant.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SearchFailure {
    /// HTTP 429.
    #[error("Too many requests. Please wait a moment and try again.")]
    RateLimited,

    /// Any other non-2xx status.
    #[error("Server error ({0}). Please try again later.")]
    Server(u16),

    /// Transport-level or decode failure, message kept verbatim.
    #[error("{0}")]
    Transport(String),
}

impl From<ReelfindError> for SearchFailure {
    fn from(err: ReelfindError) -> Self {
        match err {
            ReelfindError::RateLimited => Self::RateLimited,
            ReelfindError::Server(status) => Self::Server(status),
            ReelfindError::Transport(message) => Self::Transport(message),
            other => Self::Transport(other.to_string()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rate_limited_message_matches_constant() {
        assert_eq!(ReelfindError::RateLimited.to_string(), RATE_LIMITED_MESSAGE);
        assert_eq!(SearchFailure::RateLimited.to_string(), RATE_LIMITED_MESSAGE);
    }

    #[test]
    fn server_error_embeds_status() {
        let failure = SearchFailure::from(ReelfindError::Server(500));
        assert_eq!(failure, SearchFailure::Server(500));
        assert!(failure.to_string().contains("500"));
    }

    #[test]
    fn transport_message_is_surfaced_verbatim() {
        let failure = SearchFailure::from(ReelfindError::Transport("connection refused".into()));
        assert_eq!(failure.to_string(), "connection refused");
    }

    #[test]
    fn non_search_errors_collapse_to_transport() {
        let failure = SearchFailure::from(ReelfindError::Storage("disk full".into()));
        assert_eq!(failure, SearchFailure::Transport("Storage error: disk full".into()));
    }
}
