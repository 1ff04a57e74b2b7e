//! Session error types.

/// Specific error conditions for session lifecycle operations.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, derive_more::Display)]
pub enum SessionErrorKind {
    /// Session id is not present in the store
    #[display("Session '{}' not found", _0)]
    NotFound(String),
    /// Status may only move forward, or jump to error
    #[display("Invalid status transition from '{}' to '{}'", from, to)]
    InvalidTransition {
        /// Status the session held before the transition
        from: String,
        /// Status the transition attempted to set
        to: String,
    },
    /// The store's interior lock was poisoned by a panicking writer
    #[display("Session store lock poisoned: {}", _0)]
    StorePoisoned(String),
}

/// Error type for session lifecycle operations.
///
/// # Examples
///
/// ```
/// use booksmith_error::{SessionError, SessionErrorKind};
///
/// let err = SessionError::new(SessionErrorKind::NotFound("s-1".to_string()));
/// assert!(format!("{}", err).contains("not found"));
/// ```
#[derive(Debug, Clone, derive_more::Display, derive_more::Error)]
#[display("Session Error: {} at line {} in {}", kind, line, file)]
pub struct SessionError {
    /// The specific error condition
    pub kind: SessionErrorKind,
    /// Line number where the error occurred
    pub line: u32,
    /// Source file where the error occurred
    pub file: &'static str,
}

impl SessionError {
    /// Create a new SessionError with automatic location tracking.
    #[track_caller]
    pub fn new(kind: SessionErrorKind) -> Self {
        let location = std::panic::Location::caller();
        Self {
            kind,
            line: location.line(),
            file: location.file(),
        }
    }
}
