//! Top-level error wrapper types.

use crate::{DesignError, GateError, SessionError};

/// This is the foundation error enum for the Booksmith workspace.
///
/// # Examples
///
/// ```
/// use booksmith_error::{BooksmithError, SessionError, SessionErrorKind};
///
/// let session_err = SessionError::new(SessionErrorKind::NotFound("s-1".to_string()));
/// let err: BooksmithError = session_err.into();
/// assert!(format!("{}", err).contains("Session Error"));
/// ```
#[derive(Debug, derive_more::From, derive_more::Display, derive_more::Error)]
pub enum BooksmithErrorKind {
    /// Session lifecycle error
    #[from(SessionError)]
    Session(SessionError),
    /// Generation stage error
    #[from(DesignError)]
    Design(DesignError),
    /// Validation gate machinery error
    #[from(GateError)]
    Gate(GateError),
}

/// Booksmith error with kind discrimination.
///
/// # Examples
///
/// ```
/// use booksmith_error::{BooksmithResult, DesignError, DesignErrorKind};
///
/// fn might_fail() -> BooksmithResult<()> {
///     Err(DesignError::new(DesignErrorKind::EmptyDraft))?
/// }
///
/// match might_fail() {
///     Ok(_) => println!("Success"),
///     Err(e) => println!("Error: {}", e),
/// }
/// ```
#[derive(Debug, derive_more::Display, derive_more::Error)]
#[display("Booksmith Error: {}", _0)]
pub struct BooksmithError(Box<BooksmithErrorKind>);

impl BooksmithError {
    /// Create a new error from a kind.
    pub fn new(kind: BooksmithErrorKind) -> Self {
        Self(Box::new(kind))
    }

    /// Get the error kind.
    pub fn kind(&self) -> &BooksmithErrorKind {
        &self.0
    }
}

// Generic From implementation for any type that converts to BooksmithErrorKind
impl<T> From<T> for BooksmithError
where
    T: Into<BooksmithErrorKind>,
{
    fn from(err: T) -> Self {
        Self::new(err.into())
    }
}

/// Result type for Booksmith operations.
///
/// # Examples
///
/// ```
/// use booksmith_error::{BooksmithResult, DesignError, DesignErrorKind};
///
/// fn draft() -> BooksmithResult<String> {
///     Err(DesignError::new(DesignErrorKind::Curation("no entries".to_string())))?
/// }
/// ```
pub type BooksmithResult<T> = std::result::Result<T, BooksmithError>;
