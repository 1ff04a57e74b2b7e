//! Validation gate error types.
//!
//! Gate *findings* (bad colors, dangerous content) are data, not errors; they
//! travel in `ValidationResult`. These types cover failures of the gate
//! machinery itself.

/// Specific error conditions for the validation gate machinery.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, derive_more::Display)]
pub enum GateErrorKind {
    /// A configured scan pattern failed to compile
    #[display("Invalid scan pattern '{}': {}", pattern, message)]
    InvalidPattern {
        /// The offending pattern source
        pattern: String,
        /// Compiler message
        message: String,
    },
    /// A spec could not be serialized for shape checking
    #[display("Spec serialization failed: {}", _0)]
    Serialization(String),
}

/// Error type for validation gate machinery failures.
#[derive(Debug, Clone, derive_more::Display, derive_more::Error)]
#[display("Gate Error: {} at line {} in {}", kind, line, file)]
pub struct GateError {
    /// The specific error condition
    pub kind: GateErrorKind,
    /// Line number where the error occurred
    pub line: u32,
    /// Source file where the error occurred
    pub file: &'static str,
}

impl GateError {
    /// Create a new GateError with automatic location tracking.
    #[track_caller]
    pub fn new(kind: GateErrorKind) -> Self {
        let location = std::panic::Location::caller();
        Self {
            kind,
            line: location.line(),
            file: location.file(),
        }
    }
}
