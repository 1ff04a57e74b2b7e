//! Design stage error types.

/// Specific error conditions for the generation stages.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, derive_more::Display)]
pub enum DesignErrorKind {
    /// The external style guide generator failed
    #[display("Style guide generation failed: {}", _0)]
    StyleGuide(String),
    /// The external curator failed to produce a book draft
    #[display("Curation failed: {}", _0)]
    Curation(String),
    /// The curator returned a draft with no entries
    #[display("Curator returned an empty book draft")]
    EmptyDraft,
    /// Failed to assemble the final artifact
    #[display("Artifact assembly failed: {}", _0)]
    ArtifactAssembly(String),
}

/// Error type for the art director, narrator, and designer stages.
///
/// # Examples
///
/// ```
/// use booksmith_error::{DesignError, DesignErrorKind};
///
/// let err = DesignError::new(DesignErrorKind::EmptyDraft);
/// assert!(format!("{}", err).contains("empty"));
/// ```
#[derive(Debug, Clone, derive_more::Display, derive_more::Error)]
#[display("Design Error: {} at line {} in {}", kind, line, file)]
pub struct DesignError {
    /// The specific error condition
    pub kind: DesignErrorKind,
    /// Line number where the error occurred
    pub line: u32,
    /// Source file where the error occurred
    pub file: &'static str,
}

impl DesignError {
    /// Create a new DesignError with automatic location tracking.
    #[track_caller]
    pub fn new(kind: DesignErrorKind) -> Self {
        let location = std::panic::Location::caller();
        Self {
            kind,
            line: location.line(),
            file: location.file(),
        }
    }
}
