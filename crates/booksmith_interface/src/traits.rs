//! Trait definitions for the pipeline's external collaborators.

use crate::{BookEntry, JudgeVerdict, StyleGuideRequest, StyleGuideResponse};
use async_trait::async_trait;
use booksmith_core::{Activity, PageDesign, Session, SessionInput, Theme};
use booksmith_error::BooksmithResult;

/// Proposes a color/font style guide for the book.
///
/// Implementations may be model-backed or deterministic; the pipeline only
/// relies on the stated output contract.
#[async_trait]
pub trait StyleGuideGenerator: Send + Sync {
    /// Propose a theme, reasoning, and alternates for the given request.
    async fn generate(&self, request: &StyleGuideRequest) -> BooksmithResult<StyleGuideResponse>;

    /// Generator name, for logging.
    fn name(&self) -> &'static str;
}

/// Decides book structure: the goal race and the page sequence.
#[async_trait]
pub trait Curator: Send + Sync {
    /// Pick the athlete's primary goal race, at most one activity.
    fn find_goal_race(&self, activities: &[Activity]) -> Option<Activity>;

    /// Produce an ordered draft of abstract book entries.
    async fn draft_entries(&self, activities: &[Activity]) -> BooksmithResult<Vec<BookEntry>>;
}

/// Registry of fonts available to the renderer.
pub trait FontRegistry: Send + Sync {
    /// All registered font family names.
    fn all_families(&self) -> Vec<String>;

    /// Family names together with their available variants.
    fn families_with_variants(&self) -> Vec<(String, Vec<String>)>;

    /// Whether the named family ships an italic variant.
    fn has_italic(&self, family: &str) -> bool;

    /// Families suitable for body text.
    fn body_fonts(&self) -> Vec<String>;
}

/// Scores a page design and suggests improvements.
///
/// Must be a pure function of the page and theme: the self-correction loop
/// depends on rescoring reflecting only the mutations it applied.
pub trait VisualJudge: Send + Sync {
    /// Grade one page against the theme.
    fn score(&self, page: &PageDesign, theme: &Theme) -> JudgeVerdict;
}

/// Keyed storage for design sessions.
///
/// The orchestrator is the only writer for a given session id, so the store
/// only needs read-modify-write atomicity per key.
pub trait SessionStore: Send + Sync {
    /// Create and store a fresh pending session for the input.
    fn create(&self, input: SessionInput) -> BooksmithResult<Session>;

    /// Fetch a session by id.
    fn get(&self, id: &str) -> BooksmithResult<Option<Session>>;

    /// Replace the stored record wholesale, refreshing its `updated_at`.
    ///
    /// Returns `None` if the id is unknown; callers must treat that as
    /// "session vanished" rather than an error.
    fn replace(&self, session: Session) -> BooksmithResult<Option<Session>>;
}
