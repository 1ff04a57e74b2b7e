//! Session records: the accumulating state of one design run.

use crate::{
    Activity, ActivityHighlight, Chapter, NarrativeArc, PageDesign, Photo, StylePreference, Theme,
    VisualGuidelines, YearNarrative,
};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Lifecycle status of a design session.
///
/// Status only moves forward through the pipeline order, or jumps to
/// [`SessionStatus::Error`] from any state and then never changes again.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, strum::Display, strum::EnumIter,
)]
#[serde(rename_all = "snake_case")]
#[strum(serialize_all = "snake_case")]
pub enum SessionStatus {
    /// Created, pipeline not yet started
    Pending,
    /// Theming in progress
    ArtDirector,
    /// Chaptering in progress
    Narrator,
    /// Page layout in progress
    Designer,
    /// Artifact attached, session finished
    Completed,
    /// Terminal failure state
    Error,
}

impl SessionStatus {
    fn order(self) -> u8 {
        match self {
            SessionStatus::Pending => 0,
            SessionStatus::ArtDirector => 1,
            SessionStatus::Narrator => 2,
            SessionStatus::Designer => 3,
            SessionStatus::Completed => 4,
            SessionStatus::Error => 5,
        }
    }

    /// Whether the state machine permits moving from `self` to `next`.
    ///
    /// `Error` is terminal; every other state may move forward or to `Error`.
    pub fn may_transition(self, next: SessionStatus) -> bool {
        if self == SessionStatus::Error {
            return false;
        }
        if next == SessionStatus::Error {
            return true;
        }
        next.order() >= self.order()
    }
}

/// Polling-visible progress for one session.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SessionProgress {
    /// Name of the stage currently running or just completed
    pub current_stage: String,
    /// Monotone integer 0-100
    pub percent_complete: u8,
    /// Human-readable progress message
    pub message: String,
}

impl SessionProgress {
    /// Zeroed progress for a freshly created session.
    pub fn zeroed() -> Self {
        Self {
            current_stage: "pending".to_string(),
            percent_complete: 0,
            message: "Design session created".to_string(),
        }
    }
}

/// Caller-supplied options for one design run.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct DesignOptions {
    /// User style direction
    #[serde(default)]
    pub style_preference: StylePreference,
    /// Emit verbose reasoning text in stage outputs
    #[serde(default)]
    pub verbose: bool,
    /// Use deterministic generators instead of model-backed ones
    #[serde(default)]
    pub deterministic: bool,
    /// Explicit working year; defaults to the first activity's year
    #[serde(default)]
    pub year: Option<i32>,
}

/// The original input attached to a session at creation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SessionInput {
    /// Full activity list for the period
    pub activities: Vec<Activity>,
    /// Candidate photos, pre-ranked by relevance
    pub photos: Vec<Photo>,
    /// Caller options
    pub options: DesignOptions,
}

/// Output of the art director stage. Produced once, immutable afterward.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ArtDirectorOutput {
    /// Chosen theme
    pub theme: Theme,
    /// Free-text reasoning from the generator
    pub reasoning: String,
    /// Alternate themes the caller may swap in
    pub alternates: Vec<Theme>,
    /// Templated narrative arc
    pub narrative_arc: NarrativeArc,
    /// Heuristic visual direction
    pub visual_guidelines: VisualGuidelines,
}

/// Output of the narrator stage.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NarratorOutput {
    /// Month-bucketed chapters, empty months omitted
    pub chapters: Vec<Chapter>,
    /// Cross-cutting noteworthy activities
    pub highlights: Vec<ActivityHighlight>,
    /// Year-level narrative text
    pub year_narrative: YearNarrative,
}

/// One pass of the self-correction loop over a page.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DesignIteration {
    /// Iteration number, starting at 1
    pub iteration: u32,
    /// Judge score for this pass
    pub score: f64,
    /// Feedback strings the judge produced
    pub feedback: Vec<String>,
    /// Improvements applied in response
    pub improvements: Vec<String>,
}

/// Output of the designer stage.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DesignerOutput {
    /// Ordered page designs, page numbers starting at 1
    pub pages: Vec<PageDesign>,
    /// Self-correction iterations recorded across all refined pages
    pub iterations: Vec<DesignIteration>,
    /// Mean score across pages after refinement
    pub final_score: f64,
}

/// Metadata attached to the final artifact.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ArtifactMetadata {
    /// Number of pages in the book
    pub total_pages: u32,
    /// When the artifact was assembled
    pub generated_at: DateTime<Utc>,
    /// Total self-correction iterations spent
    pub design_iterations: u32,
    /// Final mean page score
    pub final_score: f64,
}

/// The final persisted artifact on success.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DesignArtifact {
    /// Validated theme
    pub theme: Theme,
    /// Ordered page designs
    pub pages: Vec<PageDesign>,
    /// Assembly metadata
    pub metadata: ArtifactMetadata,
}

/// Accumulating output bag attached to a session.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct SessionOutput {
    /// Art director stage output
    #[serde(default)]
    pub art_director: Option<ArtDirectorOutput>,
    /// Narrator stage output
    #[serde(default)]
    pub narrator: Option<NarratorOutput>,
    /// Designer stage output
    #[serde(default)]
    pub designer: Option<DesignerOutput>,
    /// Final artifact, present once completed
    #[serde(default)]
    pub artifact: Option<DesignArtifact>,
}

/// One in-flight or completed design run.
///
/// Mutated exclusively by the orchestrator via whole-record replace in the
/// session store; never deleted by the core.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Session {
    /// Session identifier
    pub id: String,
    /// Lifecycle status
    pub status: SessionStatus,
    /// Polling-visible progress
    pub progress: SessionProgress,
    /// Original input
    pub input: SessionInput,
    /// Accumulating output bag
    pub output: SessionOutput,
    /// Error strings, non-empty only on failure or gate findings
    pub errors: Vec<String>,
    /// When the session was created
    pub created_at: DateTime<Utc>,
    /// When the session was last replaced in the store
    pub updated_at: DateTime<Utc>,
}

impl Session {
    /// Create a fresh pending session over the given input.
    pub fn new(input: SessionInput) -> Self {
        let now = Utc::now();
        Self {
            id: uuid::Uuid::new_v4().to_string(),
            status: SessionStatus::Pending,
            progress: SessionProgress::zeroed(),
            input,
            output: SessionOutput::default(),
            errors: Vec::new(),
            created_at: now,
            updated_at: now,
        }
    }
}
