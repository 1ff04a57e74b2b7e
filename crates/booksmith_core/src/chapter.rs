//! Narrator output types: chapters, highlights, and the year narrative.

use crate::Activity;
use serde::{Deserialize, Serialize};

/// A month-bucketed narrative grouping of activities.
///
/// Chapters are only emitted for months that contain at least one activity,
/// and every chapter budgets at least one page (its divider).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Chapter {
    /// Chapter identifier, stable within one session
    pub id: String,
    /// Chapter title (the month name)
    pub title: String,
    /// Optional subtitle
    #[serde(default)]
    pub subtitle: Option<String>,
    /// Calendar month as a 0-11 index
    pub month: u32,
    /// Calendar year
    pub year: i32,
    /// Activities assigned to this chapter
    pub activities: Vec<Activity>,
    /// Generated one-paragraph summary
    pub summary: String,
    /// The chapter's featured activity, if one stood out
    #[serde(default)]
    pub featured_activity_id: Option<String>,
    /// Page budget for this chapter, always at least 1
    pub page_count: u32,
}

/// Suggested visual emphasis for a highlighted activity.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, strum::Display, strum::EnumIter,
)]
#[serde(rename_all = "snake_case")]
#[strum(serialize_all = "snake_case")]
pub enum EmphasisTier {
    /// Full-page hero treatment
    Hero,
    /// Featured but not dominating
    Featured,
    /// Ordinary treatment
    Standard,
}

/// An activity flagged as noteworthy during the highlight scan.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ActivityHighlight {
    /// The highlighted activity
    pub activity_id: String,
    /// Short label, e.g. "Race" or "Longest Activity"
    pub label: String,
    /// Why this activity was flagged
    pub reason: String,
    /// Suggested visual emphasis
    pub suggested_emphasis: EmphasisTier,
}

/// Year-level narrative text produced by the narrator.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct YearNarrative {
    /// Book title for the year
    pub title: String,
    /// Opening paragraph
    pub opening_paragraph: String,
    /// Ordered milestone strings
    pub milestones: Vec<String>,
    /// Closing statement
    pub closing_statement: String,
}
