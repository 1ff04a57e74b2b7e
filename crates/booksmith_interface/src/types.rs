//! Wire types exchanged across the trait seams.

use booksmith_core::{Activity, PageType, Photo, StylePreference, Theme};
use serde::{Deserialize, Serialize};

/// Request sent to the style guide generator.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StyleGuideRequest {
    /// The athlete's primary goal race, if one was identified
    pub primary_race: Option<Activity>,
    /// Top photos by relevance (at most 5)
    pub top_photos: Vec<Photo>,
    /// Distinct activity type names present in the input
    pub activity_types: Vec<String>,
    /// User style direction
    pub user_preference: StylePreference,
    /// Min/max year covered by the activities
    pub year_range: Option<(i32, i32)>,
}

/// Response from the style guide generator.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StyleGuideResponse {
    /// The proposed theme
    pub theme: Theme,
    /// Free-text reasoning behind the proposal
    pub reasoning: String,
    /// Alternate themes the caller may swap in
    pub alternates: Vec<Theme>,
}

/// An abstract book entry proposed by the curator.
///
/// The curator decides which activities become which pages; the designer
/// maps each entry to a concrete layout.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BookEntry {
    /// Page kind this entry becomes
    pub page_type: PageType,
    /// Source activity, when the entry is about one
    #[serde(default)]
    pub activity_id: Option<String>,
    /// Title for the page, when the curator proposes one
    #[serde(default)]
    pub title: Option<String>,
}

/// Score and feedback from the visual judge for one page.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct JudgeVerdict {
    /// Quality score, 0-100
    pub score: f64,
    /// Actionable complaints about the design
    pub feedback: Vec<String>,
}
