//! Activity and photo input types.

use chrono::{DateTime, Datelike, Utc};
use serde::{Deserialize, Serialize};

/// Half-marathon distance in meters, the cutoff for hero emphasis on races.
pub const HALF_MARATHON_METERS: f64 = 21_097.5;

/// Workout classification attached to an activity by the upstream tracker.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, strum::Display, strum::EnumIter,
)]
#[serde(rename_all = "snake_case")]
#[strum(serialize_all = "snake_case")]
pub enum WorkoutType {
    /// Unremarkable training day
    Default,
    /// A race effort
    Race,
    /// A long endurance session
    LongRun,
    /// A structured workout (intervals, tempo)
    Workout,
}

/// A single recorded fitness activity.
///
/// # Examples
///
/// ```
/// use booksmith_core::{Activity, WorkoutType};
/// use chrono::{TimeZone, Utc};
///
/// let activity = Activity {
///     id: "a-1".to_string(),
///     name: "City Marathon".to_string(),
///     workout_type: Some(WorkoutType::Race),
///     distance: 42_195.0,
///     moving_time: 3 * 3600,
///     elevation_gain: 120.0,
///     start_date: Utc.with_ymd_and_hms(2024, 1, 14, 9, 0, 0).unwrap(),
///     kudos_count: 42,
///     photo_count: 3,
///     pr_rank: None,
/// };
///
/// assert!(activity.is_race());
/// assert_eq!(activity.month_index(), 0);
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Activity {
    /// Upstream activity identifier
    pub id: String,
    /// Display name given by the athlete
    pub name: String,
    /// Workout classification, if the tracker recorded one
    pub workout_type: Option<WorkoutType>,
    /// Distance covered in meters
    pub distance: f64,
    /// Moving time in seconds
    pub moving_time: u64,
    /// Elevation gained in meters
    pub elevation_gain: f64,
    /// When the activity started
    pub start_date: DateTime<Utc>,
    /// Kudos received from other athletes
    #[serde(default)]
    pub kudos_count: u32,
    /// Number of photos attached to this activity
    #[serde(default)]
    pub photo_count: u32,
    /// Best personal-record rank earned on this activity (1 = top)
    #[serde(default)]
    pub pr_rank: Option<u32>,
}

impl Activity {
    /// Whether this activity carries the race workout code.
    pub fn is_race(&self) -> bool {
        self.workout_type == Some(WorkoutType::Race)
    }

    /// Whether a top-ranked personal best was set on this activity.
    pub fn has_top_pr(&self) -> bool {
        self.pr_rank == Some(1)
    }

    /// Calendar month of the start date as a 0-11 index.
    pub fn month_index(&self) -> u32 {
        self.start_date.month0()
    }

    /// Calendar year of the start date.
    pub fn year(&self) -> i32 {
        self.start_date.year()
    }

    /// Distance in kilometers, for display strings.
    pub fn distance_km(&self) -> f64 {
        self.distance / 1000.0
    }
}

/// A candidate photo for the book, pre-ranked by relevance upstream.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Photo {
    /// Upstream photo identifier
    pub id: String,
    /// Source URL
    pub url: String,
    /// Activity the photo was taken on, if known
    #[serde(default)]
    pub activity_id: Option<String>,
    /// Athlete-provided caption
    #[serde(default)]
    pub caption: Option<String>,
}
