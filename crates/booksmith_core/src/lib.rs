//! Core data types for the Booksmith design pipeline.
//!
//! Everything session-visible lives here: activities and photos (the input),
//! themes and visual guidelines (art director output), chapters and
//! highlights (narrator output), page designs (designer output), and the
//! session record that accumulates them all.

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod activity;
mod chapter;
mod page;
mod session;
mod theme;

pub use activity::{Activity, HALF_MARATHON_METERS, Photo, WorkoutType};
pub use chapter::{ActivityHighlight, Chapter, EmphasisTier, YearNarrative};
pub use page::{
    ElementType, Margins, PAGE_HEIGHT, PAGE_WIDTH, PageDesign, PageElement, PageLayout, PageType,
    PhotoPlacement, Position, Size, StatsDisplay,
};
pub use session::{
    ArtDirectorOutput, ArtifactMetadata, DesignArtifact, DesignIteration, DesignOptions,
    DesignerOutput, NarratorOutput, Session, SessionInput, SessionOutput, SessionProgress,
    SessionStatus,
};
pub use theme::{
    ArcTone, EmphasisLevel, FontPairing, MapStyle, NarrativeArc, PhotoTreatment, StatisticsStyle,
    StylePreference, Theme, VisualGuidelines,
};
