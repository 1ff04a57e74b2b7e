//! Theme, narrative arc, and visual guideline types.

use serde::{Deserialize, Serialize};

/// User-selected style direction for the book.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Default,
    Serialize,
    Deserialize,
    strum::Display,
    strum::EnumIter,
    strum::EnumString,
)]
#[serde(rename_all = "snake_case")]
#[strum(serialize_all = "snake_case")]
pub enum StylePreference {
    /// Restrained palette, generous whitespace
    #[default]
    Minimal,
    /// Saturated colors, heavy display type
    Bold,
    /// Serif pairing, bookish tones
    Classic,
}

/// Heading and body font selection for the book.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FontPairing {
    /// Display/heading font family
    pub heading: String,
    /// Body text font family
    pub body: String,
}

/// A color and font theme proposed by the style guide generator.
///
/// Opaque to the pipeline beyond validation: the colors are hex strings and
/// the fonts are family names checked against a registry by the gate.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Theme {
    /// Theme display name
    pub name: String,
    /// Primary text/ink color, hex string
    pub primary_color: String,
    /// Accent color, hex string
    pub accent_color: String,
    /// Page background color, hex string
    pub background_color: String,
    /// Heading/body font selection
    pub font_pairing: FontPairing,
    /// Decorative motif carried across pages
    pub motif: String,
}

/// Emotional register of the narrative arc.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, strum::Display, strum::EnumIter,
)]
#[serde(rename_all = "snake_case")]
#[strum(serialize_all = "snake_case")]
pub enum ArcTone {
    /// A goal race anchors the year
    Triumphant,
    /// Races happened, none singled out
    Energetic,
    /// A year of steady training
    Reflective,
}

/// Templated three-beat story structure for the year.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NarrativeArc {
    /// How the book opens
    pub opening: String,
    /// The peak moment of the year
    pub climax: String,
    /// How the book closes
    pub resolution: String,
    /// Overall emotional register
    pub tone: ArcTone,
}

/// How photos are treated across the book.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, strum::Display, strum::EnumIter,
)]
#[serde(rename_all = "snake_case")]
#[strum(serialize_all = "snake_case")]
pub enum PhotoTreatment {
    /// Edge-to-edge photography
    FullBleed,
    /// Sparse, framed placements
    Minimal,
}

/// How much visual drama the layouts carry.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, strum::Display, strum::EnumIter,
)]
#[serde(rename_all = "snake_case")]
#[strum(serialize_all = "snake_case")]
pub enum EmphasisLevel {
    /// Big moments get big treatments
    Dramatic,
    /// Even-handed emphasis
    Balanced,
    /// Quiet, uniform pages
    Subtle,
}

/// Where statistics live in the book.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, strum::Display, strum::EnumIter,
)]
#[serde(rename_all = "snake_case")]
#[strum(serialize_all = "snake_case")]
pub enum StatisticsStyle {
    /// Stats woven into activity pages
    Integrated,
    /// Stats get pages of their own
    DedicatedPages,
}

/// How route maps are rendered.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, strum::Display, strum::EnumIter,
)]
#[serde(rename_all = "snake_case")]
#[strum(serialize_all = "snake_case")]
pub enum MapStyle {
    /// Full-page map treatment for the goal race
    Hero,
    /// Small inline maps
    Inline,
}

/// Heuristic visual direction computed by the art director.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct VisualGuidelines {
    /// Photo treatment across the book
    pub photo_treatment: PhotoTreatment,
    /// Overall emphasis level
    pub emphasis_level: EmphasisLevel,
    /// Where statistics live
    pub statistics_style: StatisticsStyle,
    /// Map rendering style
    pub map_style: MapStyle,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_style_preference_wire_vocabulary() {
        let json = serde_json::to_string(&StylePreference::Bold).unwrap();
        assert_eq!(json, "\"bold\"");
        let back: StylePreference = serde_json::from_str("\"classic\"").unwrap();
        assert_eq!(back, StylePreference::Classic);
    }

    #[test]
    fn test_arc_tone_display() {
        assert_eq!(ArcTone::Triumphant.to_string(), "triumphant");
        assert_eq!(ArcTone::Reflective.to_string(), "reflective");
    }

    #[test]
    fn test_theme_round_trip() {
        let theme = Theme {
            name: "Quiet Miles".to_string(),
            primary_color: "#1A1A1A".to_string(),
            accent_color: "#C0392B".to_string(),
            background_color: "#FAFAF8".to_string(),
            font_pairing: FontPairing {
                heading: "Playfair Display".to_string(),
                body: "Inter".to_string(),
            },
            motif: "contour lines".to_string(),
        };
        let json = serde_json::to_string(&theme).unwrap();
        let back: Theme = serde_json::from_str(&json).unwrap();
        assert_eq!(back, theme);
    }
}
