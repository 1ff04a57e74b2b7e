//! Gate input and output types.

use booksmith_core::{FontPairing, Theme};
use serde::{Deserialize, Serialize};

/// Reduced theme view the gate validates.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ThemeSpec {
    /// Primary text/ink color, hex string
    pub primary_color: String,
    /// Accent color, hex string
    pub accent_color: String,
    /// Page background color, hex string
    pub background_color: String,
    /// Heading/body font selection
    pub font_pairing: FontPairing,
}

impl From<&Theme> for ThemeSpec {
    fn from(theme: &Theme) -> Self {
        Self {
            primary_color: theme.primary_color.clone(),
            accent_color: theme.accent_color.clone(),
            background_color: theme.background_color.clone(),
            font_pairing: theme.font_pairing.clone(),
        }
    }
}

/// Optional layout settings carried alongside the theme.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct LayoutSettings {
    /// Named page size, e.g. "letter" or "a4"
    #[serde(default)]
    pub page_size: Option<String>,
    /// Uniform margin in points
    #[serde(default)]
    pub margin: Option<f64>,
    /// Whether page numbers are rendered
    #[serde(default)]
    pub show_page_numbers: Option<bool>,
}

/// Free-text content fields the gate scans and escapes.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct ContentFields {
    /// Book title
    #[serde(default)]
    pub title: Option<String>,
    /// Book subtitle
    #[serde(default)]
    pub subtitle: Option<String>,
    /// Athlete display name
    #[serde(default)]
    pub athlete_name: Option<String>,
    /// Foreword paragraph
    #[serde(default)]
    pub foreword: Option<String>,
    /// Photo captions
    #[serde(default)]
    pub captions: Vec<String>,
}

/// The gate's input: a reduced theme view plus optional layout/content.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DesignSpec {
    /// Theme subset under validation
    pub theme: ThemeSpec,
    /// Optional layout settings
    #[serde(default)]
    pub layout: Option<LayoutSettings>,
    /// Optional free-text content
    #[serde(default)]
    pub content: Option<ContentFields>,
}

/// Combined result of the four gate checks.
///
/// Invariant: `sanitized_spec` is present if and only if `errors` is empty.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ValidationResult {
    /// Whether the spec may be trusted for rendering
    pub valid: bool,
    /// Error-level findings; any entry blocks the sanitized spec
    pub errors: Vec<String>,
    /// Warning-level findings; informational only
    pub warnings: Vec<String>,
    /// Sanitized copy, present iff no errors
    #[serde(default)]
    pub sanitized_spec: Option<DesignSpec>,
}

/// Gate tuning knobs.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GateConfig {
    /// WCAG AA contrast floor for normal text
    #[serde(default = "default_normal_text_contrast")]
    pub normal_text_contrast: f64,
    /// WCAG AA contrast floor for large text
    #[serde(default = "default_large_text_contrast")]
    pub large_text_contrast: f64,
    /// Primary-vs-accent similarity floor
    #[serde(default = "default_similarity_floor")]
    pub similarity_floor: f64,
    /// Free-text length beyond which a warning is raised
    #[serde(default = "default_max_field_length")]
    pub max_field_length: usize,
    /// Preferred heading substitute for unknown fonts
    #[serde(default = "default_fallback_heading")]
    pub fallback_heading: String,
    /// Preferred body substitute for unknown fonts
    #[serde(default = "default_fallback_body")]
    pub fallback_body: String,
}

fn default_normal_text_contrast() -> f64 {
    4.5
}

fn default_large_text_contrast() -> f64 {
    3.0
}

fn default_similarity_floor() -> f64 {
    2.0
}

fn default_max_field_length() -> usize {
    10_000
}

fn default_fallback_heading() -> String {
    "Playfair Display".to_string()
}

fn default_fallback_body() -> String {
    "Inter".to_string()
}

impl Default for GateConfig {
    fn default() -> Self {
        Self {
            normal_text_contrast: default_normal_text_contrast(),
            large_text_contrast: default_large_text_contrast(),
            similarity_floor: default_similarity_floor(),
            max_field_length: default_max_field_length(),
            fallback_heading: default_fallback_heading(),
            fallback_body: default_fallback_body(),
        }
    }
}
