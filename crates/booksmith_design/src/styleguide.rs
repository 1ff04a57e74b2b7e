//! Deterministic style guide generator.

use async_trait::async_trait;
use booksmith_core::{FontPairing, StylePreference, Theme};
use booksmith_error::BooksmithResult;
use booksmith_interface::{StyleGuideGenerator, StyleGuideRequest, StyleGuideResponse};
use tracing::debug;

/// Rule-based style guide generator.
///
/// Maps each style preference to a fixed palette and font pairing. Every
/// palette passes the gate's contrast thresholds, so a run that uses this
/// generator never trips a color finding. A model-backed generator can be
/// substituted through the [`StyleGuideGenerator`] trait.
#[derive(Debug, Clone, Copy, Default)]
pub struct DeterministicStyleGuide;

impl DeterministicStyleGuide {
    /// Create the generator.
    pub fn new() -> Self {
        Self
    }

    fn theme_for(preference: StylePreference) -> Theme {
        match preference {
            StylePreference::Minimal => Theme {
                name: "Quiet Miles".to_string(),
                primary_color: "#1A1A1A".to_string(),
                accent_color: "#C0392B".to_string(),
                background_color: "#FAFAF8".to_string(),
                font_pairing: FontPairing {
                    heading: "Playfair Display".to_string(),
                    body: "Inter".to_string(),
                },
                motif: "contour lines".to_string(),
            },
            StylePreference::Bold => Theme {
                name: "Full Gas".to_string(),
                primary_color: "#111827".to_string(),
                accent_color: "#D97706".to_string(),
                background_color: "#FFFFFF".to_string(),
                font_pairing: FontPairing {
                    heading: "Oswald".to_string(),
                    body: "Montserrat".to_string(),
                },
                motif: "speed lines".to_string(),
            },
            StylePreference::Classic => Theme {
                name: "The Long Road".to_string(),
                primary_color: "#2C3E50".to_string(),
                accent_color: "#8E6F3E".to_string(),
                background_color: "#F5F1E8".to_string(),
                font_pairing: FontPairing {
                    heading: "Playfair Display".to_string(),
                    body: "Lora".to_string(),
                },
                motif: "laurel wreaths".to_string(),
            },
        }
    }

    fn reasoning_for(request: &StyleGuideRequest, theme: &Theme) -> String {
        let mut parts = vec![format!(
            "Chose the \"{}\" palette for a {} style direction.",
            theme.name, request.user_preference
        )];
        if let Some(race) = &request.primary_race {
            parts.push(format!(
                "The year is anchored by \"{}\" ({:.1} km), so the accent color is reserved for its pages.",
                race.name,
                race.distance_km()
            ));
        }
        if let Some((start, end)) = request.year_range {
            if start == end {
                parts.push(format!("Covers activities from {start}."));
            } else {
                parts.push(format!("Covers activities from {start} through {end}."));
            }
        }
        if !request.activity_types.is_empty() {
            parts.push(format!(
                "Activity mix: {}.",
                request.activity_types.join(", ")
            ));
        }
        if !request.top_photos.is_empty() {
            parts.push(format!(
                "{} photos are available to carry the visual weight.",
                request.top_photos.len()
            ));
        }
        parts.join(" ")
    }
}

#[async_trait]
impl StyleGuideGenerator for DeterministicStyleGuide {
    async fn generate(&self, request: &StyleGuideRequest) -> BooksmithResult<StyleGuideResponse> {
        let theme = Self::theme_for(request.user_preference);
        let alternates = [
            StylePreference::Minimal,
            StylePreference::Bold,
            StylePreference::Classic,
        ]
        .into_iter()
        .filter(|p| *p != request.user_preference)
        .map(Self::theme_for)
        .collect::<Vec<_>>();
        let reasoning = Self::reasoning_for(request, &theme);
        debug!(theme = %theme.name, alternates = alternates.len(), "Style guide generated");

        Ok(StyleGuideResponse {
            theme,
            reasoning,
            alternates,
        })
    }

    fn name(&self) -> &'static str {
        "deterministic"
    }
}
