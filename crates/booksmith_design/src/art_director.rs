//! Art director stage: theme selection and visual direction.

use booksmith_core::{
    Activity, ArcTone, ArtDirectorOutput, DesignOptions, EmphasisLevel, MapStyle, NarrativeArc,
    Photo, PhotoTreatment, StatisticsStyle, VisualGuidelines,
};
use booksmith_error::BooksmithResult;
use booksmith_interface::{Curator, StyleGuideGenerator, StyleGuideRequest};
use tracing::{debug, instrument};

/// Photos forwarded to the style guide generator.
const TOP_PHOTO_COUNT: usize = 5;
/// Activity count beyond which statistics earn their own pages.
const DEDICATED_STATS_THRESHOLD: usize = 50;

/// Run the art director stage.
///
/// Summarizes the input into a style guide request, asks the generator for
/// a theme, and derives the narrative arc and visual guidelines from what
/// the year actually contains.
#[instrument(skip_all, fields(generator = generator.name(), activities = activities.len()))]
pub(crate) async fn direct(
    activities: &[Activity],
    photos: &[Photo],
    options: &DesignOptions,
    curator: &dyn Curator,
    generator: &dyn StyleGuideGenerator,
) -> BooksmithResult<(ArtDirectorOutput, Option<Activity>)> {
    let primary_race = curator.find_goal_race(activities);
    let request = StyleGuideRequest {
        primary_race: primary_race.clone(),
        top_photos: photos.iter().take(TOP_PHOTO_COUNT).cloned().collect(),
        activity_types: distinct_activity_types(activities),
        user_preference: options.style_preference,
        year_range: year_range(activities),
    };

    let response = generator.generate(&request).await?;
    debug!(theme = %response.theme.name, "Theme selected");

    let narrative_arc = build_arc(activities, primary_race.as_ref());
    let visual_guidelines = build_guidelines(activities, photos, primary_race.as_ref());

    let output = ArtDirectorOutput {
        theme: response.theme,
        reasoning: response.reasoning,
        alternates: response.alternates,
        narrative_arc,
        visual_guidelines,
    };
    Ok((output, primary_race))
}

/// Distinct workout type names in first-appearance order.
///
/// Activities without a recorded type count as "default".
fn distinct_activity_types(activities: &[Activity]) -> Vec<String> {
    let mut types = Vec::new();
    for activity in activities {
        let name = activity
            .workout_type
            .map(|t| t.to_string())
            .unwrap_or_else(|| "default".to_string());
        if !types.contains(&name) {
            types.push(name);
        }
    }
    types
}

fn year_range(activities: &[Activity]) -> Option<(i32, i32)> {
    let min = activities.iter().map(Activity::year).min()?;
    let max = activities.iter().map(Activity::year).max()?;
    Some((min, max))
}

/// Three-beat arc templated from the year's shape.
///
/// A goal race makes the year triumphant, other races make it energetic,
/// and a raceless year reads as reflective.
fn build_arc(activities: &[Activity], primary_race: Option<&Activity>) -> NarrativeArc {
    let total_km: f64 = activities.iter().map(Activity::distance_km).sum();
    let count = activities.len();

    if let Some(race) = primary_race {
        return NarrativeArc {
            opening: format!("A year of building toward \"{}\".", race.name),
            climax: format!(
                "Race day: {:.1} km at \"{}\".",
                race.distance_km(),
                race.name
            ),
            resolution: format!("{total_km:.0} km later, the goal is a memory worth keeping."),
            tone: ArcTone::Triumphant,
        };
    }

    if activities.iter().any(Activity::is_race) {
        return NarrativeArc {
            opening: "A year punctuated by start lines.".to_string(),
            climax: format!("{count} activities, each race a checkpoint."),
            resolution: format!("{total_km:.0} km of racing and recovering."),
            tone: ArcTone::Energetic,
        };
    }

    NarrativeArc {
        opening: "A year measured in quiet miles.".to_string(),
        climax: format!("The habit held: {count} activities, {total_km:.0} km."),
        resolution: "No finish lines, just forward motion.".to_string(),
        tone: ArcTone::Reflective,
    }
}

fn build_guidelines(
    activities: &[Activity],
    photos: &[Photo],
    primary_race: Option<&Activity>,
) -> VisualGuidelines {
    let has_photos = !photos.is_empty() || activities.iter().any(|a| a.photo_count > 0);
    let photo_treatment = if has_photos {
        PhotoTreatment::FullBleed
    } else {
        PhotoTreatment::Minimal
    };
    let emphasis_level = if primary_race.is_some() {
        EmphasisLevel::Dramatic
    } else if activities.iter().any(Activity::is_race) {
        EmphasisLevel::Balanced
    } else {
        EmphasisLevel::Subtle
    };
    let statistics_style = if activities.len() > DEDICATED_STATS_THRESHOLD {
        StatisticsStyle::DedicatedPages
    } else {
        StatisticsStyle::Integrated
    };
    let map_style = if primary_race.is_some() {
        MapStyle::Hero
    } else {
        MapStyle::Inline
    };

    VisualGuidelines {
        photo_treatment,
        emphasis_level,
        statistics_style,
        map_style,
    }
}
