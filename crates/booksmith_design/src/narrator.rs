//! Narrator stage: chapters, highlights, and the year narrative.
//!
//! Every input activity lands in exactly one chapter (month buckets, empty
//! months dropped), the highlight scan flags noteworthy activities at most
//! once each, and the year narrative is templated from aggregate numbers.

use booksmith_core::{
    Activity, ActivityHighlight, Chapter, DesignOptions, EmphasisTier, HALF_MARATHON_METERS,
    NarratorOutput, YearNarrative,
};
use chrono::{Datelike, Utc};
use std::collections::HashSet;
use tracing::{debug, instrument};

const MONTH_NAMES: [&str; 12] = [
    "January",
    "February",
    "March",
    "April",
    "May",
    "June",
    "July",
    "August",
    "September",
    "October",
    "November",
    "December",
];

/// Month name for a 0-11 month index.
pub(crate) fn month_name(month: u32) -> &'static str {
    MONTH_NAMES[(month as usize).min(11)]
}

/// Page budget for one chapter: its divider, a page per race, and a spread
/// per ten ordinary activities.
pub(crate) fn chapter_page_count(activities: &[Activity]) -> u32 {
    let races = activities.iter().filter(|a| a.is_race()).count() as u32;
    let ordinary = activities.len() as u32 - races;
    1 + races + ordinary.div_ceil(10)
}

/// Run the narrator stage over the full activity list.
#[instrument(skip_all, fields(activities = activities.len()))]
pub(crate) fn narrate(
    activities: &[Activity],
    options: &DesignOptions,
    primary_race: Option<&Activity>,
) -> NarratorOutput {
    let year = working_year(activities, options);
    let chapters = build_chapters(activities, year);
    let highlights = build_highlights(activities);
    let year_narrative = build_year_narrative(activities, year, primary_race);
    debug!(
        year,
        chapters = chapters.len(),
        highlights = highlights.len(),
        "Narrator stage complete"
    );

    NarratorOutput {
        chapters,
        highlights,
        year_narrative,
    }
}

/// The calendar year the book covers.
///
/// An explicit option wins, then the first activity's year, then the
/// current year for empty input.
fn working_year(activities: &[Activity], options: &DesignOptions) -> i32 {
    options
        .year
        .or_else(|| activities.first().map(Activity::year))
        .unwrap_or_else(|| Utc::now().year())
}

/// Bucket activities into month chapters, dropping empty months.
fn build_chapters(activities: &[Activity], year: i32) -> Vec<Chapter> {
    let mut buckets: [Vec<Activity>; 12] = Default::default();
    for activity in activities {
        buckets[activity.month_index() as usize].push(activity.clone());
    }

    buckets
        .into_iter()
        .enumerate()
        .filter(|(_, bucket)| !bucket.is_empty())
        .map(|(month, mut bucket)| {
            bucket.sort_by_key(|a| a.start_date);
            let month = month as u32;
            let featured = featured_activity(&bucket);
            let page_count = chapter_page_count(&bucket);
            let summary = chapter_summary(&bucket, month);
            Chapter {
                id: format!("ch-{year}-{:02}", month + 1),
                title: month_name(month).to_string(),
                subtitle: None,
                month,
                year,
                activities: bucket,
                summary,
                featured_activity_id: featured,
                page_count,
            }
        })
        .collect()
}

/// The chapter's standout: its longest race, or failing that its longest
/// activity.
fn featured_activity(activities: &[Activity]) -> Option<String> {
    activities
        .iter()
        .filter(|a| a.is_race())
        .max_by(|a, b| a.distance.total_cmp(&b.distance))
        .or_else(|| {
            activities
                .iter()
                .max_by(|a, b| a.distance.total_cmp(&b.distance))
        })
        .map(|a| a.id.clone())
}

fn chapter_summary(activities: &[Activity], month: u32) -> String {
    let total_km: f64 = activities.iter().map(Activity::distance_km).sum();
    let race_names: Vec<&str> = activities
        .iter()
        .filter(|a| a.is_race())
        .map(|a| a.name.as_str())
        .collect();
    let name = month_name(month);
    match race_names.len() {
        0 => format!(
            "{name} logged {} activities covering {total_km:.1} km of steady training.",
            activities.len()
        ),
        1 => format!(
            "{name} brought {} activities and {total_km:.1} km, capped by \"{}\".",
            activities.len(),
            race_names[0]
        ),
        n => format!(
            "{name} packed {n} races ({}) into {} activities and {total_km:.1} km.",
            race_names.join(", "),
            activities.len()
        ),
    }
}

/// Scan for noteworthy activities, each flagged at most once.
///
/// Precedence: races, then the longest activity, then up to three
/// personal records, then the kudos leader when kudos run double digits.
pub(crate) fn build_highlights(activities: &[Activity]) -> Vec<ActivityHighlight> {
    let mut highlights = Vec::new();
    let mut seen: HashSet<&str> = HashSet::new();

    for activity in activities.iter().filter(|a| a.is_race()) {
        if seen.insert(&activity.id) {
            let emphasis = if activity.distance > HALF_MARATHON_METERS {
                EmphasisTier::Hero
            } else {
                EmphasisTier::Featured
            };
            highlights.push(ActivityHighlight {
                activity_id: activity.id.clone(),
                label: "Race".to_string(),
                reason: format!("Raced {:.1} km at \"{}\"", activity.distance_km(), activity.name),
                suggested_emphasis: emphasis,
            });
        }
    }

    if let Some(longest) = activities
        .iter()
        .max_by(|a, b| a.distance.total_cmp(&b.distance))
        && seen.insert(&longest.id)
    {
        highlights.push(ActivityHighlight {
            activity_id: longest.id.clone(),
            label: "Longest Activity".to_string(),
            reason: format!("Longest outing of the year at {:.1} km", longest.distance_km()),
            suggested_emphasis: EmphasisTier::Featured,
        });
    }

    let mut prs = 0;
    for activity in activities.iter().filter(|a| a.has_top_pr()) {
        if prs == 3 {
            break;
        }
        if seen.insert(&activity.id) {
            prs += 1;
            highlights.push(ActivityHighlight {
                activity_id: activity.id.clone(),
                label: "Personal Record".to_string(),
                reason: format!("Set a personal best during \"{}\"", activity.name),
                suggested_emphasis: EmphasisTier::Featured,
            });
        }
    }

    if let Some(leader) = activities.iter().max_by_key(|a| a.kudos_count)
        && leader.kudos_count > 10
        && seen.insert(&leader.id)
    {
        highlights.push(ActivityHighlight {
            activity_id: leader.id.clone(),
            label: "Crowd Favorite".to_string(),
            reason: format!("{} kudos from other athletes", leader.kudos_count),
            suggested_emphasis: EmphasisTier::Standard,
        });
    }

    highlights
}

fn build_year_narrative(
    activities: &[Activity],
    year: i32,
    primary_race: Option<&Activity>,
) -> YearNarrative {
    let total_km: f64 = activities.iter().map(Activity::distance_km).sum();
    let races = activities.iter().filter(|a| a.is_race()).count();

    let opening_paragraph = if races == 0 {
        format!(
            "{year} was a year of consistent dedication: {} activities and {total_km:.0} km \
             with no start lines, just the work.",
            activities.len()
        )
    } else {
        format!(
            "{year} covered {total_km:.0} km across {} activities, with {races} race \
             {} along the way.",
            activities.len(),
            if races == 1 { "effort" } else { "efforts" }
        )
    };

    let mut milestones = Vec::new();
    if !activities.is_empty() {
        let hours = activities.iter().map(|a| a.moving_time).sum::<u64>() / 3600;
        let climb: f64 = activities.iter().map(|a| a.elevation_gain).sum();
        milestones.push(format!(
            "{total_km:.0} km, {hours} hours moving, {climb:.0} m climbed"
        ));
    }
    if let Some(longest) = activities
        .iter()
        .max_by(|a, b| a.distance.total_cmp(&b.distance))
    {
        milestones.push(format!(
            "Longest activity: \"{}\" at {:.1} km",
            longest.name,
            longest.distance_km()
        ));
    }
    if let Some(race) = primary_race {
        milestones.push(format!(
            "Goal race: \"{}\" at {:.1} km",
            race.name,
            race.distance_km()
        ));
    }
    let prs = activities.iter().filter(|a| a.has_top_pr()).count();
    if prs > 0 {
        milestones.push(format!("{prs} personal records set"));
    }

    let closing_statement = match primary_race {
        Some(race) => format!(
            "The year built toward \"{}\", and the training held up when it mattered.",
            race.name
        ),
        None if activities.is_empty() => "Next year the story starts.".to_string(),
        None => "No single finish line defined this year; the consistent dedication did.".to_string(),
    };

    YearNarrative {
        title: format!("{year}: A Year in Motion"),
        opening_paragraph,
        milestones,
        closing_statement,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use booksmith_core::WorkoutType;
    use chrono::{TimeZone, Utc};

    fn activity(id: &str, month: u32, distance: f64) -> Activity {
        Activity {
            id: id.to_string(),
            name: format!("Run {id}"),
            workout_type: None,
            distance,
            moving_time: 3600,
            elevation_gain: 40.0,
            start_date: Utc.with_ymd_and_hms(2024, month, 10, 7, 0, 0).unwrap(),
            kudos_count: 0,
            photo_count: 0,
            pr_rank: None,
        }
    }

    fn race(id: &str, month: u32, distance: f64) -> Activity {
        Activity {
            workout_type: Some(WorkoutType::Race),
            ..activity(id, month, distance)
        }
    }

    #[test]
    fn test_every_activity_lands_in_exactly_one_chapter() {
        let activities = vec![
            activity("a", 1, 5_000.0),
            activity("b", 1, 8_000.0),
            activity("c", 3, 10_000.0),
            activity("d", 12, 12_000.0),
        ];
        let output = narrate(&activities, &DesignOptions::default(), None);
        assert_eq!(output.chapters.len(), 3);
        let total: usize = output.chapters.iter().map(|c| c.activities.len()).sum();
        assert_eq!(total, activities.len());
        // No empty months
        assert!(output.chapters.iter().all(|c| !c.activities.is_empty()));
    }

    #[test]
    fn test_single_race_chapter_shape() {
        let activities = vec![race("m", 1, 42_195.0)];
        let output = narrate(&activities, &DesignOptions::default(), None);
        assert_eq!(output.chapters.len(), 1);
        let chapter = &output.chapters[0];
        assert_eq!(chapter.title, "January");
        assert_eq!(chapter.month, 0);
        assert_eq!(chapter.year, 2024);
        // Divider plus one race page, no spreads
        assert_eq!(chapter.page_count, 2);
        assert_eq!(chapter.featured_activity_id.as_deref(), Some("m"));
    }

    #[test]
    fn test_page_count_formula() {
        let mut activities: Vec<Activity> = (0..23)
            .map(|i| activity(&format!("a{i}"), 5, 5_000.0))
            .collect();
        activities.push(race("r1", 5, 10_000.0));
        activities.push(race("r2", 5, 21_100.0));
        let output = narrate(&activities, &DesignOptions::default(), None);
        // 1 divider + 2 races + ceil(23/10) spreads
        assert_eq!(output.chapters[0].page_count, 6);
    }

    #[test]
    fn test_highlight_dedup_across_categories() {
        // One activity that is the race, the longest, a PR, and the kudos leader
        let mut star = race("star", 6, 42_195.0);
        star.pr_rank = Some(1);
        star.kudos_count = 50;
        let activities = vec![star, activity("b", 6, 5_000.0)];
        let highlights = build_highlights(&activities);
        let star_count = highlights
            .iter()
            .filter(|h| h.activity_id == "star")
            .count();
        assert_eq!(star_count, 1);
        assert_eq!(highlights[0].label, "Race");
        assert_eq!(highlights[0].suggested_emphasis, EmphasisTier::Hero);
    }

    #[test]
    fn test_short_race_is_featured_not_hero() {
        let activities = vec![race("park", 4, 5_000.0)];
        let highlights = build_highlights(&activities);
        let park = highlights.iter().find(|h| h.activity_id == "park").unwrap();
        assert_eq!(park.label, "Race");
        assert_eq!(park.suggested_emphasis, EmphasisTier::Featured);
    }

    #[test]
    fn test_at_most_three_pr_highlights() {
        let activities: Vec<Activity> = (0..5)
            .map(|i| {
                let mut a = activity(&format!("pr{i}"), 2, 5_000.0 + i as f64);
                a.pr_rank = Some(1);
                a
            })
            .collect();
        let highlights = build_highlights(&activities);
        let prs = highlights
            .iter()
            .filter(|h| h.label == "Personal Record")
            .count();
        assert_eq!(prs, 3);
    }

    #[test]
    fn test_kudos_leader_needs_double_digits() {
        let mut a = activity("k", 7, 5_000.0);
        a.kudos_count = 10;
        let highlights = build_highlights(&[a.clone(), activity("b", 7, 8_000.0)]);
        assert!(highlights.iter().all(|h| h.label != "Crowd Favorite"));
        a.kudos_count = 11;
        let highlights = build_highlights(&[a, activity("b", 7, 8_000.0)]);
        assert!(highlights.iter().any(|h| h.label == "Crowd Favorite"));
    }

    #[test]
    fn test_empty_year_narrates_without_chapters() {
        let options = DesignOptions {
            year: Some(2023),
            ..DesignOptions::default()
        };
        let output = narrate(&[], &options, None);
        assert!(output.chapters.is_empty());
        assert!(output.highlights.is_empty());
        assert_eq!(output.year_narrative.title, "2023: A Year in Motion");
        // No races at all, so the dedication opening applies
        assert!(
            output
                .year_narrative
                .opening_paragraph
                .contains("consistent dedication")
        );
    }

    #[test]
    fn test_raceless_year_mentions_consistent_dedication() {
        let activities = vec![activity("a", 1, 5_000.0), activity("b", 2, 8_000.0)];
        let output = narrate(&activities, &DesignOptions::default(), None);
        assert!(
            output
                .year_narrative
                .opening_paragraph
                .contains("consistent dedication")
        );
    }

    #[test]
    fn test_goal_race_anchors_milestones_and_closing() {
        let goal = race("goal", 10, 42_195.0);
        let activities = vec![goal.clone(), activity("a", 3, 8_000.0)];
        let output = narrate(&activities, &DesignOptions::default(), Some(&goal));
        assert!(
            output
                .year_narrative
                .milestones
                .iter()
                .any(|m| m.contains("Goal race"))
        );
        assert!(output.year_narrative.closing_statement.contains("Run goal"));
    }
}
