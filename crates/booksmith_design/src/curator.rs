//! Default curator: goal race selection and the page draft.

use crate::narrator::month_name;
use async_trait::async_trait;
use booksmith_core::{Activity, PageType};
use booksmith_error::BooksmithResult;
use booksmith_interface::{BookEntry, Curator};
use tracing::{debug, instrument};

/// Ordinary activities grouped onto one spread.
const ACTIVITIES_PER_SPREAD: usize = 10;

/// Rule-based curator.
///
/// The goal race is the longest race on record. The draft walks the year
/// chronologically: cover, then per active month a divider, a page per
/// race, and a spread per ten ordinary activities, then a photo collage
/// when any activity carries photos, year stats, and the back cover. The
/// draft is never empty, so a year with no activities still yields a book.
#[derive(Debug, Clone, Copy, Default)]
pub struct SmartDraftCurator;

impl SmartDraftCurator {
    /// Create the curator.
    pub fn new() -> Self {
        Self
    }
}

#[async_trait]
impl Curator for SmartDraftCurator {
    fn find_goal_race(&self, activities: &[Activity]) -> Option<Activity> {
        activities
            .iter()
            .filter(|a| a.is_race())
            .max_by(|a, b| a.distance.total_cmp(&b.distance))
            .cloned()
    }

    #[instrument(skip_all, fields(activities = activities.len()))]
    async fn draft_entries(&self, activities: &[Activity]) -> BooksmithResult<Vec<BookEntry>> {
        let mut entries = vec![BookEntry {
            page_type: PageType::Cover,
            activity_id: None,
            title: None,
        }];

        let mut sorted: Vec<&Activity> = activities.iter().collect();
        sorted.sort_by_key(|a| a.start_date);

        let mut month_buckets: [Vec<&Activity>; 12] = Default::default();
        for activity in sorted {
            month_buckets[activity.month_index() as usize].push(activity);
        }

        for (month, bucket) in month_buckets.iter().enumerate() {
            if bucket.is_empty() {
                continue;
            }
            entries.push(BookEntry {
                page_type: PageType::MonthlyDivider,
                activity_id: None,
                title: Some(month_name(month as u32).to_string()),
            });
            for race in bucket.iter().filter(|a| a.is_race()) {
                entries.push(BookEntry {
                    page_type: PageType::RacePage,
                    activity_id: Some(race.id.clone()),
                    title: Some(race.name.clone()),
                });
            }
            let ordinary: Vec<&&Activity> = bucket.iter().filter(|a| !a.is_race()).collect();
            for chunk in ordinary.chunks(ACTIVITIES_PER_SPREAD) {
                entries.push(BookEntry {
                    page_type: PageType::ActivitySpread,
                    activity_id: Some(chunk[0].id.clone()),
                    title: None,
                });
            }
        }

        if activities.iter().any(|a| a.photo_count > 0) {
            entries.push(BookEntry {
                page_type: PageType::PhotoCollage,
                activity_id: None,
                title: None,
            });
        }
        entries.push(BookEntry {
            page_type: PageType::YearStats,
            activity_id: None,
            title: Some("The Year in Numbers".to_string()),
        });
        entries.push(BookEntry {
            page_type: PageType::BackCover,
            activity_id: None,
            title: None,
        });

        debug!(entries = entries.len(), "Draft assembled");
        Ok(entries)
    }
}
