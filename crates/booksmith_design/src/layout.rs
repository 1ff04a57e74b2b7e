//! Pure layout lookup tables.
//!
//! Page type (plus emphasis tier for race pages) maps to a `PageLayout`,
//! and photo placement maps to a fixed rectangle. The tables match
//! exhaustively so a new page type or placement forces a decision here.

use booksmith_core::{
    EmphasisTier, Margins, PAGE_HEIGHT, PAGE_WIDTH, PageLayout, PageType, PhotoPlacement, Position,
    Size, StatsDisplay,
};

/// Standard page margin in points.
pub(crate) const DEFAULT_MARGIN: f64 = 48.0;
/// Tighter margin used by collage pages.
pub(crate) const COLLAGE_MARGIN: f64 = 24.0;

/// Look up the layout for a page type and optional emphasis tier.
pub(crate) fn layout_for(page_type: PageType, emphasis: Option<EmphasisTier>) -> PageLayout {
    match page_type {
        PageType::Cover | PageType::BackCover => PageLayout {
            photo_placement: PhotoPlacement::Background,
            stats_display: StatsDisplay::None,
            margins: Margins::zero(),
        },
        PageType::MonthlyDivider => PageLayout {
            photo_placement: PhotoPlacement::Grid,
            stats_display: StatsDisplay::None,
            margins: Margins::uniform(DEFAULT_MARGIN),
        },
        PageType::RacePage => match emphasis {
            Some(EmphasisTier::Hero) => PageLayout {
                photo_placement: PhotoPlacement::Hero,
                stats_display: StatsDisplay::Grid,
                margins: Margins::uniform(DEFAULT_MARGIN),
            },
            _ => PageLayout {
                photo_placement: PhotoPlacement::Sidebar,
                stats_display: StatsDisplay::Inline,
                margins: Margins::uniform(DEFAULT_MARGIN),
            },
        },
        PageType::ActivitySpread => PageLayout {
            photo_placement: PhotoPlacement::Sidebar,
            stats_display: StatsDisplay::Inline,
            margins: Margins::uniform(DEFAULT_MARGIN),
        },
        PageType::PhotoCollage => PageLayout {
            photo_placement: PhotoPlacement::Grid,
            stats_display: StatsDisplay::None,
            margins: Margins::uniform(COLLAGE_MARGIN),
        },
        PageType::YearStats => PageLayout {
            photo_placement: PhotoPlacement::None,
            stats_display: StatsDisplay::Grid,
            margins: Margins::uniform(DEFAULT_MARGIN),
        },
    }
}

/// Fixed rectangle and stacking order for a photo placement.
///
/// Returns `None` for [`PhotoPlacement::None`].
pub(crate) fn photo_rect(placement: PhotoPlacement) -> Option<(Position, Size, i32)> {
    match placement {
        PhotoPlacement::Hero => Some((
            Position { x: 0.0, y: 0.0 },
            Size {
                width: PAGE_WIDTH,
                height: 475.0,
            },
            0,
        )),
        PhotoPlacement::Background => Some((
            Position { x: 0.0, y: 0.0 },
            Size {
                width: PAGE_WIDTH,
                height: PAGE_HEIGHT,
            },
            -1,
        )),
        PhotoPlacement::Sidebar => Some((
            Position { x: 396.0, y: 72.0 },
            Size {
                width: 180.0,
                height: 400.0,
            },
            0,
        )),
        PhotoPlacement::Grid => Some((
            Position { x: 72.0, y: 180.0 },
            Size {
                width: 468.0,
                height: 432.0,
            },
            0,
        )),
        PhotoPlacement::None => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_covers_are_full_bleed() {
        for page_type in [PageType::Cover, PageType::BackCover] {
            let layout = layout_for(page_type, None);
            assert_eq!(layout.photo_placement, PhotoPlacement::Background);
            assert_eq!(layout.margins, Margins::zero());
        }
    }

    #[test]
    fn test_race_page_layout_keyed_by_emphasis() {
        let hero = layout_for(PageType::RacePage, Some(EmphasisTier::Hero));
        assert_eq!(hero.photo_placement, PhotoPlacement::Hero);
        assert_eq!(hero.stats_display, StatsDisplay::Grid);

        for emphasis in [Some(EmphasisTier::Featured), Some(EmphasisTier::Standard), None] {
            let layout = layout_for(PageType::RacePage, emphasis);
            assert_eq!(layout.photo_placement, PhotoPlacement::Sidebar);
            assert_eq!(layout.stats_display, StatsDisplay::Inline);
        }
    }

    #[test]
    fn test_year_stats_has_no_photo() {
        let layout = layout_for(PageType::YearStats, None);
        assert_eq!(layout.photo_placement, PhotoPlacement::None);
        assert_eq!(layout.stats_display, StatsDisplay::Grid);
        assert!(photo_rect(layout.photo_placement).is_none());
    }

    #[test]
    fn test_background_rect_sits_behind_content() {
        let (position, size, z) = photo_rect(PhotoPlacement::Background).unwrap();
        assert_eq!(position.x, 0.0);
        assert_eq!(size.height, PAGE_HEIGHT);
        assert!(z < 0);
    }
}
