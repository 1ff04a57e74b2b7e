//! Page design types: layouts, elements, and placement vocabulary.

use serde::{Deserialize, Serialize};

/// Page width in points (US letter).
pub const PAGE_WIDTH: f64 = 612.0;
/// Page height in points (US letter).
pub const PAGE_HEIGHT: f64 = 792.0;

/// The closed set of page kinds a book can contain.
///
/// Layout lookup tables in the designer match exhaustively on this enum,
/// so new page kinds force every table to take a position.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, strum::Display, strum::EnumIter,
)]
#[serde(rename_all = "snake_case")]
#[strum(serialize_all = "snake_case")]
pub enum PageType {
    /// Front cover
    Cover,
    /// Divider page opening a month chapter
    MonthlyDivider,
    /// Full treatment for a single race
    RacePage,
    /// Several ordinary activities on one spread
    ActivitySpread,
    /// Photo-first collage page
    PhotoCollage,
    /// Year-level statistics
    YearStats,
    /// Back cover
    BackCover,
}

impl PageType {
    /// Pages worth spending self-correction iterations on.
    pub fn is_important(&self) -> bool {
        matches!(self, PageType::Cover | PageType::RacePage | PageType::YearStats)
    }
}

/// Where the page's photography sits.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, strum::Display, strum::EnumIter,
)]
#[serde(rename_all = "snake_case")]
#[strum(serialize_all = "snake_case")]
pub enum PhotoPlacement {
    /// Large photo dominating the upper page
    Hero,
    /// Full-page photo behind all other elements
    Background,
    /// Narrow photo column beside the text
    Sidebar,
    /// Several photos in a grid
    Grid,
    /// No photo on this page
    None,
}

/// How statistics are displayed on a page.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, strum::Display, strum::EnumIter,
)]
#[serde(rename_all = "snake_case")]
#[strum(serialize_all = "snake_case")]
pub enum StatsDisplay {
    /// Dedicated stats grid
    Grid,
    /// Stats inline with running text
    Inline,
    /// No stats on this page
    None,
}

/// Page margins in points.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Margins {
    /// Top margin
    pub top: f64,
    /// Right margin
    pub right: f64,
    /// Bottom margin
    pub bottom: f64,
    /// Left margin
    pub left: f64,
}

impl Margins {
    /// Uniform margins on all four sides.
    pub fn uniform(value: f64) -> Self {
        Self {
            top: value,
            right: value,
            bottom: value,
            left: value,
        }
    }

    /// Zero margins, used by full-bleed pages.
    pub fn zero() -> Self {
        Self::uniform(0.0)
    }

    /// Smallest of the four margins.
    pub fn min(&self) -> f64 {
        self.top.min(self.right).min(self.bottom).min(self.left)
    }
}

/// Placement choices for one page.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PageLayout {
    /// Where the photography sits
    pub photo_placement: PhotoPlacement,
    /// How statistics are displayed
    pub stats_display: StatsDisplay,
    /// Page margins
    pub margins: Margins,
}

/// What kind of content an element renders.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, strum::Display, strum::EnumIter,
)]
#[serde(rename_all = "snake_case")]
#[strum(serialize_all = "snake_case")]
pub enum ElementType {
    /// Text block
    Text,
    /// Photo placeholder
    Photo,
    /// Single statistic callout
    Stat,
    /// Route map placeholder
    Map,
}

/// A point on the page, in points from the top-left corner.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Position {
    /// Horizontal offset
    pub x: f64,
    /// Vertical offset
    pub y: f64,
}

/// Element dimensions in points.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Size {
    /// Element width
    pub width: f64,
    /// Element height
    pub height: f64,
}

/// One placed element on a page.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PageElement {
    /// What the element renders
    pub element_type: ElementType,
    /// Top-left corner
    pub position: Position,
    /// Width and height
    pub size: Size,
    /// Stacking order, higher paints later
    pub z_order: i32,
    /// Text content, photo reference, or stat label
    pub content: String,
    /// Render color, hex string, when the element carries one
    #[serde(default)]
    pub color: Option<String>,
}

/// The layout + element specification for one physical page.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PageDesign {
    /// Page number, starting at 1
    pub page_number: u32,
    /// Page kind
    pub page_type: PageType,
    /// Rendering template identifier
    pub template_id: String,
    /// Source activity, when the page is about one
    #[serde(default)]
    pub activity_id: Option<String>,
    /// Placement choices
    pub layout: PageLayout,
    /// Placed elements
    pub elements: Vec<PageElement>,
    /// Judge score, once the page has been scored
    #[serde(default)]
    pub score: Option<f64>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_margins_min() {
        let m = Margins {
            top: 36.0,
            right: 48.0,
            bottom: 12.0,
            left: 48.0,
        };
        assert_eq!(m.min(), 12.0);
        assert_eq!(Margins::zero().min(), 0.0);
    }

    #[test]
    fn test_important_page_types() {
        assert!(PageType::Cover.is_important());
        assert!(PageType::RacePage.is_important());
        assert!(PageType::YearStats.is_important());
        assert!(!PageType::MonthlyDivider.is_important());
        assert!(!PageType::ActivitySpread.is_important());
        assert!(!PageType::BackCover.is_important());
    }

    #[test]
    fn test_page_type_wire_vocabulary() {
        assert_eq!(
            serde_json::to_string(&PageType::MonthlyDivider).unwrap(),
            "\"monthly_divider\""
        );
        let back: PageType = serde_json::from_str("\"race_page\"").unwrap();
        assert_eq!(back, PageType::RacePage);
    }
}
