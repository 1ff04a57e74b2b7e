//! The self-correction loop: score, mutate, rescore.

use crate::layout;
use booksmith_core::{
    DesignIteration, ElementType, Margins, PageDesign, PageElement, PhotoPlacement, Position, Size,
    Theme,
};
use booksmith_interface::{JudgeVerdict, VisualJudge};
use serde::{Deserialize, Serialize};
use tracing::{debug, instrument};

/// Tuning for the self-correction loop.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FeedbackConfig {
    /// Maximum scoring passes per page
    #[serde(default = "default_max_iterations")]
    pub max_iterations: u32,
    /// Stop early once a page scores at least this
    #[serde(default = "default_target_score")]
    pub target_score: f64,
    /// Margin applied when the judge complains about margins
    #[serde(default = "default_safe_margin")]
    pub safe_margin: f64,
    /// Score assigned to pages the loop does not refine
    #[serde(default = "default_unrefined_score")]
    pub unrefined_score: f64,
}

fn default_max_iterations() -> u32 {
    3
}

fn default_target_score() -> f64 {
    70.0
}

fn default_safe_margin() -> f64 {
    36.0
}

fn default_unrefined_score() -> f64 {
    75.0
}

impl Default for FeedbackConfig {
    fn default() -> Self {
        Self {
            max_iterations: default_max_iterations(),
            target_score: default_target_score(),
            safe_margin: default_safe_margin(),
            unrefined_score: default_unrefined_score(),
        }
    }
}

/// What the self-correction loop produced for one page.
#[derive(Debug, Clone, PartialEq)]
pub struct FeedbackOutcome {
    /// The refined design with its last score attached
    pub design: PageDesign,
    /// Per-pass records of score, feedback, and improvements applied
    pub iterations: Vec<DesignIteration>,
    /// Scoring passes actually used, 1..=max_iterations
    pub iterations_used: u32,
    /// Score from the final pass
    pub final_score: f64,
    /// All feedback strings across passes, in order
    pub feedback: Vec<String>,
}

/// Refine one page toward the target score.
///
/// The page comes in and goes out by value; the caller's original list is
/// never mutated in place, so independent pages can be refined in parallel.
/// Termination is guaranteed by the iteration bound; the loop never fails.
/// Every complaint in a pass is applied before the next scoring pass, and
/// the final pass still applies its mutations even though no rescoring
/// follows.
#[instrument(skip_all, fields(page_number = page.page_number, page_type = %page.page_type))]
pub fn design_with_feedback(
    page: &PageDesign,
    theme: &Theme,
    judge: &dyn VisualJudge,
    config: &FeedbackConfig,
) -> FeedbackOutcome {
    let mut current = page.clone();
    let mut iterations = Vec::new();
    let mut all_feedback = Vec::new();
    let mut final_score = 0.0;
    let mut used = 0;

    for iteration in 1..=config.max_iterations.max(1) {
        used = iteration;
        let JudgeVerdict { score, feedback } = judge.score(&current, theme);
        current.score = Some(score);
        final_score = score;
        debug!(iteration, score, complaints = feedback.len(), "Judge pass complete");

        let reached_target = score >= config.target_score;
        let improvements = if reached_target {
            Vec::new()
        } else {
            apply_feedback(&mut current, &feedback, theme, config)
        };

        all_feedback.extend(feedback.iter().cloned());
        iterations.push(DesignIteration {
            iteration,
            score,
            feedback,
            improvements,
        });

        if reached_target {
            break;
        }
    }

    FeedbackOutcome {
        design: current,
        iterations,
        iterations_used: used,
        final_score,
        feedback: all_feedback,
    }
}

/// Deterministic feedback-to-mutation mapping.
///
/// Returns descriptions of the improvements applied, in application order.
fn apply_feedback(
    design: &mut PageDesign,
    feedback: &[String],
    theme: &Theme,
    config: &FeedbackConfig,
) -> Vec<String> {
    let mut improvements = Vec::new();

    for complaint in feedback {
        let complaint = complaint.to_lowercase();

        if complaint.contains("margin") {
            design.layout.margins = Margins::uniform(config.safe_margin);
            improvements.push(format!("reset all margins to {}pt", config.safe_margin));
        }

        if complaint.contains("missing content") {
            design.elements.push(PageElement {
                element_type: ElementType::Text,
                position: Position {
                    x: design.layout.margins.left,
                    y: design.layout.margins.top,
                },
                size: Size {
                    width: 300.0,
                    height: 48.0,
                },
                z_order: 1,
                content: "Placeholder text".to_string(),
                color: Some(theme.primary_color.clone()),
            });
            improvements.push("added placeholder text element".to_string());
        }

        if complaint.contains("missing a photo") || complaint.contains("missing photo") {
            design.layout.photo_placement = PhotoPlacement::Hero;
            if let Some((position, size, z_order)) = layout::photo_rect(PhotoPlacement::Hero) {
                design.elements.push(PageElement {
                    element_type: ElementType::Photo,
                    position,
                    size,
                    z_order,
                    content: "photo placeholder".to_string(),
                    color: None,
                });
            }
            improvements.push("switched to hero photo placement".to_string());
        }

        if complaint.contains("theme color") {
            for element in &mut design.elements {
                if element.element_type == ElementType::Text {
                    element.color = Some(theme.primary_color.clone());
                }
            }
            improvements.push("recolored text elements to the theme primary".to_string());
        }
    }

    improvements
}

/// Deterministic rule-based visual judge.
///
/// Grades a page by structural checks only, so rescoring reflects exactly
/// the mutations the loop applied. The scoring rubric starts at 100 and
/// deducts per complaint; full-bleed background pages are exempt from the
/// margin rule.
#[derive(Debug, Clone, Copy)]
pub struct RuleJudge {
    /// Margins below this many points draw a complaint
    pub min_margin: f64,
}

impl RuleJudge {
    /// Create a judge with the standard print margin floor.
    pub fn new() -> Self {
        Self { min_margin: 18.0 }
    }
}

impl Default for RuleJudge {
    fn default() -> Self {
        Self::new()
    }
}

impl VisualJudge for RuleJudge {
    fn score(&self, page: &PageDesign, theme: &Theme) -> JudgeVerdict {
        let mut score: f64 = 100.0;
        let mut feedback = Vec::new();

        if page.layout.photo_placement != PhotoPlacement::Background
            && page.layout.margins.min() < self.min_margin
        {
            score -= 15.0;
            feedback.push("margins too small for print".to_string());
        }

        if page.elements.is_empty() {
            score -= 25.0;
            feedback.push("page is missing content".to_string());
        }

        let has_photo_element = page
            .elements
            .iter()
            .any(|e| e.element_type == ElementType::Photo);
        if page.layout.photo_placement != PhotoPlacement::None && !has_photo_element {
            score -= 20.0;
            feedback.push("page is missing a photo".to_string());
        }

        let off_theme_text = page.elements.iter().any(|e| {
            e.element_type == ElementType::Text
                && e.color
                    .as_deref()
                    .is_none_or(|c| c != theme.primary_color && c != theme.accent_color)
        });
        if off_theme_text {
            score -= 10.0;
            feedback.push("text elements should use theme colors".to_string());
        }

        JudgeVerdict {
            score: score.max(0.0),
            feedback,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use booksmith_core::{FontPairing, PageLayout, PageType, StatsDisplay};

    fn theme() -> Theme {
        Theme {
            name: "Quiet Miles".to_string(),
            primary_color: "#1A1A1A".to_string(),
            accent_color: "#C0392B".to_string(),
            background_color: "#FAFAF8".to_string(),
            font_pairing: FontPairing {
                heading: "Playfair Display".to_string(),
                body: "Inter".to_string(),
            },
            motif: "contour lines".to_string(),
        }
    }

    fn bare_page() -> PageDesign {
        PageDesign {
            page_number: 1,
            page_type: PageType::RacePage,
            template_id: "tpl-race_page".to_string(),
            activity_id: Some("a-1".to_string()),
            layout: PageLayout {
                photo_placement: PhotoPlacement::Sidebar,
                stats_display: StatsDisplay::Inline,
                margins: Margins::uniform(4.0),
            },
            elements: vec![],
            score: None,
        }
    }

    /// Judge that always returns a fixed verdict, for bound checks.
    struct FixedJudge(f64);

    impl VisualJudge for FixedJudge {
        fn score(&self, _page: &PageDesign, _theme: &Theme) -> JudgeVerdict {
            JudgeVerdict {
                score: self.0,
                feedback: vec!["margins too small for print".to_string()],
            }
        }
    }

    #[test]
    fn test_loop_terminates_within_bound() {
        let outcome = design_with_feedback(
            &bare_page(),
            &theme(),
            &FixedJudge(10.0),
            &FeedbackConfig::default(),
        );
        assert_eq!(outcome.iterations_used, 3);
        assert_eq!(outcome.iterations.len(), 3);
        assert_eq!(outcome.final_score, 10.0);
    }

    #[test]
    fn test_loop_stops_early_at_target() {
        let outcome = design_with_feedback(
            &bare_page(),
            &theme(),
            &FixedJudge(95.0),
            &FeedbackConfig::default(),
        );
        assert_eq!(outcome.iterations_used, 1);
        assert!(outcome.iterations[0].improvements.is_empty());
    }

    #[test]
    fn test_mutations_lift_rule_judge_score() {
        let judge = RuleJudge::new();
        let before = judge.score(&bare_page(), &theme());
        assert!(before.score < 70.0);

        let outcome =
            design_with_feedback(&bare_page(), &theme(), &judge, &FeedbackConfig::default());
        assert!(outcome.final_score >= 70.0);
        assert!(outcome.iterations_used <= 3);
        // Margin complaint was acted on
        assert!(outcome.design.layout.margins.min() >= 18.0);
        // Photo complaint was acted on
        assert!(
            outcome
                .design
                .elements
                .iter()
                .any(|e| e.element_type == ElementType::Photo)
        );
    }

    #[test]
    fn test_original_page_is_not_mutated() {
        let page = bare_page();
        let _ = design_with_feedback(&page, &theme(), &RuleJudge::new(), &FeedbackConfig::default());
        assert_eq!(page.layout.margins.min(), 4.0);
        assert!(page.elements.is_empty());
    }

    #[test]
    fn test_all_complaints_applied_in_one_pass() {
        let outcome = design_with_feedback(
            &bare_page(),
            &theme(),
            &RuleJudge::new(),
            &FeedbackConfig::default(),
        );
        let first = &outcome.iterations[0];
        // Margin, content, and photo complaints all produced improvements
        assert!(first.improvements.len() >= 3);
    }

    #[test]
    fn test_recolor_targets_text_elements_only() {
        let mut page = bare_page();
        page.layout.margins = Margins::uniform(48.0);
        page.elements.push(PageElement {
            element_type: ElementType::Text,
            position: Position { x: 48.0, y: 48.0 },
            size: Size {
                width: 200.0,
                height: 40.0,
            },
            z_order: 1,
            content: "Boston Marathon".to_string(),
            color: Some("#00FF00".to_string()),
        });
        page.elements.push(PageElement {
            element_type: ElementType::Photo,
            position: Position { x: 396.0, y: 72.0 },
            size: Size {
                width: 180.0,
                height: 400.0,
            },
            z_order: 0,
            content: "photo placeholder".to_string(),
            color: None,
        });

        let outcome =
            design_with_feedback(&page, &theme(), &RuleJudge::new(), &FeedbackConfig::default());
        let text = outcome
            .design
            .elements
            .iter()
            .find(|e| e.element_type == ElementType::Text)
            .unwrap();
        assert_eq!(text.color.as_deref(), Some("#1A1A1A"));
        let photo = outcome
            .design
            .elements
            .iter()
            .find(|e| e.element_type == ElementType::Photo)
            .unwrap();
        assert!(photo.color.is_none());
    }
}
