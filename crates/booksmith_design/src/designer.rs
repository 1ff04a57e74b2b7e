//! Designer stage: from abstract book entries to concrete page designs.

use crate::layout;
use booksmith_core::{
    ActivityHighlight, Chapter, DesignerOutput, ElementType, EmphasisTier, PageDesign, PageElement,
    PageType, Position, Size, Theme,
};
use booksmith_error::{BooksmithResult, DesignError, DesignErrorKind};
use booksmith_interface::{BookEntry, Curator};
use std::collections::HashMap;
use tracing::{debug, instrument};

/// Run the designer stage.
///
/// Flattens the chapters back into the activity list, asks the curator for
/// the page draft, and maps every entry to a concrete design. Page numbers
/// start at 1 and follow draft order. Scores stay unset here; the
/// self-correction loop fills them in afterward.
#[instrument(skip_all, fields(chapters = chapters.len(), highlights = highlights.len()))]
pub(crate) async fn design(
    chapters: &[Chapter],
    theme: &Theme,
    highlights: &[ActivityHighlight],
    curator: &dyn Curator,
) -> BooksmithResult<DesignerOutput> {
    let activities: Vec<_> = chapters
        .iter()
        .flat_map(|c| c.activities.iter().cloned())
        .collect();
    let entries = curator
        .draft_entries(&activities)
        .await
        .map_err(|e| DesignError::new(DesignErrorKind::Curation(e.to_string())))?;
    if entries.is_empty() {
        return Err(DesignError::new(DesignErrorKind::EmptyDraft).into());
    }

    let emphasis: HashMap<&str, EmphasisTier> = highlights
        .iter()
        .map(|h| (h.activity_id.as_str(), h.suggested_emphasis))
        .collect();

    let pages = entries
        .iter()
        .enumerate()
        .map(|(index, entry)| build_page(index as u32 + 1, entry, theme, &emphasis))
        .collect::<Vec<_>>();
    debug!(pages = pages.len(), "Designer stage complete");

    Ok(DesignerOutput {
        pages,
        iterations: Vec::new(),
        final_score: 0.0,
    })
}

fn build_page(
    page_number: u32,
    entry: &BookEntry,
    theme: &Theme,
    emphasis: &HashMap<&str, EmphasisTier>,
) -> PageDesign {
    let tier = entry
        .activity_id
        .as_deref()
        .and_then(|id| emphasis.get(id).copied());
    let layout = layout::layout_for(entry.page_type, tier);
    let mut elements = Vec::new();

    // Covers without an explicit title carry the theme name
    let title = entry.title.clone().or_else(|| {
        matches!(entry.page_type, PageType::Cover | PageType::BackCover)
            .then(|| theme.name.clone())
    });
    if let Some(title) = title {
        elements.push(PageElement {
            element_type: ElementType::Text,
            position: Position {
                x: layout.margins.left.max(48.0),
                y: layout.margins.top.max(48.0),
            },
            size: Size {
                width: 400.0,
                height: 64.0,
            },
            z_order: 1,
            content: title,
            color: Some(theme.primary_color.clone()),
        });
    }

    if let Some((position, size, z_order)) = layout::photo_rect(layout.photo_placement) {
        let content = match &entry.activity_id {
            Some(id) => format!("photo:{id}"),
            None => "photo placeholder".to_string(),
        };
        elements.push(PageElement {
            element_type: ElementType::Photo,
            position,
            size,
            z_order,
            content,
            color: None,
        });
    }

    PageDesign {
        page_number,
        page_type: entry.page_type,
        template_id: format!("tpl-{}", entry.page_type),
        activity_id: entry.activity_id.clone(),
        layout,
        elements,
        score: None,
    }
}
