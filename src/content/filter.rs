//! Content filter engine
//!
//! Pure functions that turn a collection plus a [`ContentQuery`] into the
//! visible, recency-ordered subset, and count items per category over the
//! whole collection. Nothing here mutates the input.

use crate::content::types::{CategoryCounts, ContentItem, ContentKind, ContentQuery};
use crate::error::Result;

/// Visible items for `query`, most recently updated first
///
/// The sort is stable, so items with equal `updated_at` keep their input
/// order.
pub fn filter_and_sort<'a>(items: &'a [ContentItem], query: &ContentQuery) -> Vec<&'a ContentItem> {
    let needle = query.text.to_lowercase();

    let mut visible: Vec<&ContentItem> = items
        .iter()
        .filter(|item| query.category.admits(item.kind) && matches_text(item, &needle))
        .collect();
    visible.sort_by(|a, b| b.updated_at.cmp(&a.updated_at));

    tracing::debug!(
        category = %query.category,
        query = %query.text,
        total = items.len(),
        visible = visible.len(),
        "Filtered content"
    );

    visible
}

/// Untyped entry point: parses `category` and rejects unknown values
pub fn filter_and_sort_str<'a>(
    items: &'a [ContentItem],
    category: &str,
    text: &str,
) -> Result<Vec<&'a ContentItem>> {
    let query = ContentQuery::parse(category, text)?;
    Ok(filter_and_sort(items, &query))
}

/// Whether a single item passes `query`
pub fn matches(item: &ContentItem, query: &ContentQuery) -> bool {
    query.category.admits(item.kind) && matches_text(item, &query.text.to_lowercase())
}

/// `needle` must already be lowercase. Each tag is checked on its own.
fn matches_text(item: &ContentItem, needle: &str) -> bool {
    if needle.is_empty() {
        return true;
    }
    item.title.to_lowercase().contains(needle)
        || item.body.to_lowercase().contains(needle)
        || item.tags.iter().any(|tag| tag.to_lowercase().contains(needle))
}

/// Item counts per category over the full, unfiltered collection
pub fn counts_by_category(items: &[ContentItem]) -> CategoryCounts {
    let mut counts = CategoryCounts::default();

    for item in items {
        match item.kind {
            ContentKind::Note => counts.note += 1,
            ContentKind::Conversation => counts.conversation += 1,
            ContentKind::Memory => counts.memory += 1,
        }
        counts.all += 1;
    }

    counts
}
