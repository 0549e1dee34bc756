//! Dashboard presentation model
//!
//! Everything the single-page dashboard renders: stat cards, sidebar tabs
//! with full-collection counts, popular tags, and the visible content cards.

use crate::config::DisplayConfig;
use crate::content::catalog::ContentCatalog;
use crate::content::types::{CategoryCounts, CategoryFilter, ContentItem, ContentKind, ContentQuery};
use crate::dashboard::format::{category_label, format_timestamp, kind_label, popular_tags};
use chrono::{DateTime, FixedOffset, Utc};
use serde::Serialize;

/// One stat card in the header row
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct StatCard {
    pub key: String,
    pub title: String,
    pub value: u64,
}

/// One sidebar category tab
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CategoryTab {
    pub id: CategoryFilter,
    pub label: String,
    pub count: u64,
    pub active: bool,
}

/// Display model of a single item
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ContentCard {
    pub id: String,
    #[serde(rename = "type")]
    pub kind: ContentKind,
    pub kind_label: String,
    pub title: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub summary: Option<String>,
    pub content: String,
    pub tags: Vec<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub source: Option<String>,
    pub created_at: DateTime<Utc>,
    pub created_label: String,
}

impl ContentCard {
    fn from_item(item: &ContentItem, now: DateTime<Utc>, offset: &FixedOffset) -> Self {
        Self {
            id: item.id.clone(),
            kind: item.kind,
            kind_label: kind_label(item.kind).to_string(),
            title: item.title.clone(),
            summary: item.summary.clone(),
            content: item.body.clone(),
            tags: item.tags.clone(),
            source: item.origin.clone(),
            created_at: item.created_at,
            created_label: format_timestamp(item.created_at, now, offset),
        }
    }
}

/// Full dashboard state for one (category, query) selection
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DashboardView {
    pub query: ContentQuery,
    pub stats: Vec<StatCard>,
    pub tabs: Vec<CategoryTab>,
    pub tags: Vec<String>,
    pub items: Vec<ContentCard>,
    pub visible_count: usize,
    pub empty: bool,
}

impl DashboardView {
    pub fn build(
        catalog: &ContentCatalog,
        query: &ContentQuery,
        now: DateTime<Utc>,
        display: &DisplayConfig,
    ) -> Self {
        let offset = display.offset();
        let counts = catalog.counts();

        let items: Vec<ContentCard> = catalog
            .query(query)
            .into_iter()
            .map(|item| ContentCard::from_item(item, now, &offset))
            .collect();
        let visible_count = items.len();

        Self {
            query: query.clone(),
            stats: stat_cards(&counts),
            tabs: category_tabs(&counts, query.category),
            tags: popular_tags(catalog.items(), display.popular_tag_limit),
            empty: visible_count == 0,
            visible_count,
            items,
        }
    }
}

fn stat_cards(counts: &CategoryCounts) -> Vec<StatCard> {
    let card = |key: &str, title: &str, value: u64| StatCard {
        key: key.to_string(),
        title: title.to_string(),
        value,
    };
    vec![
        card("total", "总内容数", counts.all),
        card("conversation", "本周对话", counts.conversation),
        card("note", "笔记数量", counts.note),
        card("memory", "记忆条目", counts.memory),
    ]
}

fn category_tabs(counts: &CategoryCounts, active: CategoryFilter) -> Vec<CategoryTab> {
    std::iter::once(CategoryFilter::All)
        .chain(ContentKind::ALL.into_iter().map(CategoryFilter::Kind))
        .map(|category| CategoryTab {
            id: category,
            label: category_label(category).to_string(),
            count: counts.get(category),
            active: category == active,
        })
        .collect()
}
