//! Immutable content catalog
//!
//! The catalog is the validated snapshot of items the engine runs over. It
//! is built once at startup, either from the bundled samples or from a
//! JSON file, and shared read-only afterwards.

use crate::config::DatasetConfig;
use crate::content::filter::{counts_by_category, filter_and_sort};
use crate::content::sample::sample_items;
use crate::content::types::{CategoryCounts, ContentItem, ContentQuery};
use crate::error::{Error, Result};
use chrono::{DateTime, Utc};
use std::collections::HashSet;
use std::path::Path;

/// Validated, read-only item collection
#[derive(Debug, Clone)]
pub struct ContentCatalog {
    items: Vec<ContentItem>,
    counts: CategoryCounts,
}

impl ContentCatalog {
    /// Build a catalog, rejecting empty or duplicate ids
    pub fn from_items(items: Vec<ContentItem>) -> Result<Self> {
        validate_ids(&items)?;
        let counts = counts_by_category(&items);
        Ok(Self { items, counts })
    }

    /// The bundled sample collection, timestamped relative to `now`
    pub fn sample(now: DateTime<Utc>) -> Self {
        let items = sample_items(now);
        let counts = counts_by_category(&items);
        Self { items, counts }
    }

    /// Load a JSON array of items from disk
    pub fn from_json_file(path: &Path) -> Result<Self> {
        let data = std::fs::read_to_string(path)?;
        let items: Vec<ContentItem> = serde_json::from_str(&data)?;
        let catalog = Self::from_items(items)?;

        tracing::info!(
            path = %path.display(),
            items = catalog.len(),
            "Loaded content catalog"
        );
        Ok(catalog)
    }

    /// Catalog for the configured dataset, falling back to the samples
    pub fn load(dataset: &DatasetConfig, now: DateTime<Utc>) -> Result<Self> {
        match &dataset.path {
            Some(path) => Self::from_json_file(path),
            None => {
                tracing::info!("No dataset configured, serving sample content");
                Ok(Self::sample(now))
            }
        }
    }

    /// All items in their original order
    pub fn items(&self) -> &[ContentItem] {
        &self.items
    }

    /// Get an item by id
    pub fn get(&self, id: &str) -> Option<&ContentItem> {
        self.items.iter().find(|i| i.id == id)
    }

    /// Visible items for `query`, newest first
    pub fn query(&self, query: &ContentQuery) -> Vec<&ContentItem> {
        filter_and_sort(&self.items, query)
    }

    /// Per-category counts over the whole catalog
    pub fn counts(&self) -> CategoryCounts {
        self.counts
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

fn validate_ids(items: &[ContentItem]) -> Result<()> {
    let mut seen = HashSet::with_capacity(items.len());
    for item in items {
        if item.id.is_empty() {
            return Err(Error::Content(format!(
                "item '{}' has an empty id",
                item.title
            )));
        }
        if !seen.insert(item.id.as_str()) {
            return Err(Error::DuplicateId(item.id.clone()));
        }
    }
    Ok(())
}
