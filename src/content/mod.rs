//! Content module: items, the filter engine, and the catalog
//!
//! Items are notes, conversations, and memories. The engine in [`filter`]
//! computes the visible, recency-ordered subset for a category tab plus a
//! free-text query, and per-category counts over the whole collection.

pub mod catalog;
pub mod filter;
pub mod handler;
pub mod sample;
pub mod types;

pub use catalog::ContentCatalog;
pub use filter::{counts_by_category, filter_and_sort, filter_and_sort_str};
pub use handler::{content_router, ContentState};
pub use types::{
    CategoryCounts, CategoryFilter, ContentItem, ContentItemBuilder, ContentKind, ContentQuery,
};
