//! SecondBrain - content dashboard engine for notes, conversations and memories
//!
//! SecondBrain serves the data behind a single-page "second brain"
//! dashboard: a sidebar of category tabs, a search box, stat cards, and a
//! grid of content cards.
//!
//! ## Architecture
//!
//! ```text
//! ┌──────────────────────┐
//! │   ContentCatalog     │  sample set or JSON file, validated once
//! └──────────┬───────────┘
//!            │ &[ContentItem]
//! ┌──────────▼───────────┐
//! │    Filter engine     │  category + text filter, recency sort,
//! │                      │  counts over the full collection
//! └──────────┬───────────┘
//!            │
//! ┌──────────▼───────────┐
//! │   Dashboard view     │  stats, tabs, tags, cards
//! └──────────┬───────────┘
//!            │ JSON
//! ┌──────────▼───────────┐
//! │   HTTP API / CLI     │
//! └──────────────────────┘
//! ```
//!
//! ## Modules
//!
//! - [`content`]: item types, filter engine, catalog, items API
//! - [`dashboard`]: page model and dashboard API
//! - [`api`]: unified router and server
//! - [`config`]: configuration management

pub mod api;
pub mod config;
pub mod content;
pub mod dashboard;
pub mod error;

pub use config::BrainConfig;
pub use content::{
    counts_by_category, filter_and_sort, CategoryCounts, CategoryFilter, ContentCatalog,
    ContentItem, ContentKind, ContentQuery,
};
pub use error::{Error, Result};
