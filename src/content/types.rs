//! Content item types
//!
//! Defines the item record, its closed kind tag, the category filter, and
//! the per-category counts. Items use camelCase JSON with the record keys
//! the dashboard frontend expects (`type`, `content`, `source`).

use crate::error::{Error, Result};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Content kind
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ContentKind {
    Note,
    Conversation,
    Memory,
}

impl ContentKind {
    /// All kinds in sidebar order
    pub const ALL: [ContentKind; 3] = [Self::Note, Self::Conversation, Self::Memory];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Note => "note",
            Self::Conversation => "conversation",
            Self::Memory => "memory",
        }
    }
}

impl std::fmt::Display for ContentKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for ContentKind {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "note" => Ok(Self::Note),
            "conversation" => Ok(Self::Conversation),
            "memory" => Ok(Self::Memory),
            other => Err(Error::InvalidCategory(other.to_string())),
        }
    }
}

/// Category selection: everything, or a single kind
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CategoryFilter {
    #[default]
    All,
    Kind(ContentKind),
}

impl CategoryFilter {
    /// Whether an item of `kind` passes this filter
    pub fn admits(&self, kind: ContentKind) -> bool {
        match self {
            Self::All => true,
            Self::Kind(k) => *k == kind,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::All => "all",
            Self::Kind(k) => k.as_str(),
        }
    }
}

impl std::fmt::Display for CategoryFilter {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for CategoryFilter {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "all" => Ok(Self::All),
            other => other.parse().map(Self::Kind),
        }
    }
}

impl From<ContentKind> for CategoryFilter {
    fn from(kind: ContentKind) -> Self {
        Self::Kind(kind)
    }
}

impl Serialize for CategoryFilter {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}

impl<'de> Deserialize<'de> for CategoryFilter {
    fn deserialize<D: serde::Deserializer<'de>>(deserializer: D) -> std::result::Result<Self, D::Error> {
        let s = String::deserialize(deserializer)?;
        s.parse().map_err(serde::de::Error::custom)
    }
}

/// One unit of captured knowledge
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ContentItem {
    pub id: String,
    #[serde(rename = "type")]
    pub kind: ContentKind,
    pub title: String,
    #[serde(rename = "content")]
    pub body: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub summary: Option<String>,
    #[serde(default)]
    pub tags: Vec<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    /// Provenance label, e.g. the channel that produced the item
    #[serde(rename = "source", default, skip_serializing_if = "Option::is_none")]
    pub origin: Option<String>,
}

/// Caller-owned filter state handed to the engine
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ContentQuery {
    pub category: CategoryFilter,
    pub text: String,
}

impl ContentQuery {
    pub fn new(category: CategoryFilter, text: impl Into<String>) -> Self {
        Self {
            category,
            text: text.into(),
        }
    }

    /// Build a query from untyped input, rejecting unknown categories
    pub fn parse(category: &str, text: impl Into<String>) -> Result<Self> {
        Ok(Self::new(category.parse()?, text))
    }
}

/// Item counts by category over a full collection
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CategoryCounts {
    pub all: u64,
    pub note: u64,
    pub conversation: u64,
    pub memory: u64,
}

impl CategoryCounts {
    /// Count shown next to a category tab
    pub fn get(&self, category: CategoryFilter) -> u64 {
        match category {
            CategoryFilter::All => self.all,
            CategoryFilter::Kind(ContentKind::Note) => self.note,
            CategoryFilter::Kind(ContentKind::Conversation) => self.conversation,
            CategoryFilter::Kind(ContentKind::Memory) => self.memory,
        }
    }
}

/// API error response
#[derive(Debug, Serialize)]
pub struct ApiError {
    pub error: ApiErrorDetail,
}

/// API error detail
#[derive(Debug, Serialize)]
pub struct ApiErrorDetail {
    pub code: String,
    pub message: String,
}

impl ApiError {
    fn new(code: &str, message: impl Into<String>) -> Self {
        Self {
            error: ApiErrorDetail {
                code: code.to_string(),
                message: message.into(),
            },
        }
    }

    pub fn not_found(message: impl Into<String>) -> Self {
        Self::new("NOT_FOUND", message)
    }

    pub fn invalid_category(message: impl Into<String>) -> Self {
        Self::new("INVALID_CATEGORY", message)
    }
}

/// Builder for constructing `ContentItem` instances
pub struct ContentItemBuilder {
    id: Option<String>,
    kind: ContentKind,
    title: Option<String>,
    body: String,
    summary: Option<String>,
    tags: Vec<String>,
    created_at: Option<DateTime<Utc>>,
    updated_at: Option<DateTime<Utc>>,
    origin: Option<String>,
}

impl ContentItemBuilder {
    /// Create a new builder with required content kind
    pub fn new(kind: ContentKind) -> Self {
        Self {
            id: None,
            kind,
            title: None,
            body: String::new(),
            summary: None,
            tags: Vec::new(),
            created_at: None,
            updated_at: None,
            origin: None,
        }
    }

    /// Set the item id (defaults to a fresh UUID)
    pub fn id(mut self, id: impl Into<String>) -> Self {
        self.id = Some(id.into());
        self
    }

    pub fn title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    pub fn body(mut self, body: impl Into<String>) -> Self {
        self.body = body.into();
        self
    }

    pub fn summary(mut self, summary: impl Into<String>) -> Self {
        self.summary = Some(summary.into());
        self
    }

    /// Add a tag
    pub fn tag(mut self, tag: impl Into<String>) -> Self {
        self.tags.push(tag.into());
        self
    }

    /// Append tags from an iterator, preserving order
    pub fn tags<I, S>(mut self, tags: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.tags.extend(tags.into_iter().map(Into::into));
        self
    }

    pub fn created_at(mut self, ts: DateTime<Utc>) -> Self {
        self.created_at = Some(ts);
        self
    }

    /// Set the last-modified time (defaults to the creation time)
    pub fn updated_at(mut self, ts: DateTime<Utc>) -> Self {
        self.updated_at = Some(ts);
        self
    }

    pub fn origin(mut self, origin: impl Into<String>) -> Self {
        self.origin = Some(origin.into());
        self
    }

    /// Build the item, returning an error if the title is missing
    pub fn build(self) -> Result<ContentItem> {
        let title = self
            .title
            .ok_or_else(|| Error::Content("title is required".to_string()))?;
        let created_at = self.created_at.unwrap_or_else(Utc::now);

        Ok(ContentItem {
            id: self.id.unwrap_or_else(|| Uuid::new_v4().to_string()),
            kind: self.kind,
            title,
            body: self.body,
            summary: self.summary,
            tags: self.tags,
            created_at,
            updated_at: self.updated_at.unwrap_or(created_at),
            origin: self.origin,
        })
    }
}
