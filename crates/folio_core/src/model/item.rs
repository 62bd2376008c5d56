//! Catalog item model.
//!
//! # Responsibility
//! - Define the project and post records shown in filterable sections.
//! - Expose the filtering surface (`id`, `tags`, searchable text) through
//!   one trait so the filter engine stays item-agnostic.
//!
//! # Invariants
//! - `id` is stable for the lifetime of a catalog and never reused.
//! - Tag order is kept for display only; filtering uses membership.

use serde::{Deserialize, Serialize};
use std::borrow::Cow;
use std::fmt::{Display, Formatter};

/// Stable identifier of one catalog item.
///
/// Unique within its catalog; used as the key for the open overlay.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ItemId(pub u32);

impl Display for ItemId {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Filtering surface shared by every catalog record.
pub trait CatalogItem {
    /// Section name used in logs and CLI output (`projects`, `posts`).
    const SECTION: &'static str;

    fn id(&self) -> ItemId;
    fn title(&self) -> &str;
    fn tags(&self) -> &[String];

    /// Text matched by free-text queries.
    fn searchable_text(&self) -> Cow<'_, str>;

    /// Returns whether `tag` is declared on this item (exact match).
    fn has_tag(&self, tag: &str) -> bool {
        self.tags().iter().any(|own| own == tag)
    }
}

/// Media kind shown in a project card and its overlay.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MediaKind {
    Image,
    Video,
}

/// Media reference attached to a project.
///
/// `src` is a relative asset name; `None` renders a placeholder.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Media {
    pub kind: MediaKind,
    pub src: Option<String>,
}

impl Media {
    /// Image slot without an asset yet.
    pub fn image_placeholder() -> Self {
        Self {
            kind: MediaKind::Image,
            src: None,
        }
    }

    /// Video slot without an asset yet.
    pub fn video_placeholder() -> Self {
        Self {
            kind: MediaKind::Video,
            src: None,
        }
    }

    /// Placeholder caption used when no asset is attached.
    pub fn placeholder_label(&self) -> &'static str {
        match self.kind {
            MediaKind::Image => "Add your image",
            MediaKind::Video => "Add your video",
        }
    }
}

/// Project gallery record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Project {
    pub id: ItemId,
    pub title: String,
    pub description: String,
    pub tags: Vec<String>,
    pub media: Media,
}

impl Project {
    pub fn new(
        id: u32,
        title: impl Into<String>,
        description: impl Into<String>,
        tags: &[&str],
        media: Media,
    ) -> Self {
        Self {
            id: ItemId(id),
            title: title.into(),
            description: description.into(),
            tags: tags.iter().map(|tag| (*tag).to_string()).collect(),
            media,
        }
    }
}

impl CatalogItem for Project {
    const SECTION: &'static str = "projects";

    fn id(&self) -> ItemId {
        self.id
    }

    fn title(&self) -> &str {
        &self.title
    }

    fn tags(&self) -> &[String] {
        &self.tags
    }

    /// Projects are searchable by title only.
    fn searchable_text(&self) -> Cow<'_, str> {
        Cow::Borrowed(&self.title)
    }
}

/// Blog post record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Post {
    pub id: ItemId,
    pub title: String,
    /// ISO calendar date (`YYYY-MM-DD`).
    pub date: String,
    pub tags: Vec<String>,
    pub excerpt: String,
    /// Estimated reading time in minutes.
    pub minutes: u32,
}

impl Post {
    pub fn new(
        id: u32,
        title: impl Into<String>,
        date: impl Into<String>,
        tags: &[&str],
        excerpt: impl Into<String>,
        minutes: u32,
    ) -> Self {
        Self {
            id: ItemId(id),
            title: title.into(),
            date: date.into(),
            tags: tags.iter().map(|tag| (*tag).to_string()).collect(),
            excerpt: excerpt.into(),
            minutes,
        }
    }
}

impl CatalogItem for Post {
    const SECTION: &'static str = "posts";

    fn id(&self) -> ItemId {
        self.id
    }

    fn title(&self) -> &str {
        &self.title
    }

    fn tags(&self) -> &[String] {
        &self.tags
    }

    /// Posts match against title and excerpt joined by one space.
    fn searchable_text(&self) -> Cow<'_, str> {
        Cow::Owned(format!("{} {}", self.title, self.excerpt))
    }
}
