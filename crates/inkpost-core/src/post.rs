//! Post entities.

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

use crate::block::ContentBlock;

/// The subset of post identity needed for navigation and listings,
/// independent of content.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PostMetadata {
    /// Unique identifier, from front matter or derived from the filename.
    pub id: String,

    /// Display title.
    pub title: String,

    /// Category label.
    pub category: String,

    /// Publication date as authored (e.g. `2024-01-14`).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub date: Option<String>,

    /// Tags, split from the comma-separated front matter value.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub tags: Vec<String>,
}

impl PostMetadata {
    /// Parse the authored date leniently for sorting and feed output.
    ///
    /// Accepts RFC 3339 timestamps and plain `YYYY-MM-DD` dates; anything
    /// else is treated as undated.
    pub fn parsed_date(&self) -> Option<DateTime<Utc>> {
        let raw = self.date.as_deref()?.trim();
        if raw.is_empty() {
            return None;
        }

        if let Ok(dt) = DateTime::parse_from_rfc3339(raw) {
            return Some(dt.with_timezone(&Utc));
        }

        NaiveDate::parse_from_str(raw, "%Y-%m-%d")
            .ok()
            .and_then(|d| d.and_hms_opt(0, 0, 0))
            .map(|dt| dt.and_utc())
    }
}

/// A fully parsed post: metadata plus ordered content blocks.
///
/// Posts are immutable after construction; the corpus is fixed at deploy
/// time and there is no edit path.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BlogPost {
    #[serde(flatten)]
    pub meta: PostMetadata,

    /// Content blocks in document order.
    pub content: Vec<ContentBlock>,
}

impl BlogPost {
    /// Create a post from metadata and blocks.
    pub fn new(meta: PostMetadata, content: Vec<ContentBlock>) -> Self {
        Self { meta, content }
    }
}
