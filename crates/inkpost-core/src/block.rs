//! Structured content blocks.
//!
//! A parsed document is an ordered sequence of [`ContentBlock`] values, one
//! per structurally distinct unit of the source. Block order always equals
//! document order. Each variant owns exactly the fields that are meaningful
//! for its kind; optional fields that were not provided by the source are
//! absent in serialized output, never defaulted to empty strings.

use serde::{Deserialize, Serialize};

/// Callout variants recognized by the parser.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CalloutVariant {
    /// Informational note (also the fallback for unrecognized keywords).
    #[default]
    Note,
    /// Practical tip.
    Tip,
    /// Warning.
    Warning,
    /// Open question.
    Question,
}

impl CalloutVariant {
    /// Resolve a callout keyword, falling back to [`Self::Note`].
    pub fn from_keyword(keyword: &str) -> Self {
        match keyword.to_ascii_lowercase().as_str() {
            "tip" => Self::Tip,
            "warning" => Self::Warning,
            "question" => Self::Question,
            _ => Self::Note,
        }
    }

    /// Default display label for the variant.
    pub fn label(&self) -> &'static str {
        match self {
            Self::Note => "Note",
            Self::Tip => "Tip",
            Self::Warning => "Warning",
            Self::Question => "Question",
        }
    }
}

/// One block of parsed document content.
///
/// Serialized form is internally tagged on `"type"` with kebab-case tags
/// (`"ordered-list"`, `"inline-code"`), matching what the rendering
/// collaborator consumes.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "kebab-case")]
pub enum ContentBlock {
    /// Plain text paragraph; inline markup passes through verbatim.
    Paragraph { content: String },

    /// Section heading with depth 1..=3.
    Heading { level: u8, content: String },

    /// Fenced code region.
    Code {
        content: String,
        /// Syntax highlighting hint taken from the fence opener.
        #[serde(skip_serializing_if = "Option::is_none")]
        language: Option<String>,
        /// Label extracted from a filename directive on the first fence line.
        #[serde(skip_serializing_if = "Option::is_none")]
        filename: Option<String>,
    },

    /// Unordered list.
    List { items: Vec<String> },

    /// Ordered list.
    OrderedList { items: Vec<String> },

    /// Blockquote with markers stripped.
    Blockquote { content: String },

    /// Thematic break.
    Divider,

    /// A standalone line of inline code.
    InlineCode { content: String },

    /// Image; `content` holds the URL so the renderer can use it directly.
    Image {
        content: String,
        alt: String,
        #[serde(skip_serializing_if = "Option::is_none")]
        caption: Option<String>,
    },

    /// Table with header row and data rows. Rows are not forced to the
    /// header width; padding short rows is the renderer's concern.
    Table {
        #[serde(rename = "tableHeaders")]
        headers: Vec<String>,
        #[serde(rename = "tableRows")]
        rows: Vec<Vec<String>>,
    },

    /// Callout box.
    Callout {
        #[serde(rename = "calloutVariant")]
        variant: CalloutVariant,
        /// Title override; when unset the renderer falls back to the
        /// variant's default label.
        #[serde(rename = "calloutTitle", skip_serializing_if = "Option::is_none")]
        title: Option<String>,
        content: String,
    },
}

impl ContentBlock {
    /// Kind tag as it appears in serialized output. Useful for logging.
    pub fn kind(&self) -> &'static str {
        match self {
            Self::Paragraph { .. } => "paragraph",
            Self::Heading { .. } => "heading",
            Self::Code { .. } => "code",
            Self::List { .. } => "list",
            Self::OrderedList { .. } => "ordered-list",
            Self::Blockquote { .. } => "blockquote",
            Self::Divider => "divider",
            Self::InlineCode { .. } => "inline-code",
            Self::Image { .. } => "image",
            Self::Table { .. } => "table",
            Self::Callout { .. } => "callout",
        }
    }
}
