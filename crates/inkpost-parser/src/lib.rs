//! inkpost Markdown parser.
//!
//! Turns a raw Markdown document with front matter into a [`BlogPost`]: an
//! ordered sequence of typed content blocks plus metadata. Parsing is pure
//! and infallible; malformed input degrades (partial metadata, implicitly
//! closed regions, paragraph fallback) instead of erroring. Inline markup is
//! not expanded; block structure is this crate's whole contract.

mod classify;
mod inline;
mod segment;

use inkpost_core::{BlogPost, ContentBlock, PostMetadata, frontmatter::FrontMatter, split_front_matter};
use tracing::debug;

/// Parse a document body (no front matter) into content blocks.
pub fn parse_blocks(body: &str) -> Vec<ContentBlock> {
    segment::segment(body)
        .iter()
        .map(classify::classify)
        .collect()
}

/// Parse a full document into a [`BlogPost`].
///
/// `fallback_id` (normally the filename stem) is used when the front matter
/// declares no `id` of its own.
pub fn parse_post(source: &str, fallback_id: &str) -> BlogPost {
    let (matter, body) = split_front_matter(source);
    let meta = assemble_metadata(matter, fallback_id);
    let content = parse_blocks(body);

    debug!(id = %meta.id, blocks = content.len(), "parsed post");
    BlogPost::new(meta, content)
}

/// Metadata-only projection: splits the front matter and never touches the
/// body. This is the cheap path for listing views.
pub fn parse_metadata(source: &str, fallback_id: &str) -> PostMetadata {
    let (matter, _) = split_front_matter(source);
    assemble_metadata(matter, fallback_id)
}

fn assemble_metadata(matter: FrontMatter, fallback_id: &str) -> PostMetadata {
    PostMetadata {
        id: matter.id.unwrap_or_else(|| fallback_id.to_string()),
        title: matter.title.unwrap_or_default(),
        category: matter.category.unwrap_or_default(),
        date: matter.date,
        tags: matter.tags,
    }
}
