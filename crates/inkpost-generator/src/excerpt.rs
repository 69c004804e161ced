//! Excerpt derivation for feed descriptions.
//!
//! The excerpt is the first paragraph of a post (headings, images and other
//! non-prose blocks are skipped), with inline markup characters stripped and
//! the result truncated at a word boundary.

use inkpost_core::{BlogPost, ContentBlock};

/// Maximum excerpt length in characters.
pub const EXCERPT_LIMIT: usize = 200;

/// Derive a plain-text excerpt from a post, or `None` when the post has no
/// paragraph content.
pub fn derive_excerpt(post: &BlogPost) -> Option<String> {
    let paragraph = post.content.iter().find_map(|block| match block {
        ContentBlock::Paragraph { content } => Some(content.as_str()),
        _ => None,
    })?;

    let plain = strip_inline_markup(paragraph);
    let plain = plain.trim();
    if plain.is_empty() {
        return None;
    }

    Some(truncate_at_word_boundary(plain, EXCERPT_LIMIT))
}

/// Remove inline Markdown characters, keeping the readable text. Links keep
/// their text and lose the URL.
pub fn strip_inline_markup(text: &str) -> String {
    let mut result = String::with_capacity(text.len());
    let mut chars = text.chars().peekable();

    while let Some(c) = chars.next() {
        match c {
            '*' | '`' | '_' | '~' => {}
            '[' => {}
            ']' => {
                // Drop the `(url)` that follows link text
                if chars.peek() == Some(&'(') {
                    for c in chars.by_ref() {
                        if c == ')' {
                            break;
                        }
                    }
                }
            }
            _ => result.push(c),
        }
    }

    result
}

/// Truncate text at a word boundary, respecting UTF-8 character boundaries.
pub fn truncate_at_word_boundary(text: &str, max_chars: usize) -> String {
    let char_count = text.chars().count();
    if char_count <= max_chars {
        return text.to_string();
    }

    let truncate_byte_idx = text
        .char_indices()
        .nth(max_chars)
        .map(|(idx, _)| idx)
        .unwrap_or(text.len());

    let truncated = &text[..truncate_byte_idx];

    if let Some(last_space_byte) = truncated.rfind(' ') {
        format!("{}...", &truncated[..last_space_byte])
    } else {
        format!("{truncated}...")
    }
}
