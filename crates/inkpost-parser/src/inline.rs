//! Inline normalization.
//!
//! Inline markup (`**bold**`, `` `code` ``, `[text](url)`) is not expanded
//! here; it passes through verbatim for the presentation layer. This module
//! only normalizes whitespace in flowing text and decodes escaped directive
//! markers so that escaped text cannot re-trigger block-level detection.

/// Characters that open a block-level construct when they start a line.
/// A backslash before one of these is an escape and is dropped.
const ESCAPABLE_MARKERS: &[char] = &['#', '>', '-', '*', '`', ':', '!', '|'];

/// Join lines into one flowing string: each line is trimmed and unescaped,
/// internal whitespace runs collapse to single spaces.
pub(crate) fn normalize_text(lines: &[&str]) -> String {
    lines
        .iter()
        .map(|line| unescape_marker(line.trim()))
        .filter(|line| !line.is_empty())
        .collect::<Vec<_>>()
        .join(" ")
        .split_whitespace()
        .collect::<Vec<_>>()
        .join(" ")
}

/// Drop a single leading backslash escaping a block marker.
pub(crate) fn unescape_marker(line: &str) -> String {
    match line.strip_prefix('\\') {
        Some(rest) if rest.starts_with(ESCAPABLE_MARKERS) => rest.to_string(),
        _ => line.to_string(),
    }
}

/// Decode escaped pipes inside a table cell.
pub(crate) fn unescape_pipes(cell: &str) -> String {
    cell.replace("\\|", "|")
}
