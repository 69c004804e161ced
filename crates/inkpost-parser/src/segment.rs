//! Block segmentation.
//!
//! A single forward pass over the body lines produces raw block candidates,
//! each tagged with a provisional kind and the line range it covers. The
//! cursor never backtracks; the only lookahead is the one line a table needs
//! to confirm its separator row and the one line an image may claim as its
//! caption. Blank lines separate blocks and never produce one. Every
//! non-blank line ends up in exactly one block (paragraph is the fallback),
//! and unterminated regions close implicitly at end of document.

use std::ops::Range;

/// Provisional kind assigned by the segmenter.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum RawKind {
    Divider,
    Heading,
    Fence,
    Callout,
    Table,
    Blockquote,
    List,
    OrderedList,
    Image,
    Paragraph,
}

/// A raw block candidate: kind, source lines (delimiters included), and the
/// line range it covers in the body.
#[derive(Debug, Clone, PartialEq)]
pub(crate) struct RawBlock<'a> {
    pub kind: RawKind,
    pub lines: Vec<&'a str>,
    pub span: Range<usize>,
}

/// Split a body into raw block candidates in document order.
pub(crate) fn segment(body: &str) -> Vec<RawBlock<'_>> {
    let lines: Vec<&str> = body.lines().collect();
    let mut blocks = Vec::new();
    let mut pos = 0;

    while pos < lines.len() {
        if is_blank(lines[pos]) {
            pos += 1;
            continue;
        }

        let block = scan_block(&lines, pos);
        pos = block.span.end;
        blocks.push(block);
    }

    blocks
}

/// Scan one block starting at `pos` (a non-blank line). First matching rule
/// wins; the rules are ordered by priority.
fn scan_block<'a>(lines: &[&'a str], pos: usize) -> RawBlock<'a> {
    let line = lines[pos];

    if is_divider(line) {
        return single(RawKind::Divider, lines, pos);
    }

    if heading_level(line).is_some() {
        return single(RawKind::Heading, lines, pos);
    }

    if is_fence_open(line) {
        return scan_region(RawKind::Fence, lines, pos, |l| l.trim() == "```");
    }

    if is_callout_open(line) {
        return scan_region(RawKind::Callout, lines, pos, |l| l.trim() == ":::");
    }

    if is_table_start(lines, pos) {
        return scan_table(lines, pos);
    }

    if is_blockquote(line) {
        return scan_run(RawKind::Blockquote, lines, pos, is_blockquote);
    }

    if is_unordered_item(line) {
        return scan_run(RawKind::List, lines, pos, is_unordered_item);
    }

    if is_ordered_item(line) {
        return scan_run(RawKind::OrderedList, lines, pos, is_ordered_item);
    }

    if is_image_line(line) {
        return scan_image(lines, pos);
    }

    scan_paragraph(lines, pos)
}

/// A block covering exactly one line.
fn single<'a>(kind: RawKind, lines: &[&'a str], pos: usize) -> RawBlock<'a> {
    RawBlock {
        kind,
        lines: vec![lines[pos]],
        span: pos..pos + 1,
    }
}

/// A delimited region: opener, body lines, closed by `is_close` or end of
/// document.
fn scan_region<'a>(
    kind: RawKind,
    lines: &[&'a str],
    pos: usize,
    is_close: impl Fn(&str) -> bool,
) -> RawBlock<'a> {
    let mut end = pos + 1;
    while end < lines.len() {
        let closed = is_close(lines[end]);
        end += 1;
        if closed {
            break;
        }
    }

    RawBlock {
        kind,
        lines: lines[pos..end].to_vec(),
        span: pos..end,
    }
}

/// A run of consecutive lines all matching `keep`.
fn scan_run<'a>(
    kind: RawKind,
    lines: &[&'a str],
    pos: usize,
    keep: impl Fn(&str) -> bool,
) -> RawBlock<'a> {
    let mut end = pos + 1;
    while end < lines.len() && keep(lines[end]) {
        end += 1;
    }

    RawBlock {
        kind,
        lines: lines[pos..end].to_vec(),
        span: pos..end,
    }
}

/// Header row, separator row, then data rows until the first non-row line.
fn scan_table<'a>(lines: &[&'a str], pos: usize) -> RawBlock<'a> {
    let mut end = pos + 2;
    while end < lines.len() && is_table_row(lines[end]) {
        end += 1;
    }

    RawBlock {
        kind: RawKind::Table,
        lines: lines[pos..end].to_vec(),
        span: pos..end,
    }
}

/// An image line, optionally claiming the next line as its caption.
fn scan_image<'a>(lines: &[&'a str], pos: usize) -> RawBlock<'a> {
    let mut end = pos + 1;
    if end < lines.len() && is_caption_line(lines[end]) {
        end += 1;
    }

    RawBlock {
        kind: RawKind::Image,
        lines: lines[pos..end].to_vec(),
        span: pos..end,
    }
}

/// Consecutive non-blank lines until a higher-priority construct starts.
fn scan_paragraph<'a>(lines: &[&'a str], pos: usize) -> RawBlock<'a> {
    let mut end = pos + 1;
    while end < lines.len() && !is_blank(lines[end]) && !starts_construct(lines, end) {
        end += 1;
    }

    RawBlock {
        kind: RawKind::Paragraph,
        lines: lines[pos..end].to_vec(),
        span: pos..end,
    }
}

/// Whether the line at `pos` opens any non-paragraph construct.
fn starts_construct(lines: &[&str], pos: usize) -> bool {
    let line = lines[pos];
    is_divider(line)
        || heading_level(line).is_some()
        || is_fence_open(line)
        || is_callout_open(line)
        || is_table_start(lines, pos)
        || is_blockquote(line)
        || is_unordered_item(line)
        || is_ordered_item(line)
        || is_image_line(line)
}

pub(crate) fn is_blank(line: &str) -> bool {
    line.trim().is_empty()
}

/// Three or more `-` and nothing else.
fn is_divider(line: &str) -> bool {
    let trimmed = line.trim();
    trimmed.len() >= 3 && trimmed.bytes().all(|b| b == b'-')
}

/// A run of `#` followed by a space. Returns the raw depth; levels beyond 3
/// are clamped by the classifier.
pub(crate) fn heading_level(line: &str) -> Option<usize> {
    let hashes = line.bytes().take_while(|&b| b == b'#').count();
    if hashes >= 1 && line[hashes..].starts_with(' ') {
        Some(hashes)
    } else {
        None
    }
}

fn is_fence_open(line: &str) -> bool {
    line.starts_with("```")
}

fn is_callout_open(line: &str) -> bool {
    line.starts_with(":::") && line.trim() != ":::"
}

pub(crate) fn is_table_row(line: &str) -> bool {
    line.trim_start().starts_with('|')
}

/// A table commits only when the row at `pos` is immediately followed by a
/// separator row of dashes/colons/pipes.
fn is_table_start(lines: &[&str], pos: usize) -> bool {
    is_table_row(lines[pos])
        && lines
            .get(pos + 1)
            .is_some_and(|next| is_separator_row(next))
}

fn is_separator_row(line: &str) -> bool {
    let trimmed = line.trim();
    is_table_row(line)
        && trimmed.contains('-')
        && trimmed
            .chars()
            .all(|c| matches!(c, '-' | ':' | '|' | ' '))
}

fn is_blockquote(line: &str) -> bool {
    line.starts_with('>')
}

fn is_unordered_item(line: &str) -> bool {
    line.starts_with("- ") || line.starts_with("* ")
}

fn is_ordered_item(line: &str) -> bool {
    let digits = line.bytes().take_while(u8::is_ascii_digit).count();
    digits > 0 && line[digits..].starts_with(". ")
}

/// A line that is exactly `![alt](url)`.
pub(crate) fn is_image_line(line: &str) -> bool {
    let trimmed = line.trim();
    trimmed.starts_with("![") && trimmed.ends_with(')') && trimmed.contains("](")
}

/// A caption: a line fully wrapped in single `*…*`, which cannot be a list
/// item (those need a space after the marker).
fn is_caption_line(line: &str) -> bool {
    let trimmed = line.trim();
    trimmed.len() > 2
        && trimmed.starts_with('*')
        && trimmed.ends_with('*')
        && !trimmed.starts_with("* ")
        && !trimmed.starts_with("**")
}
