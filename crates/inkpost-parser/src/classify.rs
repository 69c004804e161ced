//! Block classification.
//!
//! Converts raw block candidates into typed [`ContentBlock`] values. Each
//! classifier is a pure function of one candidate; there is no cross-block
//! state.

use inkpost_core::block::{CalloutVariant, ContentBlock};

use crate::{
    inline::{normalize_text, unescape_pipes},
    segment::{RawBlock, RawKind, heading_level},
};

/// Classify one raw candidate.
pub(crate) fn classify(raw: &RawBlock<'_>) -> ContentBlock {
    match raw.kind {
        RawKind::Divider => ContentBlock::Divider,
        RawKind::Heading => classify_heading(raw.lines[0]),
        RawKind::Fence => classify_fence(&raw.lines),
        RawKind::Callout => classify_callout(&raw.lines),
        RawKind::Table => classify_table(&raw.lines),
        RawKind::Blockquote => classify_blockquote(&raw.lines),
        RawKind::List => ContentBlock::List {
            items: list_items(&raw.lines, strip_unordered_marker),
        },
        RawKind::OrderedList => ContentBlock::OrderedList {
            items: list_items(&raw.lines, strip_ordered_marker),
        },
        RawKind::Image => classify_image(&raw.lines),
        RawKind::Paragraph => classify_paragraph(&raw.lines),
    }
}

fn classify_heading(line: &str) -> ContentBlock {
    // The segmenter only hands over lines it matched; depth beyond 3 clamps
    let depth = heading_level(line).unwrap_or(1);
    let text = &line[depth..];

    ContentBlock::Heading {
        level: depth.min(3) as u8,
        content: normalize_text(&[text]),
    }
}

fn classify_fence(lines: &[&str]) -> ContentBlock {
    let language = fence_language(lines[0]);

    let mut body: &[&str] = &lines[1..];
    if body.last().is_some_and(|l| l.trim() == "```") {
        body = &body[..body.len() - 1];
    }

    let mut filename = None;
    if let Some(name) = body.first().and_then(|l| filename_directive(l)) {
        filename = Some(name.to_string());
        body = &body[1..];
    }

    ContentBlock::Code {
        content: body.join("\n"),
        language,
        filename,
    }
}

/// Text after the opening backticks up to the first space.
fn fence_language(opener: &str) -> Option<String> {
    let after = opener.trim_start_matches('`');
    let lang = after.split(' ').next()?.trim();
    (!lang.is_empty()).then(|| lang.to_string())
}

/// A comment line naming the file a code block belongs to, e.g.
/// `# filename: setup.sh` or `// filename: main.rs`.
fn filename_directive(line: &str) -> Option<&str> {
    let trimmed = line.trim();
    let rest = trimmed
        .strip_prefix("# ")
        .or_else(|| trimmed.strip_prefix("// "))?;
    let name = rest.trim().strip_prefix("filename:")?.trim();
    (!name.is_empty()).then_some(name)
}

fn classify_callout(lines: &[&str]) -> ContentBlock {
    let opener = lines[0].trim_start_matches(':');
    let keyword = opener.split_whitespace().next().unwrap_or("");
    let title = opener
        .trim_start()
        .strip_prefix(keyword)
        .map(str::trim)
        .filter(|t| !t.is_empty())
        .map(String::from);

    let mut body: &[&str] = &lines[1..];
    if body.last().is_some_and(|l| l.trim() == ":::") {
        body = &body[..body.len() - 1];
    }

    ContentBlock::Callout {
        variant: CalloutVariant::from_keyword(keyword),
        title,
        content: body.join("\n").trim().to_string(),
    }
}

fn classify_table(lines: &[&str]) -> ContentBlock {
    let headers = split_row(lines[0]);
    // lines[1] is the separator row
    let rows = lines.iter().skip(2).map(|l| split_row(l)).collect();

    ContentBlock::Table { headers, rows }
}

/// Split a `|`-delimited row on unescaped pipes, trimming each cell and
/// discarding the empty boundary cells produced by leading/trailing pipes.
fn split_row(line: &str) -> Vec<String> {
    let trimmed = line.trim();
    let mut cells = Vec::new();
    let mut current = String::new();
    let mut escaped = false;

    for c in trimmed.chars() {
        match c {
            '\\' if !escaped => {
                escaped = true;
                current.push(c);
            }
            '|' if !escaped => {
                cells.push(current.clone());
                current.clear();
            }
            _ => {
                escaped = false;
                current.push(c);
            }
        }
    }
    cells.push(current);

    if cells.first().is_some_and(|c| c.trim().is_empty()) {
        cells.remove(0);
    }
    if cells.last().is_some_and(|c| c.trim().is_empty()) {
        cells.pop();
    }

    cells
        .iter()
        .map(|c| unescape_pipes(c.trim()))
        .collect()
}

fn classify_blockquote(lines: &[&str]) -> ContentBlock {
    let content = lines
        .iter()
        .map(|line| {
            line.strip_prefix("> ")
                .or_else(|| line.strip_prefix('>'))
                .unwrap_or(line)
        })
        .collect::<Vec<_>>()
        .join("\n");

    ContentBlock::Blockquote {
        content: content.trim().to_string(),
    }
}

fn list_items(lines: &[&str], strip: impl Fn(&str) -> &str) -> Vec<String> {
    lines.iter().map(|l| strip(l).trim().to_string()).collect()
}

fn strip_unordered_marker(line: &str) -> &str {
    line.strip_prefix("- ")
        .or_else(|| line.strip_prefix("* "))
        .unwrap_or(line)
}

fn strip_ordered_marker(line: &str) -> &str {
    let digits = line.bytes().take_while(u8::is_ascii_digit).count();
    line[digits..].strip_prefix(". ").unwrap_or(line)
}

fn classify_image(lines: &[&str]) -> ContentBlock {
    let line = lines[0].trim();

    // `![alt](url)`; the segmenter guarantees the shape
    let (alt, url) = match line.find("](") {
        Some(mid) => (&line[2..mid], &line[mid + 2..line.len() - 1]),
        None => ("", line),
    };

    let caption = lines
        .get(1)
        .map(|l| l.trim().trim_matches('*').trim().to_string())
        .filter(|c| !c.is_empty());

    ContentBlock::Image {
        content: url.trim().to_string(),
        alt: alt.trim().to_string(),
        caption,
    }
}

fn classify_paragraph(lines: &[&str]) -> ContentBlock {
    let content = normalize_text(lines);

    // A lone line fully wrapped in single backticks is a standalone command
    if lines.len() == 1 {
        if let Some(inner) = inline_code(&content) {
            return ContentBlock::InlineCode {
                content: inner.to_string(),
            };
        }
    }

    ContentBlock::Paragraph { content }
}

fn inline_code(text: &str) -> Option<&str> {
    let inner = text.strip_prefix('`')?.strip_suffix('`')?;
    (!inner.is_empty() && !inner.contains('`')).then_some(inner)
}
