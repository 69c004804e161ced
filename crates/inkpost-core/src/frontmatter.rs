//! Front matter extraction for Markdown posts.
//!
//! The header is a block of `key: value` lines delimited by a `---` line at
//! the very start of the document and a closing `---` line. Extraction never
//! fails: malformed headers degrade to partial (or empty) metadata and the
//! rest of the document still parses.

/// Raw front matter fields of a post document.
///
/// Only the known keys are kept; unknown keys are ignored. Fields that were
/// not declared stay `None`/empty.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FrontMatter {
    pub id: Option<String>,
    pub title: Option<String>,
    pub category: Option<String>,
    pub date: Option<String>,
    pub tags: Vec<String>,
}

impl FrontMatter {
    fn set(&mut self, key: &str, value: &str) {
        match key {
            "id" => self.id = Some(value.to_string()),
            "title" => self.title = Some(value.to_string()),
            "category" => self.category = Some(value.to_string()),
            "date" => self.date = Some(value.to_string()),
            "tags" => {
                self.tags = value
                    .split(',')
                    .map(str::trim)
                    .filter(|t| !t.is_empty())
                    .map(String::from)
                    .collect();
            }
            // Unknown keys are ignored
            _ => {}
        }
    }
}

/// Split a document into front matter and body.
///
/// Returns empty metadata and the whole input as body when no header is
/// present, or when the opening `---` is never closed (without the closing
/// delimiter there is no way to tell header from content).
pub fn split_front_matter(input: &str) -> (FrontMatter, &str) {
    let Some(rest) = strip_delimiter_line(input) else {
        return (FrontMatter::default(), input);
    };

    let mut matter = FrontMatter::default();
    let mut offset = 0;

    for line in rest.split_inclusive('\n') {
        let trimmed = line.trim_end_matches('\n').trim_end_matches('\r');

        if trimmed == "---" {
            let body = &rest[offset + line.len()..];
            // One leading blank line after the delimiter belongs to the
            // header, not the body
            let body = body
                .strip_prefix("\r\n")
                .or_else(|| body.strip_prefix('\n'))
                .unwrap_or(body);
            return (matter, body);
        }

        // `key: value` on the first colon; colon-less lines are skipped
        if let Some((key, value)) = trimmed.split_once(':') {
            matter.set(key.trim(), value.trim());
        }

        offset += line.len();
    }

    // Opening delimiter with no closing one: treat as body-only
    (FrontMatter::default(), input)
}

/// Strip the opening `---` line, returning the text after it.
fn strip_delimiter_line(input: &str) -> Option<&str> {
    let (first, len) = match input.find('\n') {
        Some(pos) => (&input[..pos], pos + 1),
        None => (input, input.len()),
    };

    if first.trim_end_matches('\r') == "---" {
        Some(&input[len..])
    } else {
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_full_header() {
        let doc = "---\nid: hello-world\ntitle: Hello, World\ncategory: general\ndate: 2024-01-14\ntags: rust, parsing , blog\n---\nBody text.";
        let (fm, body) = split_front_matter(doc);

        assert_eq!(fm.id.as_deref(), Some("hello-world"));
        assert_eq!(fm.title.as_deref(), Some("Hello, World"));
        assert_eq!(fm.category.as_deref(), Some("general"));
        assert_eq!(fm.date.as_deref(), Some("2024-01-14"));
        assert_eq!(fm.tags, vec!["rust", "parsing", "blog"]);
        assert_eq!(body, "Body text.");
    }

    #[test]
    fn test_no_front_matter() {
        let doc = "Just a paragraph.\n";
        let (fm, body) = split_front_matter(doc);
        assert_eq!(fm, FrontMatter::default());
        assert_eq!(body, doc);
    }

    #[test]
    fn test_unterminated_header_is_body() {
        let doc = "---\ntitle: Oops\nNo closing delimiter here.";
        let (fm, body) = split_front_matter(doc);
        assert_eq!(fm, FrontMatter::default());
        assert_eq!(body, doc);
    }

    #[test]
    fn test_value_containing_colon() {
        let doc = "---\ntitle: Rust: The Book\n---\n";
        let (fm, _) = split_front_matter(doc);
        assert_eq!(fm.title.as_deref(), Some("Rust: The Book"));
    }

    #[test]
    fn test_malformed_and_unknown_lines_skipped() {
        let doc = "---\nthis line has no colon\ndraft: true\ntitle: Kept\n---\nbody";
        let (fm, body) = split_front_matter(doc);
        assert_eq!(fm.title.as_deref(), Some("Kept"));
        assert_eq!(fm.id, None);
        assert_eq!(body, "body");
    }

    #[test]
    fn test_delimiter_must_open_document() {
        let doc = "intro\n---\ntitle: Nope\n---\n";
        let (fm, body) = split_front_matter(doc);
        assert_eq!(fm, FrontMatter::default());
        assert_eq!(body, doc);
    }

    #[test]
    fn test_crlf_lines() {
        let doc = "---\r\ntitle: Windows\r\n---\r\nbody";
        let (fm, body) = split_front_matter(doc);
        assert_eq!(fm.title.as_deref(), Some("Windows"));
        assert_eq!(body, "body");
    }

    #[test]
    fn test_leading_blank_line_stripped_from_body() {
        let doc = "---\ntitle: Spaced\n---\n\nBody starts here.";
        let (_, body) = split_front_matter(doc);
        assert_eq!(body, "Body starts here.");
    }

    #[test]
    fn test_empty_header() {
        let doc = "---\n---\nbody";
        let (fm, body) = split_front_matter(doc);
        assert_eq!(fm, FrontMatter::default());
        assert_eq!(body, "body");
    }

    #[test]
    fn test_header_only_document() {
        let doc = "---\ntitle: Meta Only\n---\n";
        let (fm, body) = split_front_matter(doc);
        assert_eq!(fm.title.as_deref(), Some("Meta Only"));
        assert_eq!(body, "");
    }
}
