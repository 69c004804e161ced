//! Post repository.
//!
//! Walks a content directory of Markdown files and exposes the corpus as
//! metadata listings or fully parsed posts. All methods are side-effect-free
//! reads over an immutable source tree and are safe to call concurrently.

use std::{
    fs,
    path::{Path, PathBuf},
};

use rayon::prelude::*;
use thiserror::Error;
use tracing::{debug, info, warn};

use inkpost_core::{BlogPost, PostMetadata};

/// Repository errors.
#[derive(Debug, Error)]
pub enum StoreError {
    /// IO error while walking the corpus.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Content directory does not exist.
    #[error("content directory not found: {0}")]
    MissingDir(PathBuf),
}

/// Result type for repository operations.
pub type Result<T> = std::result::Result<T, StoreError>;

/// Repository over a directory of Markdown post documents.
#[derive(Debug, Clone)]
pub struct PostRepository {
    content_dir: PathBuf,
}

impl PostRepository {
    /// Create a repository rooted at `content_dir`.
    pub fn new(content_dir: impl Into<PathBuf>) -> Self {
        Self {
            content_dir: content_dir.into(),
        }
    }

    /// Load the metadata of every post, one entry per source document.
    ///
    /// Order is the deterministic file-walk order; callers sort for display
    /// (see [`sort_by_date_desc`]). Documents with duplicate ids are all
    /// included.
    pub fn load_posts_metadata(&self) -> Result<Vec<PostMetadata>> {
        let files = self.find_markdown_files()?;
        info!(count = files.len(), "loading post metadata");

        Ok(files
            .par_iter()
            .filter_map(|path| {
                let source = read_post(path)?;
                Some(inkpost_parser::parse_metadata(&source, &fallback_id(path)))
            })
            .collect())
    }

    /// Load and fully parse every post.
    ///
    /// The metadata-only path is preferred for listings; this one exists for
    /// consumers that need the whole corpus with content.
    pub fn load_markdown_posts(&self) -> Result<Vec<BlogPost>> {
        let files = self.find_markdown_files()?;
        info!(count = files.len(), "loading full posts");

        Ok(files
            .par_iter()
            .filter_map(|path| {
                let source = read_post(path)?;
                Some(inkpost_parser::parse_post(&source, &fallback_id(path)))
            })
            .collect())
    }

    /// Load the fully parsed post with the given id, or `None` if no
    /// document declares it.
    ///
    /// When several documents share an id, the last one in load order wins.
    pub fn load_post_by_id(&self, id: &str) -> Result<Option<BlogPost>> {
        let files = self.find_markdown_files()?;

        let mut found = None;
        for path in &files {
            let Some(source) = read_post(path) else {
                continue;
            };
            let fallback = fallback_id(path);

            // Cheap metadata check before parsing the body
            if inkpost_parser::parse_metadata(&source, &fallback).id == id {
                found = Some(inkpost_parser::parse_post(&source, &fallback));
            }
        }

        if found.is_none() {
            debug!(id, "post not found");
        }
        Ok(found)
    }

    /// Find all Markdown files recursively, sorted for deterministic load
    /// order.
    fn find_markdown_files(&self) -> Result<Vec<PathBuf>> {
        if !self.content_dir.is_dir() {
            return Err(StoreError::MissingDir(self.content_dir.clone()));
        }

        let mut files = Vec::new();
        walk_dir(&self.content_dir, &mut files)?;
        files.sort();
        Ok(files)
    }
}

/// Recursively walk a directory for Markdown files, skipping hidden entries.
fn walk_dir(dir: &Path, files: &mut Vec<PathBuf>) -> Result<()> {
    for entry in fs::read_dir(dir)? {
        let entry = entry?;
        let path = entry.path();

        if path
            .file_name()
            .is_some_and(|n| n.to_string_lossy().starts_with('.'))
        {
            continue;
        }

        if path.is_dir() {
            walk_dir(&path, files)?;
        } else if is_markdown(&path) {
            files.push(path);
        }
    }

    Ok(())
}

fn is_markdown(path: &Path) -> bool {
    path.extension()
        .is_some_and(|ext| matches!(ext.to_string_lossy().to_lowercase().as_str(), "md" | "markdown"))
}

/// Read one document; unreadable files are logged and skipped so one bad
/// file never blocks the rest of the corpus.
fn read_post(path: &Path) -> Option<String> {
    match fs::read_to_string(path) {
        Ok(source) => Some(source),
        Err(e) => {
            warn!(path = %path.display(), error = %e, "failed to read post, skipping");
            None
        }
    }
}

/// Identifier used when the front matter declares no `id`: the filename stem.
fn fallback_id(path: &Path) -> String {
    path.file_stem()
        .map(|s| s.to_string_lossy().into_owned())
        .unwrap_or_default()
}

/// Sort posts newest first; undated posts sink to the end, ties break by
/// title. The reversed `Option` compare does the sinking: `None < Some`, so
/// under `b.cmp(&a)` undated entries order after every dated one.
pub fn sort_by_date_desc(metadata: &mut [PostMetadata]) {
    metadata.sort_by(|a, b| {
        b.parsed_date()
            .cmp(&a.parsed_date())
            .then_with(|| a.title.cmp(&b.title))
    });
}

#[cfg(test)]
mod tests {
    use std::io::Write;

    use super::*;

    fn write_post(dir: &Path, name: &str, content: &str) {
        let mut file = fs::File::create(dir.join(name)).expect("create post");
        file.write_all(content.as_bytes()).expect("write post");
    }

    fn sample_corpus() -> tempfile::TempDir {
        let dir = tempfile::tempdir().expect("create temp dir");
        write_post(
            dir.path(),
            "first.md",
            "---\nid: first\ntitle: First\ncategory: notes\ndate: 2024-01-01\n---\nHello.\n",
        );
        write_post(
            dir.path(),
            "second.md",
            "---\ntitle: Second\ndate: 2024-02-01\n---\nWorld.\n",
        );
        dir
    }

    #[test]
    fn test_metadata_listing() {
        let dir = sample_corpus();
        let repo = PostRepository::new(dir.path());

        let mut metadata = repo.load_posts_metadata().expect("load metadata");
        sort_by_date_desc(&mut metadata);

        assert_eq!(metadata.len(), 2);
        assert_eq!(metadata[0].title, "Second");
        // No front matter id: filename stem takes over
        assert_eq!(metadata[0].id, "second");
        assert_eq!(metadata[1].id, "first");
    }

    #[test]
    fn test_load_by_id() {
        let dir = sample_corpus();
        let repo = PostRepository::new(dir.path());

        let post = repo
            .load_post_by_id("first")
            .expect("load")
            .expect("should exist");
        assert_eq!(post.meta.title, "First");
        assert_eq!(post.content.len(), 1);
    }

    #[test]
    fn test_load_by_id_not_found_is_typed_absence() {
        let dir = sample_corpus();
        let repo = PostRepository::new(dir.path());

        let missing = repo.load_post_by_id("no-such-post").expect("load");
        assert!(missing.is_none());
    }

    #[test]
    fn test_duplicate_id_last_wins_for_lookup() {
        let dir = tempfile::tempdir().expect("create temp dir");
        write_post(dir.path(), "a.md", "---\nid: dup\ntitle: Earlier\n---\n");
        write_post(dir.path(), "b.md", "---\nid: dup\ntitle: Later\n---\n");
        let repo = PostRepository::new(dir.path());

        let post = repo.load_post_by_id("dup").expect("load").expect("exists");
        assert_eq!(post.meta.title, "Later");

        // Listing still includes both documents
        let metadata = repo.load_posts_metadata().expect("load metadata");
        assert_eq!(metadata.len(), 2);
    }

    #[test]
    fn test_missing_content_dir_errors() {
        let repo = PostRepository::new("/nonexistent/content");
        assert!(repo.load_posts_metadata().is_err());
    }

    #[test]
    fn test_nested_and_hidden_entries() {
        let dir = tempfile::tempdir().expect("create temp dir");
        fs::create_dir(dir.path().join("guides")).expect("mkdir");
        fs::create_dir(dir.path().join(".drafts")).expect("mkdir");
        write_post(
            &dir.path().join("guides"),
            "nested.md",
            "---\nid: nested\ntitle: Nested\n---\n",
        );
        write_post(
            &dir.path().join(".drafts"),
            "hidden.md",
            "---\nid: hidden\ntitle: Hidden\n---\n",
        );
        write_post(dir.path(), "notes.txt", "not markdown");

        let repo = PostRepository::new(dir.path());
        let metadata = repo.load_posts_metadata().expect("load metadata");

        assert_eq!(metadata.len(), 1);
        assert_eq!(metadata[0].id, "nested");
    }

    #[test]
    fn test_sort_undated_posts_last() {
        let mut metadata = vec![
            PostMetadata {
                id: "undated".to_string(),
                title: "B Undated".to_string(),
                ..Default::default()
            },
            PostMetadata {
                id: "dated".to_string(),
                title: "Dated".to_string(),
                date: Some("2023-06-15".to_string()),
                ..Default::default()
            },
            PostMetadata {
                id: "undated2".to_string(),
                title: "A Undated".to_string(),
                ..Default::default()
            },
            PostMetadata {
                id: "older".to_string(),
                title: "Older".to_string(),
                date: Some("2020-01-01".to_string()),
                ..Default::default()
            },
        ];

        sort_by_date_desc(&mut metadata);
        // Every dated post precedes every undated one, even the oldest
        assert_eq!(metadata[0].id, "dated");
        assert_eq!(metadata[1].id, "older");
        assert_eq!(metadata[2].title, "A Undated");
        assert_eq!(metadata[3].title, "B Undated");
    }
}
