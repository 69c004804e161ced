//! Check command - validates the corpus.

use std::{collections::HashMap, path::Path};

use color_eyre::eyre::{Result, WrapErr, eyre};
use inkpost_generator::PostRepository;

/// Run the check command. Reports duplicate ids, missing titles and
/// unparseable dates; duplicate ids fail the check.
pub fn run(content: &Path) -> Result<()> {
    let repo = PostRepository::new(content);
    let metadata = repo
        .load_posts_metadata()
        .wrap_err("Failed to load post metadata")?;

    let mut warnings = Vec::new();
    let mut seen: HashMap<&str, usize> = HashMap::new();

    for meta in &metadata {
        *seen.entry(meta.id.as_str()).or_default() += 1;

        if meta.title.is_empty() {
            warnings.push(format!("post '{}' has no title", meta.id));
        }
        if meta.date.is_some() && meta.parsed_date().is_none() {
            warnings.push(format!(
                "post '{}' has an unparseable date: {:?}",
                meta.id,
                meta.date.as_deref().unwrap_or_default()
            ));
        }
    }

    let duplicates: Vec<&str> = seen
        .iter()
        .filter(|&(_, &count)| count > 1)
        .map(|(&id, _)| id)
        .collect();

    for warn in &warnings {
        println!("  warning: {warn}");
    }

    if !duplicates.is_empty() {
        return Err(eyre!(
            "duplicate post ids (lookups resolve to the last loaded): {}",
            duplicates.join(", ")
        ));
    }

    println!(
        "Checked {} posts: {} warnings, no duplicate ids",
        metadata.len(),
        warnings.len()
    );
    Ok(())
}

#[cfg(test)]
mod tests {
    use std::fs;

    use super::*;

    #[test]
    fn test_check_passes_clean_corpus() {
        let dir = tempfile::tempdir().expect("create temp dir");
        fs::write(
            dir.path().join("a.md"),
            "---\nid: a\ntitle: A\ndate: 2024-01-01\n---\n",
        )
        .expect("write post");

        assert!(run(dir.path()).is_ok());
    }

    #[test]
    fn test_check_fails_on_duplicate_ids() {
        let dir = tempfile::tempdir().expect("create temp dir");
        fs::write(dir.path().join("a.md"), "---\nid: dup\ntitle: A\n---\n").expect("write post");
        fs::write(dir.path().join("b.md"), "---\nid: dup\ntitle: B\n---\n").expect("write post");

        assert!(run(dir.path()).is_err());
    }
}
