//! List command - prints post metadata, newest first.

use std::path::Path;

use color_eyre::eyre::{Result, WrapErr};
use inkpost_generator::{PostRepository, sort_by_date_desc};

/// Run the list command.
pub fn run(content: &Path) -> Result<()> {
    let repo = PostRepository::new(content);
    let mut metadata = repo
        .load_posts_metadata()
        .wrap_err("Failed to load post metadata")?;
    sort_by_date_desc(&mut metadata);

    if metadata.is_empty() {
        println!("No posts found in {}", content.display());
        return Ok(());
    }

    for meta in &metadata {
        let date = meta.date.as_deref().unwrap_or("undated");
        let tags = if meta.tags.is_empty() {
            String::new()
        } else {
            format!("  [{}]", meta.tags.join(", "))
        };
        println!("{date:>10}  {:<24} {}{tags}", meta.id, meta.title);
    }

    tracing::info!(count = metadata.len(), "listed posts");
    Ok(())
}
