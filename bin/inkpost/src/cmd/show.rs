//! Show command - prints one parsed post as JSON.

use std::path::Path;

use color_eyre::eyre::{Result, WrapErr, eyre};
use inkpost_generator::PostRepository;

/// Run the show command.
pub fn run(content: &Path, id: &str) -> Result<()> {
    let repo = PostRepository::new(content);
    let post = repo
        .load_post_by_id(id)
        .wrap_err("Failed to load post")?
        .ok_or_else(|| eyre!("post not found: {id}"))?;

    let json = serde_json::to_string_pretty(&post).wrap_err("Failed to serialize post")?;
    println!("{json}");
    Ok(())
}
