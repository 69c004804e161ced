//! Feed command - writes the RSS feed for the corpus.

use std::{fs, path::Path};

use color_eyre::eyre::{Result, WrapErr};
use inkpost_core::Config;
use inkpost_generator::{FeedGenerator, PostRepository};

/// Run the feed command.
pub fn run(config_path: &Path, content: &Path, output: &Path) -> Result<()> {
    let config = Config::load(config_path).wrap_err("Failed to load configuration")?;

    if !config.feed.enabled {
        println!("Feed generation is disabled in {}", config_path.display());
        return Ok(());
    }

    let repo = PostRepository::new(content);
    let mut posts = repo
        .load_markdown_posts()
        .wrap_err("Failed to load posts")?;
    posts.sort_by(|a, b| b.meta.parsed_date().cmp(&a.meta.parsed_date()));

    let xml = FeedGenerator::new(config).generate(&posts);

    if let Some(parent) = output.parent()
        && !parent.as_os_str().is_empty()
    {
        fs::create_dir_all(parent).wrap_err("Failed to create output directory")?;
    }
    fs::write(output, &xml).wrap_err("Failed to write feed")?;

    tracing::info!(posts = posts.len(), output = %output.display(), "feed written");
    println!("Wrote {} ({} posts)", output.display(), posts.len());
    Ok(())
}
