//! RSS feed generation.
//!
//! Generates an RSS 2.0 feed from the post corpus. Site identity (URL,
//! title, author) comes from explicit [`Config`], never from ambient state.

use std::io::Write;

use chrono::Utc;
use rss::{ChannelBuilder, GuidBuilder, Item, ItemBuilder};
use thiserror::Error;
use tracing::debug;

use inkpost_core::{BlogPost, Config};

use crate::excerpt::derive_excerpt;

/// Feed generation errors.
#[derive(Debug, Error)]
pub enum FeedError {
    /// IO error while writing the feed.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result type for feed operations.
pub type Result<T> = std::result::Result<T, FeedError>;

/// RSS feed generator.
#[derive(Debug)]
pub struct FeedGenerator {
    config: Config,
}

impl FeedGenerator {
    /// Create a new feed generator.
    #[must_use]
    pub fn new(config: Config) -> Self {
        Self { config }
    }

    /// Generate feed XML from posts. Posts are expected in display order
    /// (newest first); the configured item limit is applied here.
    pub fn generate(&self, posts: &[BlogPost]) -> String {
        let limit = self.config.feed.limit;
        let posts = &posts[..posts.len().min(limit)];

        debug!(count = posts.len(), limit, "generating RSS feed");

        let items: Vec<Item> = posts.iter().map(|post| self.post_to_item(post)).collect();

        let channel = ChannelBuilder::default()
            .title(&self.config.site.title)
            .link(&self.config.site.base_url)
            .description(
                self.config
                    .site
                    .description
                    .as_deref()
                    .unwrap_or(&self.config.site.title),
            )
            .language(Some(self.config.site.language.clone()))
            .last_build_date(Some(Utc::now().to_rfc2822()))
            .items(items)
            .build();

        channel.to_string()
    }

    /// Convert a post to an RSS item.
    fn post_to_item(&self, post: &BlogPost) -> Item {
        let url = self.config.url_for(&format!("/posts/{}", post.meta.id));

        let guid = GuidBuilder::default().value(&url).permalink(true).build();

        let mut builder = ItemBuilder::default();
        builder.title(Some(post.meta.title.clone()));
        builder.link(Some(url));
        builder.guid(Some(guid));

        if let Some(date) = post.meta.parsed_date() {
            builder.pub_date(Some(date.to_rfc2822()));
        }

        if let Some(excerpt) = derive_excerpt(post) {
            builder.description(Some(excerpt));
        }

        if let Some(author) = &self.config.site.author {
            builder.author(Some(author.clone()));
        }

        let categories: Vec<_> = post
            .meta
            .tags
            .iter()
            .map(|tag| rss::Category {
                name: tag.clone(),
                domain: None,
            })
            .collect();

        if !categories.is_empty() {
            builder.categories(categories);
        }

        builder.build()
    }

    /// Write the feed to a writer.
    pub fn write_to<W: Write>(&self, posts: &[BlogPost], writer: &mut W) -> Result<()> {
        let xml = self.generate(posts);
        writer.write_all(xml.as_bytes())?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use inkpost_core::{
        ContentBlock, PostMetadata,
        config::{FeedConfig, SiteConfig},
    };

    use super::*;

    fn test_config() -> Config {
        Config {
            site: SiteConfig {
                title: "Test Blog".to_string(),
                base_url: "https://example.com".to_string(),
                description: Some("A test blog".to_string()),
                author: Some("Test Author".to_string()),
                language: "en".to_string(),
            },
            feed: FeedConfig {
                enabled: true,
                limit: 20,
            },
        }
    }

    fn test_post(id: &str, title: &str, date: Option<&str>) -> BlogPost {
        BlogPost::new(
            PostMetadata {
                id: id.to_string(),
                title: title.to_string(),
                category: "general".to_string(),
                date: date.map(String::from),
                tags: vec!["rust".to_string(), "web".to_string()],
            },
            vec![ContentBlock::Paragraph {
                content: format!("Opening paragraph of {title}."),
            }],
        )
    }

    #[test]
    fn test_generate_feed() {
        let generator = FeedGenerator::new(test_config());
        let posts = vec![
            test_post("first-post", "First Post", Some("2024-02-01")),
            test_post("second-post", "Second Post", Some("2024-01-01")),
        ];

        let xml = generator.generate(&posts);

        assert!(xml.contains("<title>Test Blog</title>"));
        assert!(xml.contains("<link>https://example.com</link>"));
        assert!(xml.contains("First Post"));
        assert!(xml.contains("https://example.com/posts/first-post"));
        assert!(xml.contains("Opening paragraph of Second Post."));
        assert!(xml.contains("<category>rust</category>"));
    }

    #[test]
    fn test_feed_limit_applied() {
        let mut config = test_config();
        config.feed.limit = 1;
        let generator = FeedGenerator::new(config);

        let posts = vec![
            test_post("a", "Kept", Some("2024-02-01")),
            test_post("b", "Dropped", Some("2024-01-01")),
        ];

        let xml = generator.generate(&posts);
        assert!(xml.contains("Kept"));
        assert!(!xml.contains("Dropped"));
    }

    #[test]
    fn test_undated_post_has_no_pub_date() {
        let generator = FeedGenerator::new(test_config());
        let xml = generator.generate(&[test_post("undated", "Undated", None)]);

        assert!(xml.contains("Undated"));
        assert!(!xml.contains("<pubDate></pubDate>"));
    }

    #[test]
    fn test_write_to() {
        let generator = FeedGenerator::new(test_config());
        let posts = vec![test_post("p", "P", Some("2024-01-01"))];

        let mut buf = Vec::new();
        generator.write_to(&posts, &mut buf).expect("write feed");
        assert!(String::from_utf8(buf).expect("utf-8").contains("<rss"));
    }
}
