//! inkpost generation engine.
//!
//! The repository side of the system: loads the Markdown corpus through the
//! parser and produces listings, single-post lookups, and the RSS feed.

pub mod excerpt;
pub mod repository;
pub mod rss;

pub use excerpt::derive_excerpt;
pub use repository::{PostRepository, StoreError, sort_by_date_desc};
pub use rss::{FeedError, FeedGenerator};
