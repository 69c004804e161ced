//! inkpost Core Library
//!
//! Core types, front matter extraction, configuration, and error handling
//! for the inkpost blog engine.

pub mod block;
pub mod config;
pub mod error;
pub mod frontmatter;
pub mod post;

pub use block::{CalloutVariant, ContentBlock};
pub use config::Config;
pub use error::{CoreError, Result};
pub use frontmatter::{FrontMatter, split_front_matter};
pub use post::{BlogPost, PostMetadata};
