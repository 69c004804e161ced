//! Command implementations.

pub mod check;
pub mod feed;
pub mod list;
pub mod show;
