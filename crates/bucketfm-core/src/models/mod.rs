//! Data models for directory listings.
//!
//! - [`DirectoryListing`] - files and folders under one prefix
//! - [`FileEntry`] - a single stored object

mod listing;

pub use listing::{DirectoryListing, FileEntry};
