//! UI components built with Leptos.
//!
//! - [`browser`] - Directory browser view
//! - [`icons`] - Centralized icon definitions (change theme here)

pub mod browser;
pub mod icons;

pub use browser::DirectoryBrowser;
