//! Utility modules for browser and display concerns.
//!
//! Provides:
//! - [`fetch`] - Fetch API transport with timeout
//! - [`dom`] - window, storage and file-input helpers
//! - [`format`] - size and date display
//! - [`log`] - browser console logging
//! - [`validate_base_url`] - API base URL validation

pub mod dom;
pub mod fetch;
pub mod format;
pub mod log;
mod url;

pub use url::{UrlValidation, validate_base_url};
