//! Application configuration.
//!
//! Centralizes all configuration constants used throughout the application.

use crate::utils::{UrlValidation, dom, log, validate_base_url};

// =============================================================================
// Application Metadata
// =============================================================================

/// Application name shown in the page header.
pub const APP_NAME: &str = "bucketfm";

// =============================================================================
// Network Configuration
// =============================================================================

/// Object-store API address used when no override is set.
pub const DEFAULT_API_BASE_URL: &str = "http://localhost:5000";

/// localStorage key holding an optional API base URL override.
pub const API_BASE_STORAGE_KEY: &str = "bucketfm.api_base";

/// Fetch request timeout in milliseconds.
pub const FETCH_TIMEOUT_MS: i32 = 10000;

/// Resolve the API base URL.
///
/// Uses the localStorage override when it validates, otherwise
/// [`DEFAULT_API_BASE_URL`].
pub fn api_base_url() -> String {
    let Some(raw) = dom::local_storage().and_then(|s| s.get_item(API_BASE_STORAGE_KEY).ok()?)
    else {
        return DEFAULT_API_BASE_URL.to_string();
    };

    match validate_base_url(&raw) {
        UrlValidation::Valid(url) => url,
        UrlValidation::Invalid(err) => {
            log::warn(&format!("Ignoring {API_BASE_STORAGE_KEY} override '{raw}': {err}"));
            DEFAULT_API_BASE_URL.to_string()
        }
    }
}

// =============================================================================
// UI Configuration
// =============================================================================

/// Icon theme selection.
///
/// Available themes:
/// - `Bootstrap` - Familiar, slightly bolder (default)
/// - `Lucide` - Minimal, thin strokes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[allow(dead_code)]
pub enum IconTheme {
    #[default]
    Bootstrap,
    Lucide,
}

/// Current icon theme used throughout the application.
pub const ICON_THEME: IconTheme = IconTheme::Bootstrap;

/// Message shown when a directory has no folders and no files.
pub const EMPTY_FOLDER_TEXT: &str = "This folder is empty";
