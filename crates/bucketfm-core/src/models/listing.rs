use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::path::{self, Prefix};

// =============================================================================
// Listing Types
// =============================================================================

/// A stored object as returned by `GET /api/list`.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize, Serialize)]
pub struct FileEntry {
    /// Full object key (e.g. `docs/report.pdf`)
    pub key: String,
    /// Object size in bytes
    pub size: u64,
    /// ISO-8601 modification time, when the backend reports it
    #[serde(rename = "lastModified", default, skip_serializing_if = "Option::is_none")]
    pub last_modified: Option<String>,
    /// User metadata attached to the object
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub metadata: Option<BTreeMap<String, String>>,
}

impl FileEntry {
    /// Display name (last key segment).
    pub fn name(&self) -> &str {
        path::key_name(&self.key)
    }

    /// Metadata pairs in key order; empty when there is none.
    pub fn metadata_pairs(&self) -> Vec<(String, String)> {
        self.metadata
            .as_ref()
            .map(|m| m.iter().map(|(k, v)| (k.clone(), v.clone())).collect())
            .unwrap_or_default()
    }
}

/// Files and folders directly under one prefix.
///
/// Always replaced wholesale by the next successful listing.
#[derive(Clone, Debug, Default, PartialEq, Eq, Deserialize, Serialize)]
pub struct DirectoryListing {
    #[serde(default)]
    pub files: Vec<FileEntry>,
    /// Folder prefixes, each ending in `/`
    #[serde(default)]
    pub folders: Vec<String>,
}

impl DirectoryListing {
    pub fn is_empty(&self) -> bool {
        self.files.is_empty() && self.folders.is_empty()
    }

    /// Display name of a folder prefix as listed by the backend.
    ///
    /// Falls back to the raw string for prefixes that fail validation.
    pub fn folder_name(folder: &str) -> String {
        Prefix::parse(folder)
            .map(|p| p.name().to_string())
            .unwrap_or_else(|_| folder.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_deserialize_backend_listing() {
        let json = r#"{
            "files": [
                {"key": "docs/a.txt", "size": 12, "lastModified": "2024-05-01T10:00:00+00:00",
                 "metadata": {"owner": "ops"}},
                {"key": "docs/b.bin", "size": 0}
            ],
            "folders": ["docs/old/"]
        }"#;
        let listing: DirectoryListing = serde_json::from_str(json).unwrap();

        assert_eq!(listing.folders, vec!["docs/old/".to_string()]);
        assert_eq!(listing.files.len(), 2);
        assert_eq!(listing.files[0].name(), "a.txt");
        assert_eq!(
            listing.files[0].last_modified.as_deref(),
            Some("2024-05-01T10:00:00+00:00")
        );
        assert_eq!(
            listing.files[0].metadata_pairs(),
            vec![("owner".to_string(), "ops".to_string())]
        );
        assert!(listing.files[1].metadata_pairs().is_empty());
    }

    #[test]
    fn test_missing_collections_default_to_empty() {
        let listing: DirectoryListing = serde_json::from_str("{}").unwrap();
        assert!(listing.is_empty());
    }

    #[test]
    fn test_folder_name() {
        assert_eq!(DirectoryListing::folder_name("docs/old/"), "old");
        assert_eq!(DirectoryListing::folder_name("weird"), "weird");
    }
}
