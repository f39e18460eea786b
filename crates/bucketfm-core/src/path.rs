//! Directory prefixes in the object store.
//!
//! Object stores have no real directories. A "folder" is a key prefix that
//! ends with [`SEPARATOR`], and the root is the empty prefix. [`Prefix`] only
//! admits strings of that shape, so parent computation never sees a
//! malformed path.

use std::fmt;

use crate::error::PathError;

/// Path separator used by object keys.
pub const SEPARATOR: char = '/';

/// A validated directory prefix: empty (root) or `seg/seg/.../`.
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash)]
pub struct Prefix(String);

impl Prefix {
    /// The root prefix (empty string).
    pub fn root() -> Self {
        Self(String::new())
    }

    /// Validate a prefix string.
    ///
    /// Accepts the empty string and strings of non-empty segments each
    /// terminated by a separator. Rejects `"a"`, `"/a/"` and `"a//b/"`.
    pub fn parse(raw: &str) -> Result<Self, PathError> {
        if raw.is_empty() {
            return Ok(Self::root());
        }
        if raw.starts_with(SEPARATOR) {
            return Err(PathError::LeadingSeparator(raw.to_string()));
        }
        let Some(body) = raw.strip_suffix(SEPARATOR) else {
            return Err(PathError::MissingTrailingSeparator(raw.to_string()));
        };
        if body.split(SEPARATOR).any(str::is_empty) {
            return Err(PathError::EmptySegment(raw.to_string()));
        }
        Ok(Self(raw.to_string()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn is_root(&self) -> bool {
        self.0.is_empty()
    }

    /// Parent prefix, or `None` at root.
    ///
    /// Splits on the separator, drops the trailing empty segment and the last
    /// real segment, then rejoins: `"a/b/c/"` becomes `"a/b/"`, `"a/"`
    /// becomes root.
    pub fn parent(&self) -> Option<Self> {
        if self.is_root() {
            return None;
        }
        let segments: Vec<&str> = self.0.split(SEPARATOR).collect();
        let kept = &segments[..segments.len().saturating_sub(2)];
        let joined = kept.join("/");
        if joined.is_empty() {
            Some(Self::root())
        } else {
            Some(Self(format!("{joined}{SEPARATOR}")))
        }
    }

    /// Last real segment, used as the folder's display name.
    ///
    /// Empty at root.
    pub fn name(&self) -> &str {
        self.0
            .trim_end_matches(SEPARATOR)
            .rsplit(SEPARATOR)
            .next()
            .unwrap_or_default()
    }

    /// Label for the toolbar: the prefix itself, or `Root`.
    pub fn display(&self) -> &str {
        if self.is_root() { "Root" } else { &self.0 }
    }
}

impl fmt::Display for Prefix {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<str> for Prefix {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

/// Display name of an object key (text after the last separator).
pub fn key_name(key: &str) -> &str {
    key.rsplit(SEPARATOR).next().unwrap_or(key)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn prefix(s: &str) -> Prefix {
        Prefix::parse(s).unwrap()
    }

    #[test]
    fn test_parse_accepts_root_and_terminated_prefixes() {
        assert!(prefix("").is_root());
        assert_eq!(prefix("a/").as_str(), "a/");
        assert_eq!(prefix("photos/2024/").as_str(), "photos/2024/");
    }

    #[test]
    fn test_parse_rejects_malformed_prefixes() {
        assert_eq!(
            Prefix::parse("a"),
            Err(PathError::MissingTrailingSeparator("a".to_string()))
        );
        assert_eq!(
            Prefix::parse("/a/"),
            Err(PathError::LeadingSeparator("/a/".to_string()))
        );
        assert_eq!(
            Prefix::parse("a//b/"),
            Err(PathError::EmptySegment("a//b/".to_string()))
        );
        assert!(Prefix::parse("/").is_err());
    }

    #[test]
    fn test_parent_segment_arithmetic() {
        // ["a","b","c",""] -> drop two -> ["a","b"] -> "a/b" -> "a/b/"
        assert_eq!(prefix("a/b/c/").parent(), Some(prefix("a/b/")));
        assert_eq!(prefix("a/b/").parent(), Some(prefix("a/")));
        assert_eq!(prefix("a/").parent(), Some(Prefix::root()));
        assert_eq!(Prefix::root().parent(), None);
    }

    #[test]
    fn test_names() {
        assert_eq!(prefix("docs/reports/").name(), "reports");
        assert_eq!(prefix("docs/").name(), "docs");
        assert_eq!(Prefix::root().name(), "");
        assert_eq!(key_name("docs/reports/q1.pdf"), "q1.pdf");
        assert_eq!(key_name("readme.txt"), "readme.txt");
    }

    #[test]
    fn test_display_label() {
        assert_eq!(Prefix::root().display(), "Root");
        assert_eq!(prefix("docs/").display(), "docs/");
    }
}
