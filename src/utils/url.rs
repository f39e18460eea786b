//! API base URL validation.
//!
//! The base URL can be overridden at runtime (see [`crate::config`]); an
//! override is only honored when it looks like an http(s) origin.

/// Result of URL validation
#[derive(Debug, Clone, PartialEq)]
pub enum UrlValidation {
    /// URL is usable as an API base (trailing slashes removed)
    Valid(String),
    /// URL is invalid
    Invalid(UrlValidationError),
}

/// Errors that can occur during URL validation.
#[derive(Debug, Clone, PartialEq)]
pub enum UrlValidationError {
    /// URL is empty
    Empty,
    /// URL doesn't start with http:// or https://
    InvalidProtocol,
    /// URL has no host
    NoHost,
}

impl std::fmt::Display for UrlValidationError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Empty => write!(f, "URL is empty"),
            Self::InvalidProtocol => write!(f, "URL must start with http:// or https://"),
            Self::NoHost => write!(f, "URL has no host"),
        }
    }
}

/// Validate a URL for use as the API base.
///
/// Checks:
/// 1. URL is not empty
/// 2. URL starts with http:// or https://
/// 3. URL has a host
pub fn validate_base_url(url: &str) -> UrlValidation {
    let url = url.trim();

    if url.is_empty() {
        return UrlValidation::Invalid(UrlValidationError::Empty);
    }

    let url_lower = url.to_lowercase();
    if !url_lower.starts_with("http://") && !url_lower.starts_with("https://") {
        return UrlValidation::Invalid(UrlValidationError::InvalidProtocol);
    }

    if extract_host(url).is_none() {
        return UrlValidation::Invalid(UrlValidationError::NoHost);
    }

    UrlValidation::Valid(url.trim_end_matches('/').to_string())
}

/// Extract host from a URL
fn extract_host(url: &str) -> Option<String> {
    let lower = url.to_lowercase();
    let without_protocol = lower
        .strip_prefix("https://")
        .or_else(|| lower.strip_prefix("http://"))?;

    // Host part ends at the first '/', port removed
    let host_part = without_protocol.split('/').next()?;
    let host = host_part.split(':').next()?;

    if host.is_empty() {
        return None;
    }

    Some(host.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_valid_urls() {
        assert_eq!(
            validate_base_url("http://localhost:5000"),
            UrlValidation::Valid("http://localhost:5000".to_string())
        );
        assert_eq!(
            validate_base_url("  https://files.example.com/ "),
            UrlValidation::Valid("https://files.example.com".to_string())
        );
    }

    #[test]
    fn test_invalid_urls() {
        assert_eq!(
            validate_base_url(""),
            UrlValidation::Invalid(UrlValidationError::Empty)
        );
        assert_eq!(
            validate_base_url("ftp://example.com"),
            UrlValidation::Invalid(UrlValidationError::InvalidProtocol)
        );
        assert_eq!(
            validate_base_url("javascript:alert(1)"),
            UrlValidation::Invalid(UrlValidationError::InvalidProtocol)
        );
        assert_eq!(
            validate_base_url("http://:5000"),
            UrlValidation::Invalid(UrlValidationError::NoHost)
        );
    }

    #[test]
    fn test_extract_host() {
        assert_eq!(
            extract_host("http://localhost:5000/api"),
            Some("localhost".to_string())
        );
        assert_eq!(
            extract_host("HTTPS://Files.Example.com"),
            Some("files.example.com".to_string())
        );
        assert_eq!(extract_host("https://"), None);
    }
}
