//! Browser-side error types.
//!
//! - [`FetchError`] - Network/fetch-related errors for HTTP requests
//!
//! API-level failures are [`bucketfm_core::ApiError`]; a `FetchError` becomes
//! [`ApiError::Transport`] once it leaves the transport layer.

use bucketfm_core::ApiError;
use thiserror::Error;

/// Network/fetch-related errors for HTTP requests.
#[derive(Debug, Clone, Error)]
pub enum FetchError {
    /// Browser window not available
    #[error("Browser window not available")]
    NoWindow,
    /// Failed to create HTTP request or its body
    #[error("Failed to create request")]
    RequestCreationFailed,
    /// Network request failed (CORS, connection refused, etc.)
    #[error("Network error: {0}")]
    NetworkError(String),
    /// Failed to read response body
    #[error("Failed to read response")]
    ResponseReadFailed,
    /// Response was not a `Response` or its body was not text
    #[error("Invalid response content")]
    InvalidContent,
    /// Request timed out
    #[error("Request timed out")]
    Timeout,
}

impl From<FetchError> for ApiError {
    fn from(err: FetchError) -> Self {
        ApiError::Transport(err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fetch_errors_become_transport_errors() {
        assert_eq!(
            ApiError::from(FetchError::Timeout),
            ApiError::Transport("Request timed out".to_string())
        );
        assert_eq!(
            ApiError::from(FetchError::NetworkError("refused".into())),
            ApiError::Transport("Network error: refused".to_string())
        );
    }
}
