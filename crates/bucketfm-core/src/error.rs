//! Error types for the core crate.
//!
//! - [`PathError`] - rejected directory prefixes
//! - [`ApiError`] - failed calls against the object-store API

use thiserror::Error;

use crate::api::Operation;

/// Reasons a string is not a valid directory prefix.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PathError {
    /// Non-root prefix without a trailing separator
    #[error("prefix '{0}' must end with '/'")]
    MissingTrailingSeparator(String),
    /// Prefix starting with a separator
    #[error("prefix '{0}' must not start with '/'")]
    LeadingSeparator(String),
    /// Prefix containing `//`
    #[error("prefix '{0}' contains an empty segment")]
    EmptySegment(String),
}

/// Failure of a single API call.
///
/// Both transport problems and backend-reported errors end up here; the
/// banner shows [`ApiError::user_message`].
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ApiError {
    /// Backend answered with a truthy `error` field
    #[error("{0}")]
    Backend(String),
    /// Non-2xx response without an error field
    #[error("HTTP error: {0}")]
    Status(u16),
    /// Response body was not the expected JSON
    #[error("invalid response: {0}")]
    Decode(String),
    /// Request never produced a response (network, timeout, CORS)
    #[error("transport error: {0}")]
    Transport(String),
}

impl ApiError {
    /// Text shown in the error banner for a failed `op`.
    ///
    /// Backend messages are shown verbatim, everything else collapses to the
    /// operation's generic message.
    pub fn user_message(&self, op: Operation) -> String {
        match self {
            Self::Backend(msg) => msg.clone(),
            _ => op.failure_message().to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_backend_message_is_shown_verbatim() {
        let err = ApiError::Backend("NoSuchBucket".to_string());
        assert_eq!(err.user_message(Operation::List), "NoSuchBucket");
    }

    #[test]
    fn test_transport_errors_collapse_to_generic_message() {
        let err = ApiError::Transport("Failed to fetch".to_string());
        assert_eq!(err.user_message(Operation::List), "Failed to fetch data");
        assert_eq!(
            ApiError::Status(502).user_message(Operation::Delete),
            "Failed to delete item"
        );
        assert_eq!(
            ApiError::Decode("eof".to_string()).user_message(Operation::UploadFolder),
            "Failed to upload folder"
        );
    }
}
