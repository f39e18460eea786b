//! Object-store REST protocol.
//!
//! Describes the five backend calls and decodes their responses. Nothing in
//! here touches the network; the browser transport lives in the app crate.
//!
//! | Call | Method | Path |
//! |------|--------|------|
//! | List | GET | `/api/list?prefix={p}` |
//! | Upload file | POST | `/api/upload` (multipart `file`, `prefix`) |
//! | Upload folder | POST | `/api/upload-folder` (multipart `files`, `prefix`) |
//! | Delete | DELETE | `/api/delete?key={k}` |
//! | Create folder | POST | `/api/create-folder` (JSON) |

use serde::Serialize;
use serde_json::Value;

use crate::error::ApiError;
use crate::models::DirectoryListing;
use crate::path::Prefix;

// =============================================================================
// Operations
// =============================================================================

/// User-level operation a request belongs to.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Operation {
    List,
    UploadFile,
    UploadFolder,
    Delete,
    CreateFolder,
}

impl Operation {
    /// Generic banner text used when the backend gave no message.
    pub fn failure_message(self) -> &'static str {
        match self {
            Self::List => "Failed to fetch data",
            Self::UploadFile => "Failed to upload file",
            Self::UploadFolder => "Failed to upload folder",
            Self::Delete => "Failed to delete item",
            Self::CreateFolder => "Failed to create folder",
        }
    }

    /// Short name for log lines.
    pub fn label(self) -> &'static str {
        match self {
            Self::List => "list",
            Self::UploadFile => "upload",
            Self::UploadFolder => "upload-folder",
            Self::Delete => "delete",
            Self::CreateFolder => "create-folder",
        }
    }
}

/// Single file or whole directory selection.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum UploadKind {
    File,
    Folder,
}

impl UploadKind {
    /// Multipart field name carrying the file(s).
    pub fn field_name(self) -> &'static str {
        match self {
            Self::File => "file",
            Self::Folder => "files",
        }
    }

    pub fn operation(self) -> Operation {
        match self {
            Self::File => Operation::UploadFile,
            Self::Folder => Operation::UploadFolder,
        }
    }

    pub fn endpoint(self) -> Endpoint {
        match self {
            Self::File => Endpoint::Upload,
            Self::Folder => Endpoint::UploadFolder,
        }
    }
}

// =============================================================================
// Endpoints
// =============================================================================

/// Multipart field name for the target prefix.
pub const PREFIX_FIELD: &str = "prefix";

/// A backend route together with its query parameters.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Endpoint {
    List { prefix: Prefix },
    Upload,
    UploadFolder,
    Delete { key: String },
    CreateFolder,
}

impl Endpoint {
    pub fn method(&self) -> &'static str {
        match self {
            Self::List { .. } => "GET",
            Self::Upload | Self::UploadFolder | Self::CreateFolder => "POST",
            Self::Delete { .. } => "DELETE",
        }
    }

    /// Path plus percent-encoded query string.
    pub fn path_and_query(&self) -> String {
        match self {
            Self::List { prefix } => {
                format!("/api/list?prefix={}", urlencoding::encode(prefix.as_str()))
            }
            Self::Upload => "/api/upload".to_string(),
            Self::UploadFolder => "/api/upload-folder".to_string(),
            Self::Delete { key } => format!("/api/delete?key={}", urlencoding::encode(key)),
            Self::CreateFolder => "/api/create-folder".to_string(),
        }
    }

    /// Absolute URL against `base` (trailing slashes on `base` are ignored).
    pub fn url(&self, base: &str) -> String {
        format!("{}{}", base.trim_end_matches('/'), self.path_and_query())
    }
}

/// JSON body of `POST /api/create-folder`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct CreateFolderRequest {
    #[serde(rename = "folderName")]
    pub folder_name: String,
    pub prefix: String,
}

impl CreateFolderRequest {
    pub fn new(folder_name: &str, prefix: &Prefix) -> Self {
        Self {
            folder_name: folder_name.to_string(),
            prefix: prefix.as_str().to_string(),
        }
    }

    pub fn to_json(&self) -> Result<String, ApiError> {
        serde_json::to_string(self).map_err(|e| ApiError::Decode(e.to_string()))
    }
}

// =============================================================================
// Response Decoding
// =============================================================================

/// Decode a `GET /api/list` response.
pub fn decode_listing(status: u16, body: &str) -> Result<DirectoryListing, ApiError> {
    let value = decode_envelope(status, body)?;
    serde_json::from_value(value).map_err(|e| ApiError::Decode(e.to_string()))
}

/// Decode the response of a mutating call (`{message}` or `{error}`).
pub fn decode_mutation(status: u16, body: &str) -> Result<(), ApiError> {
    decode_envelope(status, body).map(|_| ())
}

/// Parse the JSON body and apply the shared error rules.
///
/// A truthy `error` field wins over the status code, so a 500 carrying
/// `{"error": "..."}` surfaces the backend text.
fn decode_envelope(status: u16, body: &str) -> Result<Value, ApiError> {
    let is_success = (200..300).contains(&status);

    let value: Value = match serde_json::from_str(body) {
        Ok(value) => value,
        Err(_) if !is_success => return Err(ApiError::Status(status)),
        Err(e) => return Err(ApiError::Decode(e.to_string())),
    };

    if let Some(message) = value.get("error").and_then(truthy_message) {
        return Err(ApiError::Backend(message));
    }
    if !is_success {
        return Err(ApiError::Status(status));
    }
    Ok(value)
}

/// String form of an `error` value, or `None` when it is falsy.
fn truthy_message(value: &Value) -> Option<String> {
    match value {
        Value::Null | Value::Bool(false) => None,
        Value::String(s) if s.is_empty() => None,
        Value::String(s) => Some(s.clone()),
        Value::Number(n) if n.as_f64() == Some(0.0) => None,
        other => Some(other.to_string()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_endpoint_urls_are_encoded() {
        let prefix = Prefix::parse("my docs/2024/").unwrap();
        assert_eq!(
            Endpoint::List { prefix }.url("http://localhost:5000/"),
            "http://localhost:5000/api/list?prefix=my%20docs%2F2024%2F"
        );
        assert_eq!(
            Endpoint::List { prefix: Prefix::root() }.url("http://localhost:5000"),
            "http://localhost:5000/api/list?prefix="
        );
        assert_eq!(
            Endpoint::Delete { key: "a/b&c.txt".to_string() }.path_and_query(),
            "/api/delete?key=a%2Fb%26c.txt"
        );
    }

    #[test]
    fn test_endpoint_methods() {
        assert_eq!(Endpoint::List { prefix: Prefix::root() }.method(), "GET");
        assert_eq!(Endpoint::Upload.method(), "POST");
        assert_eq!(Endpoint::UploadFolder.method(), "POST");
        assert_eq!(Endpoint::CreateFolder.method(), "POST");
        assert_eq!(Endpoint::Delete { key: "k".to_string() }.method(), "DELETE");
    }

    #[test]
    fn test_upload_kind_wiring() {
        assert_eq!(UploadKind::File.field_name(), "file");
        assert_eq!(UploadKind::Folder.field_name(), "files");
        assert_eq!(UploadKind::File.endpoint().path_and_query(), "/api/upload");
        assert_eq!(
            UploadKind::Folder.endpoint().path_and_query(),
            "/api/upload-folder"
        );
        assert_eq!(UploadKind::Folder.operation(), Operation::UploadFolder);
    }

    #[test]
    fn test_create_folder_body() {
        let prefix = Prefix::parse("docs/").unwrap();
        let json = CreateFolderRequest::new("reports", &prefix).to_json().unwrap();
        assert_eq!(json, r#"{"folderName":"reports","prefix":"docs/"}"#);
    }

    #[test]
    fn test_decode_listing_success() {
        let listing =
            decode_listing(200, r#"{"files":[{"key":"a.txt","size":3}],"folders":["b/"]}"#)
                .unwrap();
        assert_eq!(listing.files[0].key, "a.txt");
        assert_eq!(listing.folders, vec!["b/".to_string()]);
    }

    #[test]
    fn test_error_field_wins_over_status() {
        assert_eq!(
            decode_listing(500, r#"{"error":"Access Denied"}"#),
            Err(ApiError::Backend("Access Denied".to_string()))
        );
        assert_eq!(
            decode_mutation(200, r#"{"error":"No file provided"}"#),
            Err(ApiError::Backend("No file provided".to_string()))
        );
    }

    #[test]
    fn test_falsy_error_fields_are_ignored() {
        assert_eq!(decode_mutation(200, r#"{"error":""}"#), Ok(()));
        assert_eq!(decode_mutation(200, r#"{"error":null}"#), Ok(()));
        assert_eq!(decode_mutation(200, r#"{"error":false}"#), Ok(()));
        assert_eq!(decode_mutation(200, r#"{"error":0}"#), Ok(()));
        assert_eq!(
            decode_mutation(200, r#"{"error":{"code":7}}"#),
            Err(ApiError::Backend(r#"{"code":7}"#.to_string()))
        );
    }

    #[test]
    fn test_status_and_decode_failures() {
        assert_eq!(decode_mutation(404, "<html>"), Err(ApiError::Status(404)));
        assert_eq!(decode_mutation(503, "{}"), Err(ApiError::Status(503)));
        assert!(matches!(
            decode_listing(200, "not json"),
            Err(ApiError::Decode(_))
        ));
        assert!(matches!(
            decode_listing(200, r#"{"files":"nope"}"#),
            Err(ApiError::Decode(_))
        ));
    }

    #[test]
    fn test_mutation_success() {
        assert_eq!(
            decode_mutation(200, r#"{"message":"Object deleted successfully"}"#),
            Ok(())
        );
    }
}
