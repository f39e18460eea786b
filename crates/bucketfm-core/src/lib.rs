//! Browser-independent core of the bucket file manager.
//!
//! This crate provides:
//! - [`Prefix`] directory prefixes and their parent arithmetic
//! - [`DirectoryListing`], [`FileEntry`] - listing data returned by the backend
//! - [`reduce`] - the pure state machine behind the directory browser
//! - [`Endpoint`] and response decoding for the object-store REST API

pub mod api;
pub mod error;
pub mod models;
pub mod path;
pub mod state;

pub use api::{Endpoint, Operation, UploadKind, decode_listing, decode_mutation};
pub use error::{ApiError, PathError};
pub use models::{DirectoryListing, FileEntry};
pub use path::{Prefix, SEPARATOR};
pub use state::{Action, BrowserState, Effect, FolderForm, RequestToken, reduce};
