//! Object-store API client.
//!
//! Pairs the browser transport in [`crate::utils::fetch`] with the protocol
//! in [`bucketfm_core::api`]: build the request, send it, decode the reply.

use bucketfm_core::api::{CreateFolderRequest, PREFIX_FIELD};
use bucketfm_core::{
    ApiError, DirectoryListing, Endpoint, Prefix, UploadKind, decode_listing, decode_mutation,
};
use web_sys::{File, FormData};

use crate::error::FetchError;
use crate::utils::fetch::{self, HttpResponse, RequestBody};

/// Client bound to one API base URL.
#[derive(Clone, Debug)]
pub struct ApiClient {
    base_url: String,
}

impl ApiClient {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// `GET /api/list?prefix=...`
    pub async fn list(&self, prefix: &Prefix) -> Result<DirectoryListing, ApiError> {
        let endpoint = Endpoint::List {
            prefix: prefix.clone(),
        };
        let resp = self.call(endpoint, None).await?;
        decode_listing(resp.status, &resp.body)
    }

    /// `POST /api/upload` or `/api/upload-folder` with the picked files.
    pub async fn upload(
        &self,
        kind: UploadKind,
        files: &[File],
        prefix: &Prefix,
    ) -> Result<(), ApiError> {
        let form = build_upload_form(kind, files, prefix)?;
        let resp = self.call(kind.endpoint(), Some(RequestBody::Form(form))).await?;
        decode_mutation(resp.status, &resp.body)
    }

    /// `DELETE /api/delete?key=...` for a file key or folder prefix.
    pub async fn delete(&self, key: &str) -> Result<(), ApiError> {
        let endpoint = Endpoint::Delete {
            key: key.to_string(),
        };
        let resp = self.call(endpoint, None).await?;
        decode_mutation(resp.status, &resp.body)
    }

    /// `POST /api/create-folder` with `{folderName, prefix}`.
    pub async fn create_folder(&self, name: &str, prefix: &Prefix) -> Result<(), ApiError> {
        let json = CreateFolderRequest::new(name, prefix).to_json()?;
        let resp = self
            .call(Endpoint::CreateFolder, Some(RequestBody::Json(json)))
            .await?;
        decode_mutation(resp.status, &resp.body)
    }

    async fn call(
        &self,
        endpoint: Endpoint,
        body: Option<RequestBody>,
    ) -> Result<HttpResponse, FetchError> {
        fetch::send(endpoint.method(), &endpoint.url(&self.base_url), body).await
    }
}

/// Multipart body for an upload: one field per file plus `prefix`.
///
/// Folder uploads send each file's `webkitRelativePath` as its filename so
/// the backend recreates the picked directory under `prefix`.
pub fn build_upload_form(
    kind: UploadKind,
    files: &[File],
    prefix: &Prefix,
) -> Result<FormData, FetchError> {
    let form = FormData::new().map_err(|_| FetchError::RequestCreationFailed)?;

    for file in files {
        let filename = match kind {
            UploadKind::Folder => relative_path(file).unwrap_or_else(|| file.name()),
            UploadKind::File => file.name(),
        };
        form.append_with_blob_and_filename(kind.field_name(), file, &filename)
            .map_err(|_| FetchError::RequestCreationFailed)?;
    }

    form.append_with_str(PREFIX_FIELD, prefix.as_str())
        .map_err(|_| FetchError::RequestCreationFailed)?;

    Ok(form)
}

/// `File.webkitRelativePath`, when the browser set one.
fn relative_path(file: &File) -> Option<String> {
    js_sys::Reflect::get(file, &"webkitRelativePath".into())
        .ok()?
        .as_string()
        .filter(|p| !p.is_empty())
}

#[cfg(all(test, target_arch = "wasm32"))]
mod tests {
    use super::*;
    use wasm_bindgen::JsValue;
    use wasm_bindgen_test::*;

    wasm_bindgen_test_configure!(run_in_browser);

    fn text_file(name: &str, content: &str) -> File {
        let parts = js_sys::Array::of1(&JsValue::from_str(content));
        File::new_with_str_sequence(&parts, name).unwrap()
    }

    #[wasm_bindgen_test]
    fn test_single_file_form() {
        let prefix = Prefix::parse("docs/").unwrap();
        let files = vec![text_file("a.txt", "hello")];
        let form = build_upload_form(UploadKind::File, &files, &prefix).unwrap();

        assert_eq!(form.get_all("file").length(), 1);
        assert_eq!(form.get(PREFIX_FIELD).as_string().as_deref(), Some("docs/"));
    }

    #[wasm_bindgen_test]
    fn test_folder_form_repeats_field() {
        let files = vec![text_file("a.txt", "a"), text_file("b.txt", "b")];
        let form = build_upload_form(UploadKind::Folder, &files, &Prefix::root()).unwrap();

        assert_eq!(form.get_all("files").length(), 2);
        assert_eq!(form.get(PREFIX_FIELD).as_string().as_deref(), Some(""));
    }
}
