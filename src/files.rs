/**
 * File API Surface
 *
 * Typed wrappers over the HTTP client core for the file vault endpoints:
 * multipart upload, listing, and (streamed) download.
 */

use reqwest::multipart::{Form, Part};

use crate::client::ApiClient;
use crate::error::ApiError;
use crate::types::{FileListResponse, UploadResponse};

/// File management operations against the LockHaven API.
#[derive(Clone)]
pub struct FileApi {
    client: ApiClient,
}

impl FileApi {
    pub fn new(client: ApiClient) -> Self {
        Self { client }
    }

    pub fn client(&self) -> &ApiClient {
        &self.client
    }

    /// `POST /files/upload` — multipart upload of one file under the `file`
    /// field. The transport sets the multipart content type; no JSON header
    /// is attached.
    pub async fn upload(
        &self,
        file_name: &str,
        contents: Vec<u8>,
    ) -> Result<UploadResponse, ApiError> {
        let part = Part::bytes(contents).file_name(file_name.to_string());
        let form = Form::new().part("file", part);
        self.client.post_multipart("/files/upload", form).await
    }

    /// `GET /files` — list the user's files.
    pub async fn list(&self) -> Result<FileListResponse, ApiError> {
        self.client.get_json("/files").await
    }

    /// `GET /files/{id}/download` — fetch a file body into memory.
    pub async fn download(&self, file_id: &str) -> Result<Vec<u8>, ApiError> {
        self.client
            .get_bytes(&format!("/files/{}/download", file_id))
            .await
    }

    /// Streamed variant of [`download`](Self::download) for large files.
    pub async fn download_to<W: std::io::Write>(
        &self,
        file_id: &str,
        writer: &mut W,
    ) -> Result<u64, ApiError> {
        self.client
            .download_to(&format!("/files/{}/download", file_id), writer)
            .await
    }
}
