//! Files API client for uploading and listing remote files.

use std::path::Path;

use serde::{Deserialize, Serialize};

use super::{Client, ListParams, ListResponse, collect_pages};
use crate::{Error, Result};

/// Remote file object.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct File {
    pub id: String,
    #[serde(default)]
    pub object: String,
    #[serde(default)]
    pub bytes: u64,
    #[serde(default)]
    pub created_at: i64,
    pub filename: String,
    #[serde(default)]
    pub purpose: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub status: Option<String>,
}

/// Intended use of an uploaded file.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum FilePurpose {
    /// Files consumed by vector stores and file search.
    #[default]
    Assistants,
    UserData,
}

impl FilePurpose {
    pub fn as_str(&self) -> &'static str {
        match self {
            FilePurpose::Assistants => "assistants",
            FilePurpose::UserData => "user_data",
        }
    }
}

pub struct FilesClient<'a> {
    client: &'a Client,
}

impl<'a> FilesClient<'a> {
    pub fn new(client: &'a Client) -> Self {
        Self { client }
    }

    fn build_url(&self, path: &str) -> String {
        self.client.url(&format!("/files{}", path))
    }

    /// Upload a local file; the remote filename is the path's base name.
    pub async fn upload_path(&self, path: &Path, purpose: FilePurpose) -> Result<File> {
        let filename = path
            .file_name()
            .and_then(|n| n.to_str())
            .map(String::from)
            .ok_or_else(|| {
                Error::InvalidRequest(format!("path has no file name: {}", path.display()))
            })?;

        let data = tokio::fs::read(path).await.map_err(Error::Io)?;
        let mime_type = mime_guess::from_path(path)
            .first_or_octet_stream()
            .to_string();

        self.upload_bytes(data, filename, &mime_type, purpose).await
    }

    pub async fn upload_bytes(
        &self,
        data: Vec<u8>,
        filename: String,
        mime_type: &str,
        purpose: FilePurpose,
    ) -> Result<File> {
        let part = reqwest::multipart::Part::bytes(data)
            .file_name(filename)
            .mime_str(mime_type)
            .map_err(|e| Error::InvalidRequest(e.to_string()))?;

        let form = reqwest::multipart::Form::new()
            .text("purpose", purpose.as_str())
            .part("file", part);

        let request = self
            .client
            .request(reqwest::Method::POST, &self.build_url(""))
            .multipart(form);

        self.client.send(request).await
    }

    pub async fn get(&self, file_id: &str) -> Result<File> {
        let url = self.build_url(&format!("/{}", Client::segment(file_id)));
        let request = self.client.request(reqwest::Method::GET, &url);
        self.client.send(request).await
    }

    pub async fn list(&self, params: ListParams) -> Result<ListResponse<File>> {
        let url = params.apply(self.build_url(""));
        let request = self.client.request(reqwest::Method::GET, &url);
        self.client.send(request).await
    }

    pub async fn list_all(&self) -> Result<Vec<File>> {
        collect_pages(|params| self.list(params)).await
    }
}
