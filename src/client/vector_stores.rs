//! Vector Stores API client: store lifecycle, file membership and search.

use serde::{Deserialize, Serialize};

use super::{Client, ListParams, ListResponse, collect_pages};
use crate::Result;

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct VectorStore {
    pub id: String,
    #[serde(default)]
    pub object: String,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub created_at: i64,
    #[serde(default)]
    pub status: Option<String>,
    #[serde(default)]
    pub usage_bytes: u64,
    #[serde(default)]
    pub file_counts: FileCounts,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FileCounts {
    #[serde(default)]
    pub in_progress: u32,
    #[serde(default)]
    pub completed: u32,
    #[serde(default)]
    pub failed: u32,
    #[serde(default)]
    pub cancelled: u32,
    #[serde(default)]
    pub total: u32,
}

/// Membership record linking a file to a vector store.
///
/// `id` is the attached file's id.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct VectorStoreFile {
    pub id: String,
    #[serde(default)]
    pub vector_store_id: String,
    #[serde(default)]
    pub status: Option<String>,
    #[serde(default)]
    pub created_at: i64,
    #[serde(default)]
    pub last_error: Option<VectorStoreFileError>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct VectorStoreFileError {
    pub code: String,
    pub message: String,
}

#[derive(Debug, Clone, Serialize)]
struct CreateVectorStoreRequest<'a> {
    name: &'a str,
}

#[derive(Debug, Clone, Serialize)]
struct AttachFileRequest<'a> {
    file_id: &'a str,
}

#[derive(Debug, Clone, Serialize)]
pub struct SearchRequest {
    pub query: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_num_results: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub rewrite_query: Option<bool>,
}

impl SearchRequest {
    pub fn new(query: impl Into<String>) -> Self {
        Self {
            query: query.into(),
            max_num_results: None,
            rewrite_query: None,
        }
    }

    pub fn with_max_results(mut self, max: u32) -> Self {
        self.max_num_results = Some(max);
        self
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct SearchResultsPage {
    #[serde(default)]
    pub search_query: serde_json::Value,
    pub data: Vec<SearchHit>,
    #[serde(default)]
    pub has_more: bool,
    #[serde(default)]
    pub next_page: Option<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SearchHit {
    #[serde(default)]
    pub file_id: String,
    #[serde(default)]
    pub filename: String,
    pub score: f64,
    #[serde(default)]
    pub attributes: Option<serde_json::Value>,
    #[serde(default)]
    pub content: Vec<SearchContent>,
}

impl SearchHit {
    /// Text parts joined with newlines.
    pub fn text(&self) -> String {
        self.content
            .iter()
            .filter(|c| c.content_type == "text")
            .map(|c| c.text.as_str())
            .collect::<Vec<_>>()
            .join("\n")
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SearchContent {
    #[serde(rename = "type")]
    pub content_type: String,
    #[serde(default)]
    pub text: String,
}

impl SearchContent {
    pub fn text(text: impl Into<String>) -> Self {
        Self {
            content_type: "text".to_string(),
            text: text.into(),
        }
    }
}

pub struct VectorStoresClient<'a> {
    client: &'a Client,
}

impl<'a> VectorStoresClient<'a> {
    pub fn new(client: &'a Client) -> Self {
        Self { client }
    }

    fn build_url(&self, path: &str) -> String {
        self.client.url(&format!("/vector_stores{}", path))
    }

    fn request(&self, method: reqwest::Method, url: &str) -> reqwest::RequestBuilder {
        self.client
            .request(method, url)
            .header("OpenAI-Beta", "assistants=v2")
    }

    pub async fn create(&self, name: &str) -> Result<VectorStore> {
        let request = self
            .request(reqwest::Method::POST, &self.build_url(""))
            .json(&CreateVectorStoreRequest { name });
        self.client.send(request).await
    }

    pub async fn get(&self, vector_store_id: &str) -> Result<VectorStore> {
        let url = self.build_url(&format!("/{}", Client::segment(vector_store_id)));
        self.client
            .send(self.request(reqwest::Method::GET, &url))
            .await
    }

    pub async fn list(&self, params: ListParams) -> Result<ListResponse<VectorStore>> {
        let url = params.apply(self.build_url(""));
        self.client
            .send(self.request(reqwest::Method::GET, &url))
            .await
    }

    pub async fn list_all(&self) -> Result<Vec<VectorStore>> {
        collect_pages(|params| self.list(params)).await
    }

    pub async fn attach_file(
        &self,
        vector_store_id: &str,
        file_id: &str,
    ) -> Result<VectorStoreFile> {
        let url = self.build_url(&format!("/{}/files", Client::segment(vector_store_id)));
        let request = self
            .request(reqwest::Method::POST, &url)
            .json(&AttachFileRequest { file_id });
        self.client.send(request).await
    }

    pub async fn list_files(
        &self,
        vector_store_id: &str,
        params: ListParams,
    ) -> Result<ListResponse<VectorStoreFile>> {
        let path = format!("/{}/files", Client::segment(vector_store_id));
        let url = params.apply(self.build_url(&path));
        self.client
            .send(self.request(reqwest::Method::GET, &url))
            .await
    }

    pub async fn list_all_files(&self, vector_store_id: &str) -> Result<Vec<VectorStoreFile>> {
        collect_pages(|params| self.list_files(vector_store_id, params)).await
    }

    pub async fn search(
        &self,
        vector_store_id: &str,
        request: &SearchRequest,
    ) -> Result<SearchResultsPage> {
        let url = self.build_url(&format!("/{}/search", Client::segment(vector_store_id)));
        let request = self.request(reqwest::Method::POST, &url).json(request);
        self.client.send(request).await
    }
}
