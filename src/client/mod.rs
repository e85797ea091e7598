//! HTTP client for the hosted Files and Vector Stores APIs.

mod config;
pub mod error;
pub mod files;
pub mod vector_stores;

pub use config::{ClientBuilder, ClientConfig, DEFAULT_BASE_URL, DEFAULT_TIMEOUT};
pub use error::{ErrorDetail, ErrorResponse};
pub use files::{File, FilePurpose, FilesClient};
pub use vector_stores::{
    FileCounts, SearchContent, SearchHit, SearchRequest, SearchResultsPage, VectorStore,
    VectorStoreFile, VectorStoreFileError, VectorStoresClient,
};

use std::borrow::Cow;
use std::sync::Arc;

use serde::Deserialize;
use serde::de::DeserializeOwned;
use url::form_urlencoded;

use crate::{Error, Result};

/// Page size used when walking every page of a list endpoint.
const LIST_PAGE_SIZE: u32 = 100;

#[derive(Clone)]
pub struct Client {
    http: reqwest::Client,
    config: Arc<ClientConfig>,
}

impl Client {
    pub fn new(config: ClientConfig) -> Result<Self> {
        let http = reqwest::Client::builder()
            .timeout(config.timeout)
            .build()
            .map_err(Error::Network)?;

        Ok(Self {
            http,
            config: Arc::new(config),
        })
    }

    pub fn with_http(config: ClientConfig, http: reqwest::Client) -> Self {
        Self {
            http,
            config: Arc::new(config),
        }
    }

    pub fn builder() -> ClientBuilder {
        ClientBuilder::default()
    }

    pub fn files(&self) -> FilesClient<'_> {
        FilesClient::new(self)
    }

    pub fn vector_stores(&self) -> VectorStoresClient<'_> {
        VectorStoresClient::new(self)
    }

    pub fn config(&self) -> &ClientConfig {
        &self.config
    }

    pub(crate) fn url(&self, path: &str) -> String {
        format!("{}{}", self.config.base_url, path)
    }

    /// Percent-encode a caller-supplied id for use as one path segment.
    pub(crate) fn segment(id: &str) -> Cow<'_, str> {
        urlencoding::encode(id)
    }

    pub(crate) fn request(&self, method: reqwest::Method, url: &str) -> reqwest::RequestBuilder {
        let (header_name, header_value) = self.config.credential.auth_header();
        let mut request = self
            .http
            .request(method, url)
            .header(header_name, header_value);

        if let Some(org) = &self.config.organization {
            request = request.header("OpenAI-Organization", org);
        }
        if let Some(project) = &self.config.project {
            request = request.header("OpenAI-Project", project);
        }

        request
    }

    pub(crate) async fn send<T: DeserializeOwned>(
        &self,
        request: reqwest::RequestBuilder,
    ) -> Result<T> {
        let response = request.send().await.map_err(Error::Network)?;
        let status = response.status();
        tracing::debug!(status = status.as_u16(), url = %response.url(), "API response");

        if !status.is_success() {
            return Err(error::from_response(response).await);
        }

        response.json().await.map_err(Error::Network)
    }
}

/// Cursor parameters shared by every list endpoint.
#[derive(Debug, Clone, Default)]
pub struct ListParams {
    pub limit: Option<u32>,
    pub after: Option<String>,
}

impl ListParams {
    pub fn page(limit: u32, after: Option<String>) -> Self {
        Self {
            limit: Some(limit),
            after,
        }
    }

    pub(crate) fn apply(&self, url: String) -> String {
        let mut query_params: Vec<(&str, String)> = Vec::new();
        if let Some(limit) = self.limit {
            query_params.push(("limit", limit.to_string()));
        }
        if let Some(after) = &self.after {
            query_params.push(("after", after.clone()));
        }
        if query_params.is_empty() {
            return url;
        }

        let encoded: String = form_urlencoded::Serializer::new(String::new())
            .extend_pairs(query_params.iter().map(|(k, v)| (*k, v.as_str())))
            .finish();
        format!("{}?{}", url, encoded)
    }
}

/// One page of a cursor-paginated list endpoint.
#[derive(Debug, Clone, Deserialize)]
pub struct ListResponse<T> {
    pub data: Vec<T>,
    #[serde(default)]
    pub has_more: bool,
    #[serde(default)]
    pub first_id: Option<String>,
    #[serde(default)]
    pub last_id: Option<String>,
}

/// Walk every page of a list endpoint, following `last_id` while `has_more`.
pub(crate) async fn collect_pages<T, F, Fut>(mut fetch: F) -> Result<Vec<T>>
where
    F: FnMut(ListParams) -> Fut,
    Fut: std::future::Future<Output = Result<ListResponse<T>>>,
{
    let mut all = Vec::new();
    let mut after: Option<String> = None;

    loop {
        let page = fetch(ListParams::page(LIST_PAGE_SIZE, after.take())).await?;
        all.extend(page.data);

        match page.last_id {
            Some(last_id) if page.has_more => after = Some(last_id),
            _ => break,
        }
    }

    Ok(all)
}
