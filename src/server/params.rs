//! Tool argument schemas.

use schemars::JsonSchema;
use serde::Deserialize;

use crate::config::MAX_RESULTS_LIMIT;
use crate::index::{BuildRequest, QueryRequest};

fn default_true() -> bool {
    true
}

#[derive(Debug, Clone, Deserialize, JsonSchema)]
pub struct CreateVectorDbParams {
    /// Directory to search for files. Subdirectories are searched recursively.
    pub directory_path: String,
    /// Name of the vector store to create. Defaults to "local_knowledge".
    #[serde(default)]
    pub vector_store_name: Option<String>,
    /// Glob patterns of files to include, matched in every subdirectory.
    /// Defaults to ["*.txt", "*.pdf", "*.docx", "*.md"].
    #[serde(default)]
    pub file_patterns: Option<Vec<String>>,
    /// Return an existing vector store holding exactly the same file names
    /// instead of uploading again. Defaults to true.
    #[serde(default = "default_true")]
    pub reuse_existing: bool,
}

impl From<CreateVectorDbParams> for BuildRequest {
    fn from(params: CreateVectorDbParams) -> Self {
        BuildRequest {
            directory: params.directory_path.into(),
            store_name: params.vector_store_name,
            file_patterns: params.file_patterns,
            reuse_existing: params.reuse_existing,
        }
    }
}

#[derive(Debug, Clone, Deserialize, JsonSchema)]
pub struct QueryVectorDbParams {
    /// Free-text search query.
    pub query: String,
    /// Id of the vector store to search.
    pub vector_store_id: String,
    /// Number of results to return (1-50). Defaults to 5; out-of-range
    /// values are clamped.
    #[serde(default)]
    pub n_results: Option<i64>,
}

impl From<QueryVectorDbParams> for QueryRequest {
    fn from(params: QueryVectorDbParams) -> Self {
        QueryRequest {
            query: params.query,
            vector_store_id: params.vector_store_id,
            max_results: params
                .n_results
                .map(|n| n.clamp(1, i64::from(MAX_RESULTS_LIMIT)) as u32),
        }
    }
}
