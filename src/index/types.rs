//! Request and result records exchanged at the tool boundary.

use std::path::PathBuf;

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Status {
    Success,
    Error,
}

impl Status {
    pub fn is_success(&self) -> bool {
        matches!(self, Status::Success)
    }
}

#[derive(Debug, Clone)]
pub struct BuildRequest {
    pub directory: PathBuf,
    pub store_name: Option<String>,
    pub file_patterns: Option<Vec<String>>,
    pub reuse_existing: bool,
}

impl BuildRequest {
    pub fn new(directory: impl Into<PathBuf>) -> Self {
        Self {
            directory: directory.into(),
            store_name: None,
            file_patterns: None,
            reuse_existing: true,
        }
    }

    pub fn store_name(mut self, name: impl Into<String>) -> Self {
        self.store_name = Some(name.into());
        self
    }

    pub fn file_patterns<I, S>(mut self, patterns: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.file_patterns = Some(patterns.into_iter().map(Into::into).collect());
        self
    }

    pub fn reuse_existing(mut self, reuse: bool) -> Self {
        self.reuse_existing = reuse;
        self
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BuildStats {
    pub total_files: usize,
    pub processed_files: usize,
    pub failed_files: usize,
    pub vector_store_id: String,
    pub vector_store_name: String,
    pub file_ids: Vec<String>,
    #[serde(default)]
    pub reused: bool,
}

impl BuildStats {
    pub fn new(total_files: usize, vector_store_id: String, vector_store_name: String) -> Self {
        Self {
            total_files,
            processed_files: 0,
            failed_files: 0,
            vector_store_id,
            vector_store_name,
            file_ids: Vec::new(),
            reused: false,
        }
    }

    pub fn record_success(&mut self, file_id: String) {
        self.processed_files += 1;
        self.file_ids.push(file_id);
    }

    pub fn record_failure(&mut self) {
        self.failed_files += 1;
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BuildOutcome {
    pub status: Status,
    pub message: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub stats: Option<BuildStats>,
}

impl BuildOutcome {
    pub fn success(message: impl Into<String>, stats: BuildStats) -> Self {
        Self {
            status: Status::Success,
            message: message.into(),
            stats: Some(stats),
        }
    }

    pub fn error(message: impl Into<String>) -> Self {
        Self {
            status: Status::Error,
            message: message.into(),
            stats: None,
        }
    }
}

#[derive(Debug, Clone)]
pub struct QueryRequest {
    pub query: String,
    pub vector_store_id: String,
    pub max_results: Option<u32>,
}

impl QueryRequest {
    pub fn new(query: impl Into<String>, vector_store_id: impl Into<String>) -> Self {
        Self {
            query: query.into(),
            vector_store_id: vector_store_id.into(),
            max_results: None,
        }
    }

    pub fn max_results(mut self, max: u32) -> Self {
        self.max_results = Some(max);
        self
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct QueryHit {
    /// 1-based position in the order the remote search returned.
    pub rank: usize,
    pub score: f64,
    pub text: String,
    pub file_name: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct QueryOutcome {
    pub status: Status,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub query: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub results: Option<Vec<QueryHit>>,
}

impl QueryOutcome {
    pub fn success(query: impl Into<String>, results: Vec<QueryHit>) -> Self {
        Self {
            status: Status::Success,
            query: Some(query.into()),
            message: None,
            results: Some(results),
        }
    }

    pub fn error(message: impl Into<String>) -> Self {
        Self {
            status: Status::Error,
            query: None,
            message: Some(message.into()),
            results: None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StoreSummary {
    pub id: String,
    pub name: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ListOutcome {
    pub status: Status,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub vector_stores: Option<Vec<StoreSummary>>,
}

impl ListOutcome {
    pub fn success(vector_stores: Vec<StoreSummary>) -> Self {
        Self {
            status: Status::Success,
            message: None,
            vector_stores: Some(vector_stores),
        }
    }

    pub fn error(message: impl Into<String>) -> Self {
        Self {
            status: Status::Error,
            message: Some(message.into()),
            vector_stores: None,
        }
    }
}
