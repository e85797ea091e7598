//! Remote index trait definitions.

use std::path::Path;

use async_trait::async_trait;

use crate::Result;
use crate::client::{File, SearchHit, VectorStore};

/// Operations the index service needs from the hosted API.
///
/// Every call is independent; implementations hold no per-call state.
#[async_trait]
pub trait RemoteIndexApi: Send + Sync {
    /// Upload one local file to remote storage.
    async fn upload_file(&self, path: &Path) -> Result<File>;

    /// Every remote file, used to map ids back to names.
    async fn list_files(&self) -> Result<Vec<File>>;

    async fn create_index(&self, name: &str) -> Result<VectorStore>;

    /// Every remote index, in the order the service returns them.
    async fn list_indexes(&self) -> Result<Vec<VectorStore>>;

    async fn attach_file(&self, index_id: &str, file_id: &str) -> Result<()>;

    /// Ids of the files attached to an index.
    async fn list_index_files(&self, index_id: &str) -> Result<Vec<String>>;

    async fn search(&self, index_id: &str, query: &str, max_results: u32)
    -> Result<Vec<SearchHit>>;
}
