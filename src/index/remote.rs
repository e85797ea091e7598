//! [`RemoteIndexApi`] over the hosted HTTP API.

use std::path::Path;

use async_trait::async_trait;

use super::RemoteIndexApi;
use crate::Result;
use crate::client::{Client, File, FilePurpose, SearchHit, SearchRequest, VectorStore};

#[async_trait]
impl RemoteIndexApi for Client {
    async fn upload_file(&self, path: &Path) -> Result<File> {
        let file = self
            .files()
            .upload_path(path, FilePurpose::Assistants)
            .await?;
        tracing::info!(file_id = %file.id, path = %path.display(), "File uploaded");
        Ok(file)
    }

    async fn list_files(&self) -> Result<Vec<File>> {
        self.files().list_all().await
    }

    async fn create_index(&self, name: &str) -> Result<VectorStore> {
        let store = self.vector_stores().create(name).await?;
        tracing::info!(vector_store_id = %store.id, name, "Vector store created");
        Ok(store)
    }

    async fn list_indexes(&self) -> Result<Vec<VectorStore>> {
        self.vector_stores().list_all().await
    }

    async fn attach_file(&self, index_id: &str, file_id: &str) -> Result<()> {
        let attached = self.vector_stores().attach_file(index_id, file_id).await?;
        tracing::info!(
            vector_store_id = index_id,
            file_id,
            status = attached.status.as_deref().unwrap_or("unknown"),
            "File attached to vector store"
        );
        Ok(())
    }

    async fn list_index_files(&self, index_id: &str) -> Result<Vec<String>> {
        let files = self.vector_stores().list_all_files(index_id).await?;
        Ok(files.into_iter().map(|f| f.id).collect())
    }

    async fn search(
        &self,
        index_id: &str,
        query: &str,
        max_results: u32,
    ) -> Result<Vec<SearchHit>> {
        let request = SearchRequest::new(query).with_max_results(max_results);
        let page = self.vector_stores().search(index_id, &request).await?;
        Ok(page.data)
    }
}
