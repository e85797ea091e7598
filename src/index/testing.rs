//! In-memory remote for orchestration tests.

use std::collections::HashMap;
use std::path::Path;
use std::sync::Mutex;

use async_trait::async_trait;

use super::RemoteIndexApi;
use crate::client::{File, SearchHit, VectorStore};
use crate::{Error, Result};

#[derive(Default)]
struct State {
    files: Vec<File>,
    indexes: Vec<VectorStore>,
    members: HashMap<String, Vec<String>>,
    created: Vec<String>,
    uploads: usize,
    calls: usize,
    hits: Vec<SearchHit>,
    last_search_limit: Option<u32>,
    fail_listing: bool,
    fail_file_listing: bool,
    fail_members_of: Vec<String>,
    fail_create: bool,
    fail_attach: bool,
    fail_uploads: Vec<String>,
    next_id: usize,
}

impl State {
    fn next_id(&mut self, prefix: &str) -> String {
        self.next_id += 1;
        format!("{}_{}", prefix, self.next_id)
    }
}

fn not_found(what: &str) -> Error {
    Error::Api {
        message: format!("No {} found", what),
        status: Some(404),
        error_type: Some("invalid_request_error".into()),
    }
}

fn unavailable() -> Error {
    Error::Api {
        message: "service unavailable".into(),
        status: Some(503),
        error_type: None,
    }
}

/// Remote index API backed by vectors, with switchable failures.
#[derive(Default)]
pub struct FakeRemote {
    state: Mutex<State>,
}

impl FakeRemote {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add an index whose members are freshly registered files with these names.
    pub fn seed_index(&self, id: &str, name: Option<&str>, file_names: &[&str]) {
        let mut state = self.state.lock().unwrap();
        let mut member_ids = Vec::new();
        for file_name in file_names {
            let file_id = state.next_id("file");
            state.files.push(File {
                id: file_id.clone(),
                filename: file_name.to_string(),
                ..Default::default()
            });
            member_ids.push(file_id);
        }
        state.indexes.push(VectorStore {
            id: id.to_string(),
            name: name.map(String::from),
            ..Default::default()
        });
        state.members.insert(id.to_string(), member_ids);
    }

    pub fn set_hits(&self, hits: Vec<SearchHit>) {
        self.state.lock().unwrap().hits = hits;
    }

    /// Fail `list_indexes`.
    pub fn fail_listing(&self) {
        self.state.lock().unwrap().fail_listing = true;
    }

    /// Fail `list_files`.
    pub fn fail_file_listing(&self) {
        self.state.lock().unwrap().fail_file_listing = true;
    }

    /// Fail `list_index_files` for one index.
    pub fn fail_members_of(&self, index_id: &str) {
        self.state
            .lock()
            .unwrap()
            .fail_members_of
            .push(index_id.to_string());
    }

    pub fn fail_create(&self) {
        self.state.lock().unwrap().fail_create = true;
    }

    pub fn fail_attach(&self) {
        self.state.lock().unwrap().fail_attach = true;
    }

    pub fn fail_upload_of(&self, file_name: &str) {
        self.state
            .lock()
            .unwrap()
            .fail_uploads
            .push(file_name.to_string());
    }

    pub fn call_count(&self) -> usize {
        self.state.lock().unwrap().calls
    }

    pub fn upload_count(&self) -> usize {
        self.state.lock().unwrap().uploads
    }

    pub fn created_indexes(&self) -> Vec<String> {
        self.state.lock().unwrap().created.clone()
    }

    pub fn attached(&self, index_id: &str) -> Vec<String> {
        self.state
            .lock()
            .unwrap()
            .members
            .get(index_id)
            .cloned()
            .unwrap_or_default()
    }

    pub fn last_search_limit(&self) -> Option<u32> {
        self.state.lock().unwrap().last_search_limit
    }

    fn begin(&self) -> std::sync::MutexGuard<'_, State> {
        let mut state = self.state.lock().unwrap();
        state.calls += 1;
        state
    }
}

#[async_trait]
impl RemoteIndexApi for FakeRemote {
    async fn upload_file(&self, path: &Path) -> Result<File> {
        let mut state = self.begin();
        state.uploads += 1;
        let filename = path
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_default();
        if state.fail_uploads.contains(&filename) {
            return Err(unavailable());
        }
        let file = File {
            id: state.next_id("file"),
            filename,
            ..Default::default()
        };
        state.files.push(file.clone());
        Ok(file)
    }

    async fn list_files(&self) -> Result<Vec<File>> {
        let state = self.begin();
        if state.fail_file_listing {
            return Err(unavailable());
        }
        Ok(state.files.clone())
    }

    async fn create_index(&self, name: &str) -> Result<VectorStore> {
        let mut state = self.begin();
        if state.fail_create {
            return Err(unavailable());
        }
        let store = VectorStore {
            id: state.next_id("vs"),
            name: Some(name.to_string()),
            ..Default::default()
        };
        state.created.push(name.to_string());
        state.indexes.push(store.clone());
        state.members.insert(store.id.clone(), Vec::new());
        Ok(store)
    }

    async fn list_indexes(&self) -> Result<Vec<VectorStore>> {
        let state = self.begin();
        if state.fail_listing {
            return Err(unavailable());
        }
        Ok(state.indexes.clone())
    }

    async fn attach_file(&self, index_id: &str, file_id: &str) -> Result<()> {
        let mut state = self.begin();
        if state.fail_attach {
            return Err(unavailable());
        }
        state
            .members
            .get_mut(index_id)
            .ok_or_else(|| not_found("vector store"))?
            .push(file_id.to_string());
        Ok(())
    }

    async fn list_index_files(&self, index_id: &str) -> Result<Vec<String>> {
        let state = self.begin();
        if state.fail_members_of.iter().any(|id| id == index_id) {
            return Err(unavailable());
        }
        state
            .members
            .get(index_id)
            .cloned()
            .ok_or_else(|| not_found("vector store"))
    }

    async fn search(
        &self,
        index_id: &str,
        _query: &str,
        max_results: u32,
    ) -> Result<Vec<SearchHit>> {
        let mut state = self.begin();
        state.last_search_limit = Some(max_results);
        if !state.members.contains_key(index_id) {
            return Err(not_found("vector store"));
        }
        Ok(state.hits.clone())
    }
}
