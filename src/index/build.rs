//! Build operation: discover, reuse or create, upload, attach.

use std::path::Path;

use tracing::Instrument;

use super::discovery::file_name;
use super::reuse::find_reusable_index;
use super::{BuildOutcome, BuildRequest, BuildStats, IndexService, LocalFileSet};
use crate::Result;

impl IndexService {
    /// Build (or reuse) a remote index from a local directory.
    ///
    /// Never fails past this boundary: every problem becomes an error
    /// outcome, and per-file failures are counted in the stats.
    pub async fn build(&self, request: BuildRequest) -> BuildOutcome {
        let store_name = request
            .store_name
            .unwrap_or_else(|| self.defaults().store_name.clone());
        let patterns = request
            .file_patterns
            .unwrap_or_else(|| self.defaults().file_patterns.clone());
        let directory = request.directory;

        let files = match LocalFileSet::discover(&directory, &patterns).await {
            Ok(files) => files,
            Err(e) => {
                return BuildOutcome::error(format!(
                    "Could not enumerate files in '{}' with patterns {:?}: {}",
                    directory.display(),
                    patterns,
                    e
                ));
            }
        };

        if files.is_empty() {
            return BuildOutcome::error(format!(
                "No files matching patterns {:?} were found in directory '{}'.",
                patterns,
                directory.display()
            ));
        }

        if request.reuse_existing {
            let local_names = files.names();
            match find_reusable_index(self.api(), &local_names).await {
                Ok(Some(existing)) => {
                    tracing::info!(
                        vector_store_id = %existing.id,
                        files = files.len(),
                        "Reusing vector store with identical file names"
                    );
                    let name = existing.name.unwrap_or_else(|| store_name.clone());
                    let mut stats = BuildStats::new(files.len(), existing.id.clone(), name.clone());
                    stats.processed_files = files.len();
                    stats.file_ids = existing.file_ids;
                    stats.reused = true;
                    return BuildOutcome::success(
                        format!(
                            "Vector store '{}' ({}) already contains these {} files; reusing it.",
                            name,
                            existing.id,
                            files.len()
                        ),
                        stats,
                    );
                }
                Ok(None) => {}
                Err(e) => {
                    tracing::warn!(error = %e, "Reuse check failed, creating a new vector store");
                }
            }
        }

        let store = match self.api().create_index(&store_name).await {
            Ok(store) => store,
            Err(e) => {
                return BuildOutcome::error(format!(
                    "Failed to create vector store '{}': {}",
                    store_name, e
                ));
            }
        };

        let mut stats = BuildStats::new(files.len(), store.id.clone(), store_name);

        for path in files.paths() {
            let span = tracing::info_span!("index.file", path = %path.display());
            match self.upload_and_attach(&store.id, path).instrument(span).await {
                Ok(file_id) => stats.record_success(file_id),
                Err(e) => {
                    tracing::warn!(
                        path = %path.display(),
                        error = %e,
                        "Failed to add file to vector store"
                    );
                    stats.record_failure();
                }
            }
        }

        let mut message = format!(
            "Processed {} files and added them to the vector database.",
            stats.processed_files
        );
        if stats.failed_files > 0 {
            message.push_str(&format!(" {} files failed.", stats.failed_files));
        }

        BuildOutcome::success(message, stats)
    }

    async fn upload_and_attach(&self, index_id: &str, path: &Path) -> Result<String> {
        let file = self.api().upload_file(path).await?;
        let name = file_name(path).unwrap_or_default();
        tracing::debug!(file_id = %file.id, name = %name, "Attaching file");
        self.api().attach_file(index_id, &file.id).await?;
        Ok(file.id)
    }
}
