//! Index service: the orchestration behind every tool.

use std::sync::Arc;

use super::{ListOutcome, RemoteIndexApi, StoreSummary};
use crate::config::ToolDefaults;

/// Builds, queries and lists remote indexes through an injected API.
#[derive(Clone)]
pub struct IndexService {
    api: Arc<dyn RemoteIndexApi>,
    defaults: ToolDefaults,
}

impl IndexService {
    pub fn new(api: Arc<dyn RemoteIndexApi>, defaults: ToolDefaults) -> Self {
        Self { api, defaults }
    }

    pub fn defaults(&self) -> &ToolDefaults {
        &self.defaults
    }

    pub(crate) fn api(&self) -> &dyn RemoteIndexApi {
        self.api.as_ref()
    }

    pub async fn list_stores(&self) -> ListOutcome {
        match self.api.list_indexes().await {
            Ok(indexes) => {
                tracing::debug!(count = indexes.len(), "Vector stores listed");
                ListOutcome::success(
                    indexes
                        .into_iter()
                        .map(|vs| StoreSummary {
                            id: vs.id,
                            name: vs.name,
                        })
                        .collect(),
                )
            }
            Err(e) => {
                tracing::warn!(error = %e, "Failed to list vector stores");
                ListOutcome::error(format!("Failed to list vector stores: {}", e))
            }
        }
    }
}
