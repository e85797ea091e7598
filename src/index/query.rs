//! Query operation.

use super::{IndexService, QueryHit, QueryOutcome, QueryRequest};
use crate::client::SearchHit;
use crate::config::MAX_RESULTS_LIMIT;

impl IndexService {
    /// Run a similarity query. Errors come back as an error outcome.
    pub async fn query(&self, request: QueryRequest) -> QueryOutcome {
        if request.query.trim().is_empty() {
            return QueryOutcome::error("Query must not be empty.");
        }
        if request.vector_store_id.trim().is_empty() {
            return QueryOutcome::error("vector_store_id must not be empty.");
        }

        let max_results = request
            .max_results
            .unwrap_or(self.defaults().max_results)
            .clamp(1, MAX_RESULTS_LIMIT);

        match self
            .api()
            .search(&request.vector_store_id, &request.query, max_results)
            .await
        {
            Ok(hits) => {
                tracing::debug!(
                    vector_store_id = %request.vector_store_id,
                    hits = hits.len(),
                    "Query completed"
                );
                QueryOutcome::success(request.query, rank_hits(hits))
            }
            Err(e) => {
                tracing::warn!(
                    vector_store_id = %request.vector_store_id,
                    error = %e,
                    category = ?e.category(),
                    "Query failed"
                );
                QueryOutcome::error(format!(
                    "Query against vector store '{}' failed: {}",
                    request.vector_store_id, e
                ))
            }
        }
    }
}

/// Number hits from 1 in the order received; no local re-sorting.
fn rank_hits(hits: Vec<SearchHit>) -> Vec<QueryHit> {
    hits.into_iter()
        .enumerate()
        .map(|(i, hit)| QueryHit {
            rank: i + 1,
            score: hit.score,
            text: hit.text(),
            file_name: hit.filename,
        })
        .collect()
}
