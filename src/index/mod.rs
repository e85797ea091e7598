//! Local-directory indexing: discovery, reuse matching, build and query.
//!
//! [`IndexService`] owns the orchestration. The remote side is reached only
//! through [`RemoteIndexApi`], implemented by [`crate::Client`] for the hosted
//! service and by an in-memory fake in tests.

mod build;
mod discovery;
mod query;
mod remote;
pub mod reuse;
mod service;
#[cfg(test)]
pub(crate) mod testing;
mod traits;
mod types;

pub use discovery::LocalFileSet;
pub use reuse::{IndexSnapshot, find_matching_index};
pub use service::IndexService;
pub use traits::RemoteIndexApi;
pub use types::{
    BuildOutcome, BuildRequest, BuildStats, ListOutcome, QueryHit, QueryOutcome, QueryRequest,
    Status, StoreSummary,
};
