//! MCP server exposing the index tools over stdio.

mod params;

pub use params::{CreateVectorDbParams, QueryVectorDbParams};

use std::sync::Arc;

use rmcp::handler::server::router::tool::ToolRouter;
use rmcp::handler::server::wrapper::Parameters;
use rmcp::model::{CallToolResult, Implementation, ProtocolVersion, ServerCapabilities, ServerInfo};
use rmcp::{ErrorData as McpError, ServerHandler, ServiceExt, tool, tool_handler, tool_router};
use serde::Serialize;
use tracing::Instrument;

use crate::index::IndexService;
use crate::observability::ToolCallSpan;
use crate::Error;

const INSTRUCTIONS: &str = "Builds hosted vector stores from local directories and runs \
semantic search against them. Call create_vector_db_from_directory first, then pass the \
returned vector_store_id to query_vector_db. list_vector_stores shows existing stores.";

#[derive(Clone)]
pub struct VectorStoreServer {
    service: Arc<IndexService>,
    tool_router: ToolRouter<Self>,
}

#[tool_router]
impl VectorStoreServer {
    pub fn new(service: Arc<IndexService>) -> Self {
        Self {
            service,
            tool_router: Self::tool_router(),
        }
    }

    /// Serve on stdin/stdout until the client disconnects.
    pub async fn serve_stdio(self) -> crate::Result<()> {
        let running = self
            .serve(rmcp::transport::stdio())
            .await
            .map_err(|e| Error::Mcp(format!("failed to start server: {}", e)))?;
        tracing::info!("MCP server listening on stdio");

        let reason = running
            .waiting()
            .await
            .map_err(|e| Error::Mcp(format!("server task failed: {}", e)))?;
        tracing::info!(?reason, "MCP server stopped");
        Ok(())
    }

    #[tool(
        description = "Create a vector database from the files in a local directory. Files \
matching the patterns are uploaded and added to a new vector store, unless an existing \
vector store already holds exactly the same file names. Returns processing statistics \
including the vector_store_id."
    )]
    async fn create_vector_db_from_directory(
        &self,
        Parameters(params): Parameters<CreateVectorDbParams>,
    ) -> std::result::Result<CallToolResult, McpError> {
        let call = ToolCallSpan::new("create_vector_db_from_directory");
        let outcome = self
            .service
            .build(params.into())
            .instrument(call.span().clone())
            .await;
        let success = outcome.status.is_success();
        call.finish(success);
        respond(&outcome, success)
    }

    #[tool(
        description = "Search a vector database with a free-text query. Returns up to \
n_results ranked snippets with their score and source file name."
    )]
    async fn query_vector_db(
        &self,
        Parameters(params): Parameters<QueryVectorDbParams>,
    ) -> std::result::Result<CallToolResult, McpError> {
        let call = ToolCallSpan::new("query_vector_db");
        let outcome = self
            .service
            .query(params.into())
            .instrument(call.span().clone())
            .await;
        let success = outcome.status.is_success();
        call.finish(success);
        respond(&outcome, success)
    }

    #[tool(description = "List the available vector stores with their ids and names.")]
    async fn list_vector_stores(&self) -> std::result::Result<CallToolResult, McpError> {
        let call = ToolCallSpan::new("list_vector_stores");
        let outcome = self
            .service
            .list_stores()
            .instrument(call.span().clone())
            .await;
        let success = outcome.status.is_success();
        call.finish(success);
        respond(&outcome, success)
    }
}

#[tool_handler]
impl ServerHandler for VectorStoreServer {
    fn get_info(&self) -> ServerInfo {
        ServerInfo {
            protocol_version: ProtocolVersion::V_2024_11_05,
            capabilities: ServerCapabilities::builder().enable_tools().build(),
            server_info: Implementation::from_build_env(),
            instructions: Some(INSTRUCTIONS.to_string()),
        }
    }
}

/// Encode an outcome as JSON text plus structured content.
fn respond<T: Serialize>(
    outcome: &T,
    success: bool,
) -> std::result::Result<CallToolResult, McpError> {
    let value = serde_json::to_value(outcome).map_err(|e| {
        McpError::internal_error(format!("failed to encode tool result: {}", e), None)
    })?;

    Ok(if success {
        CallToolResult::structured(value)
    } else {
        CallToolResult::structured_error(value)
    })
}
