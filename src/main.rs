use std::sync::Arc;

use vector_store_mcp::observability::{TracingConfig, init_tracing};
use vector_store_mcp::{Client, Config, IndexService, Result, VectorStoreServer};

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();
    init_tracing(&TracingConfig::default())?;

    let config = Config::from_env()?;
    tracing::info!(
        base_url = %config.client.base_url,
        default_store = %config.defaults.store_name,
        "Starting vector-store-mcp"
    );

    let client = Client::new(config.client.clone())?;
    let service = IndexService::new(Arc::new(client), config.defaults);

    VectorStoreServer::new(Arc::new(service)).serve_stdio().await
}
