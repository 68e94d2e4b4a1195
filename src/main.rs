use ante_guard::{
    ante::build_decorator,
    api::Server,
    config::Config,
    pool::TransactionPool,
};
use std::sync::Arc;
use tracing::info;

/// The main entry point for the ante guard service.
///
/// Initializes logging, loads the configuration (path from the first
/// argument, `config/default.toml` otherwise), builds the message filter
/// chain and starts the API server.
#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt::init();
    
    let path = std::env::args()
        .nth(1)
        .unwrap_or_else(|| "config/default.toml".to_string());
    let config = Config::load(&path)?;
    info!(
        "Ante guard starting for chain {} with account prefix {}",
        config.chain.chain_id, config.address.account_prefix
    );
    
    let decorator = build_decorator(&config.ante, &config.address);
    info!(
        "{} message filters: {:?}",
        decorator.len(),
        decorator.filter_names()
    );
    
    let tx_pool = Arc::new(TransactionPool::new(config.pool.max_pending));
    info!("Transaction pool capacity: {}", tx_pool.capacity());
    
    let server = Server::new(config, decorator, tx_pool);
    server.start().await?;
    
    Ok(())
}
