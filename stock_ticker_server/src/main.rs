use std::sync::Arc;

use anyhow::Result;
use stock_ticker_lib::alphavantage_api::Client;
use stock_ticker_server::{app_router, config::Config, init_tracing, AppState};

#[tokio::main]
async fn main() -> Result<()> {
    init_tracing();
    let config = Config::from_env()?;

    let client = Client::with_base_url(&config.provider_base_url)?;
    let listen_addr = config.listen_addr;
    tracing::info!(
        "Starting server on {} (SYMBOL={}, NDAYS={})",
        listen_addr,
        config.symbol,
        config.days
    );

    let router = app_router(AppState::new(config, Arc::new(client)));
    let listener = tokio::net::TcpListener::bind(listen_addr).await?;
    axum::serve(listener, router).await?;
    Ok(())
}
