use std::sync::Arc;

use anyhow::Context;
use clap::Parser;
use tokio::net::TcpListener;
use todo_core::PgTodoStore;
use todo_server::Config;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let dotenv = dotenvy::dotenv();
    let config = Config::parse();

    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| config.log_filter().into()),
        )
        .init();

    if dotenv.is_err() {
        tracing::warn!(".env file not found");
    }

    let database_url = config.database_url()?;
    let store = PgTodoStore::connect(database_url, config.max_connections)
        .await
        .context("failed to open database")?;

    if config.init_schema {
        store
            .ensure_schema()
            .await
            .context("failed to initialize schema")?;
        tracing::info!("todos table ready");
    }

    let listener = TcpListener::bind(config.bind)
        .await
        .with_context(|| format!("failed to bind {}", config.bind))?;
    tracing::info!("server running on {}", listener.local_addr()?);

    todo_server::run_until(listener, Arc::new(store), shutdown_signal()).await?;

    tracing::info!("server stopped");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!("failed to listen for shutdown signal: {e}");
        std::future::pending::<()>().await;
    }
}
