//! Server: reads config from env, recreates and seeds the store, serves the CRUD routes.

use market_crud::{app, connect, seed, AppState, ServerConfig};
use tokio::net::TcpListener;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    dotenvy::dotenv().ok();
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new("market_crud=info,tower_http=info")),
        )
        .init();

    let config = ServerConfig::from_env()?;
    tracing::info!(
        database_url = %config.database_url,
        fixtures_dir = %config.fixtures_dir.display(),
        "starting"
    );

    let pool = connect(&config.database_url, config.max_connections).await?;
    if let Err(e) = seed(&pool, &config.fixtures_dir).await {
        tracing::error!(error = %e, "seeding failed");
        return Err(e.into());
    }

    let router = app(AppState::new(pool), config.body_limit);
    let listener = TcpListener::bind(config.bind_addr).await?;
    tracing::info!("listening on {}", listener.local_addr()?);
    axum::serve(listener, router).await?;
    Ok(())
}
