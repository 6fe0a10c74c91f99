use std::sync::Arc;

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use movie_roulette::{
    api::{create_router, with_frontend, AppState},
    config::Config,
    services::TmdbCatalog,
};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::registry()
        .with(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "movie_roulette=info,tower_http=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let config = Config::from_env()?;

    let catalog = TmdbCatalog::new(
        config.tmdb_api_key.clone(),
        config.tmdb_api_url.clone(),
        config.catalog_language.clone(),
        config.watch_region.clone(),
        config.request_timeout(),
    )?;

    let limits = config.discovery_limits();
    tracing::info!(
        max_attempts = ?limits.max_attempts,
        max_duration = ?limits.max_duration,
        region = %config.watch_region,
        "Discovery configured"
    );

    let state = AppState::new(Arc::new(catalog), limits);
    let mut app = create_router(state);

    if let Some(static_dir) = config.static_dir.as_deref() {
        tracing::info!(static_dir = %static_dir, "Serving static front-end");
        app = with_frontend(app, static_dir);
    }

    let address = config.bind_address();
    let listener = tokio::net::TcpListener::bind(&address).await?;
    tracing::info!("Server running on http://{}", address);
    axum::serve(listener, app).await?;

    Ok(())
}
