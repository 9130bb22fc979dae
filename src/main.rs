use anyhow::Context;
use tracing::info;
use tracing_subscriber::EnvFilter;

use cinematch_api::api::{create_router, AppState};
use cinematch_api::config::Config;
use cinematch_api::data;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let config = Config::from_env()?;

    // Artifacts load before the listener binds: a missing or inconsistent
    // model must keep the process from serving at all.
    info!("loading model artifacts");
    let catalog = data::load_catalog(&config.movies_path)?;
    let matrix = data::load_similarity_matrix(&config.similarity_path)?;
    data::check_dimensions(&catalog, &matrix)?;
    info!(movies = catalog.len(), "model loaded");

    let state = AppState::new(catalog, matrix, config.cache_capacity);
    let app = create_router(state);

    let addr = format!("{}:{}", config.host, config.port);
    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .with_context(|| format!("failed to bind {addr}"))?;
    info!("server running on http://{addr}");
    axum::serve(listener, app).await?;

    Ok(())
}
