use tracing_subscriber::EnvFilter;

use projdoc_server::config;
use projdoc_server::state::AppState;

#[tokio::main]
async fn main() -> eyre::Result<()> {
    color_eyre::install()?;

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .json()
        .init();

    let config = config::load_config()?;
    let state = AppState::from_config(&config)?;
    let app = projdoc_server::app(state);

    let listener = tokio::net::TcpListener::bind(&config.bind).await?;
    tracing::info!(bind = %config.bind, "listening");

    axum::serve(listener, app).await?;
    Ok(())
}
