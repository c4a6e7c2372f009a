//! Stag API server entry point.

use std::error::Error;

use axum::Router;
use stag_api::config::Config;
use stag_api::error::AppError;
use stag_api::state::AppState;
use stag_api::{line, routes};
use stag_content::application::loader::YamlWorldSource;
use stag_engine::application::dispatcher::Game;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<(), Box<dyn Error>> {
    // Initialize tracing subscriber.
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .json()
        .init();

    tracing::info!("Starting Stag server");

    // Read configuration from environment.
    let config = Config::from_env()?;
    let http_addr = config.http_addr()?;
    let line_addr = config.line_addr()?;

    // Load the world and build application state.
    let source = YamlWorldSource::new(&config.world_file);
    let game = Game::from_source(&source).map_err(AppError::from)?;
    let app_state = AppState::new(game);

    // Optional line-protocol listener shares the same game.
    if let Some(addr) = line_addr {
        let listener = tokio::net::TcpListener::bind(addr).await.map_err(AppError::from)?;
        let state = app_state.clone();
        tokio::spawn(async move {
            if let Err(e) = line::serve(listener, state).await {
                tracing::error!(err = %e, "line server stopped");
            }
        });
    }

    // Build router.
    let app = Router::new()
        .merge(routes::health::router())
        .nest("/api/v1/commands", routes::commands::router())
        .nest("/api/v1/players", routes::players::router())
        .nest("/api/v1/locations", routes::locations::router())
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
        .with_state(app_state);

    // Start server.
    tracing::info!("Listening on {}", http_addr);

    let listener = tokio::net::TcpListener::bind(http_addr)
        .await
        .map_err(AppError::from)?;

    axum::serve(listener, app).await.map_err(AppError::from)?;

    Ok(())
}
