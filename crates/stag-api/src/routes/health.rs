//! Liveness endpoint for the Stag server.

use axum::extract::State;
use axum::{Json, Router, routing::get};
use serde::Serialize;

use crate::state::AppState;

/// Body of `GET /health`.
#[derive(Debug, Serialize)]
pub struct HealthReport {
    pub status: &'static str,
    /// Crate name of the running server.
    pub service: &'static str,
    pub version: &'static str,
    /// Where newly seen players spawn.
    pub start_location: String,
    /// Players seen since the server started.
    pub players: usize,
}

async fn health(State(state): State<AppState>) -> Json<HealthReport> {
    let (start_location, players) =
        state.with_game(|game| (game.start_location().to_owned(), game.players().len()));
    Json(HealthReport {
        status: "ok",
        service: env!("CARGO_PKG_NAME"),
        version: env!("CARGO_PKG_VERSION"),
        start_location,
        players,
    })
}

/// Returns the liveness router.
pub fn router() -> Router<AppState> {
    Router::new().route("/health", get(health))
}
