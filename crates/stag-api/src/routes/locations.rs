//! Routes for the World bounded context.

use axum::extract::{Path, State};
use axum::{Json, Router, routing::get};
use tracing::instrument;

use stag_world::application::query_handlers::{self, LocationView};

use crate::error::ApiError;
use crate::state::AppState;

/// GET /{name}
#[instrument(skip(state))]
async fn get_location(
    State(state): State<AppState>,
    Path(name): Path<String>,
) -> Result<Json<LocationView>, ApiError> {
    let view = state.with_game(|game| query_handlers::get_location_by_name(game.world(), &name))?;
    Ok(Json(view))
}

/// Returns the router for the world context.
pub fn router() -> Router<AppState> {
    Router::new().route("/{name}", get(get_location))
}
