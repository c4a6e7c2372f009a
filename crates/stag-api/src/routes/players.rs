//! Routes for the Player Registry bounded context.

use axum::extract::{Path, State};
use axum::{Json, Router, routing::get};
use tracing::instrument;

use stag_session::application::query_handlers::{self, PlayerView};

use crate::error::ApiError;
use crate::state::AppState;

/// GET /{name}
///
/// Reads only; never creates a player.
#[instrument(skip(state))]
async fn get_player(
    State(state): State<AppState>,
    Path(name): Path<String>,
) -> Result<Json<PlayerView>, ApiError> {
    let view = state.with_game(|game| query_handlers::get_player_by_name(game.players(), &name))?;
    Ok(Json(view))
}

/// Returns the router for the player context.
pub fn router() -> Router<AppState> {
    Router::new().route("/{name}", get(get_player))
}

#[cfg(test)]
mod tests {
    use super::*;

    use axum::body::Body;
    use axum::http::{Request, StatusCode};
    use serde_json::Value;
    use stag_engine::application::dispatcher::Game;
    use stag_test_support::FixtureWorldSource;
    use tower::ServiceExt;

    fn test_app_state() -> AppState {
        AppState::new(Game::from_source(&FixtureWorldSource::basic()).unwrap())
    }

    async fn get_json(state: AppState, uri: &str) -> (StatusCode, Value) {
        let app = router().with_state(state);
        let request = Request::builder()
            .method("GET")
            .uri(uri)
            .body(Body::empty())
            .unwrap();

        let response = app.oneshot(request).await.unwrap();
        let status = response.status();
        let body_bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        (status, serde_json::from_slice(&body_bytes).unwrap())
    }

    #[tokio::test]
    async fn test_get_player_returns_view() {
        // Arrange
        let state = test_app_state();
        state.with_game(|game| game.handle_command("simon: get potion"));

        // Act
        let (status, json) = get_json(state, "/simon").await;

        // Assert
        assert_eq!(status, StatusCode::OK);
        assert_eq!(json["name"], "simon");
        assert_eq!(json["location"], "cabin");
        assert_eq!(json["health"], 3);
        assert_eq!(json["inventory"][0]["name"], "potion");
    }

    #[tokio::test]
    async fn test_get_player_folds_name_case() {
        // Arrange
        let state = test_app_state();
        state.with_game(|game| game.handle_command("Simon: get axe"));

        // Act
        let (status, json) = get_json(state, "/SIMON").await;

        // Assert
        assert_eq!(status, StatusCode::OK);
        assert_eq!(json["name"], "simon");
        assert_eq!(json["inventory"][0]["name"], "axe");
    }

    #[tokio::test]
    async fn test_get_unknown_player_returns_404_without_creating() {
        // Arrange
        let state = test_app_state();

        // Act
        let (status, json) = get_json(state.clone(), "/nobody").await;

        // Assert
        assert_eq!(status, StatusCode::NOT_FOUND);
        assert_eq!(json["error"], "player_not_found");
        assert!(state.with_game(|game| game.players().is_empty()));
    }
}
