//! Routes for the Command Dispatch bounded context.

use axum::extract::State;
use axum::{Json, Router, routing::post};
use serde::{Deserialize, Serialize};
use tracing::{info, instrument};

use stag_engine::domain::commands::SubmitCommand;

use crate::state::AppState;

/// Request body for POST /.
#[derive(Debug, Deserialize)]
pub struct SubmitCommandRequest {
    /// Raw input in the form `"<player>: <text>"`.
    pub command: String,
}

/// Response body carrying the narration for the command.
#[derive(Debug, Serialize)]
pub struct NarrationResponse {
    /// What happened, possibly over several lines.
    pub narration: String,
}

/// POST /
///
/// Every game-level outcome, including malformed input, is a narration and
/// answers 200.
#[instrument(skip(state, request))]
async fn submit_command(
    State(state): State<AppState>,
    Json(request): Json<SubmitCommandRequest>,
) -> Json<NarrationResponse> {
    let command = SubmitCommand::new(request.command);

    info!(correlation_id = %command.correlation_id, "handling submit_command command");

    let narration = state.with_game(|game| game.execute(&command));

    Json(NarrationResponse { narration })
}

/// Returns the router for the command context.
pub fn router() -> Router<AppState> {
    Router::new().route("/", post(submit_command))
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

    async fn submit(state: AppState, command: &str) -> (StatusCode, Value) {
        let app = router().with_state(state);
        let body = serde_json::json!({ "command": command });
        let request = Request::builder()
            .method("POST")
            .uri("/")
            .header("content-type", "application/json")
            .body(Body::from(serde_json::to_vec(&body).unwrap()))
            .unwrap();

        let response = app.oneshot(request).await.unwrap();
        let status = response.status();
        let body_bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        (status, serde_json::from_slice(&body_bytes).unwrap())
    }

    #[tokio::test]
    async fn test_submit_command_returns_narration() {
        // Arrange
        let state = test_app_state();

        // Act
        let (status, json) = submit(state, "simon: look").await;

        // Assert
        assert_eq!(status, StatusCode::OK);
        let narration = json["narration"].as_str().unwrap();
        assert!(narration.starts_with("You are at cabin now."));
    }

    #[tokio::test]
    async fn test_submit_command_mutates_shared_game() {
        // Arrange
        let state = test_app_state();

        // Act
        let (_, first) = submit(state.clone(), "simon: get axe").await;
        let (_, second) = submit(state.clone(), "sion: get axe").await;

        // Assert
        assert_eq!(first["narration"], "You picked up the axe.");
        assert_eq!(second["narration"], "There is no such item to pick up.");
        state.with_game(|game| {
            assert_eq!(game.players().get("simon").unwrap().inventory().len(), 1);
        });
    }

    #[tokio::test]
    async fn test_malformed_command_is_still_200() {
        let (status, json) = submit(test_app_state(), "no separator here").await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(
            json["narration"],
            "Your command is invalid, please use like [player : command]."
        );
    }

    #[tokio::test]
    async fn test_submit_command_returns_422_for_missing_body() {
        // Arrange
        let app = router().with_state(test_app_state());

        let request = Request::builder()
            .method("POST")
            .uri("/")
            .header("content-type", "application/json")
            .body(Body::from("{}"))
            .unwrap();

        // Act
        let response = app.oneshot(request).await.unwrap();

        // Assert
        assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);
    }
}
