//! Shared test helpers for API integration tests.
#![allow(dead_code)]

use axum::Router;
use axum::body::Body;
use axum::http::{Request, StatusCode};
use http_body_util::BodyExt;
use stag_engine::application::dispatcher::Game;
use stag_test_support::FixtureWorldSource;
use tower::ServiceExt;

use stag_api::routes;
use stag_api::state::AppState;

/// Fresh state over the fixture world.
pub fn test_state() -> AppState {
    let game = Game::from_source(&FixtureWorldSource::basic()).unwrap();
    AppState::new(game)
}

/// Build the full app router over `state`. Uses the same route structure as
/// `main.rs`.
pub fn build_test_app(state: AppState) -> Router {
    Router::new()
        .merge(routes::health::router())
        .nest("/api/v1/commands", routes::commands::router())
        .nest("/api/v1/players", routes::players::router())
        .nest("/api/v1/locations", routes::locations::router())
        .with_state(state)
}

/// Send a POST request with a JSON body and return the response.
pub async fn post_json(
    app: Router,
    uri: &str,
    body: &serde_json::Value,
) -> (StatusCode, serde_json::Value) {
    let request = Request::builder()
        .method("POST")
        .uri(uri)
        .header("content-type", "application/json")
        .body(Body::from(serde_json::to_vec(body).unwrap()))
        .unwrap();

    let response = app.oneshot(request).await.unwrap();
    let status = response.status();
    let body_bytes = response.into_body().collect().await.unwrap().to_bytes();
    let json: serde_json::Value = serde_json::from_slice(&body_bytes).unwrap();

    (status, json)
}

/// Send a GET request and return the response.
pub async fn get_json(app: Router, uri: &str) -> (StatusCode, serde_json::Value) {
    let request = Request::builder()
        .method("GET")
        .uri(uri)
        .body(Body::empty())
        .unwrap();

    let response = app.oneshot(request).await.unwrap();
    let status = response.status();
    let body_bytes = response.into_body().collect().await.unwrap().to_bytes();
    let json: serde_json::Value = serde_json::from_slice(&body_bytes).unwrap();

    (status, json)
}

/// Submit one command through the full router and return its narration.
pub async fn command(state: &AppState, input: &str) -> String {
    let app = build_test_app(state.clone());
    let body = serde_json::json!({ "command": input });
    let (status, json) = post_json(app, "/api/v1/commands", &body).await;
    assert_eq!(status, StatusCode::OK);
    json["narration"].as_str().unwrap().to_owned()
}
