//! Integration tests for the player and location query endpoints.

mod common;

use axum::http::StatusCode;

#[tokio::test]
async fn test_location_view_reflects_produced_entities() {
    // Arrange
    let state = common::test_state();
    common::command(&state, "simon: get axe").await;
    common::command(&state, "simon: goto forest").await;
    common::command(&state, "simon: cut down tree").await;

    // Act
    let (status, json) =
        common::get_json(common::build_test_app(state), "/api/v1/locations/forest").await;

    // Assert
    assert_eq!(status, StatusCode::OK);
    assert_eq!(json["name"], "forest");
    let names: Vec<&str> = json["entities"]
        .as_array()
        .unwrap()
        .iter()
        .map(|e| e["name"].as_str().unwrap())
        .collect();
    assert_eq!(names, vec!["key", "log"]);
    assert_eq!(json["entities"][1]["kind"], "artefact");
}

#[tokio::test]
async fn test_unknown_location_returns_404() {
    let app = common::build_test_app(common::test_state());

    let (status, json) = common::get_json(app, "/api/v1/locations/moon").await;

    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(json["error"], "location_not_found");
}

#[tokio::test]
async fn test_player_view_after_death() {
    // Arrange
    let state = common::test_state();
    for input in [
        "simon: goto forest",
        "simon: get key",
        "simon: goto cabin",
        "simon: get potion",
        "simon: open trapdoor",
        "simon: goto cellar",
        "simon: fight elf",
        "simon: fight elf",
        "simon: fight elf",
    ] {
        common::command(&state, input).await;
    }

    // Act
    let (status, json) =
        common::get_json(common::build_test_app(state.clone()), "/api/v1/players/simon").await;
    let (_, cellar) =
        common::get_json(common::build_test_app(state), "/api/v1/locations/cellar").await;

    // Assert
    assert_eq!(status, StatusCode::OK);
    assert_eq!(json["location"], "cabin");
    assert_eq!(json["health"], 3);
    assert_eq!(json["inventory"].as_array().unwrap().len(), 0);
    let dropped: Vec<&str> = cellar["entities"]
        .as_array()
        .unwrap()
        .iter()
        .map(|e| e["name"].as_str().unwrap())
        .collect();
    assert_eq!(dropped, vec!["elf", "potion"]);
}
