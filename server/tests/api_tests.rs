//! End-to-end tests for the REST surface, over an in-memory store and a
//! canned weather provider.

use axum_test::TestServer;
use chrono::Utc;
use serde_json::{json, Value};
use todo_core::{
    MemoryStore, TodoRepository, TodoService, Weather, WeatherProvider, WeatherQuery,
    WeatherReading,
};
use todo_server::routes;
use todo_server::state::AppState;

struct CannedWeather;

impl WeatherProvider for CannedWeather {
    async fn current_weather(&self, query: &WeatherQuery) -> WeatherReading {
        let city = query.city.clone().unwrap_or_else(|| "Kaduna".to_string());
        WeatherReading::Fallback(Weather {
            location: city,
            country: "NG".to_string(),
            temperature: 27,
            feels_like: 29,
            humidity: 65,
            description: "clear sky".to_string(),
            icon: "01d".to_string(),
            wind_speed: 3.5,
            timestamp: Utc::now(),
        })
    }
}

fn test_server() -> TestServer {
    let repository = TodoRepository::new(Box::new(MemoryStore::new()));
    let service = TodoService::new(repository);
    let state = AppState::new(service, CannedWeather);
    TestServer::new(routes::router("http://localhost:3000", state)).unwrap()
}

#[tokio::test]
async fn test_health_endpoint() {
    let server = test_server();
    let response = server.get("/api/health").await;
    response.assert_status_ok();
    let body: Value = response.json();
    assert_eq!(body["status"], "OK");
    assert!(body["timestamp"].is_string());
}

#[tokio::test]
async fn test_list_returns_seeded_todos() {
    let server = test_server();
    let response = server.get("/api/todos").await;
    response.assert_status_ok();
    let body: Value = response.json();
    assert_eq!(body["success"], true);
    assert_eq!(body["count"], 5);
    assert_eq!(body["data"].as_array().unwrap().len(), 5);
    let completed = body["data"]
        .as_array()
        .unwrap()
        .iter()
        .filter(|t| t["completed"] == true)
        .count();
    assert_eq!(completed, 2);
}

#[tokio::test]
async fn test_create_todo() {
    let server = test_server();
    let response = server
        .post("/api/todos")
        .json(&json!({"text": "  Buy milk  "}))
        .await;
    response.assert_status(axum::http::StatusCode::CREATED);
    let body: Value = response.json();
    assert_eq!(body["success"], true);
    assert_eq!(body["data"]["text"], "Buy milk");
    assert_eq!(body["data"]["completed"], false);
    assert!(body["data"]["id"].is_string());
    assert_eq!(body["data"]["createdAt"], body["data"]["updatedAt"]);

    let list: Value = server.get("/api/todos").await.json();
    assert_eq!(list["count"], 6);
}

#[tokio::test]
async fn test_create_without_text_is_400() {
    let server = test_server();
    let response = server.post("/api/todos").json(&json!({})).await;
    response.assert_status(axum::http::StatusCode::BAD_REQUEST);
    let body: Value = response.json();
    assert_eq!(body["success"], false);
    assert_eq!(body["error"], "Text is required");
}

#[tokio::test]
async fn test_create_whitespace_text_is_400_and_not_stored() {
    let server = test_server();
    let response = server.post("/api/todos").json(&json!({"text": "   "})).await;
    response.assert_status(axum::http::StatusCode::BAD_REQUEST);

    let list: Value = server.get("/api/todos").await.json();
    assert_eq!(list["count"], 5);
}

#[tokio::test]
async fn test_patch_updates_only_supplied_fields() {
    let server = test_server();
    let created: Value = server
        .post("/api/todos")
        .json(&json!({"text": "original"}))
        .await
        .json();
    let id = created["data"]["id"].as_str().unwrap();

    let response = server
        .patch(&format!("/api/todos/{id}"))
        .json(&json!({"completed": true}))
        .await;
    response.assert_status_ok();
    let body: Value = response.json();
    assert_eq!(body["data"]["completed"], true);
    assert_eq!(body["data"]["text"], "original");
    assert_eq!(body["data"]["createdAt"], created["data"]["createdAt"]);
}

#[tokio::test]
async fn test_patch_unknown_id_is_404() {
    let server = test_server();
    let response = server
        .patch("/api/todos/unknown-id")
        .json(&json!({"text": "x"}))
        .await;
    response.assert_status(axum::http::StatusCode::NOT_FOUND);
    let body: Value = response.json();
    assert_eq!(body["success"], false);
    assert_eq!(body["error"], "Todo not found");
}

#[tokio::test]
async fn test_patch_empty_text_is_400() {
    let server = test_server();
    let created: Value = server
        .post("/api/todos")
        .json(&json!({"text": "keep me"}))
        .await
        .json();
    let id = created["data"]["id"].as_str().unwrap();

    let response = server
        .patch(&format!("/api/todos/{id}"))
        .json(&json!({"text": "   "}))
        .await;
    response.assert_status(axum::http::StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_delete_then_delete_again() {
    let server = test_server();
    let created: Value = server
        .post("/api/todos")
        .json(&json!({"text": "doomed"}))
        .await
        .json();
    let id = created["data"]["id"].as_str().unwrap();

    let response = server.delete(&format!("/api/todos/{id}")).await;
    response.assert_status_ok();
    let body: Value = response.json();
    assert_eq!(body["success"], true);
    assert_eq!(body["message"], "Todo deleted successfully");

    let response = server.delete(&format!("/api/todos/{id}")).await;
    response.assert_status(axum::http::StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_weather_endpoint_passes_city_through() {
    let server = test_server();
    let response = server.get("/api/weather").add_query_param("city", "Lagos").await;
    response.assert_status_ok();
    let body: Value = response.json();
    assert_eq!(body["success"], true);
    assert_eq!(body["data"]["location"], "Lagos");
    assert_eq!(body["data"]["temperature"], 27);
    assert!(body["data"]["feelsLike"].is_number());
}

#[tokio::test]
async fn test_unknown_route_is_404_envelope() {
    let server = test_server();
    let response = server.get("/api/nope").await;
    response.assert_status(axum::http::StatusCode::NOT_FOUND);
    let body: Value = response.json();
    assert_eq!(body["success"], false);
    assert_eq!(body["error"], "Route not found");
}
