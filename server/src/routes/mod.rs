//! HTTP route definitions.

mod todos;
mod weather;

use crate::error::ApiError;
use crate::state::AppState;
use axum::{
    http::{header, HeaderValue, Method},
    routing::{get, patch},
    Json, Router,
};
use chrono::{DateTime, Utc};
use serde::Serialize;
use todo_core::WeatherProvider;
use tower_http::{cors::CorsLayer, trace::TraceLayer};

/// Build the full application router.
///
/// CORS is restricted to the configured frontend origin; an origin that
/// fails to parse falls back to a permissive layer with a warning rather
/// than refusing to start.
pub fn router<W>(frontend_url: &str, state: AppState<W>) -> Router
where
    W: WeatherProvider + 'static,
{
    let cors = match frontend_url.parse::<HeaderValue>() {
        Ok(origin) => CorsLayer::new()
            .allow_origin(origin)
            .allow_methods([Method::GET, Method::POST, Method::PATCH, Method::DELETE])
            .allow_headers([header::CONTENT_TYPE]),
        Err(e) => {
            tracing::warn!(frontend_url, error = %e, "invalid frontend origin, allowing any");
            CorsLayer::permissive()
        }
    };

    Router::new()
        .route("/api/health", get(health))
        .route("/api/todos", get(todos::list).post(todos::create))
        .route("/api/todos/:id", patch(todos::update).delete(todos::remove))
        .route("/api/weather", get(weather::current))
        .fallback(unknown_route)
        .layer(cors)
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

#[derive(Debug, Serialize)]
struct HealthResponse {
    status: &'static str,
    timestamp: DateTime<Utc>,
}

async fn health() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "OK",
        timestamp: Utc::now(),
    })
}

async fn unknown_route() -> ApiError {
    ApiError::not_found("Route not found")
}
