//! Handler for the `/api/weather` route.

use crate::state::AppState;
use axum::{
    extract::{Query, State},
    Json,
};
use serde::Serialize;
use todo_core::{Weather, WeatherProvider, WeatherQuery};

#[derive(Debug, Serialize)]
pub struct WeatherResponse {
    success: bool,
    data: Weather,
}

/// Providers are infallible by contract, so this handler cannot 500 under
/// normal operation; fallback readings come back as plain success.
pub async fn current<W>(
    State(state): State<AppState<W>>,
    Query(query): Query<WeatherQuery>,
) -> Json<WeatherResponse>
where
    W: WeatherProvider,
{
    let reading = state.weather.current_weather(&query).await;
    Json(WeatherResponse {
        success: true,
        data: reading.into_snapshot(),
    })
}
