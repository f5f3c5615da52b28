//! Weather domain types and the provider contract.
//!
//! Weather is a best-effort enrichment for the frontend widget, never a
//! hard dependency: providers must answer with a reading even when the
//! upstream API is unreachable or unconfigured.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::future::Future;

/// A weather snapshot for one location.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Weather {
    pub location: String,
    pub country: String,
    pub temperature: i32,
    pub feels_like: i32,
    pub humidity: u8,
    pub description: String,
    pub icon: String,
    pub wind_speed: f64,
    pub timestamp: DateTime<Utc>,
}

/// Lookup parameters. Coordinates are accepted for interface completeness
/// but providers may resolve by city alone.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct WeatherQuery {
    pub city: Option<String>,
    pub lat: Option<f64>,
    pub lon: Option<f64>,
}

/// Outcome of a weather lookup.
///
/// `Fallback` carries the canned snapshot served when the upstream
/// provider fails or no credentials are configured. Keeping the two paths
/// distinct lets tests assert which one was taken; the HTTP layer flattens
/// both into the same response shape.
#[derive(Debug, Clone, PartialEq)]
pub enum WeatherReading {
    Live(Weather),
    Fallback(Weather),
}

impl WeatherReading {
    pub fn snapshot(&self) -> &Weather {
        match self {
            Self::Live(weather) | Self::Fallback(weather) => weather,
        }
    }

    pub fn into_snapshot(self) -> Weather {
        match self {
            Self::Live(weather) | Self::Fallback(weather) => weather,
        }
    }

    pub fn is_fallback(&self) -> bool {
        matches!(self, Self::Fallback(_))
    }
}

/// Source of weather snapshots.
///
/// The method returns `impl Future + Send` rather than using `async fn`
/// in the trait so the future is guaranteed `Send` for use inside
/// multi-threaded handlers.
pub trait WeatherProvider: Send + Sync {
    /// Look up current weather. Infallible by contract; implementations
    /// degrade to a [`WeatherReading::Fallback`] instead of erroring.
    fn current_weather(
        &self,
        query: &WeatherQuery,
    ) -> impl Future<Output = WeatherReading> + Send;
}
