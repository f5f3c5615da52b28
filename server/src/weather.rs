//! OpenWeatherMap client with a canned fallback.

use crate::config::WeatherConfig;
use chrono::Utc;
use reqwest::Client;
use serde::Deserialize;
use todo_core::{Weather, WeatherProvider, WeatherQuery, WeatherReading};

/// Weather provider backed by the OpenWeatherMap current-weather API.
///
/// A missing API key or any request/decode failure degrades to a fixed
/// mock snapshot for the requested city; callers never see an error.
#[derive(Debug, Clone)]
pub struct OpenWeatherClient {
    client: Client,
    api_key: Option<String>,
    base_url: String,
    default_city: String,
}

#[derive(Debug, Deserialize)]
struct OpenWeatherResponse {
    name: String,
    sys: SysSection,
    main: MainSection,
    weather: Vec<ConditionSection>,
    wind: WindSection,
}

#[derive(Debug, Deserialize)]
struct SysSection {
    country: String,
}

#[derive(Debug, Deserialize)]
struct MainSection {
    temp: f64,
    feels_like: f64,
    humidity: u8,
}

#[derive(Debug, Deserialize)]
struct ConditionSection {
    description: String,
    icon: String,
}

#[derive(Debug, Deserialize)]
struct WindSection {
    speed: f64,
}

impl OpenWeatherClient {
    pub fn new(config: &WeatherConfig) -> Self {
        Self {
            client: Client::new(),
            api_key: config.api_key.clone(),
            base_url: config.base_url.clone(),
            default_city: config.default_city.clone(),
        }
    }

    async fn fetch(&self, city: &str, api_key: &str) -> Result<Weather, reqwest::Error> {
        let url = format!("{}/weather", self.base_url);
        let response = self
            .client
            .get(&url)
            .query(&[("q", city), ("appid", api_key), ("units", "metric")])
            .send()
            .await?
            .error_for_status()?;
        let data = response.json::<OpenWeatherResponse>().await?;
        Ok(Self::map_response(data))
    }

    fn map_response(data: OpenWeatherResponse) -> Weather {
        let condition = data.weather.into_iter().next();
        Weather {
            location: data.name,
            country: data.sys.country,
            temperature: data.main.temp.round() as i32,
            feels_like: data.main.feels_like.round() as i32,
            humidity: data.main.humidity,
            description: condition
                .as_ref()
                .map(|c| c.description.clone())
                .unwrap_or_else(|| "Unknown".to_string()),
            icon: condition.map(|c| c.icon).unwrap_or_else(|| "01d".to_string()),
            wind_speed: data.wind.speed,
            timestamp: Utc::now(),
        }
    }

    fn mock(&self, city: &str) -> Weather {
        Weather {
            location: city.to_string(),
            country: "NG".to_string(),
            temperature: 27,
            feels_like: 29,
            humidity: 65,
            description: "clear sky".to_string(),
            icon: "01d".to_string(),
            wind_speed: 3.5,
            timestamp: Utc::now(),
        }
    }
}

impl WeatherProvider for OpenWeatherClient {
    async fn current_weather(&self, query: &WeatherQuery) -> WeatherReading {
        let city = query.city.as_deref().unwrap_or(&self.default_city);

        let Some(api_key) = self.api_key.as_deref() else {
            tracing::debug!(city, "no weather API key configured, serving canned snapshot");
            return WeatherReading::Fallback(self.mock(city));
        };

        match self.fetch(city, api_key).await {
            Ok(weather) => WeatherReading::Live(weather),
            Err(e) => {
                tracing::warn!(city, error = %e, "weather request failed, serving canned snapshot");
                WeatherReading::Fallback(self.mock(city))
            }
        }
    }
}
