//! Configuration for the todo server.
//!
//! Everything comes from environment variables with development-friendly
//! defaults. The resulting value is built once in `main` and handed to the
//! components that need it; there is no global config instance.
//!
//! Data directory precedence:
//! 1. TODO_DATA_DIR environment variable
//! 2. $HOME/.local/share/todo-server
//! 3. ./data (fallback for development)

use std::env;
use std::path::PathBuf;

const DEFAULT_PORT: u16 = 3001;
const DEFAULT_FRONTEND_URL: &str = "http://localhost:3000";
const DEFAULT_WEATHER_BASE_URL: &str = "https://api.openweathermap.org/data/2.5";
const DEFAULT_CITY: &str = "Kaduna";
const HOME_DATA_DIR: &str = ".local/share/todo-server";
const DEV_DATA_DIR: &str = "./data";
const TODOS_FILE: &str = "todos.json";

#[derive(Debug, Clone)]
pub struct AppConfig {
    pub server: ServerConfig,
    pub weather: WeatherConfig,
    pub data: DataConfig,
}

#[derive(Debug, Clone)]
pub struct ServerConfig {
    pub port: u16,
    /// Origin allowed by CORS; the frontend dev server by default.
    pub frontend_url: String,
}

#[derive(Debug, Clone)]
pub struct WeatherConfig {
    /// OpenWeatherMap key. Absent means every lookup serves the canned
    /// fallback snapshot.
    pub api_key: Option<String>,
    pub base_url: String,
    pub default_city: String,
}

#[derive(Debug, Clone)]
pub struct DataConfig {
    pub dir: PathBuf,
}

impl DataConfig {
    pub fn todos_file(&self) -> PathBuf {
        self.dir.join(TODOS_FILE)
    }
}

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("environment variable {0} must be a number, got {1:?}")]
    InvalidNumber(&'static str, String),
}

impl AppConfig {
    /// Load and validate configuration. Bad numeric values fail fast at
    /// startup rather than surfacing mid-request.
    pub fn from_env() -> Result<Self, ConfigError> {
        Ok(Self {
            server: ServerConfig {
                port: env_number("PORT", DEFAULT_PORT)?,
                frontend_url: env_or("FRONTEND_URL", DEFAULT_FRONTEND_URL),
            },
            weather: WeatherConfig {
                api_key: env::var("OPENWEATHERMAP_API_KEY")
                    .ok()
                    .filter(|key| !key.is_empty()),
                base_url: env_or("OPENWEATHERMAP_BASE_URL", DEFAULT_WEATHER_BASE_URL),
                default_city: env_or("WEATHER_DEFAULT_CITY", DEFAULT_CITY),
            },
            data: DataConfig { dir: data_dir() },
        })
    }
}

fn env_or(key: &str, default: &str) -> String {
    env::var(key).unwrap_or_else(|_| default.to_string())
}

fn env_number(key: &'static str, default: u16) -> Result<u16, ConfigError> {
    match env::var(key) {
        Ok(value) => value
            .parse()
            .map_err(|_| ConfigError::InvalidNumber(key, value)),
        Err(_) => Ok(default),
    }
}

fn data_dir() -> PathBuf {
    if let Ok(dir) = env::var("TODO_DATA_DIR") {
        return PathBuf::from(dir);
    }
    if let Ok(home) = env::var("HOME") {
        return PathBuf::from(home).join(HOME_DATA_DIR);
    }
    PathBuf::from(DEV_DATA_DIR)
}
