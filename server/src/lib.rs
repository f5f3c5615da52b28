//! REST backend for the todo application.
//!
//! Thin axum shell over `todo-core`: handlers parse requests, call the
//! use-case layer, and wrap results in the `{success, ...}` envelope the
//! frontend expects. The weather endpoint proxies OpenWeatherMap with a
//! canned fallback so the widget never breaks the page.

pub mod config;
pub mod error;
pub mod routes;
pub mod state;
pub mod weather;

pub use error::ApiError;
pub use state::AppState;
