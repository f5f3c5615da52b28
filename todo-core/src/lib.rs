//! Domain core for the todo application.
//!
//! Layering, outermost to innermost: use-cases ([`TodoService`]) validate
//! input and delegate to the repository ([`TodoRepository`]), which maps the
//! todo domain onto a generic key-value [`store::DataStore`]. Two store
//! backends exist: a plain in-memory map and a JSON-file-backed map that
//! persists on every mutation. The HTTP layer lives in the `server` crate.

pub mod repository;
pub mod service;
pub mod store;
pub mod todo;
pub mod weather;

pub use repository::TodoRepository;
pub use service::{TodoError, TodoService};
pub use store::{DataStore, JsonFileStore, MemoryStore};
pub use todo::{CreateTodo, Todo, UpdateTodo};
pub use weather::{Weather, WeatherProvider, WeatherQuery, WeatherReading};
