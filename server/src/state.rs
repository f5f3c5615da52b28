//! Shared application state for axum handlers.

use std::sync::{Arc, Mutex};
use todo_core::TodoService;

/// State cloned into every handler.
///
/// The todo service sits behind a `std::sync::Mutex`: every operation is a
/// quick synchronous map access (plus, for the file backend, a synchronous
/// write), and the lock is never held across an await point. `W` is the
/// weather provider, statically dispatched.
pub struct AppState<W> {
    pub todos: Arc<Mutex<TodoService>>,
    pub weather: Arc<W>,
}

impl<W> AppState<W> {
    pub fn new(todos: TodoService, weather: W) -> Self {
        Self {
            todos: Arc::new(Mutex::new(todos)),
            weather: Arc::new(weather),
        }
    }
}

// Manual impl so `W` itself does not need to be `Clone`.
impl<W> Clone for AppState<W> {
    fn clone(&self) -> Self {
        Self {
            todos: Arc::clone(&self.todos),
            weather: Arc::clone(&self.weather),
        }
    }
}
