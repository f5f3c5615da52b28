//! Handlers for the `/api/todos` routes.

use crate::error::ApiError;
use crate::state::AppState;
use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};
use serde::{Deserialize, Serialize};
use std::sync::MutexGuard;
use todo_core::{Todo, TodoService, UpdateTodo};

#[derive(Debug, Serialize)]
pub struct TodoListResponse {
    success: bool,
    data: Vec<Todo>,
    count: usize,
}

#[derive(Debug, Serialize)]
pub struct TodoResponse {
    success: bool,
    data: Todo,
}

#[derive(Debug, Serialize)]
pub struct DeletedResponse {
    success: bool,
    message: &'static str,
}

#[derive(Debug, Deserialize)]
pub struct CreateTodoRequest {
    text: Option<String>,
}

fn service<W>(state: &AppState<W>) -> Result<MutexGuard<'_, TodoService>, ApiError> {
    state
        .todos
        .lock()
        .map_err(|_| ApiError::internal("todo store unavailable"))
}

pub async fn list<W>(State(state): State<AppState<W>>) -> Result<Json<TodoListResponse>, ApiError> {
    let todos = service(&state)?.list();
    Ok(Json(TodoListResponse {
        success: true,
        count: todos.len(),
        data: todos,
    }))
}

pub async fn create<W>(
    State(state): State<AppState<W>>,
    Json(body): Json<CreateTodoRequest>,
) -> Result<(StatusCode, Json<TodoResponse>), ApiError> {
    let text = body
        .text
        .ok_or_else(|| ApiError::bad_request("Text is required"))?;
    let todo = service(&state)?.create(&text)?;
    tracing::debug!(id = %todo.id, "created todo");
    Ok((
        StatusCode::CREATED,
        Json(TodoResponse {
            success: true,
            data: todo,
        }),
    ))
}

pub async fn update<W>(
    State(state): State<AppState<W>>,
    Path(id): Path<String>,
    Json(changes): Json<UpdateTodo>,
) -> Result<Json<TodoResponse>, ApiError> {
    match service(&state)?.update(&id, changes)? {
        Some(todo) => Ok(Json(TodoResponse {
            success: true,
            data: todo,
        })),
        None => Err(ApiError::not_found("Todo not found")),
    }
}

pub async fn remove<W>(
    State(state): State<AppState<W>>,
    Path(id): Path<String>,
) -> Result<Json<DeletedResponse>, ApiError> {
    if service(&state)?.delete(&id)? {
        tracing::debug!(%id, "deleted todo");
        Ok(Json(DeletedResponse {
            success: true,
            message: "Todo deleted successfully",
        }))
    } else {
        Err(ApiError::not_found("Todo not found"))
    }
}
