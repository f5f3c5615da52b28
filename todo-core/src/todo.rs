use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A single task record.
///
/// `id` and `created_at` are fixed at creation; `updated_at` is refreshed on
/// every successful mutation. Timestamps serialize as RFC 3339 strings, both
/// on the wire and in the file-backed store.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Todo {
    pub id: String,
    pub text: String,
    pub completed: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Draft for a new todo. Text emptiness is checked at the use-case
/// boundary, not here.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateTodo {
    pub text: String,
}

/// Sparse changes for an existing todo. `None` means "leave the field
/// alone"; this presence distinction matters for the update validation.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct UpdateTodo {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub text: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub completed: Option<bool>,
}

impl Todo {
    /// Stamp a draft with a fresh id and creation timestamps.
    pub fn new(draft: CreateTodo) -> Self {
        let now = Utc::now();
        Self {
            id: Uuid::new_v4().to_string(),
            text: draft.text,
            completed: false,
            created_at: now,
            updated_at: now,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_todo_defaults() {
        let todo = Todo::new(CreateTodo {
            text: "walk the dog".to_string(),
        });
        assert!(!todo.id.is_empty());
        assert_eq!(todo.text, "walk the dog");
        assert!(!todo.completed);
        assert_eq!(todo.created_at, todo.updated_at);
    }

    #[test]
    fn test_new_todos_get_distinct_ids() {
        let a = Todo::new(CreateTodo {
            text: "a".to_string(),
        });
        let b = Todo::new(CreateTodo {
            text: "b".to_string(),
        });
        assert_ne!(a.id, b.id);
    }

    #[test]
    fn test_timestamps_serialize_as_rfc3339() {
        let todo = Todo::new(CreateTodo {
            text: "serialize me".to_string(),
        });
        let json = serde_json::to_value(&todo).unwrap();
        let created = json["createdAt"].as_str().unwrap();
        assert!(created.parse::<DateTime<Utc>>().is_ok());
    }
}
