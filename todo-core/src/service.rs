use crate::repository::TodoRepository;
use crate::todo::{CreateTodo, Todo, UpdateTodo};

/// Validation failures from the use-case layer.
///
/// Not-found is deliberately not a variant: `update` reports an unknown
/// id as `Ok(None)` and `delete` as `Ok(false)`, so callers branch on the
/// result instead of catching an error.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum TodoError {
    #[error("todo text must not be empty")]
    EmptyText,
    #[error("todo id must not be empty")]
    EmptyId,
}

/// Use-case layer: one method per operation, each a stateless
/// validate-then-delegate step over the repository.
pub struct TodoService {
    repository: TodoRepository,
}

impl TodoService {
    pub fn new(repository: TodoRepository) -> Self {
        Self { repository }
    }

    /// Return all todos unchanged.
    pub fn list(&self) -> Vec<Todo> {
        self.repository.find_all()
    }

    /// Create a todo from user-supplied text. The text is trimmed and
    /// must be non-empty afterwards.
    pub fn create(&mut self, text: &str) -> Result<Todo, TodoError> {
        let text = text.trim();
        if text.is_empty() {
            return Err(TodoError::EmptyText);
        }
        Ok(self.repository.create(CreateTodo {
            text: text.to_string(),
        }))
    }

    /// Apply sparse changes to an existing todo.
    ///
    /// A `text` field that is present but trims to empty is a validation
    /// error; an absent `text` simply leaves the text untouched. An
    /// unknown id yields `Ok(None)`.
    pub fn update(&mut self, id: &str, changes: UpdateTodo) -> Result<Option<Todo>, TodoError> {
        if id.is_empty() {
            return Err(TodoError::EmptyId);
        }
        if self.repository.find_by_id(id).is_none() {
            return Ok(None);
        }

        let text = match changes.text {
            Some(text) => {
                let text = text.trim();
                if text.is_empty() {
                    return Err(TodoError::EmptyText);
                }
                Some(text.to_string())
            }
            None => None,
        };

        Ok(self.repository.update(
            id,
            UpdateTodo {
                text,
                completed: changes.completed,
            },
        ))
    }

    /// Delete a todo. Returns whether a record was removed.
    pub fn delete(&mut self, id: &str) -> Result<bool, TodoError> {
        if id.is_empty() {
            return Err(TodoError::EmptyId);
        }
        Ok(self.repository.delete(id))
    }

    pub fn count(&self) -> usize {
        self.repository.count()
    }
}
