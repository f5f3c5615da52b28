use crate::store::DataStore;
use crate::todo::{CreateTodo, Todo, UpdateTodo};
use chrono::Utc;

const SEED_TEXTS: [&str; 5] = [
    "Personal Work No. 1",
    "Personal Work No. 2",
    "Personal Work No. 3",
    "Personal Work No. 4",
    "Personal Work No. 5",
];

/// Todo-specific façade over a generic [`DataStore`].
///
/// The backend is injected at construction time; swapping the in-memory
/// store for the file-backed one changes nothing above this layer.
pub struct TodoRepository {
    store: Box<dyn DataStore<Todo>>,
}

impl TodoRepository {
    /// Wrap a store. A store that is observed empty on first construction
    /// is seeded with five demonstration todos (indices 0 and 3 completed).
    pub fn new(store: Box<dyn DataStore<Todo>>) -> Self {
        let mut repo = Self { store };
        if repo.store.count() == 0 {
            repo.seed();
        }
        repo
    }

    fn seed(&mut self) {
        for (index, text) in SEED_TEXTS.iter().enumerate() {
            let mut todo = Todo::new(CreateTodo {
                text: (*text).to_string(),
            });
            if index == 0 || index == 3 {
                todo.completed = true;
            }
            let id = todo.id.clone();
            self.store.set(&id, todo);
        }
        tracing::info!(count = SEED_TEXTS.len(), "seeded demonstration todos");
    }

    pub fn find_all(&self) -> Vec<Todo> {
        self.store.get_all()
    }

    pub fn find_by_id(&self, id: &str) -> Option<Todo> {
        self.store.get(id)
    }

    /// Build a new todo from the draft and persist it.
    pub fn create(&mut self, draft: CreateTodo) -> Todo {
        let todo = Todo::new(draft);
        let id = todo.id.clone();
        self.store.set(&id, todo.clone());
        todo
    }

    /// Merge the supplied fields onto an existing record and refresh
    /// `updated_at`. `id` and `created_at` are not reachable from here.
    /// Returns `None` when no record exists for `id`.
    pub fn update(&mut self, id: &str, changes: UpdateTodo) -> Option<Todo> {
        let mut todo = self.store.get(id)?;
        if let Some(text) = changes.text {
            todo.text = text;
        }
        if let Some(completed) = changes.completed {
            todo.completed = completed;
        }
        todo.updated_at = Utc::now();
        self.store.set(id, todo.clone());
        Some(todo)
    }

    /// Remove a record permanently. Returns whether anything was removed.
    pub fn delete(&mut self, id: &str) -> bool {
        self.store.delete(id)
    }

    pub fn count(&self) -> usize {
        self.store.count()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::MemoryStore;

    fn repo() -> TodoRepository {
        TodoRepository::new(Box::new(MemoryStore::new()))
    }

    #[test]
    fn test_seeds_five_todos_on_empty_store() {
        let repo = repo();
        let todos = repo.find_all();
        assert_eq!(todos.len(), 5);

        let mut completed: Vec<&str> = todos
            .iter()
            .filter(|t| t.completed)
            .map(|t| t.text.as_str())
            .collect();
        completed.sort_unstable();
        assert_eq!(completed, ["Personal Work No. 1", "Personal Work No. 4"]);
    }

    #[test]
    fn test_does_not_reseed_populated_store() {
        let mut store = MemoryStore::new();
        let todo = Todo::new(CreateTodo {
            text: "already here".to_string(),
        });
        store.set(&todo.id.clone(), todo);

        let repo = TodoRepository::new(Box::new(store));
        assert_eq!(repo.count(), 1);
    }

    #[test]
    fn test_create_and_find() {
        let mut repo = repo();
        let todo = repo.create(CreateTodo {
            text: "find me".to_string(),
        });
        assert_eq!(repo.find_by_id(&todo.id), Some(todo));
    }

    #[test]
    fn test_update_merges_only_supplied_fields() {
        let mut repo = repo();
        let todo = repo.create(CreateTodo {
            text: "before".to_string(),
        });

        let updated = repo
            .update(
                &todo.id,
                UpdateTodo {
                    text: Some("after".to_string()),
                    completed: None,
                },
            )
            .unwrap();

        assert_eq!(updated.id, todo.id);
        assert_eq!(updated.text, "after");
        assert_eq!(updated.completed, todo.completed);
        assert_eq!(updated.created_at, todo.created_at);
        assert!(updated.updated_at >= todo.updated_at);
    }

    #[test]
    fn test_update_unknown_id_is_none() {
        let mut repo = repo();
        let before = repo.count();
        let result = repo.update(
            "unknown-id",
            UpdateTodo {
                text: Some("x".to_string()),
                completed: None,
            },
        );
        assert!(result.is_none());
        assert_eq!(repo.count(), before);
    }

    #[test]
    fn test_delete_twice() {
        let mut repo = repo();
        let todo = repo.create(CreateTodo {
            text: "doomed".to_string(),
        });
        assert!(repo.delete(&todo.id));
        assert_eq!(repo.find_by_id(&todo.id), None);
        assert!(!repo.delete(&todo.id));
    }
}
