use super::DataStore;
use crate::error::{Result, TodozError};
use crate::model::Todo;
use std::io;

/// In-memory storage for testing and development.
/// Does NOT persist data.
#[derive(Default)]
pub struct InMemoryStore {
    todos: Vec<Todo>,
    saves: usize,
    fail_saves: bool,
}

impl InMemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_todos(todos: Vec<Todo>) -> Self {
        Self {
            todos,
            ..Self::default()
        }
    }

    /// Make every subsequent save fail with an IO error.
    pub fn failing_saves(mut self) -> Self {
        self.fail_saves = true;
        self
    }

    /// What the last successful save wrote.
    pub fn stored(&self) -> &[Todo] {
        &self.todos
    }

    pub fn save_count(&self) -> usize {
        self.saves
    }
}

impl DataStore for InMemoryStore {
    fn load(&self) -> Result<Vec<Todo>> {
        Ok(self.todos.clone())
    }

    fn save(&mut self, todos: &[Todo]) -> Result<()> {
        if self.fail_saves {
            return Err(TodozError::Io(io::Error::new(
                io::ErrorKind::PermissionDenied,
                "store is read-only",
            )));
        }
        self.todos = todos.iter().filter(|t| !t.removed).cloned().collect();
        self.saves += 1;
        Ok(())
    }
}
