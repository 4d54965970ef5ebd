use super::DataStore;
use crate::codec::{decode_line, encode_line};
use crate::error::{Result, TodozError};
use crate::model::Todo;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::debug;

pub struct FileStore {
    path: PathBuf,
}

impl FileStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl DataStore for FileStore {
    fn load(&self) -> Result<Vec<Todo>> {
        if !self.path.exists() {
            debug!(path = %self.path.display(), "no todos file yet");
            return Ok(Vec::new());
        }

        let content = fs::read_to_string(&self.path).map_err(TodozError::Io)?;
        let todos: Vec<Todo> = content.lines().map(decode_line).collect();
        debug!(path = %self.path.display(), count = todos.len(), "loaded todos");
        Ok(todos)
    }

    fn save(&mut self, todos: &[Todo]) -> Result<()> {
        let mut content = String::new();
        for todo in todos.iter().filter(|t| !t.removed) {
            content.push_str(&encode_line(todo));
            content.push('\n');
        }
        fs::write(&self.path, content).map_err(TodozError::Io)?;
        debug!(path = %self.path.display(), "saved todos");
        Ok(())
    }
}
