use crate::error::{Result, TodozError};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

const CONFIG_FILENAME: &str = "todoz.json";
const DEFAULT_FILE: &str = "todos.txt";
const DEFAULT_PAGE_SIZE: usize = 5;

/// Configuration for todoz, optionally stored in todoz.json
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct TodozConfig {
    /// Path of the todos file
    #[serde(default = "default_file")]
    pub file: PathBuf,

    /// Number of todos per page
    #[serde(default = "default_page_size")]
    pub page_size: usize,
}

fn default_file() -> PathBuf {
    PathBuf::from(DEFAULT_FILE)
}

fn default_page_size() -> usize {
    DEFAULT_PAGE_SIZE
}

impl Default for TodozConfig {
    fn default() -> Self {
        Self {
            file: default_file(),
            page_size: DEFAULT_PAGE_SIZE,
        }
    }
}

impl TodozConfig {
    /// Load config from the given directory, or return defaults if not found
    pub fn load<P: AsRef<Path>>(config_dir: P) -> Result<Self> {
        let config_path = config_dir.as_ref().join(CONFIG_FILENAME);

        if !config_path.exists() {
            return Ok(Self::default());
        }

        let content = fs::read_to_string(&config_path).map_err(TodozError::Io)?;
        let config: TodozConfig =
            serde_json::from_str(&content).map_err(TodozError::Serialization)?;
        Ok(config)
    }

    /// Apply command-line overrides on top of the loaded values
    pub fn with_overrides(mut self, file: Option<PathBuf>, page_size: Option<usize>) -> Self {
        if let Some(file) = file {
            self.file = file;
        }
        if let Some(page_size) = page_size {
            self.page_size = page_size;
        }
        self
    }

    pub fn validate(&self) -> Result<()> {
        if self.page_size == 0 {
            return Err(TodozError::Config("page_size must be at least 1".into()));
        }
        if self.file.as_os_str().is_empty() {
            return Err(TodozError::Config("file must not be empty".into()));
        }
        Ok(())
    }
}
