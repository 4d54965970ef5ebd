//! # Storage Layer
//!
//! The [`DataStore`] trait is the whole persistence contract: load every todo
//! once at startup, and rewrite the full list after each mutation.
//!
//! ## Implementations
//!
//! - [`fs::FileStore`]: Production storage, one plain-text file
//!   - One todo per line, status as a leading marker (see [`crate::codec`])
//!   - Removed todos are dropped on save, so a fresh load never sees them
//!
//! - [`memory::InMemoryStore`]: In-memory storage for testing
//!   - No persistence
//!   - Can be told to fail saves, to exercise error reporting
//!
//! There is no diffing or appending: every save is a full rewrite, and no file
//! handle outlives a single `load` or `save` call.

use crate::error::Result;
use crate::model::Todo;

pub mod fs;
pub mod memory;

/// Abstract interface for todo storage.
pub trait DataStore {
    /// Load every stored todo, in order. A missing backing store is an empty list.
    fn load(&self) -> Result<Vec<Todo>>;

    /// Replace the stored list with every todo not marked removed.
    fn save(&mut self, todos: &[Todo]) -> Result<()>;
}
