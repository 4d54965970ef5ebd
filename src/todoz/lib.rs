//! # Todoz Architecture
//!
//! Todoz keeps a flat list of short todos in one plain-text file and edits it
//! through a small line-oriented command language (`ls`, `done 3`, `rm 2`, ...).
//!
//! The library holds everything except the terminal: the binary is a thin REPL
//! that reads lines, hands them to the API, and prints what comes back.
//!
//! ## The Layers
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │  CLI Layer (cli/, wired by main.rs)                         │
//! │  - Reads input lines, prompts, prints results               │
//! │  - The ONLY place that knows about stdin/stdout/exit codes  │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  API Layer (api.rs)                                         │
//! │  - Owns the store and the in-memory list                    │
//! │  - Parses input against the current list length             │
//! │  - Threads the page state in and out of listings            │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Command Layer (commands/*.rs, codec.rs, pagination.rs)     │
//! │  - Status transitions, listing, creation                    │
//! │  - Returns `CmdResult` values, never prints                 │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Storage Layer (store/)                                     │
//! │  - DataStore trait: load once, rewrite after each change    │
//! │  - FileStore (production), InMemoryStore (testing)          │
//! └─────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Identity
//!
//! A todo has no id. Its 1-based position in the list is the number users type.
//! Removing a todo only marks it during the session, so numbers stay stable
//! until the next start, when removed todos are gone from the file.
//!
//! ## Module Overview
//!
//! - [`api`]: The API facade, entry point for all operations
//! - [`commands`]: Business logic for each command
//! - [`codec`]: Status transitions and the on-disk line format
//! - [`parser`]: Input line to action and target
//! - [`pagination`]: Page state machine and page slicing
//! - [`store`]: Storage abstraction and implementations
//! - [`model`]: Core data types (`Todo`, `Status`, `Marker`)
//! - [`config`]: Configuration management
//! - [`error`]: Error types

pub mod api;
pub mod codec;
pub mod commands;
pub mod config;
pub mod error;
pub mod model;
pub mod pagination;
pub mod parser;
pub mod store;
