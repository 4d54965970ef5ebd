//! # API Facade
//!
//! [`TodozApi`] is the single entry point a UI uses. It owns the store and the
//! in-memory list, and forwards each command to its module in `commands/`.
//!
//! The in-memory list is authoritative for the session. The store is written
//! through after every successful mutation; if that write fails, the error is
//! returned but the list keeps the change.
//!
//! The current page is *not* kept here. [`TodozApi::list`] takes the caller's
//! [`PageState`] and returns the next one, so the API carries no navigation
//! state of its own.

use crate::commands::{self, CmdResult};
use crate::error::{Result, TodozError};
use crate::model::Todo;
use crate::pagination::{PageMove, PageState};
use crate::parser::{self, Action, ParsedCommand, Target};
use crate::store::DataStore;

pub struct TodozApi<S: DataStore> {
    store: S,
    todos: Vec<Todo>,
    page_size: usize,
}

impl<S: DataStore> TodozApi<S> {
    /// Loads the current list from `store`.
    pub fn open(store: S, page_size: usize) -> Result<Self> {
        if page_size == 0 {
            return Err(TodozError::Config("page size must be at least 1".into()));
        }
        let todos = store.load()?;
        Ok(Self {
            store,
            todos,
            page_size,
        })
    }

    pub fn todos(&self) -> &[Todo] {
        &self.todos
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    /// Parses a line of input against the current list.
    pub fn parse(&self, line: &str) -> ParsedCommand {
        parser::parse(line, self.todos.len())
    }

    /// Runs an item action. Returns `None` for actions that do not target an item.
    pub fn apply(&mut self, action: Action, target: Target) -> Option<Result<CmdResult>> {
        let result = match action {
            Action::Done => self.done(target),
            Action::Undone => self.undone(target),
            Action::Start => self.start(target),
            Action::Stop => self.stop(target),
            Action::Rm => self.remove(target),
            _ => return None,
        };
        Some(result)
    }

    pub fn done(&mut self, target: Target) -> Result<CmdResult> {
        commands::status::done(&mut self.todos, &mut self.store, target)
    }

    pub fn undone(&mut self, target: Target) -> Result<CmdResult> {
        commands::status::undone(&mut self.todos, &mut self.store, target)
    }

    pub fn start(&mut self, target: Target) -> Result<CmdResult> {
        commands::status::start(&mut self.todos, &mut self.store, target)
    }

    pub fn stop(&mut self, target: Target) -> Result<CmdResult> {
        commands::status::stop(&mut self.todos, &mut self.store, target)
    }

    pub fn remove(&mut self, target: Target) -> Result<CmdResult> {
        commands::status::remove(&mut self.todos, &mut self.store, target)
    }

    pub fn create(&mut self, text: &str) -> Result<CmdResult> {
        commands::create::run(&mut self.todos, &mut self.store, text)
    }

    pub fn list(&self, state: PageState, mv: PageMove) -> (PageState, CmdResult) {
        commands::list::run(&self.todos, state, mv, self.page_size)
    }

    pub fn help(&self) -> CmdResult {
        commands::help::run()
    }
}
