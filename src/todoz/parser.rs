//! # Command Parser
//!
//! Turns one line of user input into an [`Action`] and, for actions that work on
//! a single todo, a [`Target`].
//!
//! Parsing happens in two phases:
//!
//! 1. **Item actions** (`done`, `undone`, `rm`, `start`, `stop`) match as a
//!    *prefix*, so `done3`, `done 3` and `done` are all accepted. Whatever
//!    follows the keyword is trimmed; if it is made only of ASCII digits it is
//!    read as a 1-based item number.
//! 2. **Bare actions** (`ls`, `new`, `exit`, `help`, `next`, `prev`) must match
//!    the trimmed line exactly.
//!
//! Keywords are tried in the order of [`ITEM_ACTIONS`] and the first match wins.
//!
//! | input        | list len | result                             |
//! |--------------|----------|------------------------------------|
//! | `done 3`     | 5        | `Done`, `Index(2)`                 |
//! | `done 3`     | 2        | `Done`, `NotFound`                 |
//! | `rm`         | 5        | `Rm`, `Unspecified`                |
//! | `startnow`   | 5        | `Start`, `Unspecified`             |
//! | `  ls `      | any      | `List`, `Unspecified`              |
//! | `list`       | any      | no action                          |

use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Action {
    List,
    Next,
    Prev,
    New,
    Help,
    Exit,
    Done,
    Undone,
    Start,
    Stop,
    Rm,
}

/// Actions that operate on one todo, in matching order.
pub const ITEM_ACTIONS: [Action; 5] = [
    Action::Done,
    Action::Undone,
    Action::Rm,
    Action::Start,
    Action::Stop,
];

/// Actions that take no argument.
pub const BARE_ACTIONS: [Action; 6] = [
    Action::List,
    Action::New,
    Action::Exit,
    Action::Help,
    Action::Next,
    Action::Prev,
];

impl Action {
    pub fn keyword(self) -> &'static str {
        match self {
            Action::List => "ls",
            Action::Next => "next",
            Action::Prev => "prev",
            Action::New => "new",
            Action::Help => "help",
            Action::Exit => "exit",
            Action::Done => "done",
            Action::Undone => "undone",
            Action::Start => "start",
            Action::Stop => "stop",
            Action::Rm => "rm",
        }
    }
}

impl fmt::Display for Action {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.keyword())
    }
}

/// Which todo an item action refers to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Target {
    /// No number was given (or it was not a number).
    Unspecified,
    /// A number was given but there is no todo at that position.
    NotFound,
    /// Zero-based position of an existing todo.
    Index(usize),
}

impl Target {
    pub fn index(self) -> Option<usize> {
        match self {
            Target::Index(i) => Some(i),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ParsedCommand {
    pub action: Option<Action>,
    pub target: Target,
}

impl ParsedCommand {
    fn new(action: Option<Action>, target: Target) -> Self {
        Self { action, target }
    }
}

/// Parses `line` against a list currently holding `len` todos.
pub fn parse(line: &str, len: usize) -> ParsedCommand {
    let line = line.trim_start();

    for action in ITEM_ACTIONS {
        if let Some(rest) = line.strip_prefix(action.keyword()) {
            return ParsedCommand::new(Some(action), resolve_target(rest.trim(), len));
        }
    }

    let trimmed = line.trim();
    let bare = BARE_ACTIONS
        .into_iter()
        .find(|action| action.keyword() == trimmed);
    ParsedCommand::new(bare, Target::Unspecified)
}

fn resolve_target(arg: &str, len: usize) -> Target {
    if arg.is_empty() || !arg.bytes().all(|b| b.is_ascii_digit()) {
        return Target::Unspecified;
    }
    match arg.parse::<usize>() {
        Ok(number) if number >= 1 && number <= len => Target::Index(number - 1),
        _ => Target::NotFound,
    }
}
