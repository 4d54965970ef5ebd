use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;
use crate::model::Todo;
use crate::store::DataStore;
use tracing::debug;

pub fn run<S: DataStore>(todos: &mut Vec<Todo>, store: &mut S, text: &str) -> Result<CmdResult> {
    let text = text.strip_suffix('\n').unwrap_or(text);
    let text = text.strip_suffix('\r').unwrap_or(text);

    todos.push(Todo::new(text));
    debug!(position = todos.len(), "todo appended");
    store.save(todos)?;

    Ok(CmdResult::default().with_message(CmdMessage::success("Your todo is created")))
}
