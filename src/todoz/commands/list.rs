use crate::commands::{CmdMessage, CmdResult, DisplayTodo};
use crate::model::Todo;
use crate::pagination::{footer_hint, page_count, page_rows, turn, PageMove, PageState};
use tracing::debug;

pub const EMPTY: &str = "No todos. Let's add some. Type \"new\".";

/// Moves to another page and lists it. A rejected move keeps `state`.
pub fn run(
    todos: &[Todo],
    state: PageState,
    mv: PageMove,
    page_size: usize,
) -> (PageState, CmdResult) {
    let count = page_count(todos.len(), page_size);
    let page = match turn(state, mv, count) {
        Ok(PageState::OnPage(page)) => page,
        Ok(PageState::Unset) => return (state, CmdResult::default()),
        Err(rejection) => {
            debug!(?state, ?mv, ?rejection, "page move rejected");
            return (
                state,
                CmdResult::default().with_message(CmdMessage::warning(rejection.to_string())),
            );
        }
    };

    let listed: Vec<DisplayTodo> = page_rows(todos, page, page_size)
        .into_iter()
        .map(|(number, todo)| DisplayTodo {
            number,
            todo: todo.clone(),
        })
        .collect();

    let mut result = CmdResult::default().with_listed_todos(listed);
    if todos.iter().all(|t| t.removed) {
        result.add_message(CmdMessage::info(EMPTY));
    } else {
        result.add_message(CmdMessage::info(format!("Page {} of {}", page, count)));
        result.add_message(CmdMessage::info(footer_hint(page, count)));
    }

    debug!(page, count, "page listed");
    (PageState::OnPage(page), result)
}
