use crate::codec::{render, set_status, unset_status};
use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;
use crate::model::{Marker, Todo};
use crate::parser::Target;
use crate::store::DataStore;
use tracing::debug;

pub const NO_SUCH_ITEM: &str = "No item with such number";

struct Transition {
    marker: Marker,
    set: bool,
    success: &'static str,
    noop: &'static str,
}

pub fn done<S: DataStore>(todos: &mut [Todo], store: &mut S, target: Target) -> Result<CmdResult> {
    apply(
        todos,
        store,
        target,
        Transition {
            marker: Marker::Done,
            set: true,
            success: "Marked as done",
            noop: "Already marked as done",
        },
    )
}

pub fn undone<S: DataStore>(
    todos: &mut [Todo],
    store: &mut S,
    target: Target,
) -> Result<CmdResult> {
    apply(
        todos,
        store,
        target,
        Transition {
            marker: Marker::Done,
            set: false,
            success: "Undone",
            noop: "Not done, can't undone",
        },
    )
}

pub fn start<S: DataStore>(todos: &mut [Todo], store: &mut S, target: Target) -> Result<CmdResult> {
    apply(
        todos,
        store,
        target,
        Transition {
            marker: Marker::Started,
            set: true,
            success: "Marked as started",
            noop: "Already started",
        },
    )
}

pub fn stop<S: DataStore>(todos: &mut [Todo], store: &mut S, target: Target) -> Result<CmdResult> {
    apply(
        todos,
        store,
        target,
        Transition {
            marker: Marker::Started,
            set: false,
            success: "Stopped",
            noop: "Not started, can't stop",
        },
    )
}

pub fn remove<S: DataStore>(
    todos: &mut [Todo],
    store: &mut S,
    target: Target,
) -> Result<CmdResult> {
    apply(
        todos,
        store,
        target,
        Transition {
            marker: Marker::Removed,
            set: true,
            success: "Removed",
            noop: "Already removed",
        },
    )
}

fn apply<S: DataStore>(
    todos: &mut [Todo],
    store: &mut S,
    target: Target,
    transition: Transition,
) -> Result<CmdResult> {
    let Some(index) = target.index().filter(|&i| i < todos.len()) else {
        return Ok(CmdResult::default().with_message(CmdMessage::warning(NO_SUCH_ITEM)));
    };

    let current = &todos[index];
    let updated = if transition.set {
        set_status(transition.marker, current)
    } else {
        unset_status(transition.marker, current)
    };

    let Some(updated) = updated else {
        return Ok(CmdResult::default().with_message(CmdMessage::info(transition.noop)));
    };

    debug!(index, marker = ?transition.marker, set = transition.set, "todo updated");
    let shown = render(&updated, Some(index + 1));
    todos[index] = updated;
    store.save(todos)?;

    Ok(CmdResult::default().with_message(CmdMessage::success(format!(
        "{}: {}",
        transition.success, shown
    ))))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::commands::MessageLevel;
    use crate::error::TodozError;
    use crate::model::Status;
    use crate::store::memory::InMemoryStore;

    fn list() -> Vec<Todo> {
        vec![Todo::new("a"), Todo::new("b")]
    }

    #[test]
    fn done_marks_and_saves() {
        let mut todos = list();
        let mut store = InMemoryStore::new();

        let result = done(&mut todos, &mut store, Target::Index(1)).unwrap();

        assert_eq!(todos[1].status, Status::Done);
        assert_eq!(store.save_count(), 1);
        assert_eq!(store.stored()[1].status, Status::Done);
        assert_eq!(result.messages[0].level, MessageLevel::Success);
        assert_eq!(result.messages[0].content, "Marked as done: (2) ✓ b");
    }

    #[test]
    fn done_twice_is_noop() {
        let mut todos = list();
        let mut store = InMemoryStore::new();
        done(&mut todos, &mut store, Target::Index(0)).unwrap();

        let result = done(&mut todos, &mut store, Target::Index(0)).unwrap();

        assert_eq!(store.save_count(), 1);
        assert_eq!(result.messages[0].level, MessageLevel::Info);
        assert_eq!(result.messages[0].content, "Already marked as done");
    }

    #[test]
    fn missing_or_unspecified_target_changes_nothing() {
        for target in [Target::NotFound, Target::Unspecified, Target::Index(7)] {
            let mut todos = list();
            let mut store = InMemoryStore::new();

            let result = remove(&mut todos, &mut store, target).unwrap();

            assert_eq!(todos, list());
            assert_eq!(store.save_count(), 0);
            assert_eq!(result.messages[0].content, NO_SUCH_ITEM);
        }
    }

    #[test]
    fn start_replaces_done_and_stop_clears_it() {
        let mut todos = vec![Todo::new("a").with_status(Status::Done)];
        let mut store = InMemoryStore::new();

        let result = start(&mut todos, &mut store, Target::Index(0)).unwrap();
        assert_eq!(todos[0].status, Status::Started);
        assert_eq!(result.messages[0].content, "Marked as started: (1) → a");

        let result = stop(&mut todos, &mut store, Target::Index(0)).unwrap();
        assert_eq!(todos[0].status, Status::None);
        assert_eq!(result.messages[0].content, "Stopped: (1) a");

        let result = stop(&mut todos, &mut store, Target::Index(0)).unwrap();
        assert_eq!(result.messages[0].content, "Not started, can't stop");
    }

    #[test]
    fn undone_requires_done() {
        let mut todos = list();
        let mut store = InMemoryStore::new();

        let result = undone(&mut todos, &mut store, Target::Index(0)).unwrap();
        assert_eq!(result.messages[0].content, "Not done, can't undone");

        done(&mut todos, &mut store, Target::Index(0)).unwrap();
        let result = undone(&mut todos, &mut store, Target::Index(0)).unwrap();
        assert_eq!(result.messages[0].content, "Undone: (1) a");
        assert_eq!(todos[0], Todo::new("a"));
    }

    #[test]
    fn remove_keeps_position_in_memory_but_drops_from_store() {
        let mut todos = list();
        let mut store = InMemoryStore::new();

        let result = remove(&mut todos, &mut store, Target::Index(0)).unwrap();

        assert_eq!(todos.len(), 2);
        assert!(todos[0].removed);
        assert_eq!(store.stored(), &[Todo::new("b")]);
        assert_eq!(result.messages[0].content, "Removed: (1) a");

        let result = remove(&mut todos, &mut store, Target::Index(0)).unwrap();
        assert_eq!(result.messages[0].content, "Already removed");
    }

    #[test]
    fn removal_message_numbers_the_todo_without_glyph() {
        let mut todos = vec![Todo::new("a"), Todo::new("b").with_status(Status::Done)];
        let mut store = InMemoryStore::new();

        let result = remove(&mut todos, &mut store, Target::Index(1)).unwrap();

        assert_eq!(result.messages[0].content, "Removed: (2) b");
    }

    #[test]
    fn save_failure_surfaces_after_mutation() {
        let mut todos = list();
        let mut store = InMemoryStore::new().failing_saves();

        let result = done(&mut todos, &mut store, Target::Index(0));

        assert!(matches!(result, Err(TodozError::Io(_))));
        assert_eq!(todos[0].status, Status::Done);
    }
}
