//! # Item Codec
//!
//! Status transitions on a [`Todo`] and the line format used to persist it.
//!
//! In memory a todo carries a closed [`Status`] plus an independent `removed`
//! flag. Only at the file boundary does this become text: a line is the todo's
//! text, optionally prefixed by one status marker, with the removal marker
//! layered outside of that:
//!
//! ```text
//! buy milk
//! ::done::buy milk
//! ::started::write report
//! ::rm::::done::old thing      (never written by the store, see store::fs)
//! ```
//!
//! Since the store drops removed todos before writing, [`decode_line`] does not
//! read `::rm::` back: a line starting with it is ordinary text. There is no
//! escaping, so text that itself begins with `::done::` or `::started::`
//! comes back as a marked todo.
//!
//! Transitions return `None` when the todo is already in the requested state,
//! which callers report as a no-op rather than an error.

use crate::model::{Marker, Status, Todo};

fn status_of(marker: Marker) -> Option<Status> {
    match marker {
        Marker::Done => Some(Status::Done),
        Marker::Started => Some(Status::Started),
        Marker::Removed => None,
    }
}

fn marker_of(status: Status) -> Option<Marker> {
    match status {
        Status::None => None,
        Status::Done => Some(Marker::Done),
        Status::Started => Some(Marker::Started),
    }
}

pub fn is_status(marker: Marker, todo: &Todo) -> bool {
    match status_of(marker) {
        Some(status) => todo.status == status,
        None => todo.removed,
    }
}

/// Applies `marker`, replacing a competing status if there is one.
pub fn set_status(marker: Marker, todo: &Todo) -> Option<Todo> {
    if is_status(marker, todo) {
        return None;
    }
    let mut updated = todo.clone();
    match status_of(marker) {
        Some(status) => updated.status = status,
        None => updated.removed = true,
    }
    Some(updated)
}

pub fn unset_status(marker: Marker, todo: &Todo) -> Option<Todo> {
    if !is_status(marker, todo) {
        return None;
    }
    let mut updated = todo.clone();
    match status_of(marker) {
        Some(_) => updated.status = Status::None,
        None => updated.removed = false,
    }
    Some(updated)
}

/// Display form of a todo: status glyph, and `(n) ` when a display number is given.
pub fn render(todo: &Todo, display_index: Option<usize>) -> String {
    let glyph = if todo.removed {
        None
    } else {
        marker_of(todo.status).and_then(Marker::glyph)
    };
    let body = match glyph {
        Some(glyph) => format!("{} {}", glyph, todo.text),
        None => todo.text.clone(),
    };
    match display_index {
        Some(n) => format!("({}) {}", n, body),
        None => body,
    }
}

/// Decodes one stored line. Only status markers are recognised.
pub fn decode_line(line: &str) -> Todo {
    let line = line.strip_suffix('\n').unwrap_or(line);
    let line = line.strip_suffix('\r').unwrap_or(line);

    let (status, text) = if let Some(text) = line.strip_prefix(Marker::Done.prefix()) {
        (Status::Done, text)
    } else if let Some(text) = line.strip_prefix(Marker::Started.prefix()) {
        (Status::Started, text)
    } else {
        (Status::None, line)
    };

    Todo::new(text).with_status(status)
}

/// Encodes a todo as one line, without the trailing newline.
pub fn encode_line(todo: &Todo) -> String {
    let mut line = String::new();
    if todo.removed {
        line.push_str(Marker::Removed.prefix());
    }
    if let Some(marker) = marker_of(todo.status) {
        line.push_str(marker.prefix());
    }
    line.push_str(&todo.text);
    line
}
