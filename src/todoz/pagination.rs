//! # Pagination
//!
//! The list is shown one fixed-size page at a time. Which page is current is a
//! plain value, [`PageState`], that callers pass in and get back; nothing here
//! holds on to it.
//!
//! ```text
//!            ls                 next (n < count)          prev (n > 1)
//!   Unset ────────▶ OnPage(1)   OnPage(n) ─▶ OnPage(n+1)   OnPage(n) ─▶ OnPage(n-1)
//!   any   ────────▶ OnPage(1)
//! ```
//!
//! Every other move is rejected and leaves the state as it was.
//!
//! The page count is computed from the full list, removed todos included, so
//! a page may show fewer rows than the page size. Row numbers always refer to
//! positions in the full list.

use crate::model::Todo;
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PageState {
    /// No listing has been shown yet this session.
    #[default]
    Unset,
    /// 1-based page number.
    OnPage(usize),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PageMove {
    Start,
    Next,
    Prev,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PageRejection {
    NotListed,
    NoMorePages,
    FirstPage,
}

impl fmt::Display for PageRejection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PageRejection::NotListed => {
                f.write_str("There is no previous page use \"ls\" to list from beginning.")
            }
            PageRejection::NoMorePages => f.write_str("There are no more pages."),
            PageRejection::FirstPage => f.write_str("You're on the first page already."),
        }
    }
}

pub fn page_count(len: usize, page_size: usize) -> usize {
    len.div_ceil(page_size)
}

pub fn turn(state: PageState, mv: PageMove, count: usize) -> Result<PageState, PageRejection> {
    match (mv, state) {
        (PageMove::Start, _) => Ok(PageState::OnPage(1)),
        (_, PageState::Unset) => Err(PageRejection::NotListed),
        (PageMove::Next, PageState::OnPage(n)) if n >= count => Err(PageRejection::NoMorePages),
        (PageMove::Next, PageState::OnPage(n)) => Ok(PageState::OnPage(n + 1)),
        (PageMove::Prev, PageState::OnPage(n)) if n <= 1 => Err(PageRejection::FirstPage),
        (PageMove::Prev, PageState::OnPage(n)) => Ok(PageState::OnPage(n - 1)),
    }
}

/// Visible todos on `page`, paired with their 1-based position in the full list.
pub fn page_rows(todos: &[Todo], page: usize, page_size: usize) -> Vec<(usize, &Todo)> {
    let start = page.saturating_sub(1).saturating_mul(page_size).min(todos.len());
    let end = start.saturating_add(page_size).min(todos.len());

    todos[start..end]
        .iter()
        .enumerate()
        .filter(|(_, todo)| !todo.removed)
        .map(|(offset, todo)| (start + offset + 1, todo))
        .take(page_size)
        .collect()
}

/// Navigation hint shown under a page.
pub fn footer_hint(page: usize, count: usize) -> &'static str {
    if page >= count && count <= 1 {
        "This is the last page."
    } else if page >= count {
        "This is the last page. Type \"prev\" to go to the previous page."
    } else if page == 1 {
        "Type \"next\" to go to the next page."
    } else {
        "Type \"next\" to go to the next page. Type \"prev\" to go to the previous page."
    }
}
