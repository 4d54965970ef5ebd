/// Progress of a todo. At most one of these is active at a time.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Status {
    #[default]
    None,
    Done,
    Started,
}

/// A state a todo can be marked with or cleared of.
///
/// `Done` and `Started` are one family (setting one replaces the other);
/// `Removed` is independent of both.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Marker {
    Done,
    Started,
    Removed,
}

impl Marker {
    /// Prefix used for this marker in the todos file.
    pub fn prefix(self) -> &'static str {
        match self {
            Marker::Done => "::done::",
            Marker::Started => "::started::",
            Marker::Removed => "::rm::",
        }
    }

    /// Glyph shown in listings, if any.
    pub fn glyph(self) -> Option<&'static str> {
        match self {
            Marker::Done => Some("✓"),
            Marker::Started => Some("→"),
            Marker::Removed => None,
        }
    }
}

/// A single todo line. Its position in the list is its only identity.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Todo {
    pub text: String,
    pub status: Status,
    pub removed: bool,
}

impl Todo {
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            ..Self::default()
        }
    }

    pub fn with_status(mut self, status: Status) -> Self {
        self.status = status;
        self
    }

    pub fn with_removed(mut self, removed: bool) -> Self {
        self.removed = removed;
        self
    }
}
