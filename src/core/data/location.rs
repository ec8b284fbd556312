use std::fmt;

/// Position of an element inside a catalog file (1-based line and column).
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Position {
    pub line: usize,
    pub col: usize,
}

impl Position {
    pub fn new(line: usize, col: usize) -> Self {
        Self { line, col }
    }
}

/// Location of a reportable item in a catalog file.
///
/// Unlike [`crate::core::Location`] (which points into the application's source
/// code and is only informational), this points into the `.ts` file itself and is
/// what issues are anchored to.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord)]
pub struct CatalogLocation {
    /// Path to the catalog (e.g., "./i18n/drawpile_vi.ts").
    pub file_path: String,
    /// Line number (1-indexed).
    pub line: usize,
    /// Column number (1-indexed).
    pub col: usize,
}

impl CatalogLocation {
    pub fn new(file_path: impl Into<String>, line: usize, col: usize) -> Self {
        Self {
            file_path: file_path.into(),
            line,
            col,
        }
    }

    pub fn at(file_path: impl Into<String>, position: Position) -> Self {
        Self::new(file_path, position.line, position.col)
    }
}

impl fmt::Display for CatalogLocation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}:{}", self.file_path, self.line, self.col)
    }
}

/// A message as seen by the reporter: where it is and what it says.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MessageContext {
    pub location: CatalogLocation,
    /// Name of the owning `<context>` (e.g., "QGuiApplication").
    pub context: String,
    /// Source text of the message.
    pub source: String,
    /// Disambiguating comment, empty when absent.
    pub comment: String,
    /// Raw text of the catalog line the location points at.
    pub source_line: String,
}

impl MessageContext {
    pub fn new(
        location: CatalogLocation,
        context: impl Into<String>,
        source: impl Into<String>,
        comment: impl Into<String>,
        source_line: impl Into<String>,
    ) -> Self {
        Self {
            location,
            context: context.into(),
            source: source.into(),
            comment: comment.into(),
            source_line: source_line.into(),
        }
    }

    // Convenience accessors
    pub fn file_path(&self) -> &str {
        &self.location.file_path
    }

    pub fn line(&self) -> usize {
        self.location.line
    }

    pub fn col(&self) -> usize {
        self.location.col
    }

    /// `Context::source` or `Context::source (comment)`, used in notes.
    pub fn qualified_key(&self) -> String {
        if self.comment.is_empty() {
            format!("{}::{}", self.context, self.source)
        } else {
            format!("{}::{} ({})", self.context, self.source, self.comment)
        }
    }
}
