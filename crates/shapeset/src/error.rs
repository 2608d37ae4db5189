//! Error types for selection resolution.
//!
//! Every [`ShapeError`] is an authoring-time defect in an entity definition.
//! Resolution is deterministic, so none of them are worth retrying: the fix
//! is always an edit to the definition table.

use std::fmt;

/// Errors raised while building a definition table or resolving selections.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ShapeError {
    /// A `__use` index has no matching `__define` entry in the same field map.
    DanglingFragmentReference {
        entity: String,
        path: Vec<String>,
        index: u32,
    },
    /// A reference chain re-entered an (entity, level, omit) resolution
    /// already on the stack.
    UnterminatedCycle { path: Vec<String> },
    /// An entity definition was inserted with an empty root type.
    MissingRootType { entity: String },
    /// A reference or builder named an entity the table does not contain.
    UnknownEntity { name: String },
    /// Two definitions were inserted under the same name.
    DuplicateEntity { name: String },
    /// Reference nesting went deeper than the configured limit.
    DepthExceeded { path: Vec<String>, limit: usize },
    /// A detail level string did not parse.
    InvalidLevel(String),
}

impl fmt::Display for ShapeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::DanglingFragmentReference {
                entity,
                path,
                index,
            } => write!(
                f,
                "Dangling fragment reference: {} at {} uses undefined fragment #{}",
                entity,
                display_path(path),
                index
            ),
            Self::UnterminatedCycle { path } => {
                write!(f, "Unterminated cycle: {}", path.join(" -> "))
            }
            Self::MissingRootType { entity } => {
                write!(f, "Missing root type for entity '{}'", entity)
            }
            Self::UnknownEntity { name } => write!(f, "Unknown entity '{}'", name),
            Self::DuplicateEntity { name } => {
                write!(f, "Entity '{}' is already defined", name)
            }
            Self::DepthExceeded { path, limit } => write!(
                f,
                "Selection depth exceeded {} at {}",
                limit,
                path.join(" -> ")
            ),
            Self::InvalidLevel(level) => write!(
                f,
                "Invalid detail level '{}' (expected full, list, or nav)",
                level
            ),
        }
    }
}

impl std::error::Error for ShapeError {}

fn display_path(path: &[String]) -> String {
    if path.is_empty() {
        "<root>".to_string()
    } else {
        path.join(".")
    }
}
