//! The built-in entity definition table.
//!
//! One definition per wire type of the API hub, grouped by area. Use
//! [`builtin`] for the shared, process-wide table or [`table`] for a fresh
//! copy to extend.
//!
//! ```
//! use shapeset::{entities, Level, Resolver};
//!
//! let table = entities::builtin()?;
//! let resolver = Resolver::new(table);
//! let comment = resolver.resolve("Comment", Level::Full)?;
//! assert!(comment.variants("subject").is_some());
//! # Ok::<(), shapeset::ShapeError>(())
//! ```

mod accounts;
mod activity;
mod catalog;
mod commerce;
mod discussion;
mod payloads;
mod platform;

use crate::error::ShapeError;
use crate::table::DefinitionTable;
use std::sync::OnceLock;

static BUILTIN: OnceLock<Result<DefinitionTable, ShapeError>> = OnceLock::new();

/// Build a fresh copy of the built-in table.
pub fn table() -> Result<DefinitionTable, ShapeError> {
    DefinitionTable::from_definitions(
        accounts::definitions()
            .into_iter()
            .chain(catalog::definitions())
            .chain(discussion::definitions())
            .chain(commerce::definitions())
            .chain(activity::definitions())
            .chain(platform::definitions())
            .chain(payloads::definitions()),
    )
}

/// The built-in table, built on first use and shared for the process lifetime.
pub fn builtin() -> Result<&'static DefinitionTable, ShapeError> {
    BUILTIN.get_or_init(table).as_ref().map_err(Clone::clone)
}
