//! Eager whole-table resolution.
//!
//! Authoring mistakes (dangling fragments, unterminated cycles, unknown
//! references) only surface when the offending definition is resolved. A
//! host calls [`Resolver::check_all`] at startup so they surface there
//! instead of deep inside a user flow.

use crate::error::ShapeError;
use crate::field_spec::Level;
use crate::resolver::Resolver;

/// Size of one resolved selection.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SelectionStats {
    pub fields: usize,
    pub leaves: usize,
    pub depth: usize,
}

/// Outcome of resolving one (entity, level) pair.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CheckEntry {
    pub entity: String,
    pub level: Level,
    /// Whether the entity declares this level, or it fell back to `common`.
    pub defined: bool,
    pub outcome: Result<SelectionStats, ShapeError>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CheckReport {
    /// Errors from [`DefinitionTable::validate`](crate::DefinitionTable::validate).
    pub validation: Vec<ShapeError>,
    pub entries: Vec<CheckEntry>,
}

impl CheckReport {
    pub fn is_ok(&self) -> bool {
        self.validation.is_empty() && self.entries.iter().all(|e| e.outcome.is_ok())
    }

    /// Every resolution that failed, with its error.
    pub fn failures(&self) -> impl Iterator<Item = (&CheckEntry, &ShapeError)> {
        self.entries
            .iter()
            .filter_map(|entry| entry.outcome.as_ref().err().map(|err| (entry, err)))
    }

    pub fn failure_count(&self) -> usize {
        self.validation.len() + self.failures().count()
    }
}

impl<'t> Resolver<'t> {
    /// Validate the table, then resolve every entity at every level.
    pub fn check_all(&self) -> CheckReport {
        let validation = self.table().validate();
        for err in &validation {
            tracing::warn!(error = %err, "definition table failed validation");
        }

        let mut entries = Vec::new();
        for definition in self.table().iter() {
            for level in Level::ALL {
                let outcome = self
                    .resolve_definition(definition, level, &[])
                    .map(|node| SelectionStats {
                        fields: node.len(),
                        leaves: node.leaf_count(),
                        depth: node.depth(),
                    });
                if let Err(err) = &outcome {
                    tracing::warn!(
                        entity = definition.name(),
                        level = %level,
                        error = %err,
                        "selection failed to resolve"
                    );
                }
                entries.push(CheckEntry {
                    entity: definition.name().to_string(),
                    level,
                    defined: definition.defines(level),
                    outcome,
                });
            }
        }
        tracing::debug!(
            entities = self.table().len(),
            resolutions = entries.len(),
            "checked definition table"
        );
        CheckReport {
            validation,
            entries,
        }
    }
}
