//! The definition table: every entity definition, keyed by name.
//!
//! The table is built once and handed to a [`Resolver`](crate::Resolver).
//! References between definitions are names into this table, which keeps
//! the entity graph explicit and lets a test build a table of two or three
//! definitions in isolation.

use crate::error::ShapeError;
use crate::field_spec::{EntityDefinition, FieldMap, FieldSpec, Reference, UnionTarget};
use indexmap::IndexMap;

/// An insertion-ordered, write-once set of entity definitions.
#[derive(Debug, Clone, Default)]
pub struct DefinitionTable {
    entities: IndexMap<String, EntityDefinition>,
}

impl DefinitionTable {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a table from definitions, failing on the first invalid one.
    pub fn from_definitions<I>(definitions: I) -> Result<Self, ShapeError>
    where
        I: IntoIterator<Item = EntityDefinition>,
    {
        let mut table = Self::new();
        for definition in definitions {
            table.insert(definition)?;
        }
        Ok(table)
    }

    /// Add a definition. Rejects an empty root type and duplicate names.
    pub fn insert(&mut self, definition: EntityDefinition) -> Result<(), ShapeError> {
        if definition.wire_type().trim().is_empty() {
            return Err(ShapeError::MissingRootType {
                entity: definition.name().to_string(),
            });
        }
        if self.entities.contains_key(definition.name()) {
            return Err(ShapeError::DuplicateEntity {
                name: definition.name().to_string(),
            });
        }
        self.entities
            .insert(definition.name().to_string(), definition);
        Ok(())
    }

    pub fn get(&self, name: &str) -> Result<&EntityDefinition, ShapeError> {
        self.entities
            .get(name)
            .ok_or_else(|| ShapeError::UnknownEntity {
                name: name.to_string(),
            })
    }

    pub fn contains(&self, name: &str) -> bool {
        self.entities.contains_key(name)
    }

    pub fn iter(&self) -> impl Iterator<Item = &EntityDefinition> {
        self.entities.values()
    }

    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.entities.keys().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.entities.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entities.is_empty()
    }

    /// Static authoring checks that need no resolution: every `__use` index
    /// has a `__define` entry in its own field map, and every reference
    /// names an entity in this table.
    ///
    /// Cycles are not checked here; [`Resolver::check_all`](crate::Resolver::check_all)
    /// finds them by resolving.
    pub fn validate(&self) -> Vec<ShapeError> {
        let mut errors = Vec::new();
        for definition in self.entities.values() {
            for (group, map) in definition.groups() {
                let path = vec![group.to_string()];
                self.validate_map(definition.name(), map, &path, &mut errors);
            }
        }
        errors
    }

    fn validate_map(
        &self,
        entity: &str,
        map: &FieldMap,
        path: &[String],
        errors: &mut Vec<ShapeError>,
    ) {
        for reference in map.definitions().values() {
            self.validate_reference(reference, errors);
        }
        for (name, spec) in map.iter() {
            let field_path = child_path(path, name);
            match spec {
                FieldSpec::Scalar => {}
                FieldSpec::Inline(inner) => self.validate_map(entity, inner, &field_path, errors),
                FieldSpec::Reference(reference) => self.validate_reference(reference, errors),
                FieldSpec::Fragment(index) => {
                    if map.definition(*index).is_none() {
                        errors.push(ShapeError::DanglingFragmentReference {
                            entity: entity.to_string(),
                            path: field_path,
                            index: *index,
                        });
                    }
                }
                FieldSpec::Union(union) => {
                    for (type_name, target) in union.iter() {
                        match target {
                            UnionTarget::Reference(reference) => {
                                self.validate_reference(reference, errors)
                            }
                            UnionTarget::Fragment(index) => {
                                if map.definition(*index).is_none() {
                                    errors.push(ShapeError::DanglingFragmentReference {
                                        entity: entity.to_string(),
                                        path: child_path(&field_path, type_name),
                                        index: *index,
                                    });
                                }
                            }
                        }
                    }
                }
            }
        }
    }

    fn validate_reference(&self, reference: &Reference, errors: &mut Vec<ShapeError>) {
        let name = reference.target().entity();
        if !self.contains(name) {
            let err = ShapeError::UnknownEntity {
                name: name.to_string(),
            };
            if !errors.contains(&err) {
                errors.push(err);
            }
        }
    }
}

pub(crate) fn child_path(path: &[String], name: &str) -> Vec<String> {
    let mut child = path.to_vec();
    child.push(name.to_string());
    child
}
