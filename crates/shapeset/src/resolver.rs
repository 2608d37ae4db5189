//! The selection resolver.
//!
//! Given an entity and a detail level, [`Resolver`] merges the entity's
//! `common` group with the requested level (the level wins on a name
//! collision), then expands every field: scalars stay leaves, inline maps
//! recurse in place, references resolve their target entity, unions resolve
//! one sub-selection per concrete type, and `__use` fields go through the
//! map's fragment table.
//!
//! Resolution is a pure function of `(entity, level, omit set)`, so results
//! are memoized for the resolver's lifetime. The same key also drives cycle
//! detection: re-entering a key that is still being resolved can never
//! terminate, and is reported as [`ShapeError::UnterminatedCycle`].

use crate::error::ShapeError;
use crate::field_spec::{EntityDefinition, FieldMap, FieldSpec, Level, Reference};
use crate::fragment::FragmentTable;
use crate::selection::{Selection, SelectionNode};
use crate::table::{child_path, DefinitionTable};
use std::cell::RefCell;
use std::collections::HashMap;
use std::fmt;

/// Resolver configuration.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ResolverOptions {
    /// Report re-entrant resolutions as [`ShapeError::UnterminatedCycle`].
    /// When off, a bad definition recurses until `max_depth`.
    pub detect_cycles: bool,
    /// Maximum nesting of entity resolutions.
    pub max_depth: usize,
    /// Cache results per `(entity, level, omit set)`.
    pub memoize: bool,
}

impl Default for ResolverOptions {
    fn default() -> Self {
        Self {
            detect_cycles: true,
            max_depth: 64,
            memoize: true,
        }
    }
}

/// Identity of one resolution: entity, level, and the sorted omit set.
/// `owned` separates the table's definition from an ad-hoc one sharing its
/// name, so the two never look like a re-entry of each other.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
struct ResolutionKey {
    entity: String,
    level: Level,
    omit: Vec<String>,
    owned: bool,
}

impl ResolutionKey {
    fn new(entity: &str, level: Level, omit: &[String], owned: bool) -> Self {
        let mut omit = omit.to_vec();
        omit.sort();
        omit.dedup();
        Self {
            entity: entity.to_string(),
            level,
            omit,
            owned,
        }
    }
}

impl fmt::Display for ResolutionKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}", self.entity, self.level)?;
        if !self.owned {
            write!(f, " (ad hoc)")?;
        }
        if !self.omit.is_empty() {
            write!(f, " omit({})", self.omit.join(", "))?;
        }
        Ok(())
    }
}

/// Which group a merged entry came from. `__use` indices resolve against
/// that group's own `__define` table.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Origin {
    Common,
    Level,
}

/// Resolves entity definitions from a [`DefinitionTable`] into selection trees.
///
/// Single-threaded: the memo cache and resolution stack live in `RefCell`s.
/// Build one resolver per thread if you need more.
#[derive(Debug)]
pub struct Resolver<'t> {
    table: &'t DefinitionTable,
    options: ResolverOptions,
    cache: RefCell<HashMap<ResolutionKey, SelectionNode>>,
    stack: RefCell<Vec<ResolutionKey>>,
}

impl<'t> Resolver<'t> {
    pub fn new(table: &'t DefinitionTable) -> Self {
        Self::with_options(table, ResolverOptions::default())
    }

    pub fn with_options(table: &'t DefinitionTable, options: ResolverOptions) -> Self {
        Self {
            table,
            options,
            cache: RefCell::new(HashMap::new()),
            stack: RefCell::new(Vec::new()),
        }
    }

    pub fn table(&self) -> &'t DefinitionTable {
        self.table
    }

    pub fn options(&self) -> ResolverOptions {
        self.options
    }

    /// Resolve `entity` at `level`.
    pub fn resolve(&self, entity: &str, level: Level) -> Result<SelectionNode, ShapeError> {
        let definition = self.table.get(entity)?;
        self.resolve_definition(definition, level, &[])
    }

    /// Resolve `entity` at `level` without the named top-level fields.
    pub fn resolve_omitting<I, S>(
        &self,
        entity: &str,
        level: Level,
        omit: I,
    ) -> Result<SelectionNode, ShapeError>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let omit: Vec<String> = omit.into_iter().map(Into::into).collect();
        let definition = self.table.get(entity)?;
        self.resolve_definition(definition, level, &omit)
    }

    /// Resolve a reference: its target entity at its level, minus its omit set.
    pub fn resolve_reference(&self, reference: &Reference) -> Result<SelectionNode, ShapeError> {
        let target = reference.target();
        let definition = self.table.get(target.entity())?;
        self.resolve_definition(definition, target.level(), reference.omitted())
    }

    /// Resolve a definition directly. It need not be in the table, but the
    /// entities it references must be. Only definitions owned by the table
    /// are memoized.
    pub fn resolve_definition(
        &self,
        definition: &EntityDefinition,
        level: Level,
        omit: &[String],
    ) -> Result<SelectionNode, ShapeError> {
        let owned = self
            .table
            .get(definition.name())
            .is_ok_and(|entry| std::ptr::eq(entry, definition));
        let key = ResolutionKey::new(definition.name(), level, omit, owned);
        let cacheable = self.options.memoize && owned;

        if cacheable {
            if let Some(node) = self.cache.borrow().get(&key) {
                tracing::trace!(resolution = %key, "selection cache hit");
                return Ok(node.clone());
            }
        }

        let depth = self.enter(&key)?;
        tracing::debug!(resolution = %key, depth, "resolving selection");
        let result = self.expand_entity(definition, level, &key.omit);
        self.stack.borrow_mut().pop();
        let node = result?;

        if cacheable {
            self.cache.borrow_mut().insert(key, node.clone());
        }
        Ok(node)
    }

    /// Drop every memoized selection.
    pub fn clear_cache(&self) {
        self.cache.borrow_mut().clear();
    }

    /// Number of memoized selections.
    pub fn cached_len(&self) -> usize {
        self.cache.borrow().len()
    }

    /// Push `key` onto the resolution stack, returning the new depth.
    fn enter(&self, key: &ResolutionKey) -> Result<usize, ShapeError> {
        let mut stack = self.stack.borrow_mut();
        if self.options.detect_cycles {
            if let Some(start) = stack.iter().position(|open| open == key) {
                let path = stack[start..]
                    .iter()
                    .chain(std::iter::once(key))
                    .map(ToString::to_string)
                    .collect();
                return Err(ShapeError::UnterminatedCycle { path });
            }
        }
        if stack.len() >= self.options.max_depth {
            let path = stack
                .iter()
                .chain(std::iter::once(key))
                .map(ToString::to_string)
                .collect();
            return Err(ShapeError::DepthExceeded {
                path,
                limit: self.options.max_depth,
            });
        }
        stack.push(key.clone());
        Ok(stack.len())
    }

    fn expand_entity(
        &self,
        definition: &EntityDefinition,
        level: Level,
        omit: &[String],
    ) -> Result<SelectionNode, ShapeError> {
        let common = definition.common_fields();
        let requested = definition.fields(level);
        let mut common_fragments = FragmentTable::new(common);
        let mut level_fragments = FragmentTable::new(requested);

        let mut node = SelectionNode::new();
        for (name, spec, origin) in merge(common, requested) {
            // Omitted fields are never expanded; this is what lets an omit
            // set break a reference cycle.
            if omit.iter().any(|omitted| omitted == name) {
                continue;
            }
            let (fragments, group) = match origin {
                Origin::Common => (&mut common_fragments, "common"),
                Origin::Level => (&mut level_fragments, level.as_str()),
            };
            let path = vec![group.to_string(), name.to_string()];
            let selection = self.expand_field(definition.name(), spec, fragments, &path)?;
            node.insert(name, selection);
        }
        Ok(node)
    }

    pub(crate) fn expand_field(
        &self,
        entity: &str,
        spec: &FieldSpec,
        fragments: &mut FragmentTable<'_>,
        path: &[String],
    ) -> Result<Selection, ShapeError> {
        match spec {
            FieldSpec::Scalar => Ok(Selection::Leaf),
            FieldSpec::Inline(map) => Ok(Selection::Object(self.expand_inline(entity, map, path)?)),
            FieldSpec::Reference(reference) => {
                Ok(Selection::Object(self.resolve_reference(reference)?))
            }
            FieldSpec::Union(union) => Ok(Selection::Union(
                self.expand_union(entity, union, fragments, path)?,
            )),
            FieldSpec::Fragment(index) => Ok(Selection::Object(
                fragments.resolve(self, *index, entity, path)?,
            )),
        }
    }

    /// An inline map behaves like a one-off entity with only a `common`
    /// group, with its own fragment table.
    fn expand_inline(
        &self,
        entity: &str,
        map: &FieldMap,
        path: &[String],
    ) -> Result<SelectionNode, ShapeError> {
        let mut fragments = FragmentTable::new(Some(map));
        let mut node = SelectionNode::new();
        for (name, spec) in map.iter() {
            let field_path = child_path(path, name);
            let selection = self.expand_field(entity, spec, &mut fragments, &field_path)?;
            node.insert(name, selection);
        }
        Ok(node)
    }
}

/// Shallow-merge `common` with the requested level.
///
/// Common fields keep their order; a level entry with the same name takes
/// the common entry's slot. Level-only fields follow in their own order.
fn merge<'d>(
    common: Option<&'d FieldMap>,
    requested: Option<&'d FieldMap>,
) -> Vec<(&'d str, &'d FieldSpec, Origin)> {
    let mut merged = Vec::new();
    if let Some(common) = common {
        for (name, spec) in common.iter() {
            match requested.and_then(|level| level.get(name)) {
                Some(overriding) => merged.push((name, overriding, Origin::Level)),
                None => merged.push((name, spec, Origin::Common)),
            }
        }
    }
    if let Some(requested) = requested {
        for (name, spec) in requested.iter() {
            if !common.is_some_and(|common| common.contains(name)) {
                merged.push((name, spec, Origin::Level));
            }
        }
    }
    merged
}
