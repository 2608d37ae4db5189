//! Declarative entity definitions.
//!
//! An [`EntityDefinition`] describes, once per domain entity, every field
//! shape the API can return for it, split into a `common` group and up to
//! three detail levels. Nothing here resolves anything: references to other
//! entities are stored by name and only looked up when the
//! [`Resolver`](crate::Resolver) expands them, so definitions may reference
//! each other in any order and in cycles.
//!
//! ```
//! use shapeset::{EntityDefinition, FieldMap, Level, Reference};
//!
//! let role = EntityDefinition::new("Role")
//!     .common(
//!         FieldMap::new()
//!             .scalars(["id", "name"])
//!             .reference("organization", Reference::nav("Organization").omit(["roles"])),
//!     )
//!     .full(FieldMap::new().scalar("createdAt"));
//!
//! assert!(role.defines(Level::Full));
//! assert!(!role.defines(Level::List));
//! ```

use crate::error::ShapeError;
use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;
use std::str::FromStr;

/// Index into a field map's `__define` fragment table.
pub type FragmentIndex = u32;

/// A requestable detail level.
///
/// `common` is a field group rather than a level: it is merged into every
/// level and never requested on its own.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Level {
    Full,
    List,
    Nav,
}

impl Level {
    /// Every level, in the order list-style searches offer them.
    pub const ALL: [Level; 3] = [Level::List, Level::Nav, Level::Full];

    pub fn as_str(&self) -> &'static str {
        match self {
            Level::Full => "full",
            Level::List => "list",
            Level::Nav => "nav",
        }
    }
}

impl fmt::Display for Level {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Level {
    type Err = ShapeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "full" => Ok(Level::Full),
            "list" => Ok(Level::List),
            "nav" => Ok(Level::Nav),
            _ => Err(ShapeError::InvalidLevel(s.to_string())),
        }
    }
}

/// A deferred pointer to another entity at a given level.
///
/// The target is a table key, looked up at resolve time.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct EntityRef {
    entity: String,
    level: Level,
}

impl EntityRef {
    pub fn new(entity: impl Into<String>, level: Level) -> Self {
        Self {
            entity: entity.into(),
            level,
        }
    }

    pub fn entity(&self) -> &str {
        &self.entity
    }

    pub fn level(&self) -> Level {
        self.level
    }
}

/// A field whose value is another entity, resolved at a chosen level with
/// an optional set of field names stripped from the result.
///
/// The omit set is how selection cycles are broken: `Role.organization`
/// pointing at `Organization` must omit `roles` if `Organization` selects
/// its roles at that level.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Reference {
    target: EntityRef,
    omit: Vec<String>,
}

impl Reference {
    pub fn to(entity: impl Into<String>, level: Level) -> Self {
        Self {
            target: EntityRef::new(entity, level),
            omit: Vec::new(),
        }
    }

    pub fn full(entity: impl Into<String>) -> Self {
        Self::to(entity, Level::Full)
    }

    pub fn list(entity: impl Into<String>) -> Self {
        Self::to(entity, Level::List)
    }

    pub fn nav(entity: impl Into<String>) -> Self {
        Self::to(entity, Level::Nav)
    }

    /// Strip these fields from the referenced entity's selection.
    pub fn omit<I, S>(mut self, names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        for name in names {
            let name = name.into();
            if !self.omit.contains(&name) {
                self.omit.push(name);
            }
        }
        self
    }

    pub fn target(&self) -> &EntityRef {
        &self.target
    }

    pub fn omitted(&self) -> &[String] {
        &self.omit
    }
}

/// What one branch of a union field resolves through.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UnionTarget {
    /// Resolve the referenced entity directly.
    Reference(Reference),
    /// Resolve through the enclosing field map's `__define` table.
    Fragment(FragmentIndex),
}

/// A polymorphic field: one sub-selection per possible concrete type.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct UnionSpec {
    members: IndexMap<String, UnionTarget>,
}

impl UnionSpec {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a concrete type resolved through a direct reference.
    pub fn member(mut self, type_name: impl Into<String>, reference: Reference) -> Self {
        self.members
            .insert(type_name.into(), UnionTarget::Reference(reference));
        self
    }

    /// Add a concrete type resolved through a shared `__define` fragment.
    pub fn shared(mut self, type_name: impl Into<String>, index: FragmentIndex) -> Self {
        self.members
            .insert(type_name.into(), UnionTarget::Fragment(index));
        self
    }

    pub fn get(&self, type_name: &str) -> Option<&UnionTarget> {
        self.members.get(type_name)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &UnionTarget)> {
        self.members.iter().map(|(k, v)| (k.as_str(), v))
    }

    pub fn len(&self) -> usize {
        self.members.len()
    }

    pub fn is_empty(&self) -> bool {
        self.members.is_empty()
    }
}

/// How a single field is selected.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FieldSpec {
    /// A leaf field, selected verbatim.
    Scalar,
    /// A small owned structure with no entity identity of its own.
    Inline(FieldMap),
    /// Another entity.
    Reference(Reference),
    /// A field whose concrete type varies at runtime.
    Union(UnionSpec),
    /// A field bound to an entry of the enclosing map's `__define` table (`__use`).
    Fragment(FragmentIndex),
}

/// An ordered set of field specs plus the map's own fragment table.
///
/// Field order is preserved into the resolved selection.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FieldMap {
    fields: IndexMap<String, FieldSpec>,
    define: BTreeMap<FragmentIndex, Reference>,
}

impl FieldMap {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(mut self, name: impl Into<String>, spec: FieldSpec) -> Self {
        self.fields.insert(name.into(), spec);
        self
    }

    pub fn scalar(self, name: impl Into<String>) -> Self {
        self.insert(name, FieldSpec::Scalar)
    }

    pub fn scalars<I, S>(mut self, names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        for name in names {
            self.fields.insert(name.into(), FieldSpec::Scalar);
        }
        self
    }

    pub fn inline(self, name: impl Into<String>, fields: FieldMap) -> Self {
        self.insert(name, FieldSpec::Inline(fields))
    }

    pub fn reference(self, name: impl Into<String>, reference: Reference) -> Self {
        self.insert(name, FieldSpec::Reference(reference))
    }

    pub fn union(self, name: impl Into<String>, union: UnionSpec) -> Self {
        self.insert(name, FieldSpec::Union(union))
    }

    /// Bind a field to fragment `index` of this map's `__define` table.
    pub fn fragment(self, name: impl Into<String>, index: FragmentIndex) -> Self {
        self.insert(name, FieldSpec::Fragment(index))
    }

    /// Add an entry to this map's `__define` table.
    pub fn define(mut self, index: FragmentIndex, reference: Reference) -> Self {
        self.define.insert(index, reference);
        self
    }

    pub fn get(&self, name: &str) -> Option<&FieldSpec> {
        self.fields.get(name)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.fields.contains_key(name)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &FieldSpec)> {
        self.fields.iter().map(|(k, v)| (k.as_str(), v))
    }

    pub fn len(&self) -> usize {
        self.fields.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    pub fn definition(&self, index: FragmentIndex) -> Option<&Reference> {
        self.define.get(&index)
    }

    pub fn definitions(&self) -> &BTreeMap<FragmentIndex, Reference> {
        &self.define
    }
}

/// The authoring unit: every selectable field of one wire type.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EntityDefinition {
    name: String,
    root_type: String,
    common: Option<FieldMap>,
    full: Option<FieldMap>,
    list: Option<FieldMap>,
    nav: Option<FieldMap>,
}

impl EntityDefinition {
    /// A definition whose table key and wire type name are both `name`.
    pub fn new(name: impl Into<String>) -> Self {
        let name = name.into();
        Self {
            root_type: name.clone(),
            name,
            common: None,
            full: None,
            list: None,
            nav: None,
        }
    }

    /// Override the wire type name when it differs from the table key.
    pub fn root_type(mut self, root_type: impl Into<String>) -> Self {
        self.root_type = root_type.into();
        self
    }

    pub fn common(mut self, fields: FieldMap) -> Self {
        self.common = Some(fields);
        self
    }

    pub fn full(mut self, fields: FieldMap) -> Self {
        self.full = Some(fields);
        self
    }

    pub fn list(mut self, fields: FieldMap) -> Self {
        self.list = Some(fields);
        self
    }

    pub fn nav(mut self, fields: FieldMap) -> Self {
        self.nav = Some(fields);
        self
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn wire_type(&self) -> &str {
        &self.root_type
    }

    pub fn common_fields(&self) -> Option<&FieldMap> {
        self.common.as_ref()
    }

    pub fn fields(&self, level: Level) -> Option<&FieldMap> {
        match level {
            Level::Full => self.full.as_ref(),
            Level::List => self.list.as_ref(),
            Level::Nav => self.nav.as_ref(),
        }
    }

    pub fn defines(&self, level: Level) -> bool {
        self.fields(level).is_some()
    }

    pub fn defined_levels(&self) -> Vec<Level> {
        Level::ALL
            .into_iter()
            .filter(|level| self.defines(*level))
            .collect()
    }

    /// Every field group present on this definition, `common` first.
    pub(crate) fn groups(&self) -> impl Iterator<Item = (&'static str, &FieldMap)> {
        [
            ("common", self.common.as_ref()),
            ("full", self.full.as_ref()),
            ("list", self.list.as_ref()),
            ("nav", self.nav.as_ref()),
        ]
        .into_iter()
        .filter_map(|(group, map)| map.map(|m| (group, m)))
    }
}
