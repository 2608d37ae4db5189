//! Operation builders.
//!
//! [`Resolver::to_query`], [`Resolver::to_search`] and
//! [`Resolver::to_mutation`] pair an operation name and its declared input
//! type with a resolved selection. The resulting [`OperationDescriptor`] is
//! what a wire serializer turns into a request document; nothing here
//! formats text or touches the network.

use crate::error::ShapeError;
use crate::field_spec::Level;
use crate::resolver::Resolver;
use crate::selection::SelectionNode;
use serde::Serialize;

/// What kind of root operation a descriptor describes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum OperationKind {
    /// Single-item read.
    Query,
    /// List-style read.
    Search,
    /// Write.
    Mutation,
}

/// An immutable (operation, input type, selection) triple.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct OperationDescriptor {
    kind: OperationKind,
    operation_name: String,
    input_type: Option<String>,
    root_type: Option<String>,
    level: Option<Level>,
    selection: Option<SelectionNode>,
}

impl OperationDescriptor {
    pub fn kind(&self) -> OperationKind {
        self.kind
    }

    pub fn operation_name(&self) -> &str {
        &self.operation_name
    }

    /// The declared GraphQL input type of the operation's variables, if any.
    pub fn input_type(&self) -> Option<&str> {
        self.input_type.as_deref()
    }

    /// Wire type of the payload; `None` for mutations without one.
    pub fn root_type(&self) -> Option<&str> {
        self.root_type.as_deref()
    }

    pub fn level(&self) -> Option<Level> {
        self.level
    }

    pub fn selection(&self) -> Option<&SelectionNode> {
        self.selection.as_ref()
    }
}

/// The descriptors produced by [`Resolver::to_search`], one per level.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct SearchOperations {
    operations: Vec<OperationDescriptor>,
}

impl SearchOperations {
    /// The descriptor for `level`.
    pub fn level(&self, level: Level) -> Option<&OperationDescriptor> {
        self.operations.iter().find(|op| op.level == Some(level))
    }

    pub fn iter(&self) -> std::slice::Iter<'_, OperationDescriptor> {
        self.operations.iter()
    }

    pub fn len(&self) -> usize {
        self.operations.len()
    }

    pub fn is_empty(&self) -> bool {
        self.operations.is_empty()
    }
}

impl IntoIterator for SearchOperations {
    type Item = OperationDescriptor;
    type IntoIter = std::vec::IntoIter<OperationDescriptor>;

    fn into_iter(self) -> Self::IntoIter {
        self.operations.into_iter()
    }
}

impl<'a> IntoIterator for &'a SearchOperations {
    type Item = &'a OperationDescriptor;
    type IntoIter = std::slice::Iter<'a, OperationDescriptor>;

    fn into_iter(self) -> Self::IntoIter {
        self.operations.iter()
    }
}

impl<'t> Resolver<'t> {
    /// Build a single-item read of `entity` at `level`.
    pub fn to_query(
        &self,
        operation_name: &str,
        input_type: Option<&str>,
        entity: &str,
        level: Level,
    ) -> Result<OperationDescriptor, ShapeError> {
        self.describe(OperationKind::Query, operation_name, input_type, Some((entity, level)))
    }

    /// Build the find-many shapes for `entity`: one descriptor per level,
    /// in `list`, `nav`, `full` order. The caller picks the level it needs
    /// with [`SearchOperations::level`].
    ///
    /// Fails as soon as any level fails to resolve. Use
    /// [`Resolver::to_search_at`] to build a single level without touching
    /// the others.
    pub fn to_search(
        &self,
        operation_name: &str,
        input_type: &str,
        entity: &str,
    ) -> Result<SearchOperations, ShapeError> {
        let operations = Level::ALL
            .into_iter()
            .map(|level| self.to_search_at(operation_name, input_type, entity, level))
            .collect::<Result<Vec<_>, _>>()?;
        Ok(SearchOperations { operations })
    }

    /// Build the find-many shape for `entity` at one `level` only.
    pub fn to_search_at(
        &self,
        operation_name: &str,
        input_type: &str,
        entity: &str,
        level: Level,
    ) -> Result<OperationDescriptor, ShapeError> {
        self.describe(
            OperationKind::Search,
            operation_name,
            Some(input_type),
            Some((entity, level)),
        )
    }

    /// Build a write. `payload` is `None` for mutations that return no
    /// entity (signing out, for instance).
    pub fn to_mutation(
        &self,
        operation_name: &str,
        input_type: Option<&str>,
        payload: Option<(&str, Level)>,
    ) -> Result<OperationDescriptor, ShapeError> {
        self.describe(OperationKind::Mutation, operation_name, input_type, payload)
    }

    fn describe(
        &self,
        kind: OperationKind,
        operation_name: &str,
        input_type: Option<&str>,
        payload: Option<(&str, Level)>,
    ) -> Result<OperationDescriptor, ShapeError> {
        let (root_type, level, selection) = match payload {
            Some((entity, level)) => {
                let definition = self.table().get(entity)?;
                let selection = self.resolve_definition(definition, level, &[])?;
                (
                    Some(definition.wire_type().to_string()),
                    Some(level),
                    Some(selection),
                )
            }
            None => (None, None, None),
        };
        tracing::debug!(
            operation = operation_name,
            kind = ?kind,
            root_type = root_type.as_deref().unwrap_or("-"),
            "built operation descriptor"
        );
        Ok(OperationDescriptor {
            kind,
            operation_name: operation_name.to_string(),
            input_type: input_type.map(str::to_string),
            root_type,
            level,
            selection,
        })
    }
}
