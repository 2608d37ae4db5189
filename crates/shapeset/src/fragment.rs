//! Per-field-map fragment tables (`__define` / `__use`).
//!
//! A field map may declare numbered fragments that several of its fields or
//! union branches share. Each fragment is resolved the first time it is
//! used and reused for the rest of that field map's resolution only; the
//! memo never outlives the map being expanded.

use crate::error::ShapeError;
use crate::field_spec::{FieldMap, FragmentIndex};
use crate::resolver::Resolver;
use crate::selection::SelectionNode;
use std::collections::HashMap;

pub(crate) struct FragmentTable<'d> {
    owner: Option<&'d FieldMap>,
    resolved: HashMap<FragmentIndex, SelectionNode>,
}

impl<'d> FragmentTable<'d> {
    pub(crate) fn new(owner: Option<&'d FieldMap>) -> Self {
        Self {
            owner,
            resolved: HashMap::new(),
        }
    }

    /// Resolve fragment `index`, reusing an earlier result from this table.
    pub(crate) fn resolve(
        &mut self,
        resolver: &Resolver<'_>,
        index: FragmentIndex,
        entity: &str,
        path: &[String],
    ) -> Result<SelectionNode, ShapeError> {
        if let Some(node) = self.resolved.get(&index) {
            tracing::trace!(entity, index, "reusing fragment");
            return Ok(node.clone());
        }
        let reference = self
            .owner
            .and_then(|map| map.definition(index))
            .ok_or_else(|| ShapeError::DanglingFragmentReference {
                entity: entity.to_string(),
                path: path.to_vec(),
                index,
            })?;
        let node = resolver.resolve_reference(reference)?;
        self.resolved.insert(index, node.clone());
        Ok(node)
    }
}
