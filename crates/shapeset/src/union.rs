//! Union field resolution.
//!
//! A union field resolves to one sub-selection per concrete type named in
//! its [`UnionSpec`]. Every member appears in the output; a wire serializer
//! renders each as an inline fragment.

use crate::error::ShapeError;
use crate::field_spec::{FieldMap, UnionSpec, UnionTarget};
use crate::fragment::FragmentTable;
use crate::resolver::Resolver;
use crate::selection::SelectionNode;
use crate::table::child_path;
use indexmap::IndexMap;

impl<'t> Resolver<'t> {
    /// Resolve `union` on its own. Fragment members resolve against
    /// `owner`'s `__define` table; `entity` is only used in error reports.
    pub fn resolve_union(
        &self,
        entity: &str,
        union: &UnionSpec,
        owner: &FieldMap,
    ) -> Result<IndexMap<String, SelectionNode>, ShapeError> {
        let mut fragments = FragmentTable::new(Some(owner));
        self.expand_union(entity, union, &mut fragments, &[])
    }

    pub(crate) fn expand_union(
        &self,
        entity: &str,
        union: &UnionSpec,
        fragments: &mut FragmentTable<'_>,
        path: &[String],
    ) -> Result<IndexMap<String, SelectionNode>, ShapeError> {
        let mut variants = IndexMap::with_capacity(union.len());
        for (type_name, target) in union.iter() {
            let node = match target {
                UnionTarget::Reference(reference) => self.resolve_reference(reference)?,
                UnionTarget::Fragment(index) => {
                    fragments.resolve(self, *index, entity, &child_path(path, type_name))?
                }
            };
            variants.insert(type_name.to_string(), node);
        }
        Ok(variants)
    }
}
