//! Resolved selection trees.
//!
//! A [`SelectionNode`] is the concrete field tree for one (entity, level)
//! resolution. It carries no formatting: rendering it into a request
//! document is left to whatever wire serializer consumes it.
//!
//! Serialized as JSON, leaves become `true`, nested objects become objects,
//! and union fields become a map keyed `"... on TypeName"`:
//!
//! ```json
//! { "id": true, "owner": { "... on User": { "id": true } } }
//! ```

use indexmap::IndexMap;
use serde::ser::{Serialize, SerializeMap, Serializer};

/// The resolved selection for one field.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Selection {
    Leaf,
    Object(SelectionNode),
    /// One sub-selection per concrete type, keyed by type name.
    Union(IndexMap<String, SelectionNode>),
}

/// An ordered field-name → [`Selection`] tree.
///
/// Equality is structural and ignores field order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SelectionNode {
    fields: IndexMap<String, Selection>,
}

impl SelectionNode {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, name: impl Into<String>, selection: Selection) {
        self.fields.insert(name.into(), selection);
    }

    /// Remove a field, keeping the order of the rest.
    pub fn remove(&mut self, name: &str) -> Option<Selection> {
        self.fields.shift_remove(name)
    }

    pub fn get(&self, name: &str) -> Option<&Selection> {
        self.fields.get(name)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.fields.contains_key(name)
    }

    /// The nested node of an object field.
    pub fn child(&self, name: &str) -> Option<&SelectionNode> {
        match self.fields.get(name) {
            Some(Selection::Object(node)) => Some(node),
            _ => None,
        }
    }

    /// The per-type nodes of a union field.
    pub fn variants(&self, name: &str) -> Option<&IndexMap<String, SelectionNode>> {
        match self.fields.get(name) {
            Some(Selection::Union(variants)) => Some(variants),
            _ => None,
        }
    }

    /// Walk a dotted path of field names. Below a union field the next
    /// segment is written `Type:field`.
    ///
    /// ```
    /// use shapeset::{Selection, SelectionNode};
    ///
    /// let mut org = SelectionNode::new();
    /// org.insert("id", Selection::Leaf);
    /// let mut role = SelectionNode::new();
    /// role.insert("organization", Selection::Object(org));
    ///
    /// assert_eq!(role.at("organization.id"), Some(&Selection::Leaf));
    /// assert_eq!(role.at("organization.roles"), None);
    /// ```
    pub fn at(&self, path: &str) -> Option<&Selection> {
        let mut segments = path.split('.');
        let mut current = self.fields.get(segments.next()?)?;
        for segment in segments {
            current = match current {
                Selection::Leaf => return None,
                Selection::Object(node) => node.fields.get(segment)?,
                Selection::Union(variants) => {
                    let (variant, field) = segment.split_once(':')?;
                    variants.get(variant)?.fields.get(field)?
                }
            };
        }
        Some(current)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &Selection)> {
        self.fields.iter().map(|(k, v)| (k.as_str(), v))
    }

    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.fields.keys().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.fields.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    /// Number of leaf fields in the whole tree, union branches included.
    pub fn leaf_count(&self) -> usize {
        self.fields
            .values()
            .map(|selection| match selection {
                Selection::Leaf => 1,
                Selection::Object(node) => node.leaf_count(),
                Selection::Union(variants) => variants.values().map(|n| n.leaf_count()).sum(),
            })
            .sum()
    }

    /// Nesting depth; a node with only leaves has depth 1, an empty node 0.
    pub fn depth(&self) -> usize {
        self.fields
            .values()
            .map(|selection| match selection {
                Selection::Leaf => 1,
                Selection::Object(node) => 1 + node.depth(),
                Selection::Union(variants) => {
                    1 + variants.values().map(|n| n.depth()).max().unwrap_or(0)
                }
            })
            .max()
            .unwrap_or(0)
    }
}

impl FromIterator<(String, Selection)> for SelectionNode {
    fn from_iter<T: IntoIterator<Item = (String, Selection)>>(iter: T) -> Self {
        Self {
            fields: iter.into_iter().collect(),
        }
    }
}

impl Serialize for SelectionNode {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.fields.len()))?;
        for (name, selection) in &self.fields {
            map.serialize_entry(name, selection)?;
        }
        map.end()
    }
}

impl Serialize for Selection {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            Selection::Leaf => serializer.serialize_bool(true),
            Selection::Object(node) => node.serialize(serializer),
            Selection::Union(variants) => {
                let mut map = serializer.serialize_map(Some(variants.len()))?;
                for (type_name, node) in variants {
                    map.serialize_entry(&format!("... on {}", type_name), node)?;
                }
                map.end()
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn leaves(names: &[&str]) -> SelectionNode {
        names
            .iter()
            .map(|n| (n.to_string(), Selection::Leaf))
            .collect()
    }

    #[test]
    fn serializes_leaves_objects_and_unions() {
        let mut node = leaves(&["id"]);
        node.insert("author", Selection::Object(leaves(&["id", "username"])));
        let mut variants = IndexMap::new();
        variants.insert("Api".to_string(), leaves(&["slug"]));
        variants.insert("Note".to_string(), leaves(&["title"]));
        node.insert("subject", Selection::Union(variants));

        let json = serde_json::to_value(&node).unwrap();
        assert_eq!(
            json,
            serde_json::json!({
                "id": true,
                "author": { "id": true, "username": true },
                "subject": {
                    "... on Api": { "slug": true },
                    "... on Note": { "title": true }
                }
            })
        );
    }

    #[test]
    fn empty_node_serializes_as_empty_object() {
        let json = serde_json::to_value(SelectionNode::new()).unwrap();
        assert_eq!(json, serde_json::json!({}));
    }

    #[test]
    fn equality_ignores_field_order() {
        assert_eq!(leaves(&["id", "tag"]), leaves(&["tag", "id"]));
        assert_ne!(leaves(&["id"]), leaves(&["id", "tag"]));
    }

    #[test]
    fn remove_keeps_remaining_order() {
        let mut node = leaves(&["a", "b", "c"]);
        assert_eq!(node.remove("b"), Some(Selection::Leaf));
        assert_eq!(node.names().collect::<Vec<_>>(), ["a", "c"]);
        assert_eq!(node.remove("missing"), None);
    }

    #[test]
    fn at_walks_through_unions_by_type_name() {
        let mut variants = IndexMap::new();
        variants.insert("User".to_string(), leaves(&["username"]));
        let mut node = SelectionNode::new();
        node.insert("owner", Selection::Union(variants));

        assert_eq!(node.at("owner.User:username"), Some(&Selection::Leaf));
        assert_eq!(node.at("owner.Organization:slug"), None);
        assert_eq!(node.at("owner.User:missing"), None);
    }

    #[test]
    fn leaf_count_and_depth() {
        let mut node = leaves(&["id", "name"]);
        node.insert("org", Selection::Object(leaves(&["id", "slug", "name"])));
        assert_eq!(node.leaf_count(), 5);
        assert_eq!(node.depth(), 2);
        assert_eq!(SelectionNode::new().depth(), 0);
    }
}
