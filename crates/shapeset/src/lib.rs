pub mod check;
pub mod entities;
pub mod error;
pub mod field_spec;
mod fragment;
pub mod operation;
pub mod resolver;
pub mod selection;
pub mod table;
mod union;

// Re-export key types at crate root for convenience.
pub use check::{CheckEntry, CheckReport, SelectionStats};
pub use error::ShapeError;
pub use field_spec::{
    EntityDefinition, EntityRef, FieldMap, FieldSpec, FragmentIndex, Level, Reference, UnionSpec,
    UnionTarget,
};
pub use operation::{OperationDescriptor, OperationKind, SearchOperations};
pub use resolver::{Resolver, ResolverOptions};
pub use selection::{Selection, SelectionNode};
pub use table::DefinitionTable;
