// crates/pplx-rs/src/lib.rs

#![doc = "Entity tree, attribute serializer and PPLX document codec for utility-pole load models."]
#![doc = ""]
#![doc = "The crate provides:"]
#![doc = "- `EntityTree`: an arena of typed entities with child-legality enforcement."]
#![doc = "- `save_document`: serializing a tree into the PPLX XML dialect."]
#![doc = "- `load_document_from_str`: rebuilding a tree from a PPLX document."]
#![doc = "- `ValueTable`: the compact `label;pos,val;` curve codec."]

// --- Crate Modules ---

mod attribute;
mod builder;
mod entity;
mod enums;
mod error;
pub mod model;
mod parser;
mod provenance;
mod registry;
mod tree;
mod types;
mod value_table;

// --- Public API Re-exports ---

pub use attribute::{
    AttributeDef, AttributeDescriptor, AttributeField, AttributeKind, AttributeValue,
    TYPE_BOOLEAN, TYPE_DOUBLE, TYPE_INT32, TYPE_STRING, display_name,
};
pub use builder::{
    attribute_records, save_document, save_document_to_string, save_document_with,
    write_document, write_node,
};
pub use entity::{Entity, Schema};
pub use enums::{DisplayEnum, EnumDisplayRegistry};
pub use error::{AttributeError, PplxError, StructuralError};
pub use parser::{load_document, load_document_from_str};
pub use provenance::{ProvenanceSource, SystemProvenance};
pub use registry::{Constructor, EntityKind, EntityRegistry};
pub use tree::{EntityId, EntityTree, NodeId};
pub use types::{
    ATTRIBUTES_ELEMENT, CHILDREN_ELEMENT, LoadedDocument, Provenance, ROOT_ELEMENT, ReadOptions,
    UnknownTagPolicy, VALUE_ELEMENT, ValueRecord, WriteOptions,
};
pub use value_table::ValueTable;
