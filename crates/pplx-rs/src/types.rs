// crates/pplx-rs/src/types.rs

//! Public option structs and the data exchanged with the document codec.

use crate::tree::EntityTree;
use serde::Serialize;

// --- Document vocabulary ---

/// Root wrapper element of every document.
pub const ROOT_ELEMENT: &str = "PPL";
/// Block holding a node's `VALUE` records.
pub const ATTRIBUTES_ELEMENT: &str = "ATTRIBUTES";
/// One attribute record.
pub const VALUE_ELEMENT: &str = "VALUE";
/// Block holding a node's child elements.
pub const CHILDREN_ELEMENT: &str = "PPLChildElements";

pub const ATTR_DATE: &str = "DATE";
pub const ATTR_USER: &str = "USER";
pub const ATTR_WORKSTATION: &str = "WORKSTATION";

// --- Records ---

/// Represents `<VALUE NAME="..." TYPE="...">text</VALUE>`
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ValueRecord {
    #[serde(rename = "@NAME")]
    pub name: String,
    #[serde(rename = "@TYPE")]
    pub type_name: String,
    #[serde(rename = "$text")]
    pub value: String,
}

/// Advisory provenance stamped on the `PPL` element. Any field may be missing.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Provenance {
    pub date: Option<String>,
    pub user: Option<String>,
    pub workstation: Option<String>,
}

// --- Options ---

/// Controls how documents are written.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WriteOptions {
    /// Spaces per nesting level; `0` writes everything on one line.
    pub indent: usize,
    /// Whether to stamp `DATE`, `USER` and `WORKSTATION` on the root element.
    pub stamp_provenance: bool,
}

impl Default for WriteOptions {
    fn default() -> Self {
        Self {
            indent: 2,
            stamp_provenance: true,
        }
    }
}

/// What the reader does with a node element whose tag is not registered.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum UnknownTagPolicy {
    /// Fail the whole read with `PplxError::UnknownTag`.
    #[default]
    Abort,
    /// Skip the element and its subtree, logging a warning.
    Skip,
}

/// Controls how documents are read.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ReadOptions {
    pub unknown_tags: UnknownTagPolicy,
    /// Fail on `VALUE` records that name no declared attribute or cannot be
    /// parsed, instead of skipping them.
    pub strict_attributes: bool,
}

// --- Results ---

/// A document materialized by the reader.
#[derive(Debug)]
pub struct LoadedDocument {
    pub tree: EntityTree,
    pub provenance: Provenance,
}
