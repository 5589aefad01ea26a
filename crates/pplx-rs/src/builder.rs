// crates/pplx-rs/src/builder.rs

//! Serializes an `EntityTree` into a PPLX document.
//!
//! Each node becomes an element named by its `xml_key()`, holding an
//! `ATTRIBUTES` block with one `VALUE` per readable attribute (declaration
//! order) followed by a `PPLChildElements` block with its children (insertion
//! order).

use crate::attribute::AttributeValue;
use crate::entity::Entity;
use crate::enums::EnumDisplayRegistry;
use crate::error::{PplxError, StructuralError};
use crate::provenance::{ProvenanceSource, SystemProvenance};
use crate::tree::{EntityTree, NodeId};
use crate::types::{
    ATTR_DATE, ATTR_USER, ATTR_WORKSTATION, ATTRIBUTES_ELEMENT, CHILDREN_ELEMENT, ROOT_ELEMENT,
    VALUE_ELEMENT, ValueRecord, WriteOptions,
};
use log::{debug, info};
use quick_xml::Writer;
use quick_xml::events::{BytesDecl, BytesEnd, BytesStart, Event};
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

/// Saves `tree` to `path` with default options and system provenance.
///
/// The file handle is released on every exit path. A failure while writing
/// leaves a partial file behind.
pub fn save_document(path: impl AsRef<Path>, tree: &EntityTree) -> Result<(), PplxError> {
    save_document_with(path, tree, &WriteOptions::default(), &SystemProvenance)
}

/// Saves `tree` to `path` using explicit options and provenance source.
pub fn save_document_with(
    path: impl AsRef<Path>,
    tree: &EntityTree,
    options: &WriteOptions,
    provenance: &dyn ProvenanceSource,
) -> Result<(), PplxError> {
    let path = path.as_ref();
    let file = File::create(path)?;
    let sink = write_document(BufWriter::new(file), tree, options, provenance)?;
    // Flush explicitly so buffered write errors are not lost on drop.
    sink.into_inner().map_err(|e| e.into_error())?.sync_all()?;
    info!("Saved document to {}", path.display());
    Ok(())
}

/// Serializes `tree` into an in-memory string.
pub fn save_document_to_string(
    tree: &EntityTree,
    options: &WriteOptions,
    provenance: &dyn ProvenanceSource,
) -> Result<String, PplxError> {
    let buffer = write_document(Vec::new(), tree, options, provenance)?;
    String::from_utf8(buffer).map_err(|e| PplxError::Utf8(e.utf8_error()))
}

/// Writes a complete document (declaration, `PPL` wrapper, root node) to `sink`
/// and hands the sink back.
pub fn write_document<W: Write>(
    sink: W,
    tree: &EntityTree,
    options: &WriteOptions,
    provenance: &dyn ProvenanceSource,
) -> Result<W, PplxError> {
    let mut writer = if options.indent > 0 {
        Writer::new_with_indent(sink, b' ', options.indent)
    } else {
        Writer::new(sink)
    };

    writer.write_event(Event::Decl(BytesDecl::new("1.0", Some("utf-8"), None)))?;

    let mut wrapper = BytesStart::new(ROOT_ELEMENT);
    if options.stamp_provenance {
        let stamps = [
            (ATTR_DATE, provenance.date()),
            (ATTR_USER, provenance.user()),
            (ATTR_WORKSTATION, provenance.workstation()),
        ];
        for (key, value) in stamps {
            match value {
                Some(value) => wrapper.push_attribute((key, value.as_str())),
                None => debug!("Provenance {} unavailable, omitting", key),
            }
        }
    }
    writer.write_event(Event::Start(wrapper))?;
    write_node(&mut writer, tree, tree.root())?;
    writer.write_event(Event::End(BytesEnd::new(ROOT_ELEMENT)))?;

    Ok(writer.into_inner())
}

/// Writes `id` and its subtree, depth-first.
pub fn write_node<W: Write>(
    writer: &mut Writer<W>,
    tree: &EntityTree,
    id: NodeId,
) -> Result<(), PplxError> {
    let entity = tree.entity(id).ok_or(StructuralError::UnknownNode(id))?;
    let tag = entity.xml_key();

    writer.write_event(Event::Start(BytesStart::new(tag)))?;

    writer.write_event(Event::Start(BytesStart::new(ATTRIBUTES_ELEMENT)))?;
    for record in attribute_records(entity) {
        writer.write_serializable(VALUE_ELEMENT, &record)?;
    }
    writer.write_event(Event::End(BytesEnd::new(ATTRIBUTES_ELEMENT)))?;

    writer.write_event(Event::Start(BytesStart::new(CHILDREN_ELEMENT)))?;
    for &child in tree.children(id) {
        write_node(writer, tree, child)?;
    }
    writer.write_event(Event::End(BytesEnd::new(CHILDREN_ELEMENT)))?;

    writer.write_event(Event::End(BytesEnd::new(tag)))?;
    Ok(())
}

/// Builds the `VALUE` records of one entity in declaration order.
///
/// Attributes whose value cannot be read (e.g. an unset optional) are skipped;
/// the remaining records are still produced.
pub fn attribute_records(entity: &dyn Entity) -> Vec<ValueRecord> {
    let registry = EnumDisplayRegistry::global();
    let mut records = Vec::with_capacity(entity.attribute_count());

    for index in 0..entity.attribute_count() {
        let Some(def) = entity.attribute_def(index) else {
            continue;
        };
        let value = match entity.get_attribute(index) {
            Ok(value) => value,
            Err(e) => {
                debug!(
                    "Omitting attribute '{}' of {}: {}",
                    def.ident,
                    entity.xml_key(),
                    e
                );
                continue;
            }
        };

        let text = match &value {
            AttributeValue::Enum { enum_type, member } => {
                registry.display_or_empty(enum_type, member).to_owned()
            }
            AttributeValue::Table(table) => table.encode(),
            other => other.to_string(),
        };

        records.push(ValueRecord {
            name: def.display_name(),
            type_name: def.kind.type_name().to_owned(),
            value: text,
        });
    }

    records
}
