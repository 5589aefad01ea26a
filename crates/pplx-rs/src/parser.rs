// crates/pplx-rs/src/parser.rs

//! Reads PPLX documents back into an `EntityTree`.
//!
//! This is the dual of `builder`: each node element is materialized through
//! the `EntityRegistry`, its `VALUE` records are applied over the type's
//! defaults, and every child is re-attached with the same legality-checked
//! `add_child` used when authoring, so a structurally invalid file is rejected.

use crate::attribute::AttributeValue;
use crate::error::{AttributeError, PplxError};
use crate::registry::EntityRegistry;
use crate::tree::{EntityTree, NodeId};
use crate::types::{
    ATTR_DATE, ATTR_USER, ATTR_WORKSTATION, ATTRIBUTES_ELEMENT, CHILDREN_ELEMENT, LoadedDocument,
    Provenance, ROOT_ELEMENT, ReadOptions, UnknownTagPolicy, VALUE_ELEMENT,
};
use log::{info, trace, warn};
use quick_xml::Reader;
use quick_xml::escape::unescape;
use quick_xml::events::attributes::Attribute;
use quick_xml::events::{BytesStart, Event};
use std::fs;
use std::path::Path;

/// Loads a document from `path`.
pub fn load_document(
    path: impl AsRef<Path>,
    options: &ReadOptions,
) -> Result<LoadedDocument, PplxError> {
    let path = path.as_ref();
    let xml_content = fs::read_to_string(path)?;
    let document = load_document_from_str(&xml_content, options)?;
    info!(
        "Loaded {} node(s) from {}",
        document.tree.len(),
        path.display()
    );
    Ok(document)
}

/// Parses a complete PPLX document from a string slice.
///
/// # Errors
/// Returns a `PplxError` if the XML is malformed, the `PPL` wrapper or root
/// node is missing, a tag is unknown (under `UnknownTagPolicy::Abort`), a child
/// is not legal for its parent, or an attribute is invalid during a strict read.
pub fn load_document_from_str(
    xml_content: &str,
    options: &ReadOptions,
) -> Result<LoadedDocument, PplxError> {
    let mut reader = Reader::from_str(xml_content);
    reader.config_mut().trim_text(true);

    // 1. Find the `PPL` wrapper and its provenance.
    let provenance = loop {
        match reader.read_event()? {
            Event::Start(e) if e.name().as_ref() == ROOT_ELEMENT.as_bytes() => {
                break read_provenance(&e)?;
            }
            Event::Empty(e) if e.name().as_ref() == ROOT_ELEMENT.as_bytes() => {
                return Err(PplxError::MissingElement {
                    element: "root node",
                });
            }
            Event::Start(e) | Event::Empty(e) => {
                return Err(PplxError::MalformedDocument(format!(
                    "expected <{}> root element, found <{}>",
                    ROOT_ELEMENT,
                    element_name(&e)?
                )));
            }
            Event::Eof => {
                return Err(PplxError::MissingElement {
                    element: ROOT_ELEMENT,
                });
            }
            _ => {}
        }
    };

    // 2. Exactly one node element below the wrapper.
    let mut tree: Option<EntityTree> = None;
    loop {
        let (start, has_body) = match reader.read_event()? {
            Event::Start(e) => (e, true),
            Event::Empty(e) => (e, false),
            Event::End(_) => break,
            Event::Eof => {
                return Err(PplxError::MalformedDocument(format!(
                    "unexpected end of input inside <{}>",
                    ROOT_ELEMENT
                )));
            }
            _ => continue,
        };

        if tree.is_some() {
            return Err(PplxError::MalformedDocument(
                "more than one root node".to_string(),
            ));
        }
        let tag = element_name(&start)?;
        // An unknown root cannot be skipped: there would be nothing to return.
        let entity = EntityRegistry::global()
            .build(&tag)
            .ok_or_else(|| PplxError::UnknownTag(tag.clone()))?;
        let mut root_tree = EntityTree::with_root(entity);
        if has_body {
            let root = root_tree.root();
            read_node_body(&mut reader, &mut root_tree, root, options)?;
        }
        tree = Some(root_tree);
    }

    let tree = tree.ok_or(PplxError::MissingElement {
        element: "root node",
    })?;
    Ok(LoadedDocument { tree, provenance })
}

/// Reads the content of a node element up to and including its end tag.
fn read_node_body(
    reader: &mut Reader<&[u8]>,
    tree: &mut EntityTree,
    id: NodeId,
    options: &ReadOptions,
) -> Result<(), PplxError> {
    loop {
        match reader.read_event()? {
            Event::Start(e) if e.name().as_ref() == ATTRIBUTES_ELEMENT.as_bytes() => {
                read_attributes(reader, tree, id, options)?;
            }
            Event::Start(e) if e.name().as_ref() == CHILDREN_ELEMENT.as_bytes() => {
                read_children(reader, tree, id, options)?;
            }
            Event::Start(e) => {
                warn!(
                    "Skipping unexpected element <{}> inside a node",
                    element_name(&e)?
                );
                reader.read_to_end(e.name())?;
            }
            Event::End(_) => return Ok(()),
            Event::Eof => {
                return Err(PplxError::MalformedDocument(
                    "unexpected end of input inside a node element".to_string(),
                ));
            }
            _ => {}
        }
    }
}

/// Applies every `VALUE` record of an `ATTRIBUTES` block.
fn read_attributes(
    reader: &mut Reader<&[u8]>,
    tree: &mut EntityTree,
    id: NodeId,
    options: &ReadOptions,
) -> Result<(), PplxError> {
    loop {
        match reader.read_event()? {
            Event::Start(e) if e.name().as_ref() == VALUE_ELEMENT.as_bytes() => {
                let (name, type_name) = value_header(&e)?;
                let raw = reader.read_text(e.name())?;
                let text = unescape(&raw)?;
                apply_value(tree, id, &name, &type_name, &text, options)?;
            }
            Event::Empty(e) if e.name().as_ref() == VALUE_ELEMENT.as_bytes() => {
                let (name, type_name) = value_header(&e)?;
                apply_value(tree, id, &name, &type_name, "", options)?;
            }
            Event::Start(e) => {
                warn!(
                    "Skipping unexpected element <{}> in {}",
                    element_name(&e)?,
                    ATTRIBUTES_ELEMENT
                );
                reader.read_to_end(e.name())?;
            }
            Event::End(_) => return Ok(()),
            Event::Eof => {
                return Err(PplxError::MalformedDocument(format!(
                    "unexpected end of input inside <{}>",
                    ATTRIBUTES_ELEMENT
                )));
            }
            _ => {}
        }
    }
}

/// Materializes and attaches every node element of a `PPLChildElements` block.
fn read_children(
    reader: &mut Reader<&[u8]>,
    tree: &mut EntityTree,
    parent: NodeId,
    options: &ReadOptions,
) -> Result<(), PplxError> {
    loop {
        let (start, has_body) = match reader.read_event()? {
            Event::Start(e) => (e, true),
            Event::Empty(e) => (e, false),
            Event::End(_) => return Ok(()),
            Event::Eof => {
                return Err(PplxError::MalformedDocument(format!(
                    "unexpected end of input inside <{}>",
                    CHILDREN_ELEMENT
                )));
            }
            _ => continue,
        };

        let tag = element_name(&start)?;
        let Some(entity) = EntityRegistry::global().build(&tag) else {
            match options.unknown_tags {
                UnknownTagPolicy::Abort => return Err(PplxError::UnknownTag(tag)),
                UnknownTagPolicy::Skip => {
                    warn!("Skipping unknown element <{}> and its subtree", tag);
                    if has_body {
                        reader.read_to_end(start.name())?;
                    }
                    continue;
                }
            }
        };

        let child = tree.insert_boxed(entity);
        tree.add_child(parent, child)?;
        if has_body {
            read_node_body(reader, tree, child, options)?;
        }
    }
}

/// Assigns one `VALUE` over the node's current (default) value.
fn apply_value(
    tree: &mut EntityTree,
    id: NodeId,
    name: &str,
    type_name: &str,
    text: &str,
    options: &ReadOptions,
) -> Result<(), PplxError> {
    let Some(entity) = tree.entity_mut(id) else {
        return Ok(());
    };
    let tag = entity.xml_key();

    let result = match entity.find_attribute(name) {
        Some(index) => entity
            .attribute_def(index)
            .ok_or_else(|| AttributeError::NoSuchAttribute(name.to_owned()))
            .and_then(|def| AttributeValue::parse(def.kind, type_name, text))
            .and_then(|value| entity.set_attribute(index, value)),
        None => Err(AttributeError::NoSuchAttribute(name.to_owned())),
    };

    match result {
        Ok(()) => {
            trace!("{}: {} = {:?} ({})", tag, name, text, type_name);
            Ok(())
        }
        Err(error) if options.strict_attributes => Err(PplxError::InvalidAttribute {
            tag,
            name: name.to_owned(),
            error,
        }),
        Err(error) => {
            warn!("Ignoring attribute '{}' on {}: {}", name, tag, error);
            Ok(())
        }
    }
}

fn read_provenance(start: &BytesStart) -> Result<Provenance, PplxError> {
    let mut provenance = Provenance::default();
    for attr in start.attributes() {
        let attr = attr?;
        let value = attribute_text(&attr)?;
        match attr.key.as_ref() {
            key if key == ATTR_DATE.as_bytes() => provenance.date = Some(value),
            key if key == ATTR_USER.as_bytes() => provenance.user = Some(value),
            key if key == ATTR_WORKSTATION.as_bytes() => provenance.workstation = Some(value),
            _ => {}
        }
    }
    Ok(provenance)
}

/// Extracts `NAME` (required) and `TYPE` (defaults to `String`) of a `VALUE`.
fn value_header(start: &BytesStart) -> Result<(String, String), PplxError> {
    let mut name = None;
    let mut type_name = None;
    for attr in start.attributes() {
        let attr = attr?;
        match attr.key.as_ref() {
            b"NAME" => name = Some(attribute_text(&attr)?),
            b"TYPE" => type_name = Some(attribute_text(&attr)?),
            _ => {}
        }
    }
    let name = name.ok_or_else(|| {
        PplxError::MalformedDocument(format!("<{}> without a NAME attribute", VALUE_ELEMENT))
    })?;
    Ok((
        name,
        type_name.unwrap_or_else(|| crate::attribute::TYPE_STRING.to_owned()),
    ))
}

fn attribute_text(attr: &Attribute) -> Result<String, PplxError> {
    let raw = std::str::from_utf8(&attr.value)?;
    Ok(unescape(raw)?.into_owned())
}

fn element_name(start: &BytesStart) -> Result<String, PplxError> {
    Ok(std::str::from_utf8(start.name().as_ref())?.to_owned())
}
