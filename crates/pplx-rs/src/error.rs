// crates/pplx-rs/src/error.rs

use crate::attribute::AttributeKind;
use crate::tree::NodeId;
use quick_xml::Error as XmlError;
use quick_xml::errors::serialize::SeError;
use quick_xml::escape::EscapeError;
use quick_xml::events::attributes::AttrError;
use std::fmt;
use std::io;
use std::str::Utf8Error;

/// A rejected tree mutation. The tree is left unchanged when one is returned.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StructuralError {
    /// The parent's type does not accept children of the candidate's type.
    IllegalChild {
        parent: &'static str,
        child: &'static str,
    },

    /// `remove_child` was given a node that is not in the parent's child list.
    NotAChild { parent: NodeId, child: NodeId },

    /// The candidate is already listed as a child of another node.
    AlreadyAttached { child: NodeId, parent: NodeId },

    /// Attaching would make a node its own ancestor.
    Cycle { parent: NodeId, child: NodeId },

    /// The tree root can never be attached below another node.
    RootAsChild,

    /// The id does not refer to a live node of this tree.
    UnknownNode(NodeId),
}

impl fmt::Display for StructuralError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::IllegalChild { parent, child } => {
                write!(f, "{} is not a legal child of {}", child, parent)
            }
            Self::NotAChild { parent, child } => {
                write!(f, "node {} is not a child of node {}", child, parent)
            }
            Self::AlreadyAttached { child, parent } => {
                write!(f, "node {} is already a child of node {}", child, parent)
            }
            Self::Cycle { parent, child } => write!(
                f,
                "attaching node {} below node {} would create a cycle",
                child, parent
            ),
            Self::RootAsChild => write!(f, "the tree root cannot be attached as a child"),
            Self::UnknownNode(id) => write!(f, "node {} does not exist in this tree", id),
        }
    }
}

impl std::error::Error for StructuralError {}

/// A failure reading or assigning a single attribute.
///
/// The serializer recovers from these locally by omitting the attribute.
#[derive(Debug, Clone, PartialEq)]
pub enum AttributeError {
    /// An optional attribute has no value yet.
    Unset,

    /// The value's variant does not match the attribute's declared kind.
    TypeMismatch { expected: AttributeKind },

    /// The text could not be parsed as the declared kind.
    Unparsable { kind: AttributeKind, text: String },

    /// The member (or display string) is not part of the enumerated type.
    UnknownMember {
        enum_type: &'static str,
        member: String,
    },

    /// The entity declares no attribute with this name or index.
    NoSuchAttribute(String),
}

impl fmt::Display for AttributeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Unset => write!(f, "attribute has no value"),
            Self::TypeMismatch { expected } => {
                write!(f, "value does not match declared kind {:?}", expected)
            }
            Self::Unparsable { kind, text } => {
                write!(f, "cannot parse {:?} as {:?}", text, kind)
            }
            Self::UnknownMember { enum_type, member } => {
                write!(f, "{:?} is not a member of {}", member, enum_type)
            }
            Self::NoSuchAttribute(name) => write!(f, "no attribute named {:?}", name),
        }
    }
}

impl std::error::Error for AttributeError {}

/// Errors that can occur while building, saving or loading a PPLX document.
#[derive(Debug)]
pub enum PplxError {
    /// A tree mutation was rejected.
    Structural(StructuralError),

    /// A node element's tag is not a registered entity type.
    UnknownTag(String),

    /// A `VALUE` could not be applied during a strict read.
    InvalidAttribute {
        tag: &'static str,
        name: String,
        error: AttributeError,
    },

    /// A required XML element was missing (e.g., the `PPL` wrapper).
    MissingElement { element: &'static str },

    /// The document does not have the expected PPLX shape.
    MalformedDocument(String),

    /// An error from the underlying file or sink.
    Io(io::Error),

    /// An error from the underlying `quick-xml` reader or writer.
    Xml(XmlError),

    /// An error from the `quick-xml` serde serializer.
    XmlSerializing(SeError),

    /// A malformed XML attribute.
    XmlAttribute(AttrError),

    /// A malformed escape sequence in text or attribute content.
    XmlEscape(EscapeError),

    /// Element names or attribute bytes were not valid UTF-8.
    Utf8(Utf8Error),
}

impl From<StructuralError> for PplxError {
    fn from(e: StructuralError) -> Self {
        PplxError::Structural(e)
    }
}

impl From<io::Error> for PplxError {
    fn from(e: io::Error) -> Self {
        PplxError::Io(e)
    }
}

impl From<XmlError> for PplxError {
    fn from(e: XmlError) -> Self {
        PplxError::Xml(e)
    }
}

impl From<SeError> for PplxError {
    fn from(e: SeError) -> Self {
        PplxError::XmlSerializing(e)
    }
}

impl From<AttrError> for PplxError {
    fn from(e: AttrError) -> Self {
        PplxError::XmlAttribute(e)
    }
}

impl From<EscapeError> for PplxError {
    fn from(e: EscapeError) -> Self {
        PplxError::XmlEscape(e)
    }
}

impl From<Utf8Error> for PplxError {
    fn from(e: Utf8Error) -> Self {
        PplxError::Utf8(e)
    }
}

impl fmt::Display for PplxError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PplxError::Structural(e) => write!(f, "Structural error: {}", e),
            PplxError::UnknownTag(tag) => write!(f, "Unknown entity tag: {}", tag),
            PplxError::InvalidAttribute { tag, name, error } => {
                write!(f, "Invalid attribute '{}' on {}: {}", name, tag, error)
            }
            PplxError::MissingElement { element } => {
                write!(f, "Missing required XML element: {}", element)
            }
            PplxError::MalformedDocument(msg) => write!(f, "Malformed PPLX document: {}", msg),
            PplxError::Io(e) => write!(f, "I/O error: {}", e),
            PplxError::Xml(e) => write!(f, "XML error: {}", e),
            PplxError::XmlSerializing(e) => write!(f, "XML serializing error: {}", e),
            PplxError::XmlAttribute(e) => write!(f, "XML attribute error: {}", e),
            PplxError::XmlEscape(e) => write!(f, "XML escape error: {}", e),
            PplxError::Utf8(e) => write!(f, "UTF-8 error: {}", e),
        }
    }
}

impl std::error::Error for PplxError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            PplxError::Structural(e) => Some(e),
            PplxError::InvalidAttribute { error, .. } => Some(error),
            PplxError::Io(e) => Some(e),
            PplxError::Xml(e) => Some(e),
            PplxError::XmlSerializing(e) => Some(e),
            PplxError::XmlAttribute(e) => Some(e),
            PplxError::XmlEscape(e) => Some(e),
            PplxError::Utf8(e) => Some(e),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::{AttributeError, PplxError, StructuralError};
    use crate::tree::NodeId;
    use std::error::Error;

    #[test]
    fn test_from_structural_error() {
        let err: PplxError = StructuralError::RootAsChild.into();
        assert!(matches!(
            err,
            PplxError::Structural(StructuralError::RootAsChild)
        ));
        assert!(err.source().is_some());
    }

    #[test]
    fn test_from_se_error() {
        let se_err = quick_xml::errors::serialize::SeError::Custom("test error".to_string());
        let err: PplxError = se_err.into();
        assert!(matches!(err, PplxError::XmlSerializing(_)));
    }

    #[test]
    fn test_from_io_error() {
        let io_err = std::io::Error::new(std::io::ErrorKind::PermissionDenied, "denied");
        let err: PplxError = io_err.into();
        assert!(matches!(err, PplxError::Io(_)));
        assert!(err.to_string().contains("denied"));
    }

    #[test]
    fn test_from_utf8_error() {
        let bytes = [0xffu8, 0xfe];
        let utf8_err = std::str::from_utf8(&bytes).unwrap_err();
        let err: PplxError = utf8_err.into();
        assert!(matches!(err, PplxError::Utf8(_)));
    }

    #[test]
    fn test_from_escape_error() {
        let escape_err = quick_xml::escape::unescape("&bogus;").unwrap_err();
        let err: PplxError = escape_err.into();
        assert!(matches!(err, PplxError::XmlEscape(_)));
    }

    #[test]
    fn test_structural_display_names_both_types() {
        let err = StructuralError::IllegalChild {
            parent: "Insulator",
            child: "WoodPole",
        };
        assert_eq!(err.to_string(), "WoodPole is not a legal child of Insulator");

        let err = StructuralError::NotAChild {
            parent: NodeId::from_index(0),
            child: NodeId::from_index(3),
        };
        assert_eq!(err.to_string(), "node #3 is not a child of node #0");
    }

    #[test]
    fn test_invalid_attribute_display() {
        let err = PplxError::InvalidAttribute {
            tag: "WoodPole",
            name: "Length".to_string(),
            error: AttributeError::Unset,
        };
        assert_eq!(
            err.to_string(),
            "Invalid attribute 'Length' on WoodPole: attribute has no value"
        );
    }
}
