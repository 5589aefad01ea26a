// crates/pplx-rs/src/attribute.rs

//! Typed attribute descriptors and their type-erased values.
//!
//! Every concrete entity type declares a static table of `AttributeDescriptor`s
//! (identifier, kind, typed getter and setter). The serializer and the reader
//! walk these tables instead of inspecting types at runtime.

use crate::enums::EnumDisplayRegistry;
use crate::error::AttributeError;
use crate::value_table::ValueTable;
use std::fmt;

/// `TYPE` written for text, resolved enum and table values.
pub const TYPE_STRING: &str = "String";
/// `TYPE` written for floating point values.
pub const TYPE_DOUBLE: &str = "Double";
/// `TYPE` written for integer values.
pub const TYPE_INT32: &str = "Int32";
/// `TYPE` written for boolean values.
pub const TYPE_BOOLEAN: &str = "Boolean";

/// The declared kind of an attribute.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AttributeKind {
    String,
    Double,
    Int32,
    Boolean,
    /// One of the enumerated attribute types, identified by its type name.
    Enum(&'static str),
    /// A `ValueTable` curve.
    Table,
}

impl AttributeKind {
    /// The `TYPE` string written for values of this kind.
    ///
    /// Enumerated and table values are written as resolved text.
    pub fn type_name(self) -> &'static str {
        match self {
            AttributeKind::String | AttributeKind::Enum(_) | AttributeKind::Table => TYPE_STRING,
            AttributeKind::Double => TYPE_DOUBLE,
            AttributeKind::Int32 => TYPE_INT32,
            AttributeKind::Boolean => TYPE_BOOLEAN,
        }
    }

    pub fn is_enum(self) -> bool {
        matches!(self, AttributeKind::Enum(_))
    }
}

/// The current value of one attribute, with its concrete type erased.
#[derive(Debug, Clone, PartialEq)]
pub enum AttributeValue {
    String(String),
    Double(f64),
    Int32(i32),
    Boolean(bool),
    Enum {
        enum_type: &'static str,
        member: String,
    },
    Table(ValueTable),
}

impl AttributeValue {
    /// Parses `text` as a value of `kind`.
    ///
    /// `type_name` is the `TYPE` recorded next to the text. For enumerated kinds
    /// a `String` type means the text is a display string, which is mapped back
    /// to its member; any other type is taken as the member name itself.
    pub fn parse(
        kind: AttributeKind,
        type_name: &str,
        text: &str,
    ) -> Result<AttributeValue, AttributeError> {
        let unparsable = || AttributeError::Unparsable {
            kind,
            text: text.to_owned(),
        };

        match kind {
            AttributeKind::String => Ok(AttributeValue::String(text.to_owned())),
            AttributeKind::Double => text
                .trim()
                .parse::<f64>()
                .map(AttributeValue::Double)
                .map_err(|_| unparsable()),
            AttributeKind::Int32 => text
                .trim()
                .parse::<i32>()
                .map(AttributeValue::Int32)
                .map_err(|_| unparsable()),
            AttributeKind::Boolean => parse_bool(text)
                .map(AttributeValue::Boolean)
                .ok_or_else(unparsable),
            AttributeKind::Table => Ok(AttributeValue::Table(ValueTable::decode(text))),
            AttributeKind::Enum(enum_type) => {
                let registry = EnumDisplayRegistry::global();
                let member = if type_name == TYPE_STRING {
                    registry
                        .member_for_display(enum_type, text)
                        .or_else(|| registry.lookup(enum_type, text).map(|_| text))
                } else {
                    registry.lookup(enum_type, text).map(|_| text)
                };
                member
                    .map(|member| AttributeValue::Enum {
                        enum_type,
                        member: member.to_owned(),
                    })
                    .ok_or_else(|| AttributeError::UnknownMember {
                        enum_type,
                        member: text.to_owned(),
                    })
            }
        }
    }
}

/// Default scalar text. Enumerated values render as their member name and
/// tables in their encoded form.
impl fmt::Display for AttributeValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AttributeValue::String(s) => f.write_str(s),
            AttributeValue::Double(v) => write!(f, "{}", v),
            AttributeValue::Int32(v) => write!(f, "{}", v),
            AttributeValue::Boolean(true) => f.write_str("True"),
            AttributeValue::Boolean(false) => f.write_str("False"),
            AttributeValue::Enum { member, .. } => f.write_str(member),
            AttributeValue::Table(table) => write!(f, "{}", table),
        }
    }
}

fn parse_bool(text: &str) -> Option<bool> {
    let text = text.trim();
    if text.eq_ignore_ascii_case("true") || text == "1" {
        Some(true)
    } else if text.eq_ignore_ascii_case("false") || text == "0" {
        Some(false)
    } else {
        None
    }
}

/// Replaces internal `_` separators of an identifier with spaces.
pub fn display_name(ident: &str) -> String {
    ident.replace('_', " ")
}

/// A Rust field type that can be held in an attribute slot.
pub trait AttributeField: Sized {
    const KIND: AttributeKind;

    fn to_attribute(&self) -> Result<AttributeValue, AttributeError>;

    fn from_attribute(value: AttributeValue) -> Result<Self, AttributeError>;
}

macro_rules! scalar_field {
    ($ty:ty, $kind:ident) => {
        impl AttributeField for $ty {
            const KIND: AttributeKind = AttributeKind::$kind;

            fn to_attribute(&self) -> Result<AttributeValue, AttributeError> {
                Ok(AttributeValue::$kind(self.clone()))
            }

            fn from_attribute(value: AttributeValue) -> Result<Self, AttributeError> {
                match value {
                    AttributeValue::$kind(v) => Ok(v),
                    _ => Err(AttributeError::TypeMismatch {
                        expected: Self::KIND,
                    }),
                }
            }
        }
    };
}

scalar_field!(String, String);
scalar_field!(f64, Double);
scalar_field!(i32, Int32);
scalar_field!(bool, Boolean);
scalar_field!(ValueTable, Table);

/// Optional attributes fail to read while unset, so the serializer omits them.
impl<T: AttributeField> AttributeField for Option<T> {
    const KIND: AttributeKind = T::KIND;

    fn to_attribute(&self) -> Result<AttributeValue, AttributeError> {
        match self {
            Some(v) => v.to_attribute(),
            None => Err(AttributeError::Unset),
        }
    }

    fn from_attribute(value: AttributeValue) -> Result<Self, AttributeError> {
        T::from_attribute(value).map(Some)
    }
}

/// The type-independent part of a descriptor.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AttributeDef {
    /// Identifier with `_` separators, e.g. `Pole_Number`.
    pub ident: &'static str,
    pub kind: AttributeKind,
}

impl AttributeDef {
    /// The `NAME` written for this attribute, e.g. `Pole Number`.
    pub fn display_name(&self) -> String {
        display_name(self.ident)
    }
}

/// One row of a concrete type's static attribute table.
pub struct AttributeDescriptor<T> {
    pub ident: &'static str,
    pub kind: AttributeKind,
    pub get: fn(&T) -> Result<AttributeValue, AttributeError>,
    pub set: fn(&mut T, AttributeValue) -> Result<(), AttributeError>,
}

impl<T> AttributeDescriptor<T> {
    pub fn def(&self) -> AttributeDef {
        AttributeDef {
            ident: self.ident,
            kind: self.kind,
        }
    }
}

impl<T> fmt::Debug for AttributeDescriptor<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("AttributeDescriptor")
            .field("ident", &self.ident)
            .field("kind", &self.kind)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::enums::{CrossarmMaterial, WoodSpecies};

    #[test]
    fn test_display_name_replaces_separators() {
        assert_eq!(display_name("Pole_Number"), "Pole Number");
        assert_eq!(display_name("Length"), "Length");
        assert_eq!(
            display_name("Ground_Line_Circumference"),
            "Ground Line Circumference"
        );
    }

    #[test]
    fn test_scalar_text() {
        assert_eq!(AttributeValue::Double(480.0).to_string(), "480");
        assert_eq!(AttributeValue::Double(0.25).to_string(), "0.25");
        assert_eq!(AttributeValue::Int32(-3).to_string(), "-3");
        assert_eq!(AttributeValue::Boolean(true).to_string(), "True");
        assert_eq!(AttributeValue::Boolean(false).to_string(), "False");
    }

    #[test]
    fn test_parse_scalars() {
        assert_eq!(
            AttributeValue::parse(AttributeKind::Double, TYPE_DOUBLE, " 12.5 "),
            Ok(AttributeValue::Double(12.5))
        );
        assert_eq!(
            AttributeValue::parse(AttributeKind::Boolean, TYPE_BOOLEAN, "False"),
            Ok(AttributeValue::Boolean(false))
        );
        assert_eq!(
            AttributeValue::parse(AttributeKind::Int32, TYPE_INT32, "1998"),
            Ok(AttributeValue::Int32(1998))
        );
        assert!(matches!(
            AttributeValue::parse(AttributeKind::Double, TYPE_DOUBLE, "tall"),
            Err(AttributeError::Unparsable { .. })
        ));
        assert!(matches!(
            AttributeValue::parse(AttributeKind::Boolean, TYPE_BOOLEAN, "maybe"),
            Err(AttributeError::Unparsable { .. })
        ));
    }

    #[test]
    fn test_parse_enum_from_display_and_member() {
        let kind = <WoodSpecies as AttributeField>::KIND;
        let from_display = AttributeValue::parse(kind, TYPE_STRING, "Douglas Fir");
        assert_eq!(
            from_display,
            Ok(AttributeValue::Enum {
                enum_type: "WoodSpecies",
                member: "DouglasFir".to_string(),
            })
        );

        let from_member = AttributeValue::parse(kind, "WoodSpecies", "DouglasFir");
        assert_eq!(from_display, from_member);

        assert!(matches!(
            AttributeValue::parse(kind, TYPE_STRING, "Balsa"),
            Err(AttributeError::UnknownMember { .. })
        ));
    }

    #[test]
    fn test_enum_display_is_resolved_per_type() {
        // "Fiberglass" is a crossarm display string; guys spell it differently.
        let kind = <CrossarmMaterial as AttributeField>::KIND;
        let value = AttributeValue::parse(kind, TYPE_STRING, "Fiberglass").unwrap();
        assert_eq!(
            CrossarmMaterial::from_attribute(value),
            Ok(CrossarmMaterial::Fiberglass)
        );
    }

    #[test]
    fn test_option_field_unset_fails_to_read() {
        let unset: Option<f64> = None;
        assert_eq!(unset.to_attribute(), Err(AttributeError::Unset));
        assert_eq!(
            Option::<f64>::from_attribute(AttributeValue::Double(2.0)),
            Ok(Some(2.0))
        );
    }

    #[test]
    fn test_type_mismatch_on_assignment() {
        assert_eq!(
            f64::from_attribute(AttributeValue::String("x".into())),
            Err(AttributeError::TypeMismatch {
                expected: AttributeKind::Double
            })
        );
    }
}
