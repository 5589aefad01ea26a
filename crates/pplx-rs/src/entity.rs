// crates/pplx-rs/src/entity.rs

//! The abstract entity node and the per-type schema it is generated from.

use crate::attribute::{AttributeDef, AttributeDescriptor, AttributeValue};
use crate::error::AttributeError;
use crate::registry::EntityKind;
use std::any::Any;
use std::fmt;

/// Static, per-type information about a concrete entity.
///
/// Implemented by `define_entity!`; `Entity` is then provided for free.
pub trait Schema: Default + fmt::Debug + 'static {
    const KIND: EntityKind;

    /// Whether a node of this type may own a child of type `candidate`.
    fn accepts_child(candidate: EntityKind) -> bool;

    /// The declared attributes, in declaration order.
    fn descriptors() -> &'static [AttributeDescriptor<Self>];
}

/// A node of the entity tree with its concrete type erased.
pub trait Entity: Any + fmt::Debug {
    fn kind(&self) -> EntityKind;

    /// Persistence tag of the concrete type; also its registry key.
    fn xml_key(&self) -> &'static str {
        self.kind().xml_key()
    }

    fn is_legal_child(&self, candidate: EntityKind) -> bool;

    fn attribute_count(&self) -> usize;

    fn attribute_def(&self, index: usize) -> Option<AttributeDef>;

    fn get_attribute(&self, index: usize) -> Result<AttributeValue, AttributeError>;

    fn set_attribute(&mut self, index: usize, value: AttributeValue)
    -> Result<(), AttributeError>;

    fn as_any(&self) -> &dyn Any;

    fn as_any_mut(&mut self) -> &mut dyn Any;

    /// Index of the attribute whose display name is `name`.
    fn find_attribute(&self, name: &str) -> Option<usize> {
        (0..self.attribute_count()).find(|&i| {
            self.attribute_def(i)
                .is_some_and(|def| def.display_name() == name)
        })
    }
}

impl<T: Schema> Entity for T {
    fn kind(&self) -> EntityKind {
        T::KIND
    }

    fn is_legal_child(&self, candidate: EntityKind) -> bool {
        T::accepts_child(candidate)
    }

    fn attribute_count(&self) -> usize {
        T::descriptors().len()
    }

    fn attribute_def(&self, index: usize) -> Option<AttributeDef> {
        T::descriptors().get(index).map(AttributeDescriptor::def)
    }

    fn get_attribute(&self, index: usize) -> Result<AttributeValue, AttributeError> {
        let descriptor = T::descriptors()
            .get(index)
            .ok_or_else(|| AttributeError::NoSuchAttribute(index.to_string()))?;
        (descriptor.get)(self)
    }

    fn set_attribute(
        &mut self,
        index: usize,
        value: AttributeValue,
    ) -> Result<(), AttributeError> {
        let descriptor = T::descriptors()
            .get(index)
            .ok_or_else(|| AttributeError::NoSuchAttribute(index.to_string()))?;
        (descriptor.set)(self, value)
    }

    fn as_any(&self) -> &dyn Any {
        self
    }

    fn as_any_mut(&mut self) -> &mut dyn Any {
        self
    }
}

impl dyn Entity {
    pub fn downcast_ref<T: Schema>(&self) -> Option<&T> {
        self.as_any().downcast_ref::<T>()
    }

    pub fn downcast_mut<T: Schema>(&mut self) -> Option<&mut T> {
        self.as_any_mut().downcast_mut::<T>()
    }

    /// Assigns an attribute by its display name.
    pub fn set_attribute_by_name(
        &mut self,
        name: &str,
        value: AttributeValue,
    ) -> Result<(), AttributeError> {
        let index = self
            .find_attribute(name)
            .ok_or_else(|| AttributeError::NoSuchAttribute(name.to_owned()))?;
        self.set_attribute(index, value)
    }

    /// Reads an attribute by its display name.
    pub fn attribute_by_name(&self, name: &str) -> Result<AttributeValue, AttributeError> {
        let index = self
            .find_attribute(name)
            .ok_or_else(|| AttributeError::NoSuchAttribute(name.to_owned()))?;
        self.get_attribute(index)
    }
}

/// Declares a concrete entity type: its fields with defaults and persisted
/// identifiers, and the kinds it accepts as children.
///
/// ```ignore
/// define_entity! {
///     pub struct Notes => Notes {
///         text: String = String::new() => "Text",
///     }
///     children: []
/// }
/// ```
macro_rules! define_entity {
    (
        $(#[$meta:meta])*
        pub struct $name:ident => $kind:ident {
            $(
                $(#[$fmeta:meta])*
                $field:ident : $ty:ty = $default:expr => $ident:literal
            ),* $(,)?
        }
        children: [ $( $child:ident ),* $(,)? ]
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, PartialEq)]
        pub struct $name {
            $( $(#[$fmeta])* pub $field: $ty, )*
        }

        impl Default for $name {
            fn default() -> Self {
                Self {
                    $( $field: $default, )*
                }
            }
        }

        impl $crate::entity::Schema for $name {
            const KIND: $crate::registry::EntityKind = $crate::registry::EntityKind::$kind;

            #[allow(unused_variables)]
            fn accepts_child(candidate: $crate::registry::EntityKind) -> bool {
                false $( || candidate == $crate::registry::EntityKind::$child )*
            }

            fn descriptors() -> &'static [$crate::attribute::AttributeDescriptor<Self>] {
                static DESCRIPTORS: &[$crate::attribute::AttributeDescriptor<$name>] = &[
                    $(
                        $crate::attribute::AttributeDescriptor {
                            ident: $ident,
                            kind: <$ty as $crate::attribute::AttributeField>::KIND,
                            get: |node: &$name| {
                                $crate::attribute::AttributeField::to_attribute(&node.$field)
                            },
                            set: |node: &mut $name, value| {
                                node.$field = <$ty as $crate::attribute::AttributeField>
                                    ::from_attribute(value)?;
                                Ok(())
                            },
                        },
                    )*
                ];
                DESCRIPTORS
            }
        }
    };
}

pub(crate) use define_entity;
