// crates/pplx-rs/src/enums.rs

//! Enumerated attribute types and the process-wide display-string registry.
//!
//! Each enumerated type carries its display strings as associated data on the
//! variants (see `define_display_enum!`). The registry collects those pairs once,
//! keyed by `(enum type, member)`, so two enums may share a member name without
//! colliding.

use std::collections::BTreeMap;
use std::sync::OnceLock;

/// An enumerated attribute type with a canonical display string per member.
pub trait DisplayEnum: Copy + Sized + 'static {
    /// The enum's type name, used as the first half of the registry key.
    const TYPE_NAME: &'static str;

    /// Every member, in declaration order.
    const VARIANTS: &'static [Self];

    /// The programmatic member name, e.g. `DouglasFir`.
    fn member_name(self) -> &'static str;

    /// The canonical display string, e.g. `Douglas Fir`.
    fn display(self) -> &'static str;

    fn from_member(member: &str) -> Option<Self> {
        Self::VARIANTS
            .iter()
            .copied()
            .find(|v| v.member_name() == member)
    }

    fn from_display(display: &str) -> Option<Self> {
        Self::VARIANTS
            .iter()
            .copied()
            .find(|v| v.display() == display)
    }
}

/// Declares an enumerated attribute type.
///
/// Generates the enum, its `DisplayEnum` and `AttributeField` impls, and a
/// `Display` impl that prints the display string.
macro_rules! define_display_enum {
    (
        $(#[$meta:meta])*
        pub enum $name:ident {
            $( $(#[$vmeta:meta])* $variant:ident => $display:literal ),+ $(,)?
        }
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
        pub enum $name {
            $( $(#[$vmeta])* $variant, )+
        }

        impl $crate::enums::DisplayEnum for $name {
            const TYPE_NAME: &'static str = stringify!($name);
            const VARIANTS: &'static [Self] = &[ $( Self::$variant ),+ ];

            fn member_name(self) -> &'static str {
                match self {
                    $( Self::$variant => stringify!($variant), )+
                }
            }

            fn display(self) -> &'static str {
                match self {
                    $( Self::$variant => $display, )+
                }
            }
        }

        impl $crate::attribute::AttributeField for $name {
            const KIND: $crate::attribute::AttributeKind =
                $crate::attribute::AttributeKind::Enum(stringify!($name));

            fn to_attribute(
                &self,
            ) -> Result<$crate::attribute::AttributeValue, $crate::error::AttributeError> {
                Ok($crate::attribute::AttributeValue::Enum {
                    enum_type: <Self as $crate::enums::DisplayEnum>::TYPE_NAME,
                    member: $crate::enums::DisplayEnum::member_name(*self).to_owned(),
                })
            }

            fn from_attribute(
                value: $crate::attribute::AttributeValue,
            ) -> Result<Self, $crate::error::AttributeError> {
                match value {
                    $crate::attribute::AttributeValue::Enum { enum_type, member }
                        if enum_type == <Self as $crate::enums::DisplayEnum>::TYPE_NAME =>
                    {
                        <Self as $crate::enums::DisplayEnum>::from_member(&member).ok_or(
                            $crate::error::AttributeError::UnknownMember {
                                enum_type: <Self as $crate::enums::DisplayEnum>::TYPE_NAME,
                                member,
                            },
                        )
                    }
                    _ => Err($crate::error::AttributeError::TypeMismatch {
                        expected: <Self as $crate::attribute::AttributeField>::KIND,
                    }),
                }
            }
        }

        impl ::std::fmt::Display for $name {
            fn fmt(&self, f: &mut ::std::fmt::Formatter<'_>) -> ::std::fmt::Result {
                f.write_str($crate::enums::DisplayEnum::display(*self))
            }
        }
    };
}

pub(crate) use define_display_enum;

/// The (member -> display) and (display -> member) tables of one enum type.
#[derive(Debug, Default)]
struct EnumTable {
    by_member: BTreeMap<&'static str, &'static str>,
    by_display: BTreeMap<&'static str, &'static str>,
}

/// Read-only map from `(enum type, member)` to the member's display string.
///
/// Built once from every enumerated type in the schema and never mutated
/// afterwards, so the global instance can be shared freely across threads.
#[derive(Debug, Default)]
pub struct EnumDisplayRegistry {
    tables: BTreeMap<&'static str, EnumTable>,
}

impl EnumDisplayRegistry {
    /// Returns the process-wide registry, populating it on first use.
    pub fn global() -> &'static EnumDisplayRegistry {
        static REGISTRY: OnceLock<EnumDisplayRegistry> = OnceLock::new();
        REGISTRY.get_or_init(|| {
            let mut registry = EnumDisplayRegistry::default();
            crate::model::enums::register_all(&mut registry);
            registry
        })
    }

    /// Adds every member of `E`.
    pub fn register<E: DisplayEnum>(&mut self) {
        let table = self.tables.entry(E::TYPE_NAME).or_default();
        for variant in E::VARIANTS {
            table
                .by_member
                .insert(variant.member_name(), variant.display());
            table
                .by_display
                .insert(variant.display(), variant.member_name());
        }
    }

    /// The display string of `member` in `enum_type`, if both are known.
    pub fn lookup(&self, enum_type: &str, member: &str) -> Option<&'static str> {
        self.tables
            .get(enum_type)
            .and_then(|t| t.by_member.get(member))
            .copied()
    }

    /// Like `lookup`, but yields an empty string for unknown members.
    pub fn display_or_empty(&self, enum_type: &str, member: &str) -> &'static str {
        self.lookup(enum_type, member).unwrap_or("")
    }

    /// Reverse lookup used when reading documents.
    pub fn member_for_display(&self, enum_type: &str, display: &str) -> Option<&'static str> {
        self.tables
            .get(enum_type)
            .and_then(|t| t.by_display.get(display))
            .copied()
    }

    /// Names of all registered enum types.
    pub fn enum_types(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.tables.keys().copied()
    }

    /// Every `(enum type, member, display)` triple.
    pub fn entries(&self) -> impl Iterator<Item = (&'static str, &'static str, &'static str)> + '_ {
        self.tables.iter().flat_map(|(enum_type, table)| {
            table
                .by_member
                .iter()
                .map(move |(member, display)| (*enum_type, *member, *display))
        })
    }

    /// Number of registered members across all enum types.
    pub fn len(&self) -> usize {
        self.tables.values().map(|t| t.by_member.len()).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.tables.is_empty()
    }
}
