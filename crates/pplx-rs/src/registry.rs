// crates/pplx-rs/src/registry.rs

//! The closed set of entity types and the tag -> constructor registry.

use crate::entity::{Entity, Schema};
use std::collections::BTreeMap;
use std::fmt;
use std::sync::OnceLock;

/// Every concrete entity type, used for child-legality checks.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum EntityKind {
    Scene,
    LoadCase,
    WoodPole,
    SteelPole,
    Crossarm,
    Insulator,
    Span,
    Anchor,
    Guy,
    StreetLight,
    PowerEquipment,
    Notes,
}

impl EntityKind {
    pub const ALL: [EntityKind; 12] = [
        EntityKind::Scene,
        EntityKind::LoadCase,
        EntityKind::WoodPole,
        EntityKind::SteelPole,
        EntityKind::Crossarm,
        EntityKind::Insulator,
        EntityKind::Span,
        EntityKind::Anchor,
        EntityKind::Guy,
        EntityKind::StreetLight,
        EntityKind::PowerEquipment,
        EntityKind::Notes,
    ];

    /// The persistence tag for this type.
    pub fn xml_key(self) -> &'static str {
        match self {
            EntityKind::Scene => "Scene",
            EntityKind::LoadCase => "LoadCase",
            EntityKind::WoodPole => "WoodPole",
            EntityKind::SteelPole => "SteelPole",
            EntityKind::Crossarm => "Crossarm",
            EntityKind::Insulator => "Insulator",
            EntityKind::Span => "Span",
            EntityKind::Anchor => "Anchor",
            EntityKind::Guy => "Guy",
            EntityKind::StreetLight => "StreetLight",
            EntityKind::PowerEquipment => "PowerEquipment",
            EntityKind::Notes => "Notes",
        }
    }

    pub fn from_xml_key(tag: &str) -> Option<EntityKind> {
        Self::ALL.into_iter().find(|k| k.xml_key() == tag)
    }
}

impl fmt::Display for EntityKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.xml_key())
    }
}

/// Builds a default-initialized node of one concrete type.
pub type Constructor = fn() -> Box<dyn Entity>;

fn construct<T: Schema>() -> Box<dyn Entity> {
    Box::new(T::default())
}

/// Maps persistence tags to constructors.
///
/// The global instance is created once and never mutated afterwards.
#[derive(Debug, Default)]
pub struct EntityRegistry {
    constructors: BTreeMap<&'static str, Constructor>,
}

impl EntityRegistry {
    /// Returns the process-wide registry, populating it on first use.
    pub fn global() -> &'static EntityRegistry {
        static REGISTRY: OnceLock<EntityRegistry> = OnceLock::new();
        REGISTRY.get_or_init(|| {
            let mut registry = EntityRegistry::default();
            crate::model::register_all(&mut registry);
            registry
        })
    }

    /// Registers `T` under its own tag.
    pub fn register<T: Schema>(&mut self) {
        self.constructors.insert(T::KIND.xml_key(), construct::<T>);
    }

    /// Constructs a node of the type registered under `tag`, with the type's
    /// default attribute values applied. `None` if the tag is unknown.
    pub fn build(&self, tag: &str) -> Option<Box<dyn Entity>> {
        self.constructors.get(tag).map(|ctor| ctor())
    }

    pub fn contains(&self, tag: &str) -> bool {
        self.constructors.contains_key(tag)
    }

    /// All registered tags, in sorted order.
    pub fn tags(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.constructors.keys().copied()
    }

    pub fn len(&self) -> usize {
        self.constructors.len()
    }

    pub fn is_empty(&self) -> bool {
        self.constructors.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::{EntityKind, EntityRegistry};
    use std::collections::BTreeSet;

    #[test]
    fn test_registry_keys_match_every_kind() {
        let registry = EntityRegistry::global();
        let tags: BTreeSet<_> = registry.tags().collect();
        let kinds: BTreeSet<_> = EntityKind::ALL.iter().map(|k| k.xml_key()).collect();
        assert_eq!(tags, kinds);
        assert_eq!(registry.len(), EntityKind::ALL.len());
    }

    #[test]
    fn test_build_produces_matching_kind() {
        let registry = EntityRegistry::global();
        for kind in EntityKind::ALL {
            let node = registry
                .build(kind.xml_key())
                .unwrap_or_else(|| panic!("no constructor for {}", kind));
            assert_eq!(node.kind(), kind);
            assert_eq!(node.xml_key(), kind.xml_key());
        }
    }

    #[test]
    fn test_unknown_tag_is_a_miss() {
        let registry = EntityRegistry::global();
        assert!(registry.build("LatticeNode").is_none());
        assert!(registry.build("").is_none());
        assert!(!registry.contains("scene"));
    }

    #[test]
    fn test_from_xml_key() {
        assert_eq!(EntityKind::from_xml_key("Crossarm"), Some(EntityKind::Crossarm));
        assert_eq!(EntityKind::from_xml_key("crossarm"), None);
    }
}
