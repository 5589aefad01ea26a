// crates/pplx-rs/src/model/mod.rs

//! Concrete entity types of the pole model.
//!
//! Each type is declared with `define_entity!`, which produces its default
//! values, its static attribute table and its child-legality predicate.

pub mod crossarm;
pub mod enums;
pub mod equipment;
pub mod guy;
pub mod insulator;
pub mod notes;
pub mod pole;
pub mod scene;
pub mod span;

pub use crossarm::Crossarm;
pub use equipment::{PowerEquipment, StreetLight};
pub use guy::{Anchor, Guy};
pub use insulator::Insulator;
pub use notes::Notes;
pub use pole::{SteelPole, WoodPole};
pub use scene::{LoadCase, Scene};
pub use span::Span;

use crate::registry::EntityRegistry;

/// Registers a constructor for every concrete entity type.
pub(crate) fn register_all(registry: &mut EntityRegistry) {
    registry.register::<Scene>();
    registry.register::<LoadCase>();
    registry.register::<WoodPole>();
    registry.register::<SteelPole>();
    registry.register::<Crossarm>();
    registry.register::<Insulator>();
    registry.register::<Span>();
    registry.register::<Anchor>();
    registry.register::<Guy>();
    registry.register::<StreetLight>();
    registry.register::<PowerEquipment>();
    registry.register::<Notes>();
}
