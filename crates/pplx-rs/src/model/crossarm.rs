// crates/pplx-rs/src/model/crossarm.rs

use super::enums::CrossarmMaterial;
use crate::entity::define_entity;

define_entity! {
    pub struct Crossarm => Crossarm {
        material: CrossarmMaterial = CrossarmMaterial::Wood => "Material",
        length: f64 = 96.0 => "Length",
        /// Attachment height above ground line.
        coordinate_z: f64 = 420.0 => "Coordinate_Z",
        offset: f64 = 0.0 => "Offset",
        rotation: f64 = 0.0 => "Rotation",
        double_arm: bool = false => "Double_Arm",
        weight: f64 = 30.0 => "Weight",
    }
    children: [Insulator, PowerEquipment, Notes]
}
