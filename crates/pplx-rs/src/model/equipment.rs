// crates/pplx-rs/src/model/equipment.rs

use super::enums::{EquipmentType, LuminaireType};
use crate::entity::define_entity;

define_entity! {
    pub struct StreetLight => StreetLight {
        luminaire: LuminaireType = LuminaireType::CobraHead => "Luminaire",
        arm_length: f64 = 72.0 => "Arm_Length",
        coordinate_z: f64 = 300.0 => "Coordinate_Z",
        weight: f64 = 25.0 => "Weight",
        wind_area: f64 = 1.2 => "Wind_Area",
    }
    children: [Notes]
}

define_entity! {
    /// Pole- or crossarm-mounted equipment such as transformers.
    pub struct PowerEquipment => PowerEquipment {
        equipment_type: EquipmentType = EquipmentType::Transformer => "Equipment_Type",
        /// kVA for transformers, kVAR for capacitor banks.
        rating: Option<f64> = None => "Rating",
        count: i32 = 1 => "Count",
        coordinate_z: f64 = 360.0 => "Coordinate_Z",
        weight: f64 = 400.0 => "Weight",
        wind_area: f64 = 6.0 => "Wind_Area",
    }
    children: [Notes]
}
