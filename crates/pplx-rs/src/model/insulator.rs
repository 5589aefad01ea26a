// crates/pplx-rs/src/model/insulator.rs

use super::enums::InsulatorType;
use crate::entity::define_entity;
use crate::value_table::ValueTable;

define_entity! {
    pub struct Insulator => Insulator {
        insulator_type: InsulatorType = InsulatorType::Pin => "Type",
        coordinate_z: f64 = 0.0 => "Coordinate_Z",
        offset_y: f64 = 0.0 => "Offset_Y",
        length: f64 = 10.0 => "Length",
        weight: f64 = 10.0 => "Weight",
        rated_strength: Option<f64> = None => "Rated_Strength",
        /// Allowable load (lb) by load angle in degrees.
        capacity_curve: ValueTable = ValueTable::new("Capacity") => "Capacity_Curve",
    }
    children: [Span, Notes]
}
