// crates/pplx-rs/src/model/pole.rs

use super::enums::{PoleClass, SteelPoleShape, WoodSpecies};
use crate::entity::define_entity;
use crate::value_table::ValueTable;

define_entity! {
    /// A wood distribution pole. Lengths are in inches.
    pub struct WoodPole => WoodPole {
        pole_number: String = String::new() => "Pole_Number",
        owner: String = String::new() => "Owner",
        species: WoodSpecies = WoodSpecies::SouthernPine => "Species",
        class: PoleClass = PoleClass::Class4 => "Class",
        length: f64 = 480.0 => "Length",
        setting_depth: f64 = 72.0 => "Setting_Depth",
        lean_angle: f64 = 0.0 => "Lean_Angle",
        lean_direction: f64 = 0.0 => "Lean_Direction",
        /// Measured circumference; the class table is used while unset.
        ground_line_circumference: Option<f64> = None => "Ground_Line_Circumference",
        tip_circumference: Option<f64> = None => "Tip_Circumference",
        year_installed: i32 = 0 => "Year_Installed",
        existing: bool = true => "Is_Existing",
        /// Remaining strength fraction by height above ground line.
        strength_derating: ValueTable = ValueTable::new("Strength") => "Strength_Derating",
    }
    children: [Crossarm, Insulator, Anchor, StreetLight, PowerEquipment, Notes]
}

define_entity! {
    /// A tapered tubular steel pole. Lengths are in inches.
    pub struct SteelPole => SteelPole {
        pole_number: String = String::new() => "Pole_Number",
        owner: String = String::new() => "Owner",
        shape: SteelPoleShape = SteelPoleShape::Dodecagonal => "Shape",
        length: f64 = 600.0 => "Length",
        setting_depth: f64 = 84.0 => "Setting_Depth",
        butt_diameter: f64 = 18.0 => "Butt_Diameter",
        tip_diameter: f64 = 8.0 => "Tip_Diameter",
        wall_thickness: f64 = 0.25 => "Wall_Thickness",
        /// psi
        yield_strength: f64 = 65000.0 => "Yield_Strength",
        existing: bool = true => "Is_Existing",
        /// Allowable moment (ft-lb) by height above ground line.
        moment_capacity: ValueTable = ValueTable::new("Moment") => "Moment_Capacity",
    }
    children: [Crossarm, Insulator, Anchor, StreetLight, PowerEquipment, Notes]
}
