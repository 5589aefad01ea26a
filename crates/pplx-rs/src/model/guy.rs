// crates/pplx-rs/src/model/guy.rs

use super::enums::{AnchorType, GuyMaterial, GuyType};
use crate::entity::define_entity;

define_entity! {
    pub struct Anchor => Anchor {
        anchor_type: AnchorType = AnchorType::Screw => "Anchor_Type",
        lead_distance: f64 = 240.0 => "Lead_Distance",
        direction: f64 = 0.0 => "Direction",
        rod_height: f64 = 12.0 => "Rod_Height",
        holding_strength: Option<f64> = None => "Holding_Strength",
    }
    children: [Guy, Notes]
}

define_entity! {
    pub struct Guy => Guy {
        guy_type: GuyType = GuyType::Down => "Guy_Type",
        material: GuyMaterial = GuyMaterial::Steel => "Material",
        attach_height: f64 = 360.0 => "Attach_Height",
        diameter: f64 = 0.375 => "Diameter",
        /// lb
        rated_breaking_strength: f64 = 15400.0 => "Rated_Breaking_Strength",
        tension: f64 = 0.0 => "Tension",
    }
    children: [Notes]
}
