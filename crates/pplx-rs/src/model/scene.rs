// crates/pplx-rs/src/model/scene.rs

use super::enums::{ConstructionGrade, LoadCode, NescDistrict};
use crate::entity::define_entity;

define_entity! {
    /// Root container of a document.
    pub struct Scene => Scene {
        name: String = String::new() => "Scene_Name",
        job_number: String = String::new() => "Job_Number",
        latitude: f64 = 0.0 => "Latitude",
        longitude: f64 = 0.0 => "Longitude",
        /// Site elevation in feet; unset until surveyed.
        elevation: Option<f64> = None => "Elevation",
    }
    children: [WoodPole, SteelPole, LoadCase, Notes]
}

define_entity! {
    /// A named bundle of environmental and code parameters for the
    /// load-calculation engine.
    pub struct LoadCase => LoadCase {
        name: String = String::from("NESC Heavy") => "Name",
        code: LoadCode = LoadCode::Nesc => "Code",
        district: NescDistrict = NescDistrict::Heavy => "NESC_District",
        grade: ConstructionGrade = ConstructionGrade::B => "Construction_Grade",
        /// psf
        wind_pressure: f64 = 4.0 => "Wind_Pressure",
        /// inches of radial ice
        ice_thickness: f64 = 0.5 => "Ice_Thickness",
        /// degrees F
        temperature: f64 = 0.0 => "Temperature",
        vertical_overload: f64 = 1.5 => "Vertical_Overload_Factor",
        transverse_overload: f64 = 2.5 => "Transverse_Overload_Factor",
        longitudinal_overload: f64 = 1.0 => "Longitudinal_Overload_Factor",
    }
    children: []
}
