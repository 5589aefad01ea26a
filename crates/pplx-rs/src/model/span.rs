// crates/pplx-rs/src/model/span.rs

use super::enums::{SpanType, TensionType};
use crate::entity::define_entity;
use crate::value_table::ValueTable;

define_entity! {
    /// A wire span leaving an insulator.
    pub struct Span => Span {
        span_type: SpanType = SpanType::Primary => "Span_Type",
        conductor: String = String::new() => "Conductor",
        span_distance: f64 = 1800.0 => "Span_Distance",
        span_angle: f64 = 0.0 => "Span_Angle",
        tension_type: TensionType = TensionType::Static => "Tension_Type",
        tension: f64 = 1000.0 => "Tension",
        diameter: f64 = 0.5 => "Diameter",
        weight_per_foot: f64 = 0.1 => "Weight_Per_Foot",
        /// Sag (in) by temperature (degrees F).
        sag_curve: ValueTable = ValueTable::new("Sag") => "Sag_Curve",
    }
    children: [Notes]
}
