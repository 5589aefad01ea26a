// crates/pplx-rs/src/model/enums.rs

//! Enumerated attribute types used by the entity schema.

use crate::enums::{EnumDisplayRegistry, define_display_enum};

define_display_enum! {
    /// Wood species of a wood pole.
    pub enum WoodSpecies {
        SouthernPine => "Southern Pine",
        DouglasFir => "Douglas Fir",
        WesternRedCedar => "Western Red Cedar",
        LodgepolePine => "Lodgepole Pine",
        WesternLarch => "Western Larch",
        RedPine => "Red Pine",
    }
}

define_display_enum! {
    /// ANSI O5.1 pole class.
    pub enum PoleClass {
        ClassH3 => "H3",
        ClassH2 => "H2",
        ClassH1 => "H1",
        Class1 => "1",
        Class2 => "2",
        Class3 => "3",
        Class4 => "4",
        Class5 => "5",
        Class6 => "6",
        Class7 => "7",
    }
}

define_display_enum! {
    /// Cross-section of a tubular steel pole.
    pub enum SteelPoleShape {
        Round => "Round",
        Dodecagonal => "12-Sided",
        Octagonal => "8-Sided",
    }
}

define_display_enum! {
    pub enum CrossarmMaterial {
        Wood => "Wood",
        Steel => "Steel",
        Fiberglass => "Fiberglass",
    }
}

define_display_enum! {
    pub enum InsulatorType {
        Pin => "Pin",
        Post => "Post",
        DeadEnd => "Dead End",
        Suspension => "Suspension",
        Spool => "Spool",
        Bracket => "Bracket",
    }
}

define_display_enum! {
    /// Role of the wire carried by a span.
    pub enum SpanType {
        Primary => "Primary",
        Secondary => "Secondary",
        Neutral => "Neutral",
        Service => "Service Drop",
        Communication => "Communication",
    }
}

define_display_enum! {
    /// How a span's tension is specified.
    pub enum TensionType {
        Static => "Static",
        Sag => "Sag",
        Slack => "Slack",
    }
}

define_display_enum! {
    pub enum AnchorType {
        Screw => "Screw Anchor",
        Plate => "Plate Anchor",
        Rock => "Rock Anchor",
        Log => "Log Anchor",
    }
}

define_display_enum! {
    pub enum GuyType {
        Down => "Down Guy",
        Span => "Span Guy",
        Push => "Push Brace",
    }
}

define_display_enum! {
    /// Guy strand material. Shares member names with `CrossarmMaterial`.
    pub enum GuyMaterial {
        Steel => "EHS Steel",
        Fiberglass => "Fiberglass Rod",
        Aluminum => "Aluminum Clad",
    }
}

define_display_enum! {
    pub enum EquipmentType {
        Transformer => "Transformer",
        Capacitor => "Capacitor Bank",
        Recloser => "Recloser",
        Switch => "Switch",
        Riser => "Riser",
    }
}

define_display_enum! {
    pub enum LuminaireType {
        CobraHead => "Cobra Head",
        Acorn => "Acorn",
        Flood => "Flood Light",
    }
}

define_display_enum! {
    /// Design code a load case is evaluated against.
    pub enum LoadCode {
        Nesc => "NESC",
        Go95 => "GO 95",
        Csa => "CSA C22.3",
        Asce => "ASCE 74",
    }
}

define_display_enum! {
    pub enum NescDistrict {
        Heavy => "Heavy",
        Medium => "Medium",
        Light => "Light",
        WarmIsland => "Warm Island",
    }
}

define_display_enum! {
    pub enum ConstructionGrade {
        B => "Grade B",
        C => "Grade C",
        N => "Grade N",
    }
}

/// Registers every enumerated type of the schema.
pub(crate) fn register_all(registry: &mut EnumDisplayRegistry) {
    registry.register::<WoodSpecies>();
    registry.register::<PoleClass>();
    registry.register::<SteelPoleShape>();
    registry.register::<CrossarmMaterial>();
    registry.register::<InsulatorType>();
    registry.register::<SpanType>();
    registry.register::<TensionType>();
    registry.register::<AnchorType>();
    registry.register::<GuyType>();
    registry.register::<GuyMaterial>();
    registry.register::<EquipmentType>();
    registry.register::<LuminaireType>();
    registry.register::<LoadCode>();
    registry.register::<NescDistrict>();
    registry.register::<ConstructionGrade>();
}
