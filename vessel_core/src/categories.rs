//! Equipment, service, and head-geometry classifications
//!
//! The original code rules key their minimum-thickness tables by free-form
//! labels; here each classification is a closed enum so a lookup is an
//! exhaustive match and an unrecognized category cannot silently resolve
//! to zero.
//!
//! ## Example
//!
//! ```rust
//! use vessel_core::categories::{EquipmentCategory, ServiceCategory};
//!
//! let equipment = EquipmentCategory::UnfiredSteamBoiler;
//! assert_eq!(equipment.min_thickness_mm(), 6.35);
//!
//! let service = ServiceCategory::Water;
//! assert_eq!(service.min_thickness_mm(), 2.5);
//! ```

use serde::{Deserialize, Serialize};

use crate::errors::{CalcError, CalcResult};

/// Equipment classification per UG-16 minimum-thickness rules
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum EquipmentCategory {
    /// Standard pressure vessel (1.5 mm minimum)
    #[default]
    #[serde(rename = "Pressure Vessel (Standard)")]
    PressureVesselStandard,
    /// Unfired steam boiler (6.35 mm minimum)
    #[serde(rename = "Unfired Steam Boiler")]
    UnfiredSteamBoiler,
    /// Non-code construction (no minimum)
    #[serde(rename = "Non-Code Construction")]
    NonCode,
}

impl EquipmentCategory {
    /// All equipment categories for UI selection
    pub const ALL: [EquipmentCategory; 3] = [
        EquipmentCategory::PressureVesselStandard,
        EquipmentCategory::UnfiredSteamBoiler,
        EquipmentCategory::NonCode,
    ];

    /// UG-16 minimum thickness for this equipment category (mm)
    pub fn min_thickness_mm(&self) -> f64 {
        match self {
            EquipmentCategory::PressureVesselStandard => 1.5,
            EquipmentCategory::UnfiredSteamBoiler => 6.35,
            EquipmentCategory::NonCode => 0.0,
        }
    }

    /// Get display name
    pub fn display_name(&self) -> &'static str {
        match self {
            EquipmentCategory::PressureVesselStandard => "Pressure Vessel (Standard)",
            EquipmentCategory::UnfiredSteamBoiler => "Unfired Steam Boiler",
            EquipmentCategory::NonCode => "Non-Code Construction",
        }
    }

}

impl std::fmt::Display for EquipmentCategory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.display_name())
    }
}

/// Service classification per UG-16(b)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum ServiceCategory {
    /// Water service (2.5 mm minimum)
    #[default]
    Water,
    /// Compressed air service (2.5 mm minimum)
    #[serde(rename = "Compressed Air")]
    CompressedAir,
    /// Steam service (2.5 mm minimum)
    Steam,
    /// Any other service (no minimum)
    Other,
}

impl ServiceCategory {
    /// All service categories for UI selection
    pub const ALL: [ServiceCategory; 4] = [
        ServiceCategory::Water,
        ServiceCategory::CompressedAir,
        ServiceCategory::Steam,
        ServiceCategory::Other,
    ];

    /// UG-16(b) minimum thickness for this service (mm)
    pub fn min_thickness_mm(&self) -> f64 {
        match self {
            ServiceCategory::Water | ServiceCategory::CompressedAir | ServiceCategory::Steam => 2.5,
            ServiceCategory::Other => 0.0,
        }
    }

    /// Get display name
    pub fn display_name(&self) -> &'static str {
        match self {
            ServiceCategory::Water => "Water",
            ServiceCategory::CompressedAir => "Compressed Air",
            ServiceCategory::Steam => "Steam",
            ServiceCategory::Other => "Other",
        }
    }
}

impl std::fmt::Display for ServiceCategory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.display_name())
    }
}

/// Head geometry per UG-32
///
/// Each variant selects a different required-thickness formula in
/// [`crate::checks::thickness::head_required_thickness`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum HeadType {
    /// Hemispherical head: t = PD / (4SE - 0.4P)
    Hemispherical,
    /// 2:1 ellipsoidal head: t = PD / (2SE - 0.2P)
    #[default]
    Ellipsoidal,
    /// Torispherical (flanged and dished) head: t = 0.885PD / (SE - 0.1P)
    Torispherical,
}

impl HeadType {
    /// All head types for UI selection
    pub const ALL: [HeadType; 3] = [
        HeadType::Hemispherical,
        HeadType::Ellipsoidal,
        HeadType::Torispherical,
    ];

    /// Get display name
    pub fn display_name(&self) -> &'static str {
        match self {
            HeadType::Hemispherical => "Hemispherical",
            HeadType::Ellipsoidal => "Ellipsoidal",
            HeadType::Torispherical => "Torispherical",
        }
    }

    /// Parse from common string representations.
    ///
    /// The engine itself only ever sees the closed enum; this is the
    /// boundary for free-form labels (CLI input, hand-written JSON).
    pub fn from_str_flexible(s: &str) -> CalcResult<Self> {
        match s.trim().to_uppercase().as_str() {
            "HEMISPHERICAL" | "HEMI" => Ok(HeadType::Hemispherical),
            "ELLIPSOIDAL" | "2:1 ELLIPSOIDAL" | "ELLIPTICAL" => Ok(HeadType::Ellipsoidal),
            "TORISPHERICAL" | "TORI" | "F&D" => Ok(HeadType::Torispherical),
            _ => Err(CalcError::invalid_head_type(s)),
        }
    }
}

impl std::fmt::Display for HeadType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.display_name())
    }
}
