//! UG-16 minimum thickness resolution
//!
//! Three independent minima can apply to a design: the equipment-category
//! minimum, the service minimum, and an optional user-specified minimum.
//! The governing value is the largest of the three, and the reference
//! string records which clauses contributed.
//!
//! The resolved minimum applies uniformly to shell, head, and nozzle;
//! there is no per-component minimum in these rules.

use serde::{Deserialize, Serialize};

use crate::categories::{EquipmentCategory, ServiceCategory};

/// Reference text used when no minimum-thickness clause applies
pub const NO_REQUIREMENT: &str = "No UG-16 requirement";

/// The governing minimum thickness and the clauses that produced it
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ResolvedMinimum {
    /// Governing minimum thickness (mm)
    pub thickness_mm: f64,
    /// Human-readable justification, contributing clauses joined by " + "
    pub reference: String,
}

/// Resolve the governing UG-16 minimum thickness.
///
/// `custom_min_mm` participates only when `custom_min_enabled` is set.
pub fn resolve(
    equipment: EquipmentCategory,
    service: ServiceCategory,
    custom_min_enabled: bool,
    custom_min_mm: f64,
) -> ResolvedMinimum {
    let equipment_min = equipment.min_thickness_mm();
    let service_min = service.min_thickness_mm();
    let custom_min = if custom_min_enabled { custom_min_mm } else { 0.0 };

    let thickness_mm = equipment_min.max(service_min).max(custom_min);

    let mut clauses: Vec<String> = Vec::new();
    if equipment_min > 0.0 {
        clauses.push(format!("UG-16 for {}", equipment.display_name()));
    }
    if service_min > 0.0 {
        clauses.push(format!("UG-16(b) for {}", service.display_name()));
    }
    if custom_min_enabled && custom_min > 0.0 {
        clauses.push("Custom specified minimum".to_string());
    }

    let reference = if clauses.is_empty() {
        NO_REQUIREMENT.to_string()
    } else {
        clauses.join(" + ")
    };

    ResolvedMinimum {
        thickness_mm,
        reference,
    }
}

/// Minimum-thickness check for a single component (mm)
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct MinThicknessCheck {
    /// Governing minimum thickness (mm)
    pub required_mm: f64,
    /// Corroded actual thickness (mm)
    pub actual_mm: f64,
    /// True when actual meets the minimum
    pub passes: bool,
}

impl MinThicknessCheck {
    /// Compare a corroded thickness against the resolved minimum
    pub fn new(minimum: &ResolvedMinimum, actual_mm: f64) -> Self {
        MinThicknessCheck {
            required_mm: minimum.thickness_mm,
            actual_mm,
            passes: actual_mm >= minimum.thickness_mm,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_boiler_water_governed_by_equipment() {
        let resolved = resolve(
            EquipmentCategory::UnfiredSteamBoiler,
            ServiceCategory::Water,
            false,
            0.0,
        );
        assert_eq!(resolved.thickness_mm, 6.35);
        assert_eq!(
            resolved.reference,
            "UG-16 for Unfired Steam Boiler + UG-16(b) for Water"
        );
    }

    #[test]
    fn test_no_requirement_sentinel() {
        let resolved = resolve(
            EquipmentCategory::NonCode,
            ServiceCategory::Other,
            false,
            5.0, // ignored: not enabled
        );
        assert_eq!(resolved.thickness_mm, 0.0);
        assert_eq!(resolved.reference, NO_REQUIREMENT);
    }

    #[test]
    fn test_custom_minimum_governs_when_enabled() {
        let resolved = resolve(
            EquipmentCategory::PressureVesselStandard,
            ServiceCategory::Other,
            true,
            8.0,
        );
        assert_eq!(resolved.thickness_mm, 8.0);
        assert_eq!(
            resolved.reference,
            "UG-16 for Pressure Vessel (Standard) + Custom specified minimum"
        );
    }

    #[test]
    fn test_disabled_custom_minimum_ignored() {
        let with = resolve(
            EquipmentCategory::PressureVesselStandard,
            ServiceCategory::Water,
            false,
            50.0,
        );
        assert_eq!(with.thickness_mm, 2.5);
        assert!(!with.reference.contains("Custom"));
    }

    #[test]
    fn test_service_governs_standard_vessel() {
        let resolved = resolve(
            EquipmentCategory::PressureVesselStandard,
            ServiceCategory::Steam,
            false,
            0.0,
        );
        // max(1.5, 2.5) = 2.5, both clauses cited
        assert_eq!(resolved.thickness_mm, 2.5);
        assert_eq!(
            resolved.reference,
            "UG-16 for Pressure Vessel (Standard) + UG-16(b) for Steam"
        );
    }

    #[test]
    fn test_component_check() {
        let resolved = resolve(
            EquipmentCategory::PressureVesselStandard,
            ServiceCategory::Water,
            false,
            0.0,
        );
        let passing = MinThicknessCheck::new(&resolved, 10.5);
        assert!(passing.passes);

        let failing = MinThicknessCheck::new(&resolved, 2.0);
        assert!(!failing.passes);
        assert_eq!(failing.required_mm, 2.5);
    }
}
