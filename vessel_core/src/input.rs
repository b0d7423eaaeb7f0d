//! Design input record
//!
//! One [`DesignInput`] per evaluation. Every field is optional at the
//! serde boundary: a missing field is a runtime validation failure with
//! the field named in the error, not a deserialization failure. This
//! matches how the input form feeds the engine - partially filled forms
//! must produce a readable error list, not a type error.
//!
//! [`DesignInput::validate`] unwraps a complete record into a [`Design`]
//! with plain fields, which is what the analysis steps consume.
//!
//! ## JSON Example
//!
//! ```json
//! {
//!   "pressure_mpa": 2.0,
//!   "shell_diameter_mm": 1000.0,
//!   "shell_thickness_mm": 12.0,
//!   "head_thickness_mm": 12.0,
//!   "nozzle_diameter_mm": 200.0,
//!   "nozzle_thickness_mm": 10.0,
//!   "nozzle_od_mm": 114.3,
//!   "corrosion_allowance_mm": 1.5,
//!   "shell_allowable_mpa": 138.0,
//!   "head_allowable_mpa": 138.0,
//!   "nozzle_allowable_mpa": 118.0,
//!   "shell_efficiency": 1.0,
//!   "head_efficiency": 1.0,
//!   "nozzle_efficiency": 1.0,
//!   "equipment": "Pressure Vessel (Standard)",
//!   "service": "Water",
//!   "head_type": "Ellipsoidal",
//!   "custom_min_enabled": false,
//!   "custom_min_mm": 0.0,
//!   "fx_n": 0.0, "fy_n": 0.0, "fz_n": 0.0,
//!   "mx_nmm": 0.0, "my_nmm": 0.0, "mz_nmm": 0.0
//! }
//! ```

use serde::{Deserialize, Serialize};

use crate::categories::{EquipmentCategory, HeadType, ServiceCategory};
use crate::errors::{CalcError, CalcResult};

/// Raw design input, one record per compliance evaluation.
///
/// Thickness fields are *nominal* (they still include the corrosion
/// allowance). Forces and moments are signed; everything else is a
/// positive scalar in consistent units (MPa, mm, N, N*mm).
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct DesignInput {
    /// Internal design pressure (MPa)
    pub pressure_mpa: Option<f64>,

    /// Shell inside diameter (mm)
    pub shell_diameter_mm: Option<f64>,
    /// Nominal shell thickness (mm)
    pub shell_thickness_mm: Option<f64>,
    /// Nominal head thickness (mm)
    pub head_thickness_mm: Option<f64>,
    /// Nozzle inside diameter (mm)
    pub nozzle_diameter_mm: Option<f64>,
    /// Nominal nozzle neck thickness (mm)
    pub nozzle_thickness_mm: Option<f64>,
    /// Nozzle outer diameter (mm), matched against the pipe schedule
    pub nozzle_od_mm: Option<f64>,
    /// Corrosion allowance (mm)
    pub corrosion_allowance_mm: Option<f64>,

    /// Shell allowable stress (MPa)
    pub shell_allowable_mpa: Option<f64>,
    /// Head allowable stress (MPa)
    pub head_allowable_mpa: Option<f64>,
    /// Nozzle allowable stress (MPa)
    pub nozzle_allowable_mpa: Option<f64>,
    /// Shell weld joint efficiency (0 < E <= 1)
    pub shell_efficiency: Option<f64>,
    /// Head weld joint efficiency (0 < E <= 1)
    pub head_efficiency: Option<f64>,
    /// Nozzle weld joint efficiency (0 < E <= 1)
    pub nozzle_efficiency: Option<f64>,

    /// Equipment classification (UG-16)
    pub equipment: Option<EquipmentCategory>,
    /// Service classification (UG-16(b))
    pub service: Option<ServiceCategory>,
    /// Head geometry (UG-32)
    pub head_type: Option<HeadType>,

    /// Whether the user-specified minimum thickness applies
    pub custom_min_enabled: Option<bool>,
    /// User-specified minimum thickness (mm), honored only when enabled
    pub custom_min_mm: Option<f64>,

    /// Shear force along X (N)
    pub fx_n: Option<f64>,
    /// Shear force along Y (N)
    pub fy_n: Option<f64>,
    /// Axial force along the nozzle axis Z (N)
    pub fz_n: Option<f64>,
    /// Bending moment about X (N*mm)
    pub mx_nmm: Option<f64>,
    /// Bending moment about Y (N*mm)
    pub my_nmm: Option<f64>,
    /// Torsional moment about Z (N*mm)
    pub mz_nmm: Option<f64>,
}

macro_rules! collect_missing {
    ($input:expr, $($field:ident),+ $(,)?) => {{
        let mut missing: Vec<&'static str> = Vec::new();
        $(
            if $input.$field.is_none() {
                missing.push(stringify!($field));
            }
        )+
        missing
    }};
}

impl DesignInput {
    /// Names of fields absent from this record, in declaration order
    pub fn missing_fields(&self) -> Vec<&'static str> {
        collect_missing!(
            self,
            pressure_mpa,
            shell_diameter_mm,
            shell_thickness_mm,
            head_thickness_mm,
            nozzle_diameter_mm,
            nozzle_thickness_mm,
            nozzle_od_mm,
            corrosion_allowance_mm,
            shell_allowable_mpa,
            head_allowable_mpa,
            nozzle_allowable_mpa,
            shell_efficiency,
            head_efficiency,
            nozzle_efficiency,
            equipment,
            service,
            head_type,
            custom_min_enabled,
            custom_min_mm,
            fx_n,
            fy_n,
            fz_n,
            mx_nmm,
            my_nmm,
            mz_nmm,
        )
    }

    /// Check completeness and unwrap into a [`Design`].
    ///
    /// Fails with a single [`CalcError::MissingInput`] naming every
    /// absent field, comma-joined.
    pub fn validate(&self) -> CalcResult<Design> {
        let missing = self.missing_fields();
        if !missing.is_empty() {
            return Err(CalcError::missing_input(missing));
        }

        // Every unwrap below is backed by the emptiness check above
        Ok(Design {
            pressure_mpa: self.pressure_mpa.unwrap(),
            shell_diameter_mm: self.shell_diameter_mm.unwrap(),
            shell_thickness_mm: self.shell_thickness_mm.unwrap(),
            head_thickness_mm: self.head_thickness_mm.unwrap(),
            nozzle_diameter_mm: self.nozzle_diameter_mm.unwrap(),
            nozzle_thickness_mm: self.nozzle_thickness_mm.unwrap(),
            nozzle_od_mm: self.nozzle_od_mm.unwrap(),
            corrosion_allowance_mm: self.corrosion_allowance_mm.unwrap(),
            shell_allowable_mpa: self.shell_allowable_mpa.unwrap(),
            head_allowable_mpa: self.head_allowable_mpa.unwrap(),
            nozzle_allowable_mpa: self.nozzle_allowable_mpa.unwrap(),
            shell_efficiency: self.shell_efficiency.unwrap(),
            head_efficiency: self.head_efficiency.unwrap(),
            nozzle_efficiency: self.nozzle_efficiency.unwrap(),
            equipment: self.equipment.unwrap(),
            service: self.service.unwrap(),
            head_type: self.head_type.unwrap(),
            custom_min_enabled: self.custom_min_enabled.unwrap(),
            custom_min_mm: self.custom_min_mm.unwrap(),
            fx_n: self.fx_n.unwrap(),
            fy_n: self.fy_n.unwrap(),
            fz_n: self.fz_n.unwrap(),
            mx_nmm: self.mx_nmm.unwrap(),
            my_nmm: self.my_nmm.unwrap(),
            mz_nmm: self.mz_nmm.unwrap(),
        })
    }
}

/// Required field names, in the order validation reports them
pub const REQUIRED_FIELDS: [&str; 25] = [
    "pressure_mpa",
    "shell_diameter_mm",
    "shell_thickness_mm",
    "head_thickness_mm",
    "nozzle_diameter_mm",
    "nozzle_thickness_mm",
    "nozzle_od_mm",
    "corrosion_allowance_mm",
    "shell_allowable_mpa",
    "head_allowable_mpa",
    "nozzle_allowable_mpa",
    "shell_efficiency",
    "head_efficiency",
    "nozzle_efficiency",
    "equipment",
    "service",
    "head_type",
    "custom_min_enabled",
    "custom_min_mm",
    "fx_n",
    "fy_n",
    "fz_n",
    "mx_nmm",
    "my_nmm",
    "mz_nmm",
];

/// A validated, complete design - what the analysis steps consume.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Design {
    pub pressure_mpa: f64,
    pub shell_diameter_mm: f64,
    pub shell_thickness_mm: f64,
    pub head_thickness_mm: f64,
    pub nozzle_diameter_mm: f64,
    pub nozzle_thickness_mm: f64,
    pub nozzle_od_mm: f64,
    pub corrosion_allowance_mm: f64,
    pub shell_allowable_mpa: f64,
    pub head_allowable_mpa: f64,
    pub nozzle_allowable_mpa: f64,
    pub shell_efficiency: f64,
    pub head_efficiency: f64,
    pub nozzle_efficiency: f64,
    pub equipment: EquipmentCategory,
    pub service: ServiceCategory,
    pub head_type: HeadType,
    pub custom_min_enabled: bool,
    pub custom_min_mm: f64,
    pub fx_n: f64,
    pub fy_n: f64,
    pub fz_n: f64,
    pub mx_nmm: f64,
    pub my_nmm: f64,
    pub mz_nmm: f64,
}

impl Design {
    /// Corroded shell thickness: nominal minus corrosion allowance (mm)
    pub fn shell_corroded_mm(&self) -> f64 {
        self.shell_thickness_mm - self.corrosion_allowance_mm
    }

    /// Corroded head thickness (mm)
    pub fn head_corroded_mm(&self) -> f64 {
        self.head_thickness_mm - self.corrosion_allowance_mm
    }

    /// Corroded nozzle neck thickness (mm)
    pub fn nozzle_corroded_mm(&self) -> f64 {
        self.nozzle_thickness_mm - self.corrosion_allowance_mm
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn complete_input() -> DesignInput {
        DesignInput {
            pressure_mpa: Some(2.0),
            shell_diameter_mm: Some(1000.0),
            shell_thickness_mm: Some(12.0),
            head_thickness_mm: Some(12.0),
            nozzle_diameter_mm: Some(200.0),
            nozzle_thickness_mm: Some(10.0),
            nozzle_od_mm: Some(114.3),
            corrosion_allowance_mm: Some(1.5),
            shell_allowable_mpa: Some(138.0),
            head_allowable_mpa: Some(138.0),
            nozzle_allowable_mpa: Some(118.0),
            shell_efficiency: Some(1.0),
            head_efficiency: Some(1.0),
            nozzle_efficiency: Some(1.0),
            equipment: Some(EquipmentCategory::PressureVesselStandard),
            service: Some(ServiceCategory::Water),
            head_type: Some(HeadType::Ellipsoidal),
            custom_min_enabled: Some(false),
            custom_min_mm: Some(0.0),
            fx_n: Some(0.0),
            fy_n: Some(0.0),
            fz_n: Some(0.0),
            mx_nmm: Some(0.0),
            my_nmm: Some(0.0),
            mz_nmm: Some(0.0),
        }
    }

    #[test]
    fn test_complete_input_validates() {
        let design = complete_input().validate().unwrap();
        assert_eq!(design.pressure_mpa, 2.0);
        assert_eq!(design.head_type, HeadType::Ellipsoidal);
    }

    #[test]
    fn test_corroded_thickness() {
        let design = complete_input().validate().unwrap();
        assert!((design.shell_corroded_mm() - 10.5).abs() < 1e-9);
        assert!((design.nozzle_corroded_mm() - 8.5).abs() < 1e-9);
    }

    #[test]
    fn test_missing_field_named() {
        let mut input = complete_input();
        input.nozzle_od_mm = None;
        let err = input.validate().unwrap_err();
        assert_eq!(err.to_string(), "Missing inputs: nozzle_od_mm");
    }

    #[test]
    fn test_multiple_missing_fields_comma_joined() {
        let mut input = complete_input();
        input.pressure_mpa = None;
        input.service = None;
        let err = input.validate().unwrap_err();
        assert_eq!(err.to_string(), "Missing inputs: pressure_mpa, service");
    }

    #[test]
    fn test_empty_input_names_all_fields() {
        let err = DesignInput::default().validate().unwrap_err();
        if let CalcError::MissingInput { fields } = err {
            assert_eq!(fields.split(", ").count(), REQUIRED_FIELDS.len());
        } else {
            panic!("expected MissingInput");
        }
    }

    #[test]
    fn test_partial_json_deserializes() {
        // Missing fields must survive deserialization and fail at
        // validation with names, not as a serde error
        let input: DesignInput =
            serde_json::from_str(r#"{ "pressure_mpa": 2.0 }"#).unwrap();
        assert_eq!(input.pressure_mpa, Some(2.0));
        assert!(input.validate().is_err());
    }

    #[test]
    fn test_serialization_roundtrip() {
        let input = complete_input();
        let json = serde_json::to_string_pretty(&input).unwrap();
        let roundtrip: DesignInput = serde_json::from_str(&json).unwrap();
        assert_eq!(input, roundtrip);
    }
}
