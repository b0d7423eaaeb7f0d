//! Required wall thickness under internal pressure
//!
//! Closed-form thin-wall formulas for cylindrical shells (UG-27), formed
//! heads (UG-32), and nozzle necks (UG-27 on the nozzle bore).
//!
//! Each formula degenerates when the design pressure approaches the
//! allowable stress times joint efficiency: the denominator goes to zero
//! or negative and the "required thickness" stops meaning anything. That
//! case is detected and reported as
//! [`CalcError::DegenerateFormula`](crate::errors::CalcError), never
//! returned as a silent negative number.
//!
//! ## Example
//!
//! ```rust
//! use vessel_core::checks::thickness::shell_required_thickness;
//!
//! // P = 2 MPa, D = 1000 mm, S = 138 MPa, E = 1.0
//! let t = shell_required_thickness(2.0, 1000.0, 138.0, 1.0).unwrap();
//! assert!((t - 7.3099).abs() < 0.001);
//! ```

use serde::{Deserialize, Serialize};

use crate::categories::HeadType;
use crate::errors::{CalcError, CalcResult};

/// Required vs actual thickness for one component (mm).
///
/// `actual_mm` is the corroded thickness: nominal minus corrosion
/// allowance.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ThicknessCheck {
    /// Required thickness from the pressure formula (mm)
    pub required_mm: f64,
    /// Corroded actual thickness (mm)
    pub actual_mm: f64,
}

impl ThicknessCheck {
    /// Margin of actual over required (mm); negative when deficient
    pub fn margin_mm(&self) -> f64 {
        self.actual_mm - self.required_mm
    }

    /// Check if the actual thickness meets the requirement
    pub fn passes(&self) -> bool {
        self.actual_mm >= self.required_mm
    }
}

/// Shared guard for the `numerator / denominator` formula shape
fn guarded(component: &str, numerator: f64, denominator: f64) -> CalcResult<f64> {
    if denominator <= 0.0 {
        return Err(CalcError::degenerate_formula(
            component,
            format!(
                "denominator {denominator:.3} is not positive (pressure too high for S*E)"
            ),
        ));
    }
    let required = numerator / denominator;
    if !required.is_finite() || required < 0.0 {
        return Err(CalcError::degenerate_formula(
            component,
            format!("required thickness {required} is not a positive finite value"),
        ));
    }
    Ok(required)
}

/// Required shell thickness per UG-27: t = PD / (2SE - 1.2P)
pub fn shell_required_thickness(
    pressure_mpa: f64,
    diameter_mm: f64,
    allowable_mpa: f64,
    efficiency: f64,
) -> CalcResult<f64> {
    guarded(
        "shell",
        pressure_mpa * diameter_mm,
        2.0 * allowable_mpa * efficiency - 1.2 * pressure_mpa,
    )
}

/// Required head thickness per UG-32, by head geometry
pub fn head_required_thickness(
    pressure_mpa: f64,
    diameter_mm: f64,
    allowable_mpa: f64,
    efficiency: f64,
    head_type: HeadType,
) -> CalcResult<f64> {
    let se = allowable_mpa * efficiency;
    match head_type {
        HeadType::Hemispherical => guarded(
            "head",
            pressure_mpa * diameter_mm,
            4.0 * se - 0.4 * pressure_mpa,
        ),
        HeadType::Ellipsoidal => guarded(
            "head",
            pressure_mpa * diameter_mm,
            2.0 * se - 0.2 * pressure_mpa,
        ),
        HeadType::Torispherical => guarded(
            "head",
            0.885 * pressure_mpa * diameter_mm,
            se - 0.1 * pressure_mpa,
        ),
    }
}

/// Required nozzle neck thickness per UG-27, on the nozzle bore:
/// t = Pd / (2SE - 1.2P)
pub fn nozzle_required_thickness(
    pressure_mpa: f64,
    nozzle_diameter_mm: f64,
    allowable_mpa: f64,
    efficiency: f64,
) -> CalcResult<f64> {
    guarded(
        "nozzle",
        pressure_mpa * nozzle_diameter_mm,
        2.0 * allowable_mpa * efficiency - 1.2 * pressure_mpa,
    )
}
