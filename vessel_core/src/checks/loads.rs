//! External nozzle load analysis
//!
//! Stresses at the nozzle neck from externally applied piping loads:
//! three force components and three moment components about the nozzle
//! axis. The combined reading is a von-Mises-style equivalent stress
//! compared against the nozzle allowable times a fixed factor.
//!
//! The torsional moment Mz does not enter the combination. That matches
//! the code sheet this implements; the orchestrator emits a warning when
//! a nonzero Mz is supplied so the exclusion is visible in the report.

use serde::{Deserialize, Serialize};
use std::f64::consts::PI;

use crate::errors::{CalcError, CalcResult};
use crate::input::Design;

/// Multiplier on the nozzle allowable stress for combined external loads
pub const ALLOWABLE_STRESS_FACTOR: f64 = 1.5;

/// Shear-term weight in the equivalent-stress combination
pub const STRESS_INTENSITY_FACTOR: f64 = 3.0;

/// Results of the nozzle external-load check (all stresses in MPa)
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct LoadCheck {
    /// Axial membrane stress from Fz
    pub axial_mpa: f64,
    /// Bending stress from the resultant of Mx and My
    pub bending_mpa: f64,
    /// Shear stress from the resultant of Fx and Fy
    pub shear_mpa: f64,
    /// Von-Mises-style equivalent stress
    pub equivalent_mpa: f64,
    /// Allowable limit: nozzle allowable stress times 1.5
    pub allowable_mpa: f64,
    /// True when equivalent <= allowable
    pub passes: bool,
}

/// Analyze external loads on the nozzle neck.
///
/// - axial = Fz / (pi * d * t)
/// - bending = 4 * sqrt(Mx^2 + My^2) / (pi * d^2 * t)
/// - shear = sqrt(Fx^2 + Fy^2) / (pi * d * t)
/// - equivalent = sqrt((axial + bending)^2 + 3 * shear^2)
///
/// where d is the nozzle diameter and t the corroded neck thickness.
pub fn analyze(design: &Design) -> CalcResult<LoadCheck> {
    let d = design.nozzle_diameter_mm;
    let t = design.nozzle_corroded_mm();
    if t <= 0.0 {
        return Err(CalcError::non_physical_thickness("nozzle", t));
    }

    let axial_mpa = design.fz_n / (PI * d * t);
    let bending_mpa = 4.0 * design.mx_nmm.hypot(design.my_nmm) / (PI * d * d * t);
    let shear_mpa = design.fx_n.hypot(design.fy_n) / (PI * d * t);

    let equivalent_mpa = ((axial_mpa + bending_mpa).powi(2)
        + STRESS_INTENSITY_FACTOR * shear_mpa.powi(2))
    .sqrt();

    let allowable_mpa = design.nozzle_allowable_mpa * ALLOWABLE_STRESS_FACTOR;

    Ok(LoadCheck {
        axial_mpa,
        bending_mpa,
        shear_mpa,
        equivalent_mpa,
        allowable_mpa,
        passes: equivalent_mpa <= allowable_mpa,
    })
}
