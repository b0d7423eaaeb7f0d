//! Circumferential membrane stress
//!
//! Hoop-type operating stresses in shell, head, and nozzle, computed on
//! the corroded section (nominal thickness minus corrosion allowance).
//! Each is compared against its component allowable stress during final
//! aggregation.
//!
//! A corroded thickness of zero or less means the section has no load
//! path left; the step fails with
//! [`CalcError::NonPhysicalThickness`](crate::errors::CalcError) rather
//! than dividing by it.

use serde::{Deserialize, Serialize};

use crate::errors::{CalcError, CalcResult};
use crate::input::Design;

/// Membrane stress per component (MPa)
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct StressSection {
    /// Shell circumferential stress (MPa)
    pub shell_mpa: f64,
    /// Head membrane stress (MPa)
    pub head_mpa: f64,
    /// Nozzle circumferential stress (MPa)
    pub nozzle_mpa: f64,
}

impl StressSection {
    /// True when every component stress is within its allowable
    pub fn within_allowables(&self, design: &Design) -> bool {
        self.shell_mpa <= design.shell_allowable_mpa
            && self.head_mpa <= design.head_allowable_mpa
            && self.nozzle_mpa <= design.nozzle_allowable_mpa
    }
}

fn corroded(component: &str, thickness_mm: f64) -> CalcResult<f64> {
    if thickness_mm <= 0.0 {
        return Err(CalcError::non_physical_thickness(component, thickness_mm));
    }
    Ok(thickness_mm)
}

/// Compute membrane stresses for all three components.
///
/// - shell: P * (D/2) / (t_c * E)
/// - head:  P * D / (4 * t_c * E)
/// - nozzle: P * (d/2) / (t_c * E)
pub fn analyze(design: &Design) -> CalcResult<StressSection> {
    let t_shell = corroded("shell", design.shell_corroded_mm())?;
    let t_head = corroded("head", design.head_corroded_mm())?;
    let t_nozzle = corroded("nozzle", design.nozzle_corroded_mm())?;

    let p = design.pressure_mpa;

    Ok(StressSection {
        shell_mpa: p * (design.shell_diameter_mm / 2.0) / (t_shell * design.shell_efficiency),
        head_mpa: p * design.shell_diameter_mm / (4.0 * t_head * design.head_efficiency),
        nozzle_mpa: p * (design.nozzle_diameter_mm / 2.0) / (t_nozzle * design.nozzle_efficiency),
    })
}
