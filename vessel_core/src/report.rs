//! Compliance report
//!
//! The single output of an evaluation: every intermediate figure that
//! justifies the verdict, plus the error and warning lists. Constructed
//! once by the orchestrator and never mutated afterwards.
//!
//! Sections are `Option`s because individual analysis steps can fail
//! without aborting the evaluation; an absent section always has a
//! matching entry in `errors`. The `errors` and `warnings` lists are
//! always present, possibly empty.

use serde::{Deserialize, Serialize};

use crate::checks::{LoadCheck, MinThicknessCheck, StressSection, ThicknessCheck};
use crate::errors::CalcError;

/// Terminal outcome of a compliance evaluation
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Verdict {
    /// All criteria passed and no step errored
    Compliant,
    /// Every step ran but at least one criterion failed
    NonCompliant,
    /// At least one step errored; the boolean aggregation is not
    /// trustworthy and must not be presented as a result
    Errored,
}

impl Verdict {
    /// Get display name
    pub fn display_name(&self) -> &'static str {
        match self {
            Verdict::Compliant => "COMPLIANT",
            Verdict::NonCompliant => "NON-COMPLIANT",
            Verdict::Errored => "ERRORED",
        }
    }
}

impl std::fmt::Display for Verdict {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.display_name())
    }
}

/// Required-vs-actual thickness pairs from the pressure formulas.
///
/// Per-component options: one degenerate formula blanks only its own
/// component.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct ThicknessSection {
    pub shell: Option<ThicknessCheck>,
    pub head: Option<ThicknessCheck>,
    pub nozzle: Option<ThicknessCheck>,
}

/// UG-16 minimum-thickness checks, one resolved minimum for all three
/// components
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MinimumSection {
    pub shell: MinThicknessCheck,
    pub head: MinThicknessCheck,
    pub nozzle: MinThicknessCheck,
    /// Contributing clauses, joined by " + "
    pub reference: String,
}

impl MinimumSection {
    /// True when all three components meet the minimum
    pub fn passes(&self) -> bool {
        self.shell.passes && self.head.passes && self.nozzle.passes
    }
}

/// UG-45 nozzle-neck reinforcement check.
///
/// The requirement is the larger of the pressure-formula thickness and
/// the standard-wall table thickness plus corrosion allowance. Unlike
/// the other checks this compares against the *nominal* neck thickness.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ReinforcementCheck {
    /// Governing required thickness (mm)
    pub required_mm: f64,
    /// Nominal nozzle neck thickness (mm)
    pub actual_mm: f64,
    /// Matched standard size label (e.g. "NPS 4", "NPS 12+")
    pub matched_size: String,
    /// True when actual meets the requirement
    pub passes: bool,
}

/// Full compliance report for one design evaluation
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ComplianceReport {
    /// Required-vs-actual thickness per component (UG-27 / UG-32)
    pub thickness: Option<ThicknessSection>,
    /// UG-16 minimum-thickness checks
    pub minimum: Option<MinimumSection>,
    /// UG-45 reinforcement check
    pub reinforcement: Option<ReinforcementCheck>,
    /// Operating membrane stresses
    pub stresses: Option<StressSection>,
    /// External nozzle load check
    pub loads: Option<LoadCheck>,
    /// Step errors, in the order the steps ran
    pub errors: Vec<CalcError>,
    /// Advisory notes that do not affect the verdict
    pub warnings: Vec<String>,
    /// Aggregated pass/fail across all criteria
    pub compliant: bool,
    /// Terminal outcome; check this before trusting `compliant`
    pub verdict: Verdict,
}

impl ComplianceReport {
    /// An empty report carrying only a fatal error
    pub fn errored(error: CalcError) -> Self {
        ComplianceReport {
            thickness: None,
            minimum: None,
            reinforcement: None,
            stresses: None,
            loads: None,
            errors: vec![error],
            warnings: Vec::new(),
            compliant: false,
            verdict: Verdict::Errored,
        }
    }

    /// True when every step ran cleanly and every criterion passed
    pub fn is_compliant(&self) -> bool {
        self.verdict == Verdict::Compliant
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_errored_report_shape() {
        let report =
            ComplianceReport::errored(CalcError::missing_input(["pressure_mpa"]));
        assert_eq!(report.verdict, Verdict::Errored);
        assert!(!report.compliant);
        assert!(report.thickness.is_none());
        assert_eq!(report.errors.len(), 1);
        assert!(report.warnings.is_empty());
    }

    #[test]
    fn test_minimum_section_passes() {
        let check = MinThicknessCheck {
            required_mm: 2.5,
            actual_mm: 10.0,
            passes: true,
        };
        let failing = MinThicknessCheck {
            required_mm: 2.5,
            actual_mm: 1.0,
            passes: false,
        };

        let section = MinimumSection {
            shell: check,
            head: check,
            nozzle: check,
            reference: "UG-16(b) for Water".to_string(),
        };
        assert!(section.passes());

        let section = MinimumSection {
            nozzle: failing,
            ..section
        };
        assert!(!section.passes());
    }

    #[test]
    fn test_verdict_display() {
        assert_eq!(Verdict::Compliant.to_string(), "COMPLIANT");
        assert_eq!(Verdict::NonCompliant.to_string(), "NON-COMPLIANT");
    }

    #[test]
    fn test_report_serialization() {
        let report = ComplianceReport::errored(CalcError::missing_input(["service"]));
        let json = serde_json::to_string_pretty(&report).unwrap();
        let roundtrip: ComplianceReport = serde_json::from_str(&json).unwrap();
        assert_eq!(report, roundtrip);
    }
}
