//! # Error Types
//!
//! Structured error types for vessel_core. Every analysis step reports
//! failures through [`CalcError`] rather than panicking, so a compliance
//! evaluation can record what went wrong and keep running the steps that
//! do not depend on the failed one.
//!
//! ## Example
//!
//! ```rust
//! use vessel_core::errors::{CalcError, CalcResult};
//!
//! fn check_corroded(component: &str, thickness_mm: f64) -> CalcResult<()> {
//!     if thickness_mm <= 0.0 {
//!         return Err(CalcError::non_physical_thickness(component, thickness_mm));
//!     }
//!     Ok(())
//! }
//! ```

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Result type alias for vessel_core operations
pub type CalcResult<T> = Result<T, CalcError>;

/// Structured error type for compliance calculations.
///
/// Each variant provides specific context about what went wrong,
/// enabling programmatic error handling by callers and renderers.
#[derive(Error, Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(tag = "type", content = "details")]
pub enum CalcError {
    /// One or more required design input fields are absent.
    /// Fatal: the evaluation aborts before any computation.
    #[error("Missing inputs: {fields}")]
    MissingInput { fields: String },

    /// Head type label outside the three recognized values
    #[error("Invalid head type: '{value}' (expected Hemispherical, Ellipsoidal, or Torispherical)")]
    InvalidHeadType { value: String },

    /// Corroded thickness is zero or negative where a stress or load
    /// computation needs to divide by it
    #[error("Non-physical corroded thickness for {component}: {thickness_mm} mm")]
    NonPhysicalThickness {
        component: String,
        thickness_mm: f64,
    },

    /// A required-thickness formula degenerated: the denominator went
    /// non-positive because the design pressure is too high relative to
    /// the allowable stress times joint efficiency
    #[error("Degenerate thickness formula for {component}: {reason}")]
    DegenerateFormula { component: String, reason: String },
}

impl CalcError {
    /// Create a MissingInput error from a list of absent field names
    pub fn missing_input<I, S>(fields: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let fields: Vec<String> = fields.into_iter().map(Into::into).collect();
        CalcError::MissingInput {
            fields: fields.join(", "),
        }
    }

    /// Create an InvalidHeadType error
    pub fn invalid_head_type(value: impl Into<String>) -> Self {
        CalcError::InvalidHeadType {
            value: value.into(),
        }
    }

    /// Create a NonPhysicalThickness error
    pub fn non_physical_thickness(component: impl Into<String>, thickness_mm: f64) -> Self {
        CalcError::NonPhysicalThickness {
            component: component.into(),
            thickness_mm,
        }
    }

    /// Create a DegenerateFormula error
    pub fn degenerate_formula(component: impl Into<String>, reason: impl Into<String>) -> Self {
        CalcError::DegenerateFormula {
            component: component.into(),
            reason: reason.into(),
        }
    }

    /// True for errors that abort the whole evaluation rather than a
    /// single analysis step
    pub fn is_fatal(&self) -> bool {
        matches!(self, CalcError::MissingInput { .. })
    }

    /// Get a short error code for programmatic handling
    pub fn error_code(&self) -> &'static str {
        match self {
            CalcError::MissingInput { .. } => "MISSING_INPUT",
            CalcError::InvalidHeadType { .. } => "INVALID_HEAD_TYPE",
            CalcError::NonPhysicalThickness { .. } => "NON_PHYSICAL_THICKNESS",
            CalcError::DegenerateFormula { .. } => "DEGENERATE_FORMULA",
        }
    }
}
