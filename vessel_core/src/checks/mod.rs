//! # Compliance Checks
//!
//! The individual code checks that make up a compliance evaluation. Each
//! check follows the pattern:
//!
//! - a pure function taking validated design values
//! - a JSON-serializable result record with a pass/fail reading
//! - structured [`CalcError`](crate::errors::CalcError) on a step failure
//!
//! The orchestrator in [`crate::compliance`] runs them in order and
//! aggregates the verdict; nothing here holds state between calls.
//!
//! ## Available Checks
//!
//! - [`thickness`] - required wall thickness under internal pressure (UG-27 / UG-32)
//! - [`min_thickness`] - code minimum thickness resolution (UG-16)
//! - [`stress`] - circumferential membrane stress in shell, head, nozzle
//! - [`loads`] - external nozzle load stresses vs allowable

pub mod loads;
pub mod min_thickness;
pub mod stress;
pub mod thickness;

pub use loads::LoadCheck;
pub use min_thickness::{MinThicknessCheck, ResolvedMinimum};
pub use stress::StressSection;
pub use thickness::ThicknessCheck;
