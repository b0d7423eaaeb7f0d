//! # vessel_core - Pressure Vessel Nozzle Compliance Engine
//!
//! `vessel_core` evaluates a pressure-vessel shell / head / nozzle design
//! against a fixed set of ASME VIII Div.1 code checks - required wall
//! thickness, UG-16 minimum thickness, UG-45 nozzle reinforcement,
//! operating membrane stress, and combined external nozzle loads - and
//! reports a single verdict with every intermediate figure behind it.
//!
//! ## Design Philosophy
//!
//! - **Stateless**: one pure entry point that takes input and returns a report
//! - **JSON-First**: all types implement Serialize/Deserialize
//! - **Rich Errors**: structured error types, not just strings
//! - **Never panics**: step failures land in the report's error list
//!
//! ## Quick Start
//!
//! ```rust
//! use vessel_core::{evaluate, DesignInput};
//! use vessel_core::categories::{EquipmentCategory, HeadType, ServiceCategory};
//!
//! let input = DesignInput {
//!     pressure_mpa: Some(2.0),
//!     shell_diameter_mm: Some(1000.0),
//!     shell_thickness_mm: Some(12.0),
//!     head_thickness_mm: Some(12.0),
//!     nozzle_diameter_mm: Some(200.0),
//!     nozzle_thickness_mm: Some(10.0),
//!     nozzle_od_mm: Some(114.3),
//!     corrosion_allowance_mm: Some(1.5),
//!     shell_allowable_mpa: Some(138.0),
//!     head_allowable_mpa: Some(138.0),
//!     nozzle_allowable_mpa: Some(118.0),
//!     shell_efficiency: Some(1.0),
//!     head_efficiency: Some(1.0),
//!     nozzle_efficiency: Some(1.0),
//!     equipment: Some(EquipmentCategory::PressureVesselStandard),
//!     service: Some(ServiceCategory::Water),
//!     head_type: Some(HeadType::Ellipsoidal),
//!     custom_min_enabled: Some(false),
//!     custom_min_mm: Some(0.0),
//!     fx_n: Some(0.0), fy_n: Some(0.0), fz_n: Some(0.0),
//!     mx_nmm: Some(0.0), my_nmm: Some(0.0), mz_nmm: Some(0.0),
//! };
//!
//! let report = evaluate(&input);
//! assert!(report.is_compliant());
//!
//! // Serialize for storage or a rendering layer
//! let json = serde_json::to_string_pretty(&report).unwrap();
//! ```
//!
//! ## Modules
//!
//! - [`compliance`] - the orchestrator and entry point
//! - [`checks`] - individual code checks (thickness, minimums, stress, loads)
//! - [`categories`] - equipment / service / head-type classifications
//! - [`pipe_schedule`] - standard pipe size reference table
//! - [`input`] - the design input record and its validation
//! - [`report`] - the compliance report structure
//! - [`errors`] - structured error types

pub mod categories;
pub mod checks;
pub mod compliance;
pub mod errors;
pub mod input;
pub mod pipe_schedule;
pub mod report;

// Re-export commonly used types at crate root for convenience
pub use compliance::evaluate;
pub use errors::{CalcError, CalcResult};
pub use input::{Design, DesignInput};
pub use report::{ComplianceReport, Verdict};
