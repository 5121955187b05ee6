//! # wall_core - Retaining Wall Calculation Engine
//!
//! `wall_core` is the computational heart of the retaining-wall designer: the
//! complete verification of a cantilevered L-profile wall, from Rankine earth
//! pressures through rigid-body stability, foundation bearing pressures and
//! base-slab reinforcement sizing. All inputs and outputs are
//! JSON-serializable, so any front end (CLI, GUI, service) can drive the
//! engine and format the results itself.
//!
//! ## Design Philosophy
//!
//! - **Stateless**: `evaluate` is a pure function; same input, same result
//! - **JSON-First**: All types implement Serialize/Deserialize
//! - **Infallible evaluation**: bad inputs degrade into warnings and
//!   not-applicable markers, never panics or errors mid-report
//! - **Rich Errors**: validation errors are structured types, not strings
//!
//! ## Quick Start
//!
//! ```rust
//! use wall_core::{evaluate, WallInput};
//!
//! // The built-in example wall: H = 3 m, B = 1.5 m, φ = 30° sand
//! let input = WallInput::default();
//! let result = evaluate(&input);
//!
//! assert!(result.approved);
//! let json = serde_json::to_string_pretty(&result).unwrap();
//! ```
//!
//! ## Modules
//!
//! - [`calculations`] - the calculation stages and the `evaluate` entry point
//! - [`geometry`] - wall cross-section and passive-zone description
//! - [`soil`] - soil profile and surcharge
//! - [`materials`] - concrete and steel classes, covers, unit weights
//! - [`tables`] - flexure design coefficients and the rebar catalog
//! - [`units`] - type-safe unit wrappers and input coercion
//! - [`errors`] - structured error and warning types

pub mod calculations;
pub mod errors;
pub mod geometry;
pub mod materials;
pub mod soil;
pub mod tables;
pub mod units;

// Re-export commonly used types at crate root for convenience
pub use calculations::{evaluate, CalculationResult, SafetyFactor, WallEngine, WallInput};
pub use errors::{CalcError, CalcResult, Warning};
pub use geometry::{PassiveSoilConfig, WallGeometry};
pub use soil::{SoilProfile, Surcharge};
