//! # Soil Profile
//!
//! Single-layer soil description used for both the retained backfill and the
//! foundation plane. Multi-layer profiles and seismic loading are outside the
//! engine's scope.
//!
//! ## Example
//!
//! ```rust
//! use wall_core::soil::SoilProfile;
//!
//! let soil = SoilProfile {
//!     unit_weight_kn_m3: 18.0,
//!     saturated_unit_weight_kn_m3: 20.0,
//!     friction_angle_deg: 30.0,
//!     cohesion_kpa: 0.0,
//!     admissible_bearing_kpa: 200.0,
//!     water_table: false,
//! };
//! assert_eq!(soil.effective_unit_weight(), 18.0);
//! ```

use serde::{Deserialize, Serialize};

use crate::errors::{CalcError, CalcResult, Warning};
use crate::units::Degrees;

/// Unit weight of water (kN/m³), used for the submerged-weight adjustment
pub const GAMMA_WATER_KN_M3: f64 = 9.81;

/// Clamp ceiling for the friction angle; Rankine coefficients blow up at 90°
pub const PHI_MAX_DEG: f64 = 89.9;

/// Retained / foundation soil properties.
///
/// ## JSON Example
///
/// ```json
/// {
///   "unit_weight_kn_m3": 18.0,
///   "saturated_unit_weight_kn_m3": 20.0,
///   "friction_angle_deg": 30.0,
///   "cohesion_kpa": 0.0,
///   "admissible_bearing_kpa": 200.0,
///   "water_table": false
/// }
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SoilProfile {
    /// Natural unit weight γ (kN/m³)
    pub unit_weight_kn_m3: f64,

    /// Saturated unit weight γ_sat (kN/m³); used when the water table is up
    pub saturated_unit_weight_kn_m3: f64,

    /// Internal friction angle φ (degrees)
    pub friction_angle_deg: f64,

    /// Cohesion c (kPa)
    pub cohesion_kpa: f64,

    /// Admissible bearing pressure qa (kPa)
    pub admissible_bearing_kpa: f64,

    /// Whether a water table sits within the retained mass
    pub water_table: bool,
}

impl SoilProfile {
    /// Validate soil parameters.
    pub fn validate(&self) -> CalcResult<()> {
        if self.unit_weight_kn_m3 < 0.0 {
            return Err(CalcError::invalid_input(
                "unit_weight_kn_m3",
                self.unit_weight_kn_m3.to_string(),
                "Unit weight cannot be negative",
            ));
        }
        if self.water_table && self.saturated_unit_weight_kn_m3 < 0.0 {
            return Err(CalcError::invalid_input(
                "saturated_unit_weight_kn_m3",
                self.saturated_unit_weight_kn_m3.to_string(),
                "Saturated unit weight cannot be negative",
            ));
        }
        if self.cohesion_kpa < 0.0 {
            return Err(CalcError::invalid_input(
                "cohesion_kpa",
                self.cohesion_kpa.to_string(),
                "Cohesion cannot be negative",
            ));
        }
        if !(0.0..=90.0).contains(&self.friction_angle_deg) {
            return Err(CalcError::invalid_input(
                "friction_angle_deg",
                self.friction_angle_deg.to_string(),
                "Friction angle must lie in [0°, 90°]",
            ));
        }
        Ok(())
    }

    /// Effective unit weight γ_eff for pressure and soil-prism weight.
    ///
    /// Submerged weight γ_sat − γ_w when the water table is up, clamped at
    /// zero; natural weight otherwise.
    pub fn effective_unit_weight(&self) -> f64 {
        if self.water_table {
            (self.saturated_unit_weight_kn_m3 - GAMMA_WATER_KN_M3).max(0.0)
        } else {
            self.unit_weight_kn_m3
        }
    }

    /// Friction angle clamped into [0°, PHI_MAX_DEG], with a warning when the
    /// raw value was outside the open interval (0°, 90°).
    ///
    /// Degenerate angles never propagate NaN or infinity into Ka/Kp: φ = 0
    /// degrades to the at-rest-like Ka = Kp = 1, and φ >= 90 is pulled just
    /// inside the pole.
    pub fn clamped_friction_angle(&self) -> (Degrees, Option<Warning>) {
        let phi = self.friction_angle_deg;
        if phi <= 0.0 {
            (
                Degrees(0.0),
                Some(Warning::FrictionAngleClamped {
                    given: phi,
                    clamped: 0.0,
                }),
            )
        } else if phi >= 90.0 {
            (
                Degrees(PHI_MAX_DEG),
                Some(Warning::FrictionAngleClamped {
                    given: phi,
                    clamped: PHI_MAX_DEG,
                }),
            )
        } else {
            (Degrees(phi), None)
        }
    }
}

/// Uniform surface load q on top of the retained soil (kPa).
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Surcharge {
    /// Load intensity q (kPa)
    pub q_kpa: f64,
}

impl Surcharge {
    /// No surcharge
    pub const NONE: Surcharge = Surcharge { q_kpa: 0.0 };
}
