//! # Earth Pressure (Rankine)
//!
//! Active and passive earth-pressure coefficients and the resultant thrust
//! forces acting on the wall, per running meter.
//!
//! The active thrust combines a triangular component from the soil self
//! weight with a rectangular component from a uniform surcharge; its line of
//! action is the load-weighted centroid of the two. The passive thrust in
//! front of the toe is purely triangular.
//!
//! ## Example
//!
//! ```rust
//! use wall_core::calculations::earth_pressure::{active_thrust, rankine_ka};
//! use wall_core::soil::Surcharge;
//! use wall_core::units::{Degrees, Meters};
//!
//! let ka = rankine_ka(Degrees(30.0));
//! assert!((ka - 1.0 / 3.0).abs() < 1e-9);
//!
//! let active = active_thrust(Meters(2.76), 18.0, Degrees(30.0), Surcharge::NONE);
//! assert!((active.total_kn - 22.85).abs() < 0.01);
//! assert!((active.line_of_action_m - 0.92).abs() < 1e-9);
//! ```

use serde::{Deserialize, Serialize};

use crate::soil::Surcharge;
use crate::units::{Degrees, Meters};

/// Rankine active earth-pressure coefficient, Ka = (1 - sin φ)/(1 + sin φ).
///
/// Equal to tan²(45° - φ/2) for any φ in [0°, 90°); the sine form is the
/// canonical one because it stays finite all the way to the φ = 0 boundary.
pub fn rankine_ka(phi: Degrees) -> f64 {
    let sin_phi = phi.sin();
    (1.0 - sin_phi) / (1.0 + sin_phi)
}

/// Rankine passive earth-pressure coefficient, Kp = (1 + sin φ)/(1 - sin φ).
///
/// Reciprocal of Ka; the caller is expected to clamp φ below 90° (see
/// [`crate::soil::SoilProfile::clamped_friction_angle`]).
pub fn rankine_kp(phi: Degrees) -> f64 {
    let sin_phi = phi.sin();
    (1.0 + sin_phi) / (1.0 - sin_phi)
}

/// Active thrust resultant on the virtual back of the wall.
///
/// Forces are per running meter (kN/m); the line of action is measured from
/// the bottom of the pressure wedge.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ActiveThrust {
    /// Active coefficient Ka
    pub ka: f64,

    /// Triangular (soil self-weight) component, 0.5·Ka·γ·H² (kN/m)
    pub triangle_kn: f64,

    /// Rectangular (surcharge) component, Ka·q·H (kN/m)
    pub rectangle_kn: f64,

    /// Total active thrust Ea (kN/m)
    pub total_kn: f64,

    /// Height of the resultant above the wedge bottom (m), load-weighted
    pub line_of_action_m: f64,

    /// Lateral pressure at the wedge bottom, Ka·γ·H + Ka·q (kPa)
    pub pressure_at_base_kpa: f64,
}

impl ActiveThrust {
    /// A zero thrust (degenerate geometry short-circuit)
    pub fn zero() -> Self {
        ActiveThrust {
            ka: 0.0,
            triangle_kn: 0.0,
            rectangle_kn: 0.0,
            total_kn: 0.0,
            line_of_action_m: 0.0,
            pressure_at_base_kpa: 0.0,
        }
    }
}

/// Compute the active thrust over an effective height.
///
/// # Arguments
///
/// * `effective_height` - height of the retained wedge above the base slab
/// * `gamma_eff` - effective unit weight of the retained soil (kN/m³)
/// * `phi` - friction angle, already clamped into [0°, 90°)
/// * `surcharge` - uniform surface load on the backfill
pub fn active_thrust(
    effective_height: Meters,
    gamma_eff: f64,
    phi: Degrees,
    surcharge: Surcharge,
) -> ActiveThrust {
    let h = effective_height.value().max(0.0);
    let ka = rankine_ka(phi);

    let triangle = 0.5 * ka * gamma_eff * h * h;
    let rectangle = ka * surcharge.q_kpa.max(0.0) * h;
    let total = triangle + rectangle;

    // Load-weighted centroid: triangle at H/3, rectangle at H/2
    let line_of_action = if total > 0.0 {
        (triangle * (h / 3.0) + rectangle * (h / 2.0)) / total
    } else {
        0.0
    };

    ActiveThrust {
        ka,
        triangle_kn: triangle,
        rectangle_kn: rectangle,
        total_kn: total,
        line_of_action_m: line_of_action,
        pressure_at_base_kpa: ka * gamma_eff * h + ka * surcharge.q_kpa.max(0.0),
    }
}

/// Passive thrust resultant in front of the toe.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PassiveThrust {
    /// Passive coefficient Kp
    pub kp: f64,

    /// Passive thrust Ep = 0.5·Kp·γ·hp² (kN/m)
    pub total_kn: f64,

    /// Height of the resultant above the base, hp/3 (m)
    pub line_of_action_m: f64,
}

/// Compute the passive thrust over the passive-zone height.
///
/// The caller is responsible for the effectiveness gate (hp must clear the
/// base slab); this function only evaluates the triangular resultant.
pub fn passive_thrust(passive_height: Meters, gamma_eff: f64, phi: Degrees) -> PassiveThrust {
    let hp = passive_height.value().max(0.0);
    let kp = rankine_kp(phi);
    PassiveThrust {
        kp,
        total_kn: 0.5 * kp * gamma_eff * hp * hp,
        line_of_action_m: hp / 3.0,
    }
}
