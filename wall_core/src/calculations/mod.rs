//! # Wall Calculations
//!
//! The calculation stages of the engine, leaves first. Data flows one way:
//!
//! ```text
//! input -> earth_pressure -> stability -> bearing -> reinforcement -> wall
//! ```
//!
//! Every stage is a pure function of its inputs; nothing mutates another
//! stage's output. The [`wall`] module composes the stages into the single
//! result graph display collaborators consume.
//!
//! ## Available Stages
//!
//! - [`earth_pressure`] - Rankine coefficients and thrust resultants
//! - [`stability`] - weights, levers, overturning and sliding checks
//! - [`bearing`] - eccentricity, contact-pressure distribution, capacity
//! - [`reinforcement`] - base-slab flexural steel sizing
//! - [`wall`] - the `evaluate` entry point and aggregate result

pub mod bearing;
pub mod earth_pressure;
pub mod reinforcement;
pub mod stability;
pub mod wall;

use serde::{Deserialize, Serialize};

// Re-export commonly used types
pub use bearing::{BearingResult, PressureDistribution};
pub use earth_pressure::{ActiveThrust, PassiveThrust};
pub use reinforcement::{RebarSuggestion, ReinforcementResult};
pub use stability::{StabilityResult, WeightComponent};
pub use wall::{evaluate, CalculationResult, WallEngine, WallInput};

/// A factor of safety with explicit sentinel states.
///
/// "Infinite" (no driving action) and "not applicable" (degenerate geometry)
/// are display-only markers; they never participate in further arithmetic as
/// IEEE infinity or NaN.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", content = "value")]
pub enum SafetyFactor {
    /// A finite computed ratio
    Value(f64),
    /// Driving action is zero or negative; the check cannot fail
    Infinite,
    /// The check could not be evaluated (degenerate input)
    NotApplicable,
}

impl SafetyFactor {
    /// Build from a resisting/driving ratio; `Infinite` when the driving
    /// quantity is not positive.
    pub fn from_ratio(resisting: f64, driving: f64) -> Self {
        if driving > 0.0 {
            SafetyFactor::Value(resisting / driving)
        } else {
            SafetyFactor::Infinite
        }
    }

    /// Compare against a required threshold. `Infinite` always passes,
    /// `NotApplicable` never does.
    pub fn meets(&self, required: f64) -> bool {
        match self {
            SafetyFactor::Value(v) => *v >= required,
            SafetyFactor::Infinite => true,
            SafetyFactor::NotApplicable => false,
        }
    }

    /// The finite value, if any
    pub fn value(&self) -> Option<f64> {
        match self {
            SafetyFactor::Value(v) => Some(*v),
            _ => None,
        }
    }
}

impl std::fmt::Display for SafetyFactor {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SafetyFactor::Value(v) => write!(f, "{:.2}", v),
            SafetyFactor::Infinite => write!(f, "∞"),
            SafetyFactor::NotApplicable => write!(f, "N/A"),
        }
    }
}

/// Acceptance thresholds and design factors.
///
/// Defaults reflect standard geotechnical practice; callers may supply their
/// own when constructing a [`WallEngine`].
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct DesignCriteria {
    /// Minimum overturning factor of safety
    pub min_overturning_fs: f64,

    /// Minimum sliding factor of safety
    pub min_sliding_fs: f64,

    /// Load factor applied to the governing moment for reinforcement design
    pub load_factor: f64,

    /// Code-minimum steel ratio (of the gross slab section)
    pub min_steel_ratio: f64,

    /// Absolute floor for distributed (secondary) steel (cm²/m)
    pub distributed_steel_floor_cm2: f64,
}

impl Default for DesignCriteria {
    fn default() -> Self {
        DesignCriteria {
            min_overturning_fs: 2.0,
            min_sliding_fs: 1.5,
            load_factor: 1.4,
            min_steel_ratio: 0.0015,
            distributed_steel_floor_cm2: 0.9,
        }
    }
}
