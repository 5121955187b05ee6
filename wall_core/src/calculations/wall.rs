//! # Wall Evaluation
//!
//! The single logical operation the engine exposes:
//! `evaluate(input) -> CalculationResult`. Presentation collaborators build a
//! [`WallInput`] from resolved form values (centimeters, kN/m³, degrees,
//! kPa), call `evaluate`, and format the result; they never recompute
//! comparisons themselves — the approval flags on the result are the single
//! source of truth.
//!
//! The engine is stateless: every call recomputes the whole result graph
//! from scratch, so repeated calls with identical inputs are bit-identical
//! and concurrent calls need no synchronization.
//!
//! ## Example
//!
//! ```rust
//! use wall_core::calculations::wall::{evaluate, WallInput};
//! use wall_core::geometry::WallGeometry;
//! use wall_core::soil::SoilProfile;
//!
//! let input = WallInput {
//!     geometry: WallGeometry::from_toe(300.0, 24.0, 150.0, 24.0, 50.0),
//!     soil: SoilProfile {
//!         unit_weight_kn_m3: 18.0,
//!         saturated_unit_weight_kn_m3: 20.0,
//!         friction_angle_deg: 30.0,
//!         cohesion_kpa: 0.0,
//!         admissible_bearing_kpa: 200.0,
//!         water_table: false,
//!     },
//!     ..Default::default()
//! };
//!
//! let result = evaluate(&input);
//! assert!(result.approved);
//! ```

use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};

use super::bearing::{self, BearingResult};
use super::earth_pressure::{active_thrust, passive_thrust, ActiveThrust, PassiveThrust};
use super::reinforcement::{self, ReinforcementResult};
use super::stability::{self, StabilityResult};
use super::DesignCriteria;
use crate::errors::Warning;
use crate::geometry::{PassiveSoilConfig, WallGeometry};
use crate::materials::DesignMaterials;
use crate::soil::{SoilProfile, Surcharge};
use crate::tables::{
    DesignCoefficientTable, RebarCatalog, DEFAULT_COEFFICIENT_TABLE, DEFAULT_REBAR_CATALOG,
};
use crate::units::{Centimeters, Meters};

/// Complete input for one calculation pass.
///
/// Callers resolve all form defaults before building this; the engine does
/// no default-filling of its own beyond the struct-level `Default`s used for
/// optional sections.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WallInput {
    /// Cross-section dimensions (cm)
    pub geometry: WallGeometry,

    /// Retained/foundation soil
    pub soil: SoilProfile,

    /// Passive-resistance configuration
    #[serde(default)]
    pub passive: PassiveSoilConfig,

    /// Uniform surcharge on the backfill (kPa)
    #[serde(default)]
    pub surcharge: Surcharge,

    /// Concrete/steel selections for the reinforcement pass
    #[serde(default)]
    pub materials: DesignMaterials,
}

impl Default for WallInput {
    fn default() -> Self {
        WallInput {
            geometry: WallGeometry::from_toe(300.0, 24.0, 150.0, 24.0, 50.0),
            soil: SoilProfile {
                unit_weight_kn_m3: 18.0,
                saturated_unit_weight_kn_m3: 20.0,
                friction_angle_deg: 30.0,
                cohesion_kpa: 0.0,
                admissible_bearing_kpa: 200.0,
                water_table: false,
            },
            passive: PassiveSoilConfig::default(),
            surcharge: Surcharge::NONE,
            materials: DesignMaterials::default(),
        }
    }
}

/// The full result graph, born complete and discarded on the next input
/// change; nothing in it is mutated incrementally.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CalculationResult {
    /// Echo of the evaluated input, for report headers
    pub input: WallInput,

    /// Active thrust on the virtual back
    pub active: ActiveThrust,

    /// Passive thrust, `None` when disabled or ineffective
    pub passive: Option<PassiveThrust>,

    /// Overturning and sliding checks
    pub stability: StabilityResult,

    /// Base contact pressures and capacity
    pub bearing: BearingResult,

    /// Base-slab steel sizing
    pub reinforcement: ReinforcementResult,

    /// Overall verdict: overturning, sliding and bearing all approved
    pub approved: bool,

    /// Ordered, never-discarded warnings accumulated across the stages
    pub warnings: Vec<Warning>,
}

/// The calculation engine: acceptance criteria plus the read-only reference
/// data (coefficient table and rebar catalog) supplied at construction.
#[derive(Debug, Clone)]
pub struct WallEngine {
    criteria: DesignCriteria,
    table: DesignCoefficientTable,
    catalog: RebarCatalog,
}

impl Default for WallEngine {
    fn default() -> Self {
        WallEngine {
            criteria: DesignCriteria::default(),
            table: DEFAULT_COEFFICIENT_TABLE.clone(),
            catalog: DEFAULT_REBAR_CATALOG.clone(),
        }
    }
}

static DEFAULT_ENGINE: Lazy<WallEngine> = Lazy::new(WallEngine::default);

impl WallEngine {
    /// Build an engine with custom criteria and reference data.
    pub fn new(
        criteria: DesignCriteria,
        table: DesignCoefficientTable,
        catalog: RebarCatalog,
    ) -> Self {
        WallEngine {
            criteria,
            table,
            catalog,
        }
    }

    /// The acceptance criteria in force.
    pub fn criteria(&self) -> &DesignCriteria {
        &self.criteria
    }

    /// Run the full calculation pass.
    ///
    /// Never fails: degenerate inputs short-circuit to a result with
    /// not-applicable markers, `approved = false` and an explanatory
    /// warning.
    pub fn evaluate(&self, input: &WallInput) -> CalculationResult {
        let mut warnings = Vec::new();

        if input.geometry.is_degenerate() {
            warnings.push(Warning::InvalidGeometry {
                reason: "wall height and base width must be positive and the \
                         base cannot be thicker than the wall"
                    .to_string(),
            });
            return CalculationResult {
                input: input.clone(),
                active: ActiveThrust::zero(),
                passive: None,
                stability: StabilityResult::not_applicable(),
                bearing: BearingResult::not_applicable(input.soil.admissible_bearing_kpa),
                reinforcement: ReinforcementResult::not_applicable(),
                approved: false,
                warnings,
            };
        }

        let (phi, phi_warning) = input.soil.clamped_friction_angle();
        if let Some(w) = phi_warning {
            warnings.push(w);
        }
        let gamma_eff = input.soil.effective_unit_weight();

        // Earth pressures
        let effective_height: Meters =
            Centimeters(input.geometry.effective_stem_height_cm()).into();
        let active = active_thrust(effective_height, gamma_eff, phi, input.surcharge);

        let passive = if input.passive.enabled {
            if input.passive.is_effective(input.geometry.base_thickness_cm) {
                let hp: Meters = Centimeters(input.passive.height_cm).into();
                Some(passive_thrust(hp, gamma_eff, phi))
            } else {
                warnings.push(Warning::PassiveIneffective {
                    hp_cm: input.passive.height_cm,
                    base_cm: input.geometry.base_thickness_cm,
                });
                None
            }
        } else {
            None
        };

        // Rigid-body stability
        let stability = stability::analyze(
            &input.geometry,
            &input.soil,
            &input.materials,
            phi,
            &active,
            passive.as_ref(),
            &self.criteria,
        );

        // Foundation pressures
        let base_width: Meters = Centimeters(input.geometry.base_width_cm).into();
        let bearing = bearing::analyze(
            stability.total_weight_kn,
            stability.resisting_moment_knm,
            stability.overturning_moment_knm,
            base_width.value(),
            &input.soil,
            phi,
            &mut warnings,
        );

        // Base-slab steel, sized for the service overturning moment
        let reinforcement = reinforcement::design(
            stability.overturning_moment_knm.max(0.0),
            input.geometry.base_thickness_cm,
            &input.materials,
            &self.criteria,
            &self.table,
            &self.catalog,
            &mut warnings,
        );

        let approved = stability.overturning_ok && stability.sliding_ok && bearing.bearing_ok;

        CalculationResult {
            input: input.clone(),
            active,
            passive,
            stability,
            bearing,
            reinforcement,
            approved,
            warnings,
        }
    }
}

/// Evaluate with the built-in criteria, coefficient table and rebar catalog.
pub fn evaluate(input: &WallInput) -> CalculationResult {
    DEFAULT_ENGINE.evaluate(input)
}
