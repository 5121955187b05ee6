//! # Global Stability
//!
//! Rigid-body stability of the wall: self-weight components with lever arms,
//! overturning moment balance and sliding force balance.
//!
//! Every lever arm in the system is measured from the same fixed reference:
//! the toe edge, at the base underside. The resisting moment gathers the
//! three weight components (base slab, stem, soil prism over the heel); the
//! overturning moment is the active thrust times its line of action, reduced
//! by the passive thrust when one is engaged.

use serde::{Deserialize, Serialize};

use super::earth_pressure::{ActiveThrust, PassiveThrust};
use super::{DesignCriteria, SafetyFactor};
use crate::geometry::WallGeometry;
use crate::materials::DesignMaterials;
use crate::soil::SoilProfile;
use crate::units::{Centimeters, Degrees, Meters};

/// One self-weight component with its lever arm from the toe edge.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WeightComponent {
    /// Component name for display ("base slab", "stem", "heel soil")
    pub label: String,

    /// Weight per running meter (kN/m)
    pub weight_kn: f64,

    /// Lever arm from the toe edge (m)
    pub lever_arm_m: f64,
}

impl WeightComponent {
    fn new(label: &str, weight_kn: f64, lever_arm_m: f64) -> Self {
        WeightComponent {
            label: label.to_string(),
            weight_kn,
            lever_arm_m,
        }
    }

    /// Resisting moment contribution about the toe (kN·m/m)
    pub fn moment_knm(&self) -> f64 {
        self.weight_kn * self.lever_arm_m
    }
}

/// Results of the overturning and sliding checks.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StabilityResult {
    /// Self-weight components, toe-referenced
    pub components: Vec<WeightComponent>,

    /// Total vertical load W (kN/m)
    pub total_weight_kn: f64,

    /// Resisting moment Mr about the toe (kN·m/m)
    pub resisting_moment_knm: f64,

    /// Overturning moment Mt = Ea·y_Ea - Ep·y_Ep (kN·m/m)
    pub overturning_moment_knm: f64,

    /// FS against overturning, Mr/Mt
    pub overturning_fs: SafetyFactor,

    /// True when the overturning FS meets the required threshold
    pub overturning_ok: bool,

    /// Horizontal resisting force W·tanφ + c·B + Ep (kN/m)
    pub resisting_force_kn: f64,

    /// Horizontal driving force Ea (kN/m)
    pub driving_force_kn: f64,

    /// FS against sliding, resisting/driving
    pub sliding_fs: SafetyFactor,

    /// True when the sliding FS meets the required threshold
    pub sliding_ok: bool,
}

impl StabilityResult {
    /// Short-circuit result for degenerate geometry: moments zero, factors
    /// of safety not applicable, nothing approved.
    pub fn not_applicable() -> Self {
        StabilityResult {
            components: Vec::new(),
            total_weight_kn: 0.0,
            resisting_moment_knm: 0.0,
            overturning_moment_knm: 0.0,
            overturning_fs: SafetyFactor::NotApplicable,
            overturning_ok: false,
            resisting_force_kn: 0.0,
            driving_force_kn: 0.0,
            sliding_fs: SafetyFactor::NotApplicable,
            sliding_ok: false,
        }
    }
}

/// Run the overturning and sliding checks.
///
/// `phi` is the already-clamped friction angle of the foundation plane
/// (single-layer profile: same soil as the backfill).
pub fn analyze(
    geometry: &WallGeometry,
    soil: &SoilProfile,
    materials: &DesignMaterials,
    phi: Degrees,
    active: &ActiveThrust,
    passive: Option<&PassiveThrust>,
    criteria: &DesignCriteria,
) -> StabilityResult {
    let base_width: Meters = Centimeters(geometry.base_width_cm).into();
    let base_thickness: Meters = Centimeters(geometry.base_thickness_cm).into();
    let stem_thickness: Meters = Centimeters(geometry.stem_thickness_cm).into();
    let toe: Meters = Centimeters(geometry.toe_width_cm).into();
    let heel: Meters = Centimeters(geometry.heel_width_cm).into();
    let stem_height: Meters = Centimeters(geometry.effective_stem_height_cm()).into();

    let gamma_c = materials.concrete_unit_weight_kn_m3;
    let gamma_soil = soil.effective_unit_weight();

    // Weights: area × unit weight, per meter of wall; arms from the toe edge
    let components = vec![
        WeightComponent::new(
            "base slab",
            gamma_c * base_width.value() * base_thickness.value(),
            base_width.value() / 2.0,
        ),
        WeightComponent::new(
            "stem",
            gamma_c * stem_thickness.value() * stem_height.value(),
            toe.value() + stem_thickness.value() / 2.0,
        ),
        WeightComponent::new(
            "heel soil",
            gamma_soil * heel.value() * stem_height.value(),
            toe.value() + stem_thickness.value() + heel.value() / 2.0,
        ),
    ];

    let total_weight: f64 = components.iter().map(|c| c.weight_kn).sum();
    let resisting_moment: f64 = components.iter().map(|c| c.moment_knm()).sum();

    // Overturning: passive credit reduces the driving moment
    let (ep, ep_moment) = match passive {
        Some(p) => (p.total_kn, p.total_kn * p.line_of_action_m),
        None => (0.0, 0.0),
    };
    let overturning_moment = active.total_kn * active.line_of_action_m - ep_moment;
    let overturning_fs = SafetyFactor::from_ratio(resisting_moment, overturning_moment);

    // Sliding: base friction + cohesion + passive resistance against Ea
    let resisting_force =
        total_weight * phi.tan() + soil.cohesion_kpa * base_width.value() + ep;
    let driving_force = active.total_kn;
    let sliding_fs = SafetyFactor::from_ratio(resisting_force, driving_force);

    StabilityResult {
        components,
        total_weight_kn: total_weight,
        resisting_moment_knm: resisting_moment,
        overturning_moment_knm: overturning_moment,
        overturning_fs,
        overturning_ok: overturning_fs.meets(criteria.min_overturning_fs),
        resisting_force_kn: resisting_force,
        driving_force_kn: driving_force,
        sliding_fs,
        sliding_ok: sliding_fs.meets(criteria.min_sliding_fs),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::calculations::earth_pressure::{active_thrust, passive_thrust};
    use crate::soil::Surcharge;
    use crate::units::Meters;

    fn test_geometry() -> WallGeometry {
        WallGeometry {
            height_cm: 300.0,
            stem_thickness_cm: 24.0,
            base_width_cm: 150.0,
            base_thickness_cm: 24.0,
            toe_width_cm: 50.0,
            heel_width_cm: 76.0,
        }
    }

    fn test_soil() -> SoilProfile {
        SoilProfile {
            unit_weight_kn_m3: 18.0,
            saturated_unit_weight_kn_m3: 20.0,
            friction_angle_deg: 30.0,
            cohesion_kpa: 0.0,
            admissible_bearing_kpa: 200.0,
            water_table: false,
        }
    }

    fn reference_result(passive: Option<&PassiveThrust>) -> StabilityResult {
        let active = active_thrust(Meters(2.76), 18.0, Degrees(30.0), Surcharge::NONE);
        analyze(
            &test_geometry(),
            &test_soil(),
            &DesignMaterials::default(),
            Degrees(30.0),
            &active,
            passive,
            &DesignCriteria::default(),
        )
    }

    #[test]
    fn test_weight_components() {
        let result = reference_result(None);
        assert_eq!(result.components.len(), 3);

        // base slab: 25 × 1.5 × 0.24 = 9.0 kN/m at 0.75 m
        assert!((result.components[0].weight_kn - 9.0).abs() < 1e-9);
        assert!((result.components[0].lever_arm_m - 0.75).abs() < 1e-9);

        // stem: 25 × 0.24 × 2.76 = 16.56 kN/m at 0.62 m
        assert!((result.components[1].weight_kn - 16.56).abs() < 1e-9);
        assert!((result.components[1].lever_arm_m - 0.62).abs() < 1e-9);

        // heel soil: 18 × 0.76 × 2.76 = 37.7568 kN/m at 1.12 m
        assert!((result.components[2].weight_kn - 37.7568).abs() < 1e-9);
        assert!((result.components[2].lever_arm_m - 1.12).abs() < 1e-9);

        assert!((result.total_weight_kn - 63.3168).abs() < 1e-9);
    }

    #[test]
    fn test_reference_moments_and_factors() {
        let result = reference_result(None);

        // Mr = 9.0·0.75 + 16.56·0.62 + 37.7568·1.12 = 59.3048
        assert!((result.resisting_moment_knm - 59.3048).abs() < 1e-3);

        // Mt = 22.853·0.92 = 21.024
        assert!((result.overturning_moment_knm - 21.024).abs() < 1e-2);

        let fs_ot = result.overturning_fs.value().unwrap();
        assert!((fs_ot - 2.82).abs() < 0.01);
        assert!(result.overturning_ok);

        // Sliding: 63.3168·tan30° / 22.853 = 1.60
        let fs_sl = result.sliding_fs.value().unwrap();
        assert!((fs_sl - 1.60).abs() < 0.01);
        assert!(result.sliding_ok);
    }

    #[test]
    fn test_passive_credit_helps_both_checks() {
        let passive = passive_thrust(Meters(0.5), 18.0, Degrees(30.0));
        let without = reference_result(None);
        let with = reference_result(Some(&passive));

        assert!(with.overturning_moment_knm < without.overturning_moment_knm);
        assert!(with.sliding_fs.value().unwrap() > without.sliding_fs.value().unwrap());
    }

    #[test]
    fn test_zero_driving_force_infinite_fs() {
        let active = ActiveThrust::zero();
        let result = analyze(
            &test_geometry(),
            &test_soil(),
            &DesignMaterials::default(),
            Degrees(30.0),
            &active,
            None,
            &DesignCriteria::default(),
        );
        assert_eq!(result.overturning_fs, SafetyFactor::Infinite);
        assert_eq!(result.sliding_fs, SafetyFactor::Infinite);
        assert!(result.overturning_ok);
        assert!(result.sliding_ok);
    }

    #[test]
    fn test_cohesion_adds_sliding_resistance() {
        let active = active_thrust(Meters(2.76), 18.0, Degrees(30.0), Surcharge::NONE);
        let mut soil = test_soil();
        soil.cohesion_kpa = 10.0;
        let with_cohesion = analyze(
            &test_geometry(),
            &soil,
            &DesignMaterials::default(),
            Degrees(30.0),
            &active,
            None,
            &DesignCriteria::default(),
        );
        let without = reference_result(None);
        // c·B = 10 × 1.5 = 15 kN/m extra resistance
        assert!(
            (with_cohesion.resisting_force_kn - without.resisting_force_kn - 15.0).abs() < 1e-9
        );
    }

    #[test]
    fn test_not_applicable() {
        let result = StabilityResult::not_applicable();
        assert_eq!(result.overturning_fs, SafetyFactor::NotApplicable);
        assert!(!result.overturning_ok);
        assert_eq!(result.resisting_moment_knm, 0.0);
    }

    #[test]
    fn test_serialization() {
        let result = reference_result(None);
        let json = serde_json::to_string(&result).unwrap();
        let roundtrip: StabilityResult = serde_json::from_str(&json).unwrap();
        assert_eq!(result, roundtrip);
    }
}
