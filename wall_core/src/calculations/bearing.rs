//! # Foundation Contact Pressure
//!
//! Position of the resultant on the base, eccentricity about the base
//! midpoint, contact-pressure distribution and the bearing-capacity checks.
//!
//! ## Sign convention
//!
//! The resultant position x̄ = (Mr − Mt)/W is measured from the toe edge;
//! the eccentricity is e = B/2 − x̄, positive when the resultant sits on the
//! toe side of the midpoint. With positive e the maximum pressure occurs at
//! the toe. This convention is fixed here and reused everywhere e appears.
//!
//! Within the middle third (|e| ≤ B/6, inclusive with a floating-point
//! tolerance) the distribution is trapezoidal, q = (W/B)(1 ± 6e/B). Outside
//! it the contact area shrinks to B′ = B − 2|e| and the distribution becomes
//! triangular with q_min = 0 and q_max = 2W/(3·B′).

use serde::{Deserialize, Serialize};

use crate::errors::Warning;
use crate::soil::SoilProfile;
use crate::units::Degrees;

/// Inclusive tolerance on the middle-third boundary so |e| = B/6 ± round-off
/// does not oscillate between branches
const MIDDLE_THIRD_TOL_M: f64 = 1e-9;

/// Shape of the base contact-pressure diagram.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum PressureDistribution {
    /// Resultant within the middle third; full base width in compression
    Trapezoidal,
    /// Resultant outside the middle third; reduced triangular contact
    Triangular,
}

/// Terzaghi-style ultimate bearing capacity, reported alongside the
/// admissible-pressure check.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TerzaghiCapacity {
    /// Overburden factor Nq = e^{π·tanφ}·tan²(45° + φ/2)
    pub nq: f64,
    /// Cohesion factor Nc = (Nq − 1)/tanφ, with the φ→0 limit π + 2
    pub nc: f64,
    /// Self-weight factor Nγ = 2(Nq + 1)·tanφ
    pub ngamma: f64,
    /// Ultimate capacity qu = c·Nc + q_ov·Nq + 0.5·γ·B′·Nγ (kPa)
    pub qu_kpa: f64,
}

/// Compute the Terzaghi bearing-capacity factors and ultimate capacity over
/// the effective width.
pub fn ultimate_bearing_capacity(
    phi: Degrees,
    cohesion_kpa: f64,
    gamma: f64,
    overburden_kpa: f64,
    effective_width_m: f64,
) -> TerzaghiCapacity {
    let tan_phi = phi.tan();
    let (nq, nc, ngamma) = if tan_phi < 1e-6 {
        // φ → 0 limit of the closed-form factors
        (1.0, std::f64::consts::PI + 2.0, 0.0)
    } else {
        let nq = (std::f64::consts::PI * tan_phi).exp()
            * (45.0 + phi.value() / 2.0).to_radians().tan().powi(2);
        ((nq), (nq - 1.0) / tan_phi, 2.0 * (nq + 1.0) * tan_phi)
    };
    let qu = cohesion_kpa * nc
        + overburden_kpa * nq
        + 0.5 * gamma * effective_width_m.max(0.0) * ngamma;
    TerzaghiCapacity {
        nq,
        nc,
        ngamma,
        qu_kpa: qu,
    }
}

/// Results of the foundation pressure analysis.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BearingResult {
    /// Resultant position x̄ from the toe edge (m)
    pub resultant_position_m: f64,

    /// Eccentricity e = B/2 − x̄ about the base midpoint (m, toe-positive)
    pub eccentricity_m: f64,

    /// Middle-third limit B/6 (m)
    pub middle_third_limit_m: f64,

    /// True when |e| ≤ B/6 (inclusive)
    pub within_middle_third: bool,

    /// Distribution shape actually used
    pub distribution: PressureDistribution,

    /// Compressed base width: B, or B′ = B − 2|e| outside the middle third (m)
    pub effective_width_m: f64,

    /// Average pressure W/B (kPa)
    pub q_avg_kpa: f64,

    /// Peak contact pressure (kPa)
    pub q_max_kpa: f64,

    /// Minimum contact pressure (kPa; 0 in the triangular branch)
    pub q_min_kpa: f64,

    /// Admissible bearing pressure qa the peak is checked against (kPa)
    pub admissible_kpa: f64,

    /// Terzaghi ultimate capacity, for reference
    pub ultimate: TerzaghiCapacity,

    /// q_max ≤ qa
    pub stress_ok: bool,

    /// Overall bearing approval: within the middle third and stress ok
    pub bearing_ok: bool,
}

impl BearingResult {
    /// Short-circuit result for degenerate geometry.
    pub fn not_applicable(admissible_kpa: f64) -> Self {
        BearingResult {
            resultant_position_m: 0.0,
            eccentricity_m: 0.0,
            middle_third_limit_m: 0.0,
            within_middle_third: false,
            distribution: PressureDistribution::Trapezoidal,
            effective_width_m: 0.0,
            q_avg_kpa: 0.0,
            q_max_kpa: 0.0,
            q_min_kpa: 0.0,
            admissible_kpa,
            ultimate: TerzaghiCapacity {
                nq: 0.0,
                nc: 0.0,
                ngamma: 0.0,
                qu_kpa: 0.0,
            },
            stress_ok: false,
            bearing_ok: false,
        }
    }
}

/// Analyze the base contact pressures and capacity.
///
/// # Arguments
///
/// * `total_weight_kn` - vertical resultant W (kN/m)
/// * `resisting_moment_knm` / `overturning_moment_knm` - toe-referenced
///   moments from the stability pass (kN·m/m)
/// * `base_width_m` - base width B (m)
/// * `soil` - foundation soil (qa, c, γ)
/// * `phi` - clamped friction angle for the Terzaghi factors
///
/// Warnings (tension, outside middle third) are appended in order.
pub fn analyze(
    total_weight_kn: f64,
    resisting_moment_knm: f64,
    overturning_moment_knm: f64,
    base_width_m: f64,
    soil: &SoilProfile,
    phi: Degrees,
    warnings: &mut Vec<Warning>,
) -> BearingResult {
    let b = base_width_m;
    let qa = soil.admissible_bearing_kpa;
    if b <= 0.0 || total_weight_kn <= 0.0 {
        return BearingResult::not_applicable(qa);
    }

    let resultant_position = (resisting_moment_knm - overturning_moment_knm) / total_weight_kn;
    let eccentricity = b / 2.0 - resultant_position;
    let limit = b / 6.0;
    let within = eccentricity.abs() <= limit + MIDDLE_THIRD_TOL_M;

    let q_avg = total_weight_kn / b;

    let (distribution, effective_width, q_max, q_min) = if within {
        let ratio = 6.0 * eccentricity / b;
        let q_toe = q_avg * (1.0 + ratio);
        let q_heel = q_avg * (1.0 - ratio);
        // Round-off inside the tolerance band may dip fractionally below zero
        let q_max = q_toe.max(q_heel);
        let q_min = q_toe.min(q_heel).max(0.0);
        (PressureDistribution::Trapezoidal, b, q_max, q_min)
    } else {
        // Hypothetical trapezoid has a tension tail; surface it and switch
        let ratio = 6.0 * eccentricity / b;
        let q_min_trapezoid = q_avg * (1.0 - ratio.abs());
        warnings.push(Warning::BaseTension {
            q_min_kpa: q_min_trapezoid,
        });
        warnings.push(Warning::OutsideMiddleThird {
            e_m: eccentricity,
            limit_m: limit,
        });
        let b_eff = (b - 2.0 * eccentricity.abs()).max(1e-6);
        let q_max = 2.0 * total_weight_kn / (3.0 * b_eff);
        (PressureDistribution::Triangular, b_eff, q_max, 0.0)
    };

    let ultimate = ultimate_bearing_capacity(
        phi,
        soil.cohesion_kpa,
        soil.effective_unit_weight(),
        0.0,
        effective_width,
    );

    let stress_ok = qa > 0.0 && q_max <= qa;

    BearingResult {
        resultant_position_m: resultant_position,
        eccentricity_m: eccentricity,
        middle_third_limit_m: limit,
        within_middle_third: within,
        distribution,
        effective_width_m: effective_width,
        q_avg_kpa: q_avg,
        q_max_kpa: q_max,
        q_min_kpa: q_min,
        admissible_kpa: qa,
        ultimate,
        stress_ok,
        bearing_ok: within && stress_ok,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

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

    #[test]
    fn test_reference_case_within_middle_third() {
        // Values from the H=300/B=150 reference wall
        let mut warnings = Vec::new();
        let result = analyze(
            63.3168,
            59.3048,
            21.0246,
            1.5,
            &test_soil(),
            Degrees(30.0),
            &mut warnings,
        );
        assert!(warnings.is_empty());

        // x̄ = (59.3048 - 21.0246)/63.3168 = 0.6046 m; e = 0.75 - 0.6046
        assert!((result.resultant_position_m - 0.6046).abs() < 1e-3);
        assert!((result.eccentricity_m - 0.1454).abs() < 1e-3);
        assert!(result.within_middle_third);
        assert_eq!(result.distribution, PressureDistribution::Trapezoidal);

        // q_avg = 42.21; q_max = 42.21·(1 + 6·0.1454/1.5) = 66.77
        assert!((result.q_avg_kpa - 42.211).abs() < 1e-2);
        assert!((result.q_max_kpa - 66.76).abs() < 0.1);
        assert!((result.q_min_kpa - 17.66).abs() < 0.1);
        assert!(result.q_max_kpa >= result.q_avg_kpa);
        assert!(result.q_avg_kpa >= result.q_min_kpa);
        assert!(result.q_min_kpa >= 0.0);
        assert!(result.stress_ok);
        assert!(result.bearing_ok);
    }

    #[test]
    fn test_centered_resultant_uniform_pressure() {
        let mut warnings = Vec::new();
        // Mr places the resultant exactly at midspan: x̄ = 0.75 on B = 1.5
        let result = analyze(100.0, 75.0, 0.0, 1.5, &test_soil(), Degrees(30.0), &mut warnings);
        assert!(result.eccentricity_m.abs() < 1e-12);
        assert!((result.q_max_kpa - result.q_min_kpa).abs() < 1e-9);
        assert!((result.q_avg_kpa - 100.0 / 1.5).abs() < 1e-9);
    }

    #[test]
    fn test_middle_third_boundary_inclusive() {
        // e exactly B/6: q_min = 0, still trapezoidal, no tension warning
        let b: f64 = 1.5;
        let w = 60.0;
        // x̄ = B/2 - B/6 = 0.5; Mr - Mt = W·x̄
        let mut warnings = Vec::new();
        let result = analyze(w, w * 0.5, 0.0, b, &test_soil(), Degrees(30.0), &mut warnings);
        assert!(result.within_middle_third);
        assert_eq!(result.distribution, PressureDistribution::Trapezoidal);
        assert!(result.q_min_kpa.abs() < 1e-6);
        assert!(warnings.is_empty());
    }

    #[test]
    fn test_outside_middle_third_triangular() {
        // x̄ = 0.3 on B = 1.5: e = 0.45 > 0.25
        let w = 60.0;
        let mut warnings = Vec::new();
        let result = analyze(w, w * 0.3, 0.0, 1.5, &test_soil(), Degrees(30.0), &mut warnings);

        assert!(!result.within_middle_third);
        assert_eq!(result.distribution, PressureDistribution::Triangular);
        assert_eq!(result.q_min_kpa, 0.0);

        // B' = 1.5 - 0.9 = 0.6; q_max = 2·60/(3·0.6) = 66.67
        assert!((result.effective_width_m - 0.6).abs() < 1e-9);
        assert!((result.q_max_kpa - 66.667).abs() < 1e-2);

        assert!(!result.bearing_ok);
        assert!(matches!(warnings[0], Warning::BaseTension { .. }));
        assert!(matches!(warnings[1], Warning::OutsideMiddleThird { .. }));
    }

    #[test]
    fn test_overstressed_base() {
        let mut soil = test_soil();
        soil.admissible_bearing_kpa = 30.0;
        let mut warnings = Vec::new();
        let result = analyze(100.0, 75.0, 0.0, 1.5, &soil, Degrees(30.0), &mut warnings);
        assert!(result.q_max_kpa > 30.0);
        assert!(!result.stress_ok);
        assert!(!result.bearing_ok);
    }

    #[test]
    fn test_terzaghi_factors_phi_30() {
        let capacity = ultimate_bearing_capacity(Degrees(30.0), 0.0, 18.0, 0.0, 1.5);
        // Published values: Nq = 18.40, Nc = 30.14, Nγ = 22.40
        assert!((capacity.nq - 18.40).abs() < 0.05);
        assert!((capacity.nc - 30.14).abs() < 0.05);
        assert!((capacity.ngamma - 22.40).abs() < 0.05);
        // qu = 0.5·18·1.5·Nγ
        assert!((capacity.qu_kpa - 0.5 * 18.0 * 1.5 * capacity.ngamma).abs() < 1e-9);
    }

    #[test]
    fn test_terzaghi_phi_zero_limit() {
        let capacity = ultimate_bearing_capacity(Degrees(0.0), 25.0, 18.0, 10.0, 1.5);
        assert_eq!(capacity.nq, 1.0);
        assert!((capacity.nc - (std::f64::consts::PI + 2.0)).abs() < 1e-12);
        assert_eq!(capacity.ngamma, 0.0);
        // qu = 25·5.14 + 10·1
        assert!((capacity.qu_kpa - (25.0 * (std::f64::consts::PI + 2.0) + 10.0)).abs() < 1e-9);
    }

    #[test]
    fn test_zero_weight_not_applicable() {
        let mut warnings = Vec::new();
        let result = analyze(0.0, 0.0, 0.0, 1.5, &test_soil(), Degrees(30.0), &mut warnings);
        assert!(!result.bearing_ok);
        assert_eq!(result.q_max_kpa, 0.0);
    }

    #[test]
    fn test_serialization() {
        let mut warnings = Vec::new();
        let result = analyze(100.0, 75.0, 0.0, 1.5, &test_soil(), Degrees(30.0), &mut warnings);
        let json = serde_json::to_string(&result).unwrap();
        let roundtrip: BearingResult = serde_json::from_str(&json).unwrap();
        assert_eq!(result, roundtrip);
    }
}
