//! # Base-Slab Reinforcement
//!
//! Minimum flexural steel for the base slab: design moment, coefficient
//! lookup (kc → ks), required and minimum areas, distributed (secondary)
//! steel and candidate bar/spacing combinations from the rebar catalog.
//!
//! Units follow the coefficient table: moments in kN·cm per meter of wall,
//! depths in cm, steel areas in cm²/m.

use serde::{Deserialize, Serialize};

use super::DesignCriteria;
use crate::errors::Warning;
use crate::materials::DesignMaterials;
use crate::tables::{DesignCoefficientTable, RebarCatalog};

/// Fallback effective depth as a fraction of the slab thickness when cover
/// and bar diameter eat the whole section
const EFFECTIVE_DEPTH_FALLBACK_RATIO: f64 = 0.8;

/// Synthetic fallback suggestion when the catalog has no qualifying pair
const FALLBACK_DIAMETER_MM: f64 = 10.0;
const FALLBACK_SPACING_CM: f64 = 15.0;

/// One bar/spacing candidate meeting the adopted steel area.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RebarSuggestion {
    /// Bar diameter (mm)
    pub diameter_mm: f64,

    /// Center-to-center spacing (cm)
    pub spacing_cm: f64,

    /// Provided steel area (cm²/m)
    pub provided_area_cm2: f64,

    /// Basic anchorage length for this bar (cm)
    pub anchorage_cm: f64,

    /// True when no catalog pair qualified and this pair is synthetic
    pub synthetic: bool,
}

/// Results of the reinforcement pass.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ReinforcementResult {
    /// Design moment Md = load factor × governing moment (kN·cm/m)
    pub design_moment_kncm: f64,

    /// Effective depth used (cm)
    pub effective_depth_cm: f64,

    /// True when the effective depth fell back to the conservative default
    /// and the whole result is an estimate
    pub estimated: bool,

    /// Required coefficient kc = 100·d²/Md (0 when Md ≤ 0)
    pub kc_required: f64,

    /// kc of the matched table row
    pub kc_table: f64,

    /// ks of the matched table row
    pub ks: f64,

    /// Required steel area As = ks·Md/d (cm²/m)
    pub required_area_cm2: f64,

    /// Code-minimum steel area (cm²/m)
    pub minimum_area_cm2: f64,

    /// Adopted area, max(required, minimum) (cm²/m)
    pub adopted_area_cm2: f64,

    /// Distributed (secondary) steel area (cm²/m)
    pub distributed_area_cm2: f64,

    /// Qualifying bar/spacing combinations, ascending by provided area,
    /// at most three
    pub suggestions: Vec<RebarSuggestion>,
}

impl ReinforcementResult {
    /// The tightest qualifying combination
    pub fn selected(&self) -> Option<&RebarSuggestion> {
        self.suggestions.first()
    }

    /// Short-circuit result for degenerate geometry.
    pub fn not_applicable() -> Self {
        ReinforcementResult {
            design_moment_kncm: 0.0,
            effective_depth_cm: 0.0,
            estimated: false,
            kc_required: 0.0,
            kc_table: 0.0,
            ks: 0.0,
            required_area_cm2: 0.0,
            minimum_area_cm2: 0.0,
            adopted_area_cm2: 0.0,
            distributed_area_cm2: 0.0,
            suggestions: Vec::new(),
        }
    }
}

/// Size the base-slab flexural steel.
///
/// # Arguments
///
/// * `governing_moment_knm` - the service overturning/driving moment at the
///   base (kN·m/m); amplified by the criteria's load factor here
/// * `slab_thickness_cm` - base slab thickness d (cm)
pub fn design(
    governing_moment_knm: f64,
    slab_thickness_cm: f64,
    materials: &DesignMaterials,
    criteria: &DesignCriteria,
    table: &DesignCoefficientTable,
    catalog: &RebarCatalog,
    warnings: &mut Vec<Warning>,
) -> ReinforcementResult {
    // kN·m/m -> kN·cm/m, then the load factor
    let md_kncm = governing_moment_knm.max(0.0) * 100.0 * criteria.load_factor;

    // d_eff = d - cover - φ/2, conservative fallback when non-positive
    let raw_depth =
        slab_thickness_cm - materials.cover_cm - 0.5 * materials.reference_bar_diameter_cm;
    let (effective_depth, estimated) = if raw_depth > 0.0 {
        (raw_depth, false)
    } else {
        let fallback = slab_thickness_cm * EFFECTIVE_DEPTH_FALLBACK_RATIO;
        warnings.push(Warning::EffectiveDepthFallback {
            fallback_cm: fallback,
        });
        (fallback, true)
    };

    let (kc_required, kc_table, ks, required_area) =
        if md_kncm > 0.0 && effective_depth > 0.0 {
            let kc_required = 100.0 * effective_depth * effective_depth / md_kncm;
            let lookup = table.lookup(kc_required, materials.concrete, materials.steel);
            let required = lookup.ks * md_kncm / effective_depth;
            (kc_required, lookup.kc_table, lookup.ks, required)
        } else {
            // No bending demand: minimum steel governs outright
            (0.0, 0.0, 0.0, 0.0)
        };

    // Asmin = ρ_min · 100 cm · d
    let minimum_area = criteria.min_steel_ratio * 100.0 * slab_thickness_cm;
    let adopted_area = required_area.max(minimum_area);

    // Secondary direction: half the minimum, a fifth of the adopted, or the
    // absolute floor, whichever governs
    let distributed_area = (minimum_area / 2.0)
        .max(adopted_area / 5.0)
        .max(criteria.distributed_steel_floor_cm2);

    let suggestions = suggest(adopted_area, materials, catalog);

    ReinforcementResult {
        design_moment_kncm: md_kncm,
        effective_depth_cm: effective_depth,
        estimated,
        kc_required,
        kc_table,
        ks,
        required_area_cm2: required_area,
        minimum_area_cm2: minimum_area,
        adopted_area_cm2: adopted_area,
        distributed_area_cm2: distributed_area,
        suggestions,
    }
}

/// Enumerate qualifying bar/spacing pairs, tightest first, capped at three.
fn suggest(
    adopted_area_cm2: f64,
    materials: &DesignMaterials,
    catalog: &RebarCatalog,
) -> Vec<RebarSuggestion> {
    let anchorage_multiple = materials.steel.basic_anchorage_diameters();

    let mut qualifying: Vec<RebarSuggestion> = catalog
        .combinations()
        .into_iter()
        .filter(|c| c.provided_area_cm2 >= adopted_area_cm2)
        .map(|c| RebarSuggestion {
            diameter_mm: c.diameter_mm,
            spacing_cm: c.spacing_cm,
            provided_area_cm2: c.provided_area_cm2,
            anchorage_cm: anchorage_multiple * c.diameter_mm / 10.0,
            synthetic: false,
        })
        .collect();

    qualifying.sort_by(|a, b| {
        a.provided_area_cm2
            .partial_cmp(&b.provided_area_cm2)
            .unwrap_or(std::cmp::Ordering::Equal)
            .then(
                a.diameter_mm
                    .partial_cmp(&b.diameter_mm)
                    .unwrap_or(std::cmp::Ordering::Equal),
            )
    });
    qualifying.truncate(3);

    if qualifying.is_empty() {
        qualifying.push(RebarSuggestion {
            diameter_mm: FALLBACK_DIAMETER_MM,
            spacing_cm: FALLBACK_SPACING_CM,
            provided_area_cm2: adopted_area_cm2,
            anchorage_cm: anchorage_multiple * FALLBACK_DIAMETER_MM / 10.0,
            synthetic: true,
        });
    }
    qualifying
}
