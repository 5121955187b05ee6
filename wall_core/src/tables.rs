//! # Design Reference Tables
//!
//! Read-only reference data for the reinforcement pass: the singly-reinforced
//! flexure coefficient table (kc → ks) and the rebar catalog of bar areas and
//! standard spacings. Both are supplied to the engine at construction; the
//! built-in defaults below cover the supported concrete and steel classes.
//!
//! Each [`FlexureRow`] is a discretized solution of the rectangular-section
//! bending equation at one neutral-axis depth ratio βx:
//!
//! ```text
//! kc = b·d² / Md        (b = 100 cm, d in cm, Md in kN·cm/m)
//! ks = As·d / Md
//! ```
//!
//! Rows are ordered by increasing kc (decreasing βx). The lookup is
//! monotonic: the first row whose kc for the chosen concrete class covers the
//! required kc wins; when even the last row does not qualify, the last row is
//! used as a saturating fallback (a very lightly loaded section).

use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};

use crate::errors::{CalcError, CalcResult};
use crate::materials::{ConcreteClass, SteelClass};

// ============================================================================
// Flexure Coefficient Table
// ============================================================================

/// One discretized solution of the singly-reinforced flexure equation.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct FlexureRow {
    /// Neutral-axis depth ratio βx = x/d this row was solved at
    pub beta_x: f64,

    /// kc threshold per concrete class
    pub kc_c20: f64,
    pub kc_c25: f64,
    pub kc_c30: f64,
    pub kc_c35: f64,

    /// ks value per steel class
    pub ks_ca50: f64,
    pub ks_ca60: f64,
}

impl FlexureRow {
    /// kc threshold for a concrete class
    pub fn kc(&self, concrete: ConcreteClass) -> f64 {
        match concrete {
            ConcreteClass::C20 => self.kc_c20,
            ConcreteClass::C25 => self.kc_c25,
            ConcreteClass::C30 => self.kc_c30,
            ConcreteClass::C35 => self.kc_c35,
        }
    }

    /// ks value for a steel class
    pub fn ks(&self, steel: SteelClass) -> f64 {
        match steel {
            SteelClass::CA50 => self.ks_ca50,
            SteelClass::CA60 => self.ks_ca60,
        }
    }
}

/// Result of a coefficient-table lookup.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct FlexureLookup {
    /// kc of the matched row for the chosen concrete class
    pub kc_table: f64,
    /// ks of the matched row for the chosen steel class
    pub ks: f64,
    /// βx of the matched row
    pub beta_x: f64,
    /// True when no row covered the required kc and the last row was used
    pub saturated: bool,
}

/// Ordered coefficient table.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DesignCoefficientTable {
    rows: Vec<FlexureRow>,
}

impl DesignCoefficientTable {
    /// Build a table, enforcing the ordering invariant: kc strictly
    /// increasing per concrete class from row to row.
    pub fn new(rows: Vec<FlexureRow>) -> CalcResult<Self> {
        if rows.is_empty() {
            return Err(CalcError::invalid_input(
                "rows",
                "[]",
                "Coefficient table cannot be empty",
            ));
        }
        for pair in rows.windows(2) {
            for class in ConcreteClass::ALL {
                if pair[1].kc(class) <= pair[0].kc(class) {
                    return Err(CalcError::invalid_input(
                        "rows",
                        format!("kc[{}]", class),
                        "Rows must be ordered by strictly increasing kc",
                    ));
                }
            }
        }
        Ok(DesignCoefficientTable { rows })
    }

    /// Table rows, in order.
    pub fn rows(&self) -> &[FlexureRow] {
        &self.rows
    }

    /// Monotonic lookup: first row whose kc (for `concrete`) covers
    /// `kc_required`; the last row is a saturating fallback.
    pub fn lookup(
        &self,
        kc_required: f64,
        concrete: ConcreteClass,
        steel: SteelClass,
    ) -> FlexureLookup {
        for row in &self.rows {
            if row.kc(concrete) >= kc_required {
                return FlexureLookup {
                    kc_table: row.kc(concrete),
                    ks: row.ks(steel),
                    beta_x: row.beta_x,
                    saturated: false,
                };
            }
        }
        // validated non-empty in new()
        let last = self.rows[self.rows.len() - 1];
        FlexureLookup {
            kc_table: last.kc(concrete),
            ks: last.ks(steel),
            beta_x: last.beta_x,
            saturated: true,
        }
    }
}

macro_rules! flexure_row {
    ($beta:expr, [$c20:expr, $c25:expr, $c30:expr, $c35:expr], [$ca50:expr, $ca60:expr]) => {
        FlexureRow {
            beta_x: $beta,
            kc_c20: $c20,
            kc_c25: $c25,
            kc_c30: $c30,
            kc_c35: $c35,
            ks_ca50: $ca50,
            ks_ca60: $ca60,
        }
    };
}

/// Built-in coefficient table, βx from 0.50 (ductility limit) down to 0.02.
pub static DEFAULT_COEFFICIENT_TABLE: Lazy<DesignCoefficientTable> = Lazy::new(|| {
    DesignCoefficientTable::new(vec![
        flexure_row!(0.50, [2.57, 2.06, 1.72, 1.47], [0.0288, 0.0240]),
        flexure_row!(0.45, [2.79, 2.23, 1.86, 1.59], [0.0280, 0.0234]),
        flexure_row!(0.40, [3.06, 2.45, 2.04, 1.75], [0.0274, 0.0228]),
        flexure_row!(0.35, [3.42, 2.74, 2.28, 1.95], [0.0267, 0.0223]),
        flexure_row!(0.30, [3.90, 3.12, 2.60, 2.23], [0.0261, 0.0218]),
        flexure_row!(0.25, [4.57, 3.66, 3.05, 2.61], [0.0256, 0.0213]),
        flexure_row!(0.20, [5.60, 4.48, 3.73, 3.20], [0.0250, 0.0208]),
        flexure_row!(0.15, [7.30, 5.84, 4.87, 4.17], [0.0245, 0.0204]),
        flexure_row!(0.10, [10.72, 8.58, 7.15, 6.13], [0.0240, 0.0200]),
        flexure_row!(0.05, [21.01, 16.81, 14.01, 12.01], [0.0235, 0.0196]),
        flexure_row!(0.02, [51.89, 41.51, 34.59, 29.65], [0.0232, 0.0193]),
    ])
    .expect("built-in coefficient table is ordered")
});

// ============================================================================
// Rebar Catalog
// ============================================================================

/// One commercial bar size.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BarSize {
    /// Nominal diameter (mm)
    pub diameter_mm: f64,
    /// Cross-section area of a single bar (cm²)
    pub area_cm2: f64,
}

/// A bar diameter + spacing pair with the steel area it provides per meter.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RebarChoice {
    /// Bar diameter (mm)
    pub diameter_mm: f64,
    /// Center-to-center spacing (cm)
    pub spacing_cm: f64,
    /// Provided steel area (cm²/m), bar area × 100 / spacing
    pub provided_area_cm2: f64,
}

/// Fixed catalog of bar areas and standard spacings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RebarCatalog {
    /// Available bar sizes, ascending by diameter
    pub bars: Vec<BarSize>,
    /// Standard spacings (cm), ascending
    pub spacings_cm: Vec<f64>,
}

impl RebarCatalog {
    /// Every (bar, spacing) combination with its provided area.
    pub fn combinations(&self) -> Vec<RebarChoice> {
        let mut out = Vec::with_capacity(self.bars.len() * self.spacings_cm.len());
        for bar in &self.bars {
            for &spacing in &self.spacings_cm {
                if spacing <= 0.0 {
                    continue;
                }
                out.push(RebarChoice {
                    diameter_mm: bar.diameter_mm,
                    spacing_cm: spacing,
                    provided_area_cm2: bar.area_cm2 * 100.0 / spacing,
                });
            }
        }
        out
    }
}

/// Built-in catalog: 8 to 20 mm bars at 10 to 30 cm spacings.
pub static DEFAULT_REBAR_CATALOG: Lazy<RebarCatalog> = Lazy::new(|| RebarCatalog {
    bars: vec![
        BarSize { diameter_mm: 8.0, area_cm2: 0.503 },
        BarSize { diameter_mm: 10.0, area_cm2: 0.785 },
        BarSize { diameter_mm: 12.5, area_cm2: 1.227 },
        BarSize { diameter_mm: 16.0, area_cm2: 2.011 },
        BarSize { diameter_mm: 20.0, area_cm2: 3.142 },
    ],
    spacings_cm: vec![10.0, 12.0, 15.0, 20.0, 25.0, 30.0],
});

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_table_ordered() {
        let rows = DEFAULT_COEFFICIENT_TABLE.rows();
        for pair in rows.windows(2) {
            for class in ConcreteClass::ALL {
                assert!(pair[1].kc(class) > pair[0].kc(class));
            }
        }
    }

    #[test]
    fn test_lookup_first_covering_row() {
        let lookup = DEFAULT_COEFFICIENT_TABLE.lookup(12.92, ConcreteClass::C25, SteelClass::CA50);
        assert!((lookup.kc_table - 16.81).abs() < 1e-9);
        assert!((lookup.ks - 0.0235).abs() < 1e-9);
        assert!(!lookup.saturated);
    }

    #[test]
    fn test_lookup_overstressed_clamps_to_first_row() {
        // kc below the ductility limit: the first (most stressed) row wins
        let lookup = DEFAULT_COEFFICIENT_TABLE.lookup(0.5, ConcreteClass::C25, SteelClass::CA50);
        assert!((lookup.ks - 0.0288).abs() < 1e-9);
        assert!(!lookup.saturated);
    }

    #[test]
    fn test_lookup_saturating_fallback() {
        let lookup = DEFAULT_COEFFICIENT_TABLE.lookup(1e6, ConcreteClass::C30, SteelClass::CA60);
        assert!((lookup.ks - 0.0193).abs() < 1e-9);
        assert!(lookup.saturated);
    }

    #[test]
    fn test_table_rejects_unordered_rows() {
        let mut rows = DEFAULT_COEFFICIENT_TABLE.rows().to_vec();
        rows.swap(0, 1);
        assert!(DesignCoefficientTable::new(rows).is_err());
    }

    #[test]
    fn test_table_rejects_empty() {
        assert!(DesignCoefficientTable::new(vec![]).is_err());
    }

    #[test]
    fn test_catalog_combinations() {
        let combos = DEFAULT_REBAR_CATALOG.combinations();
        assert_eq!(combos.len(), 5 * 6);
        // 10 mm @ 20 cm -> 0.785 * 100 / 20 = 3.925 cm²/m
        let c = combos
            .iter()
            .find(|c| c.diameter_mm == 10.0 && c.spacing_cm == 20.0)
            .unwrap();
        assert!((c.provided_area_cm2 - 3.925).abs() < 1e-9);
    }

    #[test]
    fn test_serialization() {
        let table = DEFAULT_COEFFICIENT_TABLE.clone();
        let json = serde_json::to_string(&table).unwrap();
        let roundtrip: DesignCoefficientTable = serde_json::from_str(&json).unwrap();
        assert_eq!(table, roundtrip);
    }
}
