//! # Wall Geometry
//!
//! Cross-section description of a cantilevered L-profile retaining wall.
//! All lengths arrive in centimeters (the unit the input forms use) and are
//! converted to meters once, at the start of a calculation pass.
//!
//! ```text
//!        ┌─┐ ─┐
//!        │ │  │
//!   stem→│ │  │ height
//!        │ │  │
//!  ┌─────┴─┴──┴──────┐ ─┐
//!  └─────────────────┘ ─┘ base thickness
//!  |toe|stem|  heel  |
//!  |── base width ──|
//! ```
//!
//! ## Example
//!
//! ```rust
//! use wall_core::geometry::WallGeometry;
//!
//! let geometry = WallGeometry {
//!     height_cm: 300.0,
//!     stem_thickness_cm: 24.0,
//!     base_width_cm: 150.0,
//!     base_thickness_cm: 24.0,
//!     toe_width_cm: 50.0,
//!     heel_width_cm: 76.0,
//! };
//! assert!(geometry.validate().is_ok());
//! assert_eq!(geometry.effective_stem_height_cm(), 276.0);
//! ```

use serde::{Deserialize, Serialize};

use crate::errors::{CalcError, CalcResult};

/// Relative tolerance for the toe + stem + heel = base width closure check
const WIDTH_CLOSURE_TOL_CM: f64 = 0.01;

/// Wall cross-section dimensions, per running meter of wall.
///
/// Immutable for one calculation pass; a new value is built from the form
/// state on every input change.
///
/// ## JSON Example
///
/// ```json
/// {
///   "height_cm": 300.0,
///   "stem_thickness_cm": 24.0,
///   "base_width_cm": 150.0,
///   "base_thickness_cm": 24.0,
///   "toe_width_cm": 50.0,
///   "heel_width_cm": 76.0
/// }
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct WallGeometry {
    /// Total wall height H, from the base underside to the top of the stem (cm)
    pub height_cm: f64,

    /// Stem (vertical wall) thickness t (cm)
    pub stem_thickness_cm: f64,

    /// Base slab total width B (cm)
    pub base_width_cm: f64,

    /// Base slab thickness d (cm)
    pub base_thickness_cm: f64,

    /// Toe width: portion of B in front of the stem (cm, may be 0)
    pub toe_width_cm: f64,

    /// Heel width: portion of B behind the stem (cm)
    pub heel_width_cm: f64,
}

impl WallGeometry {
    /// Build a geometry from height, stem, base and toe; the heel width is
    /// derived so the widths close up exactly.
    pub fn from_toe(
        height_cm: f64,
        stem_thickness_cm: f64,
        base_width_cm: f64,
        base_thickness_cm: f64,
        toe_width_cm: f64,
    ) -> Self {
        let heel = (base_width_cm - toe_width_cm - stem_thickness_cm).max(0.0);
        WallGeometry {
            height_cm,
            stem_thickness_cm,
            base_width_cm,
            base_thickness_cm,
            toe_width_cm,
            heel_width_cm: heel,
        }
    }

    /// Validate dimensional invariants.
    pub fn validate(&self) -> CalcResult<()> {
        if self.height_cm <= 0.0 {
            return Err(CalcError::invalid_input(
                "height_cm",
                self.height_cm.to_string(),
                "Wall height must be positive",
            ));
        }
        if self.base_width_cm <= 0.0 {
            return Err(CalcError::invalid_input(
                "base_width_cm",
                self.base_width_cm.to_string(),
                "Base width must be positive",
            ));
        }
        if self.base_thickness_cm < 0.0 {
            return Err(CalcError::invalid_input(
                "base_thickness_cm",
                self.base_thickness_cm.to_string(),
                "Base thickness cannot be negative",
            ));
        }
        if self.height_cm < self.base_thickness_cm {
            return Err(CalcError::invalid_input(
                "base_thickness_cm",
                self.base_thickness_cm.to_string(),
                "Base thickness cannot exceed the wall height",
            ));
        }
        if self.stem_thickness_cm < 0.0 || self.toe_width_cm < 0.0 || self.heel_width_cm < 0.0 {
            return Err(CalcError::invalid_input(
                "widths",
                format!(
                    "t={}, toe={}, heel={}",
                    self.stem_thickness_cm, self.toe_width_cm, self.heel_width_cm
                ),
                "Widths cannot be negative",
            ));
        }
        if self.base_width_cm < self.stem_thickness_cm {
            return Err(CalcError::invalid_input(
                "stem_thickness_cm",
                self.stem_thickness_cm.to_string(),
                "Stem thickness cannot exceed the base width",
            ));
        }
        let closure =
            self.toe_width_cm + self.stem_thickness_cm + self.heel_width_cm - self.base_width_cm;
        if closure.abs() > WIDTH_CLOSURE_TOL_CM {
            return Err(CalcError::invalid_input(
                "heel_width_cm",
                self.heel_width_cm.to_string(),
                "toe + stem + heel must equal the base width",
            ));
        }
        Ok(())
    }

    /// Effective stem height above the base slab, H' = H - d (cm).
    ///
    /// This is the height of the retained soil wedge driving the active
    /// pressure. Clamped at zero.
    pub fn effective_stem_height_cm(&self) -> f64 {
        (self.height_cm - self.base_thickness_cm).max(0.0)
    }

    /// True when the geometry cannot support a meaningful stability analysis
    /// (H <= 0, B <= 0 or negative effective stem height).
    pub fn is_degenerate(&self) -> bool {
        self.height_cm <= 0.0
            || self.base_width_cm <= 0.0
            || self.height_cm - self.base_thickness_cm < 0.0
    }
}

/// Optional passive-resistance configuration.
///
/// The passive wedge in front of the toe only develops thrust when its
/// height clears the base slab; the visual width is carried for the drawing
/// collaborator and is not a mechanics input.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PassiveSoilConfig {
    /// Whether passive resistance is taken into account
    pub enabled: bool,

    /// Passive-zone height hp, measured from the base underside (cm)
    pub height_cm: f64,

    /// Passive-zone width for the schematic drawing only (cm)
    pub visual_width_cm: f64,
}

impl Default for PassiveSoilConfig {
    fn default() -> Self {
        PassiveSoilConfig {
            enabled: false,
            height_cm: 0.0,
            visual_width_cm: 0.0,
        }
    }
}

impl PassiveSoilConfig {
    /// Passive thrust only develops when hp clears the base slab.
    pub fn is_effective(&self, base_thickness_cm: f64) -> bool {
        self.enabled && self.height_cm > base_thickness_cm
    }
}

#[cfg(test)]
mod tests {
    use super::*;

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

    #[test]
    fn test_valid_geometry() {
        assert!(test_geometry().validate().is_ok());
    }

    #[test]
    fn test_effective_stem_height() {
        assert_eq!(test_geometry().effective_stem_height_cm(), 276.0);
    }

    #[test]
    fn test_from_toe_closes_widths() {
        let g = WallGeometry::from_toe(300.0, 24.0, 150.0, 24.0, 50.0);
        assert_eq!(g.heel_width_cm, 76.0);
        assert!(g.validate().is_ok());
    }

    #[test]
    fn test_zero_toe_allowed() {
        let g = WallGeometry::from_toe(300.0, 24.0, 150.0, 24.0, 0.0);
        assert_eq!(g.heel_width_cm, 126.0);
        assert!(g.validate().is_ok());
    }

    #[test]
    fn test_invalid_height() {
        let mut g = test_geometry();
        g.height_cm = -10.0;
        assert!(g.validate().is_err());
        assert!(g.is_degenerate());
    }

    #[test]
    fn test_widths_must_close() {
        let mut g = test_geometry();
        g.heel_width_cm = 100.0;
        assert!(g.validate().is_err());
    }

    #[test]
    fn test_stem_wider_than_base() {
        let mut g = test_geometry();
        g.stem_thickness_cm = 200.0;
        assert!(g.validate().is_err());
    }

    #[test]
    fn test_passive_effectiveness() {
        let passive = PassiveSoilConfig {
            enabled: true,
            height_cm: 50.0,
            visual_width_cm: 40.0,
        };
        assert!(passive.is_effective(24.0));
        assert!(!passive.is_effective(50.0));

        let disabled = PassiveSoilConfig::default();
        assert!(!disabled.is_effective(0.0));
    }

    #[test]
    fn test_serialization() {
        let g = test_geometry();
        let json = serde_json::to_string_pretty(&g).unwrap();
        let roundtrip: WallGeometry = serde_json::from_str(&json).unwrap();
        assert_eq!(g, roundtrip);
    }
}
