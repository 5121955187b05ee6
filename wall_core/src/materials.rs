//! # Design Materials
//!
//! Concrete and steel classes for the base-slab reinforcement design, plus
//! the concrete self-weight used in the stability analysis.
//!
//! Classes are typed enumerations rather than free-form strings so a typo in
//! a form field surfaces as an error instead of silently falling back to a
//! default table column.
//!
//! ## Example
//!
//! ```rust
//! use wall_core::materials::{ConcreteClass, SteelClass};
//!
//! let concrete = ConcreteClass::from_str_flexible(" c 25 ").unwrap();
//! assert_eq!(concrete, ConcreteClass::C25);
//! assert_eq!(SteelClass::CA50.display_name(), "CA-50");
//! ```

use serde::{Deserialize, Serialize};

use crate::errors::{CalcError, CalcResult};

/// Concrete strength classes supported by the coefficient table
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ConcreteClass {
    /// fck = 20 MPa
    C20,
    /// fck = 25 MPa
    C25,
    /// fck = 30 MPa
    C30,
    /// fck = 35 MPa
    C35,
}

impl ConcreteClass {
    /// All concrete classes for UI selection
    pub const ALL: [ConcreteClass; 4] = [
        ConcreteClass::C20,
        ConcreteClass::C25,
        ConcreteClass::C30,
        ConcreteClass::C35,
    ];

    /// Characteristic compressive strength fck (MPa)
    pub fn fck_mpa(&self) -> f64 {
        match self {
            ConcreteClass::C20 => 20.0,
            ConcreteClass::C25 => 25.0,
            ConcreteClass::C30 => 30.0,
            ConcreteClass::C35 => 35.0,
        }
    }

    /// Parse from common string representations ("C25", "c 25", "25")
    pub fn from_str_flexible(s: &str) -> CalcResult<Self> {
        match s.to_uppercase().replace([' ', '-'], "").as_str() {
            "C20" | "20" => Ok(ConcreteClass::C20),
            "C25" | "25" => Ok(ConcreteClass::C25),
            "C30" | "30" => Ok(ConcreteClass::C30),
            "C35" | "35" => Ok(ConcreteClass::C35),
            _ => Err(CalcError::class_not_found(s)),
        }
    }

    /// Get display name
    pub fn display_name(&self) -> &'static str {
        match self {
            ConcreteClass::C20 => "C20",
            ConcreteClass::C25 => "C25",
            ConcreteClass::C30 => "C30",
            ConcreteClass::C35 => "C35",
        }
    }
}

impl std::fmt::Display for ConcreteClass {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.display_name())
    }
}

/// Reinforcement steel classes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SteelClass {
    /// fyk = 500 MPa
    CA50,
    /// fyk = 600 MPa
    CA60,
}

impl SteelClass {
    /// All steel classes for UI selection
    pub const ALL: [SteelClass; 2] = [SteelClass::CA50, SteelClass::CA60];

    /// Characteristic yield strength fyk (MPa)
    pub fn fyk_mpa(&self) -> f64 {
        match self {
            SteelClass::CA50 => 500.0,
            SteelClass::CA60 => 600.0,
        }
    }

    /// Basic anchorage length as a multiple of the bar diameter
    pub fn basic_anchorage_diameters(&self) -> f64 {
        match self {
            SteelClass::CA50 => 40.0,
            SteelClass::CA60 => 45.0,
        }
    }

    /// Parse from common string representations ("CA50", "ca 50", "50")
    pub fn from_str_flexible(s: &str) -> CalcResult<Self> {
        match s.to_uppercase().replace([' ', '-'], "").as_str() {
            "CA50" | "50" => Ok(SteelClass::CA50),
            "CA60" | "60" => Ok(SteelClass::CA60),
            _ => Err(CalcError::class_not_found(s)),
        }
    }

    /// Get display name
    pub fn display_name(&self) -> &'static str {
        match self {
            SteelClass::CA50 => "CA-50",
            SteelClass::CA60 => "CA-60",
        }
    }
}

impl std::fmt::Display for SteelClass {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.display_name())
    }
}

/// Materials for the stability and reinforcement passes.
///
/// ## JSON Example
///
/// ```json
/// {
///   "concrete_unit_weight_kn_m3": 25.0,
///   "concrete": "C25",
///   "steel": "CA50",
///   "cover_cm": 4.0,
///   "reference_bar_diameter_cm": 1.0
/// }
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct DesignMaterials {
    /// Concrete unit weight (kN/m³)
    pub concrete_unit_weight_kn_m3: f64,

    /// Concrete class feeding the kc column of the coefficient table
    pub concrete: ConcreteClass,

    /// Steel class feeding the ks column of the coefficient table
    pub steel: SteelClass,

    /// Clear cover to reinforcement (cm)
    pub cover_cm: f64,

    /// Reference bar diameter for the effective-depth computation (cm)
    pub reference_bar_diameter_cm: f64,
}

impl Default for DesignMaterials {
    fn default() -> Self {
        DesignMaterials {
            concrete_unit_weight_kn_m3: 25.0,
            concrete: ConcreteClass::C25,
            steel: SteelClass::CA50,
            cover_cm: 4.0,
            reference_bar_diameter_cm: 1.0,
        }
    }
}

impl DesignMaterials {
    /// Validate material parameters.
    pub fn validate(&self) -> CalcResult<()> {
        if self.concrete_unit_weight_kn_m3 <= 0.0 {
            return Err(CalcError::invalid_input(
                "concrete_unit_weight_kn_m3",
                self.concrete_unit_weight_kn_m3.to_string(),
                "Concrete unit weight must be positive",
            ));
        }
        if self.cover_cm < 0.0 {
            return Err(CalcError::invalid_input(
                "cover_cm",
                self.cover_cm.to_string(),
                "Cover cannot be negative",
            ));
        }
        if self.reference_bar_diameter_cm <= 0.0 {
            return Err(CalcError::invalid_input(
                "reference_bar_diameter_cm",
                self.reference_bar_diameter_cm.to_string(),
                "Reference bar diameter must be positive",
            ));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_concrete_parse_flexible() {
        assert_eq!(
            ConcreteClass::from_str_flexible("c 25").unwrap(),
            ConcreteClass::C25
        );
        assert_eq!(
            ConcreteClass::from_str_flexible("C-30").unwrap(),
            ConcreteClass::C30
        );
        assert!(ConcreteClass::from_str_flexible("C99").is_err());
    }

    #[test]
    fn test_steel_parse_flexible() {
        assert_eq!(
            SteelClass::from_str_flexible("ca50").unwrap(),
            SteelClass::CA50
        );
        assert_eq!(
            SteelClass::from_str_flexible("CA 60").unwrap(),
            SteelClass::CA60
        );
        assert!(SteelClass::from_str_flexible("CA99").is_err());
    }

    #[test]
    fn test_anchorage_multiples() {
        assert_eq!(SteelClass::CA50.basic_anchorage_diameters(), 40.0);
        assert!(SteelClass::CA60.basic_anchorage_diameters() > 40.0);
    }

    #[test]
    fn test_default_materials() {
        let mat = DesignMaterials::default();
        assert_eq!(mat.concrete_unit_weight_kn_m3, 25.0);
        assert_eq!(mat.concrete, ConcreteClass::C25);
        assert_eq!(mat.steel, SteelClass::CA50);
        assert!(mat.validate().is_ok());
    }

    #[test]
    fn test_invalid_cover() {
        let mut mat = DesignMaterials::default();
        mat.cover_cm = -1.0;
        assert!(mat.validate().is_err());
    }

    #[test]
    fn test_serialization() {
        let mat = DesignMaterials::default();
        let json = serde_json::to_string(&mat).unwrap();
        assert!(json.contains("\"C25\""));
        assert!(json.contains("\"CA50\""));
        let roundtrip: DesignMaterials = serde_json::from_str(&json).unwrap();
        assert_eq!(mat, roundtrip);
    }
}
