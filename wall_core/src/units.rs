//! # Unit Types
//!
//! Type-safe wrappers for the units the engine works with. These provide
//! compile-time safety against unit confusion while remaining lightweight
//! (just f64 wrappers).
//!
//! ## Design Philosophy
//!
//! We use simple newtype wrappers rather than a full units library because:
//! - The engine uses a small, consistent set of units
//! - We want JSON serialization to be clean (just numbers)
//! - Minimal runtime overhead
//!
//! ## SI Units (Primary)
//!
//! Inputs arrive in the units presentation collaborators use; the engine
//! converts once at the boundary and computes in coherent SI:
//! - Length: centimeters (cm) at the boundary, meters (m) internally
//! - Unit weight: kilonewtons per cubic meter (kN/m³)
//! - Pressure/stress: kilopascals (kPa = kN/m²)
//! - Forces and moments per running meter of wall: kN/m and kN·m/m
//! - Angles: degrees at the boundary, radians internally
//!
//! ## Example
//!
//! ```rust
//! use wall_core::units::{Centimeters, Meters, Degrees};
//!
//! let height = Centimeters(300.0);
//! let height_m: Meters = height.into();
//! assert_eq!(height_m.0, 3.0);
//!
//! let phi = Degrees(30.0);
//! assert!((phi.to_radians() - 0.5236).abs() < 1e-3);
//! ```

use serde::{Deserialize, Serialize};
use std::ops::{Add, Div, Mul, Sub};

// ============================================================================
// Length Units
// ============================================================================

/// Length in centimeters
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Centimeters(pub f64);

/// Length in meters
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Meters(pub f64);

impl From<Centimeters> for Meters {
    fn from(cm: Centimeters) -> Self {
        Meters(cm.0 / 100.0)
    }
}

impl From<Meters> for Centimeters {
    fn from(m: Meters) -> Self {
        Centimeters(m.0 * 100.0)
    }
}

// ============================================================================
// Angle Units
// ============================================================================

/// Angle in degrees
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Degrees(pub f64);

impl Degrees {
    /// Convert to radians
    pub fn to_radians(self) -> f64 {
        self.0.to_radians()
    }

    /// sin of the angle
    pub fn sin(self) -> f64 {
        self.to_radians().sin()
    }

    /// tan of the angle
    pub fn tan(self) -> f64 {
        self.to_radians().tan()
    }
}

// ============================================================================
// Numeric Coercion
// ============================================================================

/// Coerce free-form numeric text to an f64, falling back to a default.
///
/// Presentation collaborators hand over text-field contents; decimal commas
/// are accepted ("2,76" parses as 2.76). Anything non-finite or unparseable
/// yields the default.
pub fn coerce_f64(text: &str, default: f64) -> f64 {
    let normalized = text.trim().replace(',', ".");
    match normalized.parse::<f64>() {
        Ok(v) if v.is_finite() => v,
        _ => default,
    }
}

// ============================================================================
// Arithmetic Implementations (macro to reduce boilerplate)
// ============================================================================

macro_rules! impl_arithmetic {
    ($type:ty) => {
        impl Add for $type {
            type Output = Self;
            fn add(self, rhs: Self) -> Self::Output {
                Self(self.0 + rhs.0)
            }
        }

        impl Sub for $type {
            type Output = Self;
            fn sub(self, rhs: Self) -> Self::Output {
                Self(self.0 - rhs.0)
            }
        }

        impl Mul<f64> for $type {
            type Output = Self;
            fn mul(self, rhs: f64) -> Self::Output {
                Self(self.0 * rhs)
            }
        }

        impl Div<f64> for $type {
            type Output = Self;
            fn div(self, rhs: f64) -> Self::Output {
                Self(self.0 / rhs)
            }
        }

        impl $type {
            /// Get the raw f64 value
            pub fn value(self) -> f64 {
                self.0
            }

            /// Create from raw f64 value
            pub fn new(value: f64) -> Self {
                Self(value)
            }
        }
    };
}

impl_arithmetic!(Centimeters);
impl_arithmetic!(Meters);
impl_arithmetic!(Degrees);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cm_to_m() {
        let cm = Centimeters(276.0);
        let m: Meters = cm.into();
        assert_eq!(m.0, 2.76);
    }

    #[test]
    fn test_m_to_cm() {
        let m = Meters(1.5);
        let cm: Centimeters = m.into();
        assert_eq!(cm.0, 150.0);
    }

    #[test]
    fn test_degrees_to_radians() {
        let phi = Degrees(45.0);
        assert!((phi.to_radians() - std::f64::consts::FRAC_PI_4).abs() < 1e-12);
        assert!((phi.tan() - 1.0).abs() < 1e-12);
    }

    #[test]
    fn test_coerce_plain() {
        assert_eq!(coerce_f64("300", 0.0), 300.0);
        assert_eq!(coerce_f64(" 18.5 ", 0.0), 18.5);
    }

    #[test]
    fn test_coerce_decimal_comma() {
        assert_eq!(coerce_f64("2,76", 0.0), 2.76);
    }

    #[test]
    fn test_coerce_fallback() {
        assert_eq!(coerce_f64("", 18.0), 18.0);
        assert_eq!(coerce_f64("abc", 30.0), 30.0);
        assert_eq!(coerce_f64("NaN", 25.0), 25.0);
    }

    #[test]
    fn test_arithmetic() {
        let a = Centimeters(100.0);
        let b = Centimeters(50.0);
        assert_eq!((a + b).0, 150.0);
        assert_eq!((a - b).0, 50.0);
        assert_eq!((a * 2.0).0, 200.0);
        assert_eq!((a / 2.0).0, 50.0);
    }

    #[test]
    fn test_serialization() {
        let m = Meters(2.76);
        let json = serde_json::to_string(&m).unwrap();
        assert_eq!(json, "2.76");

        let roundtrip: Meters = serde_json::from_str(&json).unwrap();
        assert_eq!(m, roundtrip);
    }
}
