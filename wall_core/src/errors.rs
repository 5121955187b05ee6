//! # Error and Warning Types
//!
//! Structured error types for `wall_core`. Hard errors (`CalcError`) are used
//! by input validation helpers and the JSON boundary; the engine entry point
//! [`crate::calculations::wall::evaluate`] itself never fails — degenerate
//! inputs produce a result with status markers and accumulated [`Warning`]s
//! instead (see the `wall` module).
//!
//! ## Example
//!
//! ```rust
//! use wall_core::errors::{CalcError, CalcResult};
//!
//! fn validate_height(height_cm: f64) -> CalcResult<()> {
//!     if height_cm <= 0.0 {
//!         return Err(CalcError::InvalidInput {
//!             field: "height_cm".to_string(),
//!             value: height_cm.to_string(),
//!             reason: "Wall height must be positive".to_string(),
//!         });
//!     }
//!     Ok(())
//! }
//! ```

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Result type alias for wall_core operations
pub type CalcResult<T> = Result<T, CalcError>;

/// Structured error type for validation and boundary operations.
#[derive(Error, Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(tag = "type", content = "details")]
pub enum CalcError {
    /// An input value is invalid (out of range, inconsistent, etc.)
    #[error("Invalid input for '{field}': {value} - {reason}")]
    InvalidInput {
        field: String,
        value: String,
        reason: String,
    },

    /// Concrete or steel class not recognized
    #[error("Material class not found: {class_name}")]
    ClassNotFound { class_name: String },

    /// JSON serialization/deserialization error
    #[error("Serialization error: {reason}")]
    SerializationError { reason: String },
}

impl CalcError {
    /// Create an InvalidInput error
    pub fn invalid_input(
        field: impl Into<String>,
        value: impl Into<String>,
        reason: impl Into<String>,
    ) -> Self {
        CalcError::InvalidInput {
            field: field.into(),
            value: value.into(),
            reason: reason.into(),
        }
    }

    /// Create a ClassNotFound error
    pub fn class_not_found(class_name: impl Into<String>) -> Self {
        CalcError::ClassNotFound {
            class_name: class_name.into(),
        }
    }

    /// Get a short error code for programmatic handling
    pub fn error_code(&self) -> &'static str {
        match self {
            CalcError::InvalidInput { .. } => "INVALID_INPUT",
            CalcError::ClassNotFound { .. } => "CLASS_NOT_FOUND",
            CalcError::SerializationError { .. } => "SERIALIZATION_ERROR",
        }
    }
}

/// Non-fatal condition surfaced by the engine.
///
/// Warnings are accumulated in order on the calculation result and are never
/// discarded. Approval flags remain the single source of truth for pass/fail;
/// warnings explain *why* a check degraded or switched formula.
#[derive(Error, Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(tag = "type", content = "details")]
pub enum Warning {
    /// Geometry could not support a meaningful analysis (H<=0, B<=0, ...)
    #[error("Invalid geometry: {reason}")]
    InvalidGeometry { reason: String },

    /// Friction angle outside (0, 90) degrees was clamped
    #[error("Friction angle {given}° outside (0°, 90°); clamped to {clamped}°")]
    FrictionAngleClamped { given: f64, clamped: f64 },

    /// Passive resistance configured but the passive height does not clear
    /// the base slab; Ep forced to zero
    #[error("Passive height {hp_cm} cm does not exceed base thickness {base_cm} cm; passive thrust ignored")]
    PassiveIneffective { hp_cm: f64, base_cm: f64 },

    /// Minimum base pressure is negative (tension at the heel or toe)
    #[error("Base tension: q_min = {q_min_kpa} kPa < 0")]
    BaseTension { q_min_kpa: f64 },

    /// Resultant falls outside the middle third; triangular distribution used
    #[error("Resultant outside the middle third (e = {e_m} m, limit {limit_m} m)")]
    OutsideMiddleThird { e_m: f64, limit_m: f64 },

    /// Effective depth was non-positive; conservative fallback used and the
    /// reinforcement result is an estimate
    #[error("Effective depth non-positive; using fallback {fallback_cm} cm (reinforcement estimated)")]
    EffectiveDepthFallback { fallback_cm: f64 },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_serialization() {
        let error = CalcError::invalid_input("height_cm", "-5.0", "Wall height must be positive");
        let json = serde_json::to_string(&error).unwrap();
        let roundtrip: CalcError = serde_json::from_str(&json).unwrap();
        assert_eq!(error, roundtrip);
    }

    #[test]
    fn test_error_codes() {
        assert_eq!(
            CalcError::class_not_found("C99").error_code(),
            "CLASS_NOT_FOUND"
        );
    }

    #[test]
    fn test_warning_display() {
        let w = Warning::PassiveIneffective {
            hp_cm: 20.0,
            base_cm: 24.0,
        };
        let text = w.to_string();
        assert!(text.contains("20"));
        assert!(text.contains("24"));
    }

    #[test]
    fn test_warning_serialization() {
        let w = Warning::BaseTension { q_min_kpa: -3.2 };
        let json = serde_json::to_string(&w).unwrap();
        let roundtrip: Warning = serde_json::from_str(&json).unwrap();
        assert_eq!(w, roundtrip);
    }
}
