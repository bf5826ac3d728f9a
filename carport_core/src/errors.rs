//! # Error Types
//!
//! Structured error types for carport_core. Each variant carries enough
//! context for a calling layer to show the failure verbatim to an end user
//! (dimension errors keep the Danish field wording of the original shop
//! system) or to handle it programmatically.
//!
//! ## Example
//!
//! ```rust
//! use carport_core::errors::{CarportError, CarportResult};
//!
//! fn validate_width(width_cm: u32) -> CarportResult<()> {
//!     if !(240..=600).contains(&width_cm) {
//!         return Err(CarportError::invalid_dimension(
//!             "bredde",
//!             width_cm.to_string(),
//!             "Carport bredde skal være mellem 240 og 600 cm",
//!         ));
//!     }
//!     Ok(())
//! }
//! ```

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Result type alias for carport_core operations
pub type CarportResult<T> = Result<T, CarportError>;

/// Structured error type for the geometry and quantity engine.
///
/// The engine never returns a partial result: either a complete quantity,
/// placement or drawing result is produced, or exactly one of these errors.
#[derive(Error, Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(tag = "type", content = "details")]
pub enum CarportError {
    /// A carport or shed dimension is outside the allowed range.
    /// User-correctable; the reason is shown to the caller verbatim.
    #[error("Ugyldigt mål for '{field}': {value} - {reason}")]
    InvalidDimension {
        field: String,
        value: String,
        reason: String,
    },

    /// The catalog has no variant long enough for a required length.
    /// A configuration/data problem, surfaced as a hard failure.
    #[error("Ingen variant af '{kind}' passer til længde: {required_length_cm} cm")]
    NoMatchingVariant {
        kind: String,
        required_length_cm: u32,
    },

    /// The variant catalog collaborator failed. Propagated, never masked.
    #[error("Materialekatalog utilgængeligt: {reason}")]
    CatalogUnavailable { reason: String },
}

impl CarportError {
    /// Create an InvalidDimension error
    pub fn invalid_dimension(
        field: impl Into<String>,
        value: impl Into<String>,
        reason: impl Into<String>,
    ) -> Self {
        CarportError::InvalidDimension {
            field: field.into(),
            value: value.into(),
            reason: reason.into(),
        }
    }

    /// Create a NoMatchingVariant error
    pub fn no_matching_variant(kind: impl Into<String>, required_length_cm: u32) -> Self {
        CarportError::NoMatchingVariant {
            kind: kind.into(),
            required_length_cm,
        }
    }

    /// Create a CatalogUnavailable error
    pub fn catalog_unavailable(reason: impl Into<String>) -> Self {
        CarportError::CatalogUnavailable {
            reason: reason.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = CarportError::invalid_dimension(
            "bredde",
            "700",
            "Carport bredde skal være mellem 240 og 600 cm",
        );
        let msg = err.to_string();
        assert!(msg.contains("bredde"));
        assert!(msg.contains("700"));
    }

    #[test]
    fn test_error_serialization() {
        let err = CarportError::no_matching_variant("Tagplade", 810);
        let json = serde_json::to_string(&err).unwrap();
        assert!(json.contains("NoMatchingVariant"));

        let parsed: CarportError = serde_json::from_str(&json).unwrap();
        assert_eq!(err, parsed);
    }
}
