//! # Carport Data Structures
//!
//! The `Carport` struct is the input to every engine operation: overall
//! dimensions in whole centimeters, a roof type and an optional attached
//! shed. Instances are created fresh per calculation request and never
//! outlive a single computation.
//!
//! ## Validation
//!
//! All engine entry points call [`Carport::validate`] before computing.
//! Allowed ranges (whole cm):
//!
//! - width 240..=600
//! - length 240..=780
//! - shed (if present): both dimensions > 0 and within the carport's
//!
//! ## Example
//!
//! ```rust
//! use carport_core::carport::{Carport, RoofType, Shed, ShedPlacement};
//!
//! let carport = Carport::new(780, 600, RoofType::Flat)
//!     .with_shed(Shed::new(210, 530, ShedPlacement::FullWidth));
//! assert!(carport.validate().is_ok());
//! ```

use serde::{Deserialize, Serialize};

use crate::errors::{CarportError, CarportResult};

/// Minimum carport width/length (cm)
pub const MIN_DIMENSION_CM: u32 = 240;
/// Maximum carport width (cm)
pub const MAX_WIDTH_CM: u32 = 600;
/// Maximum carport length (cm)
pub const MAX_LENGTH_CM: u32 = 780;

/// Roof shape of the carport.
///
/// A closed variant set: adding a roof type forces every consumer
/// (quantity calculator, renderers) to handle it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum RoofType {
    /// Flat roof of trapezoid PVC plates
    #[default]
    Flat,
    /// Raised trapezoid roof
    Trapezoid,
}

impl RoofType {
    /// Danish display name as shown on offers
    pub fn display_name(&self) -> &'static str {
        match self {
            RoofType::Flat => "Fladt tag",
            RoofType::Trapezoid => "Trapez tag",
        }
    }
}

/// Where an attached shed sits across the carport's width.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum ShedPlacement {
    /// Shed spans the full carport width
    #[default]
    FullWidth,
    /// Shed occupies the left side
    Left,
    /// Shed occupies the right side
    Right,
}

impl ShedPlacement {
    /// Danish display name as shown on offers
    pub fn display_name(&self) -> &'static str {
        match self {
            ShedPlacement::FullWidth => "Fuld bredde",
            ShedPlacement::Left => "Venstre",
            ShedPlacement::Right => "Højre",
        }
    }
}

/// An attached shed at the rear of the carport.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Shed {
    /// Shed length along the carport's length axis (cm)
    pub length_cm: u32,
    /// Shed width across the carport (cm)
    pub width_cm: u32,
    /// Placement across the carport's width
    pub placement: ShedPlacement,
}

impl Shed {
    pub fn new(length_cm: u32, width_cm: u32, placement: ShedPlacement) -> Self {
        Shed {
            length_cm,
            width_cm,
            placement,
        }
    }
}

/// A custom carport: the root input of every engine computation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Carport {
    /// Overall length (cm), front to back
    pub length_cm: u32,
    /// Overall width (cm)
    pub width_cm: u32,
    /// Roof shape
    pub roof_type: RoofType,
    /// Optional attached shed at the rear
    pub shed: Option<Shed>,
}

impl Carport {
    /// Create a carport without a shed.
    pub fn new(length_cm: u32, width_cm: u32, roof_type: RoofType) -> Self {
        Carport {
            length_cm,
            width_cm,
            roof_type,
            shed: None,
        }
    }

    /// Attach a shed.
    pub fn with_shed(mut self, shed: Shed) -> Self {
        self.shed = Some(shed);
        self
    }

    /// Validate all dimensions against the construction rules.
    ///
    /// Fails on the first violated bound with a caller-facing Danish reason.
    pub fn validate(&self) -> CarportResult<()> {
        if !(MIN_DIMENSION_CM..=MAX_WIDTH_CM).contains(&self.width_cm) {
            return Err(CarportError::invalid_dimension(
                "bredde",
                self.width_cm.to_string(),
                format!(
                    "Carport bredde skal være mellem {} og {} cm",
                    MIN_DIMENSION_CM, MAX_WIDTH_CM
                ),
            ));
        }

        if !(MIN_DIMENSION_CM..=MAX_LENGTH_CM).contains(&self.length_cm) {
            return Err(CarportError::invalid_dimension(
                "længde",
                self.length_cm.to_string(),
                format!(
                    "Carport længde skal være mellem {} og {} cm",
                    MIN_DIMENSION_CM, MAX_LENGTH_CM
                ),
            ));
        }

        if let Some(shed) = &self.shed {
            if shed.width_cm == 0 || shed.length_cm == 0 {
                return Err(CarportError::invalid_dimension(
                    "skur",
                    format!("{}x{}", shed.length_cm, shed.width_cm),
                    "Skuret skal have både bredde og længde",
                ));
            }
            if shed.width_cm > self.width_cm {
                return Err(CarportError::invalid_dimension(
                    "skur bredde",
                    shed.width_cm.to_string(),
                    "Skurets bredde må ikke være større end carportens bredde",
                ));
            }
            if shed.length_cm > self.length_cm {
                return Err(CarportError::invalid_dimension(
                    "skur længde",
                    shed.length_cm.to_string(),
                    "Skurets længde må ikke være større end carportens længde",
                ));
            }
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_boundary_dimensions_validate() {
        assert!(Carport::new(240, 240, RoofType::Flat).validate().is_ok());
        assert!(Carport::new(780, 600, RoofType::Flat).validate().is_ok());
    }

    #[test]
    fn test_width_out_of_bounds() {
        let err = Carport::new(600, 700, RoofType::Flat).validate().unwrap_err();
        let msg = err.to_string();
        assert!(msg.contains("bredde"), "message was: {}", msg);

        assert!(Carport::new(600, 230, RoofType::Flat).validate().is_err());
    }

    #[test]
    fn test_length_out_of_bounds() {
        let err = Carport::new(800, 400, RoofType::Flat).validate().unwrap_err();
        assert!(err.to_string().contains("længde"));

        assert!(Carport::new(100, 400, RoofType::Flat).validate().is_err());
    }

    #[test]
    fn test_shed_bounds() {
        let base = Carport::new(600, 400, RoofType::Flat);

        let zero = base
            .clone()
            .with_shed(Shed::new(0, 200, ShedPlacement::FullWidth));
        assert!(zero.validate().is_err());

        let too_wide = base
            .clone()
            .with_shed(Shed::new(200, 450, ShedPlacement::FullWidth));
        assert!(too_wide.validate().is_err());

        let too_long = base
            .clone()
            .with_shed(Shed::new(650, 200, ShedPlacement::Left));
        assert!(too_long.validate().is_err());

        let ok = base.with_shed(Shed::new(210, 400, ShedPlacement::FullWidth));
        assert!(ok.validate().is_ok());
    }

    #[test]
    fn test_serialization_roundtrip() {
        let carport = Carport::new(780, 600, RoofType::Trapezoid)
            .with_shed(Shed::new(210, 530, ShedPlacement::Right));
        let json = serde_json::to_string(&carport).unwrap();
        let parsed: Carport = serde_json::from_str(&json).unwrap();
        assert_eq!(carport, parsed);
    }
}
