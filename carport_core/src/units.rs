//! # Unit Types
//!
//! Lightweight unit wrappers for the dimensions the engine works in.
//! All construction rules and placements are expressed in centimeters;
//! the drawing layer labels dimension arrows in meters.
//!
//! Simple newtype wrappers are used rather than a units library: the domain
//! uses exactly two length units, and JSON serialization stays a bare number.
//!
//! ## Example
//!
//! ```rust
//! use carport_core::units::{Cm, Meters};
//!
//! let spacing = Cm(55.07);
//! let label: Meters = spacing.into();
//! assert!((label.0 - 0.5507).abs() < 1e-9);
//! ```

use serde::{Deserialize, Serialize};

/// Length in centimeters
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Cm(pub f64);

/// Length in meters
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Meters(pub f64);

impl From<Cm> for Meters {
    fn from(cm: Cm) -> Self {
        Meters(cm.0 / 100.0)
    }
}

impl From<Meters> for Cm {
    fn from(m: Meters) -> Self {
        Cm(m.0 * 100.0)
    }
}

impl Cm {
    /// Format as a meter label with two decimals, as shown on drawings.
    pub fn meter_label(self) -> String {
        format!("{:.2}", Meters::from(self).0)
    }
}
