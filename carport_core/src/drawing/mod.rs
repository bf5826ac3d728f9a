//! # Technical Drawings
//!
//! SVG technical drawings of a carport. Two projections are produced, a
//! top view (plan) and a side view (elevation), both driven by the same
//! span and placement calculations as the bill of materials.
//!
//! Rendering is deterministic: the same carport always produces the same
//! document, byte for byte, so drawings can be cached or diffed safely.
//!
//! ## Example
//!
//! ```
//! use carport_core::{Carport, RoofType};
//! use carport_core::drawing;
//!
//! let carport = Carport::new(780, 600, RoofType::Flat);
//! let svg = drawing::compute_top_view(&carport).unwrap();
//! assert!(svg.starts_with("<svg"));
//! ```

pub mod side_view;
pub mod svg;
pub mod top_view;

use crate::carport::Carport;
use crate::errors::CarportResult;

/// Outline style shared by all structural elements
pub const BASE_STYLE: &str = "stroke-width: 1px; stroke:#000000; fill: #ffffff";
/// Style for hidden or referenced geometry (straps, shed outline, ground)
pub const DASHED_STYLE: &str = "stroke:#000000; stroke-dasharray: 5 5";

/// Render the top view for a validated carport.
pub fn compute_top_view(carport: &Carport) -> CarportResult<String> {
    carport.validate()?;
    Ok(top_view::render(carport))
}

/// Render the side view for a validated carport.
pub fn compute_side_view(carport: &Carport) -> CarportResult<String> {
    carport.validate()?;
    Ok(side_view::render(carport))
}
