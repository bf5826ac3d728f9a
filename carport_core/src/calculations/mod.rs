//! # Structural Calculations
//!
//! The calculation layer of the engine. Everything in here is a pure
//! function of a validated [`crate::carport::Carport`] (plus catalog data
//! where variants are selected), so identical inputs always yield identical
//! results - the property the drawing/BOM consistency guarantee rests on.
//!
//! ## Modules
//!
//! - [`span`] - even subdivision of a span at bounded spacing (rafters, posts)
//! - [`placement`] - absolute post positions along the carport
//! - [`parts`] - discrete part counts (posts, rafters, screws, straps, bolts)
//! - [`bom`] - catalog-driven variant selection and the bill of materials

pub mod bom;
pub mod parts;
pub mod placement;
pub mod span;

pub use bom::{compute_quantities, MaterialLine};
pub use placement::PostLayout;
pub use span::SpanPlan;
