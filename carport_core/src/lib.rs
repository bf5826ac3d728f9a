//! # carport_core - Carport Structural Geometry & Quantity Engine
//!
//! `carport_core` is the computational heart of the carport quoting system:
//! it converts overall carport dimensions into discrete part counts, post
//! placements and to-scale technical SVG drawings. The drawing geometry is
//! derived from the same span and placement math as the part counts, so the
//! bill of materials and the drawings can never disagree.
//!
//! ## Design Philosophy
//!
//! - **Stateless**: Pure functions that take input and return results
//! - **JSON-First**: All types implement Serialize/Deserialize
//! - **Rich Errors**: Structured error types, not just strings
//! - **Catalog-Driven**: The engine never invents material lengths; it only
//!   selects from what a [`catalog::VariantCatalog`] reports
//!
//! ## Quick Start
//!
//! ```rust
//! use carport_core::carport::{Carport, RoofType};
//! use carport_core::catalog::StandardCatalog;
//! use carport_core::calculations::bom::compute_quantities;
//! use carport_core::drawing::compute_top_view;
//!
//! let carport = Carport::new(780, 600, RoofType::Flat);
//!
//! let catalog = StandardCatalog::new();
//! let lines = compute_quantities(&carport, &catalog).unwrap();
//! assert!(!lines.is_empty());
//!
//! let svg = compute_top_view(&carport).unwrap();
//! assert!(svg.starts_with("<svg"));
//! ```
//!
//! ## Modules
//!
//! - [`carport`] - Carport and shed dimensions, roof types, validation
//! - [`catalog`] - Material variant catalog interface and standard data
//! - [`calculations`] - Span planning, part quantities, post placement, BOM
//! - [`drawing`] - Technical drawing renderers (top and side view SVG)
//! - [`quote`] - Quote container bundling carport, BOM and drawings
//! - [`units`] - Lightweight unit wrappers
//! - [`errors`] - Structured error types

pub mod calculations;
pub mod carport;
pub mod catalog;
pub mod drawing;
pub mod errors;
pub mod quote;
pub mod units;

// Re-export commonly used types at crate root for convenience
pub use carport::{Carport, RoofType, Shed, ShedPlacement};
pub use catalog::{MaterialKind, MaterialVariant, StandardCatalog, VariantCatalog};
pub use errors::{CarportError, CarportResult};
pub use quote::Quote;
