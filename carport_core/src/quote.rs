//! # Quote Container
//!
//! The `Quote` struct is the root container a caller persists or sends to
//! the customer: the carport it was computed for, the complete bill of
//! materials, the total price, and both technical drawings. Quotes
//! serialize to human-readable JSON.
//!
//! ## Structure
//!
//! ```text
//! Quote
//! ├── meta: QuoteMetadata (version, id, customer, timestamp)
//! ├── carport: Carport (the validated input)
//! ├── lines: Vec<MaterialLine> (the bill of materials)
//! ├── total_price: f64
//! ├── top_view_svg: String
//! └── side_view_svg: String
//! ```
//!
//! ## Example
//!
//! ```rust
//! use carport_core::carport::{Carport, RoofType};
//! use carport_core::catalog::StandardCatalog;
//! use carport_core::quote::Quote;
//!
//! let carport = Carport::new(780, 600, RoofType::Flat);
//! let quote = Quote::build("Jens Hansen", carport, &StandardCatalog::new()).unwrap();
//!
//! let json = serde_json::to_string_pretty(&quote).unwrap();
//! assert!(json.contains("Jens Hansen"));
//! ```

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::calculations::bom::{compute_quantities, MaterialLine};
use crate::carport::Carport;
use crate::catalog::VariantCatalog;
use crate::drawing;
use crate::errors::CarportResult;

/// Current schema version for serialized quotes
pub const SCHEMA_VERSION: &str = "0.1.0";

/// Root quote container.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Quote {
    /// Quote metadata (version, id, customer, timestamp)
    pub meta: QuoteMetadata,

    /// The validated carport this quote was computed for
    pub carport: Carport,

    /// Bill of materials, one line per (variant, usage)
    pub lines: Vec<MaterialLine>,

    /// Sum of all line totals
    pub total_price: f64,

    /// Top view technical drawing, a self-contained SVG document
    pub top_view_svg: String,

    /// Side view technical drawing, a self-contained SVG document
    pub side_view_svg: String,
}

/// Identification and audit fields of a quote.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct QuoteMetadata {
    /// Schema version of the serialized form
    pub version: String,
    /// Unique quote id
    pub id: Uuid,
    /// Customer name as entered
    pub customer: String,
    /// Creation timestamp (UTC)
    pub created: DateTime<Utc>,
}

impl Quote {
    /// Compute a complete quote: validates the carport, builds the bill of
    /// materials against the catalog and renders both drawings.
    ///
    /// Either every part of the quote is produced or a single typed error
    /// is returned; a `Quote` never holds partial results.
    pub fn build(
        customer: impl Into<String>,
        carport: Carport,
        catalog: &dyn VariantCatalog,
    ) -> CarportResult<Self> {
        let lines = compute_quantities(&carport, catalog)?;
        let top_view_svg = drawing::compute_top_view(&carport)?;
        let side_view_svg = drawing::compute_side_view(&carport)?;
        let total_price = lines.iter().map(MaterialLine::line_total).sum();

        Ok(Quote {
            meta: QuoteMetadata {
                version: SCHEMA_VERSION.to_string(),
                id: Uuid::new_v4(),
                customer: customer.into(),
                created: Utc::now(),
            },
            carport,
            lines,
            total_price,
            top_view_svg,
            side_view_svg,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::carport::{RoofType, Shed, ShedPlacement};
    use crate::catalog::StandardCatalog;

    #[test]
    fn test_build_complete_quote() {
        let carport = Carport::new(780, 600, RoofType::Flat)
            .with_shed(Shed::new(210, 530, ShedPlacement::FullWidth));
        let quote = Quote::build("Jens Hansen", carport, &StandardCatalog::new()).unwrap();

        assert_eq!(quote.meta.version, SCHEMA_VERSION);
        assert_eq!(quote.meta.customer, "Jens Hansen");
        assert!(!quote.lines.is_empty());
        assert!(quote.total_price > 0.0);
        assert!(quote.top_view_svg.starts_with("<svg"));
        assert!(quote.side_view_svg.starts_with("<svg"));
    }

    #[test]
    fn test_total_is_sum_of_lines() {
        let carport = Carport::new(600, 420, RoofType::Flat);
        let quote = Quote::build("Test", carport, &StandardCatalog::new()).unwrap();

        let expected: f64 = quote.lines.iter().map(MaterialLine::line_total).sum();
        assert_eq!(quote.total_price, expected);
    }

    #[test]
    fn test_invalid_carport_produces_no_quote() {
        let carport = Carport::new(780, 700, RoofType::Flat);
        let result = Quote::build("Test", carport, &StandardCatalog::new());
        assert!(result.is_err());
    }

    #[test]
    fn test_json_roundtrip() {
        let carport = Carport::new(600, 420, RoofType::Flat);
        let quote = Quote::build("Roundtrip", carport, &StandardCatalog::new()).unwrap();

        let json = serde_json::to_string_pretty(&quote).unwrap();
        let back: Quote = serde_json::from_str(&json).unwrap();

        assert_eq!(back.meta.id, quote.meta.id);
        assert_eq!(back.lines, quote.lines);
        assert_eq!(back.top_view_svg, quote.top_view_svg);
    }

    #[test]
    fn test_each_quote_gets_its_own_id() {
        let carport = Carport::new(600, 420, RoofType::Flat);
        let a = Quote::build("A", carport.clone(), &StandardCatalog::new()).unwrap();
        let b = Quote::build("B", carport, &StandardCatalog::new()).unwrap();
        assert_ne!(a.meta.id, b.meta.id);
    }
}
