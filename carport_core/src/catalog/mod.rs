//! # Material Variant Catalog
//!
//! The engine never invents material lengths: every selection is made from
//! the variants a [`VariantCatalog`] reports for a material kind. The
//! catalog is the only external collaborator of the core and must support
//! safe concurrent read-only lookups.
//!
//! ## Ordering Convention
//!
//! `variants_for` returns variants ascending by length, with variants sold
//! without a length dimension (`length_cm: None`) first. Implementations
//! must guarantee this ordering is stable; the selection helpers below rely
//! on it.
//!
//! ## Example
//!
//! ```rust
//! use carport_core::catalog::{MaterialKind, StandardCatalog, VariantCatalog};
//!
//! let catalog = StandardCatalog::new();
//! let rafters = catalog.variants_for(MaterialKind::Rafter).unwrap();
//! assert!(rafters.windows(2).all(|w| w[0].length_cm <= w[1].length_cm));
//! ```

pub mod standard;

pub use standard::StandardCatalog;

use serde::{Deserialize, Serialize};

use crate::errors::{CarportError, CarportResult};

/// Material kinds the engine quantifies.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum MaterialKind {
    /// Stolpe - pressure treated post
    Post,
    /// Spær - rafter
    Rafter,
    /// Rem - beam carried by the posts
    Beam,
    /// Tagplade - roofing plate
    RoofPlate,
    /// Skrue - screws of all kinds
    Fastener,
    /// Beslag - universal fitting
    Fitting,
    /// Hulbånd - perforated bracing strap
    PerforatedStrap,
    /// Spændeskive - square washer
    Washer,
    /// Under stern - under fascia board
    UnderFascia,
    /// Over stern - over fascia board
    OverFascia,
    /// Vandbrædt - water board
    WaterBoard,
}

impl MaterialKind {
    /// Danish display name as used on the bill of materials
    pub fn display_name(&self) -> &'static str {
        match self {
            MaterialKind::Post => "Stolpe",
            MaterialKind::Rafter => "Spær",
            MaterialKind::Beam => "Rem",
            MaterialKind::RoofPlate => "Tagplade",
            MaterialKind::Fastener => "Skrue",
            MaterialKind::Fitting => "Beslag",
            MaterialKind::PerforatedStrap => "Hulbånd",
            MaterialKind::Washer => "Spændeskive",
            MaterialKind::UnderFascia => "Under stern",
            MaterialKind::OverFascia => "Over stern",
            MaterialKind::WaterBoard => "Vandbrædt",
        }
    }
}

/// One purchasable variant of a material: a standard length (when the unit
/// has a length dimension at all) at a unit price.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MaterialVariant {
    pub kind: MaterialKind,
    /// Product name as it appears in the merchant's list
    pub name: String,
    /// Standard length (cm); `None` for units sold without a length dimension
    pub length_cm: Option<u32>,
    /// Cover width (cm); set for roofing plates
    pub width_cm: Option<u32>,
    /// Price per unit (DKK)
    pub unit_price: f64,
    /// Pieces per sales unit (screw packages etc.)
    pub pieces_per_unit: Option<u32>,
    /// Sales unit, e.g. "Stk." or "Rulle"
    pub unit: String,
}

/// Read-only variant lookup by material kind.
///
/// Implementations must return results ascending by length (lengthless
/// variants first) and must be safe for concurrent reads.
pub trait VariantCatalog {
    fn variants_for(&self, kind: MaterialKind) -> CarportResult<Vec<MaterialVariant>>;
}

/// Select the smallest variant whose length covers `required_length_cm`.
///
/// Relies on the catalog's ascending ordering; lengthless variants are
/// skipped. Fails with `NoMatchingVariant` when nothing is long enough.
pub fn smallest_variant_covering(
    variants: &[MaterialVariant],
    required_length_cm: u32,
) -> CarportResult<MaterialVariant> {
    variants
        .iter()
        .filter(|v| v.length_cm.is_some_and(|len| len >= required_length_cm))
        .min_by_key(|v| v.length_cm)
        .cloned()
        .ok_or_else(|| {
            CarportError::no_matching_variant(
                variants
                    .first()
                    .map(|v| v.kind.display_name())
                    .unwrap_or("materiale"),
                required_length_cm,
            )
        })
}

/// Longest length any variant offers.
pub fn max_variant_length(variants: &[MaterialVariant]) -> CarportResult<u32> {
    variants
        .iter()
        .filter_map(|v| v.length_cm)
        .max()
        .ok_or_else(|| {
            CarportError::no_matching_variant(
                variants
                    .first()
                    .map(|v| v.kind.display_name())
                    .unwrap_or("materiale"),
                0,
            )
        })
}

/// First variant with the given exact product name.
pub fn variant_by_name<'a>(
    variants: &'a [MaterialVariant],
    name: &str,
) -> CarportResult<&'a MaterialVariant> {
    variants
        .iter()
        .find(|v| v.name == name)
        .ok_or_else(|| CarportError::no_matching_variant(name, 0))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn variant(len: Option<u32>) -> MaterialVariant {
        MaterialVariant {
            kind: MaterialKind::Beam,
            name: "test".to_string(),
            length_cm: len,
            width_cm: None,
            unit_price: 10.0,
            pieces_per_unit: None,
            unit: "Stk.".to_string(),
        }
    }

    #[test]
    fn test_smallest_variant_covering() {
        let variants = vec![
            variant(None),
            variant(Some(300)),
            variant(Some(360)),
            variant(Some(600)),
        ];

        assert_eq!(
            smallest_variant_covering(&variants, 310).unwrap().length_cm,
            Some(360)
        );
        assert_eq!(
            smallest_variant_covering(&variants, 300).unwrap().length_cm,
            Some(300)
        );
        assert!(smallest_variant_covering(&variants, 700).is_err());
    }

    #[test]
    fn test_max_variant_length() {
        let variants = vec![variant(Some(300)), variant(None), variant(Some(540))];
        assert_eq!(max_variant_length(&variants).unwrap(), 540);

        let lengthless = vec![variant(None)];
        assert!(max_variant_length(&lengthless).is_err());
    }
}
