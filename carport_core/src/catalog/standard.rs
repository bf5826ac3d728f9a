//! # Standard Catalog
//!
//! A deterministic in-memory [`VariantCatalog`] seeded with the standard
//! builders-merchant assortment the quoting system is configured with.
//! Used by the CLI and the test suite; production deployments substitute a
//! database-backed implementation of the same trait.

use once_cell::sync::Lazy;

use super::{MaterialKind, MaterialVariant, VariantCatalog};
use crate::errors::CarportResult;

/// Product names the quantity calculator selects by.
pub const POST_NAME: &str = "97x97 mm. trykimp. Stolpe";
pub const RAFTER_NAME: &str = "45x195 mm. spærtræ ubh.";
pub const ROOF_PLATE_NAME: &str = "Plastmo Ecolite blåtonet";
pub const ROOF_SCREW_NAME: &str = "Plastmo Bundskruer 200 stk.";
pub const BRACKET_SCREW_NAME: &str = "Beslagskruer 4,0x50 mm. 250 stk.";
pub const CARRIAGE_BOLT_NAME: &str = "Bræddebolt 10x120 mm.";
pub const WASHER_NAME: &str = "Firkantskiver 40x40x11 mm.";
pub const STRAP_NAME: &str = "Hulbånd 1x20 mm. 10 mtr.";
pub const FITTING_RIGHT_NAME: &str = "Universal 190 mm højre";
pub const FITTING_LEFT_NAME: &str = "Universal 190 mm venstre";
pub const UNDER_FASCIA_NAME: &str = "25x200 mm. trykimp. Brædt";
pub const OVER_FASCIA_NAME: &str = "25x125 mm. trykimp. Brædt";
pub const WATER_BOARD_NAME: &str = "19x100 mm. trykimp. Brædt";

fn lumber(kind: MaterialKind, name: &str, length_cm: u32, unit_price: f64) -> MaterialVariant {
    MaterialVariant {
        kind,
        name: name.to_string(),
        length_cm: Some(length_cm),
        width_cm: None,
        unit_price,
        pieces_per_unit: None,
        unit: "Stk.".to_string(),
    }
}

fn piece(
    kind: MaterialKind,
    name: &str,
    unit_price: f64,
    pieces_per_unit: Option<u32>,
) -> MaterialVariant {
    MaterialVariant {
        kind,
        name: name.to_string(),
        length_cm: None,
        width_cm: None,
        unit_price,
        pieces_per_unit,
        unit: "Stk.".to_string(),
    }
}

static VARIANTS: Lazy<Vec<MaterialVariant>> = Lazy::new(|| {
    let mut variants = Vec::new();

    variants.push(lumber(MaterialKind::Post, POST_NAME, 300, 135.95));

    for (length, price) in [
        (300, 107.95),
        (360, 129.50),
        (420, 151.10),
        (480, 172.70),
        (540, 194.30),
        (600, 215.90),
    ] {
        variants.push(lumber(MaterialKind::Rafter, RAFTER_NAME, length, price));
        variants.push(lumber(MaterialKind::Beam, RAFTER_NAME, length, price));
    }

    // Plastmo roof plates come in these standard lengths only; 109 cm
    // plate width covers 100 cm after the 9 cm side overlay.
    for (length, price) in [
        (300, 269.0),
        (360, 323.0),
        (420, 377.0),
        (480, 431.0),
        (600, 539.0),
    ] {
        variants.push(MaterialVariant {
            kind: MaterialKind::RoofPlate,
            name: ROOF_PLATE_NAME.to_string(),
            length_cm: Some(length),
            width_cm: Some(109),
            unit_price: price,
            pieces_per_unit: None,
            unit: "Stk.".to_string(),
        });
    }

    variants.push(piece(
        MaterialKind::Fastener,
        ROOF_SCREW_NAME,
        429.0,
        Some(200),
    ));
    variants.push(piece(
        MaterialKind::Fastener,
        BRACKET_SCREW_NAME,
        179.0,
        Some(250),
    ));
    variants.push(piece(MaterialKind::Fastener, CARRIAGE_BOLT_NAME, 15.75, None));
    variants.push(piece(MaterialKind::Washer, WASHER_NAME, 8.50, None));
    variants.push(piece(MaterialKind::Fitting, FITTING_RIGHT_NAME, 22.95, None));
    variants.push(piece(MaterialKind::Fitting, FITTING_LEFT_NAME, 22.95, None));

    variants.push(MaterialVariant {
        kind: MaterialKind::PerforatedStrap,
        name: STRAP_NAME.to_string(),
        length_cm: Some(1000),
        width_cm: None,
        unit_price: 199.0,
        pieces_per_unit: None,
        unit: "Rulle".to_string(),
    });

    for (length, price) in [
        (300, 71.95),
        (360, 86.35),
        (420, 100.75),
        (480, 115.15),
        (540, 129.55),
    ] {
        variants.push(lumber(MaterialKind::UnderFascia, UNDER_FASCIA_NAME, length, price));
    }
    for (length, price) in [
        (300, 47.95),
        (360, 57.55),
        (420, 67.15),
        (480, 76.75),
        (540, 86.35),
    ] {
        variants.push(lumber(MaterialKind::OverFascia, OVER_FASCIA_NAME, length, price));
    }
    for (length, price) in [
        (300, 35.95),
        (360, 43.15),
        (420, 50.35),
        (480, 57.55),
        (540, 64.75),
    ] {
        variants.push(lumber(MaterialKind::WaterBoard, WATER_BOARD_NAME, length, price));
    }

    variants
});

/// In-memory catalog of the standard assortment.
#[derive(Debug, Clone, Copy, Default)]
pub struct StandardCatalog;

impl StandardCatalog {
    pub fn new() -> Self {
        StandardCatalog
    }
}

impl VariantCatalog for StandardCatalog {
    fn variants_for(&self, kind: MaterialKind) -> CarportResult<Vec<MaterialVariant>> {
        let mut variants: Vec<MaterialVariant> = VARIANTS
            .iter()
            .filter(|v| v.kind == kind)
            .cloned()
            .collect();
        // NULLS FIRST: Option<u32> orders None before any length
        variants.sort_by_key(|v| v.length_cm);
        Ok(variants)
    }
}
