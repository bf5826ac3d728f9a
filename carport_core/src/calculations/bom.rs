//! # Bill of Materials
//!
//! Catalog-driven variant selection: combines the part counts with the
//! variants a [`VariantCatalog`] reports, producing one material line per
//! (variant, usage). Quantities of zero never appear in the output.
//!
//! Selection rules:
//!
//! - lengths are always the smallest catalog variant covering the need
//! - roofing plates split into two overlapping plates when no single
//!   variant covers the length plus overhang
//! - beams splice at the rearmost intermediate post when no single variant
//!   covers the carport length
//! - fascia and water boards get a 30 cm cut buffer and split in two when
//!   no variant is long enough

use serde::{Deserialize, Serialize};

use crate::carport::Carport;
use crate::catalog::standard::{
    BRACKET_SCREW_NAME, CARRIAGE_BOLT_NAME, FITTING_LEFT_NAME, FITTING_RIGHT_NAME, ROOF_SCREW_NAME,
    STRAP_NAME, WASHER_NAME,
};
use crate::catalog::{
    max_variant_length, smallest_variant_covering, variant_by_name, MaterialKind, MaterialVariant,
    VariantCatalog,
};
use crate::errors::{CarportError, CarportResult};

use super::{parts, placement};

/// Posts are delivered in one standard length (cm)
pub const STANDARD_POST_LENGTH_CM: u32 = 300;
/// Roofing extends past the back edge (cm)
const ROOF_OVERHANG_CM: u32 = 20;
/// Lengthwise overlap between two spliced roofing plates (cm)
const ROOF_END_OVERLAP_CM: u32 = 20;
/// Cut buffer added to every board run (cm)
const BOARD_BUFFER_CM: u32 = 30;
/// Fascia/water board runs along both sides
const RUNS_BOTH_SIDES: u32 = 2;
/// Some board kinds only run along the front
const RUN_FRONT_ONLY: u32 = 1;
/// Beams run along both sides of the carport
const BEAM_ROWS: u32 = 2;

/// One line of the bill of materials: a selected variant, a count and the
/// mounting note shown to the customer.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MaterialLine {
    pub variant: MaterialVariant,
    pub quantity: u32,
    /// Danish mounting note, e.g. "Stolper nedgraves 90 cm. i jord"
    pub usage: String,
}

impl MaterialLine {
    fn new(variant: MaterialVariant, quantity: u32, usage: &str) -> Self {
        MaterialLine {
            variant,
            quantity,
            usage: usage.to_string(),
        }
    }

    /// Line price: quantity times the variant's unit price.
    pub fn line_total(&self) -> f64 {
        self.quantity as f64 * self.variant.unit_price
    }
}

/// Compute the complete bill of materials for a carport.
///
/// Validates the dimensions first; either every line is produced or a
/// single typed error is returned.
pub fn compute_quantities(
    carport: &Carport,
    catalog: &dyn VariantCatalog,
) -> CarportResult<Vec<MaterialLine>> {
    carport.validate()?;

    let mut lines = Vec::new();

    lines.push(rafter_line(carport, catalog)?);
    lines.push(post_line(carport, catalog)?);
    lines.push(roof_screw_line(carport, catalog)?);
    lines.push(strap_line(carport, catalog)?);
    lines.push(bracket_screw_line(carport, catalog)?);

    lines.extend(beam_lines(carport, catalog)?);
    lines.extend(roof_plate_lines(carport, catalog)?);
    lines.extend(fitting_lines(carport, catalog)?);
    lines.extend(bolt_and_washer_lines(carport, catalog)?);

    lines.extend(board_lines(
        carport,
        catalog,
        MaterialKind::UnderFascia,
        RUNS_BOTH_SIDES,
        "Understernbrædder til for & bag ende",
        "Understernbrædder til siderne",
    )?);
    lines.extend(board_lines(
        carport,
        catalog,
        MaterialKind::OverFascia,
        RUN_FRONT_ONLY,
        "Oversternbrædder til forenden",
        "Oversternbrædder til siderne",
    )?);
    lines.extend(board_lines(
        carport,
        catalog,
        MaterialKind::WaterBoard,
        RUN_FRONT_ONLY,
        "Vandbrædt på stern i forende",
        "Vandbrædt på stern i sider",
    )?);

    lines.retain(|line| line.quantity > 0);
    Ok(lines)
}

fn post_line(carport: &Carport, catalog: &dyn VariantCatalog) -> CarportResult<MaterialLine> {
    let posts = catalog.variants_for(MaterialKind::Post)?;
    let variant = posts
        .iter()
        .find(|v| v.length_cm == Some(STANDARD_POST_LENGTH_CM))
        .cloned()
        .ok_or_else(|| {
            CarportError::no_matching_variant(
                MaterialKind::Post.display_name(),
                STANDARD_POST_LENGTH_CM,
            )
        })?;

    Ok(MaterialLine::new(
        variant,
        parts::post_count(carport),
        "Stolper nedgraves 90 cm. i jord",
    ))
}

fn rafter_line(carport: &Carport, catalog: &dyn VariantCatalog) -> CarportResult<MaterialLine> {
    let rafters = catalog.variants_for(MaterialKind::Rafter)?;
    let variant = smallest_variant_covering(&rafters, carport.width_cm)?;

    Ok(MaterialLine::new(
        variant,
        parts::rafter_count(carport.length_cm),
        "Spær, monteres på rem",
    ))
}

/// Beam selection with splicing.
///
/// A single variant long enough for the carport covers each side in one
/// piece. Otherwise the beam is spliced over the rearmost intermediate
/// post (center or shed pair; mid-span for a row without one), and each
/// piece is the smallest variant covering its segment.
fn beam_lines(
    carport: &Carport,
    catalog: &dyn VariantCatalog,
) -> CarportResult<Vec<MaterialLine>> {
    const USAGE: &str = "Remme i sider, sadles ned i stolper";

    let beams = catalog.variants_for(MaterialKind::Beam)?;
    let max_length = max_variant_length(&beams)?;

    if max_length >= carport.length_cm {
        let variant = smallest_variant_covering(&beams, carport.length_cm)?;
        return Ok(vec![MaterialLine::new(variant, BEAM_ROWS, USAGE)]);
    }

    let anchor = splice_anchor(carport);
    let front_piece = smallest_variant_covering(&beams, anchor)?;
    let back_piece = smallest_variant_covering(&beams, carport.length_cm - anchor)?;

    Ok(vec![
        MaterialLine::new(front_piece, BEAM_ROWS, USAGE),
        MaterialLine::new(back_piece, BEAM_ROWS, USAGE),
    ])
}

/// x offset the beam splice is anchored at.
fn splice_anchor(carport: &Carport) -> u32 {
    let xs = placement::post_row_positions(carport);

    // rearmost post pair between the front and back pairs
    xs[1..xs.len() - 1]
        .last()
        .map(|x| x.round() as u32)
        .unwrap_or(carport.length_cm / 2)
}

/// Roofing plate selection reproducing the merchant's split thresholds.
fn roof_plate_lines(
    carport: &Carport,
    catalog: &dyn VariantCatalog,
) -> CarportResult<Vec<MaterialLine>> {
    const USAGE: &str = "Tagplader monteres på spær";

    let plates = catalog.variants_for(MaterialKind::RoofPlate)?;
    let cover_width = plates
        .iter()
        .find_map(|v| v.width_cm)
        .ok_or_else(|| {
            CarportError::no_matching_variant(
                MaterialKind::RoofPlate.display_name(),
                carport.width_cm,
            )
        })?;

    let rows = parts::roof_plate_rows(carport.width_cm, cover_width);
    let coverage = carport.length_cm + ROOF_OVERHANG_CM;
    let max_length = max_variant_length(&plates)?;

    if max_length > coverage {
        let variant = smallest_variant_covering(&plates, coverage)?;
        return Ok(vec![MaterialLine::new(variant, rows, USAGE)]);
    }

    // Two overlapping plates per row: a short front plate and the
    // smallest plate covering what remains behind it.
    let front_plate = smallest_variant_covering(&plates, max_length / 2)?;
    let front_length = front_plate.length_cm.unwrap_or(0);
    let remaining = coverage - (front_length - ROOF_END_OVERLAP_CM);
    let back_plate = smallest_variant_covering(&plates, remaining)?;

    Ok(vec![
        MaterialLine::new(front_plate, rows, USAGE),
        MaterialLine::new(back_plate, rows, USAGE),
    ])
}

fn roof_screw_line(carport: &Carport, catalog: &dyn VariantCatalog) -> CarportResult<MaterialLine> {
    let fasteners = catalog.variants_for(MaterialKind::Fastener)?;
    let variant = variant_by_name(&fasteners, ROOF_SCREW_NAME)?.clone();
    let per_package = pieces_per_unit(&variant)?;

    Ok(MaterialLine::new(
        variant,
        parts::roof_screw_packages(carport.width_cm, carport.length_cm, per_package),
        "Skruer til tagplader",
    ))
}

fn bracket_screw_line(
    carport: &Carport,
    catalog: &dyn VariantCatalog,
) -> CarportResult<MaterialLine> {
    let fasteners = catalog.variants_for(MaterialKind::Fastener)?;
    let variant = variant_by_name(&fasteners, BRACKET_SCREW_NAME)?.clone();
    let per_package = pieces_per_unit(&variant)?;

    Ok(MaterialLine::new(
        variant,
        parts::bracket_screw_packages(carport.length_cm, per_package),
        "Til montering af universalbeslag + hulbånd",
    ))
}

fn strap_line(carport: &Carport, catalog: &dyn VariantCatalog) -> CarportResult<MaterialLine> {
    let straps = catalog.variants_for(MaterialKind::PerforatedStrap)?;
    let variant = variant_by_name(&straps, STRAP_NAME)?.clone();
    let roll_length = variant.length_cm.ok_or_else(|| {
        CarportError::catalog_unavailable(format!("'{}' mangler rullelængde", variant.name))
    })?;

    Ok(MaterialLine::new(
        variant,
        parts::strap_rolls(carport, roll_length),
        "Til vindkryds på spær",
    ))
}

fn fitting_lines(
    carport: &Carport,
    catalog: &dyn VariantCatalog,
) -> CarportResult<Vec<MaterialLine>> {
    const USAGE: &str = "Til montering af spær på rem";

    let fittings = catalog.variants_for(MaterialKind::Fitting)?;
    let right = variant_by_name(&fittings, FITTING_RIGHT_NAME)?.clone();
    let left = variant_by_name(&fittings, FITTING_LEFT_NAME)?.clone();
    let per_side = parts::rafter_count(carport.length_cm);

    Ok(vec![
        MaterialLine::new(right, per_side, USAGE),
        MaterialLine::new(left, per_side, USAGE),
    ])
}

fn bolt_and_washer_lines(
    carport: &Carport,
    catalog: &dyn VariantCatalog,
) -> CarportResult<Vec<MaterialLine>> {
    const USAGE: &str = "Til montering af rem på stolper";

    let beams = catalog.variants_for(MaterialKind::Beam)?;
    let max_beam = max_variant_length(&beams)?;
    let bolt_count = parts::carriage_bolt_count(carport.length_cm, max_beam);

    let fasteners = catalog.variants_for(MaterialKind::Fastener)?;
    let bolt = variant_by_name(&fasteners, CARRIAGE_BOLT_NAME)?.clone();

    let washers = catalog.variants_for(MaterialKind::Washer)?;
    let washer = variant_by_name(&washers, WASHER_NAME)?.clone();

    Ok(vec![
        MaterialLine::new(bolt, bolt_count, USAGE),
        MaterialLine::new(washer, bolt_count, USAGE),
    ])
}

/// Boards across the ends and along the sides, with a 30 cm cut buffer;
/// a run splits into two boards when no variant is long enough.
fn board_lines(
    carport: &Carport,
    catalog: &dyn VariantCatalog,
    kind: MaterialKind,
    end_runs: u32,
    end_usage: &str,
    side_usage: &str,
) -> CarportResult<Vec<MaterialLine>> {
    let variants = catalog.variants_for(kind)?;

    let (end_variant, end_quantity) = board_run(&variants, carport.width_cm, end_runs)?;
    let (side_variant, side_quantity) =
        board_run(&variants, carport.length_cm, RUNS_BOTH_SIDES)?;

    Ok(vec![
        MaterialLine::new(end_variant, end_quantity, end_usage),
        MaterialLine::new(side_variant, side_quantity, side_usage),
    ])
}

fn board_run(
    variants: &[MaterialVariant],
    dimension_cm: u32,
    runs: u32,
) -> CarportResult<(MaterialVariant, u32)> {
    let needed = dimension_cm + BOARD_BUFFER_CM;
    let max_length = max_variant_length(variants)?;

    if needed <= max_length {
        Ok((smallest_variant_covering(variants, needed)?, runs))
    } else {
        let half = dimension_cm / 2 + BOARD_BUFFER_CM;
        Ok((smallest_variant_covering(variants, half)?, runs * 2))
    }
}

fn pieces_per_unit(variant: &MaterialVariant) -> CarportResult<u32> {
    variant.pieces_per_unit.ok_or_else(|| {
        CarportError::catalog_unavailable(format!("'{}' mangler antal pr. pakke", variant.name))
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::carport::{RoofType, Shed, ShedPlacement};
    use crate::catalog::StandardCatalog;

    fn plate_lengths(length_cm: u32) -> Vec<u32> {
        let carport = Carport::new(length_cm, 420, RoofType::Flat);
        roof_plate_lines(&carport, &StandardCatalog::new())
            .unwrap()
            .iter()
            .map(|line| line.variant.length_cm.unwrap())
            .collect()
    }

    #[test]
    fn test_roof_plate_split_table() {
        // thresholds of the merchant's standard lengths 300/360/420/480/600
        assert_eq!(plate_lengths(240), vec![300]);
        assert_eq!(plate_lengths(300), vec![360]);
        assert_eq!(plate_lengths(360), vec![420]);
        assert_eq!(plate_lengths(570), vec![600]);
        assert_eq!(plate_lengths(600), vec![300, 360]);
        assert_eq!(plate_lengths(630), vec![300, 420]);
        assert_eq!(plate_lengths(660), vec![300, 420]);
        assert_eq!(plate_lengths(690), vec![300, 480]);
        assert_eq!(plate_lengths(780), vec![300, 600]);
    }

    #[test]
    fn test_roof_plate_row_quantity() {
        let carport = Carport::new(600, 600, RoofType::Flat);
        let lines = roof_plate_lines(&carport, &StandardCatalog::new()).unwrap();
        assert!(lines.iter().all(|line| line.quantity == 6));
    }

    #[test]
    fn test_beam_single_piece() {
        let carport = Carport::new(600, 400, RoofType::Flat);
        let lines = beam_lines(&carport, &StandardCatalog::new()).unwrap();
        assert_eq!(lines.len(), 1);
        assert_eq!(lines[0].variant.length_cm, Some(600));
        assert_eq!(lines[0].quantity, 2);
    }

    #[test]
    fn test_beam_splice_without_shed() {
        // anchor at the center pair (410): 420 front piece, 420 back piece
        let carport = Carport::new(780, 400, RoofType::Flat);
        let lines = beam_lines(&carport, &StandardCatalog::new()).unwrap();
        assert_eq!(lines.len(), 2);
        assert_eq!(lines[0].variant.length_cm, Some(420));
        assert_eq!(lines[1].variant.length_cm, Some(420));
        assert!(lines.iter().all(|line| line.quantity == 2));
    }

    #[test]
    fn test_beam_splice_anchors_at_shed_pair() {
        // shed pair at 540 is the rearmost intermediate support
        let carport = Carport::new(780, 600, RoofType::Flat)
            .with_shed(Shed::new(210, 530, ShedPlacement::FullWidth));
        let lines = beam_lines(&carport, &StandardCatalog::new()).unwrap();
        assert_eq!(lines[0].variant.length_cm, Some(540));
        assert_eq!(lines[1].variant.length_cm, Some(300));
    }

    #[test]
    fn test_compute_quantities_full_carport() {
        let carport = Carport::new(780, 600, RoofType::Flat)
            .with_shed(Shed::new(210, 530, ShedPlacement::FullWidth));
        let lines = compute_quantities(&carport, &StandardCatalog::new()).unwrap();

        assert!(lines.iter().all(|line| line.quantity > 0));

        let posts = lines
            .iter()
            .find(|line| line.variant.kind == MaterialKind::Post)
            .unwrap();
        assert_eq!(posts.quantity, 11);

        let rafters = lines
            .iter()
            .find(|line| line.variant.kind == MaterialKind::Rafter)
            .unwrap();
        assert_eq!(rafters.quantity, 15);
        assert_eq!(rafters.variant.length_cm, Some(600));

        let bolts = lines
            .iter()
            .find(|line| line.variant.name == CARRIAGE_BOLT_NAME)
            .unwrap();
        let washers = lines
            .iter()
            .find(|line| line.variant.kind == MaterialKind::Washer)
            .unwrap();
        assert_eq!(bolts.quantity, 16);
        assert_eq!(washers.quantity, bolts.quantity);
    }

    #[test]
    fn test_compute_quantities_rejects_invalid() {
        let carport = Carport::new(600, 700, RoofType::Flat);
        let err = compute_quantities(&carport, &StandardCatalog::new()).unwrap_err();
        assert!(err.to_string().contains("bredde"));
    }

    #[test]
    fn test_boundary_carports_compute() {
        for carport in [
            Carport::new(240, 240, RoofType::Flat),
            Carport::new(780, 600, RoofType::Flat),
        ] {
            let lines = compute_quantities(&carport, &StandardCatalog::new()).unwrap();
            assert!(!lines.is_empty());
            assert!(lines.iter().all(|line| line.quantity > 0));
        }
    }

    #[test]
    fn test_no_matching_variant_surfaces() {
        struct EmptyCatalog;
        impl VariantCatalog for EmptyCatalog {
            fn variants_for(&self, _kind: MaterialKind) -> CarportResult<Vec<MaterialVariant>> {
                Ok(Vec::new())
            }
        }

        let carport = Carport::new(600, 400, RoofType::Flat);
        let err = compute_quantities(&carport, &EmptyCatalog).unwrap_err();
        assert!(matches!(err, CarportError::NoMatchingVariant { .. }));
    }

    #[test]
    fn test_catalog_failure_propagates() {
        struct BrokenCatalog;
        impl VariantCatalog for BrokenCatalog {
            fn variants_for(&self, _kind: MaterialKind) -> CarportResult<Vec<MaterialVariant>> {
                Err(CarportError::catalog_unavailable("forbindelse afbrudt"))
            }
        }

        let carport = Carport::new(600, 400, RoofType::Flat);
        let err = compute_quantities(&carport, &BrokenCatalog).unwrap_err();
        assert!(matches!(err, CarportError::CatalogUnavailable { .. }));
    }
}
