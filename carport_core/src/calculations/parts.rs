//! # Part Counts
//!
//! Discrete part counts from the empirical construction rules: posts,
//! rafters, roofing rows, screws, bracing straps and carriage bolts.
//! These are counting rules, not load engineering.

use crate::carport::{Carport, Shed, ShedPlacement};

use super::span;

/// Post rows on each side of the carport
const POST_ROWS: u32 = 2;
/// Extra posts a full-width shed adds (4 corners + 1 door post)
const SHED_FULL_WIDTH_POSTS: u32 = 5;
/// Extra posts a half-width shed adds
const SHED_HALF_WIDTH_POSTS: u32 = 4;
/// A long half-width shed needs a fifth post at its open side
const SHED_LONG_THRESHOLD_CM: u32 = 310;

/// Roofing plates overlap one rib at the side (cm)
const ROOF_SIDE_OVERLAY_CM: u32 = 9;
/// Roof screws per square meter of roof
const SCREWS_PER_SQUARE_METER: f64 = 12.0;
/// Screws per universal fitting
const SCREWS_PER_FITTING: u32 = 9;
/// Each rafter is held by a left and a right fitting
const FITTINGS_PER_RAFTER: u32 = 2;
/// Strap bracing keeps this margin to the frame edges (cm)
const STRAP_EDGE_MARGIN_CM: f64 = 35.0;
/// Carriage bolts through each beam/post joint
const BOLTS_PER_JOINT: u32 = 2;
/// Beam/post joints per side with an unspliced beam
const JOINTS_PER_SIDE_SINGLE_BEAM: u32 = 3;
/// Beam/post joints per side with a spliced beam
const JOINTS_PER_SIDE_SPLICED_BEAM: u32 = 4;

/// Total posts for the carport, shed included.
pub fn post_count(carport: &Carport) -> u32 {
    let base = span::posts_per_row(carport.length_cm) * POST_ROWS;
    base + carport.shed.as_ref().map_or(0, shed_extra_posts)
}

/// Extra posts an attached shed requires.
fn shed_extra_posts(shed: &Shed) -> u32 {
    match shed.placement {
        ShedPlacement::FullWidth => SHED_FULL_WIDTH_POSTS,
        ShedPlacement::Left | ShedPlacement::Right => {
            if shed.length_cm > SHED_LONG_THRESHOLD_CM {
                SHED_FULL_WIDTH_POSTS
            } else {
                SHED_HALF_WIDTH_POSTS
            }
        }
    }
}

/// Total rafters across the carport's length.
pub fn rafter_count(length_cm: u32) -> u32 {
    span::rafter_plan(length_cm).count
}

/// Rows of roofing plates needed to cover the carport's width.
pub fn roof_plate_rows(width_cm: u32, plate_cover_width_cm: u32) -> u32 {
    let effective = plate_cover_width_cm - ROOF_SIDE_OVERLAY_CM;
    width_cm.div_ceil(effective)
}

/// Packages of roofing screws (12 per m² of roof area).
pub fn roof_screw_packages(width_cm: u32, length_cm: u32, screws_per_package: u32) -> u32 {
    let area_m2 = (width_cm as f64 / 100.0) * (length_cm as f64 / 100.0);
    let total_screws = area_m2 * SCREWS_PER_SQUARE_METER;
    (total_screws / screws_per_package as f64).ceil() as u32
}

/// Packages of bracket screws for the rafter fittings.
pub fn bracket_screw_packages(length_cm: u32, screws_per_package: u32) -> u32 {
    let total = rafter_count(length_cm) * FITTINGS_PER_RAFTER * SCREWS_PER_FITTING;
    total.div_ceil(screws_per_package)
}

/// Rolls of perforated strap for the two diagonal braces.
///
/// The braced bay spans the carport minus the shed (or minus one bay at
/// each end without a shed) lengthwise, and the width minus the edge
/// margins; each diagonal runs twice (doubled strap).
pub fn strap_rolls(carport: &Carport, roll_length_cm: u32) -> u32 {
    let spacing = span::rafter_plan(carport.length_cm).raw_spacing_cm;

    let braced_width = carport.width_cm as f64 - 2.0 * STRAP_EDGE_MARGIN_CM;
    let braced_length = match &carport.shed {
        Some(shed) => carport.length_cm as f64 - (shed.length_cm as f64 + spacing),
        None => carport.length_cm as f64 - 2.0 * spacing,
    };

    let diagonal_m = braced_length.hypot(braced_width) / 100.0;
    let needed_m = 2.0 * diagonal_m;
    let roll_m = roll_length_cm as f64 / 100.0;

    (needed_m / roll_m).ceil() as u32
}

/// Carriage bolts through the beam/post joints of both sides.
///
/// A spliced beam adds one joint per side. Square washers are used in the
/// same quantity as bolts.
pub fn carriage_bolt_count(length_cm: u32, max_beam_variant_cm: u32) -> u32 {
    let joints_per_side = if max_beam_variant_cm >= length_cm {
        JOINTS_PER_SIDE_SINGLE_BEAM
    } else {
        JOINTS_PER_SIDE_SPLICED_BEAM
    };
    joints_per_side * POST_ROWS * BOLTS_PER_JOINT
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::carport::RoofType;

    #[test]
    fn test_post_count_without_shed() {
        for (length, expected) in [(780, 6), (750, 6), (300, 4), (240, 4)] {
            let carport = Carport::new(length, 400, RoofType::Flat);
            assert_eq!(post_count(&carport), expected, "length {}", length);
        }
    }

    #[test]
    fn test_post_count_with_shed() {
        let full = Carport::new(780, 600, RoofType::Flat)
            .with_shed(Shed::new(210, 530, ShedPlacement::FullWidth));
        assert_eq!(post_count(&full), 11);

        let left_short = Carport::new(750, 600, RoofType::Flat)
            .with_shed(Shed::new(210, 250, ShedPlacement::Left));
        assert_eq!(post_count(&left_short), 10);

        let right_long = Carport::new(750, 600, RoofType::Flat)
            .with_shed(Shed::new(340, 250, ShedPlacement::Right));
        assert_eq!(post_count(&right_long), 11);

        let full_600 = Carport::new(600, 600, RoofType::Flat)
            .with_shed(Shed::new(210, 530, ShedPlacement::FullWidth));
        assert_eq!(post_count(&full_600), 9);
    }

    #[test]
    fn test_posts_match_span_formula() {
        // posts_per_row(L) = max(2, ceil(L / 310)), doubled for two rows
        for length in (240..=780).step_by(10) {
            let carport = Carport::new(length, 400, RoofType::Flat);
            let expected = (length as f64 / 310.0).ceil().max(2.0) as u32 * 2;
            assert_eq!(post_count(&carport), expected, "length {}", length);
        }
    }

    #[test]
    fn test_roof_plate_rows() {
        for (width, expected) in [
            (420, 5),
            (450, 5),
            (480, 5),
            (510, 6),
            (540, 6),
            (570, 6),
            (600, 6),
        ] {
            assert_eq!(roof_plate_rows(width, 109), expected, "width {}", width);
        }
    }

    #[test]
    fn test_roof_screw_packages() {
        assert_eq!(roof_screw_packages(420, 600, 200), 2);
        assert_eq!(roof_screw_packages(450, 690, 200), 2);
        assert_eq!(roof_screw_packages(600, 780, 200), 3);
    }

    #[test]
    fn test_bracket_screw_packages() {
        // 15 rafters x 2 fittings x 9 screws = 270
        assert_eq!(bracket_screw_packages(780, 250), 2);
        // 12 rafters x 2 fittings x 9 screws = 216
        assert_eq!(bracket_screw_packages(600, 250), 1);
    }

    #[test]
    fn test_strap_rolls() {
        let large_with_shed = Carport::new(780, 600, RoofType::Flat)
            .with_shed(Shed::new(210, 530, ShedPlacement::FullWidth));
        assert_eq!(strap_rolls(&large_with_shed, 1000), 2);

        let large = Carport::new(780, 600, RoofType::Flat);
        assert_eq!(strap_rolls(&large, 1000), 2);

        let small = Carport::new(420, 420, RoofType::Flat);
        assert_eq!(strap_rolls(&small, 1000), 1);

        let small_with_shed = Carport::new(420, 420, RoofType::Flat)
            .with_shed(Shed::new(180, 350, ShedPlacement::FullWidth));
        assert_eq!(strap_rolls(&small_with_shed, 1000), 1);
    }

    #[test]
    fn test_carriage_bolts() {
        // single beam per row: 3 joints x 2 sides x 2 bolts
        assert_eq!(carriage_bolt_count(600, 600), 12);
        // spliced beam: 4 joints x 2 sides x 2 bolts
        assert_eq!(carriage_bolt_count(780, 600), 16);
    }
}
