//! # Top View
//!
//! Plan drawing of the carport seen from above: frame, beams, rafters,
//! posts, strap bracing and dimension arrows. All structural coordinates
//! come from the same span and placement math as the bill of materials,
//! so the drawing can never disagree with the part counts.
//!
//! The document is a fixed 1000x750 frame with a nested viewport at
//! (150, 50) whose coordinate system maps carport centimeters 1:1.

use crate::calculations::{placement, span};
use crate::carport::{Carport, Shed, ShedPlacement};
use crate::units::Cm;

use super::svg::SvgCanvas;
use super::{BASE_STYLE, DASHED_STYLE};

/// Fixed outer frame of the document
const VIEW_BOX: &str = "0 0 1000 750";
/// Nested viewport offset, leaves room for the dimension arrows
const INNER_X: u32 = 150;
const INNER_Y: u32 = 50;

/// Beam inset from each side of the frame (cm)
const BEAM_INSET_CM: f64 = 35.0;
/// Beam member width as drawn (cm)
const BEAM_WIDTH_CM: f64 = 4.5;
/// Strap bracing start offset from the front edge (cm)
const STRAP_START_X_CM: f64 = 55.0 + span::RAFTER_WIDTH_CM;
/// Strap bracing reaches this fraction of the carport length
const STRAP_END_FRACTION: f64 = 0.712;
/// The doubled strap runs offset by this much (cm)
const STRAP_DOUBLE_OFFSET_CM: f64 = 5.0;

/// Render the top view as a self-contained SVG document.
pub fn render(carport: &Carport) -> String {
    let length = carport.length_cm as f64;
    let width = carport.width_cm as f64;
    let plan = span::rafter_plan(carport.length_cm);
    let layout = placement::post_layout(carport);

    let mut outer = SvgCanvas::root(VIEW_BOX);
    outer.arrow_defs();
    draw_spacing_arrows(&mut outer, &plan, length);
    draw_width_arrows(&mut outer, width);
    draw_length_arrow(&mut outer, length, width);

    let mut inner = SvgCanvas::nested(INNER_X, INNER_Y, carport.length_cm, carport.width_cm);
    inner.rect(0.0, 0.0, length, width, BASE_STYLE);
    draw_beams(&mut inner, length, width);
    draw_rafters(&mut inner, &plan, length, width);
    draw_straps(&mut inner, length, width);
    if let Some(shed) = &carport.shed {
        draw_shed(&mut inner, carport, shed);
    }
    draw_posts(&mut inner, carport, &layout);

    outer.embed(inner);
    outer.finish()
}

/// Rafter centers in cm from the front edge. The last rafter sits flush
/// with the back edge rather than on the spacing grid.
fn rafter_positions(plan: &span::SpanPlan, length: f64) -> Vec<f64> {
    let mut xs: Vec<f64> = (0..plan.count - 1)
        .map(|i| i as f64 * plan.raw_spacing_cm)
        .collect();
    xs.push(length - span::RAFTER_WIDTH_CM);
    xs
}

/// One dimension arrow per bay. Each label shows the measured distance
/// between its tick marks; the back rafter sits flush with the edge, so
/// the last bay is wider than the spacing grid.
fn draw_spacing_arrows(outer: &mut SvgCanvas, plan: &span::SpanPlan, length: f64) {
    let half = span::RAFTER_WIDTH_CM / 2.0;
    let y = INNER_Y as f64 - 12.5;
    let centers: Vec<f64> = rafter_positions(plan, length)
        .iter()
        .map(|x| INNER_X as f64 + x + half)
        .collect();

    for x in &centers {
        outer.line(*x, y - 10.0, *x, y + 10.0, BASE_STYLE);
    }
    for pair in centers.windows(2) {
        outer.dimension_line(pair[0], y, pair[1], y);
        let label = Cm(pair[1] - pair[0]).meter_label();
        outer.text((pair[0] + pair[1]) / 2.0, y - 12.5, 0.0, &label);
    }
}

fn draw_width_arrows(outer: &mut SvgCanvas, width: f64) {
    let top = INNER_Y as f64;

    // overall width
    let x = 75.0;
    outer.dimension_line(x, top, x, top + width);
    outer.line(x - 10.0, top, x + 10.0, top, BASE_STYLE);
    outer.line(x - 10.0, top + width, x + 10.0, top + width, BASE_STYLE);
    outer.text(x - 10.0, top + width / 2.0, -90.0, &Cm(width).meter_label());

    // width between the beams
    let x = 112.5;
    let y1 = top + BEAM_INSET_CM;
    let y2 = top + width - BEAM_INSET_CM;
    outer.dimension_line(x, y1, x, y2);
    outer.text(
        x - 10.0,
        (y1 + y2) / 2.0,
        -90.0,
        &Cm(width - 2.0 * BEAM_INSET_CM).meter_label(),
    );
}

fn draw_length_arrow(outer: &mut SvgCanvas, length: f64, width: f64) {
    let y = INNER_Y as f64 + width + 25.0;
    let x1 = INNER_X as f64;
    let x2 = INNER_X as f64 + length;
    outer.dimension_line(x1, y, x2, y);
    outer.line(x1, y - 10.0, x1, y + 10.0, BASE_STYLE);
    outer.line(x2, y - 10.0, x2, y + 10.0, BASE_STYLE);
    outer.text((x1 + x2) / 2.0, y + 15.0, 0.0, &Cm(length).meter_label());
}

fn draw_beams(inner: &mut SvgCanvas, length: f64, width: f64) {
    inner.rect(0.0, BEAM_INSET_CM, length, BEAM_WIDTH_CM, BASE_STYLE);
    inner.rect(
        0.0,
        width - BEAM_INSET_CM,
        length,
        BEAM_WIDTH_CM,
        BASE_STYLE,
    );
}

fn draw_rafters(inner: &mut SvgCanvas, plan: &span::SpanPlan, length: f64, width: f64) {
    for x in rafter_positions(plan, length) {
        inner.rect(x, 0.0, span::RAFTER_WIDTH_CM, width, BASE_STYLE);
    }
}

/// The two doubled strap diagonals crossing the open bays.
fn draw_straps(inner: &mut SvgCanvas, length: f64, width: f64) {
    let x1 = STRAP_START_X_CM;
    let x2 = (length * STRAP_END_FRACTION).round();
    let y_top = BEAM_INSET_CM + BEAM_WIDTH_CM;
    let y_bottom = width - BEAM_INSET_CM - 2.5;

    for offset in [0.0, STRAP_DOUBLE_OFFSET_CM] {
        inner.line(x1 + offset, y_top, x2 + offset, y_bottom, DASHED_STYLE);
        inner.line(x1 + offset, y_bottom, x2 + offset, y_top, DASHED_STYLE);
    }
}

/// Dashed shed outline aligned with the back posts.
fn draw_shed(inner: &mut SvgCanvas, carport: &Carport, shed: &Shed) {
    let length = carport.length_cm as f64;
    let width = carport.width_cm as f64;
    let x = length - shed.length_cm as f64 - placement::POST_EDGE_INSET_CM;
    let shed_length = shed.length_cm as f64;

    let (y, shed_width) = match shed.placement {
        ShedPlacement::FullWidth => (BEAM_INSET_CM, width - 2.0 * BEAM_INSET_CM),
        ShedPlacement::Left => (BEAM_INSET_CM, shed.width_cm as f64),
        ShedPlacement::Right => (
            width - BEAM_INSET_CM - shed.width_cm as f64,
            shed.width_cm as f64,
        ),
    };
    inner.rect(x, y, shed_length, shed_width, DASHED_STYLE);
}

fn draw_posts(inner: &mut SvgCanvas, carport: &Carport, layout: &placement::PostLayout) {
    let width = carport.width_cm as f64;
    let post = placement::POST_WIDTH_CM;
    let y_top = BEAM_INSET_CM - 2.5;
    let y_bottom = width - BEAM_INSET_CM - 2.5;

    for &x in &layout.xs_cm {
        inner.rect(x, y_top, post, post, BASE_STYLE);
        inner.rect(x, y_bottom, post, post, BASE_STYLE);
    }

    // the shed's inner post pair, on the shed's front and back wall
    if let (Some(y), Some(shed)) = (layout.shed_inner_y_cm, &carport.shed) {
        let front = placement::shed_post_position(carport.length_cm, shed);
        let back = carport.length_cm as f64 - placement::POST_EDGE_INSET_CM;
        inner.rect(front, y - post / 2.0, post, post, BASE_STYLE);
        inner.rect(back, y - post / 2.0, post, post, BASE_STYLE);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::carport::RoofType;

    #[test]
    fn test_render_is_deterministic() {
        let carport = Carport::new(780, 600, RoofType::Flat);
        assert_eq!(render(&carport), render(&carport));
    }

    #[test]
    fn test_document_shape() {
        let carport = Carport::new(600, 420, RoofType::Flat);
        let svg = render(&carport);
        assert!(svg.starts_with("<svg"));
        assert!(svg.contains(r#"viewBox="0 0 1000 750""#));
        assert!(svg.contains(r#"viewBox="0 0 600 420""#));
    }

    #[test]
    fn test_posts_match_placement() {
        let carport = Carport::new(780, 600, RoofType::Flat)
            .with_shed(Shed::new(270, 530, ShedPlacement::FullWidth));
        let svg = render(&carport);

        for x in placement::post_row_positions(&carport) {
            let needle = format!(r#"<rect x="{:.2}""#, x);
            assert!(svg.contains(&needle), "missing post at {}", x);
        }
    }

    #[test]
    fn test_rafter_count_matches_plan() {
        let carport = Carport::new(780, 600, RoofType::Flat);
        let svg = render(&carport);

        // every rafter is a full-height rect, plus the frame itself
        let needle = r#"height="600.00""#;
        let rafters = span::rafter_plan(780).count as usize;
        assert_eq!(svg.matches(needle).count(), rafters + 1);
    }

    #[test]
    fn test_shed_outline_present() {
        let with_shed = Carport::new(780, 600, RoofType::Flat)
            .with_shed(Shed::new(210, 530, ShedPlacement::FullWidth));
        let without = Carport::new(780, 600, RoofType::Flat);

        assert!(render(&with_shed).contains("stroke-dasharray"));
        // straps are dashed too, so count elements instead
        let dashed = |svg: &str| svg.matches("stroke-dasharray").count();
        assert!(dashed(&render(&with_shed)) > dashed(&render(&without)));
    }

    #[test]
    fn test_bay_labels_show_measured_distance() {
        let carport = Carport::new(780, 600, RoofType::Flat);
        let svg = render(&carport);
        // grid bays measure the plan spacing (55.07 cm), the flush back
        // rafter makes the last bay 59.57 cm
        assert!(svg.contains(">0.55</text>"));
        assert!(svg.contains(">0.60</text>"));
    }

    #[test]
    fn test_shed_inner_posts_sit_on_shed_front_wall() {
        // a long shed pushes the center pair behind the shed pair; the
        // inner posts still belong on the shed's front wall, not on the
        // rearmost intermediate pair
        let carport = Carport::new(780, 600, RoofType::Flat)
            .with_shed(Shed::new(380, 530, ShedPlacement::FullWidth));
        let svg = render(&carport);

        // shed front wall at 370, back wall posts at 750, centered in y
        assert!(svg.contains(r#"<rect x="370.00" y="295.00""#));
        assert!(svg.contains(r#"<rect x="750.00" y="295.00""#));
        // the center pair (pushed to 480) carries no inner post
        assert!(!svg.contains(r#"<rect x="480.00" y="295.00""#));
    }
}
