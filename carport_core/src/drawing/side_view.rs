//! # Side View
//!
//! Elevation drawing of the carport seen from the side: rafter ends, the
//! beam, posts down to the ground line, the weather board with its
//! overhang, and dimension arrows. Post x offsets and rafter spacing are
//! taken from the same placement and span math as the top view and the
//! bill of materials.

use crate::calculations::{placement, span};
use crate::carport::Carport;
use crate::units::Cm;

use super::svg::SvgCanvas;
use super::BASE_STYLE;

/// Fixed outer frame of the document
const VIEW_BOX: &str = "0 0 1000 500";
/// Nested viewport offset, leaves room for the dimension arrows
const INNER_X: u32 = 150;
const INNER_Y: u32 = 50;

/// Drawn elevation from the roof line to the ground (cm)
const ELEVATION_CM: u32 = 230;
/// Rafter end depth as seen from the side (cm)
const RAFTER_DEPTH_CM: f64 = 19.5;
/// Beam depth as seen from the side (cm)
const BEAM_DEPTH_CM: f64 = 19.5;
/// Post height from the beam down to the ground (cm)
const POST_HEIGHT_CM: f64 = 190.5;
/// Weather board overhang past each end of the roof (cm)
const WEATHER_BOARD_OVERHANG_CM: f64 = 15.0;
/// Weather board height as drawn (cm)
const WEATHER_BOARD_HEIGHT_CM: f64 = 10.0;

/// Render the side view as a self-contained SVG document.
pub fn render(carport: &Carport) -> String {
    let length = carport.length_cm as f64;
    let plan = span::rafter_plan(carport.length_cm);
    let layout = placement::post_layout(carport);

    let mut outer = SvgCanvas::root(VIEW_BOX);
    outer.arrow_defs();
    draw_weather_board(&mut outer, length);
    draw_height_arrow(&mut outer);
    draw_length_arrow(&mut outer, length);

    let mut inner = SvgCanvas::nested(INNER_X, INNER_Y, carport.length_cm, ELEVATION_CM);
    // frame outline; its bottom edge is the ground line
    inner.rect(0.0, 0.0, length, ELEVATION_CM as f64, BASE_STYLE);
    draw_rafter_ends(&mut inner, &plan, length);
    inner.rect(0.0, RAFTER_DEPTH_CM, length, BEAM_DEPTH_CM, BASE_STYLE);
    draw_posts(&mut inner, &layout);

    outer.embed(inner);
    outer.finish()
}

/// The weather board sits on the roof line and overhangs both gable ends,
/// so it is drawn in the outer coordinate frame.
fn draw_weather_board(outer: &mut SvgCanvas, length: f64) {
    let x1 = INNER_X as f64 - WEATHER_BOARD_OVERHANG_CM;
    let x2 = INNER_X as f64 + length + WEATHER_BOARD_OVERHANG_CM;
    let y2 = INNER_Y as f64;
    let y1 = y2 - WEATHER_BOARD_HEIGHT_CM;
    outer.polygon(&[(x1, y1), (x2, y1), (x2, y2), (x1, y2)], BASE_STYLE);
}

fn draw_height_arrow(outer: &mut SvgCanvas) {
    let x = 75.0;
    let y1 = INNER_Y as f64;
    let y2 = INNER_Y as f64 + ELEVATION_CM as f64;
    outer.dimension_line(x, y1, x, y2);
    outer.line(x - 10.0, y1, x + 10.0, y1, BASE_STYLE);
    outer.line(x - 10.0, y2, x + 10.0, y2, BASE_STYLE);
    outer.text(
        x - 10.0,
        (y1 + y2) / 2.0,
        -90.0,
        &Cm(ELEVATION_CM as f64).meter_label(),
    );
}

fn draw_length_arrow(outer: &mut SvgCanvas, length: f64) {
    let y = INNER_Y as f64 + ELEVATION_CM as f64 + 25.0;
    let x1 = INNER_X as f64;
    let x2 = INNER_X as f64 + length;
    outer.dimension_line(x1, y, x2, y);
    outer.line(x1, y - 10.0, x1, y + 10.0, BASE_STYLE);
    outer.line(x2, y - 10.0, x2, y + 10.0, BASE_STYLE);
    outer.text((x1 + x2) / 2.0, y + 15.0, 0.0, &Cm(length).meter_label());
}

fn draw_rafter_ends(inner: &mut SvgCanvas, plan: &span::SpanPlan, length: f64) {
    for i in 0..plan.count - 1 {
        let x = i as f64 * plan.raw_spacing_cm;
        inner.rect(x, 0.0, span::RAFTER_WIDTH_CM, RAFTER_DEPTH_CM, BASE_STYLE);
    }
    inner.rect(
        length - span::RAFTER_WIDTH_CM,
        0.0,
        span::RAFTER_WIDTH_CM,
        RAFTER_DEPTH_CM,
        BASE_STYLE,
    );
}

fn draw_posts(inner: &mut SvgCanvas, layout: &placement::PostLayout) {
    let y = RAFTER_DEPTH_CM + BEAM_DEPTH_CM;
    for &x in &layout.xs_cm {
        inner.rect(x, y, placement::POST_WIDTH_CM, POST_HEIGHT_CM, BASE_STYLE);
    }
}
