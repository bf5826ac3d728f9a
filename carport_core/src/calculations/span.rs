//! # Span Planning
//!
//! Generic subdivision of a linear span by structural elements at bounded
//! spacing. Used for rafters along the carport's length and for post rows.
//!
//! The plan keeps both the exact spacing (for placement math and drawing
//! geometry) and a display spacing rounded to 0.1 cm (for labels and the
//! bill of materials). Keeping the unrounded value internal prevents
//! cumulative drift between the drawing and the part counts.

use serde::{Deserialize, Serialize};

/// Largest allowed gap between rafters before planning (cm)
pub const MAX_RAFTER_SEGMENT_CM: u32 = 60;
/// Spacing ceiling that triggers rebalancing (cm)
pub const REBALANCE_LIMIT_CM: f64 = 56.0;
/// A rafter sits at each end of the span
pub const RAFTER_EDGE_COUNT: u32 = 2;
/// Rafter member width (cm)
pub const RAFTER_WIDTH_CM: f64 = 4.5;
/// Longest roof run one pair of posts may carry (cm)
pub const MAX_POST_BAY_CM: u32 = 310;
/// A post row never has fewer than two posts
pub const MIN_POSTS_PER_ROW: u32 = 2;

/// Result of subdividing a span: how many elements, and how far apart.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SpanPlan {
    /// Number of elements across the span (>= 2)
    pub count: u32,
    /// Exact center spacing (cm); authoritative for placement math
    pub raw_spacing_cm: f64,
    /// Spacing rounded to 0.1 cm, as printed on drawings and offers
    pub display_spacing_cm: f64,
}

/// Evenly distribute elements over `total_span_cm` so that no gap exceeds
/// the structural maximum.
///
/// The initial count is `total_span / max_segment` middle elements plus
/// `edge_count` end elements. Spacing is measured between element centers
/// over the span minus one member width at each end. While the spacing
/// exceeds [`REBALANCE_LIMIT_CM`], one more element is added.
pub fn plan(
    total_span_cm: u32,
    max_segment_cm: u32,
    edge_count: u32,
    member_width_cm: f64,
) -> SpanPlan {
    let middle = total_span_cm / max_segment_cm;
    let mut count = (middle + edge_count).max(2);
    let mut spacing = spacing_for(total_span_cm, member_width_cm, count);

    while spacing > REBALANCE_LIMIT_CM {
        count += 1;
        spacing = spacing_for(total_span_cm, member_width_cm, count);
    }

    SpanPlan {
        count,
        raw_spacing_cm: spacing,
        display_spacing_cm: (spacing * 10.0).round() / 10.0,
    }
}

fn spacing_for(total_span_cm: u32, member_width_cm: f64, count: u32) -> f64 {
    (total_span_cm as f64 - 2.0 * member_width_cm) / ((count - 1) as f64)
}

/// Rafter plan for a carport of the given length.
pub fn rafter_plan(length_cm: u32) -> SpanPlan {
    plan(
        length_cm,
        MAX_RAFTER_SEGMENT_CM,
        RAFTER_EDGE_COUNT,
        RAFTER_WIDTH_CM,
    )
}

/// Posts needed in one row along the carport's length.
pub fn posts_per_row(length_cm: u32) -> u32 {
    length_cm.div_ceil(MAX_POST_BAY_CM).max(MIN_POSTS_PER_ROW)
}
