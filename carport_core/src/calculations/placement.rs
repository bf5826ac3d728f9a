//! # Post Placement
//!
//! Absolute post positions along the carport's length axis, measured in cm
//! from the front edge. The ordered list produced here is the single
//! authoritative post layout: both the technical drawings and the beam
//! splicing logic consume it, which is what keeps them consistent.
//!
//! Placement rules:
//!
//! - front posts 100 cm from the front edge
//! - back posts 30 cm in from the back edge
//! - a center pair when the row needs three posts, by default one maximum
//!   bay (310 cm) behind the front pair
//! - with a shed, an extra pair 30 cm in front of the shed's front wall
//! - the center pair yields to the shed pair: if the two would stand within
//!   100 cm of each other, the center pair is pushed to restore clearance

use serde::{Deserialize, Serialize};

use crate::carport::{Carport, Shed, ShedPlacement};

use super::span;

/// Front post pair offset from the front edge (cm)
pub const FRONT_POST_OFFSET_CM: f64 = 100.0;
/// Post inset from the back edge and from shed walls (cm)
pub const POST_EDGE_INSET_CM: f64 = 30.0;
/// Post cross-section (cm)
pub const POST_WIDTH_CM: f64 = 10.0;
/// Minimum clear distance between neighbouring post pairs (cm)
const MIN_POST_CLEARANCE_CM: f64 = 100.0;

/// The computed post layout of a carport.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PostLayout {
    /// Ascending x offsets (cm from the front edge), one per post-row
    /// position: front, optional center, optional shed-adjacent, back
    pub xs_cm: Vec<f64>,
    /// y offset of the shed's inner post pair (cm from the left frame
    /// edge), present only with a shed; used by the drawings
    pub shed_inner_y_cm: Option<f64>,
}

/// Compute the authoritative post layout.
pub fn post_layout(carport: &Carport) -> PostLayout {
    PostLayout {
        xs_cm: post_row_positions(carport),
        shed_inner_y_cm: carport
            .shed
            .as_ref()
            .map(|shed| shed_inner_post_y(carport, shed)),
    }
}

/// Ascending x offsets of every post pair.
///
/// When the shed pair and the center pair coincide the position appears
/// once; the list never contains duplicates.
pub fn post_row_positions(carport: &Carport) -> Vec<f64> {
    let mut xs = vec![FRONT_POST_OFFSET_CM];

    if span::posts_per_row(carport.length_cm) == 3 {
        xs.push(center_post_position(carport));
    }
    if let Some(shed) = &carport.shed {
        xs.push(shed_post_position(carport.length_cm, shed));
    }
    xs.push(carport.length_cm as f64 - POST_EDGE_INSET_CM);

    xs.sort_by(f64::total_cmp);
    xs.dedup();
    xs
}

/// x offset of the center post pair.
///
/// Defaults to one maximum bay behind the front pair. With a shed, the
/// center pair keeps at least 100 cm clearance to the shed pair: it is
/// pushed behind the shed pair (plus one post width) when the shed pair
/// stands in front of it, and pulled in front of it otherwise.
pub fn center_post_position(carport: &Carport) -> f64 {
    let default = FRONT_POST_OFFSET_CM + span::MAX_POST_BAY_CM as f64;

    let Some(shed) = &carport.shed else {
        return default;
    };

    let shed_x = shed_post_position(carport.length_cm, shed);
    let gap = shed_x - default;

    if gap == 0.0 || gap.abs() >= MIN_POST_CLEARANCE_CM {
        default
    } else if gap < 0.0 {
        shed_x + MIN_POST_CLEARANCE_CM + POST_WIDTH_CM
    } else {
        shed_x - MIN_POST_CLEARANCE_CM
    }
}

/// x offset of the shed-adjacent post pair.
pub fn shed_post_position(carport_length_cm: u32, shed: &Shed) -> f64 {
    carport_length_cm as f64 - (shed.length_cm as f64 + POST_EDGE_INSET_CM)
}

/// y offset of the shed's inner post pair, for the drawings.
///
/// A full-width shed centers the inner pair; a half-width shed offsets it
/// by the shed's width plus the edge inset, measured from the shed's side
/// of the frame.
pub fn shed_inner_post_y(carport: &Carport, shed: &Shed) -> f64 {
    match shed.placement {
        ShedPlacement::FullWidth => carport.width_cm as f64 / 2.0,
        ShedPlacement::Left => shed.width_cm as f64 + POST_EDGE_INSET_CM,
        ShedPlacement::Right => {
            carport.width_cm as f64 - (shed.width_cm as f64 + POST_EDGE_INSET_CM)
        }
    }
}
