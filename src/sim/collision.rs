//! Collision tests for the rectangular field
//!
//! Pure predicates over positions; the tick decides what to do with a hit.

use super::state::{Paddle, Puck, Side};
use crate::tuning::Tuning;

/// A puck touching a paddle inside its strike zone
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PaddleContact {
    pub side: Side,
    /// Puck center minus paddle center (negative = above center)
    pub offset: f32,
}

/// Whether the puck's leading edge is past the top or bottom wall
pub fn puck_hits_wall(puck: &Puck, tuning: &Tuning) -> bool {
    let r = tuning.puck_radius;
    puck.pos.y - r < 0.0 || puck.pos.y + r > tuning.surface_height
}

/// Check the puck against one paddle's strike zone
///
/// The puck's edge must reach the paddle's face and its center must lie
/// strictly within the paddle's vertical span.
pub fn puck_paddle_contact(
    puck: &Puck,
    paddle: &Paddle,
    side: Side,
    tuning: &Tuning,
) -> Option<PaddleContact> {
    let r = tuning.puck_radius;
    let in_zone = match side {
        Side::Left => puck.pos.x - r <= tuning.paddle_width,
        Side::Right => puck.pos.x + r >= tuning.surface_width - tuning.paddle_width,
    };

    if in_zone && paddle.spans(puck.pos.y, tuning) {
        Some(PaddleContact {
            side,
            offset: puck.pos.y - paddle.center_y(tuning),
        })
    } else {
        None
    }
}

/// Side that earns a point, if the puck has completely left the field
///
/// Both edges must be past the goal line, so a puck straddling the line
/// scores nothing until it is fully out.
pub fn goal_scorer(puck: &Puck, tuning: &Tuning) -> Option<Side> {
    let r = tuning.puck_radius;
    if puck.pos.x + r < 0.0 {
        Some(Side::Right)
    } else if puck.pos.x - r > tuning.surface_width {
        Some(Side::Left)
    } else {
        None
    }
}
