//! Field layout: markings, paddles and puck

use glam::Vec2;

use super::surface::{Surface, colors};
use crate::sim::MatchState;

/// Draw one frame of the match; reads the state, never changes it
pub fn draw_frame<S: Surface + ?Sized>(state: &MatchState, surface: &mut S) {
    let t = &state.tuning;
    let center = t.center();

    surface.clear();

    // Center divider and circle
    surface.stroke_line(
        Vec2::new(center.x, 0.0),
        Vec2::new(center.x, t.surface_height),
        colors::LINE,
        &t.divider_dash,
    );
    surface.stroke_arc(center, t.center_circle_radius, colors::LINE);

    // Paddles hug the side walls
    let paddle_size = Vec2::new(t.paddle_width, t.paddle_height);
    surface.fill_rect(Vec2::new(0.0, state.left.y), paddle_size, colors::PADDLE);
    surface.fill_rect(
        Vec2::new(t.surface_width - t.paddle_width, state.right.y),
        paddle_size,
        colors::PADDLE,
    );

    surface.fill_circle(state.puck.pos, t.puck_radius, colors::PUCK);
}
