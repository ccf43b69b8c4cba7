//! Drawing surface abstraction
//!
//! The game only needs five primitives; hosts implement them on whatever they
//! draw to (a canvas 2D context in the browser).

use glam::Vec2;

/// RGBA, each channel 0-1
pub type Color = [f32; 4];

/// Colors for game elements
pub mod colors {
    use super::Color;

    pub const LINE: Color = [1.0, 1.0, 1.0, 1.0];
    pub const PADDLE: Color = [1.0, 1.0, 1.0, 1.0];
    pub const PUCK: Color = [1.0, 0.0, 0.0, 1.0];
}

/// Something the scene can be drawn onto
pub trait Surface {
    /// Wipe the whole surface
    fn clear(&mut self);
    /// Straight line; an empty `dash` means solid
    fn stroke_line(&mut self, from: Vec2, to: Vec2, color: Color, dash: &[f32]);
    /// Full-circle outline
    fn stroke_arc(&mut self, center: Vec2, radius: f32, color: Color);
    fn fill_rect(&mut self, origin: Vec2, size: Vec2, color: Color);
    fn fill_circle(&mut self, center: Vec2, radius: f32, color: Color);
}

/// A single recorded draw call
#[derive(Debug, Clone, PartialEq)]
pub enum DrawCommand {
    Line {
        from: Vec2,
        to: Vec2,
        color: Color,
        dash: Vec<f32>,
    },
    Arc {
        center: Vec2,
        radius: f32,
        color: Color,
    },
    Rect {
        origin: Vec2,
        size: Vec2,
        color: Color,
    },
    Circle {
        center: Vec2,
        radius: f32,
        color: Color,
    },
}

/// Surface that keeps the draw calls issued since the last `clear`
///
/// Used by the headless host and by tests to inspect a frame.
#[derive(Debug, Clone, Default)]
pub struct FrameRecorder {
    commands: Vec<DrawCommand>,
    clears: u64,
}

impl FrameRecorder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Draw calls of the current frame
    pub fn commands(&self) -> &[DrawCommand] {
        &self.commands
    }

    /// Number of frames started so far
    pub fn frames(&self) -> u64 {
        self.clears
    }
}

impl Surface for FrameRecorder {
    fn clear(&mut self) {
        self.commands.clear();
        self.clears += 1;
    }

    fn stroke_line(&mut self, from: Vec2, to: Vec2, color: Color, dash: &[f32]) {
        self.commands.push(DrawCommand::Line {
            from,
            to,
            color,
            dash: dash.to_vec(),
        });
    }

    fn stroke_arc(&mut self, center: Vec2, radius: f32, color: Color) {
        self.commands.push(DrawCommand::Arc {
            center,
            radius,
            color,
        });
    }

    fn fill_rect(&mut self, origin: Vec2, size: Vec2, color: Color) {
        self.commands.push(DrawCommand::Rect {
            origin,
            size,
            color,
        });
    }

    fn fill_circle(&mut self, center: Vec2, radius: f32, color: Color) {
        self.commands.push(DrawCommand::Circle {
            center,
            radius,
            color,
        });
    }
}
