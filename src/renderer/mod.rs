//! Rendering module
//!
//! The scene is described as a handful of 2D primitives issued to a `Surface`.

pub mod scene;
pub mod surface;

pub use scene::draw_frame;
pub use surface::{Color, DrawCommand, FrameRecorder, Surface, colors};
