//! Gameplay tuning
//!
//! Fixed for the lifetime of the process; only the surface size follows the host.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use crate::consts::*;

/// All constants the simulation and scene layout read
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Tuning {
    pub surface_width: f32,
    pub surface_height: f32,
    pub paddle_width: f32,
    pub paddle_height: f32,
    pub paddle_speed: f32,
    pub puck_radius: f32,
    pub initial_puck_speed: f32,
    pub max_puck_speed: f32,
    pub speed_increment: f32,
    pub deflection_factor: f32,
    pub countdown_from: u32,
    pub countdown_interval_ms: f32,
    pub center_circle_radius: f32,
    pub divider_dash: [f32; 2],
}

impl Default for Tuning {
    fn default() -> Self {
        Self {
            surface_width: SURFACE_WIDTH,
            surface_height: SURFACE_HEIGHT,
            paddle_width: PADDLE_WIDTH,
            paddle_height: PADDLE_HEIGHT,
            paddle_speed: PADDLE_SPEED,
            puck_radius: PUCK_RADIUS,
            initial_puck_speed: INITIAL_PUCK_SPEED,
            max_puck_speed: MAX_PUCK_SPEED,
            speed_increment: SPEED_INCREMENT,
            deflection_factor: DEFLECTION_FACTOR,
            countdown_from: COUNTDOWN_FROM,
            countdown_interval_ms: COUNTDOWN_INTERVAL_MS,
            center_circle_radius: CENTER_CIRCLE_RADIUS,
            divider_dash: DIVIDER_DASH,
        }
    }
}

impl Tuning {
    /// Defaults sized to a host surface (e.g. the canvas element)
    pub fn for_surface(width: f32, height: f32) -> Self {
        if width <= 0.0 || height <= 0.0 {
            log::warn!(
                "Ignoring degenerate surface {}x{}, using {}x{}",
                width,
                height,
                SURFACE_WIDTH,
                SURFACE_HEIGHT
            );
            return Self::default();
        }
        Self {
            surface_width: width,
            surface_height: height,
            ..Self::default()
        }
    }

    /// Lowest legal top edge for a player-driven paddle
    pub fn paddle_max_y(&self) -> f32 {
        self.surface_height - self.paddle_height
    }

    /// Paddle top edge that centers it vertically
    pub fn paddle_start_y(&self) -> f32 {
        self.surface_height / 2.0 - self.paddle_height / 2.0
    }

    pub fn center(&self) -> Vec2 {
        Vec2::new(self.surface_width / 2.0, self.surface_height / 2.0)
    }

    /// Serve velocity: down and to the right
    pub fn serve_velocity(&self) -> Vec2 {
        Vec2::splat(self.initial_puck_speed)
    }
}
