//! Canvas Pong - classic two-paddle arcade game
//!
//! Core modules:
//! - `sim`: Deterministic simulation (paddles, puck, scoring, phases)
//! - `game`: Match controller driving countdowns and frames
//! - `renderer`: Drawing-surface abstraction and scene layout
//! - `ui`: HUD overlays (menu, countdown, game over, scores)
//! - `platform`: Browser and headless hosts
//! - `settings` / `tuning`: Match options and fixed gameplay constants

pub mod game;
pub mod platform;
pub mod renderer;
pub mod settings;
pub mod sim;
pub mod tuning;
pub mod ui;

pub use game::{Driver, Game};
pub use settings::{MatchConfig, Mode};
pub use tuning::Tuning;

/// Game configuration constants
pub mod consts {
    /// Default drawing surface (the browser host uses the canvas size instead)
    pub const SURFACE_WIDTH: f32 = 800.0;
    pub const SURFACE_HEIGHT: f32 = 400.0;

    /// Paddle defaults
    pub const PADDLE_WIDTH: f32 = 10.0;
    pub const PADDLE_HEIGHT: f32 = 80.0;
    /// Pixels per tick
    pub const PADDLE_SPEED: f32 = 10.0;

    /// Puck defaults
    pub const PUCK_RADIUS: f32 = 15.0;
    /// Serve speed on each axis (pixels per tick)
    pub const INITIAL_PUCK_SPEED: f32 = 7.0;
    /// No further speed-up once the puck is this fast
    pub const MAX_PUCK_SPEED: f32 = 15.0;
    /// Added to the puck's speed on every paddle hit
    pub const SPEED_INCREMENT: f32 = 0.5;
    /// Vertical velocity per pixel of offset from the paddle center
    pub const DEFLECTION_FACTOR: f32 = 0.3;

    /// Countdown before every serve
    pub const COUNTDOWN_FROM: u32 = 3;
    pub const COUNTDOWN_INTERVAL_MS: f32 = 1000.0;

    /// Field markings
    pub const CENTER_CIRCLE_RADIUS: f32 = 50.0;
    pub const DIVIDER_DASH: [f32; 2] = [5.0, 15.0];

    /// First to this many points wins unless the menu says otherwise
    pub const DEFAULT_WINNING_SCORE: u32 = 5;
}
