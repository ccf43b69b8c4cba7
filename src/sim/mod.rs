//! Deterministic simulation module
//!
//! All gameplay logic lives here. This module must stay pure:
//! - Fixed per-frame steps only
//! - No rendering, DOM or timer dependencies

pub mod collision;
pub mod input;
pub mod phase;
pub mod state;
pub mod tick;

pub use collision::{PaddleContact, goal_scorer, puck_hits_wall, puck_paddle_contact};
pub use input::{HeldKeys, Key};
pub use phase::PhaseEvent;
pub use state::{MatchState, Paddle, Phase, Puck, Side};
pub use tick::{TickEvents, apply_speed_increment, tick};
