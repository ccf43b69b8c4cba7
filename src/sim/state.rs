//! Match state and core simulation types
//!
//! Everything a match needs lives in one `MatchState`, mutated in place by the
//! tick and by input events.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use super::input::HeldKeys;
use super::phase::PhaseEvent;
use crate::settings::{MatchConfig, Mode};
use crate::tuning::Tuning;

/// Which end of the field
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Side {
    Left,
    Right,
}

impl Side {
    /// 1 for the left player, 2 for the right
    pub fn player_number(self) -> u8 {
        match self {
            Side::Left => 1,
            Side::Right => 2,
        }
    }
}

/// Current stage of the match lifecycle
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Phase {
    /// Menu showing, nothing simulated
    Idle,
    /// Counting down to the serve, simulation frozen
    Countdown { remaining: u32 },
    /// Puck in play
    Active,
    /// Someone reached the winning score
    GameOver { winner: Side },
}

impl Phase {
    pub fn is_active(&self) -> bool {
        matches!(self, Phase::Active)
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Phase::Idle => "Idle",
            Phase::Countdown { .. } => "Countdown",
            Phase::Active => "Active",
            Phase::GameOver { .. } => "GameOver",
        }
    }
}

/// A vertical paddle; `y` is its top edge
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Paddle {
    pub y: f32,
}

impl Paddle {
    pub fn new(y: f32) -> Self {
        Self { y }
    }

    pub fn center_y(&self, tuning: &Tuning) -> f32 {
        self.y + tuning.paddle_height / 2.0
    }

    /// Whether `y` lies strictly inside the paddle's vertical span
    pub fn spans(&self, y: f32, tuning: &Tuning) -> bool {
        y > self.y && y < self.y + tuning.paddle_height
    }

    /// One tick of keyboard movement
    ///
    /// Bounds are checked before moving, so the paddle only moves while it is
    /// still inside the field.
    pub fn steer(&mut self, up: bool, down: bool, tuning: &Tuning) {
        if up && self.y > 0.0 {
            self.y -= tuning.paddle_speed;
        }
        if down && self.y < tuning.paddle_max_y() {
            self.y += tuning.paddle_speed;
        }
    }

    /// One tick of AI movement toward `target_y` (never clamped)
    pub fn track(&mut self, target_y: f32, tuning: &Tuning) {
        if target_y < self.center_y(tuning) {
            self.y -= tuning.paddle_speed;
        } else {
            self.y += tuning.paddle_speed;
        }
    }
}

/// The puck
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Puck {
    pub pos: Vec2,
    pub vel: Vec2,
}

impl Puck {
    pub fn new(pos: Vec2, vel: Vec2) -> Self {
        Self { pos, vel }
    }

    pub fn speed(&self) -> f32 {
        self.vel.length()
    }
}

/// Complete match state
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MatchState {
    pub mode: Mode,
    pub phase: Phase,
    pub left: Paddle,
    pub right: Paddle,
    pub puck: Puck,
    pub left_score: u32,
    pub right_score: u32,
    pub winning_score: u32,
    pub keys: HeldKeys,
    pub tuning: Tuning,
}

impl MatchState {
    /// Fresh state sitting on the menu
    pub fn new(tuning: Tuning) -> Self {
        let config = MatchConfig::default();
        let start_y = tuning.paddle_start_y();
        Self {
            mode: config.mode,
            phase: Phase::Idle,
            left: Paddle::new(start_y),
            right: Paddle::new(start_y),
            puck: Puck::new(tuning.center(), tuning.serve_velocity()),
            left_score: 0,
            right_score: 0,
            winning_score: config.winning_score,
            keys: HeldKeys::new(),
            tuning,
        }
    }

    /// Capture match options, zero the scores and put everything at the start
    pub fn begin_match(&mut self, config: MatchConfig) {
        self.mode = config.mode;
        self.winning_score = config.winning_score.max(1);
        self.left_score = 0;
        self.right_score = 0;
        self.reset_positions();
    }

    /// Paddles centered, puck served from the middle at the initial speed
    pub fn reset_positions(&mut self) {
        let start_y = self.tuning.paddle_start_y();
        self.left = Paddle::new(start_y);
        self.right = Paddle::new(start_y);
        self.puck = Puck::new(self.tuning.center(), self.tuning.serve_velocity());
    }

    pub fn paddle(&self, side: Side) -> &Paddle {
        match side {
            Side::Left => &self.left,
            Side::Right => &self.right,
        }
    }

    pub fn score(&self, side: Side) -> u32 {
        match side {
            Side::Left => self.left_score,
            Side::Right => self.right_score,
        }
    }

    /// Add a point for `side`, returning its new total
    pub fn award_point(&mut self, side: Side) -> u32 {
        let score = match side {
            Side::Left => &mut self.left_score,
            Side::Right => &mut self.right_score,
        };
        *score += 1;
        *score
    }

    /// Whether `side` has reached the winning score
    pub fn has_won(&self, side: Side) -> bool {
        self.score(side) >= self.winning_score
    }

    /// Apply a phase event; returns false (and leaves the phase alone) if the
    /// current phase does not accept it
    pub fn apply(&mut self, event: PhaseEvent) -> bool {
        match self.phase.next(event, self.tuning.countdown_from) {
            Some(next) => {
                log::debug!("Phase {:?} -> {:?} on {:?}", self.phase, next, event);
                self.phase = next;
                true
            }
            None => {
                log::debug!("Ignoring {:?} in phase {}", event, self.phase.as_str());
                false
            }
        }
    }
}
