//! Match options chosen on the menu
//!
//! Captured once when a match starts and never changed while it runs.

use serde::{Deserialize, Serialize};

use crate::consts::DEFAULT_WINNING_SCORE;

/// Who controls the right paddle
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub enum Mode {
    /// Right paddle is driven by the AI
    SinglePlayer,
    /// Right paddle is driven by the arrow keys
    #[default]
    TwoPlayer,
}

impl Mode {
    pub fn as_str(&self) -> &'static str {
        match self {
            Mode::SinglePlayer => "single",
            Mode::TwoPlayer => "multi",
        }
    }

    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "single" | "1p" => Some(Mode::SinglePlayer),
            "multi" | "two" | "2p" => Some(Mode::TwoPlayer),
            _ => None,
        }
    }

    /// Whether the right paddle follows the puck on its own
    pub fn right_is_ai(&self) -> bool {
        matches!(self, Mode::SinglePlayer)
    }
}

/// Options for one match
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct MatchConfig {
    pub mode: Mode,
    /// First player to reach this many points wins (always >= 1)
    pub winning_score: u32,
}

impl Default for MatchConfig {
    fn default() -> Self {
        Self {
            mode: Mode::default(),
            winning_score: DEFAULT_WINNING_SCORE,
        }
    }
}

impl MatchConfig {
    pub fn new(mode: Mode, winning_score: u32) -> Self {
        Self {
            mode,
            winning_score: winning_score.max(1),
        }
    }

    /// Build from the menu's winning-score field
    ///
    /// Anything that is not a positive integer falls back to the default.
    pub fn from_form(mode: Mode, winning_score_field: &str) -> Self {
        let winning_score = match winning_score_field.trim().parse::<u32>() {
            Ok(score) if score > 0 => score,
            _ => {
                log::warn!(
                    "Invalid winning score {:?}, using {}",
                    winning_score_field,
                    DEFAULT_WINNING_SCORE
                );
                DEFAULT_WINNING_SCORE
            }
        };
        Self {
            mode,
            winning_score,
        }
    }
}
