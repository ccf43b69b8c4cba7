//! Match phase transitions
//!
//! Idle -> Countdown -> Active -> (Countdown | GameOver) -> Idle.
//! Every legal move is listed in `Phase::next`; anything else is rejected.

use serde::{Deserialize, Serialize};

use super::state::{Phase, Side};

/// Something that may move the match to another phase
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum PhaseEvent {
    /// Menu button pressed with a mode and winning score
    StartMatch,
    /// The countdown timer fired once
    CountdownFired,
    /// A point was scored but nobody has won yet
    PointScored,
    /// A point was scored and `Side` reached the winning score
    MatchWon(Side),
    /// Restart key pressed on the game-over screen
    Restart,
}

impl Phase {
    /// Phase reached by applying `event`, or `None` if not allowed here
    pub fn next(self, event: PhaseEvent, countdown_from: u32) -> Option<Phase> {
        let countdown = Phase::Countdown {
            remaining: countdown_from,
        };
        match (self, event) {
            (Phase::Idle, PhaseEvent::StartMatch) => Some(countdown),

            (Phase::Countdown { remaining }, PhaseEvent::CountdownFired) => {
                let remaining = remaining.saturating_sub(1);
                if remaining == 0 {
                    Some(Phase::Active)
                } else {
                    Some(Phase::Countdown { remaining })
                }
            }

            (Phase::Active, PhaseEvent::PointScored) => Some(countdown),
            (Phase::Active, PhaseEvent::MatchWon(winner)) => Some(Phase::GameOver { winner }),

            (Phase::GameOver { .. }, PhaseEvent::Restart) => Some(Phase::Idle),

            _ => None,
        }
    }
}
