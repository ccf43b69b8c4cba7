//! HUD overlays
//!
//! Menu, countdown and game-over panels plus the two score labels. Hosts
//! implement `Hud` on top of whatever widgets they have (DOM elements in the
//! browser).

use serde::{Deserialize, Serialize};

use crate::sim::{MatchState, Side};

/// Overlay panels that can be shown or hidden
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Panel {
    Menu,
    Countdown,
    GameOver,
}

/// Text slots on the HUD
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Label {
    Countdown,
    GameOver,
    LeftScore,
    RightScore,
}

pub trait Hud {
    fn set_visible(&mut self, panel: Panel, visible: bool);
    fn set_text(&mut self, label: Label, text: &str);
}

/// Write both scores to their labels
pub fn show_scores<H: Hud + ?Sized>(state: &MatchState, hud: &mut H) {
    hud.set_text(Label::LeftScore, &state.left_score.to_string());
    hud.set_text(Label::RightScore, &state.right_score.to_string());
}

pub fn show_countdown<H: Hud + ?Sized>(remaining: u32, hud: &mut H) {
    hud.set_text(Label::Countdown, &remaining.to_string());
}

/// Game-over banner for `winner`
pub fn win_message(winner: Side) -> String {
    format!("Player {} Wins! Press Enter to Restart", winner.player_number())
}
