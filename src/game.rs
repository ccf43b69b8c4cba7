//! Match controller
//!
//! Owns the `MatchState` and sequences a match: menu, countdown, play,
//! game over. Hosts ask `driver()` which clock to run and call `tick()` on
//! every beat of that clock; the phase decides what a beat means.

use crate::renderer::{Surface, draw_frame};
use crate::settings::MatchConfig;
use crate::sim::{self, MatchState, Phase, PhaseEvent, Side, TickEvents};
use crate::tuning::Tuning;
use crate::ui::{self, Hud, Label, Panel};

/// Key that leaves the game-over screen
pub const RESTART_KEY: &str = "Enter";

/// Which clock currently advances the game
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Driver {
    /// Nothing to advance (menu or game over)
    Idle,
    /// Tick once every `interval_ms`
    Countdown { interval_ms: f32 },
    /// Tick once per displayed frame
    Frame,
}

pub struct Game {
    state: MatchState,
}

impl Game {
    pub fn new(tuning: Tuning) -> Self {
        Self {
            state: MatchState::new(tuning),
        }
    }

    pub fn state(&self) -> &MatchState {
        &self.state
    }

    pub fn state_mut(&mut self) -> &mut MatchState {
        &mut self.state
    }

    pub fn driver(&self) -> Driver {
        match self.state.phase {
            Phase::Countdown { .. } => Driver::Countdown {
                interval_ms: self.state.tuning.countdown_interval_ms,
            },
            Phase::Active => Driver::Frame,
            Phase::Idle | Phase::GameOver { .. } => Driver::Idle,
        }
    }

    /// Put the HUD in its menu layout
    pub fn show_menu<H: Hud + ?Sized>(&self, hud: &mut H) {
        hud.set_visible(Panel::Countdown, false);
        hud.set_visible(Panel::GameOver, false);
        hud.set_visible(Panel::Menu, true);
    }

    /// Start a match from the menu; returns false if one is already running
    pub fn start_match<H: Hud + ?Sized>(&mut self, config: MatchConfig, hud: &mut H) -> bool {
        if !self.state.apply(PhaseEvent::StartMatch) {
            return false;
        }
        self.state.begin_match(config);
        log::info!(
            "Match started: {} mode, first to {}",
            config.mode.as_str(),
            self.state.winning_score
        );

        hud.set_visible(Panel::Menu, false);
        hud.set_visible(Panel::GameOver, false);
        ui::show_scores(&self.state, hud);
        self.show_countdown(hud);
        true
    }

    /// Key pressed; movement keys are tracked, `Enter` requests a restart
    pub fn key_down<H: Hud + ?Sized>(&mut self, key: &str, hud: &mut H) {
        if key == RESTART_KEY {
            self.restart(hud);
        } else {
            self.state.keys.on_key_change(key, true);
        }
    }

    pub fn key_up(&mut self, key: &str) {
        self.state.keys.on_key_change(key, false);
    }

    /// Forget every held key (e.g. the window lost focus and keyups are lost)
    pub fn release_keys(&mut self) {
        self.state.keys.release_all();
    }

    /// Leave the game-over screen for the menu; returns false anywhere else
    pub fn restart<H: Hud + ?Sized>(&mut self, hud: &mut H) -> bool {
        if !self.state.apply(PhaseEvent::Restart) {
            return false;
        }
        log::info!("Back to menu");
        self.show_menu(hud);
        true
    }

    /// Advance one beat of the current driver
    pub fn tick<S, H>(&mut self, surface: &mut S, hud: &mut H) -> TickEvents
    where
        S: Surface + ?Sized,
        H: Hud + ?Sized,
    {
        match self.state.phase {
            Phase::Countdown { .. } => {
                self.countdown_fired(hud);
                draw_frame(&self.state, surface);
                TickEvents::default()
            }
            Phase::Active => {
                let events = sim::tick(&mut self.state);
                if let Some(scorer) = events.scored {
                    self.point_scored(scorer, hud);
                }
                draw_frame(&self.state, surface);
                events
            }
            Phase::Idle | Phase::GameOver { .. } => TickEvents::default(),
        }
    }

    fn show_countdown<H: Hud + ?Sized>(&self, hud: &mut H) {
        if let Phase::Countdown { remaining } = self.state.phase {
            ui::show_countdown(remaining, hud);
            hud.set_visible(Panel::Countdown, true);
        }
    }

    fn countdown_fired<H: Hud + ?Sized>(&mut self, hud: &mut H) {
        self.state.apply(PhaseEvent::CountdownFired);
        match self.state.phase {
            Phase::Countdown { remaining } => ui::show_countdown(remaining, hud),
            Phase::Active => {
                ui::show_countdown(0, hud);
                hud.set_visible(Panel::Countdown, false);
                log::debug!("Serve");
            }
            _ => {}
        }
    }

    fn point_scored<H: Hud + ?Sized>(&mut self, scorer: Side, hud: &mut H) {
        ui::show_scores(&self.state, hud);

        if self.state.has_won(scorer) {
            self.state.apply(PhaseEvent::MatchWon(scorer));
            hud.set_text(Label::GameOver, &ui::win_message(scorer));
            hud.set_visible(Panel::GameOver, true);
            log::info!(
                "Player {} wins {}-{}",
                scorer.player_number(),
                self.state.left_score,
                self.state.right_score
            );
        } else {
            self.state.apply(PhaseEvent::PointScored);
            self.state.reset_positions();
            self.show_countdown(hud);
        }
    }
}
