//! Fixed-step simulation tick
//!
//! One call advances the world by one frame. Motion is counted in frames, not
//! seconds: a late frame is still exactly one step.

use glam::Vec2;

use super::collision::{goal_scorer, puck_hits_wall, puck_paddle_contact};
use super::input::Key;
use super::state::{MatchState, Side};
use crate::tuning::Tuning;

/// What happened during a tick
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TickEvents {
    pub wall_bounce: bool,
    /// Last paddle the puck bounced off this tick
    pub paddle_bounce: Option<Side>,
    /// Side awarded a point this tick
    pub scored: Option<Side>,
}

/// Advance the match by one frame
///
/// Does nothing unless the match is `Active`. A point is added to the score
/// here; deciding what happens next is left to the caller.
pub fn tick(state: &mut MatchState) -> TickEvents {
    let mut events = TickEvents::default();
    if !state.phase.is_active() {
        return events;
    }
    let tuning = state.tuning;

    // Paddles
    state.left.steer(
        state.keys.is_held(Key::LeftUp),
        state.keys.is_held(Key::LeftDown),
        &tuning,
    );
    if state.mode.right_is_ai() {
        state.right.track(state.puck.pos.y, &tuning);
    } else {
        state.right.steer(
            state.keys.is_held(Key::RightUp),
            state.keys.is_held(Key::RightDown),
            &tuning,
        );
    }

    // Puck
    state.puck.pos += state.puck.vel;

    if puck_hits_wall(&state.puck, &tuning) {
        state.puck.vel.y = -state.puck.vel.y;
        events.wall_bounce = true;
    }

    for side in [Side::Left, Side::Right] {
        if let Some(contact) = puck_paddle_contact(&state.puck, state.paddle(side), side, &tuning) {
            let vel = Vec2::new(-state.puck.vel.x, contact.offset * tuning.deflection_factor);
            state.puck.vel = apply_speed_increment(vel, &tuning);
            events.paddle_bounce = Some(side);
            log::trace!(
                "Puck off {:?} paddle (offset {:.1}), speed {:.2}",
                side,
                contact.offset,
                state.puck.speed()
            );
        }
    }

    if let Some(scorer) = goal_scorer(&state.puck, &tuning) {
        let total = state.award_point(scorer);
        events.scored = Some(scorer);
        log::info!("Player {} scores ({})", scorer.player_number(), total);
    }

    events
}

/// Speed the puck up after a paddle hit
///
/// Adds `speed_increment` to the magnitude while keeping direction. Skipped
/// once the puck is at `max_puck_speed`, so one hit can land at most one
/// increment above the cap. A stationary puck has no direction and is left
/// alone.
pub fn apply_speed_increment(vel: Vec2, tuning: &Tuning) -> Vec2 {
    let speed = vel.length();
    if speed > 0.0 && speed < tuning.max_puck_speed {
        vel * (1.0 + tuning.speed_increment / speed)
    } else {
        vel
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::settings::{MatchConfig, Mode};
    use crate::sim::state::Phase;

    fn active_state(mode: Mode) -> MatchState {
        let mut state = MatchState::new(Tuning::default());
        state.begin_match(MatchConfig::new(mode, 5));
        state.phase = Phase::Active;
        state
    }

    #[test]
    fn test_tick_does_nothing_outside_active() {
        let mut state = MatchState::new(Tuning::default());
        state.keys.set(Key::LeftUp, true);
        for phase in [
            Phase::Idle,
            Phase::Countdown { remaining: 2 },
            Phase::GameOver { winner: Side::Left },
        ] {
            state.phase = phase;
            let before = state.clone();
            assert_eq!(tick(&mut state), TickEvents::default());
            assert_eq!(state, before);
        }
    }

    #[test]
    fn test_puck_moves_by_velocity() {
        let mut state = active_state(Mode::TwoPlayer);
        tick(&mut state);
        assert_eq!(state.puck.pos, Vec2::new(407.0, 207.0));
    }

    #[test]
    fn test_held_keys_move_paddles_every_tick() {
        let mut state = active_state(Mode::TwoPlayer);
        state.keys.set(Key::LeftUp, true);
        state.keys.set(Key::RightDown, true);
        tick(&mut state);
        tick(&mut state);
        assert_eq!(state.left.y, 140.0);
        assert_eq!(state.right.y, 180.0);
    }

    #[test]
    fn test_both_keys_cancel_out() {
        let mut state = active_state(Mode::TwoPlayer);
        state.keys.set(Key::LeftUp, true);
        state.keys.set(Key::LeftDown, true);
        tick(&mut state);
        assert_eq!(state.left.y, 160.0);
    }

    #[test]
    fn test_ai_ignores_arrow_keys() {
        let mut state = active_state(Mode::SinglePlayer);
        state.keys.set(Key::RightUp, true);
        state.puck.pos = Vec2::new(400.0, 300.0);
        tick(&mut state);
        // Puck below center, AI moves down despite ArrowUp
        assert_eq!(state.right.y, 170.0);
    }

    #[test]
    fn test_wall_bounce_flips_vertical() {
        let mut state = active_state(Mode::TwoPlayer);
        state.puck.pos = Vec2::new(400.0, 380.0);
        state.puck.vel = Vec2::new(7.0, 7.0);
        let events = tick(&mut state);
        assert!(events.wall_bounce);
        assert_eq!(state.puck.vel, Vec2::new(7.0, -7.0));
        // No position correction
        assert_eq!(state.puck.pos, Vec2::new(407.0, 387.0));
    }

    #[test]
    fn test_center_hit_speeds_up_and_reverses() {
        let mut state = active_state(Mode::TwoPlayer);
        state.puck.pos = Vec2::new(30.0, 200.0);
        state.puck.vel = Vec2::new(-7.0, 0.0);

        let events = tick(&mut state);

        assert_eq!(events.paddle_bounce, Some(Side::Left));
        assert!((state.puck.vel.x - 7.5).abs() < 1e-4);
        assert_eq!(state.puck.vel.y, 0.0);
        assert!((state.puck.speed() - 7.5).abs() < 1e-4);
    }

    #[test]
    fn test_offset_hit_sets_deflection() {
        let mut state = active_state(Mode::TwoPlayer);
        // After moving: (775, 220), right paddle center at 200
        state.puck.pos = Vec2::new(768.0, 220.0);
        state.puck.vel = Vec2::new(7.0, 0.0);

        let events = tick(&mut state);

        assert_eq!(events.paddle_bounce, Some(Side::Right));
        let pre = Vec2::new(-7.0, 6.0);
        let expected = pre * (1.0 + 0.5 / pre.length());
        assert!((state.puck.vel - expected).length() < 1e-4);
        assert!(state.puck.vel.x < 0.0);
    }

    #[test]
    fn test_score_needs_full_crossing() {
        let mut state = active_state(Mode::TwoPlayer);
        state.puck.pos = Vec2::new(-5.0, 50.0);
        state.puck.vel = Vec2::new(-7.0, 0.0);

        // x = -12: straddling the line, no point yet
        assert_eq!(tick(&mut state).scored, None);
        // x = -19: fully out
        assert_eq!(tick(&mut state).scored, Some(Side::Right));
        assert_eq!((state.left_score, state.right_score), (0, 1));
    }

    #[test]
    fn test_speed_increment_rescales_proportionally() {
        let tuning = Tuning::default();
        let vel = apply_speed_increment(Vec2::new(4.2, 5.6), &tuning);
        assert!((vel.x - 4.5).abs() < 1e-4);
        assert!((vel.y - 6.0).abs() < 1e-4);
    }

    #[test]
    fn test_speed_increment_stops_at_cap() {
        let tuning = Tuning::default();
        let fast = Vec2::new(15.0, 0.0);
        assert_eq!(apply_speed_increment(fast, &tuning), fast);

        // Just under the cap may overshoot by one increment
        let vel = apply_speed_increment(Vec2::new(14.9, 0.0), &tuning);
        assert!((vel.x - 15.4).abs() < 1e-4);
    }

    #[test]
    fn test_speed_increment_zero_velocity() {
        let tuning = Tuning::default();
        assert_eq!(apply_speed_increment(Vec2::ZERO, &tuning), Vec2::ZERO);
    }
}
