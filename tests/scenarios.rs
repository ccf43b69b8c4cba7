use canvas_pong::platform::headless::HeadlessHud;
use canvas_pong::renderer::FrameRecorder;
use canvas_pong::sim::{Phase, Side};
use canvas_pong::ui::{Label, Panel};
use canvas_pong::{Driver, Game, MatchConfig, Mode, Tuning};
use glam::Vec2;

struct Harness {
    game: Game,
    surface: FrameRecorder,
    hud: HeadlessHud,
}

impl Harness {
    fn new() -> Self {
        let game = Game::new(Tuning::default());
        let mut hud = HeadlessHud::new();
        game.show_menu(&mut hud);
        Self {
            game,
            surface: FrameRecorder::new(),
            hud,
        }
    }

    fn start(&mut self, mode: Mode, winning_score: u32) {
        assert!(
            self.game
                .start_match(MatchConfig::new(mode, winning_score), &mut self.hud)
        );
    }

    fn tick(&mut self) -> canvas_pong::sim::TickEvents {
        self.game.tick(&mut self.surface, &mut self.hud)
    }

    /// Run the countdown to the serve
    fn serve(&mut self) {
        while matches!(self.game.driver(), Driver::Countdown { .. }) {
            self.tick();
        }
        assert_eq!(self.game.state().phase, Phase::Active);
    }

    /// Place the puck so the next tick carries it fully past the left line
    fn send_puck_past_left_line(&mut self) {
        let state = self.game.state_mut();
        state.puck.pos = Vec2::new(-10.0, 50.0);
        state.puck.vel = Vec2::new(-7.0, 0.0);
    }
}

#[test]
fn test_point_resets_field_and_restarts_countdown() {
    let mut h = Harness::new();
    h.start(Mode::TwoPlayer, 5);
    h.serve();

    // Move things away from their start positions first
    h.game.state_mut().left.y = 240.0;
    h.game.state_mut().right.y = 300.0;
    h.send_puck_past_left_line();

    let events = h.tick();

    let state = h.game.state();
    assert_eq!(events.scored, Some(Side::Right));
    assert_eq!((state.left_score, state.right_score), (0, 1));
    assert_eq!(state.phase, Phase::Countdown { remaining: 3 });
    assert_eq!(state.puck.pos, Vec2::new(400.0, 200.0));
    assert_eq!(state.puck.vel, Vec2::new(7.0, 7.0));
    assert_eq!(state.left.y, 160.0);
    assert_eq!(state.right.y, 160.0);

    assert_eq!(h.hud.text(Label::RightScore), Some("1"));
    assert_eq!(h.hud.text(Label::LeftScore), Some("0"));
    assert!(h.hud.is_visible(Panel::Countdown));
    assert_eq!(h.hud.text(Label::Countdown), Some("3"));
    assert_eq!(h.game.driver(), Driver::Countdown { interval_ms: 1000.0 });
}

#[test]
fn test_deciding_point_ends_match() {
    let mut h = Harness::new();
    h.start(Mode::TwoPlayer, 5);
    h.serve();
    h.game.state_mut().right_score = 4;
    h.send_puck_past_left_line();

    h.tick();

    assert_eq!(h.game.state().right_score, 5);
    assert_eq!(h.game.state().phase, Phase::GameOver { winner: Side::Right });
    assert!(h.hud.is_visible(Panel::GameOver));
    assert_eq!(
        h.hud.text(Label::GameOver),
        Some("Player 2 Wins! Press Enter to Restart")
    );
    assert_eq!(h.game.driver(), Driver::Idle);
}

#[test]
fn test_game_over_freezes_scores_until_restart() {
    let mut h = Harness::new();
    h.start(Mode::TwoPlayer, 1);
    h.serve();
    h.send_puck_past_left_line();
    h.tick();
    assert_eq!(h.game.state().phase, Phase::GameOver { winner: Side::Right });

    // Even with the puck placed to score again, nothing moves
    h.send_puck_past_left_line();
    let frozen = h.game.state().clone();
    for _ in 0..10 {
        assert_eq!(h.tick(), Default::default());
    }
    assert_eq!(h.game.state(), &frozen);

    // Movement keys don't restart; Enter does
    h.game.key_down("w", &mut h.hud);
    assert!(matches!(h.game.state().phase, Phase::GameOver { .. }));
    h.game.key_down("Enter", &mut h.hud);
    assert_eq!(h.game.state().phase, Phase::Idle);
    assert!(h.hud.is_visible(Panel::Menu));

    // A new match starts from zero
    h.start(Mode::SinglePlayer, 3);
    assert_eq!((h.game.state().left_score, h.game.state().right_score), (0, 0));
    assert_eq!(h.hud.text(Label::RightScore), Some("0"));
}

#[test]
fn test_paddle_hit_adds_speed_increment() {
    let mut h = Harness::new();
    h.start(Mode::TwoPlayer, 5);
    h.serve();
    {
        let state = h.game.state_mut();
        // Lands at (775, 200): right face, dead center of the paddle
        state.puck.pos = Vec2::new(768.0, 200.0);
        state.puck.vel = Vec2::new(7.0, 0.0);
    }

    let events = h.tick();

    let vel = h.game.state().puck.vel;
    assert_eq!(events.paddle_bounce, Some(Side::Right));
    assert!((vel.length() - 7.5).abs() < 1e-4);
    assert!((vel.x + 7.5).abs() < 1e-4);
}

#[test]
fn test_ai_tracks_puck_from_anywhere() {
    let mut h = Harness::new();
    h.start(Mode::SinglePlayer, 5);
    h.serve();
    {
        let state = h.game.state_mut();
        state.puck.pos = Vec2::new(300.0, 50.0);
        state.puck.vel = Vec2::new(-7.0, 0.0);
    }

    // Puck on the far half, above the paddle: AI climbs every tick
    for expected in [150.0, 140.0, 130.0, 120.0, 110.0] {
        h.tick();
        assert_eq!(h.game.state().right.y, expected);
    }

    {
        let state = h.game.state_mut();
        state.puck.pos = Vec2::new(200.0, 350.0);
        state.puck.vel = Vec2::ZERO;
    }
    h.tick();
    assert_eq!(h.game.state().right.y, 120.0);
}

#[test]
fn test_countdown_takes_three_beats() {
    let mut h = Harness::new();
    h.start(Mode::TwoPlayer, 5);
    assert_eq!(h.hud.text(Label::Countdown), Some("3"));

    h.tick();
    assert_eq!(h.game.state().phase, Phase::Countdown { remaining: 2 });
    assert_eq!(h.hud.text(Label::Countdown), Some("2"));

    h.tick();
    assert_eq!(h.hud.text(Label::Countdown), Some("1"));
    assert_eq!(h.game.state().phase, Phase::Countdown { remaining: 1 });

    h.tick();
    assert_eq!(h.game.state().phase, Phase::Active);
    assert_eq!(h.hud.text(Label::Countdown), Some("0"));
    assert!(!h.hud.is_visible(Panel::Countdown));
    assert_eq!(h.game.driver(), Driver::Frame);

    // Puck did not move during the countdown
    assert_eq!(h.game.state().puck.pos, Vec2::new(400.0, 200.0));
}

#[test]
fn test_scores_written_only_on_change() {
    let mut h = Harness::new();
    h.start(Mode::TwoPlayer, 5);
    h.serve();
    for _ in 0..10 {
        assert_eq!(h.tick().scored, None);
    }
    assert_eq!(h.hud.writes(Label::LeftScore), 1);
    assert_eq!(h.hud.writes(Label::RightScore), 1);

    h.send_puck_past_left_line();
    h.tick();
    assert_eq!(h.hud.writes(Label::LeftScore), 2);
    assert_eq!(h.hud.writes(Label::RightScore), 2);
}

#[test]
fn test_every_active_tick_draws_a_frame() {
    let mut h = Harness::new();
    h.start(Mode::TwoPlayer, 5);
    h.serve();
    let before = h.surface.frames();
    for _ in 0..5 {
        h.tick();
    }
    assert_eq!(h.surface.frames(), before + 5);
    assert_eq!(h.surface.commands().len(), 5);
}
