//! Canvas Pong entry point
//!
//! Handles platform-specific initialization and runs the game loop.

#[cfg(target_arch = "wasm32")]
use wasm_bindgen::prelude::*;

#[cfg(target_arch = "wasm32")]
mod wasm_game {
    use std::cell::RefCell;
    use std::rc::Rc;
    use wasm_bindgen::prelude::*;
    use web_sys::{Document, HtmlCanvasElement, HtmlInputElement, KeyboardEvent, MouseEvent};

    use canvas_pong::platform::web::{CanvasSurface, DomHud};
    use canvas_pong::{Driver, Game, MatchConfig, Mode, Tuning};

    /// Everything the page callbacks share
    struct App {
        game: Game,
        surface: CanvasSurface,
        hud: DomHud,
        /// Time of the last countdown beat (or of entering the countdown)
        countdown_anchor: Option<f64>,
    }

    impl App {
        /// Called once per animation frame; feeds whichever driver is live
        fn advance(&mut self, time: f64) {
            match self.game.driver() {
                Driver::Frame => {
                    self.countdown_anchor = None;
                    self.game.tick(&mut self.surface, &mut self.hud);
                }
                Driver::Countdown { interval_ms } => {
                    let anchor = *self.countdown_anchor.get_or_insert(time);
                    if time - anchor >= interval_ms as f64 {
                        self.countdown_anchor = Some(time);
                        self.game.tick(&mut self.surface, &mut self.hud);
                    }
                }
                Driver::Idle => self.countdown_anchor = None,
            }
        }
    }

    pub fn run() -> Result<(), JsValue> {
        console_error_panic_hook::set_once();
        console_log::init_with_level(log::Level::Info)
            .map_err(|e| JsValue::from_str(&e.to_string()))?;

        log::info!("Canvas Pong starting...");

        let window = web_sys::window().ok_or("no window")?;
        let document = window.document().ok_or("no document")?;

        let canvas: HtmlCanvasElement = document
            .get_element_by_id("gameCanvas")
            .ok_or("no canvas")?
            .dyn_into()?;

        let tuning = Tuning::for_surface(canvas.width() as f32, canvas.height() as f32);
        let surface = CanvasSurface::new(&canvas)?;
        let mut hud = DomHud::from_document(&document)?;

        let game = Game::new(tuning);
        game.show_menu(&mut hud);

        let app = Rc::new(RefCell::new(App {
            game,
            surface,
            hud,
            countdown_anchor: None,
        }));

        setup_menu_buttons(&document, app.clone())?;
        setup_keyboard(&document, app.clone())?;
        setup_focus_loss(&window, app.clone())?;

        request_animation_frame(app);

        log::info!(
            "Canvas Pong running on a {}x{} field",
            tuning.surface_width,
            tuning.surface_height
        );
        Ok(())
    }

    /// Read the menu's winning-score field (empty if it is missing)
    fn winning_score_field() -> String {
        web_sys::window()
            .and_then(|w| w.document())
            .and_then(|d| d.get_element_by_id("winningScore"))
            .and_then(|el| el.dyn_into::<HtmlInputElement>().ok())
            .map(|input| input.value())
            .unwrap_or_default()
    }

    fn setup_menu_buttons(document: &Document, app: Rc<RefCell<App>>) -> Result<(), JsValue> {
        for (id, mode) in [
            ("singlePlayerButton", Mode::SinglePlayer),
            ("twoPlayerButton", Mode::TwoPlayer),
        ] {
            let button = document
                .get_element_by_id(id)
                .ok_or_else(|| JsValue::from_str(&format!("missing #{}", id)))?;
            let app = app.clone();
            let closure = Closure::<dyn FnMut(_)>::new(move |_event: MouseEvent| {
                let config = MatchConfig::from_form(mode, &winning_score_field());
                let mut guard = app.borrow_mut();
                let App { game, hud, .. } = &mut *guard;
                game.start_match(config, hud);
            });
            button.add_event_listener_with_callback("click", closure.as_ref().unchecked_ref())?;
            closure.forget();
        }
        Ok(())
    }

    fn setup_keyboard(document: &Document, app: Rc<RefCell<App>>) -> Result<(), JsValue> {
        {
            let app = app.clone();
            let closure = Closure::<dyn FnMut(_)>::new(move |event: KeyboardEvent| {
                let mut guard = app.borrow_mut();
                let App { game, hud, .. } = &mut *guard;
                game.key_down(&event.key(), hud);
            });
            document.add_event_listener_with_callback("keydown", closure.as_ref().unchecked_ref())?;
            closure.forget();
        }

        {
            let closure = Closure::<dyn FnMut(_)>::new(move |event: KeyboardEvent| {
                app.borrow_mut().game.key_up(&event.key());
            });
            document.add_event_listener_with_callback("keyup", closure.as_ref().unchecked_ref())?;
            closure.forget();
        }
        Ok(())
    }

    /// Keyups never arrive once the window loses focus
    fn setup_focus_loss(window: &web_sys::Window, app: Rc<RefCell<App>>) -> Result<(), JsValue> {
        let closure = Closure::<dyn FnMut(_)>::new(move |_event: web_sys::FocusEvent| {
            app.borrow_mut().game.release_keys();
            log::info!("Window blurred, released held keys");
        });
        window.add_event_listener_with_callback("blur", closure.as_ref().unchecked_ref())?;
        closure.forget();
        Ok(())
    }

    fn request_animation_frame(app: Rc<RefCell<App>>) {
        let Some(window) = web_sys::window() else {
            log::error!("No window for requestAnimationFrame");
            return;
        };
        let closure = Closure::once(move |time: f64| {
            game_loop(app, time);
        });
        if let Err(e) = window.request_animation_frame(closure.as_ref().unchecked_ref()) {
            log::error!("requestAnimationFrame failed: {:?}", e);
        }
        closure.forget();
    }

    fn game_loop(app: Rc<RefCell<App>>, time: f64) {
        app.borrow_mut().advance(time);
        request_animation_frame(app);
    }
}

#[cfg(target_arch = "wasm32")]
#[wasm_bindgen(start)]
pub fn wasm_main() -> Result<(), JsValue> {
    wasm_game::run()
}

#[cfg(not(target_arch = "wasm32"))]
fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();
    log::info!("Canvas Pong (native) starting...");
    log::info!("Native mode has no window - playing a headless match against the AI");

    run_headless_match();
}

#[cfg(target_arch = "wasm32")]
fn main() {}

/// Play one single-player match with nobody on the left keys
#[cfg(not(target_arch = "wasm32"))]
fn run_headless_match() {
    use canvas_pong::platform::headless::HeadlessHud;
    use canvas_pong::renderer::FrameRecorder;
    use canvas_pong::ui::Label;
    use canvas_pong::{Driver, Game, MatchConfig, Mode, Tuning, consts};

    /// Guards against an endless rally
    const MAX_TICKS: u32 = 200_000;

    let mut game = Game::new(Tuning::default());
    let mut surface = FrameRecorder::new();
    let mut hud = HeadlessHud::new();

    game.show_menu(&mut hud);
    game.start_match(
        MatchConfig::new(Mode::SinglePlayer, consts::DEFAULT_WINNING_SCORE),
        &mut hud,
    );

    let mut ticks = 0;
    while game.driver() != Driver::Idle {
        if ticks >= MAX_TICKS {
            log::warn!("Stopping after {} ticks without a winner", ticks);
            break;
        }
        // Countdown beats run back to back; there is no wall clock here
        game.tick(&mut surface, &mut hud);
        ticks += 1;
    }

    log::info!(
        "Finished after {} ticks ({} frames drawn): {}",
        ticks,
        surface.frames(),
        hud.text(Label::GameOver).unwrap_or("no winner")
    );
    match serde_json::to_string_pretty(game.state()) {
        Ok(json) => log::info!("Final state:\n{}", json),
        Err(e) => log::warn!("Could not serialize final state: {}", e),
    }
}
