//! Hurdler entry point
//!
//! Handles platform-specific initialization and runs the frame loop.

#[cfg(target_arch = "wasm32")]
use wasm_bindgen::prelude::*;

#[cfg(target_arch = "wasm32")]
mod wasm_game {
    use std::cell::RefCell;
    use std::rc::Rc;
    use wasm_bindgen::prelude::*;
    use web_sys::HtmlCanvasElement;

    use hurdler::consts::*;
    use hurdler::highscore;
    use hurdler::renderer::Renderer;
    use hurdler::sim::{RunPhase, RunState, TickInput, TickResult, Viewport, tick};
    use hurdler::{Action, Bindings, InputState};

    /// Game instance holding all state
    struct Game {
        state: RunState,
        renderer: Renderer,
        input: InputState,
        bindings: Bindings,
        /// Whether the frame loop is currently scheduled
        running: bool,
    }

    impl Game {
        /// Run one simulation tick from the held inputs and redraw
        fn frame(&mut self) -> TickResult {
            let input = TickInput {
                jump: self.input.is_held(Action::Jump),
                duck: self.input.is_held(Action::Duck),
            };
            let result = tick(&mut self.state, &input);
            self.renderer.draw(&self.state);
            result
        }

        /// Log the terminal state of a finished run
        fn report_death(&self) {
            let stats = &self.state.stats;
            log::info!(
                "Final score {:.1} (best {:.1}) after {} ticks",
                stats.score,
                stats.high_score,
                self.state.time_ticks
            );
            if let Ok(json) = serde_json::to_string(&self.state) {
                log::debug!("Terminal state: {}", json);
            }
        }
    }

    pub fn run() {
        console_error_panic_hook::set_once();
        console_log::init_with_level(log::Level::Info).expect("Failed to init logger");

        log::info!("Hurdler starting...");

        let window = web_sys::window().expect("no window");
        let document = window.document().expect("no document");

        let canvas: HtmlCanvasElement = document
            .get_element_by_id("canvas")
            .expect("no canvas")
            .dyn_into()
            .expect("not a canvas");

        // Fill the window, minus a margin so no scrollbars appear
        let width = window
            .inner_width()
            .ok()
            .and_then(|v| v.as_f64())
            .unwrap_or(800.0) as f32
            - CANVAS_MARGIN;
        let height = window
            .inner_height()
            .ok()
            .and_then(|v| v.as_f64())
            .unwrap_or(600.0) as f32
            - CANVAS_MARGIN;
        canvas.set_width(width as u32);
        canvas.set_height(height as u32);

        let ctx: web_sys::CanvasRenderingContext2d = canvas
            .get_context("2d")
            .expect("2d context unavailable")
            .expect("no 2d context")
            .dyn_into()
            .expect("not a 2d context");

        let seed = js_sys::Date::now() as u64;
        let mut state = RunState::new(seed, Viewport::new(width, height));
        state.stats.high_score = highscore::load();

        log::info!("Game initialized with seed: {}", seed);

        let game = Rc::new(RefCell::new(Game {
            state,
            renderer: Renderer::new(ctx, width, height),
            input: InputState::new(),
            bindings: Bindings::load(),
            running: true,
        }));

        setup_input_handlers(game.clone());

        request_animation_frame(game);

        log::info!("Hurdler running!");
    }

    fn setup_input_handlers(game: Rc<RefCell<Game>>) {
        let window = web_sys::window().expect("no window");

        // Keydown: latch the action on; Confirm restarts from the death screen
        {
            let game = game.clone();
            let closure = Closure::<dyn FnMut(_)>::new(move |event: web_sys::KeyboardEvent| {
                let mut g = game.borrow_mut();
                if let Some(action) = g.bindings.action_for_key(&event.key()) {
                    event.prevent_default();
                    g.input.set_held(action, true);

                    if action == Action::Confirm && g.state.phase == RunPhase::Dead && !g.running {
                        g.state.restart();
                        g.running = true;
                        log::info!("Restarting run");
                        drop(g); // Release borrow before scheduling the next frame
                        request_animation_frame(game.clone());
                    }
                }
            });
            let _ = window
                .add_event_listener_with_callback("keydown", closure.as_ref().unchecked_ref());
            closure.forget();
        }

        // Keyup: release the action
        {
            let closure = Closure::<dyn FnMut(_)>::new(move |event: web_sys::KeyboardEvent| {
                let mut g = game.borrow_mut();
                if let Some(action) = g.bindings.action_for_key(&event.key()) {
                    g.input.set_held(action, false);
                }
            });
            let _ =
                window.add_event_listener_with_callback("keyup", closure.as_ref().unchecked_ref());
            closure.forget();
        }
    }

    fn request_animation_frame(game: Rc<RefCell<Game>>) {
        let window = web_sys::window().expect("no window");
        let closure = Closure::once_into_js(move |_time: f64| {
            game_loop(game);
        });
        let _ = window.request_animation_frame(closure.unchecked_ref());
    }

    fn game_loop(game: Rc<RefCell<Game>>) {
        let result = game.borrow_mut().frame();

        match result {
            TickResult::Continue => request_animation_frame(game),
            TickResult::Halt => {
                // The death frame already drew the overlay; stop scheduling
                // until Confirm restarts the run
                let mut g = game.borrow_mut();
                if g.running {
                    g.running = false;
                    highscore::save(g.state.stats.high_score);
                    g.report_death();
                }
            }
        }
    }
}

#[cfg(target_arch = "wasm32")]
#[wasm_bindgen(start)]
pub fn wasm_main() {
    wasm_game::run();
}

#[cfg(not(target_arch = "wasm32"))]
fn main() {
    env_logger::init();
    log::info!("Hurdler (native) starting...");
    log::info!("Native mode runs headless - use `trunk serve` for the web version");

    println!("\nSimulating an idle run...");
    run_idle_demo();
}

#[cfg(target_arch = "wasm32")]
fn main() {
    // WASM entry point is wasm_main, this is just to satisfy the compiler
}

#[cfg(not(target_arch = "wasm32"))]
fn run_idle_demo() {
    use std::time::{SystemTime, UNIX_EPOCH};

    use hurdler::sim::{RunPhase, RunState, TickInput, TickResult, Viewport, tick};

    let seed = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_millis() as u64)
        .unwrap_or(0);
    let mut state = RunState::new(seed, Viewport::new(800.0, 600.0));

    // With nobody jumping, the first ground-lane obstacle ends the run
    let mut safety = 200_000u32;
    while tick(&mut state, &TickInput::default()) == TickResult::Continue && safety > 0 {
        safety -= 1;
    }
    assert_eq!(
        state.phase,
        RunPhase::Dead,
        "idle run should end in a collision"
    );
    println!(
        "✓ Run with seed {} ended after {} ticks with score {:.1}",
        seed, state.time_ticks, state.stats.score
    );
}
