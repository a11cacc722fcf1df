//! Skyflap entry point
//!
//! Wires the deterministic sim to the browser: canvas sizing, input events,
//! the score/start DOM elements and the requestAnimationFrame loop. The
//! native build runs a short headless demo instead.

#[cfg(target_arch = "wasm32")]
use wasm_bindgen::prelude::*;

#[cfg(target_arch = "wasm32")]
mod wasm_game {
    use std::cell::RefCell;
    use std::rc::Rc;

    use wasm_bindgen::prelude::*;
    use web_sys::{
        CanvasRenderingContext2d, Document, HtmlCanvasElement, HtmlElement, KeyboardEvent,
        MouseEvent, TouchEvent, Window,
    };

    use skyflap::assets::Sprite;
    use skyflap::render::{SpriteSet, draw_frame};
    use skyflap::sim::{GameState, Viewport, tick};
    use skyflap::tuning::Tuning;

    /// Game instance holding all state the frame callback touches
    struct Game {
        state: GameState,
        ctx: CanvasRenderingContext2d,
        sprites: SpriteSet,
        /// Last score written to the scoreboard element
        last_score: Option<u32>,
        /// For logging the game-over transition once
        was_game_over: bool,
    }

    impl Game {
        /// One displayed frame: advance the sim, draw, sync the scoreboard
        fn frame(&mut self) {
            tick(&mut self.state);

            if let Err(e) = draw_frame(&self.ctx, &self.state, &self.sprites) {
                log::warn!("render error: {e:?}");
            }

            self.update_scoreboard();

            if self.state.game_over && !self.was_game_over {
                log::info!("game over at score {}", self.state.score);
            }
            self.was_game_over = self.state.game_over;
        }

        /// Write the score string only when it changed
        fn update_scoreboard(&mut self) {
            if self.last_score == Some(self.state.score) {
                return;
            }
            let document = web_sys::window().unwrap().document().unwrap();
            if let Some(el) = document.get_element_by_id("score-board") {
                el.set_text_content(Some(&format!("Score {}", self.state.score)));
            }
            self.last_score = Some(self.state.score);
        }

        /// Flap / restart input from any of the three activation sources
        fn activate(&mut self) {
            let was_over = self.state.game_over;
            self.state.handle_activation();
            if was_over && !self.state.game_over {
                log::info!("round restarted");
                self.was_game_over = false;
            }
        }
    }

    pub fn run() {
        console_error_panic_hook::set_once();
        console_log::init_with_level(log::Level::Info).expect("Failed to init logger");

        log::info!("Skyflap starting...");

        let window = web_sys::window().expect("no window");
        let document = window.document().expect("no document");

        let canvas: HtmlCanvasElement = document
            .get_element_by_id("canvas")
            .expect("no canvas")
            .dyn_into()
            .expect("not a canvas");

        let (w, h) = canvas_size(&window, &document);
        canvas.set_width(w as u32);
        canvas.set_height(h as u32);

        let ctx: CanvasRenderingContext2d = canvas
            .get_context("2d")
            .ok()
            .flatten()
            .expect("no 2d context")
            .dyn_into()
            .expect("not a 2d context");

        let tuning = Tuning::load();
        let seed = js_sys::Date::now() as u64;
        let state = GameState::new(seed, tuning, Viewport::new(w, h));
        log::info!("session initialized with seed {seed} ({w}x{h})");

        // Fire-and-forget; render falls back to flat colors until ready
        let sprites = SpriteSet {
            bird: Sprite::load("bird.png").expect("bird sprite element"),
            pipe: Sprite::load("pipe.png").expect("pipe sprite element"),
        };

        let game = Rc::new(RefCell::new(Game {
            state,
            ctx,
            sprites,
            last_score: None,
            was_game_over: false,
        }));

        setup_input_handlers(&canvas, game.clone());
        setup_start_button(game.clone());
        setup_resize_handler(canvas, game);

        log::info!("Skyflap ready - waiting for start");
    }

    /// Canvas fills the window, minus an optional fixed header
    fn canvas_size(window: &Window, document: &Document) -> (f32, f32) {
        let header_h = document
            .get_element_by_id("main-header")
            .and_then(|el| el.dyn_into::<HtmlElement>().ok())
            .map(|el| el.offset_height())
            .unwrap_or(0);
        let w = window
            .inner_width()
            .ok()
            .and_then(|v| v.as_f64())
            .unwrap_or(800.0);
        let h = window
            .inner_height()
            .ok()
            .and_then(|v| v.as_f64())
            .unwrap_or(480.0)
            - f64::from(header_h);
        (w as f32, h.max(0.0) as f32)
    }

    /// The three equivalent activation triggers, each mapped 1:1 onto
    /// `handle_activation`
    fn setup_input_handlers(canvas: &HtmlCanvasElement, game: Rc<RefCell<Game>>) {
        // Keyboard (space)
        {
            let game = game.clone();
            let document = web_sys::window().unwrap().document().unwrap();
            let closure = Closure::<dyn FnMut(_)>::new(move |event: KeyboardEvent| {
                if event.code() == "Space" {
                    event.prevent_default();
                    game.borrow_mut().activate();
                }
            });
            let _ = document
                .add_event_listener_with_callback("keydown", closure.as_ref().unchecked_ref());
            closure.forget();
        }

        // Mouse click
        {
            let game = game.clone();
            let closure = Closure::<dyn FnMut(_)>::new(move |_event: MouseEvent| {
                game.borrow_mut().activate();
            });
            let _ =
                canvas.add_event_listener_with_callback("click", closure.as_ref().unchecked_ref());
            closure.forget();
        }

        // Touch
        {
            let closure = Closure::<dyn FnMut(_)>::new(move |event: TouchEvent| {
                event.prevent_default();
                game.borrow_mut().activate();
            });
            let _ = canvas
                .add_event_listener_with_callback("touchstart", closure.as_ref().unchecked_ref());
            closure.forget();
        }
    }

    /// Start button: hide the overlay, start the session and kick off the
    /// frame schedule exactly once. The schedule then runs for the session
    /// lifetime; game over only freezes the sim, never the loop.
    fn setup_start_button(game: Rc<RefCell<Game>>) {
        let document = web_sys::window().unwrap().document().unwrap();

        if let Some(btn) = document.get_element_by_id("start-btn") {
            let closure = Closure::<dyn FnMut(_)>::new(move |_event: MouseEvent| {
                let document = web_sys::window().unwrap().document().unwrap();
                if let Some(el) = document
                    .get_element_by_id("start-screen")
                    .and_then(|el| el.dyn_into::<HtmlElement>().ok())
                {
                    let _ = el.style().set_property("display", "none");
                }

                let already_playing = game.borrow().state.playing;
                if !already_playing {
                    game.borrow_mut().state.start();
                    log::info!("session started");
                    request_animation_frame(game.clone());
                }
            });
            let _ = btn.add_event_listener_with_callback("click", closure.as_ref().unchecked_ref());
            closure.forget();
        }
    }

    /// Resize the backing store and let the sim recompute derived values;
    /// pipes already in flight stay where they are
    fn setup_resize_handler(canvas: HtmlCanvasElement, game: Rc<RefCell<Game>>) {
        let window = web_sys::window().unwrap();
        let closure = Closure::<dyn FnMut(_)>::new(move |_event: web_sys::Event| {
            let window = web_sys::window().unwrap();
            let document = window.document().unwrap();
            let (w, h) = canvas_size(&window, &document);
            canvas.set_width(w as u32);
            canvas.set_height(h as u32);
            game.borrow_mut().state.resize(w, h);
            log::info!("resized to {w}x{h}");
        });
        let _ = window.add_event_listener_with_callback("resize", closure.as_ref().unchecked_ref());
        closure.forget();
    }

    fn request_animation_frame(game: Rc<RefCell<Game>>) {
        let window = web_sys::window().unwrap();
        let closure = Closure::once(move |_time: f64| {
            game_loop(game);
        });
        let _ = window.request_animation_frame(closure.as_ref().unchecked_ref());
        closure.forget();
    }

    fn game_loop(game: Rc<RefCell<Game>>) {
        game.borrow_mut().frame();
        request_animation_frame(game);
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
    log::info!("Skyflap (native) starting...");
    log::info!("Native mode is a headless demo - run with `trunk serve` for the web version");

    run_headless_demo();
}

#[cfg(target_arch = "wasm32")]
fn main() {
    // WASM entry point is wasm_main, this is just to satisfy the compiler
}

/// Drive the sim without a browser: a simple autopilot flaps toward the
/// nearest upcoming gap until it crashes or runs out of frames.
#[cfg(not(target_arch = "wasm32"))]
fn run_headless_demo() {
    use skyflap::sim::{GameState, Viewport, tick};
    use skyflap::tuning::Tuning;

    let mut state = GameState::new(42, Tuning::default(), Viewport::new(800.0, 480.0));
    state.start();

    for _ in 0..3600 {
        if should_flap(&state) {
            state.handle_activation();
        }
        tick(&mut state);
        if state.game_over {
            break;
        }
    }

    println!(
        "headless demo: score {} after {} frames (game over: {})",
        state.score, state.frame, state.game_over
    );
}

/// Flap whenever the bird sinks below the center of the nearest gap ahead
#[cfg(not(target_arch = "wasm32"))]
fn should_flap(state: &skyflap::sim::GameState) -> bool {
    let target = state
        .pipes
        .iter()
        .filter(|p| p.right_edge() >= state.bird.left())
        .min_by(|a, b| a.x.partial_cmp(&b.x).unwrap_or(std::cmp::Ordering::Equal))
        .map(|p| p.top_h + p.gap * 0.5)
        .unwrap_or(state.viewport.height * 0.5);

    state.bird.bottom() > target && state.bird.vel >= 0.0
}
