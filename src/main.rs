//! Plinko Miner entry point
//!
//! Handles platform-specific initialization and runs the game loop.

#[cfg(target_arch = "wasm32")]
use wasm_bindgen::prelude::*;

#[cfg(target_arch = "wasm32")]
mod wasm_game {
    use std::cell::RefCell;
    use std::rc::Rc;
    use wasm_bindgen::prelude::*;
    use web_sys::{Document, HtmlCanvasElement, HtmlInputElement, MouseEvent};

    use plinko_miner::consts::*;
    use plinko_miner::hud;
    use plinko_miner::ledger::Ledger;
    use plinko_miner::render::{CanvasRenderer, RenderSink};
    use plinko_miner::sim::{Board, GameState, TickInput, tick};

    /// Game instance holding all state
    struct Game {
        state: GameState,
        renderer: CanvasRenderer,
        input: TickInput,
        accumulator: f32,
        last_time: f64,
        /// Ledger as of the last LocalStorage write
        last_saved: Ledger,
    }

    impl Game {
        fn new(state: GameState, renderer: CanvasRenderer) -> Self {
            let last_saved = state.ledger.clone();
            Self {
                state,
                renderer,
                input: TickInput::default(),
                accumulator: 0.0,
                last_time: 0.0,
                last_saved,
            }
        }

        /// Run simulation ticks behind a fixed-timestep accumulator
        fn update(&mut self, dt: f32) {
            let dt = dt.min(0.1);
            self.accumulator += dt;

            let mut ticks = 0;
            while self.accumulator >= TICK_DT && ticks < MAX_TICKS_PER_FRAME {
                let input = self.input.clone();
                tick(&mut self.state, &input);
                self.accumulator -= TICK_DT;
                ticks += 1;

                // One-shot commands apply exactly once
                self.input = TickInput::default();
            }
        }

        /// Render the current frame
        fn render(&mut self) {
            self.renderer.draw(&self.state.board, &self.state.balls);
        }

        /// Update HUD elements in DOM
        fn update_hud(&self) {
            let Some(document) = web_sys::window().and_then(|w| w.document()) else {
                return;
            };

            if let Some(el) = document.get_element_by_id("balance") {
                el.set_text_content(Some(&hud::balance_label(self.state.ledger.balance)));
            }
            if let Some(el) = document.get_element_by_id("rate") {
                el.set_text_content(Some(&hud::rate_label(self.state.ledger.mining_rate)));
            }
            if let Some(el) = document.get_element_by_id("upgrade-btn") {
                el.set_text_content(Some(&hud::upgrade_label(self.state.ledger.upgrade_cost)));
            }
            if let Some(el) = document.get_element_by_id("plinko-result") {
                el.set_text_content(Some(self.state.notice.current().unwrap_or("")));
            }
        }

        /// Persist the ledger whenever it changed since the last write
        fn autosave(&mut self) {
            if self.state.ledger != self.last_saved {
                self.state.ledger.save();
                self.last_saved = self.state.ledger.clone();
            }
        }
    }

    /// Parse a numeric input field; NaN flows into the sim's validation
    fn input_value(document: &Document, id: &str) -> f64 {
        document
            .get_element_by_id(id)
            .and_then(|el| el.dyn_into::<HtmlInputElement>().ok())
            .map(|input| input.value())
            .and_then(|s| s.trim().parse::<f64>().ok())
            .unwrap_or(f64::NAN)
    }

    pub fn run() {
        console_error_panic_hook::set_once();
        console_log::init_with_level(log::Level::Info).expect("Failed to init logger");

        log::info!("Plinko Miner starting...");

        let window = web_sys::window().expect("no window");
        let document = window.document().expect("no document");

        let canvas: HtmlCanvasElement = document
            .get_element_by_id("plinko-board")
            .expect("no canvas")
            .dyn_into()
            .expect("not a canvas");
        canvas.set_width(BOARD_WIDTH as u32);
        canvas.set_height(BOARD_HEIGHT as u32);

        let board = Board::new(BOARD_WIDTH, BOARD_HEIGHT);
        let ledger = Ledger::load();
        let seed = js_sys::Date::now() as u64;
        let state = GameState::new(board, ledger, seed);
        let renderer = CanvasRenderer::new(&canvas).expect("no 2d canvas context");

        log::info!("Game initialized with seed: {seed}");

        let game = Rc::new(RefCell::new(Game::new(state, renderer)));

        setup_buttons(&document, game.clone());

        // Start game loop
        request_animation_frame(game);

        log::info!("Plinko Miner running!");
    }

    fn setup_buttons(document: &Document, game: Rc<RefCell<Game>>) {
        // Drop a ball wagering the entered value
        if let Some(btn) = document.get_element_by_id("drop-btn") {
            let game = game.clone();
            let closure = Closure::<dyn FnMut(_)>::new(move |_event: MouseEvent| {
                let document = web_sys::window().unwrap().document().unwrap();
                game.borrow_mut().input.drop_value = Some(input_value(&document, "ballValue"));
            });
            let _ = btn.add_event_listener_with_callback("click", closure.as_ref().unchecked_ref());
            closure.forget();
        }

        // Buy the mining upgrade
        if let Some(btn) = document.get_element_by_id("upgrade-btn") {
            let game = game.clone();
            let closure = Closure::<dyn FnMut(_)>::new(move |_event: MouseEvent| {
                game.borrow_mut().input.upgrade = true;
            });
            let _ = btn.add_event_listener_with_callback("click", closure.as_ref().unchecked_ref());
            closure.forget();
        }

        // Coin-flip gamble with the entered bet
        if let Some(btn) = document.get_element_by_id("gamble-btn") {
            let closure = Closure::<dyn FnMut(_)>::new(move |_event: MouseEvent| {
                let document = web_sys::window().unwrap().document().unwrap();
                game.borrow_mut().input.gamble = Some(input_value(&document, "gambleAmount"));
            });
            let _ = btn.add_event_listener_with_callback("click", closure.as_ref().unchecked_ref());
            closure.forget();
        }
    }

    fn request_animation_frame(game: Rc<RefCell<Game>>) {
        let window = web_sys::window().unwrap();
        let closure = Closure::once(move |time: f64| {
            game_loop(game, time);
        });
        let _ = window.request_animation_frame(closure.as_ref().unchecked_ref());
        closure.forget();
    }

    fn game_loop(game: Rc<RefCell<Game>>, time: f64) {
        {
            let mut g = game.borrow_mut();

            let dt = if g.last_time > 0.0 {
                ((time - g.last_time) / 1000.0) as f32
            } else {
                TICK_DT
            };
            g.last_time = time;

            g.update(dt);
            g.render();
            g.update_hud();
            g.autosave();
        }

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
    use plinko_miner::consts::*;
    use plinko_miner::hud;
    use plinko_miner::ledger::Ledger;
    use plinko_miner::sim::{Board, GameState, TickInput, tick};

    env_logger::init();
    log::info!("Plinko Miner (native) starting...");

    // Headless demo: seeded session, a few wagers stepped to rest
    let board = Board::new(BOARD_WIDTH, BOARD_HEIGHT);
    let mut state = GameState::new(board, Ledger::load(), 42);
    state.ledger.credit(100.0);

    for _ in 0..5 {
        tick(
            &mut state,
            &TickInput {
                drop_value: Some(10.0),
                ..Default::default()
            },
        );
        while !state.balls.is_empty() {
            tick(&mut state, &TickInput::default());
        }
        if let Some(msg) = state.notice.current() {
            log::info!("{msg}");
        }
    }

    println!(
        "{} after {} ticks",
        hud::balance_label(state.ledger.balance),
        state.time_ticks
    );
}

#[cfg(target_arch = "wasm32")]
fn main() {
    // WASM entry point is wasm_main, this is just to satisfy the compiler
}
