//! Lava Jumper entry point
//!
//! Handles platform-specific initialization and runs the game loop.

#[cfg(target_arch = "wasm32")]
use wasm_bindgen::prelude::*;

#[cfg(target_arch = "wasm32")]
mod wasm_game {
    use std::cell::RefCell;
    use std::rc::Rc;
    use wasm_bindgen::prelude::*;
    use web_sys::{HtmlCanvasElement, KeyboardEvent, TouchEvent};

    use lava_jumper::platform::{KeyboardAdapter, TouchAdapter, TouchButton};
    use lava_jumper::renderer::{RenderState, scene};
    use lava_jumper::sim::{GamePhase, Session, Viewport};
    use lava_jumper::{Settings, Tuning};

    /// Game instance holding all state
    struct Game {
        session: Session,
        settings: Settings,
        render_state: Option<RenderState>,
        // FPS tracking
        frame_times: [f64; 60],
        frame_index: usize,
        fps: u32,
        // Last phase shown in the HUD
        last_phase: GamePhase,
        last_score: Option<u32>,
    }

    impl Game {
        fn new(seed: u64, viewport: Viewport, settings: Settings) -> Self {
            Self {
                session: Session::new(seed, viewport, Tuning::default()),
                settings,
                render_state: None,
                frame_times: [0.0; 60],
                frame_index: 0,
                fps: 0,
                last_phase: GamePhase::Playing,
                last_score: None,
            }
        }

        /// Run one simulation tick
        fn update(&mut self, time: f64) {
            self.session.advance();

            // Track frame times for FPS
            self.frame_times[self.frame_index] = time;
            self.frame_index = (self.frame_index + 1) % 60;

            let oldest_time = self.frame_times[self.frame_index];
            if oldest_time > 0.0 {
                let elapsed = time - oldest_time;
                if elapsed > 0.0 {
                    self.fps = (60000.0 / elapsed).round() as u32;
                }
            }
        }

        /// Render the current frame
        fn render(&mut self) {
            let snapshot = self.session.snapshot();
            let vertices = scene::build(&snapshot, &self.settings);
            if let Some(ref mut render_state) = self.render_state {
                match render_state.render(&vertices, snapshot.viewport) {
                    Ok(_) => {}
                    Err(wgpu::SurfaceError::Lost) => {
                        let (width, height) = render_state.size;
                        render_state.resize(width, height);
                    }
                    Err(wgpu::SurfaceError::OutOfMemory) => {
                        log::error!("Out of memory!");
                    }
                    Err(e) => log::warn!("Render error: {:?}", e),
                }
            }
        }

        /// Update HUD elements in DOM
        fn update_hud(&mut self) {
            let Some(document) = web_sys::window().and_then(|w| w.document()) else {
                return;
            };
            let score = self.session.state().score;
            let phase = self.session.phase();

            if self.last_score != Some(score) {
                if let Some(el) = document.get_element_by_id("score") {
                    el.set_text_content(Some(&format!("Score: {}", score)));
                }
                self.last_score = Some(score);
            }

            if let Some(el) = document.get_element_by_id("fps") {
                if self.settings.show_fps {
                    el.set_text_content(Some(&format!("{} FPS", self.fps)));
                    let _ = el.class_list().remove_1("hidden");
                } else {
                    let _ = el.class_list().add_1("hidden");
                }
            }

            if phase != self.last_phase {
                if let Some(el) = document.get_element_by_id("game-over") {
                    if phase == GamePhase::GameOver {
                        if let Some(score_el) = document.get_element_by_id("final-score") {
                            score_el.set_text_content(Some(&score.to_string()));
                        }
                        let _ = el.class_list().remove_1("hidden");
                    } else {
                        let _ = el.class_list().add_1("hidden");
                    }
                }
                self.last_phase = phase;
            }
        }

        /// Match the canvas resolution to its displayed size
        fn resize(&mut self, canvas: &HtmlCanvasElement) {
            let rect = canvas.get_bounding_client_rect();
            let width = rect.width() as u32;
            let height = rect.height() as u32;
            canvas.set_width(width);
            canvas.set_height(height);

            self.session
                .resize(Viewport::new(width as f32, height as f32));
            if let Some(ref mut render_state) = self.render_state {
                render_state.resize(width, height);
            }
        }
    }

    fn is_touch_device(window: &web_sys::Window) -> bool {
        js_sys::Reflect::has(window, &JsValue::from_str("ontouchstart")).unwrap_or(false)
            || window.navigator().max_touch_points() > 0
    }

    pub async fn run() -> Result<(), JsValue> {
        console_error_panic_hook::set_once();
        if let Err(e) = console_log::init_with_level(log::Level::Info) {
            web_sys::console::error_1(&format!("Failed to init logger: {}", e).into());
        }

        log::info!("Lava Jumper starting...");

        let window = web_sys::window().ok_or("no window")?;
        let document = window.document().ok_or("no document")?;

        let canvas: HtmlCanvasElement = document
            .get_element_by_id("gameCanvas")
            .ok_or("no canvas")?
            .dyn_into()?;

        let settings = Settings::load();
        if let Some(controls) = document.get_element_by_id("touch-controls") {
            if settings.touch_controls.visible(is_touch_device(&window)) {
                controls.class_list().remove_1("hidden")?;
            }
        }

        // Size the canvas to its CSS box
        let rect = canvas.get_bounding_client_rect();
        let width = rect.width() as u32;
        let height = rect.height() as u32;
        canvas.set_width(width);
        canvas.set_height(height);

        let seed = js_sys::Date::now() as u64;
        let game = Rc::new(RefCell::new(Game::new(
            seed,
            Viewport::new(width as f32, height as f32),
            settings,
        )));

        // Initialize WebGPU
        let instance = wgpu::Instance::new(&wgpu::InstanceDescriptor {
            backends: wgpu::Backends::BROWSER_WEBGPU | wgpu::Backends::GL,
            ..Default::default()
        });

        let surface = instance
            .create_surface(wgpu::SurfaceTarget::Canvas(canvas.clone()))
            .map_err(|e| JsValue::from_str(&format!("Failed to create surface: {}", e)))?;

        let adapter = instance
            .request_adapter(&wgpu::RequestAdapterOptions {
                power_preference: wgpu::PowerPreference::default(),
                compatible_surface: Some(&surface),
                force_fallback_adapter: false,
            })
            .await
            .map_err(|e| JsValue::from_str(&format!("Failed to get adapter: {}", e)))?;

        log::info!("Using adapter: {:?}", adapter.get_info().name);

        let render_state = RenderState::new(surface, &adapter, width, height)
            .await
            .map_err(|e| JsValue::from_str(&format!("Failed to create device: {}", e)))?;
        game.borrow_mut().render_state = Some(render_state);

        setup_keyboard(game.clone())?;
        setup_touch_controls(game.clone())?;
        setup_restart_button(game.clone())?;
        setup_resize(&canvas, game.clone())?;

        // Start game loop
        request_animation_frame(game);

        log::info!("Lava Jumper running!");
        Ok(())
    }

    fn setup_keyboard(game: Rc<RefCell<Game>>) -> Result<(), JsValue> {
        let window = web_sys::window().ok_or("no window")?;

        {
            let game = game.clone();
            let closure = Closure::<dyn FnMut(_)>::new(move |event: KeyboardEvent| {
                let mut g = game.borrow_mut();
                let key = event.key();
                if KeyboardAdapter.key_down(&mut g.session, &key) {
                    event.prevent_default();
                } else if !event.repeat() && g.settings.apply_hotkey(&key) {
                    g.settings.save();
                }
            });
            window.add_event_listener_with_callback("keydown", closure.as_ref().unchecked_ref())?;
            closure.forget();
        }

        {
            let closure = Closure::<dyn FnMut(_)>::new(move |event: KeyboardEvent| {
                let mut g = game.borrow_mut();
                KeyboardAdapter.key_up(&mut g.session, &event.key());
            });
            window.add_event_listener_with_callback("keyup", closure.as_ref().unchecked_ref())?;
            closure.forget();
        }

        Ok(())
    }

    fn setup_touch_controls(game: Rc<RefCell<Game>>) -> Result<(), JsValue> {
        let document = web_sys::window()
            .and_then(|w| w.document())
            .ok_or("no document")?;

        for button in TouchButton::ALL {
            let Some(el) = document.get_element_by_id(button.element_id()) else {
                log::warn!("Touch button #{} missing", button.element_id());
                continue;
            };

            {
                let game = game.clone();
                let closure = Closure::<dyn FnMut(_)>::new(move |event: TouchEvent| {
                    event.prevent_default();
                    TouchAdapter.touch_start(&mut game.borrow_mut().session, button);
                });
                el.add_event_listener_with_callback("touchstart", closure.as_ref().unchecked_ref())?;
                closure.forget();
            }

            {
                let game = game.clone();
                let closure = Closure::<dyn FnMut(_)>::new(move |event: TouchEvent| {
                    event.prevent_default();
                    TouchAdapter.touch_end(&mut game.borrow_mut().session, button);
                });
                el.add_event_listener_with_callback("touchend", closure.as_ref().unchecked_ref())?;
                closure.forget();
            }
        }

        Ok(())
    }

    fn setup_restart_button(game: Rc<RefCell<Game>>) -> Result<(), JsValue> {
        let document = web_sys::window()
            .and_then(|w| w.document())
            .ok_or("no document")?;

        if let Some(btn) = document.get_element_by_id("restart-button") {
            let closure = Closure::<dyn FnMut(_)>::new(move |_event: web_sys::MouseEvent| {
                let seed = js_sys::Date::now() as u64;
                game.borrow_mut().session.restart_with_seed(seed);
            });
            btn.add_event_listener_with_callback("click", closure.as_ref().unchecked_ref())?;
            closure.forget();
        }

        Ok(())
    }

    fn setup_resize(canvas: &HtmlCanvasElement, game: Rc<RefCell<Game>>) -> Result<(), JsValue> {
        let window = web_sys::window().ok_or("no window")?;
        let canvas = canvas.clone();
        let closure = Closure::<dyn FnMut(_)>::new(move |_event: web_sys::Event| {
            game.borrow_mut().resize(&canvas);
        });
        window.add_event_listener_with_callback("resize", closure.as_ref().unchecked_ref())?;
        closure.forget();
        Ok(())
    }

    fn request_animation_frame(game: Rc<RefCell<Game>>) {
        let Some(window) = web_sys::window() else {
            return;
        };
        let closure = Closure::once(move |time: f64| {
            game_loop(game, time);
        });
        let _ = window.request_animation_frame(closure.as_ref().unchecked_ref());
        closure.forget();
    }

    fn game_loop(game: Rc<RefCell<Game>>, time: f64) {
        {
            let mut g = game.borrow_mut();
            g.update(time);
            g.render();
            g.update_hud();
        }

        request_animation_frame(game);
    }
}

#[cfg(target_arch = "wasm32")]
#[wasm_bindgen(start)]
pub async fn wasm_main() {
    if let Err(e) = wasm_game::run().await {
        log::error!("Startup failed: {:?}", e);
    }
}

#[cfg(not(target_arch = "wasm32"))]
fn main() {
    env_logger::init();
    log::info!("Lava Jumper (native) starting...");
    log::info!("Native mode runs a headless demo - run with `trunk serve` for the web version");

    let seed = std::env::args()
        .nth(1)
        .and_then(|arg| arg.parse().ok())
        .unwrap_or(2024);

    let session = demo::run(seed, 5000);
    let snapshot = session.snapshot();
    match serde_json::to_string_pretty(&snapshot) {
        Ok(json) => println!("{}", json),
        Err(e) => log::error!("Failed to serialize snapshot: {}", e),
    }
    println!(
        "\nSeed {}: score {} after {} frames{}",
        seed,
        snapshot.score,
        session.state().frame,
        if snapshot.game_over { " (burned)" } else { "" }
    );
}

#[cfg(target_arch = "wasm32")]
fn main() {
    // WASM entry point is wasm_main, this is just to satisfy the compiler
}

/// Headless demo: a greedy bot that climbs toward the nearest platform above
#[cfg(not(target_arch = "wasm32"))]
mod demo {
    use lava_jumper::Tuning;
    use lava_jumper::sim::{Direction, IntentSink, MotionState, Session, Viewport};

    pub fn run(seed: u64, max_frames: u32) -> Session {
        let mut session = Session::new(seed, Viewport::new(800.0, 600.0), Tuning::default());

        for _ in 0..max_frames {
            steer(&mut session);
            if session.advance().game_over {
                break;
            }
        }

        session
    }

    fn steer(session: &mut Session) {
        let state = session.state();
        let player = &state.player;
        let center = player.pos.x + player.size.x / 2.0;

        let target = state
            .platforms
            .iter()
            .filter(|p| p.top() < player.bottom() - 1.0)
            .max_by(|a, b| a.top().total_cmp(&b.top()))
            .map(|p| p.pos.x + p.size.x / 2.0);

        let (left, right) = match target {
            Some(x) if x < center - 10.0 => (true, false),
            Some(x) if x > center + 10.0 => (false, true),
            _ => (false, false),
        };
        let grounded = player.motion != MotionState::Jumping;

        session.set_intent(Direction::Left, left);
        session.set_intent(Direction::Right, right);
        if grounded && target.is_some() {
            session.request_jump();
        }
    }
}
