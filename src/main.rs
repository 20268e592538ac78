//! Sort Visualizer entry point
//!
//! Handles platform-specific initialization and runs the frame loop.

#[cfg(target_arch = "wasm32")]
use wasm_bindgen::prelude::*;

#[cfg(target_arch = "wasm32")]
mod web_app {
    use std::cell::RefCell;
    use std::rc::Rc;
    use wasm_bindgen::prelude::*;
    use web_sys::{Document, MouseEvent, Window};

    use sort_visualizer::Settings;
    use sort_visualizer::consts::{CANVAS_ID, WRAPPER_ID};
    use sort_visualizer::error::InitError;
    use sort_visualizer::playback::{Driver, PlaybackState, SystemClock};
    use sort_visualizer::renderer::CanvasRenderer;

    /// Everything the browser callbacks share
    struct App {
        driver: Driver<SystemClock>,
        renderer: CanvasRenderer,
        /// Pending animation frame request
        frame: Option<i32>,
    }

    pub fn run() -> Result<(), InitError> {
        console_error_panic_hook::set_once();
        if let Err(err) = console_log::init_with_level(log::Level::Info) {
            web_sys::console::warn_1(&format!("logger init failed: {err}").into());
        }

        log::info!("Sort Visualizer starting...");

        let window = web_sys::window().ok_or(InitError::NoWindow)?;
        let document = window.document().ok_or(InitError::NoDocument)?;

        let settings = Settings::load();
        let mut renderer = CanvasRenderer::from_document(&document, CANVAS_ID)?;
        if let Some((width, height)) = wrapper_size(&document) {
            renderer.resize(width, height);
        }

        let driver = Driver::from_settings(&settings, SystemClock::new());
        driver.replay(&mut renderer);

        let app = Rc::new(RefCell::new(App {
            driver,
            renderer,
            frame: None,
        }));

        setup_click_handler(&window, app.clone());
        setup_resize_handler(&window, app);

        log::info!("Sort Visualizer ready, click to start");
        Ok(())
    }

    /// Client size of the element the canvas should fill
    fn wrapper_size(document: &Document) -> Option<(u32, u32)> {
        let wrapper = document.get_element_by_id(WRAPPER_ID)?;
        let width = wrapper.client_width().max(0) as u32;
        let height = wrapper.client_height().max(0) as u32;
        Some((width, height))
    }

    /// Clicking anywhere plays or pauses
    fn setup_click_handler(window: &Window, app: Rc<RefCell<App>>) {
        let closure = Closure::<dyn FnMut(_)>::new(move |_event: MouseEvent| {
            let state = app.borrow_mut().driver.toggle();
            match state {
                PlaybackState::Running => request_frame(&app),
                PlaybackState::Idle => cancel_frame(&app),
                PlaybackState::Finished => {}
            }
        });
        let _ = window.add_event_listener_with_callback("click", closure.as_ref().unchecked_ref());
        closure.forget();
    }

    fn setup_resize_handler(window: &Window, app: Rc<RefCell<App>>) {
        let closure = Closure::<dyn FnMut(_)>::new(move |_event: web_sys::Event| {
            let Some(document) = web_sys::window().and_then(|w| w.document()) else {
                return;
            };
            if let Some((width, height)) = wrapper_size(&document) {
                app.borrow_mut().renderer.resize(width, height);
            }
        });
        let _ = window.add_event_listener_with_callback("resize", closure.as_ref().unchecked_ref());
        closure.forget();
    }

    fn request_frame(app: &Rc<RefCell<App>>) {
        if app.borrow().frame.is_some() {
            return;
        }
        let Some(window) = web_sys::window() else {
            return;
        };
        let handle = app.clone();
        let closure = Closure::once(move |time: f64| {
            frame_loop(&handle, time);
        });
        match window.request_animation_frame(closure.as_ref().unchecked_ref()) {
            Ok(id) => app.borrow_mut().frame = Some(id),
            Err(err) => log::error!("requestAnimationFrame failed: {err:?}"),
        }
        closure.forget();
    }

    fn cancel_frame(app: &Rc<RefCell<App>>) {
        let Some(id) = app.borrow_mut().frame.take() else {
            return;
        };
        if let Some(window) = web_sys::window() {
            let _ = window.cancel_animation_frame(id);
        }
    }

    fn frame_loop(app: &Rc<RefCell<App>>, time: f64) {
        let wants_frame = {
            let mut guard = app.borrow_mut();
            let App {
                driver,
                renderer,
                frame,
            } = &mut *guard;
            *frame = None;
            driver.tick(time, renderer);
            driver.wants_frame()
        };

        if wants_frame {
            request_frame(app);
        }
    }
}

#[cfg(target_arch = "wasm32")]
#[wasm_bindgen(start)]
pub fn wasm_main() -> Result<(), JsValue> {
    web_app::run().map_err(|err| {
        log::error!("Start-up failed: {err}");
        JsValue::from_str(&err.to_string())
    })
}

#[cfg(not(target_arch = "wasm32"))]
fn main() {
    use sort_visualizer::Settings;
    use sort_visualizer::playback::{Driver, PlaybackState, SystemClock};
    use sort_visualizer::renderer::HeadlessRenderer;

    env_logger::init();
    log::info!("Sort Visualizer (native) starting...");

    // Optional settings file as the first argument
    let settings = match std::env::args().nth(1) {
        Some(path) => load_settings_file(&path),
        None => Settings::load(),
    };

    let frame_interval = settings.frame_interval_ms();
    let mut driver = Driver::from_settings(&settings, SystemClock::new());
    let mut renderer = HeadlessRenderer::new();

    // Simulated frame clock; every frame is due
    let mut timestamp = 0.0;
    while !driver.is_finished() {
        if driver.state() == PlaybackState::Idle {
            driver.resume();
        }
        driver.tick(timestamp, &mut renderer);
        timestamp += frame_interval;
    }

    for summary in driver.summaries() {
        println!("{summary}");
    }
    println!(
        "{} frames, {:.1} s of animation at {} fps",
        renderer.steps(),
        timestamp / 1000.0,
        settings.frames_per_second
    );
}

#[cfg(not(target_arch = "wasm32"))]
fn load_settings_file(path: &str) -> sort_visualizer::Settings {
    use sort_visualizer::Settings;

    let json = match std::fs::read_to_string(path) {
        Ok(json) => json,
        Err(err) => {
            log::warn!("Cannot read {path}: {err}; using defaults");
            return Settings::default();
        }
    };
    match Settings::from_json(&json) {
        Ok(settings) => {
            log::info!("Loaded settings from {path}");
            settings
        }
        Err(err) => {
            log::warn!("{err}; using defaults");
            Settings::default()
        }
    }
}

#[cfg(target_arch = "wasm32")]
fn main() {
    // WASM entry point is wasm_main, this is just to satisfy the compiler
}
