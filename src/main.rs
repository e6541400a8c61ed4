//! Grid Snake entry point
//!
//! Handles platform-specific initialization and runs the game loop.

#[cfg(target_arch = "wasm32")]
use wasm_bindgen::prelude::*;

#[cfg(target_arch = "wasm32")]
mod wasm_game {
    use std::cell::RefCell;
    use std::rc::Rc;
    use wasm_bindgen::prelude::*;
    use web_sys::HtmlCanvasElement;

    use grid_snake::Game;
    use grid_snake::error::Result;
    use grid_snake::input::KeyAction;
    use grid_snake::persistence::{KeyValueStore, LocalStore, MemoryStore};
    use grid_snake::platform::web::{AnimationLoop, KeyboardSubscription, Listener};
    use grid_snake::platform::{FrameClock, LoopSlot};
    use grid_snake::renderer::CanvasView;

    /// LocalStorage when the browser allows it, memory otherwise
    enum BrowserStore {
        Local(LocalStore),
        Memory(MemoryStore),
    }

    impl KeyValueStore for BrowserStore {
        fn get(&self, key: &str) -> Result<Option<String>> {
            match self {
                BrowserStore::Local(s) => s.get(key),
                BrowserStore::Memory(s) => s.get(key),
            }
        }

        fn set(&mut self, key: &str, value: &str) -> Result<()> {
            match self {
                BrowserStore::Local(s) => s.set(key, value),
                BrowserStore::Memory(s) => s.set(key, value),
            }
        }

        fn remove(&mut self, key: &str) -> Result<()> {
            match self {
                BrowserStore::Local(s) => s.remove(key),
                BrowserStore::Memory(s) => s.remove(key),
            }
        }
    }

    struct App {
        game: Game<BrowserStore>,
        clock: FrameClock,
        view: CanvasView,
    }

    type SharedApp = Rc<RefCell<App>>;
    type SharedLoop = Rc<RefCell<LoopSlot<AnimationLoop>>>;

    /// Listeners and the frame loop, kept alive for the lifetime of the page
    struct Session {
        _keyboard: KeyboardSubscription,
        _listeners: Vec<Listener>,
        _frame_loop: SharedLoop,
    }

    thread_local! {
        static SESSION: RefCell<Option<Session>> = const { RefCell::new(None) };
    }

    fn new_seed() -> u64 {
        js_sys::Date::now() as u64
    }

    /// Schedule the frame loop, cancelling any loop already running
    fn start_loop(app: &SharedApp, frame_loop: &SharedLoop) {
        let app = app.clone();
        frame_loop.borrow_mut().replace_with(move || {
            AnimationLoop::start(move |time| {
                let mut a = app.borrow_mut();
                let dt = a.clock.advance(time);
                a.game.frame(dt);
                let scene = a.game.scene();
                a.view.draw(&scene);
                true
            })
        });
    }

    fn restart(app: &SharedApp, frame_loop: &SharedLoop) {
        frame_loop.borrow_mut().cancel();
        {
            let mut a = app.borrow_mut();
            a.game.restart(new_seed());
            a.clock.reset();
        }
        start_loop(app, frame_loop);
    }

    fn canvas_element(document: &web_sys::Document) -> HtmlCanvasElement {
        if let Some(canvas) = document
            .get_element_by_id("canvas")
            .and_then(|el| el.dyn_into::<HtmlCanvasElement>().ok())
        {
            return canvas;
        }
        let canvas: HtmlCanvasElement = document
            .create_element("canvas")
            .expect("could not create canvas")
            .dyn_into()
            .expect("not a canvas");
        if let Some(body) = document.body() {
            let _ = body.append_child(&canvas);
        }
        canvas
    }

    pub async fn run() {
        console_error_panic_hook::set_once();
        console_log::init_with_level(log::Level::Info).expect("Failed to init logger");

        log::info!("Grid Snake starting...");

        let window = web_sys::window().expect("no window");
        let document = window.document().expect("no document");

        let mut view = CanvasView::new(canvas_element(&document)).expect("no 2d context");
        view.load_sprites().await;

        let store = match LocalStore::open() {
            Some(store) => BrowserStore::Local(store),
            None => {
                log::warn!("LocalStorage unavailable, best score will not persist");
                BrowserStore::Memory(MemoryStore::new())
            }
        };

        let app: SharedApp = Rc::new(RefCell::new(App {
            game: Game::new(store, new_seed()),
            clock: FrameClock::new(),
            view,
        }));
        let frame_loop: SharedLoop = Rc::new(RefCell::new(LoopSlot::new()));

        // Keyboard
        let keyboard = {
            let app = app.clone();
            let frame_loop = frame_loop.clone();
            KeyboardSubscription::register(&window, move |event, down| {
                let key = event.key();
                let action = app.borrow_mut().game.handle_key(&key, down);
                if down && action.prevents_default() {
                    // Keep arrows and space from scrolling the page
                    event.prevent_default();
                }
                if action == KeyAction::Restart {
                    restart(&app, &frame_loop);
                }
            })
        };

        // Auto-pause when the tab is hidden or the window loses focus
        let mut listeners = Vec::new();
        {
            let app = app.clone();
            let doc = document.clone();
            listeners.extend(Listener::register(&document, "visibilitychange", move |_| {
                if doc.hidden() {
                    app.borrow_mut().game.auto_pause();
                }
            }));
        }
        {
            let app = app.clone();
            listeners.extend(Listener::register(&window, "blur", move |_| {
                app.borrow_mut().game.auto_pause();
            }));
        }
        // Stop the loop while the page is hidden or cached; resume it when
        // the back/forward cache brings the page back.
        {
            let app = app.clone();
            let frame_loop = frame_loop.clone();
            listeners.extend(Listener::register(&window, "pagehide", move |_| {
                app.borrow_mut().game.auto_pause();
                frame_loop.borrow_mut().cancel();
                log::info!("Frame loop suspended");
            }));
        }
        {
            let app = app.clone();
            let frame_loop = frame_loop.clone();
            listeners.extend(Listener::register(&window, "pageshow", move |event| {
                let restored = event
                    .dyn_ref::<web_sys::PageTransitionEvent>()
                    .is_some_and(|e| e.persisted());
                if restored && !frame_loop.borrow().is_running() {
                    app.borrow_mut().clock.reset();
                    start_loop(&app, &frame_loop);
                    log::info!("Frame loop resumed");
                }
            }));
        }

        start_loop(&app, &frame_loop);

        SESSION.with(|s| {
            *s.borrow_mut() = Some(Session {
                _keyboard: keyboard,
                _listeners: listeners,
                _frame_loop: frame_loop,
            });
        });

        log::info!("Grid Snake running!");
    }
}

#[cfg(target_arch = "wasm32")]
#[wasm_bindgen(start)]
pub async fn wasm_main() {
    wasm_game::run().await;
}

#[cfg(not(target_arch = "wasm32"))]
fn main() {
    env_logger::init();
    log::info!("Grid Snake (native) starting...");
    log::info!("The playable version runs in the browser - build for wasm32 and serve it");

    println!("\nRunning headless demo...");
    headless_demo();
}

#[cfg(target_arch = "wasm32")]
fn main() {
    // WASM entry point is wasm_main, this is just to satisfy the compiler
}

/// Let a simple autopilot play until it crashes, at 60 frames per second
#[cfg(not(target_arch = "wasm32"))]
fn headless_demo() {
    use grid_snake::Game;
    use grid_snake::persistence::MemoryStore;
    use grid_snake::sim::{Axis, Direction, GameState};

    fn steer(state: &GameState) -> Option<Direction> {
        let head = state.snake.head_cell();
        let current = state.snake.direction();
        let next = head + current.unit().as_ivec2();

        // Turn away from the wall, towards the middle of the field
        if !state.boundaries.contains(next) {
            let middle = state.boundaries.height as i32 / 2;
            return Some(match current.axis() {
                Axis::Horizontal if head.y < middle => Direction::Down,
                Axis::Horizontal => Direction::Up,
                Axis::Vertical if head.x < state.boundaries.width as i32 / 2 => Direction::Right,
                Axis::Vertical => Direction::Left,
            });
        }

        let fruit = state.fruit.as_ref()?.cell();
        match current.axis() {
            Axis::Horizontal if head.x == fruit.x && fruit.y != head.y => {
                Some(if fruit.y > head.y { Direction::Down } else { Direction::Up })
            }
            Axis::Vertical if head.y == fruit.y && fruit.x != head.x => {
                Some(if fruit.x > head.x { Direction::Right } else { Direction::Left })
            }
            _ => None,
        }
    }

    let seed = std::time::SystemTime::now()
        .duration_since(std::time::UNIX_EPOCH)
        .map(|d| d.as_millis() as u64)
        .unwrap_or(0);
    let mut game = Game::new(MemoryStore::new(), seed);
    let dt = 1.0 / 60.0;

    let mut frames = 0u32;
    while game.state.is_playing() && frames < 60 * 120 {
        if let Some(direction) = steer(&game.state) {
            game.input.directions.push(direction);
        }
        game.frame(dt);
        frames += 1;
    }

    println!(
        "✓ Demo finished after {:.1}s: score {}, tail length {}",
        frames as f32 * dt,
        game.state.score,
        game.state.snake.tail_length
    );
}
