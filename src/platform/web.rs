//! Browser glue: animation frame loop and event listeners

use std::cell::{Cell, RefCell};
use std::rc::Rc;

use wasm_bindgen::JsCast;
use wasm_bindgen::prelude::*;
use web_sys::{Event, EventTarget};

use super::LoopHandle;

type FrameCallback = Rc<RefCell<Option<Closure<dyn FnMut(f64)>>>>;

/// A `requestAnimationFrame` loop that reschedules itself while `frame`
/// returns true. Cancelling clears the pending request and drops the callback.
///
/// Must not be cancelled from inside its own frame callback.
pub struct AnimationLoop {
    request_id: Rc<Cell<Option<i32>>>,
    callback: FrameCallback,
}

fn request_frame(callback: &FrameCallback) -> Option<i32> {
    let window = web_sys::window()?;
    let callback = callback.borrow();
    let closure = callback.as_ref()?;
    window
        .request_animation_frame(closure.as_ref().unchecked_ref())
        .ok()
}

impl AnimationLoop {
    pub fn start(mut frame: impl FnMut(f64) -> bool + 'static) -> Self {
        let request_id = Rc::new(Cell::new(None));
        let callback: FrameCallback = Rc::new(RefCell::new(None));

        let inner_id = request_id.clone();
        let inner_callback = callback.clone();
        *callback.borrow_mut() = Some(Closure::new(move |time: f64| {
            inner_id.set(None);
            if frame(time) {
                inner_id.set(request_frame(&inner_callback));
            }
        }));

        request_id.set(request_frame(&callback));
        Self {
            request_id,
            callback,
        }
    }
}

impl LoopHandle for AnimationLoop {
    fn cancel(&mut self) {
        if let Some(id) = self.request_id.take() {
            if let Some(window) = web_sys::window() {
                if let Err(e) = window.cancel_animation_frame(id) {
                    log::warn!("cancelAnimationFrame failed: {e:?}");
                }
            }
        }
        // Breaks the closure <-> Rc cycle
        self.callback.borrow_mut().take();
    }
}

/// An event listener that stays registered until `unregister` or drop
pub struct Listener {
    target: EventTarget,
    event: &'static str,
    closure: Option<Closure<dyn FnMut(Event)>>,
}

impl Listener {
    pub fn register(
        target: &EventTarget,
        event: &'static str,
        handler: impl FnMut(Event) + 'static,
    ) -> Option<Self> {
        let closure = Closure::<dyn FnMut(Event)>::new(handler);
        target
            .add_event_listener_with_callback(event, closure.as_ref().unchecked_ref())
            .map_err(|e| log::warn!("Could not listen for {event}: {e:?}"))
            .ok()?;
        Some(Self {
            target: target.clone(),
            event,
            closure: Some(closure),
        })
    }

    pub fn unregister(&mut self) {
        if let Some(closure) = self.closure.take() {
            if let Err(e) = self
                .target
                .remove_event_listener_with_callback(self.event, closure.as_ref().unchecked_ref())
            {
                log::warn!("Could not stop listening for {}: {e:?}", self.event);
            }
        }
    }
}

impl Drop for Listener {
    fn drop(&mut self) {
        self.unregister();
    }
}

/// Keydown/keyup listeners on one target, released together
pub struct KeyboardSubscription {
    listeners: Vec<Listener>,
}

impl KeyboardSubscription {
    /// `handler` receives the event and whether the key went down
    pub fn register(target: &EventTarget, handler: impl FnMut(&web_sys::KeyboardEvent, bool) + 'static) -> Self {
        let handler = Rc::new(RefCell::new(handler));
        let listeners = [("keydown", true), ("keyup", false)]
            .into_iter()
            .filter_map(|(event, down)| {
                let handler = handler.clone();
                Listener::register(target, event, move |e: Event| {
                    if let Some(key_event) = e.dyn_ref::<web_sys::KeyboardEvent>() {
                        (*handler.borrow_mut())(key_event, down);
                    }
                })
            })
            .collect();
        Self { listeners }
    }

    pub fn unregister(&mut self) {
        for listener in &mut self.listeners {
            listener.unregister();
        }
        self.listeners.clear();
    }
}
