//! Browser platform: animation frames and DOM listeners

use wasm_bindgen::JsCast;
use wasm_bindgen::prelude::*;
use web_sys::{Event, EventTarget};

use super::{FrameHandle, FrameScheduler};

/// `requestAnimationFrame` scheduler.
///
/// One closure is reused for every request; it lives as long as the scheduler,
/// so the scheduler must not be dropped from inside its own callback.
pub struct RafScheduler {
    callback: Closure<dyn FnMut(f64)>,
}

impl RafScheduler {
    pub fn new(on_frame: impl FnMut(f64) + 'static) -> Self {
        Self {
            callback: Closure::<dyn FnMut(f64)>::new(on_frame),
        }
    }
}

impl FrameScheduler for RafScheduler {
    fn request_frame(&mut self) -> Option<FrameHandle> {
        let id = web_sys::window().and_then(|w| {
            w.request_animation_frame(self.callback.as_ref().unchecked_ref())
                .ok()
        });
        if id.is_none() {
            log::warn!("requestAnimationFrame failed");
        }
        id.map(|id| FrameHandle(id as u64))
    }

    fn cancel_frame(&mut self, handle: FrameHandle) {
        if let Some(window) = web_sys::window() {
            let _ = window.cancel_animation_frame(handle.0 as i32);
            log::debug!("Cancelled animation frame {}", handle.0);
        }
    }
}

struct Listener {
    target: EventTarget,
    kind: &'static str,
    closure: Closure<dyn FnMut(Event)>,
}

/// DOM listeners that are detached together (and on drop)
#[derive(Default)]
pub struct EventListeners {
    entries: Vec<Listener>,
}

impl EventListeners {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add(&mut self, target: &EventTarget, kind: &'static str, handler: impl FnMut(Event) + 'static) {
        let closure = Closure::<dyn FnMut(Event)>::new(handler);
        if target
            .add_event_listener_with_callback(kind, closure.as_ref().unchecked_ref())
            .is_err()
        {
            log::warn!("Failed to add `{}` listener", kind);
            return;
        }
        self.entries.push(Listener {
            target: target.clone(),
            kind,
            closure,
        });
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Detach everything registered so far
    pub fn remove_all(&mut self) {
        for listener in self.entries.drain(..) {
            let _ = listener.target.remove_event_listener_with_callback(
                listener.kind,
                listener.closure.as_ref().unchecked_ref(),
            );
        }
    }
}

impl Drop for EventListeners {
    fn drop(&mut self) {
        self.remove_all();
    }
}
