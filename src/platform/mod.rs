//! Platform abstraction layer
//!
//! Handles browser/native differences for:
//! - Time (millisecond timestamps)
//! - Frame scheduling (`requestAnimationFrame` on web, manual pumping elsewhere)

mod manual;
#[cfg(target_arch = "wasm32")]
pub mod web;

pub use manual::ManualScheduler;

/// Opaque handle to a pending frame request
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct FrameHandle(pub u64);

/// Host frame-timing primitive.
///
/// The session asks for at most one frame at a time and cancels it on every
/// exit path.
pub trait FrameScheduler {
    /// Request the next frame callback; `None` if the host refused
    fn request_frame(&mut self) -> Option<FrameHandle>;
    /// Drop a pending request; unknown or fired handles are ignored
    fn cancel_frame(&mut self, handle: FrameHandle);
}

impl<T: FrameScheduler + ?Sized> FrameScheduler for &mut T {
    fn request_frame(&mut self) -> Option<FrameHandle> {
        (**self).request_frame()
    }

    fn cancel_frame(&mut self, handle: FrameHandle) {
        (**self).cancel_frame(handle)
    }
}

/// Milliseconds from an arbitrary, monotonic-ish origin
#[cfg(target_arch = "wasm32")]
pub fn now_ms() -> f64 {
    web_sys::window()
        .and_then(|w| w.performance())
        .map(|p| p.now())
        .unwrap_or_else(js_sys::Date::now)
}

#[cfg(not(target_arch = "wasm32"))]
pub fn now_ms() -> f64 {
    use std::sync::OnceLock;
    use std::time::Instant;

    static ORIGIN: OnceLock<Instant> = OnceLock::new();
    ORIGIN.get_or_init(Instant::now).elapsed().as_secs_f64() * 1000.0
}

#[cfg(all(test, not(target_arch = "wasm32")))]
mod tests {
    use super::*;

    #[test]
    fn test_now_ms_does_not_go_backwards() {
        let a = now_ms();
        let b = now_ms();
        assert!(a >= 0.0);
        assert!(b >= a);
    }
}
