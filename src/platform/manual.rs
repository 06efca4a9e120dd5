//! Frame scheduler pumped by the caller (native runs and tests)

use super::{FrameHandle, FrameScheduler};

/// Keeps track of the single outstanding frame request
#[derive(Debug, Default)]
pub struct ManualScheduler {
    next_id: u64,
    pending: Option<FrameHandle>,
    /// Requests made over the scheduler's lifetime
    pub requested: u64,
    /// Cancellations that hit a pending request
    pub cancelled: u64,
    /// Refuse every request, like a host without an animation frame source
    pub refuse: bool,
}

impl ManualScheduler {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn pending(&self) -> Option<FrameHandle> {
        self.pending
    }

    /// Fire the pending request, if any. The caller then runs the frame.
    pub fn fire(&mut self) -> Option<FrameHandle> {
        self.pending.take()
    }
}

impl FrameScheduler for ManualScheduler {
    fn request_frame(&mut self) -> Option<FrameHandle> {
        if self.refuse {
            log::warn!("Frame request refused");
            return None;
        }
        self.next_id += 1;
        let handle = FrameHandle(self.next_id);
        if let Some(old) = self.pending.replace(handle) {
            log::warn!("Frame {:?} replaced before it fired", old);
        }
        self.requested += 1;
        Some(handle)
    }

    fn cancel_frame(&mut self, handle: FrameHandle) {
        if self.pending == Some(handle) {
            self.pending = None;
            self.cancelled += 1;
            log::debug!("Cancelled frame {:?}", handle);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_request_fire_cycle() {
        let mut s = ManualScheduler::new();
        assert!(s.fire().is_none());
        let h = s.request_frame();
        assert_eq!(s.pending(), h);
        assert_eq!(s.fire(), h);
        assert!(s.pending().is_none());
    }

    #[test]
    fn test_cancel_only_pending() {
        let mut s = ManualScheduler::new();
        let stale = s.request_frame().unwrap();
        s.fire();
        let h = s.request_frame().unwrap();
        s.cancel_frame(stale);
        assert_eq!(s.pending(), Some(h));
        s.cancel_frame(h);
        assert!(s.pending().is_none());
        assert_eq!(s.cancelled, 1);
    }

    #[test]
    fn test_refused_request_leaves_nothing_pending() {
        let mut s = ManualScheduler::new();
        s.refuse = true;
        assert!(s.request_frame().is_none());
        assert!(s.pending().is_none());
        assert_eq!(s.requested, 0);
    }
}
