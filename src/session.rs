//! Chase session runner
//!
//! Owns the chase state, the held input, the clock and the one pending frame
//! request. Frames are requested only after the previous one has finished, and
//! every way out of a session cancels whatever is still pending.

use crate::platform::{FrameHandle, FrameScheduler};
use crate::scene::{Ambience, RenderAdapter, RenderFrame};
use crate::settings::Settings;
use crate::sim::{ChaseState, Corridor, GameClock, GameEvent, InputState, SessionPhase, tick};
use crate::tuning::Tuning;

/// One chase play-through and its frame loop
pub struct ChaseSession<S: FrameScheduler> {
    state: ChaseState,
    input: InputState,
    clock: GameClock,
    tuning: Tuning,
    corridor: Corridor,
    reduced_motion: bool,
    scheduler: S,
    pending: Option<FrameHandle>,
}

impl<S: FrameScheduler> ChaseSession<S> {
    pub fn new(tuning: Tuning, settings: &Settings, scheduler: S) -> Self {
        let corridor = Corridor::default();
        let mut tuning = tuning;
        if settings.confine_to_corridor {
            tuning.confine_to = Some(corridor);
        }
        Self {
            state: ChaseState::new(&tuning),
            input: InputState::new(),
            clock: GameClock::new(tuning.max_frame_dt),
            tuning,
            corridor,
            reduced_motion: settings.reduced_motion,
            scheduler,
            pending: None,
        }
    }

    pub fn state(&self) -> &ChaseState {
        &self.state
    }

    pub fn phase(&self) -> SessionPhase {
        self.state.phase
    }

    pub fn corridor(&self) -> &Corridor {
        &self.corridor
    }

    pub fn scheduler(&self) -> &S {
        &self.scheduler
    }

    pub fn scheduler_mut(&mut self) -> &mut S {
        &mut self.scheduler
    }

    /// Whether a frame request is outstanding
    pub fn is_running(&self) -> bool {
        self.pending.is_some()
    }

    /// Press/release by action name (touch buttons, scripted input)
    pub fn set_action(&mut self, name: &str, held: bool) {
        self.input.set_action(name, held);
    }

    /// Press/release by keyboard key; returns whether the key is bound
    pub fn handle_key(&mut self, key: &str, held: bool) -> bool {
        self.input.handle_key(key, held)
    }

    pub fn input_mut(&mut self) -> &mut InputState {
        &mut self.input
    }

    /// Start control: Idle → Active and begin the frame loop
    pub fn start(&mut self) -> bool {
        if !self.state.start() {
            log::debug!("Start ignored in phase {:?}", self.state.phase);
            return false;
        }
        self.clock.reset();
        self.schedule();
        log::info!("Chase started");
        true
    }

    /// Fresh positions, cleared input, Active again
    pub fn reset(&mut self) {
        self.cancel_pending();
        self.state.reset(&self.tuning);
        self.input.release_all();
        self.clock.reset();
        self.schedule();
        log::info!("Chase reset");
    }

    /// Stop the loop (navigation away, teardown). State is left as is.
    pub fn stop(&mut self) {
        self.cancel_pending();
        self.input.release_all();
        log::info!("Chase stopped in phase {:?}", self.state.phase);
    }

    /// Pick a stopped Active session back up (page restored from the
    /// back/forward cache). Positions are kept; the first frame has zero dt.
    pub fn resume(&mut self) -> bool {
        if self.state.phase != SessionPhase::Active || self.pending.is_some() {
            return false;
        }
        self.clock.reset();
        self.schedule();
        log::info!("Chase resumed");
        self.pending.is_some()
    }

    /// Run one frame: clock, tick, present, and reschedule unless finished.
    pub fn on_frame<R: RenderAdapter + ?Sized>(&mut self, timestamp_ms: f64, renderer: &mut R) -> Option<GameEvent> {
        // The request that got us here has fired
        self.pending = None;

        if self.state.phase != SessionPhase::Active {
            log::debug!("Frame after session ended, dropping");
            return None;
        }

        let dt = self.clock.tick(timestamp_ms);
        let event = tick(&mut self.state, &self.input, dt, &self.tuning);

        let ambience = Ambience::at((timestamp_ms / 1000.0) as f32, self.reduced_motion);
        renderer.present(&RenderFrame::capture(&self.state, ambience));

        match event {
            Some(_) => self.input.release_all(),
            None => self.schedule(),
        }
        event
    }

    fn schedule(&mut self) {
        if self.pending.is_none() {
            self.pending = self.scheduler.request_frame();
        }
    }

    fn cancel_pending(&mut self) {
        if let Some(handle) = self.pending.take() {
            self.scheduler.cancel_frame(handle);
        }
    }
}

impl<S: FrameScheduler> Drop for ChaseSession<S> {
    fn drop(&mut self) {
        self.cancel_pending();
    }
}
