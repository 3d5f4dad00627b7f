//! Simulated display and track used by the marquee tests.

use std::cell::RefCell;
use std::rc::Rc;

use super::builder::{BuildCycle, SegmentCard};
use super::host::{FrameHandle, FrameScheduler, TrackSurface};
use super::listeners::{Listener, ListenerKind, ListenerRegistry};
use super::{MarqueeController, MarqueeInput};

#[derive(Default)]
struct ClockState {
    now_ms: f64,
    next_id: u64,
    requested: usize,
    pending: Vec<FrameHandle>,
}

/// Frame scheduler driven by hand.
#[derive(Clone, Default)]
pub struct SimClock {
    inner: Rc<RefCell<ClockState>>,
}

impl SimClock {
    pub fn advance(&self, ms: f64) {
        self.inner.borrow_mut().now_ms += ms;
    }

    pub fn pending(&self) -> usize {
        self.inner.borrow().pending.len()
    }

    /// Total frames ever requested.
    pub fn requested(&self) -> usize {
        self.inner.borrow().requested
    }

    fn take_pending(&self) -> Vec<FrameHandle> {
        std::mem::take(&mut self.inner.borrow_mut().pending)
    }
}

impl FrameScheduler for SimClock {
    fn request_frame(&mut self) -> FrameHandle {
        let mut state = self.inner.borrow_mut();
        state.next_id += 1;
        state.requested += 1;
        let handle = FrameHandle(state.next_id);
        state.pending.push(handle);
        handle
    }

    fn cancel_frame(&mut self, handle: FrameHandle) {
        self.inner.borrow_mut().pending.retain(|pending| *pending != handle);
    }

    fn now_ms(&self) -> f64 {
        self.inner.borrow().now_ms
    }
}

#[derive(Default)]
struct SurfaceState {
    mounted: bool,
    viewport_width: f64,
    ltr: bool,
    segments: usize,
    cards: Vec<SegmentCard>,
    offset: f64,
    watched: Option<BuildCycle>,
    measure_requests: Vec<BuildCycle>,
}

/// Track surface that records what the controller asked for.
#[derive(Clone, Default)]
pub struct SimSurface {
    inner: Rc<RefCell<SurfaceState>>,
    registry: ListenerRegistry,
}

impl SimSurface {
    pub fn segments(&self) -> usize {
        self.inner.borrow().segments
    }

    pub fn cards(&self) -> Vec<SegmentCard> {
        self.inner.borrow().cards.clone()
    }

    pub fn offset(&self) -> f64 {
        self.inner.borrow().offset
    }

    pub fn is_ltr(&self) -> bool {
        self.inner.borrow().ltr
    }

    pub fn watched_cycle(&self) -> Option<BuildCycle> {
        self.inner.borrow().watched
    }

    pub fn measure_requests(&self) -> Vec<BuildCycle> {
        self.inner.borrow().measure_requests.clone()
    }

    pub fn listener_count(&self, kind: ListenerKind) -> usize {
        self.registry.count(kind)
    }

    pub fn total_listeners(&self) -> usize {
        self.registry.total()
    }
}

impl TrackSurface for SimSurface {
    fn is_mounted(&self) -> bool {
        self.inner.borrow().mounted
    }

    fn viewport_width(&self) -> f64 {
        self.inner.borrow().viewport_width
    }

    fn force_ltr(&mut self) {
        self.inner.borrow_mut().ltr = true;
    }

    fn clear(&mut self) {
        let mut state = self.inner.borrow_mut();
        state.segments = 0;
        state.cards.clear();
    }

    fn render_segment(&mut self, _cycle: BuildCycle, cards: &[SegmentCard]) {
        let mut state = self.inner.borrow_mut();
        state.segments = 1;
        state.cards = cards.to_vec();
    }

    fn watch_images(&mut self, cycle: BuildCycle) {
        self.inner.borrow_mut().watched = Some(cycle);
    }

    fn measure_segment(&mut self, cycle: BuildCycle) {
        self.inner.borrow_mut().measure_requests.push(cycle);
    }

    fn append_clone(&mut self, _cycle: BuildCycle) {
        self.inner.borrow_mut().segments += 1;
    }

    fn apply_offset(&mut self, offset: f64) {
        self.inner.borrow_mut().offset = offset;
    }

    fn listen(&mut self, kind: ListenerKind) -> Listener {
        self.registry.register(kind)
    }
}

/// A controller wired to a simulated clock and surface.
pub struct Harness {
    pub controller: MarqueeController<SimClock, SimSurface>,
    pub clock: SimClock,
    pub surface: SimSurface,
    pub frame_ms: f64,
}

impl Harness {
    pub fn new(viewport_width: f64) -> Self {
        let surface = SimSurface::default();
        {
            let mut state = surface.inner.borrow_mut();
            state.mounted = true;
            state.viewport_width = viewport_width;
        }
        Self::with_surface(surface)
    }

    pub fn unmounted() -> Self {
        Self::with_surface(SimSurface::default())
    }

    fn with_surface(surface: SimSurface) -> Self {
        let clock = SimClock::default();
        Self {
            controller: MarqueeController::new(clock.clone(), surface.clone()),
            clock,
            surface,
            frame_ms: 50.0,
        }
    }

    /// Advance one frame and fire every callback requested before it.
    pub fn run_frame(&mut self) {
        self.clock.advance(self.frame_ms);
        let now_ms = self.clock.now_ms();
        for handle in self.clock.take_pending() {
            self.controller.handle(MarqueeInput::Frame { handle, now_ms });
        }
    }

    pub fn run_for_ms(&mut self, duration_ms: f64) {
        let frames = (duration_ms / self.frame_ms).round() as usize;
        for _ in 0..frames {
            self.run_frame();
        }
    }

    pub fn settle_images(&mut self) {
        if let Some(cycle) = self.surface.watched_cycle() {
            self.controller.handle(MarqueeInput::ImagesSettled { cycle });
        }
    }

    pub fn deliver_measurement(&mut self, width: f64) {
        if let Some(cycle) = self.surface.measure_requests().last().copied() {
            self.controller
                .handle(MarqueeInput::SegmentMeasured { cycle, width });
        }
    }

    /// Walk the current build through every phase.
    pub fn complete_build(&mut self, width: f64) {
        self.run_frame();
        self.settle_images();
        self.run_frame();
        self.deliver_measurement(width);
        self.run_frame();
    }
}
