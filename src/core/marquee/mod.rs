//! Continuous models marquee
//!
//! Drives an endlessly scrolling track of model cards inside an
//! overflow-hidden viewport.
//!
//! # Architecture
//!
//! - **MarqueeController**: Owns the animation state, the in-flight build and
//!   every listener it attached. Single-threaded; all progress is driven by
//!   [`MarqueeInput`]s fed in by the host.
//! - **FrameScheduler / TrackSurface**: Host capabilities (display refresh
//!   signal and the rendered track). Injected so the whole loop runs under
//!   simulated time in tests.
//! - **Build cycles**: Every (re)build gets a fresh [`BuildCycle`]. Late
//!   completions from an older cycle are ignored, so a superseded build can
//!   never overwrite the measured width of a newer one.
//!
//! # Loop geometry
//!
//! The track holds two identical segments. It is translated left by `offset`
//! and `offset` wraps by exactly one segment width, at which point the second
//! segment sits where the first one started.

mod animation;
mod builder;
mod host;
mod listeners;
mod readiness;
#[cfg(test)]
mod testing;

pub use animation::{AnimationState, ScrollSpeed};
pub use builder::{segment_cards, BuildCycle, BuildPhase, SegmentCard};
pub use host::{FrameHandle, FrameScheduler, TrackSurface};
pub use listeners::{Listener, ListenerKind, ListenerRegistry, ListenerSet, ListenerTarget};
pub use readiness::ImageReadiness;

use builder::TrackBuild;
use crate::state::DisplayItem;

/// Everything that can happen to a marquee from the outside.
#[derive(Clone, Debug, PartialEq)]
pub enum MarqueeInput {
    /// A requested frame fired.
    Frame { handle: FrameHandle, now_ms: f64 },
    /// Every image of the cycle's first segment loaded or failed.
    ImagesSettled { cycle: BuildCycle },
    /// Rendered width of the cycle's first segment.
    SegmentMeasured { cycle: BuildCycle, width: f64 },
    Resize,
    VisibilityChanged { hidden: bool },
    PointerEnter,
    PointerLeave,
    TouchStart,
    TouchEnd,
}

impl MarqueeInput {
    /// Listener that must be attached for this input to be delivered.
    pub fn listener_kind(&self) -> Option<ListenerKind> {
        match self {
            MarqueeInput::Frame { .. }
            | MarqueeInput::ImagesSettled { .. }
            | MarqueeInput::SegmentMeasured { .. } => None,
            MarqueeInput::Resize => Some(ListenerKind::Resize),
            MarqueeInput::VisibilityChanged { .. } => Some(ListenerKind::Visibility),
            MarqueeInput::PointerEnter => Some(ListenerKind::PointerEnter),
            MarqueeInput::PointerLeave => Some(ListenerKind::PointerLeave),
            MarqueeInput::TouchStart => Some(ListenerKind::TouchStart),
            MarqueeInput::TouchEnd => Some(ListenerKind::TouchEnd),
        }
    }
}

pub struct MarqueeController<S, T> {
    scheduler: S,
    surface: T,
    items: Vec<DisplayItem>,
    state: AnimationState,
    speed: ScrollSpeed,
    build: TrackBuild,
    build_frame: Option<FrameHandle>,
    tick_frame: Option<FrameHandle>,
    /// Set once the first build of a mount completes with items.
    looping: bool,
    hidden: bool,
    listeners: ListenerSet,
}

impl<S: FrameScheduler, T: TrackSurface> MarqueeController<S, T> {
    pub fn new(scheduler: S, surface: T) -> Self {
        Self {
            scheduler,
            surface,
            items: Vec::new(),
            state: AnimationState::default(),
            speed: ScrollSpeed::default(),
            build: TrackBuild::default(),
            build_frame: None,
            tick_frame: None,
            looping: false,
            hidden: false,
            listeners: ListenerSet::default(),
        }
    }

    /// (Re)initialize with a new item list.
    ///
    /// Tears down everything from the previous mount first, so calling this
    /// any number of times leaves one loop and one listener of each kind.
    pub fn mount(&mut self, items: Vec<DisplayItem>) {
        self.teardown();
        if !self.surface.is_mounted() {
            log::debug!("marquee: track not mounted, nothing to do");
            return;
        }

        self.items = items;
        self.surface.force_ltr();
        self.speed = ScrollSpeed::for_viewport(self.surface.viewport_width());
        for kind in ListenerKind::ALL {
            let listener = self.surface.listen(kind);
            self.listeners.attach(listener);
        }
        log::debug!(
            "marquee: mounted {} items at {:?} speed",
            self.items.len(),
            self.speed
        );
        self.start_build();
    }

    /// Reset the position and rebuild both segments. Used on resize.
    pub fn rebuild(&mut self) {
        if !self.surface.is_mounted() {
            return;
        }
        let now = self.scheduler.now_ms();
        self.state.rewind(now);
        self.start_build();
    }

    /// Cancel the pending frames, detach every listener and clear the track.
    pub fn teardown(&mut self) {
        self.cancel_tick();
        self.cancel_build_frame();
        self.listeners.dispose_all();
        self.build.supersede();
        self.looping = false;
        self.state = AnimationState::default();
        self.items.clear();
        self.surface.clear();
    }

    pub fn handle(&mut self, input: MarqueeInput) {
        if let Some(kind) = input.listener_kind() {
            if !self.listeners.is_attached(kind) {
                return;
            }
        }

        match input {
            MarqueeInput::Frame { handle, now_ms } => self.on_frame(handle, now_ms),
            MarqueeInput::ImagesSettled { cycle } => self.on_images_settled(cycle),
            MarqueeInput::SegmentMeasured { cycle, width } => {
                self.on_segment_measured(cycle, width)
            }
            MarqueeInput::Resize => self.rebuild(),
            MarqueeInput::VisibilityChanged { hidden } => self.on_visibility(hidden),
            MarqueeInput::PointerEnter | MarqueeInput::TouchStart => self.state.pause(),
            MarqueeInput::PointerLeave | MarqueeInput::TouchEnd => {
                let now = self.scheduler.now_ms();
                self.state.resume(now);
            }
        }
    }

    #[cfg(test)]
    pub fn state(&self) -> &AnimationState {
        &self.state
    }

    #[cfg(test)]
    pub fn speed(&self) -> ScrollSpeed {
        self.speed
    }

    pub fn phase(&self) -> BuildPhase {
        self.build.phase()
    }

    pub fn cycle(&self) -> BuildCycle {
        self.build.cycle()
    }

    /// An animation frame is currently requested.
    pub fn is_ticking(&self) -> bool {
        self.tick_frame.is_some()
    }

    pub fn listener_count(&self) -> usize {
        self.listeners.len()
    }

    fn start_build(&mut self) {
        let cycle = self.build.begin();
        self.cancel_build_frame();
        self.surface.clear();
        self.state.offset = 0.0;
        self.state.segment_width = 0.0;
        self.surface.apply_offset(0.0);

        if self.items.is_empty() {
            log::debug!("marquee: no items, staying idle");
            return;
        }

        let cards = segment_cards(&self.items);
        self.surface.render_segment(cycle, &cards);
        self.build.set_phase(BuildPhase::AwaitFirstFrame);
        self.request_build_frame();
        log::debug!("marquee: build {:?} started", cycle);
    }

    fn on_frame(&mut self, handle: FrameHandle, now_ms: f64) {
        if self.build_frame == Some(handle) {
            self.build_frame = None;
            self.advance_build(now_ms);
        } else if self.tick_frame == Some(handle) {
            self.tick_frame = None;
            self.tick(now_ms);
        }
    }

    fn advance_build(&mut self, now_ms: f64) {
        let cycle = self.build.cycle();
        match self.build.phase() {
            BuildPhase::AwaitFirstFrame => {
                self.build.set_phase(BuildPhase::AwaitImages);
                self.surface.watch_images(cycle);
            }
            BuildPhase::AwaitMeasureFrame => {
                self.build.set_phase(BuildPhase::AwaitMeasurement);
                self.surface.measure_segment(cycle);
            }
            BuildPhase::AwaitSettleFrame => {
                self.build.set_phase(BuildPhase::Ready);
                self.state.segment_width = self.build.measured_width();
                log::debug!(
                    "marquee: build {:?} ready, segment width {}",
                    cycle,
                    self.state.segment_width
                );
                self.start_loop(now_ms);
            }
            _ => {}
        }
    }

    fn on_images_settled(&mut self, cycle: BuildCycle) {
        if !self.build.accepts(cycle, BuildPhase::AwaitImages) {
            log::debug!("marquee: ignoring image readiness from {:?}", cycle);
            return;
        }
        self.build.set_phase(BuildPhase::AwaitMeasureFrame);
        self.request_build_frame();
    }

    fn on_segment_measured(&mut self, cycle: BuildCycle, width: f64) {
        if !self.build.accepts(cycle, BuildPhase::AwaitMeasurement) {
            log::debug!("marquee: ignoring measurement from {:?}", cycle);
            return;
        }
        self.build.record_width(width);
        self.surface.append_clone(cycle);
        self.build.set_phase(BuildPhase::AwaitSettleFrame);
        self.request_build_frame();
    }

    fn start_loop(&mut self, now_ms: f64) {
        if !self.looping {
            self.looping = true;
            self.state.offset = 0.0;
        }
        self.state.last_frame_ms = now_ms;
        self.schedule_tick();
    }

    fn tick(&mut self, now_ms: f64) {
        if let Some(offset) = self.state.step(now_ms, self.speed.px_per_second()) {
            self.surface.apply_offset(offset);
        }
        self.schedule_tick();
    }

    fn on_visibility(&mut self, hidden: bool) {
        self.hidden = hidden;
        if hidden {
            self.cancel_tick();
        } else if self.looping {
            self.state.last_frame_ms = self.scheduler.now_ms();
            self.schedule_tick();
        }
    }

    fn schedule_tick(&mut self) {
        if self.hidden || self.tick_frame.is_some() {
            return;
        }
        self.tick_frame = Some(self.scheduler.request_frame());
    }

    fn cancel_tick(&mut self) {
        if let Some(handle) = self.tick_frame.take() {
            self.scheduler.cancel_frame(handle);
        }
    }

    fn request_build_frame(&mut self) {
        self.cancel_build_frame();
        self.build_frame = Some(self.scheduler.request_frame());
    }

    fn cancel_build_frame(&mut self) {
        if let Some(handle) = self.build_frame.take() {
            self.scheduler.cancel_frame(handle);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::testing::Harness;
    use super::*;

    fn two_items() -> Vec<DisplayItem> {
        vec![
            DisplayItem::new("a.png", Some("X")),
            DisplayItem::new("b.png", Some("Y")),
        ]
    }

    fn assert_close(actual: f64, expected: f64) {
        assert!(
            (actual - expected).abs() < 1e-6,
            "expected {expected}, got {actual}"
        );
    }

    /// Distance between two offsets on a loop of length `width`.
    fn loop_distance(a: f64, b: f64, width: f64) -> f64 {
        let d = (a - b).rem_euclid(width);
        d.min(width - d)
    }

    #[test]
    fn test_narrow_viewport_scenario() {
        let mut harness = Harness::new(375.0);
        harness.controller.mount(two_items());
        harness.complete_build(300.0);
        assert_eq!(harness.controller.speed(), ScrollSpeed::Narrow);
        assert_eq!(harness.controller.state().segment_width, 300.0);

        harness.run_for_ms(3_500.0);
        assert_close(harness.controller.state().offset, 297.5);
        assert_close(harness.surface.offset(), 297.5);
    }

    #[test]
    fn test_wide_viewport_scenario_wraps_exactly() {
        let mut harness = Harness::new(1280.0);
        harness.controller.mount(two_items());
        harness.complete_build(300.0);
        assert_eq!(harness.controller.speed(), ScrollSpeed::Wide);

        harness.run_for_ms(10_000.0);
        let offset = harness.controller.state().offset;
        assert!(loop_distance(offset, 0.0, 300.0) < 1e-6, "offset {offset}");
    }

    #[test]
    fn test_seamless_wrap_returns_to_start() {
        let mut harness = Harness::new(1280.0);
        harness.controller.mount(two_items());
        harness.complete_build(300.0);
        harness.run_for_ms(700.0);
        let start = harness.controller.state().offset;

        // One full segment at 120 px/s.
        harness.run_for_ms(2_500.0);
        let end = harness.controller.state().offset;
        assert!(loop_distance(start, end, 300.0) < 1e-6);
    }

    #[test]
    fn test_offset_stays_bounded() {
        let mut harness = Harness::new(1280.0);
        harness.controller.mount(two_items());
        harness.complete_build(37.0);
        for _ in 0..500 {
            harness.run_frame();
            let state = harness.controller.state();
            assert!(state.offset >= 0.0 && state.offset < state.segment_width);
        }
    }

    #[test]
    fn test_repeated_mount_is_idempotent() {
        let mut harness = Harness::new(1280.0);
        for _ in 0..5 {
            harness.controller.mount(two_items());
        }
        harness.complete_build(300.0);
        assert_eq!(harness.clock.pending(), 1);
        assert!(harness.controller.is_ticking());
        assert_eq!(harness.controller.listener_count(), ListenerKind::ALL.len());
        for kind in ListenerKind::ALL {
            assert_eq!(harness.surface.listener_count(kind), 1, "{kind:?}");
        }
        assert_eq!(harness.surface.segments(), 2);
    }

    #[test]
    fn test_repeated_mount_while_running() {
        let mut harness = Harness::new(1280.0);
        for _ in 0..3 {
            harness.controller.mount(two_items());
            harness.complete_build(300.0);
            harness.run_for_ms(200.0);
        }
        assert_eq!(harness.clock.pending(), 1);
        for kind in ListenerKind::ALL {
            assert_eq!(harness.surface.listener_count(kind), 1);
        }
    }

    #[test]
    fn test_repeated_resize_keeps_single_loop() {
        let mut harness = Harness::new(1280.0);
        harness.controller.mount(two_items());
        harness.complete_build(300.0);
        for _ in 0..4 {
            harness.controller.handle(MarqueeInput::Resize);
        }
        harness.complete_build(320.0);
        assert_eq!(harness.clock.pending(), 1);
        assert_eq!(harness.controller.state().segment_width, 320.0);
        assert_eq!(harness.surface.segments(), 2);
    }

    #[test]
    fn test_resize_resets_position_and_idles_until_ready() {
        let mut harness = Harness::new(1280.0);
        harness.controller.mount(two_items());
        harness.complete_build(300.0);
        harness.run_for_ms(1_000.0);
        assert!(harness.controller.state().offset > 0.0);

        harness.controller.handle(MarqueeInput::Resize);
        assert_eq!(harness.controller.state().offset, 0.0);
        assert_eq!(harness.surface.offset(), 0.0);
        assert_eq!(harness.surface.segments(), 1);

        // The loop keeps polling without moving while the rebuild is in flight.
        harness.run_frame();
        assert!(harness.controller.is_ticking());
        assert_eq!(harness.controller.state().offset, 0.0);
    }

    #[test]
    fn test_empty_list_never_schedules() {
        let mut harness = Harness::new(1280.0);
        harness.controller.mount(Vec::new());
        for _ in 0..10 {
            harness.run_frame();
        }
        assert_eq!(harness.clock.pending(), 0);
        assert_eq!(harness.clock.requested(), 0);
        assert_eq!(harness.surface.segments(), 0);
        assert_eq!(harness.controller.phase(), BuildPhase::Idle);

        harness.controller.handle(MarqueeInput::Resize);
        harness.controller.handle(MarqueeInput::VisibilityChanged { hidden: false });
        assert_eq!(harness.clock.pending(), 0);
    }

    #[test]
    fn test_missing_mount_is_silent_noop() {
        let mut harness = Harness::unmounted();
        harness.controller.mount(two_items());
        assert_eq!(harness.clock.pending(), 0);
        assert_eq!(harness.controller.listener_count(), 0);
        assert_eq!(harness.surface.segments(), 0);
        assert!(!harness.surface.is_ltr());
    }

    #[test]
    fn test_mount_forces_ltr() {
        let mut harness = Harness::new(1280.0);
        harness.controller.mount(two_items());
        assert!(harness.surface.is_ltr());
    }

    #[test]
    fn test_build_phases_are_ordered() {
        let mut harness = Harness::new(1280.0);
        harness.controller.mount(two_items());
        assert_eq!(harness.surface.segments(), 1);
        assert_eq!(harness.surface.cards().len(), 2);
        assert_eq!(harness.controller.phase(), BuildPhase::AwaitFirstFrame);
        assert_eq!(harness.surface.watched_cycle(), None);

        harness.run_frame();
        assert_eq!(harness.controller.phase(), BuildPhase::AwaitImages);
        assert!(harness.surface.watched_cycle().is_some());

        // Frames alone never move past the image wait.
        for _ in 0..5 {
            harness.run_frame();
        }
        assert_eq!(harness.controller.phase(), BuildPhase::AwaitImages);
        assert!(harness.surface.measure_requests().is_empty());

        harness.settle_images();
        assert_eq!(harness.surface.measure_requests().len(), 0);
        harness.run_frame();
        assert_eq!(harness.surface.measure_requests().len(), 1);
        assert_eq!(harness.surface.segments(), 1);

        harness.deliver_measurement(299.4);
        assert_eq!(harness.surface.segments(), 2);
        assert!(!harness.controller.state().is_ready());

        harness.run_frame();
        assert_eq!(harness.controller.phase(), BuildPhase::Ready);
        assert_eq!(harness.controller.state().segment_width, 300.0);
    }

    #[test]
    fn test_zero_width_polls_without_advancing() {
        let mut harness = Harness::new(1280.0);
        harness.controller.mount(two_items());
        harness.complete_build(0.0);
        for _ in 0..20 {
            harness.run_frame();
            assert_eq!(harness.clock.pending(), 1);
        }
        assert_eq!(harness.controller.state().offset, 0.0);
        assert!(!harness.controller.state().is_ready());
    }

    #[test]
    fn test_stale_completions_are_ignored() {
        let mut harness = Harness::new(1280.0);
        harness.controller.mount(two_items());
        harness.run_frame();
        harness.settle_images();
        harness.run_frame();
        let stale = harness.controller.cycle();

        harness.controller.handle(MarqueeInput::Resize);
        harness.controller.handle(MarqueeInput::SegmentMeasured {
            cycle: stale,
            width: 999.0,
        });
        harness.controller.handle(MarqueeInput::ImagesSettled { cycle: stale });
        assert_eq!(harness.surface.segments(), 1);
        assert_eq!(harness.controller.phase(), BuildPhase::AwaitFirstFrame);

        harness.complete_build(300.0);
        assert_eq!(harness.controller.state().segment_width, 300.0);
    }

    #[test]
    fn test_pause_excludes_paused_time() {
        let mut harness = Harness::new(1280.0);
        harness.controller.mount(two_items());
        harness.complete_build(300.0);
        harness.run_for_ms(500.0);
        let before = harness.controller.state().offset;

        harness.controller.handle(MarqueeInput::PointerEnter);
        harness.run_for_ms(4_000.0);
        assert_eq!(harness.controller.state().offset, before);
        assert!(harness.controller.is_ticking());

        harness.clock.advance(7_000.0);
        harness.controller.handle(MarqueeInput::PointerLeave);
        harness.run_frame();
        let moved = harness.controller.state().offset - before;
        assert!(moved <= 120.0 * harness.frame_ms / 1000.0 + 1e-9);
        assert!(moved > 0.0);
    }

    #[test]
    fn test_touch_pauses_and_resumes() {
        let mut harness = Harness::new(375.0);
        harness.controller.mount(two_items());
        harness.complete_build(300.0);
        harness.controller.handle(MarqueeInput::TouchStart);
        assert!(harness.controller.state().paused);
        harness.run_for_ms(1_000.0);
        assert_eq!(harness.controller.state().offset, 0.0);
        harness.controller.handle(MarqueeInput::TouchEnd);
        assert!(!harness.controller.state().paused);
        harness.run_for_ms(1_000.0);
        assert_close(harness.controller.state().offset, 85.0);
    }

    #[test]
    fn test_hidden_page_cancels_and_resumes_without_backlog() {
        let mut harness = Harness::new(1280.0);
        harness.controller.mount(two_items());
        harness.complete_build(300.0);
        harness.run_for_ms(500.0);
        let before = harness.controller.state().offset;

        harness.controller.handle(MarqueeInput::VisibilityChanged { hidden: true });
        assert_eq!(harness.clock.pending(), 0);
        assert!(!harness.controller.is_ticking());
        harness.run_for_ms(5_000.0);
        assert_eq!(harness.controller.state().offset, before);

        harness.controller.handle(MarqueeInput::VisibilityChanged { hidden: false });
        assert_eq!(harness.clock.pending(), 1);
        harness.run_frame();
        let moved = harness.controller.state().offset - before;
        assert_close(moved, 120.0 * harness.frame_ms / 1000.0);
    }

    #[test]
    fn test_page_hidden_at_mount_stays_still_until_shown() {
        let mut harness = Harness::new(1280.0);
        harness.controller.mount(two_items());
        harness.controller.handle(MarqueeInput::VisibilityChanged { hidden: true });
        harness.complete_build(300.0);
        assert_eq!(harness.controller.phase(), BuildPhase::Ready);
        assert!(!harness.controller.is_ticking());
        harness.run_for_ms(2_000.0);
        assert_eq!(harness.controller.state().offset, 0.0);

        harness.controller.handle(MarqueeInput::VisibilityChanged { hidden: false });
        assert!(harness.controller.is_ticking());
        harness.run_frame();
        assert_close(harness.controller.state().offset, 120.0 * harness.frame_ms / 1000.0);
    }

    #[test]
    fn test_visible_twice_does_not_duplicate_loop() {
        let mut harness = Harness::new(1280.0);
        harness.controller.mount(two_items());
        harness.complete_build(300.0);
        harness.controller.handle(MarqueeInput::VisibilityChanged { hidden: false });
        harness.controller.handle(MarqueeInput::VisibilityChanged { hidden: false });
        assert_eq!(harness.clock.pending(), 1);
    }

    #[test]
    fn test_long_stall_is_clamped() {
        let mut harness = Harness::new(1280.0);
        harness.controller.mount(two_items());
        harness.complete_build(300.0);
        harness.clock.advance(2_000.0);
        harness.run_frame();
        assert_close(harness.controller.state().offset, 120.0 * 0.05);
    }

    #[test]
    fn test_teardown_releases_everything() {
        let mut harness = Harness::new(1280.0);
        harness.controller.mount(two_items());
        harness.complete_build(300.0);
        harness.controller.teardown();
        assert_eq!(harness.clock.pending(), 0);
        assert_eq!(harness.surface.total_listeners(), 0);
        assert_eq!(harness.surface.segments(), 0);

        // Events after teardown go nowhere.
        harness.controller.handle(MarqueeInput::Resize);
        harness.controller.handle(MarqueeInput::PointerEnter);
        assert!(!harness.controller.state().paused);
        assert_eq!(harness.clock.pending(), 0);
    }

    #[test]
    fn test_input_listener_kinds() {
        assert_eq!(MarqueeInput::Resize.listener_kind(), Some(ListenerKind::Resize));
        assert_eq!(
            MarqueeInput::VisibilityChanged { hidden: true }.listener_kind(),
            Some(ListenerKind::Visibility)
        );
        assert_eq!(
            MarqueeInput::ImagesSettled { cycle: BuildCycle(1) }.listener_kind(),
            None
        );
    }
}
