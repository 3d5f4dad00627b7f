//! Seams between the marquee controller and whatever renders it.
//!
//! The controller never waits on anything itself. It asks the host for a
//! frame, an image-readiness report or a measurement, and the host answers
//! later by feeding a [`MarqueeInput`](super::MarqueeInput) back in.

use super::builder::{BuildCycle, SegmentCard};
use super::listeners::{Listener, ListenerKind};

/// Opaque id of one requested frame callback.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct FrameHandle(pub u64);

/// Display refresh signal.
pub trait FrameScheduler {
    /// Request a single callback on the next rendered frame.
    fn request_frame(&mut self) -> FrameHandle;
    /// Cancel a pending request. Unknown or already fired handles are ignored.
    fn cancel_frame(&mut self, handle: FrameHandle);
    /// Monotonic clock in milliseconds.
    fn now_ms(&self) -> f64;
}

/// The viewport + track elements the marquee draws into.
pub trait TrackSurface {
    /// Both the viewport and the inner track exist.
    fn is_mounted(&self) -> bool;
    fn viewport_width(&self) -> f64;
    /// Force left-to-right geometry on viewport and track and hide overflow.
    fn force_ltr(&mut self);
    /// Remove every segment from the track.
    fn clear(&mut self);
    /// Render the first segment.
    fn render_segment(&mut self, cycle: BuildCycle, cards: &[SegmentCard]);
    /// Report `ImagesSettled` once every image in the track has loaded or failed.
    fn watch_images(&mut self, cycle: BuildCycle);
    /// Report `SegmentMeasured` with the first segment's rendered width.
    fn measure_segment(&mut self, cycle: BuildCycle);
    /// Append an exact copy of the first segment.
    fn append_clone(&mut self, cycle: BuildCycle);
    /// Translate the track left by `offset` pixels.
    fn apply_offset(&mut self, offset: f64);
    /// Start delivering events of `kind` until the returned listener is dropped.
    fn listen(&mut self, kind: ListenerKind) -> Listener;
}
