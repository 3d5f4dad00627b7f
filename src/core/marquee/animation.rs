//! Frame-timed translation of the track.

use crate::constants::{
    MARQUEE_MAX_FRAME_STEP_SECONDS, MARQUEE_NARROW_SPEED_PX_PER_SEC,
    MARQUEE_NARROW_VIEWPORT_MAX_PX, MARQUEE_WIDE_SPEED_PX_PER_SEC,
};

/// Scroll speed class, picked once from the viewport width.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ScrollSpeed {
    Narrow,
    #[default]
    Wide,
}

impl ScrollSpeed {
    pub fn for_viewport(width: f64) -> Self {
        if width <= MARQUEE_NARROW_VIEWPORT_MAX_PX {
            ScrollSpeed::Narrow
        } else {
            ScrollSpeed::Wide
        }
    }

    pub fn px_per_second(self) -> f64 {
        match self {
            ScrollSpeed::Narrow => MARQUEE_NARROW_SPEED_PX_PER_SEC,
            ScrollSpeed::Wide => MARQUEE_WIDE_SPEED_PX_PER_SEC,
        }
    }
}

/// Offset and timing of the looping track.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct AnimationState {
    /// Translation since the last wrap, in `[0, segment_width)` once ready.
    pub offset: f64,
    /// Width of one segment; 0 until a build measures something.
    pub segment_width: f64,
    pub paused: bool,
    pub last_frame_ms: f64,
}

impl AnimationState {
    pub fn is_ready(&self) -> bool {
        self.segment_width > 0.0
    }

    /// Rewind to the start and restart the elapsed-time reference.
    pub fn rewind(&mut self, now_ms: f64) {
        self.offset = 0.0;
        self.last_frame_ms = now_ms;
    }

    pub fn pause(&mut self) {
        self.paused = true;
    }

    /// Unpause without counting the paused time as elapsed.
    pub fn resume(&mut self, now_ms: f64) {
        self.paused = false;
        self.last_frame_ms = now_ms;
    }

    /// Advance one frame. Returns the new offset when the track moved.
    pub fn step(&mut self, now_ms: f64, speed_px_per_sec: f64) -> Option<f64> {
        let elapsed = frame_step_seconds(self.last_frame_ms, now_ms);
        self.last_frame_ms = now_ms;

        if !self.is_ready() || self.paused {
            return None;
        }

        self.offset += speed_px_per_sec * elapsed;
        if self.offset >= self.segment_width {
            self.offset = self.offset.rem_euclid(self.segment_width);
        }
        Some(self.offset)
    }
}

/// Seconds between two frames, clamped to `[0, MARQUEE_MAX_FRAME_STEP_SECONDS]`.
pub fn frame_step_seconds(last_ms: f64, now_ms: f64) -> f64 {
    ((now_ms - last_ms) / 1000.0).clamp(0.0, MARQUEE_MAX_FRAME_STEP_SECONDS)
}
