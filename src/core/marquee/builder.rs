//! Seamless-loop track building.
//!
//! A build renders one segment, waits a frame, waits for its images, waits
//! another frame, measures, appends a clone and waits a final frame. Each
//! build is tagged with a [`BuildCycle`]; completions carrying an older tag
//! belong to a superseded build and are dropped.

use crate::state::DisplayItem;

/// Tag of one build. Increases monotonically per controller.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct BuildCycle(pub u64);

impl BuildCycle {
    pub fn next(self) -> Self {
        BuildCycle(self.0 + 1)
    }
}

/// Where the current build is. Each `Await*Frame` phase is a suspension on
/// the next rendered frame.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum BuildPhase {
    /// Nothing to build (no items, not mounted, or torn down).
    #[default]
    Idle,
    AwaitFirstFrame,
    AwaitImages,
    AwaitMeasureFrame,
    AwaitMeasurement,
    AwaitSettleFrame,
    /// Both segments are in place.
    Ready,
}

/// One rendered card.
#[derive(Clone, Debug, PartialEq)]
pub struct SegmentCard {
    pub image: String,
    pub caption: String,
    pub alt: String,
}

/// Cards for one segment, in item order.
pub fn segment_cards(items: &[DisplayItem]) -> Vec<SegmentCard> {
    items
        .iter()
        .enumerate()
        .map(|(index, item)| {
            let caption = item.caption_text().to_string();
            let alt = if caption.is_empty() {
                format!("model {}", index + 1)
            } else {
                caption.clone()
            };
            SegmentCard {
                image: item.image.clone(),
                caption,
                alt,
            }
        })
        .collect()
}

/// Round a measured width up to whole pixels. Garbage reads as 0.
pub fn measured_segment_width(raw: f64) -> f64 {
    if raw.is_finite() && raw > 0.0 {
        raw.ceil()
    } else {
        0.0
    }
}

/// Progress of the in-flight build.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct TrackBuild {
    cycle: BuildCycle,
    phase: BuildPhase,
    measured_width: f64,
}

impl TrackBuild {
    /// Start a new cycle, superseding whatever was in flight.
    pub fn begin(&mut self) -> BuildCycle {
        self.cycle = self.cycle.next();
        self.phase = BuildPhase::Idle;
        self.measured_width = 0.0;
        self.cycle
    }

    /// Drop the current build without starting a new one.
    pub fn supersede(&mut self) {
        self.begin();
    }

    pub fn cycle(&self) -> BuildCycle {
        self.cycle
    }

    pub fn phase(&self) -> BuildPhase {
        self.phase
    }

    pub fn set_phase(&mut self, phase: BuildPhase) {
        self.phase = phase;
    }

    /// True when a completion for `cycle` in `phase` belongs to this build.
    pub fn accepts(&self, cycle: BuildCycle, phase: BuildPhase) -> bool {
        self.cycle == cycle && self.phase == phase
    }

    pub fn record_width(&mut self, raw: f64) -> f64 {
        self.measured_width = measured_segment_width(raw);
        self.measured_width
    }

    pub fn measured_width(&self) -> f64 {
        self.measured_width
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cards_follow_item_order() {
        let items = vec![
            DisplayItem::new("a.png", Some("X")),
            DisplayItem::new("b.png", None),
        ];
        let cards = segment_cards(&items);
        assert_eq!(cards.len(), 2);
        assert_eq!(cards[0].image, "a.png");
        assert_eq!(cards[0].alt, "X");
        assert_eq!(cards[1].caption, "");
        assert_eq!(cards[1].alt, "model 2");
    }

    #[test]
    fn test_measured_width_rounds_up() {
        assert_eq!(measured_segment_width(299.2), 300.0);
        assert_eq!(measured_segment_width(300.0), 300.0);
        assert_eq!(measured_segment_width(0.0), 0.0);
        assert_eq!(measured_segment_width(-4.0), 0.0);
        assert_eq!(measured_segment_width(f64::NAN), 0.0);
    }

    #[test]
    fn test_begin_supersedes_previous_cycle() {
        let mut build = TrackBuild::default();
        let first = build.begin();
        build.set_phase(BuildPhase::AwaitImages);
        let second = build.begin();
        assert!(second > first);
        assert!(!build.accepts(first, BuildPhase::AwaitImages));
        build.set_phase(BuildPhase::AwaitImages);
        assert!(build.accepts(second, BuildPhase::AwaitImages));
        assert!(!build.accepts(second, BuildPhase::AwaitMeasurement));
    }
}
