use std::collections::HashSet;

use super::builder::BuildCycle;

/// Image readiness bookkeeping for one segment.
///
/// Images can finish before anyone asks about them (cached files), so load
/// and error reports are recorded as they arrive and the settled report is
/// produced whenever both "watching" and "all terminal" become true.
#[derive(Clone, Debug, Default)]
pub struct ImageReadiness {
    cycle: BuildCycle,
    expected: usize,
    settled: HashSet<usize>,
    watching: bool,
    reported: bool,
}

impl ImageReadiness {
    /// Forget everything and expect `expected` images for `cycle`.
    pub fn reset(&mut self, cycle: BuildCycle, expected: usize) {
        self.cycle = cycle;
        self.expected = expected;
        self.settled.clear();
        self.watching = false;
        self.reported = false;
    }

    /// Image `index` loaded or failed. Returns true when the settled report is due.
    pub fn mark_terminal(&mut self, cycle: BuildCycle, index: usize) -> bool {
        if cycle != self.cycle || index >= self.expected {
            return false;
        }
        self.settled.insert(index);
        self.take_report()
    }

    /// Start waiting. Returns true when everything already settled.
    pub fn watch(&mut self, cycle: BuildCycle) -> bool {
        if cycle != self.cycle {
            return false;
        }
        self.watching = true;
        self.take_report()
    }

    fn take_report(&mut self) -> bool {
        if self.watching && !self.reported && self.settled.len() >= self.expected {
            self.reported = true;
            return true;
        }
        false
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_reports_once_all_settled() {
        let cycle = BuildCycle(1);
        let mut readiness = ImageReadiness::default();
        readiness.reset(cycle, 2);
        assert!(!readiness.watch(cycle));
        assert!(!readiness.mark_terminal(cycle, 0));
        assert!(readiness.mark_terminal(cycle, 1));
        assert!(!readiness.mark_terminal(cycle, 1));
    }

    #[test]
    fn test_early_loads_report_on_watch() {
        let cycle = BuildCycle(3);
        let mut readiness = ImageReadiness::default();
        readiness.reset(cycle, 2);
        assert!(!readiness.mark_terminal(cycle, 0));
        assert!(!readiness.mark_terminal(cycle, 1));
        assert!(readiness.watch(cycle));
    }

    #[test]
    fn test_duplicate_events_do_not_count_twice() {
        let cycle = BuildCycle(1);
        let mut readiness = ImageReadiness::default();
        readiness.reset(cycle, 2);
        readiness.watch(cycle);
        assert!(!readiness.mark_terminal(cycle, 0));
        assert!(!readiness.mark_terminal(cycle, 0));
    }

    #[test]
    fn test_stale_cycle_ignored() {
        let mut readiness = ImageReadiness::default();
        readiness.reset(BuildCycle(2), 1);
        assert!(!readiness.mark_terminal(BuildCycle(1), 0));
        assert!(!readiness.watch(BuildCycle(1)));
        assert!(!readiness.watch(BuildCycle(2)));
        assert!(readiness.mark_terminal(BuildCycle(2), 0));
    }
}
