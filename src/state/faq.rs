use std::collections::BTreeSet;

/// Which FAQ entries are expanded. Entries toggle independently.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FaqState {
    open: BTreeSet<usize>,
}

impl FaqState {
    pub fn toggle(&mut self, index: usize) {
        if !self.open.remove(&index) {
            self.open.insert(index);
        }
    }

    pub fn is_open(&self, index: usize) -> bool {
        self.open.contains(&index)
    }

    /// Icon shown next to the question.
    pub fn icon(&self, index: usize) -> &'static str {
        if self.is_open(index) {
            "−"
        } else {
            "+"
        }
    }
}
