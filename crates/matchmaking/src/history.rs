//! Bounded log of recently matched pairs.

use std::collections::VecDeque;

use crate::MAX_HISTORY;

/// Ring of the most recent matched pairs, newest at index 0.
///
/// Capacity is [`MAX_HISTORY`]; recording beyond it evicts the oldest entry.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct MatchHistory {
    pairs: VecDeque<(f32, f32)>,
}

impl MatchHistory {
    #[must_use]
    pub fn new() -> Self {
        Self { pairs: VecDeque::with_capacity(MAX_HISTORY) }
    }

    pub fn clear(&mut self) {
        self.pairs.clear();
    }

    /// Records a matched pair as the newest entry.
    pub fn record(&mut self, pair: (f32, f32)) {
        self.pairs.push_front(pair);
        self.pairs.truncate(MAX_HISTORY);
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.pairs.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.pairs.is_empty()
    }

    #[must_use]
    pub fn get(&self, index: usize) -> Option<(f32, f32)> {
        self.pairs.get(index).copied()
    }

    /// Pairs from newest to oldest.
    pub fn iter(&self) -> impl Iterator<Item = (f32, f32)> + '_ {
        self.pairs.iter().copied()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn newest_pair_sits_at_the_front() {
        let mut history = MatchHistory::new();
        history.record((0.1, 0.2));
        history.record((0.3, 0.4));
        assert_eq!(history.get(0), Some((0.3, 0.4)));
        assert_eq!(history.get(1), Some((0.1, 0.2)));
    }

    #[test]
    fn capacity_evicts_the_oldest() {
        let mut history = MatchHistory::new();
        for i in 0..15 {
            #[allow(clippy::cast_precision_loss)]
            history.record((i as f32, i as f32));
        }
        assert_eq!(history.len(), MAX_HISTORY);
        assert_eq!(history.get(0), Some((14.0, 14.0)));
        assert_eq!(history.get(MAX_HISTORY - 1), Some((5.0, 5.0)));
    }
}
