//! The sorted pool of waiting players' ratings.

use crate::{PADDING_VALUE, STATE_SIZE};

/// Sorted-ascending set of ratings in `[0, 1)`, capacity [`STATE_SIZE`].
///
/// The pool shrinks as players are matched out and, in the sequential
/// variant, regrows through stochastic arrivals. Observations are produced
/// by [`padded`], which fixes the width at [`STATE_SIZE`] with
/// [`PADDING_VALUE`] sentinels in the unoccupied tail.
///
/// [`padded`]: RatingPool::padded
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RatingPool {
    ratings: Vec<f32>,
}

impl RatingPool {
    #[must_use]
    pub fn new() -> Self {
        Self { ratings: Vec::with_capacity(STATE_SIZE) }
    }

    /// Replaces the pool with [`STATE_SIZE`] fresh uniform ratings.
    pub fn refill(&mut self, rng: &mut fastrand::Rng) {
        self.ratings.clear();
        self.ratings.extend((0..STATE_SIZE).map(|_| rng.f32()));
        self.ratings.sort_unstable_by(f32::total_cmp);
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.ratings.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.ratings.is_empty()
    }

    #[must_use]
    pub fn is_full(&self) -> bool {
        self.ratings.len() >= STATE_SIZE
    }

    #[must_use]
    pub fn get(&self, index: usize) -> Option<f32> {
        self.ratings.get(index).copied()
    }

    /// Removes and returns the rating at `index`, or `None` if the index is
    /// beyond the current pool.
    pub fn take(&mut self, index: usize) -> Option<f32> {
        if index < self.ratings.len() {
            Some(self.ratings.remove(index))
        } else {
            None
        }
    }

    /// Removes the ratings at two distinct in-range indices at once.
    ///
    /// Returns the ratings in `(first, second)` argument order. `None` if
    /// either index is out of range or the indices coincide.
    pub fn take_pair(&mut self, first: usize, second: usize) -> Option<(f32, f32)> {
        if first == second || first >= self.ratings.len() || second >= self.ratings.len() {
            return None;
        }
        let a = self.ratings[first];
        let b = self.ratings[second];
        // Remove the higher index first so the lower one stays valid.
        self.ratings.remove(first.max(second));
        self.ratings.remove(first.min(second));
        Some((a, b))
    }

    /// Inserts a new arrival, keeping the ascending order.
    pub fn insert(&mut self, rating: f32) {
        let at = self.ratings.partition_point(|&r| r < rating);
        self.ratings.insert(at, rating);
    }

    #[must_use]
    pub fn ratings(&self) -> &[f32] {
        &self.ratings
    }

    /// Fixed-width observation: the sorted ratings followed by
    /// [`PADDING_VALUE`] fill up to [`STATE_SIZE`].
    #[must_use]
    pub fn padded(&self) -> Vec<f32> {
        let mut obs = Vec::with_capacity(STATE_SIZE);
        obs.extend_from_slice(&self.ratings);
        obs.resize(STATE_SIZE, PADDING_VALUE);
        obs
    }
}
