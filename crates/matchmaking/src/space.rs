//! Declared action spaces and their membership checks.

use crate::env::ActionError;

/// Discrete action space over `0..n`.
///
/// Mirrors the declared space an RL host sees: both variants declare
/// `Discrete(STATE_SIZE + 1)` per action component, where the last index is
/// the pass action.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Discrete {
    n: usize,
}

impl Discrete {
    #[must_use]
    pub const fn new(n: usize) -> Self {
        Self { n }
    }

    /// Number of choices in the space.
    #[must_use]
    pub const fn n(&self) -> usize {
        self.n
    }

    #[must_use]
    pub const fn contains(&self, index: usize) -> bool {
        index < self.n
    }

    /// Membership check as a contract assertion.
    ///
    /// # Errors
    ///
    /// Returns [`ActionError::OutOfRange`] when `index` is not in `0..n`.
    pub const fn check(&self, index: usize) -> Result<(), ActionError> {
        if self.contains(index) {
            Ok(())
        } else {
            Err(ActionError::OutOfRange { index, max: self.n - 1 })
        }
    }

    /// Samples a uniformly random member, for random-agent drivers.
    pub fn sample(&self, rng: &mut fastrand::Rng) -> usize {
        rng.usize(0..self.n)
    }
}
