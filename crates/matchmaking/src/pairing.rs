//! Simultaneous pairing environment: one action picks both players.

use tracing::{debug, warn};

use crate::env::{ActionError, Env, Step};
use crate::history::MatchHistory;
use crate::pool::RatingPool;
use crate::snapshot::Snapshot;
use crate::space::Discrete;
use crate::{STATE_SIZE, INVALID_ACTION_REWARD};

/// Matchmaking environment where each action names two pool indices to pair.
///
/// The action is `(i, j)` with each component in `0..=STATE_SIZE`;
/// `(STATE_SIZE, STATE_SIZE)` is the pass action. Matching players with
/// ratings `p_i` and `p_j` rewards `1 - 2 * (p_i - p_j)^2`, so evenly
/// matched pairs score close to 1. Picking the same index twice, or an index
/// beyond the current (shrunk) pool, is penalized with
/// [`INVALID_ACTION_REWARD`] and leaves the state untouched.
///
/// Episodes never terminate from inside `step`; the caller decides when to
/// stop.
pub struct PairingEnv {
    pool: RatingPool,
    history: MatchHistory,
    space: Discrete,
    rng: fastrand::Rng,
    faulted: bool,
    tick: u64,
}

impl Default for PairingEnv {
    fn default() -> Self {
        Self::new()
    }
}

impl PairingEnv {
    #[must_use]
    pub fn new() -> Self {
        Self {
            pool: RatingPool::new(),
            history: MatchHistory::new(),
            space: Discrete::new(STATE_SIZE + 1),
            rng: fastrand::Rng::new(),
            faulted: false,
            tick: 0,
        }
    }

    /// Whether the last step was a semantically invalid action.
    #[must_use]
    pub fn faulted(&self) -> bool {
        self.faulted
    }

    #[must_use]
    pub fn history(&self) -> &MatchHistory {
        &self.history
    }
}

impl Env for PairingEnv {
    type Action = (usize, usize);

    fn reset(&mut self) -> Vec<f32> {
        self.pool.refill(&mut self.rng);
        self.history.clear();
        self.faulted = false;
        self.tick = 0;
        self.pool.padded()
    }

    fn step(&mut self, action: Self::Action) -> Result<Step, ActionError> {
        let (i, j) = action;
        self.space.check(i)?;
        self.space.check(j)?;
        self.faulted = false;
        self.tick += 1;

        let reward = if let Some((p_i, p_j)) = self.pool.take_pair(i, j) {
            self.history.record((p_i, p_j));
            debug!(p_i, p_j, "matched pair");
            1.0 - 2.0 * (p_i - p_j).powi(2)
        } else if i == STATE_SIZE && j == STATE_SIZE {
            0.0
        } else {
            warn!(i, j, pool_len = self.pool.len(), "invalid match attempt");
            self.faulted = true;
            INVALID_ACTION_REWARD
        };

        Ok(Step::new(self.pool.padded(), reward))
    }

    fn seed(&mut self, seed: u64) {
        self.rng = fastrand::Rng::with_seed(seed);
    }

    fn obs_size(&self) -> usize {
        STATE_SIZE
    }

    fn action_size(&self) -> usize {
        self.space.n()
    }

    fn snapshot(&self) -> Snapshot {
        Snapshot {
            observation: self.pool.padded(),
            history: self.history.iter().collect(),
            room: None,
            faulted: self.faulted,
            tick: self.tick,
        }
    }
}
