//! Sequential pairing environment: a one-slot waiting room.

use tracing::{debug, warn};

use crate::env::{ActionError, Env, Step};
use crate::history::MatchHistory;
use crate::pool::RatingPool;
use crate::snapshot::Snapshot;
use crate::space::Discrete;
use crate::{ARRIVAL_PROBABILITY, INVALID_ACTION_REWARD, PADDING_VALUE, STATE_SIZE};

/// Matchmaking environment where players are picked one at a time.
///
/// The action is a single index in `0..=STATE_SIZE` (`STATE_SIZE` passes).
/// The first in-range pick moves that player into the waiting room for
/// reward 0; the next pick pairs against the room occupant for reward
/// `1 - 5 * (room - popped)^2` and empties the room. Independently of the
/// action, a new player arrives with probability [`ARRIVAL_PROBABILITY`]
/// each step while the pool is below capacity.
///
/// Observations prepend the room value (or [`PADDING_VALUE`] when empty) to
/// the padded pool, for a length of `STATE_SIZE + 1`.
pub struct RoomEnv {
    pool: RatingPool,
    history: MatchHistory,
    room: Option<f32>,
    space: Discrete,
    rng: fastrand::Rng,
    faulted: bool,
    tick: u64,
}

impl Default for RoomEnv {
    fn default() -> Self {
        Self::new()
    }
}

impl RoomEnv {
    #[must_use]
    pub fn new() -> Self {
        Self {
            pool: RatingPool::new(),
            history: MatchHistory::new(),
            room: None,
            space: Discrete::new(STATE_SIZE + 1),
            rng: fastrand::Rng::new(),
            faulted: false,
            tick: 0,
        }
    }

    #[must_use]
    pub fn faulted(&self) -> bool {
        self.faulted
    }

    #[must_use]
    pub fn room(&self) -> Option<f32> {
        self.room
    }

    #[must_use]
    pub fn history(&self) -> &MatchHistory {
        &self.history
    }

    /// Room value then the padded pool.
    fn observe(&self) -> Vec<f32> {
        let mut obs = Vec::with_capacity(STATE_SIZE + 1);
        obs.push(self.room.unwrap_or(PADDING_VALUE));
        obs.extend(self.pool.padded());
        obs
    }
}

impl Env for RoomEnv {
    type Action = usize;

    fn reset(&mut self) -> Vec<f32> {
        self.pool.refill(&mut self.rng);
        self.history.clear();
        self.room = None;
        self.faulted = false;
        self.tick = 0;
        self.observe()
    }

    fn step(&mut self, action: Self::Action) -> Result<Step, ActionError> {
        self.space.check(action)?;
        self.faulted = false;
        self.tick += 1;

        let reward = if let Some(popped) = self.pool.take(action) {
            if let Some(waiting) = self.room.take() {
                self.history.record((waiting, popped));
                debug!(waiting, popped, "matched against room");
                1.0 - 5.0 * (waiting - popped).powi(2)
            } else {
                self.room = Some(popped);
                debug!(popped, "moved player into room");
                0.0
            }
        } else if action == STATE_SIZE {
            0.0
        } else {
            warn!(action, pool_len = self.pool.len(), "index beyond pool");
            self.faulted = true;
            INVALID_ACTION_REWARD
        };

        // One arrival draw per step, taken whether or not the action was
        // useful, so seeded runs replay identically.
        if self.rng.f32() < ARRIVAL_PROBABILITY && !self.pool.is_full() {
            let rating = self.rng.f32();
            self.pool.insert(rating);
            debug!(rating, pool_len = self.pool.len(), "new player arrived");
        }

        Ok(Step::new(self.observe(), reward))
    }

    fn seed(&mut self, seed: u64) {
        self.rng = fastrand::Rng::with_seed(seed);
    }

    fn obs_size(&self) -> usize {
        STATE_SIZE + 1
    }

    fn action_size(&self) -> usize {
        self.space.n()
    }

    fn snapshot(&self) -> Snapshot {
        Snapshot {
            observation: self.pool.padded(),
            history: self.history.iter().collect(),
            room: self.room,
            faulted: self.faulted,
            tick: self.tick,
        }
    }
}
