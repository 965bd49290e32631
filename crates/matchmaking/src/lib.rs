#![deny(clippy::all, clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]
//! # Matchmaking Environments
//!
//! Toy reinforcement-learning environments simulating a matchmaking queue:
//! the agent observes a sorted list of player skill ratings and decides which
//! players to pair up, earning a reward that favors evenly matched pairs.
//!
//! ## Key Components
//!
//! -   **Environments:** [`PairingEnv`] matches two players per action;
//!     [`RoomEnv`] holds one player in a waiting room and matches the next
//!     pick against it. Both implement the gym-style [`Env`] trait.
//! -   **Registry:** environments are constructed by symbolic id through
//!     [`registry::make`], the way an external RL host discovers them.
//! -   **Snapshots:** renderers and other observers read environment state
//!     through [`Snapshot`], never through the live state machine.
//!
//! ## Usage
//!
//! ```rust
//! use matchmaking::{Env, PairingEnv};
//!
//! let mut env = PairingEnv::new();
//! env.seed(42);
//! let obs = env.reset();
//! assert_eq!(obs.len(), matchmaking::STATE_SIZE);
//! let step = env.step((0, 1)).unwrap();
//! assert!(!step.done);
//! ```

pub mod env;
pub mod history;
pub mod pairing;
pub mod pool;
pub mod registry;
pub mod room;
pub mod snapshot;
pub mod space;

pub use env::{ActionError, DynEnv, Env, Info, SliceAction, SliceEnv, Step};
pub use history::MatchHistory;
pub use pairing::PairingEnv;
pub use pool::RatingPool;
pub use registry::RegistryError;
pub use room::RoomEnv;
pub use snapshot::Snapshot;
pub use space::Discrete;

/// Capacity of the rating pool and width of the padded observation.
pub const STATE_SIZE: usize = 10;

/// Maximum number of matched pairs retained in the history.
pub const MAX_HISTORY: usize = 10;

/// Sentinel written into unused observation slots and the empty room.
pub const PADDING_VALUE: f32 = -1.0;

/// Reward for a semantically invalid (but in-space) action.
pub const INVALID_ACTION_REWARD: f32 = -0.1;

/// Per-step probability of a new player arriving in the sequential variant.
pub const ARRIVAL_PROBABILITY: f32 = 0.1;
