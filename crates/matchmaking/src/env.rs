//! Gym-style environment contract shared by both matchmaking variants.

use thiserror::Error;

use crate::snapshot::Snapshot;

/// Errors signalling that an action fell outside the declared action space.
///
/// These are contract violations by the caller, distinct from actions that
/// are inside the space but semantically rejected (same index twice, index
/// beyond the shrunk pool); those are penalized with a -0.1 reward instead.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum ActionError {
    /// An index component lies outside the declared discrete range.
    #[error("action index {index} outside discrete range 0..={max}")]
    OutOfRange { index: usize, max: usize },
    /// A slice action had the wrong number of components.
    #[error("expected {expected} action component(s), got {got}")]
    Arity { expected: usize, got: usize },
}

/// Auxiliary diagnostics attached to a [`Step`].
///
/// Both matchmaking variants return it empty; it exists so the step contract
/// matches what RL hosts expect (`obs, reward, done, info`).
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Info {
    entries: Vec<(String, f64)>,
}

impl Info {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, key: impl Into<String>, value: f64) {
        self.entries.push((key.into(), value));
    }

    #[must_use]
    pub fn get(&self, key: &str) -> Option<f64> {
        self.entries.iter().find(|(k, _)| k == key).map(|(_, v)| *v)
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }
}

/// Outcome of a single environment transition.
#[derive(Debug, Clone, PartialEq)]
pub struct Step {
    /// Observation after the transition.
    pub observation: Vec<f32>,
    /// Scalar reward for the action taken.
    pub reward: f32,
    /// Episode termination flag. The matchmaking envs never terminate on
    /// their own; callers impose their own step limits.
    pub done: bool,
    /// Auxiliary diagnostics, empty for both variants.
    pub info: Info,
}

impl Step {
    pub(crate) fn new(observation: Vec<f32>, reward: f32) -> Self {
        Self { observation, reward, done: false, info: Info::new() }
    }
}

/// Reinforcement learning environment interface.
///
/// Modeled on the classic gym contract: [`reset`] starts a fresh episode and
/// returns the initial observation, [`step`] advances by one action. `step`
/// fails only when the action violates the declared action space; every
/// in-space action produces a normal transition.
///
/// [`reset`]: Env::reset
/// [`step`]: Env::step
pub trait Env {
    /// Action representation for this environment.
    type Action;

    /// Reset to a fresh episode and return the initial observation.
    fn reset(&mut self) -> Vec<f32>;

    /// Advance the environment by one action.
    ///
    /// # Errors
    ///
    /// Returns [`ActionError`] if the action is structurally outside the
    /// declared action space.
    fn step(&mut self, action: Self::Action) -> Result<Step, ActionError>;

    /// Reseed this instance's random generator. All stochastic draws (pool
    /// initialization, arrivals) come from instance-owned state, so distinct
    /// instances never interfere.
    fn seed(&mut self, seed: u64);

    /// Length of the observation vector.
    fn obs_size(&self) -> usize;

    /// Number of discrete choices per action component.
    fn action_size(&self) -> usize;

    /// Read-only copy of the current episode state, for rendering and other
    /// observers.
    fn snapshot(&self) -> Snapshot;
}

/// Typed actions that can be parsed from the registry's index slices.
pub trait SliceAction: Sized {
    /// Number of index components the slice must carry.
    const ARITY: usize;

    /// Parses the slice form of the action.
    ///
    /// # Errors
    ///
    /// Returns [`ActionError::Arity`] on a wrong-length slice.
    fn from_slice(action: &[usize]) -> Result<Self, ActionError>;
}

impl SliceAction for usize {
    const ARITY: usize = 1;

    fn from_slice(action: &[usize]) -> Result<Self, ActionError> {
        match *action {
            [index] => Ok(index),
            _ => Err(ActionError::Arity { expected: 1, got: action.len() }),
        }
    }
}

impl SliceAction for (usize, usize) {
    const ARITY: usize = 2;

    fn from_slice(action: &[usize]) -> Result<Self, ActionError> {
        match *action {
            [i, j] => Ok((i, j)),
            _ => Err(ActionError::Arity { expected: 2, got: action.len() }),
        }
    }
}

/// Object-safe environment surface for registry consumers.
///
/// Actions are passed as index slices so one trait object type covers both
/// variants; arity is checked against the declared action shape before the
/// per-component range check.
pub trait DynEnv {
    fn reset(&mut self) -> Vec<f32>;

    /// Step with a slice action: one index for [`RoomEnv`], a pair for
    /// [`PairingEnv`].
    ///
    /// # Errors
    ///
    /// Returns [`ActionError::Arity`] on a wrong-length slice, or the
    /// underlying env's range error.
    ///
    /// [`RoomEnv`]: crate::RoomEnv
    /// [`PairingEnv`]: crate::PairingEnv
    fn step(&mut self, action: &[usize]) -> Result<Step, ActionError>;

    fn seed(&mut self, seed: u64);

    fn obs_size(&self) -> usize;

    fn action_size(&self) -> usize;

    /// Number of index components a slice action must carry.
    fn action_arity(&self) -> usize;

    /// Read-only copy of the current episode state, for rendering.
    fn snapshot(&self) -> Snapshot;
}

/// Adapter giving a typed environment the [`DynEnv`] surface.
///
/// Kept separate from the env types themselves so typed callers never see
/// two competing `step` methods.
pub struct SliceEnv<E>(pub E);

impl<E> DynEnv for SliceEnv<E>
where
    E: Env,
    E::Action: SliceAction,
{
    fn reset(&mut self) -> Vec<f32> {
        self.0.reset()
    }

    fn step(&mut self, action: &[usize]) -> Result<Step, ActionError> {
        let action = E::Action::from_slice(action)?;
        self.0.step(action)
    }

    fn seed(&mut self, seed: u64) {
        self.0.seed(seed);
    }

    fn obs_size(&self) -> usize {
        self.0.obs_size()
    }

    fn action_size(&self) -> usize {
        self.0.action_size()
    }

    fn action_arity(&self) -> usize {
        E::Action::ARITY
    }

    fn snapshot(&self) -> Snapshot {
        self.0.snapshot()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn info_starts_empty_and_records_inserts() {
        let mut info = Info::new();
        assert!(info.is_empty());
        info.insert("tick", 3.0);
        assert_eq!(info.get("tick"), Some(3.0));
        assert_eq!(info.len(), 1);
    }

    #[test]
    fn action_error_messages_name_the_offender() {
        let err = ActionError::OutOfRange { index: 15, max: 10 };
        assert_eq!(err.to_string(), "action index 15 outside discrete range 0..=10");
    }
}
