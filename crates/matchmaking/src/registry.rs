//! Discovery of environments by symbolic id.

use thiserror::Error;

use crate::env::{DynEnv, SliceEnv};
use crate::pairing::PairingEnv;
use crate::room::RoomEnv;

/// Id of the simultaneous pairing environment.
pub const PAIRING_ID: &str = "Matchmaking-v0";

/// Id of the harder pairing environment.
///
/// Registered separately upstream but sharing the pairing implementation;
/// kept as an exact alias until the variants actually diverge.
pub const PAIRING_HARDER_ID: &str = "Matchmaking-harder-v0";

/// Id of the sequential room environment.
pub const ROOM_ID: &str = "Matchmaking-v1";

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum RegistryError {
    #[error("no environment registered under id {0:?}")]
    UnknownId(String),
}

/// All registered environment ids.
#[must_use]
pub fn ids() -> &'static [&'static str] {
    &[PAIRING_ID, PAIRING_HARDER_ID, ROOM_ID]
}

/// Constructs the environment registered under `id`.
///
/// This is the entry point an RL host uses to discover environments without
/// naming concrete types.
///
/// # Errors
///
/// Returns [`RegistryError::UnknownId`] for an unregistered id.
pub fn make(id: &str) -> Result<Box<dyn DynEnv>, RegistryError> {
    match id {
        PAIRING_ID | PAIRING_HARDER_ID => Ok(Box::new(SliceEnv(PairingEnv::new()))),
        ROOM_ID => Ok(Box::new(SliceEnv(RoomEnv::new()))),
        other => Err(RegistryError::UnknownId(other.to_string())),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::STATE_SIZE;

    #[test]
    fn every_listed_id_constructs() {
        for id in ids() {
            let env = make(id).unwrap();
            assert!(env.obs_size() >= STATE_SIZE);
        }
    }

    #[test]
    fn variants_have_their_declared_shapes() {
        let pairing = make(PAIRING_ID).unwrap();
        assert_eq!(pairing.obs_size(), STATE_SIZE);
        assert_eq!(pairing.action_arity(), 2);

        let harder = make(PAIRING_HARDER_ID).unwrap();
        assert_eq!(harder.obs_size(), STATE_SIZE);
        assert_eq!(harder.action_arity(), 2);

        let room = make(ROOM_ID).unwrap();
        assert_eq!(room.obs_size(), STATE_SIZE + 1);
        assert_eq!(room.action_arity(), 1);
    }

    #[test]
    fn unknown_ids_are_rejected() {
        let err = make("Matchmaking-v2").err().unwrap();
        assert_eq!(err, RegistryError::UnknownId("Matchmaking-v2".to_string()));
    }
}
