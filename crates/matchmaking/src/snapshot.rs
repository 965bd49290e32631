//! Read-only state snapshots for observers.

/// Copied-out view of one episode's state, taken after the last transition.
///
/// Renderers and other observers consume this instead of touching the live
/// environment, keeping them entirely off the step/reset path.
#[derive(Debug, Clone, PartialEq)]
pub struct Snapshot {
    /// The padded pool observation (room excluded).
    pub observation: Vec<f32>,
    /// Matched pairs, newest first.
    pub history: Vec<(f32, f32)>,
    /// The waiting room occupant, if the variant has a room and it is full.
    pub room: Option<f32>,
    /// Whether the last step was a semantically invalid action.
    pub faulted: bool,
    /// Steps taken since the last reset.
    pub tick: u64,
}
