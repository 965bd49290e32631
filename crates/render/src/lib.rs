#![deny(clippy::all, clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]
//! Debug visualization for the matchmaking environments.
//!
//! A software rasterizer producing the same panel the upstream viewer drew:
//! green pool tiles, the history column, the waiting room, a blinking
//! heartbeat and a red error flash. Everything is driven from read-only
//! [`matchmaking::Snapshot`]s, so rendering can never perturb an episode.

pub mod frame;
pub mod renderer;

pub use frame::Frame;
pub use renderer::{RenderFrame, RenderMode, Renderer, UnknownModeError};
