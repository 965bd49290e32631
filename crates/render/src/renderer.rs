//! Debug panel renderer for matchmaking snapshots.

use std::fmt::Write as _;
use std::str::FromStr;

use matchmaking::{Snapshot, STATE_SIZE};
use thiserror::Error;
use tracing::debug;

use crate::frame::Frame;

const SCREEN_W: u32 = 600;
const SCREEN_H: u32 = 400;
const TILE: u32 = 20;

const BACKGROUND: [u8; 3] = [255, 255, 255];
const BLINK_COLOR: [u8; 3] = [0, 0, 255];
const ERROR_COLOR: [u8; 3] = [255, 0, 0];

/// How a frame should be produced.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RenderMode {
    /// Human-readable text panel (stands in for the upstream window).
    Human,
    /// Raw pixel buffer for programmatic consumers.
    RgbArray,
}

/// Error for a render mode string that names no known mode.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("unknown render mode {0:?}, expected \"human\" or \"rgb_array\"")]
pub struct UnknownModeError(String);

impl FromStr for RenderMode {
    type Err = UnknownModeError;

    /// Parses the conventional gym mode strings.
    fn from_str(mode: &str) -> Result<Self, Self::Err> {
        match mode {
            "human" => Ok(Self::Human),
            "rgb_array" => Ok(Self::RgbArray),
            other => Err(UnknownModeError(other.to_string())),
        }
    }
}

/// One rendered frame.
#[derive(Debug, Clone, PartialEq)]
pub enum RenderFrame {
    Text(String),
    Pixels { width: u32, height: u32, data: Vec<u8> },
}

/// Draws the matchmaking debug panel from [`Snapshot`]s.
///
/// Constructed once and kept across steps; the only mutable display state is
/// the blink phase of the heartbeat tile. The layout mirrors the upstream
/// viewer: the pool along the bottom edge, the history column above it, the
/// waiting room to its right, and heartbeat/error indicators near the right
/// edge.
#[derive(Debug, Default)]
pub struct Renderer {
    blink_on: bool,
}

impl Renderer {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Renders one frame and advances the blink phase.
    pub fn render(&mut self, snapshot: &Snapshot, mode: RenderMode) -> RenderFrame {
        self.blink_on = !self.blink_on;
        debug!(tick = snapshot.tick, ?mode, faulted = snapshot.faulted, "rendering frame");
        match mode {
            RenderMode::Human => RenderFrame::Text(self.draw_text(snapshot)),
            RenderMode::RgbArray => {
                let frame = self.draw_pixels(snapshot);
                RenderFrame::Pixels {
                    width: frame.width(),
                    height: frame.height(),
                    data: frame.into_pixels(),
                }
            }
        }
    }

    /// Rasterizes the panel; also used by callers that want a [`Frame`] to
    /// encode as PNG.
    #[must_use]
    pub fn draw_pixels(&self, snapshot: &Snapshot) -> Frame {
        let mut frame = Frame::new(SCREEN_W, SCREEN_H, BACKGROUND);

        #[allow(clippy::cast_possible_wrap, clippy::cast_possible_truncation)]
        for (idx, &rating) in snapshot.observation.iter().take(STATE_SIZE).enumerate() {
            // Ratings live in [0, 1); anything negative is the padding sentinel.
            if rating < 0.0 {
                continue;
            }
            frame.fill_rect(50 + 50 * idx as i32, 50, TILE, TILE, rating_color(rating));
        }

        #[allow(clippy::cast_possible_wrap, clippy::cast_possible_truncation)]
        for (row, &(p1, p2)) in snapshot.history.iter().enumerate() {
            let y = 150 + 30 * row as i32;
            frame.fill_rect(100, y, TILE, TILE, rating_color(p1));
            frame.fill_rect(150, y, TILE, TILE, rating_color(p2));
        }

        if let Some(rating) = snapshot.room {
            frame.fill_rect(300, 150, TILE, TILE, rating_color(rating));
        }

        if self.blink_on {
            frame.fill_rect(500, 300, TILE, TILE, BLINK_COLOR);
        }

        if snapshot.faulted {
            frame.fill_rect(500, 200, TILE, TILE, ERROR_COLOR);
        }

        frame
    }

    fn draw_text(&self, snapshot: &Snapshot) -> String {
        let mut out = String::new();
        let tick_mark = if self.blink_on { '*' } else { ' ' };
        let fault_mark = if snapshot.faulted { " ERR" } else { "" };
        let _ = writeln!(out, "tick {:>5} {tick_mark}{fault_mark}", snapshot.tick);

        out.push_str("pool |");
        for &rating in snapshot.observation.iter().take(STATE_SIZE) {
            if rating < 0.0 {
                out.push_str("   --");
            } else {
                let _ = write!(out, " {rating:.2}");
            }
        }
        out.push('\n');

        if let Some(rating) = snapshot.room {
            let _ = writeln!(out, "room | {rating:.2}");
        } else {
            let _ = writeln!(out, "room |   --");
        }

        for (row, (p1, p2)) in snapshot.history.iter().enumerate() {
            let _ = writeln!(out, "hist {row} | {p1:.2} ~ {p2:.2}");
        }
        out
    }
}

/// Green channel proportional to the rating, as upstream draws its tiles.
fn rating_color(rating: f32) -> [u8; 3] {
    let level = (rating.clamp(0.0, 1.0) * 255.0).round();
    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    {
        [0, level as u8, 0]
    }
}
