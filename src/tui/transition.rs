//! Slide-in animation played after a mode switch.
//!
//! Purely visual: the form state has already changed by the time a
//! transition starts.

use std::time::{Duration, Instant};

use ratatui::layout::Rect;

/// How long a panel takes to slide fully into place.
pub const TRANSITION_DURATION: Duration = Duration::from_millis(600);

/// The screen edge a panel enters from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Side {
    Left,
    Right,
}

/// A running slide-in.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Transition {
    started: Instant,
}

impl Transition {
    /// Starts a transition at `now`.
    pub fn start(now: Instant) -> Self {
        Self { started: now }
    }

    /// Fraction completed at `now`, clamped to `0.0..=1.0`.
    pub fn progress(&self, now: Instant) -> f64 {
        let elapsed = now.saturating_duration_since(self.started);
        (elapsed.as_secs_f64() / TRANSITION_DURATION.as_secs_f64()).min(1.0)
    }

    /// Returns `true` once the full duration has elapsed.
    pub fn is_finished(&self, now: Instant) -> bool {
        now.saturating_duration_since(self.started) >= TRANSITION_DURATION
    }
}

/// Returns the part of `area` a panel entering from `from` covers at `progress`.
///
/// At `0.0` the panel is fully off-screen (zero width); at `1.0` it fills `area`.
pub fn slide_in(area: Rect, progress: f64, from: Side) -> Rect {
    let progress = progress.clamp(0.0, 1.0);
    let width = (f64::from(area.width) * progress).round() as u16;
    let x = match from {
        Side::Left => area.x,
        Side::Right => area.x + (area.width - width),
    };
    Rect { x, width, ..area }
}
