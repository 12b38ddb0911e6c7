//! Central application state.


use std::time::Duration;

use crate::config::{AnimationConfig, Pacing};

/// Client area dimensions, recorded once after window creation.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ClientSize {
    pub width: u32,
    pub height: u32,
}

impl ClientSize {
    pub fn new(width: u32, height: u32) -> Self {
        Self { width, height }
    }

    /// Builds a size from client rectangle edges; negative spans clamp to 0.
    pub fn from_edges(left: i32, top: i32, right: i32, bottom: i32) -> Self {
        let span = |lo: i32, hi: i32| u32::try_from(i64::from(hi) - i64::from(lo)).unwrap_or(0);
        Self {
            width: span(left, right),
            height: span(top, bottom),
        }
    }

    pub fn is_empty(self) -> bool {
        self.width == 0 || self.height == 0
    }
}

/// Horizontal position of the animated rectangle.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Animation {
    position: f32,
    step: f32,
    pacing: Pacing,
}

impl Animation {
    pub fn new(step: f32, pacing: Pacing) -> Self {
        Self {
            position: 0.0,
            step,
            pacing,
        }
    }

    pub fn position(&self) -> f32 {
        self.position
    }

    /// Moves the position forward once and returns the new value.
    ///
    /// `elapsed` is the wall-clock time since the previous advance; it is
    /// ignored under [`Pacing::PerIteration`].
    ///
    /// The position is an `f32`, so it stops growing once a step falls below
    /// its precision: with a step of 1.0 that happens at 2^24 (16,777,216).
    pub fn advance(&mut self, elapsed: Duration) -> f32 {
        self.position += match self.pacing {
            Pacing::PerIteration => self.step,
            Pacing::PerSecond => self.step * elapsed.as_secs_f32(),
        };
        self.position
    }
}

impl Default for Animation {
    fn default() -> Self {
        Self::from(AnimationConfig::default())
    }
}

impl From<AnimationConfig> for Animation {
    fn from(config: AnimationConfig) -> Self {
        Self::new(config.step, config.pacing)
    }
}

/// State shared by the message loop and the window procedure.
///
/// The client size is fixed at construction; resizing the window does not
/// update it.
#[derive(Debug, Clone)]
pub struct AppState {
    client: ClientSize,
    animation: Animation,
    frames_painted: u64,
}

impl AppState {
    pub fn new(client: ClientSize, animation: Animation) -> Self {
        Self {
            client,
            animation,
            frames_painted: 0,
        }
    }

    pub fn client(&self) -> ClientSize {
        self.client
    }

    pub fn position(&self) -> f32 {
        self.animation.position()
    }

    /// Idle-branch update. Returns the new position.
    pub fn advance(&mut self, elapsed: Duration) -> f32 {
        self.animation.advance(elapsed)
    }

    pub fn frames_painted(&self) -> u64 {
        self.frames_painted
    }

    pub fn record_frame(&mut self) {
        self.frames_painted += 1;
    }
}
