//! Button driven speed controls
//!
//! The left button (A) speeds an animation up, the right button (B) slows it
//! down. Frame based animations change their frame delay, the balance
//! animation changes how strongly tilt moves the droplet.

use embassy_time::Duration;

use crate::input::Buttons;

/// Frame delay change per button press
pub const DELAY_STEP: Duration = Duration::from_millis(10);

/// Tilt speed change per frame while a button is held
pub const SPEED_STEP: f32 = 0.01;

/// Largest tilt speed magnitude
pub const SPEED_LIMIT: f32 = 4.0;

/// Delay between frames, adjustable with the buttons
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FrameDelay {
    delay: Duration,
}

impl FrameDelay {
    pub const fn new(delay: Duration) -> Self {
        Self { delay }
    }

    /// Current delay
    pub const fn get(self) -> Duration {
        self.delay
    }

    /// Replace the delay
    pub fn set(&mut self, delay: Duration) {
        self.delay = delay;
    }

    /// Apply a button reading
    ///
    /// A shortens the delay (never below zero), B lengthens it. Both pressed
    /// are applied in that order.
    pub fn adjust(&mut self, buttons: Buttons) {
        if buttons.a {
            let millis = self.delay.as_millis().saturating_sub(DELAY_STEP.as_millis());
            self.delay = Duration::from_millis(millis);
        }
        if buttons.b {
            self.delay += DELAY_STEP;
        }
    }
}

/// Signed tilt speed, adjustable with the buttons
///
/// Holding A long enough makes the speed negative, which inverts the
/// direction the droplet rolls.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TiltSpeed {
    speed: f32,
}

impl Default for TiltSpeed {
    fn default() -> Self {
        Self::new(1.0)
    }
}

impl TiltSpeed {
    pub const fn new(speed: f32) -> Self {
        Self { speed }
    }

    pub const fn get(self) -> f32 {
        self.speed
    }

    /// Apply a button reading, keeping the speed within `SPEED_LIMIT`
    pub fn adjust(&mut self, buttons: Buttons) {
        if buttons.a {
            self.speed = (self.speed - SPEED_STEP).max(-SPEED_LIMIT);
        }
        if buttons.b {
            self.speed = (self.speed + SPEED_STEP).min(SPEED_LIMIT);
        }
    }
}
