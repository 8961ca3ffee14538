//! Polled user input
//!
//! Animations never talk to the hardware. The frame scheduler polls an
//! [`InputSource`] once per frame and hands the resulting [`InputSnapshot`]
//! to the current effect.

/// State of the two front buttons
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Buttons {
    /// Left button
    pub a: bool,
    /// Right button
    pub b: bool,
}

impl Buttons {
    /// No button pressed
    pub const RELEASED: Self = Self { a: false, b: false };

    pub const fn new(a: bool, b: bool) -> Self {
        Self { a, b }
    }
}

/// Accelerometer reading in milli-g
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Acceleration {
    pub x: f32,
    pub y: f32,
    pub z: f32,
}

impl Acceleration {
    /// Device lying flat and still
    pub const LEVEL: Self = Self {
        x: 0.0,
        y: 0.0,
        z: 0.0,
    };

    pub const fn new(x: f32, y: f32, z: f32) -> Self {
        Self { x, y, z }
    }
}

/// Everything an effect may read during one frame
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct InputSnapshot {
    pub buttons: Buttons,
    pub acceleration: Acceleration,
}

impl InputSnapshot {
    /// Snapshot with no buttons pressed and a level device
    pub const IDLE: Self = Self {
        buttons: Buttons::RELEASED,
        acceleration: Acceleration::LEVEL,
    };

    /// Idle snapshot with the given buttons pressed
    pub const fn with_buttons(buttons: Buttons) -> Self {
        Self {
            buttons,
            acceleration: Acceleration::LEVEL,
        }
    }

    /// Idle snapshot with the given acceleration
    pub const fn with_acceleration(acceleration: Acceleration) -> Self {
        Self {
            buttons: Buttons::RELEASED,
            acceleration,
        }
    }
}

/// Abstract input hardware
///
/// Implement this trait to read buttons and the accelerometer on a given
/// board.
pub trait InputSource {
    /// Read the current button state
    fn buttons(&mut self) -> Buttons;

    /// Read the current acceleration
    fn acceleration(&mut self) -> Acceleration;

    /// Read all inputs at once
    fn poll(&mut self) -> InputSnapshot {
        InputSnapshot {
            buttons: self.buttons(),
            acceleration: self.acceleration(),
        }
    }
}

/// Input source for boards without buttons or motion sensor
#[derive(Debug, Clone, Copy, Default)]
pub struct NoInput;

impl InputSource for NoInput {
    fn buttons(&mut self) -> Buttons {
        Buttons::RELEASED
    }

    fn acceleration(&mut self) -> Acceleration {
        Acceleration::LEVEL
    }
}
