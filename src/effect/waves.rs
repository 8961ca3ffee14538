//! Endless waves rolling from the bottom to the top of the matrix

use core::f64::consts::PI;

use embassy_time::Duration;
use libm::{sin, trunc};

use super::Effect;
use super::speed::FrameDelay;
use crate::{
    cell::Cell,
    framebuffer::QuantizedFramebuffer,
    grid::SIZE,
    image::DeviceImage,
    input::InputSnapshot,
};

/// Rows in one wave period
pub const WAVE_LENGTH: usize = 8;

pub(crate) const DEFAULT_DELAY: Duration = Duration::from_millis(175);

/// Waves effect
#[derive(Debug, Clone)]
pub struct WavesEffect {
    buffer: QuantizedFramebuffer,
    /// Position within the wave period
    offset: usize,
    /// Whether a frame has been shown since the last reset
    started: bool,
    delay: FrameDelay,
}

impl Default for WavesEffect {
    fn default() -> Self {
        Self::new(DEFAULT_DELAY)
    }
}

impl WavesEffect {
    pub const fn new(delay: Duration) -> Self {
        Self {
            buffer: QuantizedFramebuffer::new(),
            offset: 0,
            started: false,
            delay: FrameDelay::new(delay),
        }
    }

    /// Level of a row at a phase of the wave period
    ///
    /// Computed in double precision so the zero crossings land on the same
    /// levels the animation was tuned with.
    #[allow(clippy::cast_possible_truncation, clippy::cast_precision_loss)]
    pub fn level(phase: usize) -> u8 {
        let x = (phase % WAVE_LENGTH) as f64 / 4.0 * PI;
        u8::from_gradient(trunc(sin(x) * 4.0 + 4.0) as f32)
    }
}

impl Effect for WavesEffect {
    fn step(&mut self, input: &InputSnapshot) -> DeviceImage {
        if self.started {
            self.delay.adjust(input.buttons);
        }
        self.started = true;

        for row in 0..SIZE {
            self.buffer.fill_row(row, Self::level(row + self.offset));
        }
        self.offset = (self.offset + 1) % WAVE_LENGTH;

        self.buffer.render()
    }

    fn reset(&mut self) {
        self.buffer.clear();
        self.offset = 0;
        self.started = false;
    }

    fn frame_delay(&self) -> Duration {
        self.delay.get()
    }

    fn set_frame_delay(&mut self, delay: Duration) {
        self.delay.set(delay);
    }
}
