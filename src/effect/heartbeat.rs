//! Heartbeat pulse
//!
//! A bright dot in the center whose glow shrinks over a cycle of ten frames.

use embassy_time::Duration;

use super::Effect;
use super::speed::FrameDelay;
use crate::{
    cell::MAX_LEVEL,
    framebuffer::QuantizedFramebuffer,
    grid::CENTER_POINT,
    image::DeviceImage,
    input::InputSnapshot,
};

/// Frames per heartbeat
pub const BEAT_FRAMES: u8 = 10;

pub(crate) const DEFAULT_DELAY: Duration = Duration::from_millis(100);

/// Heartbeat effect
#[derive(Debug, Clone)]
pub struct HeartbeatEffect {
    buffer: QuantizedFramebuffer,
    /// Frame within the current beat
    phase: u8,
    delay: FrameDelay,
}

impl Default for HeartbeatEffect {
    fn default() -> Self {
        Self::new(DEFAULT_DELAY)
    }
}

impl HeartbeatEffect {
    pub const fn new(delay: Duration) -> Self {
        Self {
            buffer: QuantizedFramebuffer::new(),
            phase: 0,
            delay: FrameDelay::new(delay),
        }
    }

    /// Falloff used for a frame of the beat
    ///
    /// The glow starts wide and tightens towards the end of the beat.
    pub fn falloff(phase: u8) -> f32 {
        f32::from(phase + 1) / 2.0
    }
}

impl Effect for HeartbeatEffect {
    fn step(&mut self, input: &InputSnapshot) -> DeviceImage {
        // Buttons are read once per beat, after its last frame was shown
        if self.phase == BEAT_FRAMES {
            self.phase = 0;
            self.delay.adjust(input.buttons);
        }

        self.buffer.splat_point(
            CENTER_POINT,
            CENTER_POINT,
            MAX_LEVEL,
            Self::falloff(self.phase),
        );
        self.phase += 1;

        self.buffer.render()
    }

    fn reset(&mut self) {
        self.buffer.clear();
        self.phase = 0;
    }

    fn frame_delay(&self) -> Duration {
        self.delay.get()
    }

    fn set_frame_delay(&mut self, delay: Duration) {
        self.delay.set(delay);
    }
}
