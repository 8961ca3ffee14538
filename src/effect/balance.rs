//! Balancing droplet
//!
//! A soft droplet that rolls across the matrix as the device is tilted.
//! The position is fractional, so the droplet glides between LEDs instead of
//! jumping.

use embassy_time::Duration;

use super::Effect;
use super::speed::{FrameDelay, TiltSpeed};
use crate::{
    framebuffer::FloatFramebuffer,
    grid::{CENTER_POINT, LAST_POINT},
    image::DeviceImage,
    input::InputSnapshot,
};

/// Acceleration (milli-g) that moves the droplet by one LED per frame at
/// speed 1.0
const ACCELERATION_PER_LED: f32 = 1024.0;

const DROPLET_PEAK: f32 = 1.0;
const DROPLET_FALLOFF: f32 = 0.75;

/// The droplet is redrawn as fast as the display allows
pub(crate) const DEFAULT_DELAY: Duration = Duration::from_millis(0);

/// Balance effect
#[derive(Debug, Clone)]
pub struct BalanceEffect {
    buffer: FloatFramebuffer,
    /// Droplet column
    x: f32,
    /// Droplet row
    y: f32,
    speed: TiltSpeed,
    delay: FrameDelay,
}

impl Default for BalanceEffect {
    fn default() -> Self {
        Self::new(DEFAULT_DELAY)
    }
}

impl BalanceEffect {
    pub fn new(delay: Duration) -> Self {
        Self {
            buffer: FloatFramebuffer::new(),
            x: CENTER_POINT,
            y: CENTER_POINT,
            speed: TiltSpeed::default(),
            delay: FrameDelay::new(delay),
        }
    }

    /// Droplet position as `(row, column)`
    pub const fn position(&self) -> (f32, f32) {
        (self.y, self.x)
    }

    /// Current tilt speed
    pub const fn speed(&self) -> f32 {
        self.speed.get()
    }

    fn roll(position: f32, acceleration: f32, speed: f32) -> f32 {
        (position + acceleration / ACCELERATION_PER_LED * speed).clamp(0.0, LAST_POINT)
    }
}

impl Effect for BalanceEffect {
    fn step(&mut self, input: &InputSnapshot) -> DeviceImage {
        let speed = self.speed.get();
        self.x = Self::roll(self.x, input.acceleration.x, speed);
        self.y = Self::roll(self.y, input.acceleration.y, speed);

        self.buffer.clear();
        self.buffer
            .splat_point(self.y, self.x, DROPLET_PEAK, DROPLET_FALLOFF);
        let image = self.buffer.render();

        self.speed.adjust(input.buttons);
        image
    }

    fn reset(&mut self) {
        self.buffer.clear();
        self.x = CENTER_POINT;
        self.y = CENTER_POINT;
        self.speed = TiltSpeed::default();
    }

    fn frame_delay(&self) -> Duration {
        self.delay.get()
    }

    fn set_frame_delay(&mut self, delay: Duration) {
        self.delay.set(delay);
    }
}
