//! Snake effects
//!
//! The head enters on the right edge following a sine path while the body
//! scrolls left and fades. The quantized snake keeps a short tail that never
//! fully fades out; the float snake fades smoothly to black.

use core::f32::consts::TAU;

use embassy_time::Duration;
use libm::{roundf, sinf};

use super::Effect;
use super::speed::FrameDelay;
use crate::{
    cell::{Cell, MAX_LEVEL},
    framebuffer::Framebuffer,
    grid::{CENTER_POINT, LAST, LAST_POINT},
    image::DeviceImage,
    input::InputSnapshot,
};

/// Frames for the head to travel one full sine period
pub const SEGMENTS: u8 = 9;

pub(crate) const DEFAULT_DELAY: Duration = Duration::from_millis(100);

const QUANTIZED_FADE: f32 = 0.8;
const FLOAT_FADE: f32 = 0.9;

/// Snake effect over a framebuffer of cells `T`
#[derive(Debug, Clone)]
pub struct SnakeEffect<T: Cell> {
    buffer: Framebuffer<T>,
    /// Level written at the head
    head: T,
    /// Dim factor applied to the body every frame
    fade: f32,
    /// Segment of the current sine period
    phase: u8,
    delay: FrameDelay,
}

impl SnakeEffect<u8> {
    /// Snake on device levels
    pub fn quantized(delay: Duration) -> Self {
        Self::new(Framebuffer::new(), MAX_LEVEL, QUANTIZED_FADE, delay)
    }
}

impl SnakeEffect<f32> {
    /// Snake on float intensities with a smoothly fading tail
    pub fn fading(delay: Duration) -> Self {
        Self::new(Framebuffer::new(), 1.0, FLOAT_FADE, delay)
    }
}

impl<T: Cell> SnakeEffect<T> {
    /// Create a snake drawing into the given buffer
    ///
    /// The buffer's dim curve decides how the tail fades.
    pub fn new(buffer: Framebuffer<T>, head: T, fade: f32, delay: Duration) -> Self {
        Self {
            buffer,
            head,
            fade,
            phase: 0,
            delay: FrameDelay::new(delay),
        }
    }

    /// Row of the head for a segment of the sine period
    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    pub fn head_row(phase: u8) -> usize {
        let angle = f32::from(phase) * TAU / f32::from(SEGMENTS);
        let row = roundf(CENTER_POINT + CENTER_POINT * sinf(angle));
        row.clamp(0.0, LAST_POINT) as usize
    }

    /// Current framebuffer contents
    pub const fn buffer(&self) -> &Framebuffer<T> {
        &self.buffer
    }
}

impl<T: Cell> Effect for SnakeEffect<T> {
    fn step(&mut self, input: &InputSnapshot) -> DeviceImage {
        // Buttons are read once per sine period
        if self.phase == SEGMENTS {
            self.phase = 0;
            self.delay.adjust(input.buttons);
        }

        self.buffer.scroll_left(1, T::ZERO);
        self.buffer.dim(self.fade);
        self.buffer
            .set_cell(Self::head_row(self.phase), LAST, self.head);
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
