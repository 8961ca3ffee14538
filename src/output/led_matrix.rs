//! Addressable LED matrix output
//!
//! Drives a 5x5 WS2812-style matrix wired in row-major order. The matrix is
//! monochrome from the engine's point of view: every LED shows the same base
//! color, scaled by its level.

use smart_leds::SmartLedsWrite;

use super::Rgb;
use crate::OutputDriver;
use crate::cell::MAX_LEVEL;
use crate::image::DeviceImage;
use crate::math8::scale8;

/// Brightness (0-255) for each device level
///
/// Roughly perceptual, so each level step looks evenly spaced.
pub const LEVEL_BRIGHTNESS: [u8; MAX_LEVEL as usize + 1] =
    [0, 4, 9, 17, 30, 48, 74, 110, 164, 255];

/// Scale a base color to a device level
pub fn level_color(color: Rgb, level: u8) -> Rgb {
    let brightness = LEVEL_BRIGHTNESS[usize::from(level.min(MAX_LEVEL))];
    Rgb {
        r: scale8(color.r, brightness),
        g: scale8(color.g, brightness),
        b: scale8(color.b, brightness),
    }
}

/// Output driver for `smart-leds` writers
#[derive(Debug)]
pub struct SmartLedOutput<W> {
    writer: W,
    color: Rgb,
}

impl<W> SmartLedOutput<W> {
    /// Create a new output showing levels in `color`
    pub const fn new(writer: W, color: Rgb) -> Self {
        Self { writer, color }
    }

    /// Change the base color, applied from the next frame
    pub fn set_color(&mut self, color: Rgb) {
        self.color = color;
    }

    /// Current base color
    pub const fn color(&self) -> Rgb {
        self.color
    }

    /// Release the underlying writer
    pub fn into_inner(self) -> W {
        self.writer
    }
}

impl<W> OutputDriver for SmartLedOutput<W>
where
    W: SmartLedsWrite,
    Rgb: Into<W::Color>,
{
    type Error = W::Error;

    fn write(&mut self, image: &DeviceImage) -> Result<(), Self::Error> {
        let color = self.color;
        self.writer
            .write(image.iter().map(|level| level_color(color, level)))
    }
}
