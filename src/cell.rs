//! Cell storage types
//!
//! A framebuffer is generic over its cell type. The cell type decides how
//! values are stored and when they are clipped:
//! - `u8` cells hold quantized device levels and clamp on every write
//! - `f32` cells hold unbounded intensities and are clipped only when the
//!   buffer is rendered to a [`DeviceImage`](crate::image::DeviceImage)

use core::fmt::Debug;

use libm::{rintf, roundf, truncf};

/// Highest brightness level accepted by the display
///
/// `MicroPython` images on the micro:bit use 0-9, which is what the
/// animations were tuned against.
pub const MAX_LEVEL: u8 = 9;

/// Scale applied to float intensities (0.0-1.0) when quantizing to levels
pub const LEVEL_SCALE: f32 = 9.0;

/// How [`Cell::dim`] scales a value
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DimCurve {
    /// `value * factor`
    #[default]
    Linear,
    /// `value * value * factor`
    ///
    /// Fades bright cells slowly and dim cells quickly. This is how the
    /// fading snake was shipped.
    Squared,
}

/// Numeric type stored in a framebuffer cell
pub trait Cell: Copy + PartialEq + Debug {
    /// Value of an unlit cell
    const ZERO: Self;

    /// Dim curve used by buffers of this type unless overridden
    const DIM_CURVE: DimCurve;

    /// Bring a value written by the caller into the storable range
    fn normalize(self) -> Self;

    /// Convert a computed gradient value into a cell value
    fn from_gradient(value: f32) -> Self;

    /// Value as a float, used as the peak of a gradient
    fn intensity(self) -> f32;

    /// Add another cell value to this one
    fn accumulate(self, other: Self) -> Self;

    /// Scale the value down by `factor`
    fn dim(self, factor: f32, curve: DimCurve) -> Self;

    /// Quantize to a device level in `0..=MAX_LEVEL`
    fn to_level(self) -> u8;
}

/// Clamp a float into the device level range
///
/// NaN maps to 0.
#[inline]
#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
fn clamp_to_level(value: f32) -> u8 {
    value.clamp(0.0, f32::from(MAX_LEVEL)) as u8
}

impl Cell for u8 {
    const ZERO: Self = 0;
    const DIM_CURVE: DimCurve = DimCurve::Linear;

    #[inline]
    fn normalize(self) -> Self {
        self.min(MAX_LEVEL)
    }

    #[inline]
    fn from_gradient(value: f32) -> Self {
        clamp_to_level(truncf(value))
    }

    #[inline]
    fn intensity(self) -> f32 {
        f32::from(self)
    }

    #[inline]
    fn accumulate(self, other: Self) -> Self {
        self.saturating_add(other).min(MAX_LEVEL)
    }

    #[inline]
    fn dim(self, factor: f32, curve: DimCurve) -> Self {
        let value = f32::from(self);
        let scaled = match curve {
            DimCurve::Linear => value * factor,
            DimCurve::Squared => value * value * factor,
        };
        // Ties go to even, so a dimmed level 1 still reaches 0
        clamp_to_level(rintf(scaled))
    }

    #[inline]
    fn to_level(self) -> u8 {
        self.min(MAX_LEVEL)
    }
}

impl Cell for f32 {
    const ZERO: Self = 0.0;
    const DIM_CURVE: DimCurve = DimCurve::Squared;

    #[inline]
    fn normalize(self) -> Self {
        self
    }

    #[inline]
    fn from_gradient(value: f32) -> Self {
        value
    }

    #[inline]
    fn intensity(self) -> f32 {
        self
    }

    #[inline]
    fn accumulate(self, other: Self) -> Self {
        self + other
    }

    #[inline]
    fn dim(self, factor: f32, curve: DimCurve) -> Self {
        match curve {
            DimCurve::Linear => self * factor,
            DimCurve::Squared => self * self * factor,
        }
    }

    #[inline]
    fn to_level(self) -> u8 {
        clamp_to_level(roundf(self * LEVEL_SCALE))
    }
}
