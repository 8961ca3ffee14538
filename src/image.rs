use crate::cell::MAX_LEVEL;
use crate::grid::{LED_COUNT, SIZE};

/// A frame of device brightness levels, ready for the display
///
/// Rows are ordered top to bottom, every level is in `0..=MAX_LEVEL`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct DeviceImage {
    levels: [[u8; SIZE]; SIZE],
}

impl DeviceImage {
    /// Create a blank image
    pub const fn new() -> Self {
        Self {
            levels: [[0; SIZE]; SIZE],
        }
    }

    /// Create an image from rows of levels
    ///
    /// Levels above `MAX_LEVEL` are clamped.
    pub fn from_rows(mut levels: [[u8; SIZE]; SIZE]) -> Self {
        for level in levels.iter_mut().flatten() {
            *level = (*level).min(MAX_LEVEL);
        }
        Self { levels }
    }

    /// Level of a single LED
    pub const fn level(&self, row: usize, column: usize) -> u8 {
        self.levels[row][column]
    }

    /// All rows of the image
    pub const fn rows(&self) -> &[[u8; SIZE]; SIZE] {
        &self.levels
    }

    /// Iterate over levels in row-major order
    pub fn iter(&self) -> impl Iterator<Item = u8> + '_ {
        self.levels.iter().flatten().copied()
    }

    /// Flatten into row-major order, the layout display drivers expect
    pub fn to_bytes(&self) -> [u8; LED_COUNT] {
        let mut bytes = [0; LED_COUNT];
        for (byte, level) in bytes.iter_mut().zip(self.iter()) {
            *byte = level;
        }
        bytes
    }

    /// Check if every LED is off
    pub fn is_blank(&self) -> bool {
        self.iter().all(|level| level == 0)
    }
}
