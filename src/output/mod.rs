//! Output adapters
//!
//! Boards whose display accepts device levels directly can implement
//! [`OutputDriver`](crate::OutputDriver) with [`DeviceImage::to_bytes`].
//! Addressable RGB matrices go through [`SmartLedOutput`].
//!
//! [`DeviceImage::to_bytes`]: crate::image::DeviceImage::to_bytes

mod led_matrix;

pub use led_matrix::{LEVEL_BRIGHTNESS, SmartLedOutput, level_color};

pub type Rgb = smart_leds::RGB8;
