#![no_std]

pub mod cell;
pub mod control;
pub mod effect;
pub mod frame_scheduler;
pub mod framebuffer;
pub mod grid;
pub mod image;
pub mod input;
pub mod math8;
pub mod output;
pub mod player;

pub use cell::{Cell, DimCurve, LEVEL_SCALE, MAX_LEVEL};
pub use control::{ControlChannel, ControlIntent, ControlReceiver, ControlSender, TrySendError};
pub use effect::{Effect, EffectId, EffectSlot};
pub use frame_scheduler::{FrameResult, FrameScheduler};
pub use framebuffer::{FloatFramebuffer, Framebuffer, QuantizedFramebuffer, ScrollDirection};
pub use image::DeviceImage;
pub use input::{Acceleration, Buttons, InputSnapshot, InputSource};
pub use player::{Player, PlayerConfig};

pub use embassy_time::{Duration, Instant};

/// Abstract display driver trait
///
/// Implement this trait to support different hardware platforms.
/// The frame scheduler is generic over this trait.
pub trait OutputDriver {
    /// Error reported by the hardware
    type Error;

    /// Show an image on the matrix
    fn write(&mut self, image: &DeviceImage) -> Result<(), Self::Error>;
}

/// Abstract time source used by [`FrameScheduler::run`]
pub trait FrameTimer {
    /// Current time
    fn now(&mut self) -> Instant;

    /// Block for the given duration
    fn sleep(&mut self, duration: Duration);
}
