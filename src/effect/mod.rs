//! Effect system with compile-time known effect variants
//!
//! All effects are stored in an enum to avoid heap allocations.
//! Each effect implements the `Effect` trait and owns its framebuffer.

mod balance;
mod heartbeat;
mod snake;
pub mod speed;
mod waves;

use embassy_time::Duration;
pub use balance::BalanceEffect;
pub use heartbeat::{BEAT_FRAMES, HeartbeatEffect};
pub use snake::{SEGMENTS, SnakeEffect};
pub use waves::{WAVE_LENGTH, WavesEffect};

use crate::{image::DeviceImage, input::InputSnapshot};

const EFFECT_NAME_HEARTBEAT: &str = "heartbeat";
const EFFECT_NAME_BALANCE: &str = "balance";
const EFFECT_NAME_SNAKE: &str = "snake";
const EFFECT_NAME_FADING_SNAKE: &str = "fading_snake";
const EFFECT_NAME_WAVES: &str = "waves";

const EFFECT_ID_HEARTBEAT: u8 = 0;
const EFFECT_ID_BALANCE: u8 = 1;
const EFFECT_ID_SNAKE: u8 = 2;
const EFFECT_ID_FADING_SNAKE: u8 = 3;
const EFFECT_ID_WAVES: u8 = 4;

pub trait Effect {
    /// Advance the animation by one frame and return the image to show
    fn step(&mut self, input: &InputSnapshot) -> DeviceImage;

    /// Reset effect state
    fn reset(&mut self) {}

    /// Delay to wait after the current frame
    fn frame_delay(&self) -> Duration;

    /// Override the frame delay
    fn set_frame_delay(&mut self, delay: Duration);
}

/// Effect slot - enum containing all possible effects
#[derive(Debug, Clone)]
pub enum EffectSlot {
    /// Pulsing dot in the center
    Heartbeat(HeartbeatEffect),
    /// Droplet rolling with the device tilt
    Balance(BalanceEffect),
    /// Sine snake on device levels
    Snake(SnakeEffect<u8>),
    /// Sine snake on float intensities
    FadingSnake(SnakeEffect<f32>),
    /// Rolling waves
    Waves(WavesEffect),
}

/// Known effect ids that can be requested.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[repr(u8)]
pub enum EffectId {
    Heartbeat = EFFECT_ID_HEARTBEAT,
    Balance = EFFECT_ID_BALANCE,
    Snake = EFFECT_ID_SNAKE,
    FadingSnake = EFFECT_ID_FADING_SNAKE,
    Waves = EFFECT_ID_WAVES,
}

impl Default for EffectSlot {
    fn default() -> Self {
        Self::Heartbeat(HeartbeatEffect::default())
    }
}

impl EffectId {
    /// All effects in id order
    pub const ALL: [Self; 5] = [
        Self::Heartbeat,
        Self::Balance,
        Self::Snake,
        Self::FadingSnake,
        Self::Waves,
    ];

    pub fn from_raw(value: u8) -> Option<Self> {
        Some(match value {
            EFFECT_ID_HEARTBEAT => Self::Heartbeat,
            EFFECT_ID_BALANCE => Self::Balance,
            EFFECT_ID_SNAKE => Self::Snake,
            EFFECT_ID_FADING_SNAKE => Self::FadingSnake,
            EFFECT_ID_WAVES => Self::Waves,
            _ => return None,
        })
    }

    /// Frame delay the effect was tuned for
    pub const fn default_delay(self) -> Duration {
        match self {
            Self::Heartbeat => heartbeat::DEFAULT_DELAY,
            Self::Balance => balance::DEFAULT_DELAY,
            Self::Snake | Self::FadingSnake => snake::DEFAULT_DELAY,
            Self::Waves => waves::DEFAULT_DELAY,
        }
    }

    pub fn to_slot(self) -> EffectSlot {
        let delay = self.default_delay();
        match self {
            Self::Heartbeat => EffectSlot::Heartbeat(HeartbeatEffect::new(delay)),
            Self::Balance => EffectSlot::Balance(BalanceEffect::new(delay)),
            Self::Snake => EffectSlot::Snake(SnakeEffect::quantized(delay)),
            Self::FadingSnake => EffectSlot::FadingSnake(SnakeEffect::fading(delay)),
            Self::Waves => EffectSlot::Waves(WavesEffect::new(delay)),
        }
    }

    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Heartbeat => EFFECT_NAME_HEARTBEAT,
            Self::Balance => EFFECT_NAME_BALANCE,
            Self::Snake => EFFECT_NAME_SNAKE,
            Self::FadingSnake => EFFECT_NAME_FADING_SNAKE,
            Self::Waves => EFFECT_NAME_WAVES,
        }
    }

    pub fn parse_from_str(s: &str) -> Option<Self> {
        match s {
            EFFECT_NAME_HEARTBEAT => Some(Self::Heartbeat),
            EFFECT_NAME_BALANCE => Some(Self::Balance),
            EFFECT_NAME_SNAKE => Some(Self::Snake),
            EFFECT_NAME_FADING_SNAKE => Some(Self::FadingSnake),
            EFFECT_NAME_WAVES => Some(Self::Waves),
            _ => None,
        }
    }
}

impl EffectSlot {
    /// Render the next frame of the current effect
    pub fn step(&mut self, input: &InputSnapshot) -> DeviceImage {
        match self {
            Self::Heartbeat(effect) => effect.step(input),
            Self::Balance(effect) => effect.step(input),
            Self::Snake(effect) => effect.step(input),
            Self::FadingSnake(effect) => effect.step(input),
            Self::Waves(effect) => effect.step(input),
        }
    }

    /// Reset the effect state
    pub fn reset(&mut self) {
        match self {
            Self::Heartbeat(effect) => Effect::reset(effect),
            Self::Balance(effect) => Effect::reset(effect),
            Self::Snake(effect) => Effect::reset(effect),
            Self::FadingSnake(effect) => Effect::reset(effect),
            Self::Waves(effect) => Effect::reset(effect),
        }
    }

    /// Get the effect ID for external observation
    pub fn id(&self) -> EffectId {
        match self {
            Self::Heartbeat(_) => EffectId::Heartbeat,
            Self::Balance(_) => EffectId::Balance,
            Self::Snake(_) => EffectId::Snake,
            Self::FadingSnake(_) => EffectId::FadingSnake,
            Self::Waves(_) => EffectId::Waves,
        }
    }

    pub fn frame_delay(&self) -> Duration {
        match self {
            Self::Heartbeat(effect) => effect.frame_delay(),
            Self::Balance(effect) => effect.frame_delay(),
            Self::Snake(effect) => effect.frame_delay(),
            Self::FadingSnake(effect) => effect.frame_delay(),
            Self::Waves(effect) => effect.frame_delay(),
        }
    }

    pub fn set_frame_delay(&mut self, delay: Duration) {
        match self {
            Self::Heartbeat(effect) => effect.set_frame_delay(delay),
            Self::Balance(effect) => effect.set_frame_delay(delay),
            Self::Snake(effect) => effect.set_frame_delay(delay),
            Self::FadingSnake(effect) => effect.set_frame_delay(delay),
            Self::Waves(effect) => effect.set_frame_delay(delay),
        }
    }
}
