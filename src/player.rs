use embassy_time::Duration;

#[cfg(feature = "esp32-log")]
use esp_println::println;

use crate::control::{ControlIntent, ControlReceiver};
use crate::effect::{EffectId, EffectSlot};
use crate::image::DeviceImage;
use crate::input::InputSnapshot;

/// Configuration for the player
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PlayerConfig {
    /// Effect shown after start
    pub effect: EffectId,
    /// Frame delay of the first effect, `None` uses its tuned default
    pub frame_delay: Option<Duration>,
}

impl Default for PlayerConfig {
    fn default() -> Self {
        Self {
            effect: EffectId::Heartbeat,
            frame_delay: None,
        }
    }
}

/// Player - owns the current effect and renders it frame by frame
pub struct Player<'a, const CONTROL_SIZE: usize> {
    // External dependencies
    control: ControlReceiver<'a, CONTROL_SIZE>,

    // Internal state
    effect: EffectSlot,
    frame: DeviceImage,
    stopped: bool,
}

impl<'a, const CONTROL_SIZE: usize> Player<'a, CONTROL_SIZE> {
    /// Create a new player reading intents from `control`
    pub fn new(control: ControlReceiver<'a, CONTROL_SIZE>, config: &PlayerConfig) -> Self {
        let mut effect = config.effect.to_slot();
        if let Some(delay) = config.frame_delay {
            effect.set_frame_delay(delay);
        }
        Self {
            control,
            effect,
            frame: DeviceImage::new(),
            stopped: false,
        }
    }

    /// Process one frame
    ///
    /// Applies pending intents, then advances the current effect.
    pub fn render(&mut self, input: &InputSnapshot) -> &DeviceImage {
        self.poll_control();
        self.frame = self.effect.step(input);
        &self.frame
    }

    /// Apply pending intents from the channel (non-blocking)
    pub fn poll_control(&mut self) {
        while let Some(intent) = self.control.try_receive() {
            self.apply(intent);
        }
    }

    /// Whether a stop intent has been received
    pub const fn is_stopped(&self) -> bool {
        self.stopped
    }

    /// Last rendered frame
    pub const fn frame(&self) -> &DeviceImage {
        &self.frame
    }

    /// Id of the current effect
    pub fn effect_id(&self) -> EffectId {
        self.effect.id()
    }

    /// Delay to wait after the last rendered frame
    pub fn frame_delay(&self) -> Duration {
        self.effect.frame_delay()
    }

    fn apply(&mut self, intent: ControlIntent) {
        match intent {
            ControlIntent::SwitchEffect(effect) => self.set_effect(effect),
            ControlIntent::SetFrameDelay(delay) => {
                #[cfg(feature = "esp32-log")]
                println!("[Player.apply] frame delay set to {}ms", delay.as_millis());
                self.effect.set_frame_delay(delay);
            }
            ControlIntent::Reset => self.effect.reset(),
            ControlIntent::Stop => {
                #[cfg(feature = "esp32-log")]
                println!("[Player.apply] stop requested");
                self.stopped = true;
            }
        }
    }

    /// Set new effect by id
    fn set_effect(&mut self, effect: EffectId) {
        #[cfg(feature = "esp32-log")]
        println!("[Player.set_effect] switching to {}", effect.as_str());
        self.effect = effect.to_slot();
        self.frame = DeviceImage::new();
    }
}
