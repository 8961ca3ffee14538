//! Control intents
//!
//! A bounded, interrupt safe queue of [`ControlIntent`]s built on
//! `critical-section` and `heapless::Deque`. Button handlers, a serial
//! console or a desktop UI push intents; the player drains them once per
//! frame.

use core::cell::RefCell;

use critical_section::Mutex;
use embassy_time::Duration;
use heapless::Deque;

use crate::effect::EffectId;

/// Request to change what the player is doing
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ControlIntent {
    /// Replace the current effect, starting from a blank matrix
    SwitchEffect(EffectId),
    /// Override the current effect's frame delay
    SetFrameDelay(Duration),
    /// Restart the current effect
    Reset,
    /// Leave the run loop after the current frame
    Stop,
}

/// Error returned when trying to send to a full channel.
///
/// Carries the rejected intent.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TrySendError(pub ControlIntent);

/// Bounded queue of control intents
pub struct ControlChannel<const SIZE: usize> {
    queue: Mutex<RefCell<Deque<ControlIntent, SIZE>>>,
}

impl<const SIZE: usize> ControlChannel<SIZE> {
    /// Create a new empty channel.
    pub const fn new() -> Self {
        Self {
            queue: Mutex::new(RefCell::new(Deque::new())),
        }
    }

    /// Get a sender handle for this channel.
    pub const fn sender(&self) -> ControlSender<'_, SIZE> {
        ControlSender { channel: self }
    }

    /// Get a receiver handle for this channel.
    pub const fn receiver(&self) -> ControlReceiver<'_, SIZE> {
        ControlReceiver { channel: self }
    }

    fn try_send(&self, intent: ControlIntent) -> Result<(), TrySendError> {
        critical_section::with(|cs| {
            let mut queue = self.queue.borrow(cs).borrow_mut();
            queue.push_back(intent).map_err(TrySendError)
        })
    }

    fn try_receive(&self) -> Option<ControlIntent> {
        critical_section::with(|cs| self.queue.borrow(cs).borrow_mut().pop_front())
    }
}

impl<const SIZE: usize> Default for ControlChannel<SIZE> {
    fn default() -> Self {
        Self::new()
    }
}

/// Sending half of a [`ControlChannel`]
#[derive(Clone, Copy)]
pub struct ControlSender<'a, const SIZE: usize> {
    channel: &'a ControlChannel<SIZE>,
}

impl<const SIZE: usize> ControlSender<'_, SIZE> {
    /// Queue an intent
    ///
    /// Returns `Err(TrySendError(intent))` if the channel is full.
    pub fn try_send(&self, intent: ControlIntent) -> Result<(), TrySendError> {
        self.channel.try_send(intent)
    }

    /// Ask the run loop to stop
    pub fn stop(&self) -> Result<(), TrySendError> {
        self.try_send(ControlIntent::Stop)
    }
}

/// Receiving half of a [`ControlChannel`]
#[derive(Clone, Copy)]
pub struct ControlReceiver<'a, const SIZE: usize> {
    channel: &'a ControlChannel<SIZE>,
}

impl<const SIZE: usize> ControlReceiver<'_, SIZE> {
    /// Take the oldest queued intent, if any
    pub fn try_receive(&self) -> Option<ControlIntent> {
        self.channel.try_receive()
    }
}
