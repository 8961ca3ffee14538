//! Frame scheduling and timing utilities.
//!
//! Provides portable frame pacing without async/await or platform-specific timers.
//! Either call [`FrameScheduler::tick`] from your own loop and sleep for the
//! returned duration, or hand a [`FrameTimer`] to [`FrameScheduler::run`].

use embassy_time::{Duration, Instant};

#[cfg(feature = "esp32-log")]
use esp_println::println;

use crate::input::InputSource;
use crate::player::Player;
use crate::{FrameTimer, OutputDriver};

/// Number of frames we may fall behind before the schedule is reset.
///
/// If we fall behind by more than this, we skip the backlog instead of catching up.
pub const MAX_DRIFT_FRAMES: u64 = 2;

/// Result of a frame tick operation.
#[derive(Debug, Clone, Copy)]
pub struct FrameResult {
    /// The deadline for the next frame.
    pub next_deadline: Instant,
    /// How long to wait until the next frame (may be zero if behind schedule).
    pub sleep_duration: Duration,
}

/// Portable frame scheduler that manages timing without async.
///
/// This scheduler:
/// - Polls the input source once per frame
/// - Calls the player and output driver
/// - Paces frames by the current effect's frame delay, with drift correction
///
/// # Usage
///
/// ```ignore
/// let mut scheduler = FrameScheduler::new(player, display, inputs);
///
/// loop {
///     let now = Instant::from_millis(get_current_time_ms());
///     let result = scheduler.tick(now)?;
///
///     // Platform-specific sleep
///     sleep_ms(result.sleep_duration.as_millis());
/// }
/// ```
pub struct FrameScheduler<'a, O: OutputDriver, I: InputSource, const CONTROL_SIZE: usize> {
    output: O,
    input: I,
    player: Player<'a, CONTROL_SIZE>,
    next_frame: Instant,
}

impl<'a, O: OutputDriver, I: InputSource, const CONTROL_SIZE: usize>
    FrameScheduler<'a, O, I, CONTROL_SIZE>
{
    /// Create a new frame scheduler.
    pub fn new(player: Player<'a, CONTROL_SIZE>, output: O, input: I) -> Self {
        Self {
            output,
            input,
            player,
            next_frame: Instant::from_millis(0),
        }
    }

    /// Process one frame and return timing information.
    ///
    /// This method:
    /// 1. Applies drift correction if we've fallen too far behind
    /// 2. Polls the inputs and renders the current frame
    /// 3. Writes to the output driver
    /// 4. Returns the deadline for the next frame
    ///
    /// The caller is responsible for waiting until `next_deadline` before
    /// calling `tick` again.
    pub fn tick(&mut self, now: Instant) -> Result<FrameResult, O::Error> {
        // Drift correction: if we've fallen too far behind, reset to now
        // This prevents catch-up bursts after long stalls
        let max_drift_ms = self.player.frame_delay().as_millis() * MAX_DRIFT_FRAMES;
        if now.as_millis() > self.next_frame.as_millis() + max_drift_ms {
            #[cfg(feature = "esp32-log")]
            if self.next_frame.as_millis() > 0 {
                println!(
                    "[FrameScheduler.tick] behind by {}ms, resetting schedule",
                    now.as_millis() - self.next_frame.as_millis()
                );
            }
            self.next_frame = now;
        }

        // Render and output
        let input = self.input.poll();
        let frame = self.player.render(&input);
        self.output.write(frame)?;

        // The effect may have changed its delay while rendering
        self.next_frame += self.player.frame_delay();

        // Calculate sleep duration (may be zero if we're behind)
        let sleep_duration = if self.next_frame.as_millis() > now.as_millis() {
            Duration::from_millis(self.next_frame.as_millis() - now.as_millis())
        } else {
            Duration::from_millis(0)
        };

        Ok(FrameResult {
            next_deadline: self.next_frame,
            sleep_duration,
        })
    }

    /// Render frames until a stop intent arrives.
    ///
    /// Returns the number of frames written, or the first output error.
    pub fn run<T: FrameTimer>(&mut self, timer: &mut T) -> Result<u32, O::Error> {
        let mut frames: u32 = 0;
        loop {
            self.player.poll_control();
            if self.player.is_stopped() {
                return Ok(frames);
            }

            let result = self.tick(timer.now())?;
            frames = frames.saturating_add(1);
            timer.sleep(result.sleep_duration);
        }
    }

    /// Get a reference to the player.
    pub fn player(&self) -> &Player<'a, CONTROL_SIZE> {
        &self.player
    }

    /// Get a mutable reference to the player.
    pub fn player_mut(&mut self) -> &mut Player<'a, CONTROL_SIZE> {
        &mut self.player
    }

    /// Get a reference to the output driver.
    pub fn output(&self) -> &O {
        &self.output
    }
}
