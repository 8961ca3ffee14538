//! Desktop preview app for myrtio-matrix-composer effects
//!
//! Renders the 5x5 matrix in a window. Buttons A and B are held with the
//! mouse (or the A/B keys), the tilt sliders feed the accelerometer, and
//! effect changes go through the control channel like on the device.

use std::time::Instant as StdInstant;

use eframe::egui::{self};
use myrtio_matrix_composer::{
    Acceleration, Buttons, ControlChannel, ControlIntent, ControlSender, DeviceImage, EffectId,
    InputSnapshot, Player, PlayerConfig,
    grid::SIZE,
    output::{Rgb, level_color},
};

/// Size of each LED square in pixels
const LED_SIZE: f32 = 48.0;

/// Gap between LEDs
const LED_GAP: f32 = 8.0;

/// Highest accelerometer reading the tilt sliders produce, in milli-g
const TILT_RANGE: f32 = 1024.0;

/// Control channel size
const CONTROL_CHANNEL_SIZE: usize = 8;

/// Static control channel for communication between UI and player
static CONTROL_CHANNEL: ControlChannel<CONTROL_CHANNEL_SIZE> =
    ControlChannel::<CONTROL_CHANNEL_SIZE>::new();

fn main() -> eframe::Result<()> {
    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([520.0, 560.0])
            .with_title("Matrix Composer Preview"),
        ..Default::default()
    };

    eframe::run_native(
        "myrtio-matrix-preview",
        options,
        Box::new(|_cc| Ok(Box::new(PreviewApp::new()))),
    )
}

struct PreviewApp {
    /// The player instance
    player: Player<'static, CONTROL_CHANNEL_SIZE>,
    /// Control sender for UI changes
    control: ControlSender<'static, CONTROL_CHANNEL_SIZE>,

    /// Currently selected effect ID
    effect_id: EffectId,
    /// Last rendered image
    image: DeviceImage,
    /// Synthetic time in milliseconds
    t_ms: u64,
    /// Synthetic time of the next frame
    next_frame_ms: u64,
    /// Wall-clock reference for delta time
    last_frame: StdInstant,
    /// Whether animation is playing
    playing: bool,
    /// Time scale multiplier (1.0 = realtime)
    time_scale: f32,
    /// Base LED color
    color: [u8; 3],
    /// Simulated tilt, -1.0..=1.0 per axis
    tilt: [f32; 2],
    /// Buttons held during the last UI frame
    buttons: Buttons,
}

impl PreviewApp {
    fn new() -> Self {
        let config = PlayerConfig::default();
        let player = Player::new(CONTROL_CHANNEL.receiver(), &config);

        Self {
            player,
            control: CONTROL_CHANNEL.sender(),
            effect_id: config.effect,
            image: DeviceImage::new(),
            t_ms: 0,
            next_frame_ms: 0,
            last_frame: StdInstant::now(),
            playing: true,
            time_scale: 1.0,
            color: [255, 60, 40],
            tilt: [0.0, 0.0],
            buttons: Buttons::RELEASED,
        }
    }

    fn send(&self, intent: ControlIntent) {
        let _ = self.control.try_send(intent);
    }

    fn input(&self) -> InputSnapshot {
        InputSnapshot {
            buttons: self.buttons,
            acceleration: Acceleration::new(
                self.tilt[0] * TILT_RANGE,
                self.tilt[1] * TILT_RANGE,
                0.0,
            ),
        }
    }

    /// Update synthetic time based on wall clock and time scale
    fn update_time(&mut self) {
        let now = StdInstant::now();
        let delta = now.duration_since(self.last_frame);
        self.last_frame = now;

        if self.playing {
            let delta_ms_f64 = delta.as_secs_f64() * 1000.0 * f64::from(self.time_scale);
            let delta_ms_f64 = if delta_ms_f64.is_finite() {
                #[allow(clippy::cast_precision_loss)]
                delta_ms_f64.clamp(0.0, u64::MAX as f64)
            } else {
                0.0
            };
            #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
            let delta_ms = delta_ms_f64 as u64;
            self.t_ms = self.t_ms.wrapping_add(delta_ms);
        }
    }

    /// Render a frame when the current effect's delay has passed
    fn advance(&mut self) {
        if !self.playing || self.t_ms < self.next_frame_ms {
            return;
        }
        let input = self.input();
        self.image = *self.player.render(&input);
        self.next_frame_ms = self.t_ms + self.player.frame_delay().as_millis();
    }
}

impl eframe::App for PreviewApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        self.update_time();
        self.advance();

        // Request continuous repaint for animation
        ctx.request_repaint();

        let (key_a, key_b) = ctx.input(|i| (i.key_down(egui::Key::A), i.key_down(egui::Key::B)));

        egui::CentralPanel::default().show(ctx, |ui| {
            ui.horizontal(|ui| {
                if ui.button("⏮ Reset").clicked() {
                    self.send(ControlIntent::Reset);
                    self.next_frame_ms = self.t_ms;
                }
                if ui
                    .button(if self.playing { "⏸ Pause" } else { "▶ Play" })
                    .clicked()
                {
                    self.playing = !self.playing;
                }

                ui.add_space(8.0);
                ui.label("Speed:");
                ui.add(egui::Slider::new(&mut self.time_scale, 0.1..=5.0).logarithmic(true));
            });

            ui.add_space(4.0);

            ui.horizontal(|ui| {
                ui.label("Effect:");
                let mut selected_effect = self.effect_id;
                egui::ComboBox::from_id_salt("effect_selector")
                    .selected_text(self.effect_id.as_str())
                    .show_ui(ui, |ui| {
                        for effect in EffectId::ALL {
                            ui.selectable_value(&mut selected_effect, effect, effect.as_str());
                        }
                    });
                if selected_effect != self.effect_id {
                    self.effect_id = selected_effect;
                    self.send(ControlIntent::SwitchEffect(selected_effect));
                    self.next_frame_ms = self.t_ms;
                }

                ui.add_space(8.0);
                ui.label("Color:");
                ui.color_edit_button_srgb(&mut self.color);
            });

            ui.add_space(4.0);

            ui.horizontal(|ui| {
                ui.label("Tilt X:");
                ui.add(egui::Slider::new(&mut self.tilt[0], -1.0..=1.0));
                ui.label("Tilt Y:");
                ui.add(egui::Slider::new(&mut self.tilt[1], -1.0..=1.0));
                if ui.button("Level").clicked() {
                    self.tilt = [0.0, 0.0];
                }
            });

            ui.add_space(4.0);

            ui.horizontal(|ui| {
                let a = ui.button("  A  ").is_pointer_button_down_on();
                let b = ui.button("  B  ").is_pointer_button_down_on();
                self.buttons = Buttons::new(a || key_a, b || key_b);
                ui.label(format!("delay: {}ms", self.player.frame_delay().as_millis()));
            });

            ui.add_space(16.0);

            // === Matrix Display ===
            let led_pitch = LED_SIZE + LED_GAP;
            #[allow(clippy::cast_precision_loss)]
            let side = SIZE as f32 * led_pitch;
            let (response, painter) =
                ui.allocate_painter(egui::vec2(side, side), egui::Sense::hover());
            let origin = response.rect.min;
            let base = Rgb {
                r: self.color[0],
                g: self.color[1],
                b: self.color[2],
            };

            #[allow(clippy::cast_precision_loss)]
            for (row, levels) in self.image.rows().iter().enumerate() {
                for (column, level) in levels.iter().enumerate() {
                    let x = origin.x + column as f32 * led_pitch;
                    let y = origin.y + row as f32 * led_pitch;
                    let rect = egui::Rect::from_min_size(
                        egui::pos2(x, y),
                        egui::vec2(LED_SIZE, LED_SIZE),
                    );
                    let pixel = level_color(base, *level);
                    painter.rect_filled(rect, 6.0, egui::Color32::from_rgb(pixel.r, pixel.g, pixel.b));
                }
            }
        });
    }
}
