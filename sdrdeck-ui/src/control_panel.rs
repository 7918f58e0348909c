use eframe::egui::{
    self, ComboBox, Context, DragValue, Grid, Key, Response, RichText, Slider, TextEdit, Ui,
};
use eframe::epaint::Color32;
use sdrdeck_messages::{DemodMode, Hertz, ReceiverSettings, SamplingMode};

use crate::presets::{SAMPLE_RATES, STEPS, sample_rate_label, step_label};
use crate::view::DisplayControls;
use crate::visualizer::wheel_ticks;

const READOUT: Color32 = Color32::from_rgb(0x4a, 0xde, 0x80);
const DIM: Color32 = Color32::from_rgb(0x15, 0x80, 0x3d);

/// Frequency entry on commit: any digits win, otherwise keep the current value.
pub fn commit_frequency(input: &str, current: Hertz) -> Hertz {
    Hertz::parse_digits(input).unwrap_or(current)
}

/// Bandwidth entry on commit: must be a positive whole number of Hz.
pub fn commit_bandwidth(input: &str, current: Hertz) -> Hertz {
    Hertz::parse_digits(input)
        .filter(|bw| bw.as_hz() > 0)
        .unwrap_or(current)
}

/// Left-hand receiver controls.
///
/// Text fields keep their own buffers while the operator types and are
/// re-synced whenever the underlying setting changes from elsewhere.
pub struct ControlPanel {
    freq_input: String,
    bandwidth_input: String,
    shown_frequency: Hertz,
    shown_bandwidth: Hertz,
    pub config_open: bool,
}

impl ControlPanel {
    pub fn new(settings: &ReceiverSettings) -> Self {
        Self {
            freq_input: settings.frequency.to_string(),
            bandwidth_input: settings.bandwidth.as_hz().to_string(),
            shown_frequency: settings.frequency,
            shown_bandwidth: settings.bandwidth,
            config_open: false,
        }
    }

    fn sync_inputs(&mut self, settings: &ReceiverSettings) {
        if settings.frequency != self.shown_frequency {
            self.shown_frequency = settings.frequency;
            self.freq_input = settings.frequency.to_string();
        }
        if settings.bandwidth != self.shown_bandwidth {
            self.shown_bandwidth = settings.bandwidth;
            self.bandwidth_input = settings.bandwidth.as_hz().to_string();
        }
    }

    pub fn ui(
        &mut self,
        ui: &mut Ui,
        settings: &mut ReceiverSettings,
        hover: Option<Hertz>,
        scanner_open: &mut bool,
    ) {
        self.sync_inputs(settings);

        ui.horizontal(|ui| {
            ui.toggle_value(&mut settings.playing, RichText::new("⏻ POWER").strong());
            ui.toggle_value(&mut self.config_open, "CONFIG");
            ui.toggle_value(scanner_open, "SCANNER");
        });
        ui.add_space(8.0);

        ui.group(|ui| {
            ui.small("FREQUENCY");
            let response = ui.add(
                TextEdit::singleline(&mut self.freq_input)
                    .font(egui::FontId::monospace(26.0))
                    .text_color(READOUT)
                    .horizontal_align(egui::Align::Center)
                    .desired_width(f32::INFINITY),
            );
            if committed(ui, &response) {
                settings.frequency = commit_frequency(&self.freq_input, settings.frequency);
                self.shown_frequency = settings.frequency;
                self.freq_input = settings.frequency.to_string();
            }
            let readout = hover.map_or_else(|| "---.---.---".to_string(), |hz| hz.to_string());
            ui.vertical_centered(|ui| {
                ui.label(RichText::new(readout).monospace().color(DIM));
            });
        });
        ui.add_space(8.0);

        ui.label(RichText::new("DEMODULATOR").strong().color(DIM));
        Grid::new("demod_modes").num_columns(3).show(ui, |ui| {
            for (i, mode) in DemodMode::ALL.into_iter().enumerate() {
                ui.selectable_value(&mut settings.mode, mode, mode.label());
                if i % 3 == 2 {
                    ui.end_row();
                }
            }
        });

        ui.horizontal(|ui| {
            ui.label("Bandwidth:");
            let response = ui.add(TextEdit::singleline(&mut self.bandwidth_input).desired_width(80.0));
            ui.label("Hz");
            if committed(ui, &response) {
                settings.bandwidth = commit_bandwidth(&self.bandwidth_input, settings.bandwidth);
                self.shown_bandwidth = settings.bandwidth;
                self.bandwidth_input = settings.bandwidth.as_hz().to_string();
            }
        });

        ui.horizontal(|ui| {
            ui.label("Step:");
            ComboBox::from_id_salt("step")
                .selected_text(step_label(settings.step))
                .show_ui(ui, |ui| {
                    for step in STEPS {
                        ui.selectable_value(&mut settings.step, step, step_label(step));
                    }
                });
        });

        ui.separator();

        ui.horizontal(|ui| {
            ui.label("SQL");
            ui.add(DragValue::new(&mut settings.squelch).speed(0.1));
        });
        ui.horizontal(|ui| {
            ui.label("GAIN");
            ui.add(
                Slider::new(&mut settings.gain, 0.0..=50.0)
                    .step_by(0.1)
                    .suffix(" dB"),
            );
        });
    }

    /// Device configuration window.
    pub fn show_config(&mut self, ctx: &Context, settings: &mut ReceiverSettings) {
        egui::Window::new("Device configuration")
            .open(&mut self.config_open)
            .collapsible(false)
            .resizable(false)
            .show(ctx, |ui| {
                ui.label("Sample rate");
                ComboBox::from_id_salt("sample_rate")
                    .selected_text(sample_rate_label(settings.sample_rate))
                    .width(200.0)
                    .show_ui(ui, |ui| {
                        for (label, rate) in SAMPLE_RATES {
                            ui.selectable_value(&mut settings.sample_rate, rate, label);
                        }
                    });

                ui.add_space(6.0);
                ui.label("Sampling mode");
                for mode in [SamplingMode::Quadrature, SamplingMode::DirectQ] {
                    ui.radio_value(&mut settings.sampling_mode, mode, mode.label());
                }

                ui.separator();
                ui.horizontal(|ui| {
                    ui.checkbox(&mut settings.tuner_agc, "Tuner AGC");
                    ui.add_space(12.0);
                    ui.label("PPM");
                    ui.add(DragValue::new(&mut settings.ppm).range(-1000..=1000));
                });
            });
    }
}

/// Enter pressed in a single-line field.
fn committed(ui: &Ui, response: &Response) -> bool {
    response.lost_focus() && ui.input(|i| i.key_pressed(Key::Enter))
}

/// Vertical offset/range/contrast strip beside the visualizer. Each slider
/// also follows the mouse wheel while hovered.
pub fn display_controls(ui: &mut Ui, controls: &mut DisplayControls) {
    let (lo, hi) = DisplayControls::OFFSET_LIMITS;
    let ticks = vertical_slider(ui, "OFF", &mut controls.offset, lo..=hi);
    controls.nudge_offset(ticks);

    let (lo, hi) = DisplayControls::RANGE_LIMITS;
    let ticks = vertical_slider(ui, "RNG", &mut controls.range, lo..=hi);
    controls.nudge_range(ticks);

    let (lo, hi) = DisplayControls::CONTRAST_LIMITS;
    let ticks = vertical_slider(ui, "CON", &mut controls.contrast, lo..=hi);
    controls.nudge_contrast(ticks);
}

fn vertical_slider(
    ui: &mut Ui,
    label: &str,
    value: &mut f32,
    range: std::ops::RangeInclusive<f32>,
) -> i32 {
    ui.add_space(12.0);
    ui.label(RichText::new(label).small().strong().color(DIM));
    let response = ui.add(
        Slider::new(value, range)
            .vertical()
            .step_by(1.0)
            .show_value(false),
    );
    if response.hovered() {
        wheel_ticks(ui)
    } else {
        0
    }
}
