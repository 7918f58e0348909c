mod colormap;
mod control_panel;
mod presets;
mod raster;
mod scanner;
mod scheduler;
mod smeter;
mod spectrum_line;
mod state;
mod tuning;
mod view;
mod visualizer;

use eframe::egui::{self, Rect, RichText, vec2};
use eframe::epaint::Color32;
use sdrdeck_messages::{Command, Event, ReceiverSettings, SpectrumUpdate};
use std::time::Instant;

use smeter::SMeter;
use state::UiState;

pub use colormap::{ColorWindow, db_to_color, intensity_to_color};
pub use raster::WaterfallRaster;
pub use scheduler::{Pass, RenderScheduler, Repaint, SchedulerState};
pub use spectrum_line::Trace;
pub use tuning::{FrequencyMapper, key_tune, quantize, wheel_tune};
pub use visualizer::wheel_ticks;
pub use view::{DisplayControls, ViewState};

/// Main application struct implementing the egui App trait.
pub struct SdrDeckApp {
    /// Status changes from the link
    event_rx: flume::Receiver<Event>,

    /// Latest-wins telemetry mailbox
    spectrum_rx: flume::Receiver<SpectrumUpdate>,

    state: UiState,
}

impl SdrDeckApp {
    fn new(
        event_rx: flume::Receiver<Event>,
        spectrum_rx: flume::Receiver<SpectrumUpdate>,
        cmd_tx: flume::Sender<Command>,
        settings: ReceiverSettings,
    ) -> Self {
        Self {
            event_rx,
            spectrum_rx,
            state: UiState::new(cmd_tx, settings),
        }
    }

    fn status_bar(&self, ui: &mut egui::Ui) {
        ui.horizontal(|ui| {
            ui.label(RichText::new("sdrdeck").strong());
            ui.separator();
            if self.state.connected {
                ui.colored_label(Color32::from_rgb(0x22, 0xc5, 0x5e), "HARDWARE CONNECTED");
            } else {
                ui.colored_label(Color32::from_rgb(0xef, 0x44, 0x44), "NO CONNECTION TO SERVER");
            }
            ui.separator();
            ui.monospace(format!("{} Hz", self.state.settings.frequency));
        });
    }
}

impl eframe::App for SdrDeckApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        for event in self.event_rx.try_iter() {
            self.state.handle_event(event);
        }
        // The mailbox holds at most one update, already the newest.
        if let Ok(update) = self.spectrum_rx.try_recv() {
            self.state.take_spectrum(update);
        }

        self.state.handle_keys(ctx);
        self.state.tick_scanner(Instant::now());

        egui::TopBottomPanel::top("status_bar").show(ctx, |ui| self.status_bar(ui));

        egui::SidePanel::left("control_panel")
            .default_width(300.0)
            .show(ctx, |ui| {
                let state = &mut self.state;
                state.control_panel.ui(
                    ui,
                    &mut state.settings,
                    state.hover,
                    &mut state.scanner.open,
                );
            });

        egui::SidePanel::right("display_controls")
            .exact_width(56.0)
            .resizable(false)
            .show(ctx, |ui| {
                ui.vertical_centered(|ui| {
                    control_panel::display_controls(ui, &mut self.state.controls);
                });
            });

        egui::CentralPanel::default()
            .frame(egui::Frame::NONE.fill(Color32::BLACK))
            .show(ctx, |ui| {
                let view = self.state.view();
                let meter = Rect::from_min_size(ui.max_rect().min + vec2(8.0, 8.0), SMeter::SIZE);
                let interaction = self
                    .state
                    .visualizer
                    .show(ui, &view, &self.state.frame, meter);
                self.state.apply_interaction(interaction);
                ui.put(meter, &self.state.smeter);
            });

        let step = self.state.settings.step;
        self.state.scanner.show(ctx, step);
        self.state
            .control_panel
            .show_config(ctx, &mut self.state.settings);

        self.state.publish_settings();

        match self.state.visualizer.repaint() {
            Repaint::Continuous => ctx.request_repaint(),
            Repaint::After(delay) => ctx.request_repaint_after(delay),
            Repaint::Never => {}
        }
        if self.state.scanner.is_active() {
            ctx.request_repaint_after(scanner::SCAN_INTERVAL);
        }
    }
}

impl Drop for SdrDeckApp {
    fn drop(&mut self) {
        self.state.teardown();
    }
}

/// Entry point for the UI module.
///
/// Runs the eframe application on the main thread (blocking).
pub fn run(
    event_rx: flume::Receiver<Event>,
    spectrum_rx: flume::Receiver<SpectrumUpdate>,
    cmd_tx: flume::Sender<Command>,
    settings: ReceiverSettings,
) -> anyhow::Result<()> {
    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([1280.0, 800.0])
            .with_title("sdrdeck"),
        ..Default::default()
    };

    eframe::run_native(
        "sdrdeck",
        options,
        Box::new(|_cc| {
            Ok(Box::new(SdrDeckApp::new(
                event_rx,
                spectrum_rx,
                cmd_tx,
                settings,
            )))
        }),
    )
    .map_err(|e| anyhow::anyhow!("{}", e))?;

    Ok(())
}
