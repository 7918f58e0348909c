use eframe::egui::{Context, Key};
use flume::Sender;
use log::{debug, info};
use std::time::Instant;

use crate::control_panel::ControlPanel;
use crate::scanner::Scanner;
use crate::smeter::SMeter;
use crate::tuning::{key_tune, wheel_tune};
use crate::view::{DisplayControls, ViewState};
use crate::visualizer::{Interaction, Visualizer};
use sdrdeck_messages::{
    Command, Event, Hertz, MagnitudeFrame, ReceiverSettings, SignalLevel, SpectrumUpdate,
};

const TUNING_KEYS: [Key; 4] = [Key::ArrowUp, Key::ArrowDown, Key::ArrowRight, Key::ArrowLeft];

/// Local UI state. The UI thread is the only writer of the receiver
/// settings; every change is mirrored to the link as `Command::Configure`.
pub(super) struct UiState {
    cmd_tx: Sender<Command>,

    pub settings: ReceiverSettings,
    /// Settings as last pushed to the link
    last_sent: ReceiverSettings,
    pub controls: DisplayControls,

    pub connected: bool,
    /// Most recent telemetry frame. Kept until a newer one arrives.
    pub frame: MagnitudeFrame,
    pub level: SignalLevel,
    pub hover: Option<Hertz>,

    pub control_panel: ControlPanel,
    pub visualizer: Visualizer,
    pub smeter: SMeter,
    pub scanner: Scanner,
}

impl UiState {
    pub fn new(cmd_tx: Sender<Command>, settings: ReceiverSettings) -> Self {
        Self {
            cmd_tx,
            control_panel: ControlPanel::new(&settings),
            last_sent: settings.clone(),
            settings,
            controls: DisplayControls::default(),
            connected: false,
            frame: MagnitudeFrame::default(),
            level: SignalLevel::default(),
            hover: None,
            visualizer: Visualizer::new(),
            smeter: SMeter::new(),
            scanner: Scanner::new(),
        }
    }

    pub fn handle_event(&mut self, event: Event) {
        match event {
            Event::Connected => {
                info!("Backend connected");
                self.connected = true;
            }
            Event::Disconnected => {
                if self.connected {
                    info!("Backend disconnected");
                }
                self.connected = false;
            }
            Event::Notice(value) => debug!("Backend notice: {value}"),
        }
    }

    pub fn take_spectrum(&mut self, update: SpectrumUpdate) {
        self.frame = update.frame;
        self.level = update.level;
        self.smeter.set_level(update.level, &mut rand::thread_rng());
    }

    pub fn view(&self) -> ViewState {
        ViewState::new(&self.settings, &self.controls)
    }

    pub fn apply_interaction(&mut self, interaction: Interaction) {
        self.hover = interaction.hover;
        if let Some(frequency) = interaction.tune_to {
            self.settings.frequency = frequency;
        }
        if interaction.wheel_ticks != 0 {
            self.settings.frequency = wheel_tune(
                self.settings.frequency,
                self.settings.step,
                interaction.wheel_ticks,
            );
        }
        if let Some(band) = interaction.band {
            debug!("Band preset {} selected", band.name);
            self.settings.frequency = band.frequency;
            self.settings.mode = band.mode;
            self.settings.step = band.step;
        }
    }

    /// Arrow-key tuning. Skipped while a text field owns the keyboard.
    pub fn handle_keys(&mut self, ctx: &Context) {
        if ctx.wants_keyboard_input() {
            return;
        }
        for key in TUNING_KEYS {
            if ctx.input(|i| i.key_pressed(key)) {
                if let Some(frequency) = key_tune(self.settings.frequency, key) {
                    self.settings.frequency = frequency;
                }
            }
        }
    }

    pub fn tick_scanner(&mut self, now: Instant) {
        let locked = self
            .scanner
            .tick(now, self.settings.step, &mut rand::thread_rng());
        if let Some(frequency) = locked {
            self.settings.frequency = frequency;
        }
    }

    /// Push the settings to the link if anything changed since the last push.
    pub fn publish_settings(&mut self) {
        if self.settings == self.last_sent {
            return;
        }
        debug!("Settings changed, sending to link");
        if self
            .cmd_tx
            .send(Command::Configure(self.settings.clone()))
            .is_err()
        {
            debug!("Link is gone, settings not delivered");
        }
        self.last_sent = self.settings.clone();
    }

    /// Stop rendering and tell the link to shut down.
    pub fn teardown(&mut self) {
        self.scanner.pause();
        self.visualizer.teardown();
        let _ = self.cmd_tx.send(Command::Stop);
    }
}
