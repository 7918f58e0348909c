use eframe::egui::{self, Context, RichText};
use log::info;
use rand::Rng;
use sdrdeck_messages::Hertz;
use std::time::{Duration, Instant};

use crate::presets::step_label;

pub const SCAN_START: Hertz = Hertz::mhz(144);
pub const SCAN_END: Hertz = Hertz::mhz(148);
pub const SCAN_INTERVAL: Duration = Duration::from_millis(100);

/// Chance per tick that the sweep finds a signal and stops on it.
pub const LOCK_CHANCE: f64 = 0.05;

/// Simulated band scanner sweeping the 2 m band.
pub struct Scanner {
    pub open: bool,
    active: bool,
    current: Hertz,
    last_tick: Option<Instant>,
}

impl Scanner {
    pub fn new() -> Self {
        Self {
            open: false,
            active: false,
            current: SCAN_START,
            last_tick: None,
        }
    }

    pub fn is_active(&self) -> bool {
        self.active
    }

    pub fn current(&self) -> Hertz {
        self.current
    }

    pub fn start(&mut self) {
        self.active = true;
        self.last_tick = None;
    }

    pub fn pause(&mut self) {
        self.active = false;
    }

    /// Pause and rewind to the start of the range.
    pub fn stop(&mut self) {
        self.active = false;
        self.current = SCAN_START;
    }

    /// Move one step up, wrapping back to the start past the end.
    pub fn advance(&mut self, step: Hertz) -> Hertz {
        let next = Hertz(self.current.as_hz().saturating_add(step.as_hz()));
        self.current = if next > SCAN_END { SCAN_START } else { next };
        self.current
    }

    /// Advance the sweep if an interval has passed since the last tick.
    /// Returns the frequency to tune to when the sweep locks onto a signal.
    /// A lock also pauses the sweep so the receiver stays on the signal.
    pub fn tick(&mut self, now: Instant, step: Hertz, rng: &mut impl Rng) -> Option<Hertz> {
        if !self.active {
            return None;
        }
        if let Some(last) = self.last_tick {
            if now.duration_since(last) < SCAN_INTERVAL {
                return None;
            }
        }
        self.last_tick = Some(now);

        let reached = self.advance(step);
        if rng.gen_bool(LOCK_CHANCE) {
            info!("Scanner locked on {reached}");
            self.active = false;
            return Some(reached);
        }
        None
    }

    pub fn show(&mut self, ctx: &Context, step: Hertz) {
        let mut open = self.open;
        egui::Window::new("Scanner")
            .open(&mut open)
            .collapsible(false)
            .resizable(false)
            .show(ctx, |ui| {
                ui.vertical_centered(|ui| {
                    ui.label(
                        RichText::new(format!("{:.4} MHz", self.current.as_hz() as f64 / 1e6))
                            .monospace()
                            .size(22.0),
                    );
                });
                ui.horizontal(|ui| {
                    if ui.selectable_label(self.active, "Start").clicked() {
                        self.start();
                    }
                    if ui.button("Pause").clicked() {
                        self.pause();
                    }
                    if ui.button("Stop").clicked() {
                        self.stop();
                    }
                });
                ui.small(format!(
                    "Range: {}-{} MHz | Step: {}",
                    SCAN_START.as_hz() / 1_000_000,
                    SCAN_END.as_hz() / 1_000_000,
                    step_label(step)
                ));
            });
        if !open {
            self.pause();
        }
        self.open = open;
    }
}

impl Default for Scanner {
    fn default() -> Self {
        Self::new()
    }
}
