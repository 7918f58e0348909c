use sdrdeck_messages::{Hertz, ReceiverSettings};

use crate::colormap::ColorWindow;

/// Operator-adjustable display parameters, all in dB.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DisplayControls {
    pub offset: f32,
    pub range: f32,
    pub contrast: f32,
}

impl DisplayControls {
    pub const OFFSET_LIMITS: (f32, f32) = (-50.0, 50.0);
    pub const RANGE_LIMITS: (f32, f32) = (10.0, 200.0);
    pub const CONTRAST_LIMITS: (f32, f32) = (0.0, 50.0);

    const OFFSET_STEP: f32 = 2.0;
    const RANGE_STEP: f32 = 5.0;
    const CONTRAST_STEP: f32 = 2.0;

    pub fn nudge_offset(&mut self, ticks: i32) {
        self.offset = nudge(self.offset, ticks, Self::OFFSET_STEP, Self::OFFSET_LIMITS);
    }

    pub fn nudge_range(&mut self, ticks: i32) {
        self.range = nudge(self.range, ticks, Self::RANGE_STEP, Self::RANGE_LIMITS);
    }

    pub fn nudge_contrast(&mut self, ticks: i32) {
        self.contrast = nudge(
            self.contrast,
            ticks,
            Self::CONTRAST_STEP,
            Self::CONTRAST_LIMITS,
        );
    }
}

impl Default for DisplayControls {
    fn default() -> Self {
        Self {
            offset: -20.0,
            range: 67.0,
            contrast: 15.0,
        }
    }
}

fn nudge(value: f32, ticks: i32, step: f32, (lo, hi): (f32, f32)) -> f32 {
    (value + ticks as f32 * step).clamp(lo, hi)
}

/// Everything the renderers read for one pass. Rebuilt every frame.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ViewState {
    pub center_frequency: Hertz,
    pub view_bandwidth: Hertz,
    pub step: Hertz,
    pub vertical_offset: f32,
    pub vertical_range: f32,
    pub contrast: f32,
    pub is_playing: bool,
}

impl ViewState {
    pub fn new(settings: &ReceiverSettings, controls: &DisplayControls) -> Self {
        Self {
            center_frequency: settings.frequency,
            view_bandwidth: settings.view_bandwidth(),
            step: settings.step,
            vertical_offset: controls.offset,
            vertical_range: controls.range,
            contrast: controls.contrast,
            is_playing: settings.playing,
        }
    }

    pub fn waterfall_window(&self) -> ColorWindow {
        ColorWindow::new(
            -120.0 + self.vertical_offset,
            -40.0 + self.vertical_offset - self.contrast * 1.5,
        )
    }

    /// A smaller `vertical_range` widens the span, so the trace looks flatter.
    pub fn spectrum_window(&self) -> ColorWindow {
        ColorWindow::new(
            -120.0 + self.vertical_offset,
            -20.0 + self.vertical_offset + (200.0 - self.vertical_range),
        )
    }
}
