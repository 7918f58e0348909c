use eframe::egui::Rect;
use log::{debug, info};
use sdrdeck_messages::MagnitudeFrame;
use std::time::Duration;

use crate::raster::WaterfallRaster;
use crate::spectrum_line::Trace;
use crate::view::ViewState;

/// How often the idle console repaints so connection status stays current.
pub const IDLE_REPAINT: Duration = Duration::from_millis(250);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SchedulerState {
    Idle,
    Running,
}

/// What the scheduler wants from the event loop after a pass.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Repaint {
    Continuous,
    After(Duration),
    Never,
}

/// Output of one render pass.
#[derive(Debug)]
pub struct Pass {
    pub trace: Trace,
    /// The raster was painted or reallocated and must be re-uploaded.
    pub raster_changed: bool,
}

/// Drives the per-frame pipeline for the visualizer.
///
/// The playing flag alone moves it between `Idle` and `Running`. Only a
/// running pass mutates the raster; an idle pass draws the flat baseline
/// over frozen history.
pub struct RenderScheduler {
    state: SchedulerState,
    torn_down: bool,
    raster: WaterfallRaster,
}

impl RenderScheduler {
    pub fn new() -> Self {
        Self {
            state: SchedulerState::Idle,
            torn_down: false,
            raster: WaterfallRaster::new(0, 0),
        }
    }

    pub fn state(&self) -> SchedulerState {
        self.state
    }

    pub fn set_playing(&mut self, playing: bool) {
        let next = if playing {
            SchedulerState::Running
        } else {
            SchedulerState::Idle
        };
        if next != self.state {
            info!("Render scheduler {:?} -> {:?}", self.state, next);
            self.state = next;
        }
    }

    /// Match the raster to the waterfall area, in pixels. Returns whether it
    /// was reallocated.
    pub fn observe_viewport(&mut self, [width, height]: [usize; 2]) -> bool {
        let resized = self.raster.resize(width, height);
        if resized {
            debug!("Waterfall raster reallocated to {width}x{height}");
        }
        resized
    }

    /// Run one pass: resize first, then scroll the raster (when running),
    /// then lay out the spectrum trace for `plot`.
    pub fn run_pass(
        &mut self,
        view: &ViewState,
        frame: &MagnitudeFrame,
        plot: Rect,
        waterfall_px: [usize; 2],
    ) -> Option<Pass> {
        if self.torn_down {
            return None;
        }
        self.set_playing(view.is_playing);
        let mut raster_changed = self.observe_viewport(waterfall_px);

        let trace = match self.state {
            SchedulerState::Running => {
                if !self.raster.is_empty() {
                    self.raster
                        .scroll_and_paint(frame, view.waterfall_window());
                    raster_changed = true;
                }
                Trace::live(frame.bins(), plot, view.spectrum_window())
            }
            SchedulerState::Idle => Trace::idle(plot),
        };

        Some(Pass {
            trace,
            raster_changed,
        })
    }

    pub fn repaint(&self) -> Repaint {
        match (self.torn_down, self.state) {
            (true, _) => Repaint::Never,
            (false, SchedulerState::Running) => Repaint::Continuous,
            (false, SchedulerState::Idle) => Repaint::After(IDLE_REPAINT),
        }
    }

    pub fn teardown(&mut self) {
        if !self.torn_down {
            debug!("Render scheduler torn down");
            self.torn_down = true;
        }
    }

    pub fn raster(&self) -> &WaterfallRaster {
        &self.raster
    }
}

impl Default for RenderScheduler {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use eframe::egui::{pos2, vec2};
    use eframe::epaint::Color32;
    use sdrdeck_messages::{Hertz, ReceiverSettings};

    use crate::view::DisplayControls;

    fn view(playing: bool) -> ViewState {
        let settings = ReceiverSettings {
            playing,
            ..Default::default()
        };
        let controls = DisplayControls {
            offset: 0.0,
            range: 200.0,
            contrast: 0.0,
        };
        ViewState::new(&settings, &controls)
    }

    fn plot() -> Rect {
        Rect::from_min_size(pos2(0.0, 0.0), vec2(400.0, 100.0))
    }

    fn raster_pixels(scheduler: &RenderScheduler) -> Vec<Color32> {
        let [_, h] = scheduler.raster().size();
        (0..h)
            .flat_map(|y| scheduler.raster().row(y).to_vec())
            .collect()
    }

    #[test]
    fn test_idle_never_touches_raster() {
        let mut scheduler = RenderScheduler::new();
        let hot = MagnitudeFrame::filled(-40.0);

        let pass = scheduler
            .run_pass(&view(true), &hot, plot(), [32, 8])
            .unwrap();
        assert!(pass.raster_changed);
        let before = raster_pixels(&scheduler);

        for _ in 0..5 {
            let pass = scheduler
                .run_pass(&view(false), &MagnitudeFrame::filled(-120.0), plot(), [32, 8])
                .unwrap();
            assert!(!pass.raster_changed);
            assert_eq!(pass.trace, Trace::idle(plot()));
        }
        assert_eq!(scheduler.state(), SchedulerState::Idle);
        assert_eq!(raster_pixels(&scheduler), before);
        assert_eq!(scheduler.repaint(), Repaint::After(IDLE_REPAINT));
    }

    #[test]
    fn test_running_scrolls_each_pass() {
        let mut scheduler = RenderScheduler::new();
        let frame = MagnitudeFrame::filled(-40.0);
        for _ in 0..3 {
            scheduler.run_pass(&view(true), &frame, plot(), [16, 4]);
        }
        let raster = scheduler.raster();
        assert!((0..3).all(|y| raster.row(y).iter().all(|&p| p == Color32::RED)));
        assert!(raster.row(3).iter().all(|&p| p == Color32::BLACK));
        assert_eq!(scheduler.repaint(), Repaint::Continuous);
    }

    #[test]
    fn test_resize_happens_before_paint() {
        let mut scheduler = RenderScheduler::new();
        let frame = MagnitudeFrame::filled(-40.0);
        scheduler.run_pass(&view(true), &frame, plot(), [16, 4]);
        scheduler.run_pass(&view(true), &frame, plot(), [16, 4]);

        scheduler.run_pass(&view(true), &frame, plot(), [20, 4]);
        let raster = scheduler.raster();
        assert_eq!(raster.size(), [20, 4]);
        assert!(raster.row(0).iter().all(|&p| p == Color32::RED));
        assert!((1..4).all(|y| raster.row(y).iter().all(|&p| p == Color32::BLACK)));
    }

    #[test]
    fn test_resize_while_idle_clears_history() {
        let mut scheduler = RenderScheduler::new();
        scheduler.run_pass(&view(true), &MagnitudeFrame::filled(-40.0), plot(), [8, 2]);
        let pass = scheduler
            .run_pass(&view(false), &MagnitudeFrame::default(), plot(), [8, 3])
            .unwrap();
        assert!(pass.raster_changed);
        assert!(raster_pixels(&scheduler).iter().all(|&p| p == Color32::BLACK));
    }

    #[test]
    fn test_zero_sized_viewport_is_harmless() {
        let mut scheduler = RenderScheduler::new();
        let pass = scheduler
            .run_pass(&view(true), &MagnitudeFrame::default(), plot(), [0, 0])
            .unwrap();
        assert!(!pass.raster_changed);
        assert!(scheduler.raster().is_empty());
    }

    #[test]
    fn test_teardown_stops_passes_and_repaints() {
        let mut scheduler = RenderScheduler::new();
        scheduler.set_playing(true);
        scheduler.teardown();
        assert!(scheduler.torn_down);
        assert_eq!(scheduler.repaint(), Repaint::Never);
        assert!(
            scheduler
                .run_pass(&view(true), &MagnitudeFrame::default(), plot(), [8, 8])
                .is_none()
        );
        assert!(scheduler.raster().is_empty());
    }

    #[test]
    fn test_state_follows_playing_flag() {
        let mut scheduler = RenderScheduler::new();
        assert_eq!(scheduler.state(), SchedulerState::Idle);
        let mut v = view(true);
        v.center_frequency = Hertz(7_100_000);
        scheduler.run_pass(&v, &MagnitudeFrame::default(), plot(), [4, 4]);
        assert_eq!(scheduler.state(), SchedulerState::Running);
    }
}
