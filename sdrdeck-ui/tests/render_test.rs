use eframe::egui::{Rect, pos2, vec2};
use eframe::epaint::Color32;
use sdrdeck_messages::{FRAME_LEN, Hertz, MagnitudeFrame, ReceiverSettings};
use sdrdeck_ui::{
    ColorWindow, DisplayControls, FrequencyMapper, RenderScheduler, Repaint, SchedulerState,
    Trace, ViewState, db_to_color,
};

fn view(playing: bool) -> ViewState {
    let settings = ReceiverSettings {
        frequency: Hertz(100_000_000),
        sample_rate: Hertz(2_000_000),
        playing,
        ..Default::default()
    };
    ViewState::new(&settings, &DisplayControls::default())
}

#[test]
fn test_click_tunes_to_quantized_frequency() {
    let view = view(true);
    let mapper = FrequencyMapper::new(1000.0, view.center_frequency, view.view_bandwidth);
    assert_eq!(mapper.tuned_frequency(750.0, view.step), Hertz(100_500_000));
    assert_eq!(mapper.tuned_frequency(500.0, view.step), Hertz(100_000_000));
}

#[test]
fn test_stream_of_frames_builds_history_in_order() {
    let mut scheduler = RenderScheduler::new();
    let plot = Rect::from_min_size(pos2(0.0, 0.0), vec2(512.0, 128.0));
    let view = view(true);
    let window = view.waterfall_window();

    // A ramp of frames, each one louder than the last.
    let levels: Vec<f32> = (0..6).map(|i| -140.0 + i as f32 * 10.0).collect();
    for &db in &levels {
        let pass = scheduler
            .run_pass(&view, &MagnitudeFrame::filled(db), plot, [64, 16])
            .expect("scheduler is live");
        assert!(pass.raster_changed);
        assert!(matches!(pass.trace, Trace::Live { ref points, .. } if points.len() == FRAME_LEN));
    }

    let raster = scheduler.raster();
    for (age, &db) in levels.iter().rev().enumerate() {
        let expected = db_to_color(db, window);
        assert!(
            raster.row(age).iter().all(|&p| p == expected),
            "row {age} should hold the {db} dB frame"
        );
    }
    assert!(raster.row(levels.len()).iter().all(|&p| p == Color32::BLACK));
}

#[test]
fn test_power_off_freezes_waterfall() {
    let mut scheduler = RenderScheduler::new();
    let plot = Rect::from_min_size(pos2(0.0, 0.0), vec2(200.0, 50.0));

    scheduler.run_pass(&view(true), &MagnitudeFrame::filled(-30.0), plot, [20, 5]);
    assert_eq!(scheduler.state(), SchedulerState::Running);
    let frozen = scheduler.raster().to_image();

    let pass = scheduler
        .run_pass(&view(false), &MagnitudeFrame::filled(-130.0), plot, [20, 5])
        .expect("scheduler is live");
    assert_eq!(scheduler.state(), SchedulerState::Idle);
    assert_eq!(pass.trace, Trace::idle(plot));
    assert_eq!(scheduler.raster().to_image().pixels, frozen.pixels);
    assert!(matches!(scheduler.repaint(), Repaint::After(_)));
}

#[test]
fn test_color_window_extremes() {
    let window = ColorWindow::new(-120.0, -40.0);
    assert_eq!(db_to_color(-200.0, window), Color32::BLACK);
    assert_eq!(db_to_color(10.0, window), Color32::RED);
}
