use eframe::epaint::Color32;

/// The dB span mapped onto the full color ramp (or plot height) for one pass.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ColorWindow {
    pub min: f32,
    pub max: f32,
}

impl ColorWindow {
    pub const fn new(min: f32, max: f32) -> Self {
        Self { min, max }
    }

    /// Where `db` sits inside the window, clamped to `[0, 1]`.
    ///
    /// A window with `max <= min` has no interior: values at or above `max`
    /// saturate high, everything else low. NaN maps low.
    pub fn normalize(&self, db: f32) -> f32 {
        let span = self.max - self.min;
        if !(span > 0.0) {
            return if db >= self.max { 1.0 } else { 0.0 };
        }
        let t = (db - self.min) / span;
        if t.is_nan() { 0.0 } else { t.clamp(0.0, 1.0) }
    }
}

/// Width of each of the five ramp segments.
const SEGMENT: f32 = 0.2;

/// Fixed hue ramp: black → deep blue → cyan → green → yellow → red.
///
/// Each segment moves one channel across its full 0..255 span while the
/// others sit at an extremum, so the ramp is continuous at every boundary.
pub fn intensity_to_color(intensity: f32) -> Color32 {
    let t = if intensity.is_nan() {
        0.0
    } else {
        intensity.clamp(0.0, 1.0)
    };
    // Progress through the current segment, scaled to a channel value.
    let ramp = |start: f32| (t - start) / SEGMENT * 255.0;

    let (r, g, b) = if t < SEGMENT {
        (0.0, 0.0, ramp(0.0))
    } else if t < 2.0 * SEGMENT {
        (0.0, ramp(SEGMENT), 255.0)
    } else if t < 3.0 * SEGMENT {
        (0.0, 255.0, 255.0 - ramp(2.0 * SEGMENT))
    } else if t < 4.0 * SEGMENT {
        (ramp(3.0 * SEGMENT), 255.0, 0.0)
    } else {
        (255.0, 255.0 - ramp(4.0 * SEGMENT), 0.0)
    };

    Color32::from_rgb(channel(r), channel(g), channel(b))
}

pub fn db_to_color(db: f32, window: ColorWindow) -> Color32 {
    intensity_to_color(window.normalize(db))
}

fn channel(value: f32) -> u8 {
    value.round().clamp(0.0, 255.0) as u8
}
