use eframe::egui::Key;
use sdrdeck_messages::Hertz;

/// Maps horizontal positions in the visualizer to absolute frequencies.
///
/// The center of the plot is the tuned frequency and the full width spans
/// the view bandwidth.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FrequencyMapper {
    pub width: f32,
    pub center: Hertz,
    pub bandwidth: Hertz,
}

impl FrequencyMapper {
    pub fn new(width: f32, center: Hertz, bandwidth: Hertz) -> Self {
        Self {
            width,
            center,
            bandwidth,
        }
    }

    /// Unquantized frequency under `x`, measured from the plot's left edge.
    pub fn frequency_at(&self, x: f32) -> f64 {
        let center = self.center.as_hz() as f64;
        if !(self.width > 0.0) {
            return center;
        }
        let w = self.width as f64;
        center + ((x as f64 - w / 2.0) / w) * self.bandwidth.as_hz() as f64
    }

    /// Readout value while the pointer hovers the plot.
    pub fn hover_frequency(&self, x: f32) -> Hertz {
        Hertz::from_hz_f64(self.frequency_at(x))
    }

    /// Frequency to tune to when the plot is clicked at `x`.
    pub fn tuned_frequency(&self, x: f32, step: Hertz) -> Hertz {
        quantize(self.frequency_at(x), step)
    }
}

/// Round to the nearest multiple of `step`. A zero step leaves the value
/// unquantized. Negative results clamp to 0 Hz.
pub fn quantize(hz: f64, step: Hertz) -> Hertz {
    if step.as_hz() == 0 {
        return Hertz::from_hz_f64(hz);
    }
    let step = step.as_hz() as f64;
    Hertz::from_hz_f64((hz / step).round() * step)
}

/// Move the center by one step per wheel tick, independent of pointer
/// position.
pub fn wheel_tune(center: Hertz, step: Hertz, ticks: i32) -> Hertz {
    let delta = (step.as_hz() as i64).saturating_mul(ticks as i64);
    center.offset_by(delta)
}

/// Arrow key shortcuts: up/down move a megahertz, right/left ten kilohertz.
pub fn key_tune(center: Hertz, key: Key) -> Option<Hertz> {
    let delta: i64 = match key {
        Key::ArrowUp => 1_000_000,
        Key::ArrowDown => -1_000_000,
        Key::ArrowRight => 10_000,
        Key::ArrowLeft => -10_000,
        _ => return None,
    };
    Some(center.offset_by(delta))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_click_right_of_center() {
        let mapper = FrequencyMapper::new(1000.0, Hertz(100_000_000), Hertz(2_000_000));
        assert_eq!(mapper.frequency_at(750.0), 100_500_000.0);
        assert_eq!(mapper.hover_frequency(750.0), Hertz(100_500_000));
        assert_eq!(
            mapper.tuned_frequency(750.0, Hertz(10_000)),
            Hertz(100_500_000)
        );
    }

    #[test]
    fn test_edges_span_the_bandwidth() {
        let mapper = FrequencyMapper::new(800.0, Hertz(145_350_000), Hertz(1_024_000));
        assert_eq!(mapper.frequency_at(0.0), 145_350_000.0 - 512_000.0);
        assert_eq!(mapper.frequency_at(400.0), 145_350_000.0);
        assert_eq!(mapper.frequency_at(800.0), 145_350_000.0 + 512_000.0);
    }

    #[test]
    fn test_tuned_frequency_is_multiple_of_step() {
        let mapper = FrequencyMapper::new(1234.0, Hertz(145_351_234), Hertz(2_400_000));
        for step in [500u64, 1_000, 2_500, 5_000, 10_000, 25_000, 100_000] {
            for x in (0..1234).step_by(37) {
                let tuned = mapper.tuned_frequency(x as f32, Hertz(step));
                assert_eq!(tuned.as_hz() % step, 0, "x = {x}, step = {step}");
                let exact = mapper.frequency_at(x as f32);
                assert!((tuned.as_hz() as f64 - exact).abs() <= step as f64 / 2.0);
            }
        }
    }

    #[test]
    fn test_zero_step_and_zero_width() {
        let mapper = FrequencyMapper::new(1000.0, Hertz(7_100_000), Hertz(1_000_000));
        assert_eq!(mapper.tuned_frequency(501.0, Hertz(0)), Hertz(7_101_000));

        let empty = FrequencyMapper::new(0.0, Hertz(7_100_000), Hertz(1_000_000));
        assert_eq!(empty.hover_frequency(123.0), Hertz(7_100_000));
    }

    #[test]
    fn test_never_below_zero_hz() {
        let mapper = FrequencyMapper::new(1000.0, Hertz(100_000), Hertz(2_000_000));
        assert_eq!(mapper.tuned_frequency(0.0, Hertz(10_000)), Hertz(0));
        assert_eq!(wheel_tune(Hertz(5_000), Hertz(10_000), -1), Hertz(0));
        assert_eq!(key_tune(Hertz(500_000), Key::ArrowDown), Some(Hertz(0)));
    }

    #[test]
    fn test_wheel_moves_one_step_per_tick() {
        let center = Hertz(145_350_000);
        assert_eq!(wheel_tune(center, Hertz(10_000), 1), Hertz(145_360_000));
        assert_eq!(wheel_tune(center, Hertz(10_000), -3), Hertz(145_320_000));
        assert_eq!(wheel_tune(center, Hertz(10_000), 0), center);
    }

    #[test]
    fn test_arrow_keys() {
        let center = Hertz(145_350_000);
        assert_eq!(key_tune(center, Key::ArrowUp), Some(Hertz(146_350_000)));
        assert_eq!(key_tune(center, Key::ArrowRight), Some(Hertz(145_360_000)));
        assert_eq!(key_tune(center, Key::ArrowLeft), Some(Hertz(145_340_000)));
        assert_eq!(key_tune(center, Key::Enter), None);
    }
}
