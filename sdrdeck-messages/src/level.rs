use crate::{Decibels, MagnitudeFrame};

/// Normalized signal strength in `[0, 100]` for the level meter.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default)]
pub struct SignalLevel(f32);

impl SignalLevel {
    pub const MAX: f32 = 100.0;

    /// Maps roughly -80 dB..-13 dB onto the full scale. Stateless: no
    /// smoothing or history is involved.
    pub fn from_peak(peak: Decibels) -> Self {
        let level = (peak.0 + 80.0) * 1.5;
        if level.is_nan() {
            return Self(0.0);
        }
        Self(level.clamp(0.0, Self::MAX))
    }

    pub fn from_frame(frame: &MagnitudeFrame) -> Self {
        Self::from_peak(frame.peak())
    }

    pub const fn value(self) -> f32 {
        self.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::FRAME_LEN;

    #[test]
    fn test_level_scenarios() {
        assert_eq!(SignalLevel::from_peak(Decibels(-10.0)).value(), 100.0);
        assert_eq!(SignalLevel::from_peak(Decibels(50.0)).value(), 100.0);
        assert_eq!(SignalLevel::from_peak(Decibels(-200.0)).value(), 0.0);
        assert_eq!(SignalLevel::from_peak(Decibels(-80.0)).value(), 0.0);
        assert_eq!(SignalLevel::from_peak(Decibels(-40.0)).value(), 60.0);
    }

    #[test]
    fn test_level_stays_in_range_for_extremes() {
        for peak in [f32::NEG_INFINITY, f32::INFINITY, f32::MIN, f32::MAX, f32::NAN] {
            let level = SignalLevel::from_peak(Decibels(peak)).value();
            assert!((0.0..=100.0).contains(&level), "peak {peak} gave {level}");
        }
    }

    #[test]
    fn test_level_uses_frame_peak() {
        let mut bins = vec![-110.0; FRAME_LEN];
        bins[2000] = -50.0;
        let frame = MagnitudeFrame::from_bins(bins).unwrap();
        assert_eq!(SignalLevel::from_frame(&frame).value(), 45.0);
    }
}
