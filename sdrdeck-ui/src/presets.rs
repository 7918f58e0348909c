use sdrdeck_messages::{DemodMode, Hertz};

/// Tuning steps offered in the step selector.
pub const STEPS: [Hertz; 9] = [
    Hertz(500),
    Hertz(1_000),
    Hertz(2_500),
    Hertz(5_000),
    Hertz(10_000),
    Hertz(25_000),
    Hertz(50_000),
    Hertz(100_000),
    Hertz(200_000),
];

/// A named frequency with the mode and step that suit it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BandPreset {
    pub name: &'static str,
    pub frequency: Hertz,
    pub mode: DemodMode,
    pub step: Hertz,
}

const fn band(name: &'static str, hz: u64, mode: DemodMode, step: u64) -> BandPreset {
    BandPreset {
        name,
        frequency: Hertz(hz),
        mode,
        step: Hertz(step),
    }
}

pub const BANDS: [BandPreset; 17] = [
    band("OM", 940_000, DemodMode::Am, 10_000),
    band("160m", 1_745_000, DemodMode::Lsb, 500),
    band("80m", 3_710_000, DemodMode::Lsb, 500),
    band("60m", 5_360_000, DemodMode::Lsb, 500),
    band("40m", 7_100_000, DemodMode::Lsb, 500),
    band("30m", 10_100_000, DemodMode::Usb, 500),
    band("20m", 14_200_000, DemodMode::Usb, 500),
    band("17m", 18_100_000, DemodMode::Usb, 500),
    band("15m", 21_200_000, DemodMode::Usb, 500),
    band("11m", 27_455_000, DemodMode::Usb, 500),
    band("10m", 28_460_000, DemodMode::Usb, 500),
    band("6m", 50_150_000, DemodMode::Usb, 1_000),
    band("AIR", 119_450_000, DemodMode::Am, 25_000),
    band("VHF", 145_350_000, DemodMode::Nfm, 10_000),
    band("UHF", 439_400_000, DemodMode::Nfm, 10_000),
    band("ADSB", 1_090_000_000, DemodMode::Am, 25_000),
    band("SAT", 1_545_000_000, DemodMode::Usb, 1_000),
];

/// Device sample rates with their display labels.
pub const SAMPLE_RATES: [(&str, Hertz); 7] = [
    ("512 KSPS", Hertz(512_000)),
    ("1.024 MSPS", Hertz(1_024_000)),
    ("1.2 MSPS", Hertz(1_200_000)),
    ("1.5 MSPS", Hertz(1_500_000)),
    ("1.8 MSPS", Hertz(1_800_000)),
    ("2.0 MSPS", Hertz(2_000_000)),
    ("2.4 MSPS", Hertz(2_400_000)),
];

/// `500 Hz`, `2.5 kHz`, `200 kHz`.
pub fn step_label(step: Hertz) -> String {
    let hz = step.as_hz();
    if hz < 1_000 {
        format!("{hz} Hz")
    } else {
        format!("{} kHz", hz as f64 / 1_000.0)
    }
}

pub fn sample_rate_label(rate: Hertz) -> String {
    SAMPLE_RATES
        .iter()
        .find(|(_, r)| *r == rate)
        .map(|(label, _)| label.to_string())
        .unwrap_or_else(|| format!("{} S/s", rate.as_hz()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_step_labels() {
        assert_eq!(step_label(Hertz(500)), "500 Hz");
        assert_eq!(step_label(Hertz(2_500)), "2.5 kHz");
        assert_eq!(step_label(Hertz(10_000)), "10 kHz");
        assert_eq!(step_label(Hertz(200_000)), "200 kHz");
    }

    #[test]
    fn test_band_presets_sit_on_their_step() {
        for band in BANDS {
            assert_eq!(band.frequency.as_hz() % band.step.as_hz(), 0, "{}", band.name);
            assert!(STEPS.contains(&band.step), "{}", band.name);
        }
    }

    #[test]
    fn test_sample_rate_labels() {
        assert_eq!(sample_rate_label(Hertz(1_024_000)), "1.024 MSPS");
        assert_eq!(sample_rate_label(Hertz(3_200_000)), "3200000 S/s");
    }
}
