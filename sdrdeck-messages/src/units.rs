/// Frequency in Hertz.
///
/// Displays in the operator's dotted notation, `MHz.kHz.Hz`, e.g. `145.350.000`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct Hertz(pub u64);

impl std::fmt::Display for Hertz {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let mhz = self.0 / 1_000_000;
        let khz = (self.0 % 1_000_000) / 1_000;
        let rest = self.0 % 1_000;
        write!(f, "{mhz}.{khz:03}.{rest:03}")
    }
}

impl Hertz {
    pub const fn khz(khz: u64) -> Self {
        Self(khz * 1_000)
    }

    pub const fn mhz(mhz: u64) -> Self {
        Self(mhz * 1_000_000)
    }

    pub const fn as_hz(self) -> u64 {
        self.0
    }

    /// Build a frequency from a floating point Hz value, rounding to the
    /// nearest Hz. Negative and NaN inputs become 0 Hz.
    pub fn from_hz_f64(hz: f64) -> Self {
        if hz.is_nan() || hz <= 0.0 {
            return Self(0);
        }
        Self(hz.round() as u64)
    }

    /// Shift by a signed amount, saturating at 0 Hz.
    pub fn offset_by(self, delta_hz: i64) -> Self {
        Self(self.0.saturating_add_signed(delta_hz))
    }

    /// Parse operator input. Every non-digit character is dropped first, so
    /// `145.350.000` and `145 350 000 Hz` both read as 145350000.
    /// Returns `None` when no digits remain or the value overflows.
    pub fn parse_digits(input: &str) -> Option<Self> {
        let digits: String = input.chars().filter(char::is_ascii_digit).collect();
        if digits.is_empty() {
            return None;
        }
        digits.parse().ok().map(Self)
    }
}

/// Power level in Decibels (dB).
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd)]
pub struct Decibels(pub f32);

impl std::fmt::Display for Decibels {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:.1} dB", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_hertz_display_is_dotted() {
        assert_eq!(Hertz(145_350_000).to_string(), "145.350.000");
        assert_eq!(Hertz(940_000).to_string(), "0.940.000");
        assert_eq!(Hertz(1_090_000_005).to_string(), "1090.000.005");
        assert_eq!(Hertz(0).to_string(), "0.000.000");
    }

    #[test]
    fn test_parse_digits_strips_separators() {
        assert_eq!(Hertz::parse_digits("145.350.000"), Some(Hertz(145_350_000)));
        assert_eq!(Hertz::parse_digits(" 7 100 000 Hz"), Some(Hertz(7_100_000)));
        assert_eq!(Hertz::parse_digits("abc"), None);
        assert_eq!(Hertz::parse_digits(""), None);
        assert_eq!(Hertz::parse_digits("99999999999999999999999"), None);
    }

    #[test]
    fn test_offset_saturates_at_zero() {
        assert_eq!(Hertz(5_000).offset_by(-10_000), Hertz(0));
        assert_eq!(Hertz(5_000).offset_by(10_000), Hertz(15_000));
        assert_eq!(Hertz::mhz(1).offset_by(-1_000_000), Hertz(0));
    }

    #[test]
    fn test_decibels_display_one_decimal() {
        assert_eq!(Decibels(-42.0).to_string(), "-42.0 dB");
        assert_eq!(Decibels(-7.46).to_string(), "-7.5 dB");
        assert_eq!(Decibels(f32::NEG_INFINITY).to_string(), "-inf dB");
    }

    #[test]
    fn test_from_hz_f64_rounds_and_clamps() {
        assert_eq!(Hertz::from_hz_f64(100_500_000.4), Hertz(100_500_000));
        assert_eq!(Hertz::from_hz_f64(-3.0), Hertz(0));
        assert_eq!(Hertz::from_hz_f64(f64::NAN), Hertz(0));
    }
}
