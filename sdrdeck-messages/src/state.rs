use serde::{Deserialize, Serialize};

use crate::Hertz;

/// Demodulator selection forwarded to the backend.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum DemodMode {
    #[default]
    Nfm,
    Wfm,
    Am,
    Lsb,
    Usb,
    Cw,
}

impl DemodMode {
    pub const ALL: [DemodMode; 6] = [
        DemodMode::Nfm,
        DemodMode::Wfm,
        DemodMode::Am,
        DemodMode::Lsb,
        DemodMode::Usb,
        DemodMode::Cw,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            Self::Nfm => "NFM",
            Self::Wfm => "WFM",
            Self::Am => "AM",
            Self::Lsb => "LSB",
            Self::Usb => "USB",
            Self::Cw => "CW",
        }
    }
}

/// How the tuner samples the antenna signal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum SamplingMode {
    #[default]
    Quadrature,
    /// Direct sampling on the Q branch, for HF reception.
    #[serde(rename = "Direct Q")]
    DirectQ,
}

impl SamplingMode {
    pub fn label(&self) -> &'static str {
        match self {
            Self::Quadrature => "Quadrature Sampling",
            Self::DirectQ => "Direct Sampling (Q branch)",
        }
    }
}

/// Receiver control state owned by the UI and mirrored to the backend.
#[derive(Debug, Clone, PartialEq)]
pub struct ReceiverSettings {
    /// Center frequency
    pub frequency: Hertz,
    /// Sample rate, which is also the visible span of the spectrum
    pub sample_rate: Hertz,
    /// Tuner gain in dB
    pub gain: f32,
    pub tuner_agc: bool,
    /// Crystal correction in parts per million
    pub ppm: i32,
    pub mode: DemodMode,
    /// Demodulator filter bandwidth
    pub bandwidth: Hertz,
    pub squelch: f32,
    /// Receiver power state. Drives the renderers between idle and running.
    pub playing: bool,
    pub sampling_mode: SamplingMode,
    /// Tuning step. Local only, never sent to the backend.
    pub step: Hertz,
}

impl Default for ReceiverSettings {
    fn default() -> Self {
        Self {
            frequency: Hertz(145_350_000),
            sample_rate: Hertz(1_024_000),
            gain: 49.6,
            tuner_agc: true,
            ppm: 0,
            mode: DemodMode::Nfm,
            bandwidth: Hertz(10_000),
            squelch: 0.0,
            playing: false,
            sampling_mode: SamplingMode::Quadrature,
            step: Hertz::khz(10),
        }
    }
}

impl ReceiverSettings {
    /// Span of spectrum visible across the display width.
    pub fn view_bandwidth(&self) -> Hertz {
        self.sample_rate
    }
}
