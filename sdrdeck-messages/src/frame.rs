use thiserror::Error;

use crate::Decibels;

/// Number of magnitude bins in every telemetry frame.
pub const FRAME_LEN: usize = 4096;

/// Size of a binary telemetry payload on the wire.
pub const FRAME_BYTES: usize = FRAME_LEN * size_of::<f32>();

/// Why a telemetry payload was rejected.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum FrameError {
    #[error("payload of {0} bytes is not a whole number of f32 samples")]
    Misaligned(usize),
    #[error("expected 4096 magnitude bins, got {0}")]
    Length(usize),
}

/// One snapshot of signal power across the view bandwidth, in dB per bin.
///
/// Always holds exactly [`FRAME_LEN`] bins: the constructors reject any other
/// length, so a frame is either applied whole or not at all.
#[derive(Debug, Clone, PartialEq)]
pub struct MagnitudeFrame {
    bins: Box<[f32]>,
}

impl MagnitudeFrame {
    pub fn from_bins(bins: Vec<f32>) -> Result<Self, FrameError> {
        if bins.len() != FRAME_LEN {
            return Err(FrameError::Length(bins.len()));
        }
        Ok(Self {
            bins: bins.into_boxed_slice(),
        })
    }

    /// Decode a payload of little-endian f32 samples.
    pub fn from_le_bytes(bytes: &[u8]) -> Result<Self, FrameError> {
        if bytes.len() % size_of::<f32>() != 0 {
            return Err(FrameError::Misaligned(bytes.len()));
        }
        let count = bytes.len() / size_of::<f32>();
        if count != FRAME_LEN {
            return Err(FrameError::Length(count));
        }

        let bins = bytes
            .chunks_exact(size_of::<f32>())
            .map(|b| f32::from_le_bytes([b[0], b[1], b[2], b[3]]))
            .collect();
        Self::from_bins(bins)
    }

    /// A frame with every bin at `db`.
    pub fn filled(db: f32) -> Self {
        Self {
            bins: vec![db; FRAME_LEN].into_boxed_slice(),
        }
    }

    pub fn bins(&self) -> &[f32] {
        &self.bins
    }

    /// Strongest bin. NaN bins are skipped; a frame with nothing else
    /// reports negative infinity.
    pub fn peak(&self) -> Decibels {
        Decibels(self.bins.iter().copied().fold(f32::NEG_INFINITY, f32::max))
    }
}

impl Default for MagnitudeFrame {
    /// The noise floor shown before the backend has delivered anything.
    fn default() -> Self {
        Self::filled(-100.0)
    }
}
