use crate::{MagnitudeFrame, SignalLevel};

/// Events sent from the backend link to the UI.
#[derive(Debug)]
pub enum Event {
    /// Websocket handshake with the backend completed.
    Connected,
    /// The connection dropped or could not be established. A retry is pending.
    Disconnected,
    /// A JSON text message from the backend. Advisory only.
    Notice(serde_json::Value),
}

/// One accepted telemetry frame together with the level derived from it.
#[derive(Debug, Clone)]
pub struct SpectrumUpdate {
    pub frame: MagnitudeFrame,
    pub level: SignalLevel,
}

impl SpectrumUpdate {
    pub fn new(frame: MagnitudeFrame) -> Self {
        let level = SignalLevel::from_frame(&frame);
        Self { frame, level }
    }
}
