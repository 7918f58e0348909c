use serde::{Deserialize, Serialize};

use crate::{DemodMode, ReceiverSettings, SamplingMode};

/// JSON control messages sent to the backend.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum ControlMessage {
    #[serde(rename = "UPDATE_CONFIG")]
    UpdateConfig { config: WireConfig },
}

/// Receiver settings as the backend expects them.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WireConfig {
    pub frequency: u64,
    pub sample_rate: u64,
    pub gain: f32,
    pub agc: bool,
    pub ppm: i32,
    pub mode: DemodMode,
    pub bw: u64,
    pub squelch: f32,
    pub playing: bool,
    pub sampling_mode: SamplingMode,
}

impl From<&ReceiverSettings> for WireConfig {
    fn from(settings: &ReceiverSettings) -> Self {
        Self {
            frequency: settings.frequency.as_hz(),
            sample_rate: settings.sample_rate.as_hz(),
            gain: settings.gain,
            agc: settings.tuner_agc,
            ppm: settings.ppm,
            mode: settings.mode,
            bw: settings.bandwidth.as_hz(),
            squelch: settings.squelch,
            playing: settings.playing,
            sampling_mode: settings.sampling_mode,
        }
    }
}

impl ControlMessage {
    pub fn update_config(settings: &ReceiverSettings) -> Self {
        Self::UpdateConfig {
            config: settings.into(),
        }
    }

    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Hertz;
    use serde_json::Value;

    #[test]
    fn test_update_config_shape() {
        let settings = ReceiverSettings {
            frequency: Hertz(100_500_000),
            mode: DemodMode::Wfm,
            sampling_mode: SamplingMode::DirectQ,
            playing: true,
            ppm: -3,
            ..Default::default()
        };
        let json = ControlMessage::update_config(&settings).to_json().unwrap();
        let value: Value = serde_json::from_str(&json).unwrap();

        assert_eq!(value["type"], "UPDATE_CONFIG");
        let config = &value["config"];
        assert_eq!(config["frequency"], 100_500_000);
        assert_eq!(config["sampleRate"], 1_024_000);
        assert_eq!(config["bw"], 10_000);
        assert_eq!(config["agc"], true);
        assert_eq!(config["playing"], true);
        assert_eq!(config["ppm"], -3);
        assert_eq!(config["mode"], "WFM");
        assert_eq!(config["samplingMode"], "Direct Q");
        assert!((config["gain"].as_f64().unwrap() - 49.6).abs() < 1e-4);
        assert_eq!(config["squelch"].as_f64(), Some(0.0));
        assert!(config.get("step").is_none());
        assert_eq!(config.as_object().unwrap().len(), 10);
    }

    #[test]
    fn test_update_config_round_trips_through_serde() {
        let message = ControlMessage::update_config(&ReceiverSettings::default());
        let parsed: ControlMessage = serde_json::from_str(&message.to_json().unwrap()).unwrap();
        assert_eq!(parsed, message);
    }
}
