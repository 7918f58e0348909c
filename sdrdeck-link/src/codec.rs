use log::{debug, trace};
use sdrdeck_messages::{ControlMessage, FrameError, MagnitudeFrame, ReceiverSettings};
use tokio_tungstenite::tungstenite::Message;

/// What an inbound websocket message turned out to be.
#[derive(Debug)]
pub enum Inbound {
    Spectrum(MagnitudeFrame),
    /// Binary payload that is not a whole frame. Dropped by the caller.
    Rejected(FrameError),
    Notice(serde_json::Value),
    Ignored,
}

pub fn decode(message: &Message) -> Inbound {
    match message {
        Message::Binary(data) => match MagnitudeFrame::from_le_bytes(data) {
            Ok(frame) => Inbound::Spectrum(frame),
            Err(err) => Inbound::Rejected(err),
        },
        Message::Text(text) => match serde_json::from_str(text) {
            Ok(value) => Inbound::Notice(value),
            Err(err) => {
                trace!("Ignoring unparseable text message: {err}");
                Inbound::Ignored
            }
        },
        other => {
            debug!("Ignoring websocket control frame: {other:?}");
            Inbound::Ignored
        }
    }
}

/// The `UPDATE_CONFIG` message for the given settings.
pub fn encode(settings: &ReceiverSettings) -> Result<Message, serde_json::Error> {
    let json = ControlMessage::update_config(settings).to_json()?;
    Ok(Message::Text(json.into()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use sdrdeck_messages::{FRAME_BYTES, FRAME_LEN, Hertz};

    fn binary(len: usize, db: f32) -> Message {
        let bytes: Vec<u8> = (0..len).flat_map(|_| db.to_le_bytes()).collect();
        Message::Binary(bytes.into())
    }

    #[test]
    fn test_binary_frame_is_decoded() {
        match decode(&binary(FRAME_LEN, -42.0)) {
            Inbound::Spectrum(frame) => assert!(frame.bins().iter().all(|&v| v == -42.0)),
            other => panic!("expected spectrum, got {other:?}"),
        }
    }

    #[test]
    fn test_wrong_length_binary_is_rejected() {
        assert!(matches!(
            decode(&binary(1024, -42.0)),
            Inbound::Rejected(FrameError::Length(1024))
        ));
        let odd = Message::Binary(vec![0u8; FRAME_BYTES - 1].into());
        assert!(matches!(decode(&odd), Inbound::Rejected(FrameError::Misaligned(_))));
    }

    #[test]
    fn test_text_messages() {
        match decode(&Message::Text(r#"{"status":"tuned"}"#.into())) {
            Inbound::Notice(value) => assert_eq!(value["status"], "tuned"),
            other => panic!("expected notice, got {other:?}"),
        }
        assert!(matches!(
            decode(&Message::Text("{not json".into())),
            Inbound::Ignored
        ));
    }

    #[test]
    fn test_encode_settings() {
        let settings = ReceiverSettings {
            frequency: Hertz(7_100_000),
            ..Default::default()
        };
        let Message::Text(text) = encode(&settings).unwrap() else {
            panic!("control messages are text");
        };
        let value: serde_json::Value = serde_json::from_str(&text).unwrap();
        assert_eq!(value["type"], "UPDATE_CONFIG");
        assert_eq!(value["config"]["frequency"], 7_100_000);
    }
}
