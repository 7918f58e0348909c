use thiserror::Error;
use tokio_tungstenite::tungstenite;

/// Failures that end one backend session.
#[derive(Debug, Error)]
pub enum LinkError {
    #[error("websocket error: {0}")]
    WebSocket(#[from] tungstenite::Error),
    #[error("failed to encode control message: {0}")]
    Encode(#[from] serde_json::Error),
    /// Every receiver on the UI side has been dropped.
    #[error("UI side of the link has gone away")]
    Detached,
}
