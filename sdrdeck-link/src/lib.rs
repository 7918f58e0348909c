mod codec;
mod error;
mod mailbox;

use anyhow::{Context, Result};
use flume::{Receiver, Sender};
use futures_util::{SinkExt, StreamExt};
use log::{debug, info, trace, warn};
use sdrdeck_messages::{Command, Event, ReceiverSettings, SpectrumUpdate};
use std::time::Duration;
use tokio_tungstenite::connect_async;
use tokio_tungstenite::tungstenite::{self, Message};

use codec::Inbound;

pub use error::LinkError;
pub use mailbox::{SpectrumPublisher, spectrum_mailbox};

/// Where the backend lives and how long to wait between connection attempts.
#[derive(Debug, Clone)]
pub struct LinkConfig {
    pub url: String,
    pub retry_delay: Duration,
}

/// How a connected session came to an end.
enum SessionEnd {
    Stopped,
    Dropped,
}

/// Websocket client for the SDR backend.
///
/// Runs on its own thread. Telemetry frames go to the UI through the
/// spectrum mailbox, status changes through the event channel. Settings
/// received as commands are pushed to the backend immediately when connected
/// and again on every reconnect.
pub struct Link {
    cmd_rx: Receiver<Command>,
    event_tx: Sender<Event>,
    spectrum: SpectrumPublisher,
    config: LinkConfig,
    settings: ReceiverSettings,
}

impl Link {
    pub fn new(
        cmd_rx: Receiver<Command>,
        event_tx: Sender<Event>,
        spectrum: SpectrumPublisher,
        config: LinkConfig,
        settings: ReceiverSettings,
    ) -> Self {
        debug!("Constructing a new backend link for {}", config.url);
        Self {
            cmd_rx,
            event_tx,
            spectrum,
            config,
            settings,
        }
    }

    /// Run the link (blocking) until `Command::Stop` arrives or the UI goes away.
    pub fn run(self) -> Result<()> {
        let runtime = tokio::runtime::Builder::new_current_thread()
            .enable_all()
            .build()
            .context("Failed to build the link runtime")?;
        runtime.block_on(self.run_sessions())
    }

    async fn run_sessions(mut self) -> Result<()> {
        loop {
            match self.session().await {
                Ok(SessionEnd::Stopped) | Err(LinkError::Detached) => break,
                Ok(SessionEnd::Dropped) => info!("Backend closed the connection"),
                Err(err) => warn!("Backend session ended: {err}"),
            }

            if self.event_tx.send(Event::Disconnected).is_err() {
                break;
            }
            if let SessionEnd::Stopped = self.wait_for_retry().await {
                break;
            }
        }
        debug!("Backend link stopped");
        Ok(())
    }

    async fn session(&mut self) -> Result<SessionEnd, LinkError> {
        let (socket, _response) = connect_async(self.config.url.as_str()).await?;
        info!("Connected to backend at {}", self.config.url);
        self.notify(Event::Connected)?;

        let (mut ws_tx, mut ws_rx) = socket.split();
        ws_tx.send(codec::encode(&self.settings)?).await?;

        loop {
            let step = tokio::select! {
                cmd = self.cmd_rx.recv_async() => Step::Command(cmd.ok()),
                msg = ws_rx.next() => Step::Socket(msg),
            };

            match step {
                Step::Command(Some(Command::Configure(settings))) => {
                    debug!("Forwarding settings: {settings:?}");
                    self.settings = settings;
                    ws_tx.send(codec::encode(&self.settings)?).await?;
                }
                Step::Command(Some(Command::Stop) | None) => {
                    let _ = ws_tx.send(Message::Close(None)).await;
                    return Ok(SessionEnd::Stopped);
                }
                Step::Socket(Some(Ok(message))) => self.handle_message(&message)?,
                Step::Socket(Some(Err(err))) => return Err(err.into()),
                Step::Socket(None) => return Ok(SessionEnd::Dropped),
            }
        }
    }

    fn handle_message(&self, message: &Message) -> Result<(), LinkError> {
        match codec::decode(message) {
            Inbound::Spectrum(frame) => {
                trace!("Spectrum frame, peak {}", frame.peak());
                self.spectrum.publish(SpectrumUpdate::new(frame))
            }
            Inbound::Notice(value) => self.notify(Event::Notice(value)),
            Inbound::Rejected(err) => {
                debug!("Dropping telemetry payload: {err}");
                Ok(())
            }
            Inbound::Ignored => Ok(()),
        }
    }

    /// Sleep out the retry delay while still honouring commands.
    async fn wait_for_retry(&mut self) -> SessionEnd {
        debug!("Reconnecting in {:?}", self.config.retry_delay);
        let sleep = tokio::time::sleep(self.config.retry_delay);
        tokio::pin!(sleep);

        loop {
            let cmd = tokio::select! {
                _ = &mut sleep => return SessionEnd::Dropped,
                cmd = self.cmd_rx.recv_async() => cmd,
            };
            match cmd {
                Ok(Command::Configure(settings)) => self.settings = settings,
                Ok(Command::Stop) | Err(_) => return SessionEnd::Stopped,
            }
        }
    }

    fn notify(&self, event: Event) -> Result<(), LinkError> {
        self.event_tx.send(event).map_err(|_| LinkError::Detached)
    }
}

enum Step {
    Command(Option<Command>),
    Socket(Option<Result<Message, tungstenite::Error>>),
}
