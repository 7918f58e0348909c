use sdrdeck_link::{Link, LinkConfig, spectrum_mailbox};
use sdrdeck_messages::{Command, Hertz, ReceiverSettings};

use clap::Parser;
use log::{LevelFilter, info};
use std::io::Write;
use std::time::Duration;

/// Operator console for a networked SDR receiver.
#[derive(Debug, Parser)]
#[command(version, about)]
struct Args {
    /// Websocket URL of the SDR backend
    #[arg(long, default_value = "ws://localhost:8765")]
    server: String,

    /// Initial center frequency in Hz
    #[arg(long)]
    frequency: Option<u64>,

    /// Device sample rate in samples per second (also the visible span)
    #[arg(long)]
    sample_rate: Option<u64>,

    /// Initial tuning step in Hz
    #[arg(long)]
    step: Option<u64>,

    /// Seconds to wait between reconnect attempts
    #[arg(long, default_value_t = 3)]
    retry_secs: u64,

    /// Default log level; RUST_LOG still applies on top
    #[arg(long, default_value_t = LevelFilter::Info)]
    log_level: LevelFilter,
}

impl Args {
    fn receiver_settings(&self) -> ReceiverSettings {
        let defaults = ReceiverSettings::default();
        ReceiverSettings {
            frequency: self.frequency.map_or(defaults.frequency, Hertz),
            sample_rate: self.sample_rate.map_or(defaults.sample_rate, Hertz),
            step: self.step.map_or(defaults.step, Hertz),
            ..defaults
        }
    }

    fn link_config(&self) -> LinkConfig {
        LinkConfig {
            url: self.server.clone(),
            retry_delay: Duration::from_secs(self.retry_secs),
        }
    }
}

fn main() -> anyhow::Result<()> {
    let args = Args::parse();

    env_logger::builder()
        .format(|buf, record| {
            writeln!(
                buf,
                "{:<5} - mod path |{}| - target | {} | args: |{}|",
                record.level(),
                record.module_path().unwrap_or(""),
                record.target(),
                record.args()
            )
        })
        .filter_level(args.log_level)
        .filter_module("tungstenite", LevelFilter::Warn)
        .filter_module("tokio_tungstenite", LevelFilter::Warn)
        .filter_module("sdrdeck_link", args.log_level)
        .filter_module("sdrdeck_ui", args.log_level)
        .parse_default_env()
        .init();

    let settings = args.receiver_settings();
    info!("Starting sdrdeck against {} at {}", args.server, settings.frequency);

    let (cmd_tx, cmd_rx) = flume::unbounded();
    let (event_tx, event_rx) = flume::unbounded();
    let (publisher, spectrum_rx) = spectrum_mailbox();

    // Spawn link thread
    let link_config = args.link_config();
    let link_settings = settings.clone();
    let link_handle = std::thread::spawn(move || {
        let link = Link::new(cmd_rx, event_tx, publisher, link_config, link_settings);
        link.run().expect("Backend link failed");
    });

    // Run UI on main thread (blocking)
    sdrdeck_ui::run(event_rx, spectrum_rx, cmd_tx.clone(), settings)?;

    // UI has exited - make sure the link stops
    let _ = cmd_tx.send(Command::Stop);

    link_handle
        .join()
        .map_err(|_| anyhow::anyhow!("Link thread panicked"))?;

    Ok(())
}
