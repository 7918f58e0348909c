mod command;
mod event;
mod frame;
mod level;
mod state;
mod units;
mod wire;

pub use command::Command;
pub use event::{Event, SpectrumUpdate};
pub use frame::{FRAME_BYTES, FRAME_LEN, FrameError, MagnitudeFrame};
pub use level::SignalLevel;
pub use state::{DemodMode, ReceiverSettings, SamplingMode};
pub use units::{Decibels, Hertz};
pub use wire::{ControlMessage, WireConfig};
