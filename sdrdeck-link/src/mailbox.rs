use flume::{Receiver, Sender, TrySendError};
use sdrdeck_messages::SpectrumUpdate;

use crate::LinkError;

/// Create the single-slot spectrum mailbox shared by the link and the UI.
///
/// The slot holds at most one update. Publishing into a full slot evicts the
/// unread update, so the reader always sees the most recent frame and a slow
/// reader never builds a backlog.
pub fn spectrum_mailbox() -> (SpectrumPublisher, Receiver<SpectrumUpdate>) {
    let (tx, rx) = flume::bounded(1);
    let publisher = SpectrumPublisher {
        tx,
        evict: rx.clone(),
    };
    (publisher, rx)
}

/// Writing end of the spectrum mailbox. The link thread owns the only one.
pub struct SpectrumPublisher {
    tx: Sender<SpectrumUpdate>,
    evict: Receiver<SpectrumUpdate>,
}

impl SpectrumPublisher {
    pub fn publish(&self, update: SpectrumUpdate) -> Result<(), LinkError> {
        // Our own eviction handle counts as a receiver.
        if self.tx.receiver_count() <= 1 {
            return Err(LinkError::Detached);
        }

        let mut update = update;
        loop {
            match self.tx.try_send(update) {
                Ok(()) => return Ok(()),
                Err(TrySendError::Full(rejected)) => {
                    let _stale = self.evict.try_recv();
                    update = rejected;
                }
                Err(TrySendError::Disconnected(_)) => return Err(LinkError::Detached),
            }
        }
    }
}
