use crate::ReceiverSettings;

/// Commands sent from the UI to the backend link.
#[derive(Debug)]
pub enum Command {
    /// Close the connection and terminate the link thread.
    Stop,
    /// Replace the receiver settings. The link forwards them to the backend
    /// right away when connected, and on the next connect otherwise.
    Configure(ReceiverSettings),
}
