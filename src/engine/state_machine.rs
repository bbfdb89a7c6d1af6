use crate::channel::{AckOutcome, TransmitOutcome};

/// Where the sender/receiver pair stands for the chunk currently in flight.
///
/// `Send → AwaitResult → AwaitAck → Done` on the happy path. Losses,
/// drops and lost acknowledgments go back to `Send`; `Send` turns into
/// `Aborted` once the retry budget is spent.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ArqState {
    /// Sender is about to (re)transmit the chunk
    Send,
    /// Channel returned this outcome; receiver has not looked at it yet
    AwaitResult(TransmitOutcome),
    /// Receiver accepted packet `seq` and its acknowledgment took this path
    AwaitAck { seq: u64, ack: AckOutcome },
    /// Acknowledgment reached the sender
    Done,
    /// Retry budget exhausted; the whole run stops
    Aborted,
}

impl ArqState {
    pub fn is_terminal(&self) -> bool {
        matches!(self, ArqState::Done | ArqState::Aborted)
    }

    pub fn name(&self) -> &'static str {
        match self {
            ArqState::Send => "SEND",
            ArqState::AwaitResult(_) => "AWAIT_RESULT",
            ArqState::AwaitAck { .. } => "AWAIT_ACK",
            ArqState::Done => "DONE",
            ArqState::Aborted => "ABORTED",
        }
    }
}
