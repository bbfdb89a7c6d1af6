//! Unreliable channel between sender and receiver.
//!
//! Injects packet loss, payload corruption and acknowledgment loss with
//! independent probabilities. All randomness comes from a generator owned by
//! the channel instance, so a seeded channel replays the same faults.

mod error;
mod types;
mod unreliable;

pub use error::{ChannelError, ChannelResult};
pub use types::{AckOutcome, ChannelConfig, TransmitOutcome};
pub use unreliable::{corrupt_char, Channel, UnreliableChannel};
