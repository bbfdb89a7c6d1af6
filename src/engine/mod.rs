//! Stop-and-Wait ARQ engine.
//!
//! Splits a message into fixed-size chunks and pushes them one at a time
//! through a [`Channel`](crate::channel::Channel), retransmitting until each
//! chunk is acknowledged or its retry budget runs out. Every state transition
//! is appended to a timeline so a run can be replayed step by step.

mod error;
mod state_machine;
mod stop_and_wait;
mod timeline;
mod types;

pub use error::{EngineError, EngineResult};
pub use state_machine::ArqState;
pub use stop_and_wait::{chunk_message, simulate, RunOutcome, StopAndWaitEngine};
pub use timeline::Timeline;
pub use types::{Event, EventKind, Role, SimulationResult, Stats};
