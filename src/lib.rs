//! Stop-and-Wait ARQ over an unreliable channel.
//!
//! A message is split into fixed-size packets, each protected by a BLAKE3
//! checksum, and pushed one at a time through a channel that loses, corrupts
//! and drops acknowledgments at configurable rates. Every run produces a
//! replayable event timeline plus summary statistics.
//!
//! - `packet`: packet construction and integrity checking
//! - `channel`: seeded fault injection
//! - `engine`: the sender/receiver state machine
//! - `config`: simulation and server parameters
//! - `metrics`: Prometheus counters across runs
//! - `api`: HTTP wrapper

pub mod api;
pub mod channel;
pub mod config;
pub mod engine;
pub mod metrics;
pub mod packet;

pub use config::SimulationConfig;
pub use engine::{simulate, SimulationResult};
