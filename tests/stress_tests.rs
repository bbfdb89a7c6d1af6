//! Stress tests for the Stop-and-Wait simulator
//!
//! Run with: cargo test --test stress_tests -- --nocapture

#[path = "stress/loss_sweep.rs"]
mod loss_sweep;

#[path = "stress/concurrent_runs.rs"]
mod concurrent_runs;
