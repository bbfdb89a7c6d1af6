//! Concurrent simulation stress tests
//!
//! Many runs on the blocking pool at once must not interfere: each one owns
//! its engine, channel and statistics.

use std::time::Instant;
use stopwait_arq::config::SimulationConfig;
use stopwait_arq::engine::{simulate, SimulationResult};

fn config_for(id: u64) -> SimulationConfig {
    SimulationConfig {
        packet_size: 1 + (id % 5) as usize,
        ..SimulationConfig::with_message(format!("concurrent transfer number {id}"))
    }
    .seed(id)
}

#[tokio::test(flavor = "multi_thread", worker_threads = 4)]
async fn test_concurrent_runs_match_sequential() {
    let runs = 64;
    let start = Instant::now();

    let handles: Vec<_> = (0..runs)
        .map(|id| tokio::task::spawn_blocking(move || simulate(&config_for(id)).unwrap()))
        .collect();

    let mut concurrent: Vec<SimulationResult> = Vec::with_capacity(runs as usize);
    for handle in handles {
        concurrent.push(handle.await.unwrap());
    }
    println!("{runs} concurrent runs in {:?}", start.elapsed());

    for (id, result) in concurrent.iter().enumerate() {
        let sequential = simulate(&config_for(id as u64)).unwrap();
        assert_eq!(*result, sequential, "run {id} diverged");
    }
}
