//! Behaviour across the loss spectrum
//!
//! Sweeps loss rates with many seeds and checks the aggregate numbers move
//! the way the protocol predicts.

use stopwait_arq::config::SimulationConfig;
use stopwait_arq::engine::simulate;

const MESSAGE: &str = "Reliable delivery over an unreliable channel, one packet at a time.";

fn sweep(loss_rate: f64, seeds: u64) -> (usize, f64) {
    let mut completed = 0;
    let mut ratio_sum = 0.0;

    for seed in 0..seeds {
        let config = SimulationConfig {
            loss_rate,
            corruption_rate: 0.0,
            ack_loss_rate: 0.0,
            max_retries_per_packet: 20,
            ..SimulationConfig::with_message(MESSAGE)
        }
        .seed(seed);
        let result = simulate(&config).unwrap();

        if result.stats.is_complete() {
            completed += 1;
            assert_eq!(result.final_data, MESSAGE);
        }
        ratio_sum += result.stats.retransmission_ratio();
    }

    (completed, ratio_sum / seeds as f64)
}

#[test]
fn test_moderate_loss_always_recovers() {
    // P(20 consecutive losses at 30%) is ~3.5e-11 per packet
    let (completed, ratio) = sweep(0.3, 100);
    println!("loss 0.3: {completed}/100 completed, mean retransmission ratio {ratio:.3}");
    assert_eq!(completed, 100);
}

#[test]
fn test_retransmissions_grow_with_loss() {
    let (_, low) = sweep(0.1, 50);
    let (_, mid) = sweep(0.4, 50);
    let (_, high) = sweep(0.7, 50);

    println!("retransmission ratio: 0.1 -> {low:.3}, 0.4 -> {mid:.3}, 0.7 -> {high:.3}");
    assert!(low < mid);
    assert!(mid < high);
}

#[test]
fn test_near_total_loss_aborts() {
    let (completed, _) = sweep(0.99, 20);
    assert_eq!(completed, 0);
}

#[test]
fn test_ack_loss_prevents_completion() {
    // A lost acknowledgment is never recovered: the resend is a duplicate
    for seed in 0..20 {
        let config = SimulationConfig {
            loss_rate: 0.0,
            corruption_rate: 0.0,
            ack_loss_rate: 1.0,
            max_retries_per_packet: 5,
            ..SimulationConfig::with_message(MESSAGE)
        }
        .seed(seed);
        let result = simulate(&config).unwrap();

        assert!(result.stats.aborted);
        assert_eq!(result.stats.successful_packets, 1);
        assert_eq!(result.stats.acks_lost, 1);
        assert_eq!(result.final_data, "");
    }
}
