//! Metrics recorder for simulation runs

use crate::engine::Stats;
use metrics::{counter, describe_counter, describe_histogram, histogram};
use std::time::Duration;

/// Register metric descriptions with the installed recorder.
///
/// Descriptions given before a recorder exists are discarded, so this runs
/// right after [`install_recorder`](crate::metrics::install_recorder)
/// succeeds. Repeating it only re-registers the same text.
pub fn init_metrics() {
    describe_counter!("arq_runs_total", "Total number of simulations run");
    describe_counter!(
        "arq_runs_aborted_total",
        "Simulations that stopped on an exhausted retry budget"
    );

    describe_counter!(
        "arq_packets_sent_total",
        "Data packets transmitted, retransmissions included"
    );
    describe_counter!("arq_retransmissions_total", "Data packet retransmissions");
    describe_counter!("arq_packets_lost_total", "Data packets lost in the channel");
    describe_counter!(
        "arq_packets_corrupted_total",
        "Data packets dropped as corrupted"
    );
    describe_counter!("arq_acks_lost_total", "Acknowledgments lost in the channel");
    describe_counter!(
        "arq_packets_delivered_total",
        "Packets delivered to the receiving application"
    );

    describe_histogram!(
        "arq_run_duration_seconds",
        "Wall-clock time spent computing one simulation"
    );
    describe_histogram!(
        "arq_retransmission_ratio",
        "Retransmissions divided by packets sent, per run"
    );
}

/// Fold the counters of one finished run into the process-wide metrics
pub fn record_run(stats: &Stats, duration: Duration) {
    counter!("arq_runs_total").increment(1);
    if stats.aborted {
        counter!("arq_runs_aborted_total").increment(1);
    }

    counter!("arq_packets_sent_total").increment(stats.packets_sent);
    counter!("arq_retransmissions_total").increment(stats.retransmissions);
    counter!("arq_packets_lost_total").increment(stats.packets_lost);
    counter!("arq_packets_corrupted_total").increment(stats.packets_corrupted);
    counter!("arq_acks_lost_total").increment(stats.acks_lost);
    counter!("arq_packets_delivered_total").increment(stats.successful_packets);

    histogram!("arq_run_duration_seconds").record(duration.as_secs_f64());
    histogram!("arq_retransmission_ratio").record(stats.retransmission_ratio());
}
