use crate::channel::{AckOutcome, Channel, TransmitOutcome, UnreliableChannel};
use crate::config::{ConfigError, ConfigUsed, SimulationConfig};
use crate::engine::error::EngineResult;
use crate::engine::state_machine::ArqState;
use crate::engine::timeline::Timeline;
use crate::engine::types::{Event, EventKind, SimulationResult, Stats};
use crate::packet::Packet;
use rand::Rng;
use std::time::Instant;
use tracing::{debug, info, info_span, warn};
use uuid::Uuid;

/// Drawn seeds stay below 2^53 so they survive a round trip through a
/// JSON client that reads numbers as doubles.
const DRAWN_SEED_LIMIT: u64 = 1 << 53;

/// Split `message` into chunks of at most `packet_size` characters.
///
/// Splits on `char` boundaries, never inside a multi-byte character. An empty
/// message or a zero `packet_size` yields no chunks.
pub fn chunk_message(message: &str, packet_size: usize) -> Vec<String> {
    if packet_size == 0 {
        return Vec::new();
    }
    let chars: Vec<char> = message.chars().collect();
    chars
        .chunks(packet_size)
        .map(|chunk| chunk.iter().collect())
        .collect()
}

/// Run one simulation with a freshly built, seeded [`UnreliableChannel`].
///
/// When `config.seed` is `None` a random seed below 2^53 is drawn; either way
/// the seed actually used is reported in `config_used.seed`.
pub fn simulate(config: &SimulationConfig) -> EngineResult<SimulationResult> {
    config.validate()?;

    let seed = config
        .seed
        .unwrap_or_else(|| rand::thread_rng().gen_range(0..DRAWN_SEED_LIMIT));
    let channel = UnreliableChannel::seeded(config.channel_config(), seed)?;
    let mut engine =
        StopAndWaitEngine::new(channel, config.packet_size, config.max_retries_per_packet)?;

    let run_id = Uuid::new_v4();
    let span = info_span!("simulation", %run_id, seed);
    let _guard = span.enter();

    let started = Instant::now();
    let outcome = engine.run(&config.message);
    crate::metrics::record_run(&outcome.stats, started.elapsed());

    Ok(SimulationResult {
        events: outcome.events,
        final_data: outcome.final_data,
        stats: outcome.stats,
        config_used: ConfigUsed::resolve(config, seed),
    })
}

/// Timeline, reassembled data and counters of a finished run.
#[derive(Debug, Clone)]
pub struct RunOutcome {
    pub events: Vec<Event>,
    pub final_data: String,
    pub stats: Stats,
}

/// State owned by a single run; nothing here outlives [`StopAndWaitEngine::run`].
struct SimulationRun {
    timeline: Timeline,
    stats: Stats,
    /// Receiver's expected-sequence cursor
    expected_seq: u64,
    /// Payloads handed to the receiver's application, in order
    delivered: Vec<String>,
    /// Chunks whose acknowledgment reached the sender
    acknowledged: usize,
}

impl SimulationRun {
    fn new(total_packets: usize) -> Self {
        Self {
            timeline: Timeline::new(),
            stats: Stats::new(total_packets as u64),
            expected_seq: 0,
            delivered: Vec::with_capacity(total_packets),
            acknowledged: 0,
        }
    }

    /// Only acknowledged chunks count towards the reassembled message. A
    /// chunk delivered to the receiver whose acknowledgment never came back
    /// is left out when the run aborts on it.
    fn finish(self) -> RunOutcome {
        let final_data = self.delivered[..self.acknowledged].concat();
        RunOutcome {
            events: self.timeline.into_events(),
            final_data,
            stats: self.stats,
        }
    }
}

/// Sender and receiver driving a single packet at a time over a [`Channel`].
pub struct StopAndWaitEngine<C> {
    channel: C,
    packet_size: usize,
    max_retries_per_packet: u32,
}

impl<C: Channel> StopAndWaitEngine<C> {
    pub fn new(channel: C, packet_size: usize, max_retries_per_packet: u32) -> EngineResult<Self> {
        if packet_size == 0 {
            return Err(ConfigError::InvalidPacketSize(packet_size).into());
        }
        if max_retries_per_packet == 0 {
            return Err(ConfigError::InvalidMaxRetries(max_retries_per_packet).into());
        }

        Ok(Self {
            channel,
            packet_size,
            max_retries_per_packet,
        })
    }

    /// Transfer `message` chunk by chunk until every chunk is acknowledged
    /// or one of them exhausts its retry budget.
    pub fn run(&mut self, message: &str) -> RunOutcome {
        let chunks = chunk_message(message, self.packet_size);
        let mut run = SimulationRun::new(chunks.len());

        info!(
            chunks = chunks.len(),
            packet_size = self.packet_size,
            max_retries = self.max_retries_per_packet,
            "starting stop-and-wait transfer"
        );

        for (seq, chunk) in chunks.iter().enumerate() {
            match self.transfer_chunk(&mut run, seq as u64, chunk) {
                ArqState::Done => run.acknowledged += 1,
                _ => {
                    run.stats.aborted = true;
                    warn!(seq, "retry budget exhausted, aborting run");
                    return run.finish();
                }
            }
        }

        info!(
            packets_sent = run.stats.packets_sent,
            retransmissions = run.stats.retransmissions,
            retransmission_ratio = run.stats.retransmission_ratio(),
            "transfer complete"
        );
        run.finish()
    }

    /// Drive one chunk to a terminal state.
    fn transfer_chunk(&mut self, run: &mut SimulationRun, seq: u64, chunk: &str) -> ArqState {
        let mut attempt: u32 = 0;
        let mut state = ArqState::Send;

        loop {
            debug!(seq, attempt, state = state.name(), "transition");
            state = match state {
                ArqState::Send => {
                    attempt += 1;
                    if attempt > self.max_retries_per_packet {
                        run.timeline.emit(
                            EventKind::Error,
                            seq,
                            format!("Max retries reached for packet {seq}. Aborting."),
                        );
                        ArqState::Aborted
                    } else {
                        self.send(run, seq, chunk, attempt)
                    }
                }
                ArqState::AwaitResult(outcome) => self.receive(run, seq, outcome),
                ArqState::AwaitAck { seq, ack } => Self::await_ack(run, seq, ack),
                terminal @ (ArqState::Done | ArqState::Aborted) => return terminal,
            };
        }
    }

    fn send(&mut self, run: &mut SimulationRun, seq: u64, chunk: &str, attempt: u32) -> ArqState {
        let packet = Packet::build(seq, chunk);

        run.timeline.emit_with_data(
            EventKind::SendPacket,
            seq,
            chunk,
            format!("Sender sends packet #{seq} (attempt {attempt})."),
        );
        run.stats.packets_sent += 1;
        if attempt > 1 {
            run.stats.retransmissions += 1;
        }

        ArqState::AwaitResult(self.channel.transmit(&packet))
    }

    fn receive(&mut self, run: &mut SimulationRun, seq: u64, outcome: TransmitOutcome) -> ArqState {
        let packet = match outcome {
            TransmitOutcome::Lost => {
                run.stats.packets_lost += 1;
                run.timeline.emit(
                    EventKind::PacketLost,
                    seq,
                    format!("Packet #{seq} was lost in the channel."),
                );
                return ArqState::Send;
            }
            TransmitOutcome::Corrupted(_) => {
                run.stats.packets_corrupted += 1;
                run.timeline.emit(
                    EventKind::PacketCorrupted,
                    seq,
                    format!("Packet #{seq} was corrupted in the channel."),
                );
                run.timeline.emit(
                    EventKind::DropCorrupted,
                    seq,
                    format!("Receiver drops corrupted packet #{seq}. No ACK sent."),
                );
                return ArqState::Send;
            }
            TransmitOutcome::Delivered(packet) => packet,
        };

        let got = packet.seq();
        run.timeline.emit_with_data(
            EventKind::PacketReceived,
            got,
            packet.payload(),
            format!("Receiver got packet #{got}."),
        );

        // The receiver trusts its own checksum, not the channel's verdict
        if packet.is_corrupted() {
            run.stats.packets_corrupted += 1;
            run.timeline.emit(
                EventKind::DropCorrupted,
                got,
                format!("Receiver detected corruption in packet #{got} and dropped it."),
            );
            return ArqState::Send;
        }

        if got != run.expected_seq {
            let expected = run.expected_seq;
            run.timeline.emit_unexpected(
                got,
                expected,
                format!("Receiver expected seq #{expected}, got #{got}. Dropping."),
            );
            return ArqState::Send;
        }

        run.delivered.push(packet.payload().to_string());
        run.stats.successful_packets += 1;
        run.expected_seq += 1;
        run.timeline.emit_with_data(
            EventKind::DeliverData,
            got,
            packet.payload(),
            format!("Receiver delivers data for packet #{got} to application."),
        );

        run.timeline.emit(
            EventKind::SendAck,
            got,
            format!("Receiver sends ACK for packet #{got}."),
        );
        ArqState::AwaitAck {
            seq: got,
            ack: self.channel.transmit_ack(got),
        }
    }

    fn await_ack(run: &mut SimulationRun, seq: u64, ack: AckOutcome) -> ArqState {
        match ack {
            AckOutcome::Lost => {
                run.stats.acks_lost += 1;
                run.timeline.emit(
                    EventKind::AckLost,
                    seq,
                    format!("ACK for packet #{seq} was lost."),
                );
                ArqState::Send
            }
            AckOutcome::Delivered(acked) => {
                run.timeline.emit(
                    EventKind::AckReceived,
                    acked,
                    format!("Sender received ACK for packet #{acked}."),
                );
                ArqState::Done
            }
        }
    }
}
