use crate::config::ConfigUsed;
use serde::{Deserialize, Serialize};

/// What happened at a timeline step.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum EventKind {
    SendPacket,
    PacketLost,
    PacketCorrupted,
    DropCorrupted,
    PacketReceived,
    UnexpectedSeq,
    DeliverData,
    SendAck,
    AckLost,
    AckReceived,
    Error,
}

impl EventKind {
    /// The party that observes this kind of event
    pub fn role(self) -> Role {
        match self {
            EventKind::SendPacket | EventKind::AckReceived | EventKind::Error => Role::Sender,
            EventKind::PacketLost | EventKind::PacketCorrupted | EventKind::AckLost => {
                Role::Channel
            }
            EventKind::DropCorrupted
            | EventKind::PacketReceived
            | EventKind::UnexpectedSeq
            | EventKind::DeliverData
            | EventKind::SendAck => Role::Receiver,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            EventKind::SendPacket => "send_packet",
            EventKind::PacketLost => "packet_lost",
            EventKind::PacketCorrupted => "packet_corrupted",
            EventKind::DropCorrupted => "drop_corrupted",
            EventKind::PacketReceived => "packet_received",
            EventKind::UnexpectedSeq => "unexpected_seq",
            EventKind::DeliverData => "deliver_data",
            EventKind::SendAck => "send_ack",
            EventKind::AckLost => "ack_lost",
            EventKind::AckReceived => "ack_received",
            EventKind::Error => "error",
        }
    }
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    Sender,
    Receiver,
    Channel,
}

/// One entry of the timeline. Never modified once recorded.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Event {
    pub step: u64,
    #[serde(rename = "type")]
    pub kind: EventKind,
    pub who: Role,
    pub seq: u64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub data: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub expected_seq: Option<u64>,
    pub description: String,
}

/// Counters for one run.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct Stats {
    pub total_packets: u64,
    /// Every transmission, first attempts and retransmissions alike
    pub packets_sent: u64,
    pub retransmissions: u64,
    pub packets_lost: u64,
    /// Channel-reported corruption plus receiver checksum mismatches
    pub packets_corrupted: u64,
    pub acks_lost: u64,
    /// Delivered to the receiver's application
    pub successful_packets: u64,
    pub aborted: bool,
}

impl Stats {
    pub fn new(total_packets: u64) -> Self {
        Self {
            total_packets,
            ..Default::default()
        }
    }

    /// Share of transmissions that were retransmissions
    pub fn retransmission_ratio(&self) -> f64 {
        if self.packets_sent == 0 {
            0.0
        } else {
            self.retransmissions as f64 / self.packets_sent as f64
        }
    }

    pub fn is_complete(&self) -> bool {
        !self.aborted && self.successful_packets == self.total_packets
    }
}

/// Everything a caller gets back from a simulation.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct SimulationResult {
    pub events: Vec<Event>,
    /// Reassembled message; a prefix of the input when the run aborted
    pub final_data: String,
    pub stats: Stats,
    pub config_used: ConfigUsed,
}

impl SimulationResult {
    /// Sequence numbers handed to the receiver's application, in order
    pub fn delivered_sequences(&self) -> Vec<u64> {
        self.events
            .iter()
            .filter(|e| e.kind == EventKind::DeliverData)
            .map(|e| e.seq)
            .collect()
    }

    pub fn count(&self, kind: EventKind) -> usize {
        self.events.iter().filter(|e| e.kind == kind).count()
    }
}
