use crate::channel::ChannelConfig;
use crate::config::error::{ConfigError, ConfigResult};
use serde::{Deserialize, Serialize};

pub const DEFAULT_PACKET_SIZE: usize = 4;
pub const DEFAULT_LOSS_RATE: f64 = 0.1;
pub const DEFAULT_CORRUPTION_RATE: f64 = 0.1;
pub const DEFAULT_ACK_LOSS_RATE: f64 = 0.05;
pub const DEFAULT_MAX_RETRIES_PER_PACKET: u32 = 20;

/// Parameters of one simulation run.
///
/// Every field has a default, so a caller may supply any subset of them
/// (an empty JSON object is a valid configuration).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SimulationConfig {
    pub message: String,
    /// Maximum characters per packet
    pub packet_size: usize,
    pub loss_rate: f64,
    pub corruption_rate: f64,
    pub ack_loss_rate: f64,
    pub max_retries_per_packet: u32,
    /// Seed for the channel's generator; a fresh one is drawn when absent
    #[serde(skip_serializing_if = "Option::is_none")]
    pub seed: Option<u64>,
}

impl Default for SimulationConfig {
    fn default() -> Self {
        Self {
            message: String::new(),
            packet_size: DEFAULT_PACKET_SIZE,
            loss_rate: DEFAULT_LOSS_RATE,
            corruption_rate: DEFAULT_CORRUPTION_RATE,
            ack_loss_rate: DEFAULT_ACK_LOSS_RATE,
            max_retries_per_packet: DEFAULT_MAX_RETRIES_PER_PACKET,
            seed: None,
        }
    }
}

impl SimulationConfig {
    /// Default parameters for the given message
    pub fn with_message(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            ..Default::default()
        }
    }

    /// Same message and sizes, but a channel that never misbehaves
    pub fn reliable(message: impl Into<String>) -> Self {
        Self {
            loss_rate: 0.0,
            corruption_rate: 0.0,
            ack_loss_rate: 0.0,
            ..Self::with_message(message)
        }
    }

    pub fn seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    pub fn channel_config(&self) -> ChannelConfig {
        ChannelConfig {
            loss_rate: self.loss_rate,
            corruption_rate: self.corruption_rate,
            ack_loss_rate: self.ack_loss_rate,
        }
    }

    pub fn validate(&self) -> ConfigResult<()> {
        if self.packet_size == 0 {
            return Err(ConfigError::InvalidPacketSize(self.packet_size));
        }
        if self.max_retries_per_packet == 0 {
            return Err(ConfigError::InvalidMaxRetries(self.max_retries_per_packet));
        }
        self.channel_config().validate()?;
        Ok(())
    }
}

/// Echo of the resolved parameters, returned with every result.
///
/// The message itself is not repeated; `seed` is always the seed the channel
/// actually ran with, so feeding it back reproduces the run.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ConfigUsed {
    pub packet_size: usize,
    pub loss_rate: f64,
    pub corruption_rate: f64,
    pub ack_loss_rate: f64,
    pub max_retries_per_packet: u32,
    pub seed: u64,
}

impl ConfigUsed {
    pub fn resolve(config: &SimulationConfig, seed: u64) -> Self {
        Self {
            packet_size: config.packet_size,
            loss_rate: config.loss_rate,
            corruption_rate: config.corruption_rate,
            ack_loss_rate: config.ack_loss_rate,
            max_retries_per_packet: config.max_retries_per_packet,
            seed,
        }
    }
}
