use crate::channel::error::{ChannelError, ChannelResult};
use crate::packet::Packet;
use serde::{Deserialize, Serialize};

/// Fault probabilities for the channel, each in `[0, 1]`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ChannelConfig {
    /// Chance that a data packet vanishes
    pub loss_rate: f64,
    /// Chance that a delivered data packet has one payload character mutated
    pub corruption_rate: f64,
    /// Chance that an acknowledgment vanishes on the return path
    pub ack_loss_rate: f64,
}

impl Default for ChannelConfig {
    fn default() -> Self {
        Self::perfect()
    }
}

impl ChannelConfig {
    /// Create a validated configuration
    pub fn new(loss_rate: f64, corruption_rate: f64, ack_loss_rate: f64) -> ChannelResult<Self> {
        let config = Self {
            loss_rate,
            corruption_rate,
            ack_loss_rate,
        };
        config.validate()?;
        Ok(config)
    }

    /// A channel that never loses or corrupts anything
    pub fn perfect() -> Self {
        Self {
            loss_rate: 0.0,
            corruption_rate: 0.0,
            ack_loss_rate: 0.0,
        }
    }

    /// Only data packets are lost, at the given rate
    pub fn with_loss(loss_rate: f64) -> Self {
        Self {
            loss_rate,
            ..Self::perfect()
        }
    }

    pub fn validate(&self) -> ChannelResult<()> {
        check_rate("loss_rate", self.loss_rate)?;
        check_rate("corruption_rate", self.corruption_rate)?;
        check_rate("ack_loss_rate", self.ack_loss_rate)
    }
}

fn check_rate(name: &'static str, value: f64) -> ChannelResult<()> {
    if value.is_finite() && (0.0..=1.0).contains(&value) {
        Ok(())
    } else {
        Err(ChannelError::InvalidRate { name, value })
    }
}

/// Result of pushing a data packet through the channel.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TransmitOutcome {
    Lost,
    /// Delivered with one payload character mutated and the original checksum
    Corrupted(Packet),
    Delivered(Packet),
}

impl TransmitOutcome {
    pub fn status(&self) -> &'static str {
        match self {
            TransmitOutcome::Lost => "lost",
            TransmitOutcome::Corrupted(_) => "corrupted",
            TransmitOutcome::Delivered(_) => "ok",
        }
    }
}

/// Result of pushing an acknowledgment back to the sender.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AckOutcome {
    Lost,
    Delivered(u64),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_perfect() {
        assert_eq!(ChannelConfig::default(), ChannelConfig::perfect());
    }

    #[test]
    fn test_bounds_are_inclusive() {
        assert!(ChannelConfig::new(0.0, 1.0, 0.5).is_ok());
    }

    #[test]
    fn test_rejects_out_of_range_rates() {
        let err = ChannelConfig::new(1.5, 0.0, 0.0).unwrap_err();
        assert_eq!(
            err,
            ChannelError::InvalidRate {
                name: "loss_rate",
                value: 1.5
            }
        );

        assert!(ChannelConfig::new(0.0, -0.1, 0.0).is_err());
        assert!(ChannelConfig::new(0.0, 0.0, f64::NAN).is_err());
    }

    #[test]
    fn test_status_strings() {
        let packet = Packet::build(0, "x");
        assert_eq!(TransmitOutcome::Lost.status(), "lost");
        assert_eq!(TransmitOutcome::Corrupted(packet.clone()).status(), "corrupted");
        assert_eq!(TransmitOutcome::Delivered(packet).status(), "ok");
    }
}
