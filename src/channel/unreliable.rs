use crate::channel::error::ChannelResult;
use crate::channel::types::{AckOutcome, ChannelConfig, TransmitOutcome};
use crate::packet::Packet;
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

/// The path between sender and receiver as seen by the engine.
///
/// [`UnreliableChannel`] is the probabilistic implementation; tests may plug
/// in scripted channels that return fixed outcomes.
pub trait Channel {
    /// Carry a data packet from sender to receiver
    fn transmit(&mut self, packet: &Packet) -> TransmitOutcome;

    /// Carry an acknowledgment from receiver to sender
    fn transmit_ack(&mut self, seq: u64) -> AckOutcome;
}

/// Channel that loses and corrupts traffic at configured rates.
///
/// Each data transmission performs one loss draw and, only if not lost, one
/// corruption draw. Each acknowledgment performs a single loss draw. A draw
/// "hits" when a uniform sample from `[0, 1)` is below the rate.
pub struct UnreliableChannel<R = ChaCha8Rng> {
    config: ChannelConfig,
    rng: R,
}

impl UnreliableChannel<ChaCha8Rng> {
    /// Create a channel driven by a ChaCha8 generator seeded with `seed`
    pub fn seeded(config: ChannelConfig, seed: u64) -> ChannelResult<Self> {
        Self::with_rng(config, ChaCha8Rng::seed_from_u64(seed))
    }
}

impl<R: Rng> UnreliableChannel<R> {
    pub fn with_rng(config: ChannelConfig, rng: R) -> ChannelResult<Self> {
        config.validate()?;
        Ok(Self { config, rng })
    }

    pub fn config(&self) -> &ChannelConfig {
        &self.config
    }

    fn hit(&mut self, rate: f64) -> bool {
        self.rng.gen::<f64>() < rate
    }

    fn corrupt(&mut self, packet: &Packet) -> Packet {
        let len = packet.payload().chars().count();
        if len == 0 {
            return packet.clone();
        }

        let idx = self.rng.gen_range(0..len);
        let payload = packet
            .payload()
            .chars()
            .enumerate()
            .map(|(i, c)| if i == idx { corrupt_char(c) } else { c })
            .collect();

        packet.with_payload(payload)
    }
}

impl<R: Rng> Channel for UnreliableChannel<R> {
    fn transmit(&mut self, packet: &Packet) -> TransmitOutcome {
        if self.hit(self.config.loss_rate) {
            return TransmitOutcome::Lost;
        }

        if self.hit(self.config.corruption_rate) {
            let corrupted = self.corrupt(packet);
            return TransmitOutcome::Corrupted(corrupted);
        }

        TransmitOutcome::Delivered(packet.clone())
    }

    fn transmit_ack(&mut self, seq: u64) -> AckOutcome {
        if self.hit(self.config.ack_loss_rate) {
            AckOutcome::Lost
        } else {
            AckOutcome::Delivered(seq)
        }
    }
}

/// Shift a character to the next code point modulo 128.
///
/// The result is always ASCII and always differs from the input: ASCII input
/// moves by one (wrapping 127 to 0), anything above ASCII folds into range.
pub fn corrupt_char(c: char) -> char {
    char::from(((c as u32 + 1) % 128) as u8)
}
