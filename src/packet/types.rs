use crate::packet::checksum::compute_checksum;

/// The transmissible unit: one chunk of the message plus its sequence number.
///
/// Fields are private so a packet cannot be edited after construction; the
/// only way to alter a payload is [`Packet::with_payload`], which keeps the
/// original checksum and is how the channel models in-flight corruption.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Packet {
    seq: u64,
    payload: String,
    checksum: [u8; 32], // BLAKE3 of "{seq}|{payload}"
}

impl Packet {
    /// Build a packet and compute its checksum over `(seq, payload)`.
    pub fn build(seq: u64, payload: impl Into<String>) -> Self {
        let payload = payload.into();
        let checksum = compute_checksum(seq, &payload);
        Self {
            seq,
            payload,
            checksum,
        }
    }

    pub fn seq(&self) -> u64 {
        self.seq
    }

    pub fn payload(&self) -> &str {
        &self.payload
    }

    pub fn checksum(&self) -> &[u8; 32] {
        &self.checksum
    }

    pub fn is_corrupted(&self) -> bool {
        super::checksum::is_corrupted(self)
    }

    /// Copy of this packet carrying a different payload but the same
    /// sequence number and the ORIGINAL checksum.
    pub(crate) fn with_payload(&self, payload: String) -> Self {
        Self {
            seq: self.seq,
            payload,
            checksum: self.checksum,
        }
    }
}
