use crate::packet::types::Packet;
use blake3::Hasher;

/// Calculate the BLAKE3 checksum of a `(seq, payload)` pair.
///
/// The pair is encoded as `"{seq}|{payload}"` in UTF-8, both at construction
/// time and when a receiver re-validates a packet.
pub fn compute_checksum(seq: u64, payload: &str) -> [u8; 32] {
    let mut hasher = Hasher::new();
    hasher.update(seq.to_string().as_bytes());
    hasher.update(b"|");
    hasher.update(payload.as_bytes());
    *hasher.finalize().as_bytes()
}

/// Recompute the checksum from the packet's current contents and compare it
/// against the one stored at construction.
pub fn is_corrupted(packet: &Packet) -> bool {
    compute_checksum(packet.seq(), packet.payload()) != *packet.checksum()
}
