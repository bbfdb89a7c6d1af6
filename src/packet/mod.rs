pub mod checksum;
pub mod types;

pub use checksum::{compute_checksum, is_corrupted};
pub use types::Packet;
