use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum ConfigError {
    #[error("Invalid packet size: must be a positive integer, got {0}")]
    InvalidPacketSize(usize),

    #[error("Invalid {name}: {value} is not a probability in [0, 1]")]
    InvalidRate { name: &'static str, value: f64 },

    #[error("Invalid max retries per packet: must be a positive integer, got {0}")]
    InvalidMaxRetries(u32),

    #[error("Invalid listen address {addr}: {reason}")]
    InvalidListenAddr { addr: String, reason: String },
}

impl From<crate::channel::ChannelError> for ConfigError {
    fn from(err: crate::channel::ChannelError) -> Self {
        match err {
            crate::channel::ChannelError::InvalidRate { name, value } => {
                ConfigError::InvalidRate { name, value }
            }
        }
    }
}

pub type ConfigResult<T> = Result<T, ConfigError>;
