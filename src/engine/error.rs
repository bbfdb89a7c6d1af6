use thiserror::Error;

/// Errors raised before a run starts.
///
/// Running out of retries is not an error: it is reported through
/// `Stats::aborted` on an otherwise normal result.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum EngineError {
    #[error("Configuration error: {0}")]
    Config(#[from] crate::config::ConfigError),

    #[error("Channel error: {0}")]
    Channel(#[from] crate::channel::ChannelError),
}

pub type EngineResult<T> = Result<T, EngineError>;
