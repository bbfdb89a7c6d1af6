use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum ChannelError {
    #[error("Invalid {name}: {value} is not a probability in [0, 1]")]
    InvalidRate { name: &'static str, value: f64 },
}

pub type ChannelResult<T> = Result<T, ChannelError>;
