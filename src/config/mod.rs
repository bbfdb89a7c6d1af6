mod error;
mod server;
mod types;

pub use error::{ConfigError, ConfigResult};
pub use server::ServerConfig;
pub use types::{ConfigUsed, SimulationConfig};
