use crate::config::error::{ConfigError, ConfigResult};
use std::net::SocketAddr;
use std::path::PathBuf;

pub const DEFAULT_LISTEN_ADDR: &str = "127.0.0.1:5000";

/// Settings for the HTTP host process.
#[derive(Debug, Clone)]
pub struct ServerConfig {
    /// Address to bind the HTTP listener
    pub listen_addr: SocketAddr,

    /// Directory with the browser UI; nothing is served when unset
    pub static_dir: Option<PathBuf>,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            listen_addr: SocketAddr::from(([127, 0, 0, 1], 5000)),
            static_dir: None,
        }
    }
}

impl ServerConfig {
    /// Read `ARQ_LISTEN_ADDR` and `ARQ_STATIC_DIR` from the environment
    pub fn from_env() -> ConfigResult<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> ConfigResult<Self> {
        let addr = lookup("ARQ_LISTEN_ADDR").unwrap_or_else(|| DEFAULT_LISTEN_ADDR.to_string());
        let listen_addr = addr
            .parse()
            .map_err(|e: std::net::AddrParseError| ConfigError::InvalidListenAddr {
                addr: addr.clone(),
                reason: e.to_string(),
            })?;

        let static_dir = lookup("ARQ_STATIC_DIR")
            .filter(|dir| !dir.is_empty())
            .map(PathBuf::from);

        Ok(Self {
            listen_addr,
            static_dir,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup(vars: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| map.get(key).cloned()
    }

    #[test]
    fn test_defaults_without_env() {
        let config = ServerConfig::from_lookup(lookup(&[])).unwrap();
        assert_eq!(config.listen_addr.port(), 5000);
        assert!(config.static_dir.is_none());
    }

    #[test]
    fn test_reads_overrides() {
        let config = ServerConfig::from_lookup(lookup(&[
            ("ARQ_LISTEN_ADDR", "0.0.0.0:8080"),
            ("ARQ_STATIC_DIR", "./frontend"),
        ]))
        .unwrap();

        assert_eq!(config.listen_addr.port(), 8080);
        assert_eq!(config.static_dir, Some(PathBuf::from("./frontend")));
    }

    #[test]
    fn test_rejects_bad_addr() {
        let result = ServerConfig::from_lookup(lookup(&[("ARQ_LISTEN_ADDR", "not-an-addr")]));
        assert!(matches!(result, Err(ConfigError::InvalidListenAddr { .. })));
    }
}
