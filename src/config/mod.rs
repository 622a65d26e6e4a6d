use std::net::{IpAddr, Ipv4Addr, SocketAddr};
use std::path::PathBuf;
use std::sync::Arc;
use log::warn;

pub const DEFAULT_PORT: u16 = 8000;

/// Server configuration
#[derive(Debug, Clone)]
pub struct Config {
    pub root: Arc<PathBuf>,
    pub port: u16,
    pub host: IpAddr,
    /// Upper bound on a save request body; `None` leaves it unbounded
    pub max_save_bytes: Option<usize>,
}

impl Config {
    /// Create a configuration rooted at the executable's own directory
    pub fn new() -> Self {
        Self {
            root: Arc::new(executable_dir()),
            port: DEFAULT_PORT,
            host: IpAddr::V4(Ipv4Addr::LOCALHOST),
            max_save_bytes: None,
        }
    }

    /// Create configuration with custom values
    pub fn with_custom(root: PathBuf, port: Option<u16>, host: Option<IpAddr>) -> Self {
        Self {
            root: Arc::new(root),
            port: port.unwrap_or(DEFAULT_PORT),
            host: host.unwrap_or(IpAddr::V4(Ipv4Addr::LOCALHOST)),
            max_save_bytes: None,
        }
    }

    /// Defaults, overridden by `MDSERVE_ROOT`, `MDSERVE_PORT` and `MDSERVE_MAX_SAVE_BYTES`
    pub fn from_env() -> Self {
        let mut config = Self::new();

        if let Ok(root) = std::env::var("MDSERVE_ROOT") {
            config.root = Arc::new(PathBuf::from(root));
        }
        if let Some(port) = parse_env("MDSERVE_PORT") {
            config.port = port;
        }
        if let Some(limit) = parse_env("MDSERVE_MAX_SAVE_BYTES") {
            config.max_save_bytes = Some(limit);
        }

        config
    }

    /// Get the socket address for binding
    pub fn socket_addr(&self) -> SocketAddr {
        SocketAddr::new(self.host, self.port)
    }
}

impl Default for Config {
    fn default() -> Self {
        Self::new()
    }
}

fn executable_dir() -> PathBuf {
    std::env::current_exe()
        .ok()
        .and_then(|exe| exe.parent().map(PathBuf::from))
        .unwrap_or_else(|| PathBuf::from("."))
}

fn parse_env<T: std::str::FromStr>(key: &str) -> Option<T> {
    let raw = std::env::var(key).ok()?;
    match raw.trim().parse() {
        Ok(value) => Some(value),
        Err(_) => {
            warn!("Ignoring {}={:?}: not a valid value", key, raw);
            None
        }
    }
}
