//! Server configuration
//!
//! Settings come from an optional TOML/RON file, then the `PORT` environment
//! variable, then the command line, each overriding the last.

use arena_engine::config::{Config, ConfigError};
use serde::{Deserialize, Serialize};
use std::net::{IpAddr, Ipv4Addr, SocketAddr};
use std::path::{Path, PathBuf};

/// Environment variable overriding the port
pub const PORT_VAR: &str = "PORT";

/// Score server configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ServerConfig {
    /// Address to listen on
    pub bind_address: IpAddr,

    /// Port to listen on
    pub port: u16,

    /// Directory of the game client, served at `/`
    pub static_dir: PathBuf,

    /// JSON file holding the scores
    pub scores_file: PathBuf,

    /// Answer cross-origin requests from any origin
    pub allow_cors: bool,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            bind_address: IpAddr::V4(Ipv4Addr::UNSPECIFIED),
            port: 3000,
            static_dir: PathBuf::from("game"),
            scores_file: PathBuf::from("scores.json"),
            allow_cors: false,
        }
    }
}

impl Config for ServerConfig {}

impl ServerConfig {
    /// Load from `path`, or defaults when no path is given
    pub fn load(path: Option<&Path>) -> Result<Self, ConfigError> {
        Self::load_or_default(path)
    }

    /// Apply a `PORT` value. Unparseable values are logged and ignored.
    pub fn apply_port_var(&mut self, value: Option<&str>) {
        let Some(value) = value else {
            return;
        };
        match value.trim().parse() {
            Ok(port) => self.port = port,
            Err(_) => log::warn!("Ignoring {PORT_VAR}={value:?}: not a port number"),
        }
    }

    /// Socket address to bind
    pub const fn socket_addr(&self) -> SocketAddr {
        SocketAddr::new(self.bind_address, self.port)
    }
}
