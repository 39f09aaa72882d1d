//! Configuration schema definitions.
//!
//! All types derive Serde traits for deserialization from config files.
//! Every field has a default so an empty file is a valid config.

use serde::{Deserialize, Serialize};

/// Port used when neither the config file nor the command line names one.
pub const DEFAULT_PORT: u16 = 8080;

/// Root configuration for the server.
#[derive(Debug, Clone, Deserialize, Serialize, Default, PartialEq, Eq)]
#[serde(default)]
pub struct ServerConfig {
    /// Listener configuration (bind host and port).
    pub listener: ListenerConfig,

    /// Raw header specifications in `Name: Value` form, applied in order.
    pub headers: Vec<String>,
}

impl ServerConfig {
    /// Layer command line settings over this config.
    ///
    /// Explicit values replace file values; headers are appended so that
    /// command line headers win on duplicate names.
    pub fn apply_overrides(
        &mut self,
        host: Option<String>,
        port: Option<u16>,
        headers: impl IntoIterator<Item = String>,
    ) {
        if let Some(host) = host {
            self.listener.host = host;
        }
        if let Some(port) = port {
            self.listener.port = port;
        }
        self.headers.extend(headers);
    }
}

/// Listener configuration.
#[derive(Debug, Clone, Deserialize, Serialize, PartialEq, Eq)]
#[serde(default)]
pub struct ListenerConfig {
    /// IP address to bind (e.g., "::" or "127.0.0.1").
    pub host: String,

    /// TCP port to bind.
    pub port: u16,
}

impl ListenerConfig {
    /// `host:port` as used in log output.
    pub fn bind_address(&self) -> String {
        if self.host.contains(':') {
            format!("[{}]:{}", self.host, self.port)
        } else {
            format!("{}:{}", self.host, self.port)
        }
    }
}

impl Default for ListenerConfig {
    fn default() -> Self {
        Self {
            host: "::".to_string(),
            port: DEFAULT_PORT,
        }
    }
}
