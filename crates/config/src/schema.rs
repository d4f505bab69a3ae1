//! Config schema types.

use {
    devdict_telex::TelexConfig,
    serde::{Deserialize, Serialize},
};

/// Top-level devdict configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct DevdictConfig {
    pub server: ServerConfig,
    pub telex: TelexConfig,
}

/// HTTP listener settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ServerConfig {
    /// Address to bind to. Defaults to "127.0.0.1".
    pub bind: String,
    /// Port to listen on.
    pub port: u16,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            bind: "127.0.0.1".into(),
            port: 8330,
        }
    }
}
