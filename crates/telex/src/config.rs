use serde::{Deserialize, Serialize};

pub const DEFAULT_API_BASE: &str = "https://api.telex.im/v1/messages";

/// Configuration for the Telex channel.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct TelexConfig {
    /// Message-delivery endpoint messages are POSTed to.
    pub api_base: String,
}

impl Default for TelexConfig {
    fn default() -> Self {
        Self {
            api_base: DEFAULT_API_BASE.into(),
        }
    }
}
