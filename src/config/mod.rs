//! # Bridge Configuration
//!
//! Explicit, immutable configuration values handed to the executor and the web
//! server. Nothing here is read from ambient global state after startup.
//!
//! ## Usage
//!
//! ```rust,no_run
//! use langflow_bridge::config::ConfigManager;
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! // Load configuration from the process environment
//! let config = ConfigManager::load()?;
//!
//! println!("Calling {} on behalf of {:?}", config.langflow.url, config.profile);
//! # Ok(())
//! # }
//! ```

pub mod loader;

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::constants::server::{DEFAULT_HOST, DEFAULT_PORT};
use crate::error::{BridgeError, BridgeResult};

pub use loader::ConfigManager;

/// Remote workflow endpoint settings
#[derive(Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LangflowConfig {
    /// Flow run URL, called as-is without any appended path
    pub url: String,
    /// Bearer token sent in the `Authorization` header when present
    pub api_key: Option<String>,
}

impl LangflowConfig {
    /// Validate and normalize the endpoint settings
    ///
    /// Fails with a configuration error when the URL is empty. Trailing slashes
    /// are stripped and an empty API key counts as absent.
    pub fn new(url: impl Into<String>, api_key: Option<String>) -> BridgeResult<Self> {
        let url = url.into();
        let url = url.trim().trim_end_matches('/');
        if url.is_empty() {
            return Err(BridgeError::configuration("langflow_url is required"));
        }

        Ok(Self {
            url: url.to_string(),
            api_key: api_key.filter(|key| !key.trim().is_empty()),
        })
    }
}

// Keep the API key out of debug output
impl fmt::Debug for LangflowConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("LangflowConfig")
            .field("url", &self.url)
            .field("api_key_configured", &self.api_key.is_some())
            .finish()
    }
}

/// HTTP listener settings
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: DEFAULT_HOST.to_string(),
            port: DEFAULT_PORT,
        }
    }
}

impl ServerConfig {
    pub fn bind_address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

/// Deployment profiles sharing one executor
///
/// They differ only in advertised metadata and in whether the listener
/// settings have defaults.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "kebab-case")]
pub enum DeploymentProfile {
    /// Single chat skill; host and port fall back to defaults
    #[default]
    LangflowChat,
    /// Three-skill starter agent; host and port must be configured
    SimpleAgent,
}

impl DeploymentProfile {
    pub fn requires_server_settings(&self) -> bool {
        matches!(self, Self::SimpleAgent)
    }
}

impl fmt::Display for DeploymentProfile {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::LangflowChat => write!(f, "langflow-chat"),
            Self::SimpleAgent => write!(f, "simple-agent"),
        }
    }
}

impl FromStr for DeploymentProfile {
    type Err = BridgeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "langflow-chat" | "langflow_chat" => Ok(Self::LangflowChat),
            "simple-agent" | "simple_agent" => Ok(Self::SimpleAgent),
            other => Err(BridgeError::configuration(format!(
                "Unknown agent profile: {other}"
            ))),
        }
    }
}

/// Complete bridge configuration
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BridgeConfig {
    pub langflow: LangflowConfig,
    pub server: ServerConfig,
    pub profile: DeploymentProfile,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_langflow_config_requires_url() {
        assert!(matches!(
            LangflowConfig::new("", None),
            Err(BridgeError::Configuration(_))
        ));
        assert!(matches!(
            LangflowConfig::new("   ", None),
            Err(BridgeError::Configuration(_))
        ));
        assert!(matches!(
            LangflowConfig::new("/", None),
            Err(BridgeError::Configuration(_))
        ));
    }

    #[test]
    fn test_langflow_config_normalization() {
        let config =
            LangflowConfig::new("http://localhost:7860/api/v1/run/flow//", Some(String::new()))
                .unwrap();
        assert_eq!(config.url, "http://localhost:7860/api/v1/run/flow");
        assert_eq!(config.api_key, None);
    }

    #[test]
    fn test_debug_output_hides_api_key() {
        let config = LangflowConfig::new("http://x", Some("sk-secret".to_string())).unwrap();
        let debug = format!("{config:?}");
        assert!(!debug.contains("sk-secret"));
        assert!(debug.contains("api_key_configured: true"));
    }

    #[test]
    fn test_profile_parsing() {
        assert_eq!(
            "simple-agent".parse::<DeploymentProfile>().unwrap(),
            DeploymentProfile::SimpleAgent
        );
        assert_eq!(
            "Langflow_Chat".parse::<DeploymentProfile>().unwrap(),
            DeploymentProfile::LangflowChat
        );
        assert!("other".parse::<DeploymentProfile>().is_err());
        assert_eq!(DeploymentProfile::default().to_string(), "langflow-chat");
    }

    #[test]
    fn test_server_bind_address() {
        assert_eq!(ServerConfig::default().bind_address(), "0.0.0.0:9999");
    }
}
