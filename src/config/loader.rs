//! # Configuration Loader
//!
//! Reads the bridge settings from environment variables through the `config`
//! crate and validates them into a [`BridgeConfig`]. Validation happens once at
//! startup so a missing endpoint is fatal before any task runs.

use config::{Config, Environment, Map};
use serde::Deserialize;
use tracing::{debug, info};

use super::{BridgeConfig, DeploymentProfile, LangflowConfig, ServerConfig};
use crate::constants::env;
use crate::error::{BridgeError, BridgeResult};

/// Recognized variables, as the environment source lowercases them
#[derive(Debug, Default, Deserialize)]
struct RawSettings {
    langflow_url: Option<String>,
    langflow_api_key: Option<String>,
    a2a_server_host: Option<String>,
    a2a_server_port: Option<String>,
    agent_profile: Option<String>,
}

const RECOGNIZED_VARIABLES: [&str; 5] = [
    env::LANGFLOW_URL,
    env::LANGFLOW_API_KEY,
    env::SERVER_HOST,
    env::SERVER_PORT,
    env::AGENT_PROFILE,
];

/// Entry point for building a validated [`BridgeConfig`]
pub struct ConfigManager;

impl ConfigManager {
    /// Load configuration from the process environment
    pub fn load() -> BridgeResult<BridgeConfig> {
        let variables: Map<String, String> = std::env::vars()
            .filter(|(key, _)| RECOGNIZED_VARIABLES.contains(&key.as_str()))
            .collect();
        Self::from_env_map(variables)
    }

    /// Load configuration from an explicit set of environment variables
    pub fn from_env_map(variables: Map<String, String>) -> BridgeResult<BridgeConfig> {
        let raw: RawSettings = Config::builder()
            .add_source(Environment::default().source(Some(variables)))
            .build()
            .and_then(|settings| settings.try_deserialize())
            .map_err(|e| {
                BridgeError::configuration(format!("Failed to read configuration: {e}"))
            })?;

        debug!(profile = ?raw.agent_profile, "Resolving bridge configuration");
        let config = Self::validate(raw)?;

        info!(
            profile = %config.profile,
            langflow_url = %config.langflow.url,
            api_key_configured = config.langflow.api_key.is_some(),
            bind_address = %config.server.bind_address(),
            "Bridge configuration loaded"
        );
        Ok(config)
    }

    fn validate(raw: RawSettings) -> BridgeResult<BridgeConfig> {
        let profile = match non_empty(raw.agent_profile) {
            Some(name) => name.parse()?,
            None => DeploymentProfile::default(),
        };

        let url = non_empty(raw.langflow_url).ok_or_else(|| {
            BridgeError::configuration(format!(
                "{} environment variable is required",
                env::LANGFLOW_URL
            ))
        })?;
        let langflow = LangflowConfig::new(url, raw.langflow_api_key)?;

        let defaults = ServerConfig::default();
        let host = match non_empty(raw.a2a_server_host) {
            Some(host) => host,
            None if profile.requires_server_settings() => {
                return Err(required_for_profile(env::SERVER_HOST, profile))
            }
            None => defaults.host,
        };
        let port = match non_empty(raw.a2a_server_port) {
            Some(port) => port.trim().parse::<u16>().map_err(|e| {
                BridgeError::configuration(format!(
                    "{} must be a valid port number, got {port:?}: {e}",
                    env::SERVER_PORT
                ))
            })?,
            None if profile.requires_server_settings() => {
                return Err(required_for_profile(env::SERVER_PORT, profile))
            }
            None => defaults.port,
        };

        Ok(BridgeConfig {
            langflow,
            server: ServerConfig { host, port },
            profile,
        })
    }
}

fn non_empty(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.trim().is_empty())
}

fn required_for_profile(variable: &str, profile: DeploymentProfile) -> BridgeError {
    BridgeError::configuration(format!(
        "{variable} environment variable is required for the {profile} profile"
    ))
}
