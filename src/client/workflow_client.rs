//! # Workflow Client
//!
//! Stateless HTTP client for a Langflow flow-run endpoint. One call is one POST
//! to the configured URL; there are no retries and no timeout beyond reqwest's
//! defaults.

use async_trait::async_trait;
use reqwest::{Client, Url};
use serde::Serialize;
use serde_json::Value;
use tracing::{error, info, instrument};

use crate::config::LangflowConfig;
use crate::constants::flow_request::{INPUT_TYPE, OUTPUT_TYPE, SESSION_ID_PARAM};
use crate::error::{BridgeError, BridgeResult};

/// Remote workflow engine seen by the executor
#[async_trait]
pub trait WorkflowClient: Send + Sync {
    /// Run the flow once for the given input, grouped under `session_id` when non-empty
    async fn run_flow(&self, input_value: &str, session_id: Option<&str>) -> BridgeResult<Value>;
}

/// Request body accepted by the Langflow run endpoint
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FlowRunRequest<'a> {
    pub input_value: &'a str,
    pub output_type: &'static str,
    pub input_type: &'static str,
}

impl<'a> FlowRunRequest<'a> {
    pub fn chat(input_value: &'a str) -> Self {
        Self {
            input_value,
            output_type: OUTPUT_TYPE,
            input_type: INPUT_TYPE,
        }
    }
}

/// reqwest-backed [`WorkflowClient`] for a single Langflow endpoint
///
/// Cheap to clone and safe to share across concurrent executions.
#[derive(Clone)]
pub struct LangflowClient {
    client: Client,
    endpoint: Url,
    api_key: Option<String>,
}

impl std::fmt::Debug for LangflowClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("LangflowClient")
            .field("endpoint", &self.endpoint.as_str())
            .field("auth_enabled", &self.api_key.is_some())
            .finish()
    }
}

impl LangflowClient {
    /// Create a client for the configured endpoint
    ///
    /// Fails with a configuration error when the URL is empty or unparseable.
    pub fn new(config: &LangflowConfig) -> BridgeResult<Self> {
        // Re-validate in case the config was built field by field
        let config = LangflowConfig::new(config.url.clone(), config.api_key.clone())?;
        let endpoint = Url::parse(&config.url).map_err(|e| {
            BridgeError::configuration(format!("Invalid langflow_url {}: {e}", config.url))
        })?;

        let client = Client::builder()
            .user_agent(format!("a2a-langflow-bridge/{}", env!("CARGO_PKG_VERSION")))
            .build()
            .map_err(|e| BridgeError::configuration(format!("Failed to build HTTP client: {e}")))?;

        Ok(Self {
            client,
            endpoint,
            api_key: config.api_key,
        })
    }

    pub fn endpoint(&self) -> &Url {
        &self.endpoint
    }
}

#[async_trait]
impl WorkflowClient for LangflowClient {
    #[instrument(skip(self, input_value), fields(endpoint = %self.endpoint))]
    async fn run_flow(&self, input_value: &str, session_id: Option<&str>) -> BridgeResult<Value> {
        let payload = FlowRunRequest::chat(input_value);

        info!(endpoint = %self.endpoint, "Calling Langflow API");
        info!(
            payload = %serde_json::to_string_pretty(&payload).unwrap_or_default(),
            "Langflow request payload"
        );

        let mut request = self.client.post(self.endpoint.clone()).json(&payload);
        if let Some(api_key) = &self.api_key {
            request = request.bearer_auth(api_key);
        }
        if let Some(session_id) = session_id.filter(|s| !s.is_empty()) {
            request = request.query(&[(SESSION_ID_PARAM, session_id)]);
        }

        let response = request.send().await.map_err(|e| {
            error!(error = %e, "Error making API request to Langflow");
            BridgeError::Transport(e)
        })?;

        let status = response.status();
        let body = response.text().await.map_err(|e| {
            error!(error = %e, status = status.as_u16(), "Error reading Langflow response body");
            BridgeError::Transport(e)
        })?;

        if !status.is_success() {
            error!(status = status.as_u16(), body = %body, "Langflow returned an error status");
            return Err(BridgeError::http_status(status.as_u16(), body));
        }

        let result: Value = serde_json::from_str(&body).map_err(|e| {
            error!(error = %e, "Error parsing Langflow response");
            BridgeError::Decode(e)
        })?;

        info!(
            response = %serde_json::to_string_pretty(&result).unwrap_or_default(),
            "Langflow response received"
        );
        Ok(result)
    }
}
