//! # Bridge Constants
//!
//! Fixed strings and defaults shared by the executor, the workflow client and
//! the HTTP transport.

/// Returned by the response extractor when no reply text can be located
pub const NO_MESSAGE_TEXT_FALLBACK: &str = "No message text found in response";

/// Prefix of the extractor's fallback when the response has an unexpected shape
pub const EXTRACTION_ERROR_PREFIX: &str = "Error extracting response";

/// Progress message carried by the `working` status event
pub const WORKING_MESSAGE: &str = "Processing your request with Langflow...";

/// Prefix of the message carried by the `failed` status event
pub const FAILURE_MESSAGE_PREFIX: &str = "Error processing request";

/// Name of the artifact holding the workflow reply
pub const ARTIFACT_NAME: &str = "Langflow Response";

/// Fixed request body fields sent to the workflow engine
pub mod flow_request {
    pub const OUTPUT_TYPE: &str = "chat";
    pub const INPUT_TYPE: &str = "chat";
    pub const SESSION_ID_PARAM: &str = "session_id";
}

/// Server defaults for the `langflow-chat` deployment profile
pub mod server {
    pub const DEFAULT_HOST: &str = "0.0.0.0";
    pub const DEFAULT_PORT: u16 = 9999;
    pub const AGENT_VERSION: &str = "1.0.0";
}

/// Environment variable names read by the configuration loader
pub mod env {
    pub const LANGFLOW_URL: &str = "LANGFLOW_URL";
    pub const LANGFLOW_API_KEY: &str = "LANGFLOW_API_KEY";
    pub const SERVER_HOST: &str = "A2A_SERVER_HOST";
    pub const SERVER_PORT: &str = "A2A_SERVER_PORT";
    pub const AGENT_PROFILE: &str = "AGENT_PROFILE";
}

/// JSON-RPC 2.0 error codes, including the A2A-specific range
pub mod jsonrpc {
    pub const VERSION: &str = "2.0";

    pub const PARSE_ERROR: i64 = -32700;
    pub const INVALID_REQUEST: i64 = -32600;
    pub const METHOD_NOT_FOUND: i64 = -32601;
    pub const INVALID_PARAMS: i64 = -32602;
    pub const INTERNAL_ERROR: i64 = -32603;
    pub const TASK_NOT_FOUND: i64 = -32001;
    pub const TASK_NOT_CANCELABLE: i64 = -32002;
    pub const UNSUPPORTED_OPERATION: i64 = -32004;

    pub const METHOD_MESSAGE_SEND: &str = "message/send";
    pub const METHOD_TASKS_GET: &str = "tasks/get";
    pub const METHOD_TASKS_CANCEL: &str = "tasks/cancel";
}
