//! # JSON-RPC Handler
//!
//! Decodes JSON-RPC 2.0 envelopes posted to `/`, dispatches the A2A methods to
//! the request handler and encodes results and errors. Protocol errors are
//! always answered with HTTP 200 and an `error` member.

use axum::body::Bytes;
use axum::extract::State;
use axum::Json;
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::sync::Arc;
use tracing::{debug, warn};

use crate::constants::jsonrpc::{
    INTERNAL_ERROR, INVALID_PARAMS, INVALID_REQUEST, METHOD_MESSAGE_SEND, METHOD_NOT_FOUND,
    METHOD_TASKS_CANCEL, METHOD_TASKS_GET, PARSE_ERROR, TASK_NOT_CANCELABLE, TASK_NOT_FOUND,
    UNSUPPORTED_OPERATION, VERSION,
};
use crate::error::BridgeError;
use crate::events::AgentEvent;
use crate::models::Task;
use crate::web::state::AppState;

#[derive(Debug, Clone, Deserialize)]
pub struct JsonRpcRequest {
    pub jsonrpc: String,
    pub method: String,
    #[serde(default)]
    pub params: Option<Value>,
    #[serde(default)]
    pub id: Option<Value>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct JsonRpcError {
    pub code: i64,
    pub message: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub data: Option<Value>,
}

impl JsonRpcError {
    pub fn new(code: i64, message: impl Into<String>) -> Self {
        Self {
            code,
            message: message.into(),
            data: None,
        }
    }
}

impl From<BridgeError> for JsonRpcError {
    fn from(error: BridgeError) -> Self {
        let code = match &error {
            BridgeError::TaskNotFound { .. } => TASK_NOT_FOUND,
            BridgeError::TaskNotCancelable { .. } => TASK_NOT_CANCELABLE,
            BridgeError::UnsupportedOperation(_) => UNSUPPORTED_OPERATION,
            BridgeError::InvalidParams(_) => INVALID_PARAMS,
            _ => INTERNAL_ERROR,
        };
        Self::new(code, error.to_string())
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct JsonRpcResponse {
    pub jsonrpc: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub result: Option<Value>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<JsonRpcError>,
    pub id: Value,
}

impl JsonRpcResponse {
    pub fn success(id: Value, result: Value) -> Self {
        Self {
            jsonrpc: VERSION.to_string(),
            result: Some(result),
            error: None,
            id,
        }
    }

    pub fn failure(id: Value, error: JsonRpcError) -> Self {
        Self {
            jsonrpc: VERSION.to_string(),
            result: None,
            error: Some(error),
            id,
        }
    }
}

/// JSON-RPC endpoint: POST /
pub async fn handle_rpc(State(state): State<Arc<AppState>>, body: Bytes) -> Json<JsonRpcResponse> {
    let raw: Value = match serde_json::from_slice(&body) {
        Ok(raw) => raw,
        Err(e) => {
            warn!(error = %e, "Rejecting unparseable JSON-RPC body");
            return Json(JsonRpcResponse::failure(
                Value::Null,
                JsonRpcError::new(PARSE_ERROR, format!("Parse error: {e}")),
            ));
        }
    };

    let id = raw.get("id").cloned().unwrap_or(Value::Null);
    let request = match serde_json::from_value::<JsonRpcRequest>(raw) {
        Ok(request) if request.jsonrpc == VERSION => request,
        Ok(request) => {
            return Json(JsonRpcResponse::failure(
                id,
                JsonRpcError::new(
                    INVALID_REQUEST,
                    format!("Unsupported jsonrpc version: {}", request.jsonrpc),
                ),
            ));
        }
        Err(e) => {
            return Json(JsonRpcResponse::failure(
                id,
                JsonRpcError::new(INVALID_REQUEST, format!("Invalid request: {e}")),
            ));
        }
    };

    debug!(method = %request.method, "Dispatching JSON-RPC request");
    let id = request.id.unwrap_or(Value::Null);
    let response = match dispatch(&state, &request.method, request.params).await {
        Ok(result) => JsonRpcResponse::success(id, result),
        Err(error) => {
            debug!(code = error.code, message = %error.message, "JSON-RPC request failed");
            JsonRpcResponse::failure(id, error)
        }
    };
    Json(response)
}

async fn dispatch(
    state: &AppState,
    method: &str,
    params: Option<Value>,
) -> Result<Value, JsonRpcError> {
    match method {
        METHOD_MESSAGE_SEND => {
            let task = state.handler.on_message_send(parse_params(params)?).await?;
            task_result(task)
        }
        METHOD_TASKS_GET => {
            let task = state.handler.on_get_task(parse_params(params)?).await?;
            task_result(task)
        }
        METHOD_TASKS_CANCEL => {
            let task = state.handler.on_cancel_task(parse_params(params)?).await?;
            task_result(task)
        }
        other => Err(JsonRpcError::new(
            METHOD_NOT_FOUND,
            format!("Method not found: {other}"),
        )),
    }
}

fn parse_params<T: DeserializeOwned>(params: Option<Value>) -> Result<T, JsonRpcError> {
    let params = params.ok_or_else(|| JsonRpcError::new(INVALID_PARAMS, "Missing params"))?;
    serde_json::from_value(params)
        .map_err(|e| JsonRpcError::new(INVALID_PARAMS, format!("Invalid params: {e}")))
}

// Tasks go out tagged with `kind: "task"`
fn task_result(task: Task) -> Result<Value, JsonRpcError> {
    serde_json::to_value(AgentEvent::Task(task))
        .map_err(|e| JsonRpcError::new(INTERNAL_ERROR, format!("Internal error: {e}")))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bridge_errors_map_to_protocol_codes() {
        let cases = [
            (
                BridgeError::TaskNotFound {
                    task_id: "t".to_string(),
                },
                TASK_NOT_FOUND,
            ),
            (
                BridgeError::TaskNotCancelable {
                    task_id: "t".to_string(),
                },
                TASK_NOT_CANCELABLE,
            ),
            (
                BridgeError::UnsupportedOperation("cancel".to_string()),
                UNSUPPORTED_OPERATION,
            ),
            (BridgeError::InvalidParams("bad".to_string()), INVALID_PARAMS),
            (BridgeError::Internal("boom".to_string()), INTERNAL_ERROR),
        ];

        for (error, code) in cases {
            assert_eq!(JsonRpcError::from(error).code, code);
        }
    }

    #[test]
    fn test_missing_params_are_invalid() {
        let error = parse_params::<crate::models::TaskIdParams>(None).unwrap_err();
        assert_eq!(error.code, INVALID_PARAMS);
    }

    #[test]
    fn test_failure_response_omits_result() {
        let response =
            JsonRpcResponse::failure(Value::from(1), JsonRpcError::new(PARSE_ERROR, "Parse error"));
        let encoded = serde_json::to_value(&response).unwrap();
        assert!(encoded.get("result").is_none());
        assert_eq!(encoded["error"]["code"], -32700);
        assert_eq!(encoded["id"], 1);
    }
}
