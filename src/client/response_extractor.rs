//! # Response Extractor
//!
//! Pulls the reply text out of a Langflow run response. The expected shape is
//! `outputs[0].outputs[0].results.message.text`, but any level may be missing.
//! Extraction is total: a missing level yields the fixed fallback string and a
//! level of the wrong JSON type yields an explanatory fallback, never an error.

use serde_json::Value;
use thiserror::Error;
use tracing::error;

use crate::constants::{EXTRACTION_ERROR_PREFIX, NO_MESSAGE_TEXT_FALLBACK};

/// Shape mismatch found while walking the response
#[derive(Debug, Error, PartialEq, Eq)]
enum ExtractionError {
    #[error("expected {expected} at `{path}`, found {found}")]
    UnexpectedType {
        path: &'static str,
        expected: &'static str,
        found: &'static str,
    },
}

/// Extract the main message text from a workflow response
pub fn extract_message_text(response: &Value) -> String {
    match find_message_text(response) {
        Ok(Some(text)) => text.to_string(),
        Ok(None) => NO_MESSAGE_TEXT_FALLBACK.to_string(),
        Err(e) => {
            error!(error = %e, "Error extracting message text");
            format!("{EXTRACTION_ERROR_PREFIX}: {e}")
        }
    }
}

fn find_message_text(response: &Value) -> Result<Option<&str>, ExtractionError> {
    let Some(first_output) = first_item(field(response, "outputs", "$")?, "outputs")? else {
        return Ok(None);
    };
    let Some(first_result) = first_item(
        field(first_output, "outputs", "outputs[0]")?,
        "outputs[0].outputs",
    )?
    else {
        return Ok(None);
    };

    let Some(results) = field(first_result, "results", "outputs[0].outputs[0]")? else {
        return Ok(None);
    };
    let Some(message) = field(results, "message", "outputs[0].outputs[0].results")? else {
        return Ok(None);
    };
    let Some(text) = field(message, "text", "outputs[0].outputs[0].results.message")? else {
        return Ok(None);
    };

    match text {
        Value::String(s) if s.is_empty() => Ok(None),
        Value::String(s) => Ok(Some(s.as_str())),
        other => Err(unexpected("outputs[0].outputs[0].results.message.text", "a string", other)),
    }
}

/// Look up `key` on an object; `null` counts as absent
fn field<'a>(
    value: &'a Value,
    key: &str,
    path: &'static str,
) -> Result<Option<&'a Value>, ExtractionError> {
    match value {
        Value::Object(map) => Ok(map.get(key).filter(|v| !v.is_null())),
        other => Err(unexpected(path, "an object", other)),
    }
}

/// First element of an optional array; empty or absent arrays yield `None`
fn first_item<'a>(
    value: Option<&'a Value>,
    path: &'static str,
) -> Result<Option<&'a Value>, ExtractionError> {
    match value {
        None => Ok(None),
        Some(Value::Array(items)) => Ok(items.first()),
        Some(other) => Err(unexpected(path, "an array", other)),
    }
}

fn unexpected(path: &'static str, expected: &'static str, found: &Value) -> ExtractionError {
    ExtractionError::UnexpectedType {
        path,
        expected,
        found: json_type_name(found),
    }
}

fn json_type_name(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}
