//! Common utilities shared across IPFS tools.
//!
//! Argument extraction, schema construction, and result helpers.

use std::sync::Arc;

use rmcp::model::{CallToolResult, Content, JsonObject};
use serde_json::Value;

use crate::domains::tools::error::ToolError;

/// Extract a required string argument.
pub fn required_string(args: &JsonObject, key: &str) -> Result<String, ToolError> {
    optional_string(args, key)?.ok_or_else(|| ToolError::missing_argument(key))
}

/// Extract an optional string argument. An explicit `null` counts as absent.
pub fn optional_string(args: &JsonObject, key: &str) -> Result<Option<String>, ToolError> {
    match args.get(key) {
        None | Some(Value::Null) => Ok(None),
        Some(Value::String(s)) => Ok(Some(s.clone())),
        Some(other) => Err(ToolError::invalid_argument(
            key,
            format!("expected a string, got {}", other),
        )),
    }
}

/// Turn a `json!` object literal into a tool input schema.
pub fn object_schema(schema: Value) -> Arc<JsonObject> {
    match schema {
        Value::Object(map) => Arc::new(map),
        _ => Arc::new(JsonObject::new()),
    }
}

/// Create a success result with text content.
pub fn text_result(text: impl Into<String>) -> CallToolResult {
    CallToolResult::success(vec![Content::text(text.into())])
}
