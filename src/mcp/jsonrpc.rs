//! JSON-RPC 2.0 message shapes used by the MCP transport

use serde::{Deserialize, Serialize};
use serde_json::{Value, json};

use crate::constants::mcp::JSONRPC_VERSION;
use crate::tools::Envelope;

#[derive(Debug, Deserialize)]
pub struct JsonRpcRequest {
    #[serde(default)]
    pub jsonrpc: Option<String>,
    #[serde(default)]
    pub id: Option<Value>,
    pub method: String,
    #[serde(default)]
    pub params: Option<Value>,
}

impl JsonRpcRequest {
    /// Requests without an id (or with `id: null`) are notifications and get
    /// no response.
    pub fn is_notification(&self) -> bool {
        matches!(self.id, None | Some(Value::Null))
    }
}

#[derive(Debug, Deserialize)]
pub struct CallToolParams {
    pub name: String,
    #[serde(default)]
    pub arguments: Value,
}

#[derive(Debug, Serialize)]
#[serde(tag = "type")]
pub enum ContentItem {
    #[serde(rename = "text")]
    Text { text: String },
}

/// `tools/call` result body.
#[derive(Debug, Serialize)]
pub struct ToolResultBody {
    pub content: Vec<ContentItem>,
    #[serde(rename = "structuredContent")]
    pub structured_content: Value,
    #[serde(rename = "isError")]
    pub is_error: bool,
}

impl From<Envelope> for ToolResultBody {
    fn from(envelope: Envelope) -> Self {
        let is_error = envelope.is_error();
        let structured_content = envelope.into_value();
        ToolResultBody {
            content: vec![ContentItem::Text {
                text: structured_content.to_string(),
            }],
            structured_content,
            is_error,
        }
    }
}

pub mod error_codes {
    pub const PARSE_ERROR: i32 = -32700;
    pub const INVALID_REQUEST: i32 = -32600;
    pub const METHOD_NOT_FOUND: i32 = -32601;
    pub const INVALID_PARAMS: i32 = -32602;
    pub const INTERNAL_ERROR: i32 = -32603;
}

pub fn response(id: Option<Value>, result: Value) -> Value {
    json!({
        "jsonrpc": JSONRPC_VERSION,
        "id": id.unwrap_or(Value::Null),
        "result": result,
    })
}

pub fn error_response(id: Option<Value>, code: i32, message: impl Into<String>) -> Value {
    json!({
        "jsonrpc": JSONRPC_VERSION,
        "id": id.unwrap_or(Value::Null),
        "error": {
            "code": code,
            "message": message.into(),
        },
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_notification_detection() {
        let request: JsonRpcRequest =
            serde_json::from_value(json!({"jsonrpc": "2.0", "method": "notifications/initialized"}))
                .unwrap();
        assert!(request.is_notification());

        let request: JsonRpcRequest =
            serde_json::from_value(json!({"jsonrpc": "2.0", "id": 0, "method": "ping"})).unwrap();
        assert!(!request.is_notification());
    }

    #[test]
    fn test_tool_result_from_error_envelope() {
        let body = ToolResultBody::from(Envelope::error("API Error"));
        let value = serde_json::to_value(&body).unwrap();

        assert_eq!(value["isError"], true);
        assert_eq!(value["structuredContent"], json!({"error": "API Error"}));
        assert_eq!(value["content"][0]["type"], "text");
        assert_eq!(value["content"][0]["text"], r#"{"error":"API Error"}"#);
    }

    #[test]
    fn test_error_response_shape() {
        let value = error_response(Some(json!(7)), error_codes::METHOD_NOT_FOUND, "nope");
        assert_eq!(
            value,
            json!({"jsonrpc": "2.0", "id": 7, "error": {"code": -32601, "message": "nope"}})
        );
    }
}
