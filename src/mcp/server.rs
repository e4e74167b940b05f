//! MCP request dispatch over the tool registry

use serde_json::{Value, json};
use tracing::{debug, info, instrument, warn};

use super::jsonrpc::{
    CallToolParams, JsonRpcRequest, ToolResultBody, error_codes, error_response, response,
};
use crate::constants::mcp::PROTOCOL_VERSION;
use crate::tools::ToolRegistry;

pub struct McpServer {
    registry: ToolRegistry,
}

impl McpServer {
    pub fn new(registry: ToolRegistry) -> Self {
        Self { registry }
    }

    /// Handles one raw line. Returns the response to write, if any.
    ///
    /// Text that is not JSON is a parse error with a null id. JSON that is not
    /// a request is an invalid request, keeping its id when one is present.
    pub async fn handle_line(&self, line: &str) -> Option<Value> {
        let value: Value = match serde_json::from_str(line) {
            Ok(value) => value,
            Err(e) => {
                warn!("Unparsable request: {e}");
                return Some(error_response(
                    None,
                    error_codes::PARSE_ERROR,
                    format!("Parse error: {e}"),
                ));
            }
        };

        let id = value.get("id").cloned();
        match serde_json::from_value::<JsonRpcRequest>(value) {
            Ok(request) => self.handle(request).await,
            Err(e) => {
                warn!("Invalid request: {e}");
                Some(error_response(
                    id,
                    error_codes::INVALID_REQUEST,
                    format!("Invalid Request: {e}"),
                ))
            }
        }
    }

    #[instrument(skip_all, fields(method = %request.method))]
    pub async fn handle(&self, request: JsonRpcRequest) -> Option<Value> {
        let notification = request.is_notification();

        match request.method.as_str() {
            "initialize" => {
                let protocol_version = request
                    .params
                    .as_ref()
                    .and_then(|p| p.get("protocolVersion"))
                    .and_then(Value::as_str)
                    .unwrap_or(PROTOCOL_VERSION)
                    .to_string();
                info!("Initializing with protocol version {protocol_version}");
                Some(response(
                    request.id,
                    json!({
                        "protocolVersion": protocol_version,
                        "serverInfo": {
                            "name": crate::NAME,
                            "version": crate::VERSION,
                        },
                        "capabilities": {
                            "tools": {},
                        },
                    }),
                ))
            }
            "notifications/initialized" | "initialized" => {
                debug!("Client finished initialization");
                None
            }
            _ if notification => {
                debug!("Ignoring notification");
                None
            }
            "ping" => Some(response(request.id, json!({}))),
            "tools/list" => {
                let tools: Vec<Value> = self
                    .registry
                    .tools()
                    .iter()
                    .map(|tool| tool.descriptor())
                    .collect();
                Some(response(request.id, json!({ "tools": tools })))
            }
            "tools/call" => Some(self.call_tool(request.id, request.params).await),
            other => {
                warn!("Unknown method {other}");
                Some(error_response(
                    request.id,
                    error_codes::METHOD_NOT_FOUND,
                    format!("Method not found: {other}"),
                ))
            }
        }
    }

    async fn call_tool(&self, id: Option<Value>, params: Option<Value>) -> Value {
        let params: CallToolParams = match params.map(serde_json::from_value::<CallToolParams>) {
            Some(Ok(params)) => params,
            Some(Err(e)) => {
                return error_response(
                    id,
                    error_codes::INVALID_PARAMS,
                    format!("Invalid tools/call params: {e}"),
                );
            }
            None => {
                return error_response(id, error_codes::INVALID_PARAMS, "Missing tools/call params");
            }
        };

        match self.registry.call(&params.name, params.arguments).await {
            Some(envelope) => {
                let body = ToolResultBody::from(envelope);
                match serde_json::to_value(&body) {
                    Ok(result) => response(id, result),
                    Err(e) => error_response(id, error_codes::INTERNAL_ERROR, e.to_string()),
                }
            }
            None => error_response(
                id,
                error_codes::INVALID_PARAMS,
                format!("Unknown tool: {}", params.name),
            ),
        }
    }
}
