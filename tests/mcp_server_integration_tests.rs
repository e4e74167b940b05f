//! A full MCP session over the newline-delimited transport.

use std::sync::Arc;

use nhl_mcp::mcp::{McpServer, stdio};
use nhl_mcp::testing_utils::RecordingClient;
use nhl_mcp::tools::ToolRegistry;
use serde_json::{Value, json};

async fn session(client: RecordingClient, requests: &[Value]) -> Vec<Value> {
    let server = McpServer::new(ToolRegistry::new(Arc::new(client)));
    let input: String = requests.iter().map(|r| format!("{r}\n")).collect();
    let mut output = Vec::new();

    stdio::run(&server, input.as_bytes(), &mut output)
        .await
        .unwrap();

    String::from_utf8(output)
        .unwrap()
        .lines()
        .map(|line| serde_json::from_str(line).unwrap())
        .collect()
}

#[tokio::test]
async fn test_initialize_list_and_call() {
    let client = RecordingClient::new().respond(
        "teams",
        json!([
            {"name": "Boston Bruins", "abbr": "BOS"},
            {"name": "Florida Panthers", "abbr": "FLA"}
        ]),
    );

    let replies = session(
        client,
        &[
            json!({"jsonrpc": "2.0", "id": 1, "method": "initialize",
                   "params": {"protocolVersion": "2024-11-05", "capabilities": {},
                              "clientInfo": {"name": "test", "version": "0"}}}),
            json!({"jsonrpc": "2.0", "method": "notifications/initialized"}),
            json!({"jsonrpc": "2.0", "id": 2, "method": "tools/list"}),
            json!({"jsonrpc": "2.0", "id": 3, "method": "tools/call",
                   "params": {"name": "get_nhl_team_ids", "arguments": {}}}),
        ],
    )
    .await;

    assert_eq!(replies.len(), 3);
    assert_eq!(replies[0]["result"]["protocolVersion"], "2024-11-05");

    let tools = replies[1]["result"]["tools"].as_array().unwrap();
    let standings = tools
        .iter()
        .find(|t| t["name"] == "get_nhl_standings")
        .unwrap();
    assert_eq!(standings["inputSchema"]["required"], json!([]));
    assert_eq!(
        standings["inputSchema"]["properties"]["date"]["default"],
        "now"
    );

    let result = &replies[2]["result"];
    assert_eq!(result["isError"], false);
    assert_eq!(
        result["structuredContent"],
        json!({"team_abbreviations": {"Boston Bruins": "BOS", "Florida Panthers": "FLA"}})
    );
}

#[tokio::test]
async fn test_error_envelopes_and_protocol_errors() {
    let replies = session(
        RecordingClient::new().fail("player_career_stats", "API Error"),
        &[
            json!({"jsonrpc": "2.0", "id": 1, "method": "tools/call",
                   "params": {"name": "get_nhl_player_career_stats",
                              "arguments": {"player_id": "8478402"}}}),
            json!({"jsonrpc": "2.0", "id": 2, "method": "tools/call",
                   "params": {"name": "get_nhl_player_career_stats", "arguments": {}}}),
            json!({"jsonrpc": "2.0", "id": 3, "method": "tools/call",
                   "params": {"name": "get_nhl_player_stats"}}),
            json!({"jsonrpc": "2.0", "id": 4, "method": "prompts/list"}),
        ],
    )
    .await;

    assert_eq!(replies.len(), 4);

    assert_eq!(replies[0]["result"]["isError"], true);
    assert_eq!(
        replies[0]["result"]["structuredContent"],
        json!({"error": "API Error"})
    );

    assert_eq!(replies[1]["result"]["isError"], true);
    let message = replies[1]["result"]["structuredContent"]["error"]
        .as_str()
        .unwrap();
    assert!(message.starts_with("Invalid arguments for get_nhl_player_career_stats:"));

    assert_eq!(replies[2]["error"]["code"], -32602);
    assert_eq!(replies[3]["error"]["code"], -32601);
}
