//! Newline-delimited JSON transport over stdin/stdout

use tokio::io::{AsyncBufRead, AsyncBufReadExt, AsyncWrite, AsyncWriteExt, BufReader};
use tracing::{debug, info, warn};

use super::jsonrpc::{error_codes, error_response};
use super::server::McpServer;
use crate::error::AppError;

/// Serves requests until `reader` reaches EOF. One request per line; blank
/// lines are skipped. Each response is written as one line and flushed.
/// A line that is not UTF-8 gets a parse error and serving continues.
pub async fn run<R, W>(server: &McpServer, mut reader: R, mut writer: W) -> Result<(), AppError>
where
    R: AsyncBufRead + Unpin,
    W: AsyncWrite + Unpin,
{
    let mut buf = Vec::new();
    loop {
        buf.clear();
        if reader.read_until(b'\n', &mut buf).await? == 0 {
            break;
        }

        let reply = match std::str::from_utf8(&buf) {
            Ok(line) => {
                let raw = line.trim();
                if raw.is_empty() {
                    continue;
                }
                debug!("<- {raw}");
                server.handle_line(raw).await
            }
            Err(e) => {
                warn!("Request line is not valid UTF-8: {e}");
                Some(error_response(
                    None,
                    error_codes::PARSE_ERROR,
                    format!("Parse error: {e}"),
                ))
            }
        };

        if let Some(reply) = reply {
            let mut encoded = serde_json::to_vec(&reply)?;
            encoded.push(b'\n');
            writer.write_all(&encoded).await?;
            writer.flush().await?;
        }
    }
    info!("Input closed, shutting down");
    Ok(())
}

pub async fn serve_stdio(server: &McpServer) -> Result<(), AppError> {
    info!("Serving MCP over stdio");
    run(
        server,
        BufReader::new(tokio::io::stdin()),
        tokio::io::stdout(),
    )
    .await
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing_utils::RecordingClient;
    use crate::tools::ToolRegistry;
    use serde_json::Value;
    use std::sync::Arc;

    #[tokio::test]
    async fn test_one_line_per_response() {
        let server = McpServer::new(ToolRegistry::new(Arc::new(RecordingClient::new())));
        let input = concat!(
            r#"{"jsonrpc":"2.0","id":1,"method":"initialize","params":{}}"#,
            "\n\n",
            r#"{"jsonrpc":"2.0","method":"notifications/initialized"}"#,
            "\n",
            r#"{"jsonrpc":"2.0","id":2,"method":"ping"}"#,
            "\n",
        );
        let mut output = Vec::new();

        run(&server, input.as_bytes(), &mut output).await.unwrap();

        let replies: Vec<Value> = String::from_utf8(output)
            .unwrap()
            .lines()
            .map(|l| serde_json::from_str(l).unwrap())
            .collect();
        assert_eq!(replies.len(), 2);
        assert_eq!(replies[0]["id"], 1);
        assert_eq!(replies[1]["id"], 2);
        assert_eq!(replies[1]["result"], serde_json::json!({}));
    }

    #[tokio::test]
    async fn test_invalid_utf8_line_does_not_stop_serving() {
        let server = McpServer::new(ToolRegistry::new(Arc::new(RecordingClient::new())));
        let mut input = Vec::new();
        input.extend_from_slice(br#"{"jsonrpc":"2.0","id":1,"method":"ping"}"#);
        input.extend_from_slice(b"\n{\"id\":2,\"method\":\"\xff\"}\n");
        input.extend_from_slice(br#"{"jsonrpc":"2.0","id":3,"method":"ping"}"#);
        input.push(b'\n');
        let mut output = Vec::new();

        run(&server, input.as_slice(), &mut output).await.unwrap();

        let replies: Vec<Value> = String::from_utf8(output)
            .unwrap()
            .lines()
            .map(|l| serde_json::from_str(l).unwrap())
            .collect();
        assert_eq!(replies.len(), 3);
        assert_eq!(replies[0]["id"], 1);
        assert_eq!(replies[1]["id"], Value::Null);
        assert_eq!(replies[1]["error"]["code"], -32700);
        assert_eq!(replies[2]["id"], 3);
        assert_eq!(replies[2]["result"], serde_json::json!({}));
    }
}
