use crate::error::Result;
use crate::server::DeckToolServer;
use serde::{Deserialize, Serialize};
use serde_json::{Value, json};
use tokio::io::{AsyncBufReadExt, AsyncWriteExt, BufReader};
use tracing::{debug, error};

pub const PROTOCOL_VERSION: &str = "2024-11-05";

#[derive(Debug, Deserialize)]
pub struct JsonRpcRequest {
    #[serde(default)]
    pub id: Option<Value>,
    pub method: String,
    #[serde(default)]
    pub params: Value,
}

#[derive(Debug, Serialize)]
pub struct JsonRpcResponse {
    pub jsonrpc: &'static str,
    pub id: Value,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub result: Option<Value>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<JsonRpcError>,
}

#[derive(Debug, Serialize)]
pub struct JsonRpcError {
    pub code: i64,
    pub message: String,
}

fn success(id: Value, result: Value) -> JsonRpcResponse {
    JsonRpcResponse {
        jsonrpc: "2.0",
        id,
        result: Some(result),
        error: None,
    }
}

fn failure(id: Value, code: i64, message: String) -> JsonRpcResponse {
    JsonRpcResponse {
        jsonrpc: "2.0",
        id,
        result: None,
        error: Some(JsonRpcError { code, message }),
    }
}

/// Handles one decoded request. Requests without an id are notifications
/// and produce no response.
pub async fn dispatch(server: &DeckToolServer, request: JsonRpcRequest) -> Option<JsonRpcResponse> {
    let id = request.id?;

    let response = match request.method.as_str() {
        "initialize" => success(
            id,
            json!({
                "protocolVersion": PROTOCOL_VERSION,
                "capabilities": {"tools": {}},
                "serverInfo": {
                    "name": env!("CARGO_PKG_NAME"),
                    "version": env!("CARGO_PKG_VERSION"),
                },
            }),
        ),
        "ping" => success(id, json!({})),
        "tools/list" => match serde_json::to_value(server.list_tools()) {
            Ok(tools) => success(id, json!({"tools": tools})),
            Err(err) => failure(id, -32603, err.to_string()),
        },
        "tools/call" => {
            let Some(name) = request.params["name"].as_str() else {
                return Some(failure(
                    id,
                    -32602,
                    String::from("tools/call requires a tool name"),
                ));
            };
            let arguments = request.params.get("arguments").cloned().unwrap_or(json!({}));
            let result = server.handle_tool_call(name, &arguments).await;
            match serde_json::to_value(result) {
                Ok(result) => success(id, result),
                Err(err) => failure(id, -32603, err.to_string()),
            }
        }
        other => failure(id, -32601, format!("Method not found: {other}")),
    };
    Some(response)
}

/// Serves the tool server over stdin/stdout, one JSON-RPC message per
/// line. Undecodable lines are logged and skipped; the loop ends when
/// stdin closes.
pub async fn serve_stdio(server: DeckToolServer) -> Result<()> {
    let mut lines = BufReader::new(tokio::io::stdin()).lines();
    let mut stdout = tokio::io::stdout();

    while let Some(line) = lines.next_line().await? {
        let line = line.trim();
        if line.is_empty() {
            continue;
        }
        let request: JsonRpcRequest = match serde_json::from_str(line) {
            Ok(request) => request,
            Err(err) => {
                error!("skipping undecodable message: {err}");
                continue;
            }
        };

        debug!("handling {}", request.method);
        if let Some(response) = dispatch(&server, request).await {
            let payload = serde_json::to_string(&response)?;
            stdout.write_all(payload.as_bytes()).await?;
            stdout.write_all(b"\n").await?;
            stdout.flush().await?;
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use dg_core::config::Settings;
    use dg_engine::generator::Generator;
    use dg_engine::store::DeckStore;
    use std::sync::Arc;

    fn test_server(static_dir: &std::path::Path) -> DeckToolServer {
        let settings = Arc::new(Settings {
            api_key: String::new(),
            api_base_url: String::from("http://127.0.0.1:1"),
            default_model: String::from("gpt-4o"),
            server_base_url: String::from("http://127.0.0.1:5000"),
            viewer_base_url: String::from("http://127.0.0.1:5173"),
            static_dir: static_dir.to_path_buf(),
            host: String::from("127.0.0.1"),
            port: String::from("5000"),
            stream_delay_ms: 0,
        });
        DeckToolServer::new(
            Arc::new(Generator::new(settings.clone())),
            Arc::new(DeckStore::new(settings)),
        )
    }

    #[tokio::test]
    async fn test_initialize_and_tools_list() {
        let dir = tempfile::tempdir().unwrap();
        let server = test_server(dir.path());

        let request = JsonRpcRequest {
            id: Some(json!(1)),
            method: String::from("initialize"),
            params: json!({}),
        };
        let response = dispatch(&server, request).await.unwrap();
        let result = response.result.unwrap();
        assert_eq!(result["protocolVersion"], PROTOCOL_VERSION);

        let request = JsonRpcRequest {
            id: Some(json!(2)),
            method: String::from("tools/list"),
            params: json!({}),
        };
        let response = dispatch(&server, request).await.unwrap();
        let tools = response.result.unwrap();
        assert_eq!(tools["tools"].as_array().unwrap().len(), 5);
    }

    #[tokio::test]
    async fn test_notifications_produce_no_response() {
        let dir = tempfile::tempdir().unwrap();
        let server = test_server(dir.path());
        let request = JsonRpcRequest {
            id: None,
            method: String::from("notifications/initialized"),
            params: json!({}),
        };
        assert!(dispatch(&server, request).await.is_none());
    }

    #[tokio::test]
    async fn test_unknown_method_is_rejected() {
        let dir = tempfile::tempdir().unwrap();
        let server = test_server(dir.path());
        let request = JsonRpcRequest {
            id: Some(json!(3)),
            method: String::from("resources/list"),
            params: json!({}),
        };
        let response = dispatch(&server, request).await.unwrap();
        assert_eq!(response.error.unwrap().code, -32601);
    }

    #[tokio::test]
    async fn test_tool_call_without_name_is_invalid_params() {
        let dir = tempfile::tempdir().unwrap();
        let server = test_server(dir.path());
        let request = JsonRpcRequest {
            id: Some(json!(4)),
            method: String::from("tools/call"),
            params: json!({"arguments": {}}),
        };
        let response = dispatch(&server, request).await.unwrap();
        assert_eq!(response.error.unwrap().code, -32602);
    }
}
