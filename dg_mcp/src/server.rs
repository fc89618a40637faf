use dg_core::server::payload::save_deck_request::SaveDeckRequest;
use dg_engine::generator::{GenerationRequest, Generator};
use dg_engine::parser::parse_slides;
use dg_engine::prompt::PromptKind;
use dg_engine::store::DeckStore;
use mcp_types::{
    CallToolResult, CallToolResultContentItem, TextContent, Tool, ToolInputSchema,
};
use serde_json::{Value, json};
use std::sync::Arc;
use tracing::{debug, info};

const DEFAULT_LANGUAGE: &str = "English";
const DEFAULT_TITLE: &str = "AI Generated Deck";
const DEFAULT_TEMPLATE: &str = "template_7";

/// Tool server exposing the deck generation operations over the MCP tool
/// protocol. Every tool runs synchronously to completion; failures become
/// error-flagged tool results or structured `success: false` payloads,
/// never a crash.
pub struct DeckToolServer {
    generator: Arc<Generator>,
    store: Arc<DeckStore>,
}

fn text_result(text: String, is_error: bool) -> CallToolResult {
    CallToolResult {
        content: vec![CallToolResultContentItem::TextContent(TextContent {
            text,
            annotations: None,
            type_: "text".to_string(),
        })],
        is_error: Some(is_error),
        meta: Default::default(),
    }
}

fn json_result(value: &Value, is_error: bool) -> CallToolResult {
    let text = serde_json::to_string(value).unwrap_or_else(|_| String::from("{}"));
    text_result(text, is_error)
}

fn string_arg<'a>(arguments: &'a Value, name: &str) -> Option<&'a str> {
    arguments[name].as_str().filter(|s| !s.is_empty())
}

fn input_schema(value: Value) -> ToolInputSchema {
    serde_json::from_value(value).expect("valid tool input schema")
}

impl DeckToolServer {
    pub fn new(generator: Arc<Generator>, store: Arc<DeckStore>) -> Self {
        Self { generator, store }
    }

    /// List available tools
    pub fn list_tools(&self) -> Vec<Tool> {
        vec![
            Tool {
                name: "generate_ppt_outline".to_string(),
                description: Some(
                    "Generate a structured slide deck outline from a topic description"
                        .to_string(),
                ),
                input_schema: input_schema(json!({
                    "type": "object",
                    "properties": {
                        "content": {
                            "type": "string",
                            "description": "Topic or requirement description for the deck"
                        },
                        "language": {
                            "type": "string",
                            "description": "Output language, defaults to English"
                        },
                        "model": {
                            "type": "string",
                            "description": "Model name override, e.g. gpt-4o"
                        }
                    },
                    "required": ["content"]
                })),
            },
            Tool {
                name: "generate_ppt_content".to_string(),
                description: Some(
                    "Generate full slide content from an outline, one slide object per line"
                        .to_string(),
                ),
                input_schema: input_schema(json!({
                    "type": "object",
                    "properties": {
                        "content": {
                            "type": "string",
                            "description": "Outline text to expand into slides"
                        },
                        "language": {
                            "type": "string",
                            "description": "Output language, defaults to English"
                        },
                        "model": {
                            "type": "string",
                            "description": "Model name override, e.g. gpt-4o"
                        }
                    },
                    "required": ["content"]
                })),
            },
            Tool {
                name: "optimize_ppt_content".to_string(),
                description: Some(
                    "Rewrite slide content under a caller-supplied instruction".to_string(),
                ),
                input_schema: input_schema(json!({
                    "type": "object",
                    "properties": {
                        "content": {
                            "type": "string",
                            "description": "Content to rewrite"
                        },
                        "command": {
                            "type": "string",
                            "description": "Rewrite instruction, e.g. make it more concise"
                        },
                        "model": {
                            "type": "string",
                            "description": "Model name override, e.g. gpt-4o"
                        }
                    },
                    "required": ["content", "command"]
                })),
            },
            Tool {
                name: "save_ppt_to_file".to_string(),
                description: Some(
                    "Save a deck as a JSON file and return its retrieval URLs".to_string(),
                ),
                input_schema: input_schema(json!({
                    "type": "object",
                    "properties": {
                        "title": {
                            "type": "string",
                            "description": "Deck title"
                        },
                        "slides": {
                            "type": "array",
                            "items": {"type": "object"},
                            "description": "Slide objects to save"
                        },
                        "template": {
                            "type": "string",
                            "description": "Template identifier, defaults to template_7"
                        }
                    },
                    "required": ["title", "slides"]
                })),
            },
            Tool {
                name: "generate_complete_ppt".to_string(),
                description: Some(
                    "Generate a complete deck in one call: outline, slide content, parse and save"
                        .to_string(),
                ),
                input_schema: input_schema(json!({
                    "type": "object",
                    "properties": {
                        "content": {
                            "type": "string",
                            "description": "Topic or requirement description for the deck"
                        },
                        "title": {
                            "type": "string",
                            "description": "Deck title, defaults to AI Generated Deck"
                        },
                        "language": {
                            "type": "string",
                            "description": "Output language, defaults to English"
                        },
                        "template": {
                            "type": "string",
                            "description": "Template identifier, defaults to template_7"
                        },
                        "model": {
                            "type": "string",
                            "description": "Model name override, e.g. gpt-4o"
                        }
                    },
                    "required": ["content"]
                })),
            },
        ]
    }

    /// Handle a tool call request
    pub async fn handle_tool_call(&self, tool_name: &str, arguments: &Value) -> CallToolResult {
        debug!("tool call: {tool_name}");
        match tool_name {
            "generate_ppt_outline" => self.handle_generate_outline(arguments).await,
            "generate_ppt_content" => self.handle_generate_content(arguments).await,
            "optimize_ppt_content" => self.handle_optimize_content(arguments).await,
            "save_ppt_to_file" => self.handle_save_deck(arguments),
            "generate_complete_ppt" => self.handle_generate_complete(arguments).await,
            _ => text_result(format!("Unknown tool: {tool_name}"), true),
        }
    }

    fn outline_request(&self, arguments: &Value) -> GenerationRequest {
        GenerationRequest {
            model: string_arg(arguments, "model").map(String::from),
            language: Some(
                string_arg(arguments, "language")
                    .unwrap_or(DEFAULT_LANGUAGE)
                    .to_string(),
            ),
            content: string_arg(arguments, "content").unwrap_or_default().to_string(),
            command: None,
        }
    }

    async fn handle_generate_outline(&self, arguments: &Value) -> CallToolResult {
        let request = self.outline_request(arguments);
        match self.generator.generate(PromptKind::Outline, &request).await {
            Ok(outline) => text_result(outline, false),
            Err(err) => text_result(format!("Failed to generate outline: {err}"), true),
        }
    }

    async fn handle_generate_content(&self, arguments: &Value) -> CallToolResult {
        let request = self.outline_request(arguments);
        match self
            .generator
            .generate(PromptKind::SlideContent, &request)
            .await
        {
            Ok(raw) => json_result(
                &json!({
                    "slides": parse_slides(&raw),
                    "success": true,
                }),
                false,
            ),
            Err(err) => json_result(
                &json!({
                    "slides": [],
                    "raw_content": "",
                    "success": false,
                    "error": err.to_string(),
                }),
                true,
            ),
        }
    }

    async fn handle_optimize_content(&self, arguments: &Value) -> CallToolResult {
        let request = GenerationRequest {
            model: string_arg(arguments, "model").map(String::from),
            language: None,
            content: string_arg(arguments, "content").unwrap_or_default().to_string(),
            command: string_arg(arguments, "command").map(String::from),
        };
        match self.generator.generate(PromptKind::Rewrite, &request).await {
            Ok(rewritten) => text_result(rewritten, false),
            Err(err) => text_result(format!("Failed to rewrite content: {err}"), true),
        }
    }

    fn handle_save_deck(&self, arguments: &Value) -> CallToolResult {
        let request: SaveDeckRequest = match serde_json::from_value(arguments.clone()) {
            Ok(request) => request,
            Err(err) => return text_result(format!("Invalid save arguments: {err}"), true),
        };

        match self
            .store
            .save(&request.title, request.slides, &request.template)
        {
            Ok(saved) => json_result(
                &json!({
                    "success": true,
                    "json_url": saved.json_url,
                    "view_url": saved.view_url,
                    "message": "Deck saved",
                }),
                false,
            ),
            Err(err) => json_result(
                &json!({
                    "success": false,
                    "error": format!("Failed to save deck: {err}"),
                }),
                true,
            ),
        }
    }

    /// The composite operation: outline generation, then slide-content
    /// generation seeded with both the original requirement and the
    /// outline, then parse and save.
    async fn handle_generate_complete(&self, arguments: &Value) -> CallToolResult {
        let title = string_arg(arguments, "title").unwrap_or(DEFAULT_TITLE);
        let template = string_arg(arguments, "template").unwrap_or(DEFAULT_TEMPLATE);

        let outline_request = self.outline_request(arguments);
        let outline = match self
            .generator
            .generate(PromptKind::Outline, &outline_request)
            .await
        {
            Ok(outline) => outline,
            Err(err) => return complete_failure(err.to_string()),
        };

        let content_request = GenerationRequest {
            content: Generator::enriched_content(&outline_request.content, &outline),
            ..outline_request
        };
        let raw = match self
            .generator
            .generate(PromptKind::SlideContent, &content_request)
            .await
        {
            Ok(raw) => raw,
            Err(err) => return complete_failure(err.to_string()),
        };

        let slides = parse_slides(&raw);
        match self.store.save(title, slides.clone(), template) {
            Ok(saved) => {
                info!("complete deck generated: {}", saved.id);
                json_result(
                    &json!({
                        "success": true,
                        "outline": outline,
                        "slides": slides,
                        "json_url": saved.json_url,
                        "view_url": saved.view_url,
                        "message": "Deck generated",
                    }),
                    false,
                )
            }
            Err(err) => complete_failure(format!("Failed to save deck: {err}")),
        }
    }
}

fn complete_failure(message: String) -> CallToolResult {
    json_result(
        &json!({
            "success": false,
            "error": message,
        }),
        true,
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use dg_core::config::Settings;
    use std::path::Path;

    fn test_server(static_dir: &Path) -> DeckToolServer {
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

    fn result_text(result: &CallToolResult) -> &str {
        match &result.content[0] {
            CallToolResultContentItem::TextContent(text) => text.text.as_str(),
            _ => panic!("expected text content"),
        }
    }

    #[test]
    fn test_list_tools_names() {
        let dir = tempfile::tempdir().unwrap();
        let server = test_server(dir.path());
        let names: Vec<String> = server.list_tools().into_iter().map(|t| t.name).collect();
        assert_eq!(
            names,
            vec![
                "generate_ppt_outline",
                "generate_ppt_content",
                "optimize_ppt_content",
                "save_ppt_to_file",
                "generate_complete_ppt",
            ]
        );
    }

    #[tokio::test]
    async fn test_unknown_tool_is_an_error_result() {
        let dir = tempfile::tempdir().unwrap();
        let server = test_server(dir.path());
        let result = server.handle_tool_call("does_not_exist", &json!({})).await;
        assert_eq!(result.is_error, Some(true));
        assert!(result_text(&result).contains("Unknown tool"));
    }

    #[tokio::test]
    async fn test_save_tool_writes_file_and_returns_urls() {
        let dir = tempfile::tempdir().unwrap();
        let server = test_server(dir.path());
        let arguments = json!({
            "title": "T",
            "slides": [{"type": "end"}],
        });

        let result = server.handle_tool_call("save_ppt_to_file", &arguments).await;
        assert_eq!(result.is_error, Some(false));

        let payload: Value = serde_json::from_str(result_text(&result)).unwrap();
        assert_eq!(payload["success"], true);
        let json_url = payload["json_url"].as_str().unwrap();
        let filename = json_url.rsplit('/').next().unwrap();
        assert!(dir.path().join(filename).exists());
        assert!(
            payload["view_url"]
                .as_str()
                .unwrap()
                .contains("aippt_config_url")
        );
    }

    #[tokio::test]
    async fn test_save_tool_rejects_malformed_arguments() {
        let dir = tempfile::tempdir().unwrap();
        let server = test_server(dir.path());
        let result = server
            .handle_tool_call("save_ppt_to_file", &json!({"title": "T"}))
            .await;
        assert_eq!(result.is_error, Some(true));
        assert!(result_text(&result).contains("Invalid save arguments"));
    }
}
