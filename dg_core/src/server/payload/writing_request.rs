use serde::{Deserialize, Serialize};

fn default_stream() -> bool {
    true
}

/// Body of `POST /tools/ai_writing`: existing content plus a rewrite
/// instruction.
#[derive(Debug, Deserialize, Serialize)]
pub struct WritingRequest {
    #[serde(default)]
    pub model: Option<String>,
    pub content: String,
    pub command: String,
    #[serde(default = "default_stream")]
    pub stream: bool,
}
