use serde::{Deserialize, Serialize};

fn default_stream() -> bool {
    true
}

/// Body of `POST /tools/aippt_outline`: a topic description to expand into
/// a section outline.
#[derive(Debug, Deserialize, Serialize)]
pub struct OutlineRequest {
    #[serde(default)]
    pub model: Option<String>,
    pub language: String,
    pub content: String,
    #[serde(default = "default_stream")]
    pub stream: bool,
}
