use serde::{Deserialize, Serialize};

fn default_stream() -> bool {
    true
}

/// Body of `POST /tools/aippt`: outline text to expand into one JSON slide
/// object per line.
#[derive(Debug, Deserialize, Serialize)]
pub struct SlideContentRequest {
    #[serde(default)]
    pub model: Option<String>,
    pub language: String,
    pub content: String,
    #[serde(default = "default_stream")]
    pub stream: bool,
}
