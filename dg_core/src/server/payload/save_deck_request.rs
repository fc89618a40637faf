use serde::{Deserialize, Serialize};
use serde_json::Value;

fn default_template() -> String {
    String::from("template_7")
}

/// Arguments of the `save_ppt_to_file` tool.
#[derive(Debug, Deserialize, Serialize)]
pub struct SaveDeckRequest {
    pub title: String,
    pub slides: Vec<Value>,
    #[serde(default = "default_template")]
    pub template: String,
}
