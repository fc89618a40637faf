use crate::error::ResultAPI;
use axum::Json;
use chrono::Local;
use dg_core::server::routes::all_api_paths;
use serde_json::{Map, Value, json};

/// Capability listing: the supported operations and where they live.
pub async fn index() -> ResultAPI {
    let mut operations = Map::new();
    for (name, path) in all_api_paths() {
        operations.insert(name.to_string(), Value::String(path));
    }

    Ok(Json(json!({
        "service": "lm-deckgen",
        "description": "Generates slide deck documents from topic descriptions",
        "operations": operations,
    })))
}

pub async fn health() -> ResultAPI {
    Ok(Json(json!({
        "status": "ok",
        "timestamp": Local::now().to_rfc3339(),
    })))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_index_lists_every_operation() {
        let Json(body) = index().await.unwrap();
        assert_eq!(body["service"], "lm-deckgen");
        assert_eq!(body["operations"]["aippt_outline"], "/tools/aippt_outline");
        assert_eq!(body["operations"]["aippt"], "/tools/aippt");
        assert_eq!(body["operations"]["ai_writing"], "/tools/ai_writing");
        assert_eq!(body["operations"]["files"], "/files/{filename}");
        assert_eq!(body["operations"]["health"], "/health");
    }

    #[tokio::test]
    async fn test_health_shape() {
        let Json(body) = health().await.unwrap();
        assert_eq!(body["status"], "ok");
        assert!(body["timestamp"].is_string());
    }
}
