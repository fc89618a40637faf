use crate::app_state::AppState;
use crate::error::ResultAPIStream;
use crate::utils::stream_response_builder::StreamResponseBuilder;
use axum::Json;
use axum::extract::State;
use axum::extract::rejection::JsonRejection;
use axum::response::IntoResponse;
use dg_core::server::payload::writing_request::WritingRequest;
use dg_engine::generator::GenerationRequest;
use dg_engine::parser::non_blank_lines;
use dg_engine::prompt::PromptKind;
use serde_json::json;
use std::sync::Arc;
use std::time::Duration;
use tracing::debug;

/// Handles `POST /tools/ai_writing`: rewrites existing content under a
/// caller-supplied instruction, with the same paced line-by-line
/// response shape as the slide-content endpoint.
pub async fn rewrite_content(
    State(state): State<Arc<AppState>>,
    payload: Result<Json<WritingRequest>, JsonRejection>,
) -> ResultAPIStream {
    let Json(payload) = payload?;
    debug!(
        "rewrite request: command={} model={:?} stream={}",
        payload.command, payload.model, payload.stream
    );

    let request = GenerationRequest {
        model: payload.model.clone(),
        language: None,
        content: payload.content.clone(),
        command: Some(payload.command.clone()),
    };

    let full_output = match state.generator.generate(PromptKind::Rewrite, &request).await {
        Ok(text) => text,
        Err(err) => {
            return Ok(Json(json!({
                "success": false,
                "error": err.to_string(),
            }))
            .into_response());
        }
    };

    if payload.stream {
        let delay = Duration::from_millis(state.settings.stream_delay_ms);
        Ok(StreamResponseBuilder::paced(non_blank_lines(&full_output), delay)?)
    } else {
        Ok(Json(json!({
            "text": full_output,
            "success": true,
        }))
        .into_response())
    }
}
