use crate::app_state::AppState;
use crate::error::ResultAPIStream;
use crate::utils::stream_response_builder::StreamResponseBuilder;
use axum::Json;
use axum::extract::State;
use axum::extract::rejection::JsonRejection;
use axum::response::IntoResponse;
use dg_core::server::payload::slide_content_request::SlideContentRequest;
use dg_engine::generator::GenerationRequest;
use dg_engine::parser::{non_blank_lines, parse_slides};
use dg_engine::prompt::PromptKind;
use serde_json::json;
use std::sync::Arc;
use std::time::Duration;
use tracing::debug;

/// Handles `POST /tools/aippt`.
///
/// Generation always runs to completion first. With `stream: true`
/// (default) the raw slide lines are then flushed one per frame with the
/// configured pacing delay; a generation failure before the stream
/// starts becomes a structured `success: false` JSON result instead.
pub async fn generate_slide_content(
    State(state): State<Arc<AppState>>,
    payload: Result<Json<SlideContentRequest>, JsonRejection>,
) -> ResultAPIStream {
    let Json(payload) = payload?;
    debug!(
        "slide content request: language={} model={:?} stream={}",
        payload.language, payload.model, payload.stream
    );

    let request = GenerationRequest {
        model: payload.model.clone(),
        language: Some(payload.language.clone()),
        content: payload.content.clone(),
        command: None,
    };

    let full_output = match state.generator.generate(PromptKind::SlideContent, &request).await {
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
            "slides": parse_slides(&full_output),
            "success": true,
        }))
        .into_response())
    }
}
