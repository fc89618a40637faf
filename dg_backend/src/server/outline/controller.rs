use crate::app_state::AppState;
use crate::error::ResultAPIStream;
use crate::utils::stream_response_builder::StreamResponseBuilder;
use axum::Json;
use axum::extract::State;
use axum::extract::rejection::JsonRejection;
use axum::response::IntoResponse;
use crossbeam::channel::{Receiver, Sender, bounded};
use dg_core::server::payload::outline_request::OutlineRequest;
use dg_engine::generator::GenerationRequest;
use dg_engine::prompt::PromptKind;
use serde_json::json;
use std::sync::Arc;
use tracing::debug;

fn to_generation_request(payload: &OutlineRequest) -> GenerationRequest {
    GenerationRequest {
        model: payload.model.clone(),
        language: Some(payload.language.clone()),
        content: payload.content.clone(),
        command: None,
    }
}

/// Handles `POST /tools/aippt_outline`.
///
/// # Behavior
/// - `stream: true` (default): flushes raw model text fragments as they
///   arrive, `text/event-stream`. A remote failure is appended to the
///   stream as an inline `[ERROR]: <message>` fragment, never surfaced
///   as an HTTP error status.
/// - `stream: false`: blocks until generation completes and returns a
///   structured JSON result.
pub async fn generate_outline(
    State(state): State<Arc<AppState>>,
    payload: Result<Json<OutlineRequest>, JsonRejection>,
) -> ResultAPIStream {
    let Json(payload) = payload?;
    debug!(
        "outline request: language={} model={:?} stream={}",
        payload.language, payload.model, payload.stream
    );

    if payload.stream {
        outline_with_stream(state, to_generation_request(&payload)).await
    } else {
        outline_with_json(state, to_generation_request(&payload)).await
    }
}

async fn outline_with_stream(
    state: Arc<AppState>,
    request: GenerationRequest,
) -> ResultAPIStream {
    let (tx, rx): (Sender<String>, Receiver<String>) = bounded(100);
    let tx = Arc::new(tx);

    let response = StreamResponseBuilder::new(rx).build();
    tokio::spawn(async move {
        state.generator.generate_outline_stream(&request, tx).await;
    });
    Ok(response?)
}

async fn outline_with_json(state: Arc<AppState>, request: GenerationRequest) -> ResultAPIStream {
    let body = match state.generator.generate(PromptKind::Outline, &request).await {
        Ok(text) => json!({
            "success": true,
            "text": text,
        }),
        Err(err) => json!({
            "success": false,
            "error": err.to_string(),
        }),
    };
    Ok(Json(body).into_response())
}
