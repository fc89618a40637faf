use crate::app_state::AppState;
use crate::server::outline::controller::generate_outline;
use axum::routing::post;
use dg_core::server::routes::ToolsApi;
use std::sync::Arc;

pub fn routes() -> axum::Router<Arc<AppState>> {
    axum::Router::new().route(ToolsApi::Outline.path().as_str(), post(generate_outline))
}
