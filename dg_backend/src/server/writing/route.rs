use crate::app_state::AppState;
use crate::server::writing::controller::rewrite_content;
use axum::routing::post;
use dg_core::server::routes::ToolsApi;
use std::sync::Arc;

pub fn routes() -> axum::Router<Arc<AppState>> {
    axum::Router::new().route(ToolsApi::Writing.path().as_str(), post(rewrite_content))
}
