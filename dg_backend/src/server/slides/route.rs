use crate::app_state::AppState;
use crate::server::slides::controller::generate_slide_content;
use axum::routing::post;
use dg_core::server::routes::ToolsApi;
use std::sync::Arc;

pub fn routes() -> axum::Router<Arc<AppState>> {
    axum::Router::new().route(
        ToolsApi::SlideContent.path().as_str(),
        post(generate_slide_content),
    )
}
