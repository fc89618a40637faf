use crate::app_state::AppState;
use crate::server::service::controller::{health, index};
use axum::routing::get;
use dg_core::server::routes::ServiceApi;
use std::sync::Arc;

pub fn routes() -> axum::Router<Arc<AppState>> {
    axum::Router::new()
        .route(ServiceApi::Index.path().as_str(), get(index))
        .route(ServiceApi::Health.path().as_str(), get(health))
}
