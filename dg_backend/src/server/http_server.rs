use crate::app_state::AppState;
use crate::error::{Error, Result};
use crate::server::{outline, service, slides, writing};
use axum::http::StatusCode;
use dg_core::config::Settings;
use dg_core::server::routes::print_all_api_paths;
use dg_engine::generator::Generator;
use dg_engine::store::DeckStore;
use std::fs;
use std::sync::Arc;
use tower_http::services::ServeDir;
use tower_http::trace::{
    DefaultMakeSpan, DefaultOnFailure, DefaultOnRequest, DefaultOnResponse, TraceLayer,
};
use tracing::{Level, error, info};

/// Simple fallback handler for unmatched routes.
async fn fallback() -> (StatusCode, &'static str) {
    (StatusCode::NOT_FOUND, "Not Found")
}

/// Starts the HTTP server using Axum and shared generator/store state.
///
/// # Behavior
/// - Sets up routing for the generation endpoints, the capability
///   listing, the health check, and static serving of saved deck files.
/// - Adds tracing for incoming requests and failures.
/// - Binds to the configured host/port and starts listening.
#[tokio::main]
pub async fn http_server(
    settings: Arc<Settings>,
    generator: Arc<Generator>,
    store: Arc<DeckStore>,
) -> Result<()> {
    // The deck directory must exist before the static file service can
    // serve from it, even if nothing has been saved yet.
    fs::create_dir_all(&settings.static_dir)?;

    let app_state = Arc::new(AppState::new(generator, store, settings.clone()));
    let routes_api = axum::Router::new()
        .merge(outline::route::routes())
        .merge(slides::route::routes())
        .merge(writing::route::routes())
        .merge(service::route::routes())
        .with_state(app_state.clone());

    print_all_api_paths();

    let router = axum::Router::new()
        .merge(routes_api)
        .nest_service("/files", ServeDir::new(&settings.static_dir))
        .layer(
            TraceLayer::new_for_http()
                .make_span_with(DefaultMakeSpan::new().level(Level::INFO))
                .on_request(DefaultOnRequest::new().level(Level::INFO))
                .on_response(DefaultOnResponse::new().level(Level::INFO))
                .on_failure(DefaultOnFailure::new().level(Level::ERROR)),
        )
        .fallback(fallback);

    let host = &settings.host;
    let port = &settings.port;
    let listener = match tokio::net::TcpListener::bind(format!("{host}:{port}")).await {
        Ok(listener) => {
            info!("Starting HTTP server on http://{host}:{port}");
            listener
        }
        Err(err) => {
            error!("Failed to bind to {host}:{port}. {}", err);
            return Err(Error::from(err));
        }
    };
    axum::serve(listener, router.into_make_service()).await?;
    Ok(())
}
