use std::path::Path;

use axum::Router;
use axum::middleware;
use axum::routing::{get, post};
use tower_http::cors::{Any, CorsLayer};
use tower_http::services::ServeDir;
use tower_http::trace::{DefaultMakeSpan, DefaultOnResponse, TraceLayer};
use tracing::Level;

use crate::application::ports::{ImageMasker, TextExtractor};
use crate::infrastructure::observability::request_id_middleware;
use crate::presentation::handlers::{index_handler, scan_handler};
use crate::presentation::state::AppState;

pub fn create_router<M, E>(state: AppState<M, E>, static_root: &Path) -> Router
where
    M: ImageMasker + 'static,
    E: TextExtractor + 'static,
{
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    let trace_layer = TraceLayer::new_for_http()
        .make_span_with(DefaultMakeSpan::new().level(Level::INFO))
        .on_response(DefaultOnResponse::new().level(Level::INFO));

    let static_files = ServeDir::new(static_root).append_index_html_on_directories(true);

    Router::new()
        .route("/", get(index_handler))
        .route("/scan", post(scan_handler::<M, E>))
        .nest_service("/static", static_files)
        .layer(middleware::from_fn(request_id_middleware))
        .layer(trace_layer)
        .layer(cors)
        .with_state(state)
}
