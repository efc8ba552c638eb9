use axum::Json;
use axum::response::IntoResponse;
use serde::Serialize;

#[derive(Serialize)]
pub struct IndexResponse {
    pub foo: String,
}

/// Liveness probe. The body is a fixed sentinel existing clients poll for.
pub async fn index_handler() -> impl IntoResponse {
    Json(IndexResponse {
        foo: "bar".to_string(),
    })
}
