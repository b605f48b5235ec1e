use axum::{
    extract::{MatchedPath, Request},
    middleware::Next,
    response::Response,
};
use std::time::Instant;

/// Middleware that logs each route access with its result.
/// Server errors log at error level, client errors at warn, everything else at info.
pub async fn log_route_access(request: Request, next: Next) -> Response {
    let method = request.method().clone();
    let path = request.uri().path().to_string();
    let route = request
        .extensions()
        .get::<MatchedPath>()
        .map(|m| m.as_str().to_string())
        .unwrap_or_default();
    let start = Instant::now();

    let response = next.run(request).await;

    let duration_ms = start.elapsed().as_millis() as u64;
    let status = response.status().as_u16();

    if response.status().is_server_error() {
        tracing::error!(%method, %path, %route, status, duration_ms);
    } else if response.status().is_client_error() {
        tracing::warn!(%method, %path, %route, status, duration_ms);
    } else {
        tracing::info!(%method, %path, %route, status, duration_ms);
    }

    response
}
