use axum::{
    Extension,
    http::{StatusCode, header},
    response::IntoResponse,
};
use core_sitemap::{SitemapConfig, generate_sitemap};
use data_model_sitemap::SitemapError;
use std::sync::Arc;

use crate::app::RouteTable;

pub mod logging_middleware;

/// GET <sitemap_endpoint> - Sitemap of every route registered with a truthy `add_to_sitemap`.
///
/// Any link generation error aborts the response; no partial document is sent.
pub async fn get_sitemap(
    config: Arc<SitemapConfig>,
    Extension(table): Extension<RouteTable>,
) -> Result<impl IntoResponse, SitemapError> {
    let xml = generate_sitemap(&config, table.routes())?;
    Ok((StatusCode::OK, [(header::CONTENT_TYPE, "application/xml")], xml))
}

pub async fn health_check() -> (StatusCode, &'static str) {
    (StatusCode::OK, "healthy")
}
