//! Error types for sitemap link generation and plugin registration.

use axum::Json;
use axum::http::StatusCode;
use axum::response::IntoResponse;
use serde_json::json;
use thiserror::Error;

/// Failures while turning routes into sitemap links. All of them abort the whole request.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SitemapError {
    /// The route declares placeholders but has no `link_resources` to fill them with.
    #[error("Sitemap link_resources not found for {path}. Can't create dynamic link without a backend.")]
    SitemapBackendNotFound { path: String },

    /// A resource record has no value for one of the route's placeholders.
    #[error("Resource {name} not found in the backend.")]
    ResourceDoesntExist { name: String },

    /// `link_resources` is present but is not a list of string -> string mappings.
    #[error("Invalid link_resources for {path}: {reason}")]
    InvalidLinkResources { path: String, reason: String },

    /// Writing the XML document failed.
    #[error("Sitemap rendering failed: {0}")]
    Render(String),
}

impl SitemapError {
    /// Short machine-readable name, used in the JSON error body.
    pub fn kind(&self) -> &'static str {
        match self {
            SitemapError::SitemapBackendNotFound { .. } => "sitemap_backend_not_found",
            SitemapError::ResourceDoesntExist { .. } => "resource_doesnt_exist",
            SitemapError::InvalidLinkResources { .. } => "invalid_link_resources",
            SitemapError::Render(_) => "render",
        }
    }
}

impl IntoResponse for SitemapError {
    fn into_response(self) -> axum::response::Response {
        tracing::error!(error = %self, kind = self.kind(), "sitemap generation failed");
        (
            StatusCode::INTERNAL_SERVER_ERROR,
            Json(json!({
                "error": self.kind(),
                "details": self.to_string(),
            })),
        )
            .into_response()
    }
}

/// Failures while installing a plugin or registering a route. These abort application startup.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PluginError {
    /// Another sitemap plugin is already installed under the same keyword.
    #[error("Found another sitemap plugin with conflicting settings (non-unique keyword: {keyword}).")]
    Conflict { keyword: String },

    /// A route with the same method and path pattern is already registered.
    #[error("Route {method} {path} is already registered.")]
    DuplicateRoute { method: String, path: String },

    /// The path captures the same segment as an existing route under a different name.
    #[error("Route {path} conflicts with registered route {existing}: captures at the same position must share a name.")]
    ConflictingRoute { existing: String, path: String },

    /// The path pattern cannot be served by the router.
    #[error("Invalid route pattern {path}: {reason}")]
    InvalidPathPattern { path: String, reason: String },

    /// The router cannot dispatch on this HTTP method.
    #[error("Unsupported HTTP method for route {path}: {method}")]
    UnsupportedMethod { method: String, path: String },
}
