//! Application route registry and plugin chain.
//!
//! axum's `Router` keeps no per-route metadata, so routes are registered on an [`App`]
//! together with their [`RouteConfig`]. Plugins installed on the app can inspect and extend
//! the registry, and every request can see the final route list through the [`RouteTable`]
//! extension.

use axum::{
    Extension, Router,
    handler::Handler,
    http::Method,
    middleware,
    routing::{MethodFilter, MethodRouter, on},
};
use core_sitemap::{captures_collide, check_pattern, to_axum_path};
use data_model_sitemap::{PluginError, Route, RouteConfig};
use std::sync::Arc;
use tower_http::trace::TraceLayer;

use crate::routes::logging_middleware;

/// Snapshot of every route registered on the app, in registration order.
#[derive(Debug, Clone)]
pub struct RouteTable(pub Arc<[Route]>);

impl RouteTable {
    pub fn routes(&self) -> &[Route] {
        &self.0
    }
}

/// An extension that hooks into the app at installation time.
pub trait Plugin: Send + Sync + 'static {
    /// Identifies the kind of plugin.
    fn name(&self) -> &'static str;

    /// Settings keyword; two plugins of the same kind must not share one.
    fn keyword(&self) -> &str;

    /// Runs once, before the plugin joins the chain. An error leaves the app untouched.
    fn setup(&self, app: &mut App) -> Result<(), PluginError>;
}

#[derive(Default)]
pub struct App {
    routes: Vec<Route>,
    handlers: Vec<(String, MethodRouter)>,
    plugins: Vec<Box<dyn Plugin>>,
}

impl App {
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers `handler` for `method` requests on `path`.
    ///
    /// `path` uses `<name>` / `<name:type>` placeholders, each filling a whole segment;
    /// `config` carries the route's metadata (e.g. `add_to_sitemap`, `link_resources`).
    /// Patterns the router could not hold are rejected here and leave the app unchanged.
    pub fn route<H, T>(
        &mut self,
        method: Method,
        path: &str,
        handler: H,
        config: RouteConfig,
    ) -> Result<&mut Self, PluginError>
    where
        H: Handler<T, ()>,
        T: 'static,
    {
        let filter = MethodFilter::try_from(method.clone()).map_err(|_| PluginError::UnsupportedMethod {
            method: method.to_string(),
            path: path.to_string(),
        })?;
        check_pattern(path).map_err(|e| PluginError::InvalidPathPattern {
            path: path.to_string(),
            reason: e.to_string(),
        })?;
        if let Some(existing) = self.routes.iter().find(|r| captures_collide(&r.path, path)) {
            return Err(PluginError::ConflictingRoute {
                existing: existing.path.clone(),
                path: path.to_string(),
            });
        }
        let axum_path = to_axum_path(path);

        let duplicate = self
            .routes
            .iter()
            .any(|r| r.method == method.as_str() && to_axum_path(&r.path) == axum_path);
        if duplicate {
            return Err(PluginError::DuplicateRoute {
                method: method.to_string(),
                path: path.to_string(),
            });
        }

        let method_router = on(filter, handler);
        match self.handlers.iter_mut().find(|(p, _)| *p == axum_path) {
            Some((_, existing)) => {
                let merged = std::mem::replace(existing, MethodRouter::new()).merge(method_router);
                *existing = merged;
            }
            None => self.handlers.push((axum_path, method_router)),
        }

        tracing::debug!(method = %method, path = %path, "registered route");
        self.routes.push(Route::new(method.as_str(), path, config));
        Ok(self)
    }

    /// Shorthand for [`App::route`] with `GET`.
    pub fn get<H, T>(&mut self, path: &str, handler: H, config: RouteConfig) -> Result<&mut Self, PluginError>
    where
        H: Handler<T, ()>,
        T: 'static,
    {
        self.route(Method::GET, path, handler, config)
    }

    /// Runs the plugin's setup and, if it succeeds, appends it to the plugin chain.
    pub fn install<P: Plugin>(&mut self, plugin: P) -> Result<&mut Self, PluginError> {
        plugin.setup(self)?;
        tracing::info!(plugin = plugin.name(), keyword = plugin.keyword(), "installed plugin");
        self.plugins.push(Box::new(plugin));
        Ok(self)
    }

    pub fn routes(&self) -> &[Route] {
        &self.routes
    }

    pub fn plugins(&self) -> impl Iterator<Item = &dyn Plugin> {
        self.plugins.iter().map(|p| &**p)
    }

    /// Builds the axum router. All registered routes, including the ones added after a plugin
    /// was installed, are visible to handlers via the [`RouteTable`] extension.
    pub fn into_router(self) -> Router {
        let table = RouteTable(self.routes.into());

        let router = self
            .handlers
            .into_iter()
            .fold(Router::new(), |router, (path, method_router)| router.route(&path, method_router));

        router
            .layer(Extension(table))
            // Custom route access logging
            .layer(middleware::from_fn(logging_middleware::log_route_access))
            // Tracing middleware
            .layer(TraceLayer::new_for_http())
    }
}
