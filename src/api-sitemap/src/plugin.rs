//! The sitemap plugin: serves a sitemap of the app's listable routes.

use axum::{Extension, http::Method};
use core_sitemap::SitemapConfig;
use data_model_sitemap::{PluginError, RouteConfig};
use std::sync::Arc;

use crate::app::{App, Plugin, RouteTable};
use crate::routes;

/// Installs `GET <sitemap_endpoint>`, listing every route registered with a truthy
/// `add_to_sitemap` config value.
///
/// Parameterized routes must also carry `link_resources`, one record per link:
///
/// ```
/// use api_sitemap::{App, SitemapPlugin};
/// use core_sitemap::SitemapConfig;
/// use data_model_sitemap::{ResourceRecord, RouteConfig};
///
/// async fn item() -> &'static str {
///     "item"
/// }
///
/// let record: ResourceRecord = [("user_id", "1"), ("item", "foo")]
///     .into_iter()
///     .map(|(k, v)| (k.to_string(), v.to_string()))
///     .collect();
///
/// let mut app = App::new();
/// app.install(SitemapPlugin::new(
///     SitemapConfig::builder("test-site.com", "/sitemap.xml").build().unwrap(),
/// ))
/// .unwrap();
/// app.get(
///     "/hello/<user_id:int>/<item>",
///     item,
///     RouteConfig::new().add_to_sitemap(true).link_resources([record]),
/// )
/// .unwrap();
/// let router = app.into_router();
/// ```
#[derive(Debug, Clone)]
pub struct SitemapPlugin {
    config: Arc<SitemapConfig>,
}

impl SitemapPlugin {
    pub const NAME: &'static str = "sitemap";

    pub fn new(config: SitemapConfig) -> Self {
        Self {
            config: Arc::new(config),
        }
    }

    pub fn config(&self) -> &SitemapConfig {
        &self.config
    }
}

impl Plugin for SitemapPlugin {
    fn name(&self) -> &'static str {
        Self::NAME
    }

    fn keyword(&self) -> &str {
        &self.config.keyword
    }

    /// Refuses to install next to another sitemap plugin with the same keyword, then
    /// registers the sitemap endpoint.
    fn setup(&self, app: &mut App) -> Result<(), PluginError> {
        let conflict = app
            .plugins()
            .any(|other| other.name() == Self::NAME && other.keyword() == self.keyword());
        if conflict {
            return Err(PluginError::Conflict {
                keyword: self.keyword().to_string(),
            });
        }

        let config = self.config.clone();
        app.route(
            Method::GET,
            &self.config.sitemap_endpoint,
            move |table: Extension<RouteTable>| routes::get_sitemap(config, table),
            RouteConfig::new(),
        )?;
        Ok(())
    }
}
