//! # Sitemap Generation Core
//!
//! Turns an application's registered routes into a sitemaps.org XML document.
//!
//! Routes opt in with a truthy `add_to_sitemap` config value. A route without placeholders
//! becomes one link; a route with `<name>` or `<name:type>` placeholders becomes one link
//! per record in its `link_resources` config value.
//!
//! ## Example
//!
//! ```
//! use core_sitemap::{SitemapConfig, collect_links, render_sitemap};
//! use data_model_sitemap::{ResourceRecord, Route, RouteConfig};
//!
//! let config = SitemapConfig::builder("test-site.com", "/sitemap.xml").build().unwrap();
//! let record: ResourceRecord = [("user_id", "1"), ("item", "foo")]
//!     .into_iter()
//!     .map(|(k, v)| (k.to_string(), v.to_string()))
//!     .collect();
//! let routes = vec![
//!     Route::get("/hello", RouteConfig::new().add_to_sitemap(true)),
//!     Route::get(
//!         "/hello/<user_id:int>/<item>",
//!         RouteConfig::new().add_to_sitemap(true).link_resources([record]),
//!     ),
//! ];
//!
//! let links = collect_links(&config, &routes).unwrap();
//! assert_eq!(links, vec!["http://test-site.com/hello", "http://test-site.com/hello/1/foo"]);
//!
//! let xml = render_sitemap(&links, &config).unwrap();
//! assert!(xml.contains("<loc>http://test-site.com/hello/1/foo</loc>"));
//! ```

mod common;
pub mod config;
pub mod links;
pub mod placeholders;
pub mod render;

pub use common::{HostPortError, get_api_base_url, setup_logging};
pub use config::{ChangeFreq, ConfigError, SitemapConfig, SitemapConfigBuilder};
pub use links::{Result, build_dynamic_links, build_static_link, collect_links};
pub use placeholders::{
    PatternError, Placeholder, RouteShape, captures_collide, check_pattern, extract_placeholders, to_axum_path,
};
pub use render::{SITEMAP_NS, render_sitemap};

/// Collects the links for `routes` and renders them as a sitemap document.
pub fn generate_sitemap<'a, I>(config: &SitemapConfig, routes: I) -> Result<String>
where
    I: IntoIterator<Item = &'a data_model_sitemap::Route>,
{
    let links = collect_links(config, routes)?;
    render_sitemap(&links, config)
}
