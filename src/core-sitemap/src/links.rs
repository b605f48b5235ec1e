//! Turning routes into absolute sitemap links.

use data_model_sitemap::{Route, SitemapError};

use crate::config::SitemapConfig;
use crate::placeholders::{Placeholder, RouteShape};

/// Type alias for Result with SitemapError
pub type Result<T> = std::result::Result<T, SitemapError>;

/// The single link of a route without placeholders: `scheme://host` followed by the path, verbatim.
///
/// # Examples
///
/// ```
/// # use core_sitemap::build_static_link;
/// # use data_model_sitemap::{Route, RouteConfig};
/// let route = Route::get("/hello", RouteConfig::new());
/// assert_eq!(build_static_link("http", "test-site.com", &route), "http://test-site.com/hello");
/// ```
pub fn build_static_link(scheme: &str, host: &str, route: &Route) -> String {
    format!("{}://{}{}", scheme, host, route.path)
}

/// One link per resource record of a parameterized route, in record order.
///
/// For each record, every placeholder in turn replaces the first remaining occurrence of its
/// token in the path with the record's value for the placeholder's name.
///
/// # Errors
///
/// - [`SitemapError::SitemapBackendNotFound`] if the route has no (or empty) `link_resources`.
/// - [`SitemapError::ResourceDoesntExist`] if a record lacks a value for a placeholder.
/// - [`SitemapError::InvalidLinkResources`] if `link_resources` has the wrong shape.
pub fn build_dynamic_links(scheme: &str, host: &str, route: &Route, placeholders: &[Placeholder]) -> Result<Vec<String>> {
    let records = match route.link_resources()? {
        Some(records) if !records.is_empty() => records,
        _ => {
            return Err(SitemapError::SitemapBackendNotFound {
                path: route.path.clone(),
            });
        }
    };

    records
        .iter()
        .map(|record| {
            let mut path = route.path.clone();
            for placeholder in placeholders {
                let value = record
                    .get(placeholder.name())
                    .ok_or_else(|| SitemapError::ResourceDoesntExist {
                        name: placeholder.name().to_string(),
                    })?;
                path = path.replacen(placeholder.token(), value, 1);
            }
            Ok(format!("{}://{}{}", scheme, host, path))
        })
        .collect()
}

/// All links for the sitemap: eligible routes in registration order, each route's
/// dynamic expansions in record order. The first failing route aborts the whole collection.
pub fn collect_links<'a, I>(config: &SitemapConfig, routes: I) -> Result<Vec<String>>
where
    I: IntoIterator<Item = &'a Route>,
{
    let mut links = Vec::new();
    for route in routes.into_iter().filter(|r| r.config.is_sitemap_eligible()) {
        match RouteShape::classify(&route.path) {
            RouteShape::Static => {
                tracing::debug!(path = %route.path, "static sitemap route");
                links.push(build_static_link(&config.domain, &config.site_name, route));
            }
            RouteShape::Dynamic(placeholders) => {
                tracing::debug!(path = %route.path, placeholders = placeholders.len(), "dynamic sitemap route");
                links.extend(build_dynamic_links(
                    &config.domain,
                    &config.site_name,
                    route,
                    &placeholders,
                )?);
            }
        }
    }
    tracing::info!(links = links.len(), site = %config.site_name, "collected sitemap links");
    Ok(links)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::placeholders::extract_placeholders;
    use data_model_sitemap::{ResourceRecord, RouteConfig};

    fn record(pairs: &[(&str, &str)]) -> ResourceRecord {
        pairs.iter().map(|(k, v)| (k.to_string(), v.to_string())).collect()
    }

    fn dynamic(route: &Route) -> Result<Vec<String>> {
        build_dynamic_links("http", "test-site.com", route, &extract_placeholders(&route.path))
    }

    fn config() -> SitemapConfig {
        SitemapConfig::builder("test-site.com", "/sitemap.xml").build().unwrap()
    }

    #[test]
    fn test_static_link_is_verbatim() {
        let route = Route::get("/hello", RouteConfig::new());
        assert_eq!(build_static_link("http", "test-site.com", &route), "http://test-site.com/hello");

        let route = Route::get("/a b/%41?x=1", RouteConfig::new());
        assert_eq!(build_static_link("https", "example.org", &route), "https://example.org/a b/%41?x=1");
    }

    #[test]
    fn test_dynamic_single_record() {
        let route = Route::get(
            "/hello/<user_id:int>/<item>",
            RouteConfig::new().link_resources([record(&[("user_id", "1"), ("item", "foo")])]),
        );
        assert_eq!(dynamic(&route).unwrap(), vec!["http://test-site.com/hello/1/foo"]);
    }

    #[test]
    fn test_dynamic_preserves_record_order() {
        let route = Route::get(
            "/users/<id>",
            RouteConfig::new().link_resources([
                record(&[("id", "3")]),
                record(&[("id", "1")]),
                record(&[("id", "2")]),
            ]),
        );
        assert_eq!(
            dynamic(&route).unwrap(),
            vec![
                "http://test-site.com/users/3",
                "http://test-site.com/users/1",
                "http://test-site.com/users/2",
            ]
        );
    }

    #[test]
    fn test_dynamic_duplicate_placeholders_fill_in_order() {
        let route = Route::get("/<a>/<a>", RouteConfig::new().link_resources([record(&[("a", "x")])]));
        assert_eq!(dynamic(&route).unwrap(), vec!["http://test-site.com/x/x"]);
    }

    #[test]
    fn test_dynamic_ignores_extra_record_keys() {
        let route = Route::get(
            "/items/<item>",
            RouteConfig::new().link_resources([record(&[("item", "foo"), ("unused", "bar")])]),
        );
        assert_eq!(dynamic(&route).unwrap(), vec!["http://test-site.com/items/foo"]);
    }

    #[test]
    fn test_dynamic_without_resources() {
        let route = Route::get("/hello/<item>", RouteConfig::new());
        assert_eq!(
            dynamic(&route).unwrap_err(),
            SitemapError::SitemapBackendNotFound {
                path: "/hello/<item>".to_string()
            }
        );
    }

    #[test]
    fn test_dynamic_with_empty_resources() {
        let route = Route::get("/hello/<item>", RouteConfig::new().link_resources(Vec::<ResourceRecord>::new()));
        assert!(matches!(
            dynamic(&route).unwrap_err(),
            SitemapError::SitemapBackendNotFound { .. }
        ));
    }

    #[test]
    fn test_dynamic_missing_typed_parameter() {
        let route = Route::get(
            "/hello/<user_id:int>/<item>",
            RouteConfig::new().link_resources([record(&[("item", "foo")])]),
        );
        assert_eq!(
            dynamic(&route).unwrap_err(),
            SitemapError::ResourceDoesntExist {
                name: "user_id".to_string()
            }
        );
    }

    #[test]
    fn test_dynamic_missing_untyped_parameter() {
        let route = Route::get(
            "/hello/<user_id:int>/<item>",
            RouteConfig::new().link_resources([record(&[("user_id", "1")])]),
        );
        assert_eq!(
            dynamic(&route).unwrap_err(),
            SitemapError::ResourceDoesntExist {
                name: "item".to_string()
            }
        );
    }

    #[test]
    fn test_dynamic_one_bad_record_fails_all() {
        let route = Route::get(
            "/users/<id>",
            RouteConfig::new().link_resources([record(&[("id", "1")]), record(&[("other", "2")])]),
        );
        assert!(dynamic(&route).is_err());
    }

    #[test]
    fn test_collect_links_filters_and_orders() {
        let routes = vec![
            Route::get("/hidden", RouteConfig::new()),
            Route::get("/hello", RouteConfig::new().add_to_sitemap(true)),
            Route::get(
                "/users/<id>",
                RouteConfig::new()
                    .add_to_sitemap(true)
                    .link_resources([record(&[("id", "1")]), record(&[("id", "2")])]),
            ),
            Route::get("/about", RouteConfig::new().add_to_sitemap(true)),
            Route::get("/off", RouteConfig::new().add_to_sitemap(false)),
        ];

        assert_eq!(
            collect_links(&config(), &routes).unwrap(),
            vec![
                "http://test-site.com/hello",
                "http://test-site.com/users/1",
                "http://test-site.com/users/2",
                "http://test-site.com/about",
            ]
        );
    }

    #[test]
    fn test_collect_links_ineligible_dynamic_route_is_skipped() {
        let routes = vec![Route::get("/users/<id>", RouteConfig::new())];
        assert_eq!(collect_links(&config(), &routes).unwrap(), Vec::<String>::new());
    }

    #[test]
    fn test_collect_links_aborts_on_error() {
        let routes = vec![
            Route::get("/hello", RouteConfig::new().add_to_sitemap(true)),
            Route::get("/users/<id>", RouteConfig::new().add_to_sitemap(true)),
        ];
        assert!(matches!(
            collect_links(&config(), &routes),
            Err(SitemapError::SitemapBackendNotFound { .. })
        ));
    }
}
