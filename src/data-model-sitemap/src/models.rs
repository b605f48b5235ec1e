use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use std::collections::BTreeMap;

use crate::errors::SitemapError;

/// Route config key marking a route as listable in the sitemap.
pub const ADD_TO_SITEMAP: &str = "add_to_sitemap";

/// Route config key holding the resource records used to expand a parameterized route.
pub const LINK_RESOURCES: &str = "link_resources";

/// Parameter name -> substitution value. One record produces one dynamic link.
pub type ResourceRecord = BTreeMap<String, String>;

/// Arbitrary key/value configuration attached to a route at registration time.
///
/// The extension only reads the `add_to_sitemap` and `link_resources` keys; everything else
/// belongs to the application and is carried along untouched.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct RouteConfig(Map<String, Value>);

impl RouteConfig {
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the `add_to_sitemap` flag.
    pub fn add_to_sitemap(self, add: bool) -> Self {
        self.insert(ADD_TO_SITEMAP, add)
    }

    /// Sets the `link_resources` list. Each record expands into one link.
    pub fn link_resources<I>(self, records: I) -> Self
    where
        I: IntoIterator<Item = ResourceRecord>,
    {
        let records: Vec<Value> = records
            .into_iter()
            .map(|record| Value::Object(record.into_iter().map(|(k, v)| (k, Value::String(v))).collect()))
            .collect();
        self.insert(LINK_RESOURCES, records)
    }

    /// Sets any other configuration value.
    pub fn insert(mut self, key: impl Into<String>, value: impl Into<Value>) -> Self {
        self.0.insert(key.into(), value.into());
        self
    }

    pub fn get(&self, key: &str) -> Option<&Value> {
        self.0.get(key)
    }

    /// True iff `add_to_sitemap` is present and truthy.
    pub fn is_sitemap_eligible(&self) -> bool {
        self.0.get(ADD_TO_SITEMAP).is_some_and(is_truthy)
    }

    /// The `link_resources` records. `None` when the key is absent or null.
    pub fn resource_records(&self) -> Result<Option<Vec<ResourceRecord>>, serde_json::Error> {
        match self.0.get(LINK_RESOURCES) {
            None | Some(Value::Null) => Ok(None),
            Some(value) => Vec::<ResourceRecord>::deserialize(value).map(Some),
        }
    }
}

/// Truthiness of a config value: null, false, zero and empty strings/lists/maps are falsy.
pub fn is_truthy(value: &Value) -> bool {
    match value {
        Value::Null => false,
        Value::Bool(b) => *b,
        Value::Number(n) => n.as_f64().is_some_and(|f| f != 0.0),
        Value::String(s) => !s.is_empty(),
        Value::Array(a) => !a.is_empty(),
        Value::Object(o) => !o.is_empty(),
    }
}

fn default_method() -> String {
    "GET".to_string()
}

/// A registered route, as seen by the sitemap extension.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Route {
    /// HTTP method the route answers to.
    #[serde(default = "default_method")]
    pub method: String,
    /// Path pattern, with `<name>` or `<name:type>` placeholders.
    pub path: String,
    #[serde(default)]
    pub config: RouteConfig,
}

impl Route {
    pub fn new(method: impl Into<String>, path: impl Into<String>, config: RouteConfig) -> Self {
        Self {
            method: method.into(),
            path: path.into(),
            config,
        }
    }

    /// Shorthand for a GET route.
    pub fn get(path: impl Into<String>, config: RouteConfig) -> Self {
        Self::new(default_method(), path, config)
    }

    /// The route's resource records, with malformed `link_resources` reported against this route's path.
    pub fn link_resources(&self) -> Result<Option<Vec<ResourceRecord>>, SitemapError> {
        self.config
            .resource_records()
            .map_err(|e| SitemapError::InvalidLinkResources {
                path: self.path.clone(),
                reason: e.to_string(),
            })
    }
}
