//! Sitemap configuration: where the sitemap lives and the defaults stamped on every entry.

use std::fmt;
use std::str::FromStr;
use thiserror::Error;
use url::Url;

pub const DEFAULT_KEYWORD: &str = "bottle_sitemap";
pub const DEFAULT_DOMAIN: &str = "http";
pub const DEFAULT_ENDPOINT: &str = "/sitemap.xml";
pub const DEFAULT_PRIORITY: f64 = 0.5;

/// Errors from building a [`SitemapConfig`].
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ConfigError {
    #[error("site_name must not be empty")]
    EmptySiteName,

    #[error("sitemap_endpoint must start with '/': {0}")]
    InvalidEndpoint(String),

    #[error("keyword must not be empty")]
    EmptyKeyword,

    #[error("'{domain}://{site_name}' is not a valid site URL: {reason}")]
    InvalidSite {
        domain: String,
        site_name: String,
        reason: String,
    },

    #[error("Unknown changefreq: {0} (expected always, hourly, daily, weekly, monthly, yearly or never)")]
    InvalidChangeFreq(String),

    #[error("priority must be between 0.0 and 1.0, got {0}")]
    InvalidPriority(f64),

    #[error("Invalid {var}: {reason}")]
    InvalidEnvVar { var: &'static str, reason: String },
}

/// How frequently a page is likely to change, per the sitemaps.org protocol.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum ChangeFreq {
    Always,
    Hourly,
    Daily,
    Weekly,
    #[default]
    Monthly,
    Yearly,
    Never,
}

impl ChangeFreq {
    pub fn as_str(&self) -> &'static str {
        match self {
            ChangeFreq::Always => "always",
            ChangeFreq::Hourly => "hourly",
            ChangeFreq::Daily => "daily",
            ChangeFreq::Weekly => "weekly",
            ChangeFreq::Monthly => "monthly",
            ChangeFreq::Yearly => "yearly",
            ChangeFreq::Never => "never",
        }
    }
}

impl fmt::Display for ChangeFreq {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ChangeFreq {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "always" => Ok(ChangeFreq::Always),
            "hourly" => Ok(ChangeFreq::Hourly),
            "daily" => Ok(ChangeFreq::Daily),
            "weekly" => Ok(ChangeFreq::Weekly),
            "monthly" => Ok(ChangeFreq::Monthly),
            "yearly" => Ok(ChangeFreq::Yearly),
            "never" => Ok(ChangeFreq::Never),
            _ => Err(ConfigError::InvalidChangeFreq(s.to_string())),
        }
    }
}

/// Process-wide sitemap settings. Built once at startup and read-only afterwards.
#[derive(Debug, Clone, PartialEq)]
pub struct SitemapConfig {
    /// URL scheme of every link (`http` or `https`).
    pub domain: String,
    /// Host every link points at, e.g. `test-site.com`.
    pub site_name: String,
    /// Path the sitemap is served on.
    pub sitemap_endpoint: String,
    /// Identifies the plugin instance; two instances may not share one.
    pub keyword: String,
    pub changefreq: ChangeFreq,
    pub priority: f64,
}

impl SitemapConfig {
    /// Creates a new builder. `site_name` and `sitemap_endpoint` are required; all else has defaults.
    pub fn builder(site_name: impl Into<String>, sitemap_endpoint: impl Into<String>) -> SitemapConfigBuilder {
        SitemapConfigBuilder {
            site_name: site_name.into(),
            sitemap_endpoint: sitemap_endpoint.into(),
            keyword: None,
            domain: None,
            changefreq: None,
            priority: None,
        }
    }

    /// Reads the configuration from `SITEMAP_*` environment variables.
    ///
    /// `SITEMAP_SITE_NAME` is required. `SITEMAP_ENDPOINT` defaults to `/sitemap.xml`;
    /// `SITEMAP_KEYWORD`, `SITEMAP_DOMAIN`, `SITEMAP_CHANGEFREQ` and `SITEMAP_PRIORITY` are optional.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|var| std::env::var(var).ok())
    }

    fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&'static str) -> Option<String>,
    {
        let site_name = lookup("SITEMAP_SITE_NAME").ok_or(ConfigError::InvalidEnvVar {
            var: "SITEMAP_SITE_NAME",
            reason: "not set".to_string(),
        })?;
        let endpoint = lookup("SITEMAP_ENDPOINT").unwrap_or_else(|| DEFAULT_ENDPOINT.to_string());

        let mut builder = Self::builder(site_name, endpoint);
        if let Some(keyword) = lookup("SITEMAP_KEYWORD") {
            builder = builder.keyword(keyword);
        }
        if let Some(domain) = lookup("SITEMAP_DOMAIN") {
            builder = builder.domain(domain);
        }
        if let Some(changefreq) = lookup("SITEMAP_CHANGEFREQ") {
            builder = builder.changefreq(changefreq.parse()?);
        }
        if let Some(priority) = lookup("SITEMAP_PRIORITY") {
            let priority = priority.trim().parse::<f64>().map_err(|e| ConfigError::InvalidEnvVar {
                var: "SITEMAP_PRIORITY",
                reason: e.to_string(),
            })?;
            builder = builder.priority(priority);
        }
        builder.build()
    }

    /// The priority as written in the sitemap; always carries a decimal point (`0.5`, `1.0`).
    pub fn priority_text(&self) -> String {
        if self.priority.fract() == 0.0 {
            format!("{:.1}", self.priority)
        } else {
            format!("{}", self.priority)
        }
    }
}

/// Builder for SitemapConfig.
#[derive(Debug, Clone)]
pub struct SitemapConfigBuilder {
    site_name: String,
    sitemap_endpoint: String,
    keyword: Option<String>,
    domain: Option<String>,
    changefreq: Option<ChangeFreq>,
    priority: Option<f64>,
}

impl SitemapConfigBuilder {
    /// Sets the duplicate-registration keyword (default: `bottle_sitemap`).
    pub fn keyword(mut self, keyword: impl Into<String>) -> Self {
        self.keyword = Some(keyword.into());
        self
    }

    /// Sets the URL scheme (default: `http`).
    pub fn domain(mut self, domain: impl Into<String>) -> Self {
        self.domain = Some(domain.into());
        self
    }

    /// Sets the changefreq of every entry (default: monthly).
    pub fn changefreq(mut self, changefreq: ChangeFreq) -> Self {
        self.changefreq = Some(changefreq);
        self
    }

    /// Sets the priority of every entry (default: 0.5).
    pub fn priority(mut self, priority: f64) -> Self {
        self.priority = Some(priority);
        self
    }

    /// Validates and builds the SitemapConfig.
    pub fn build(self) -> Result<SitemapConfig, ConfigError> {
        let site_name = self.site_name.trim().to_string();
        if site_name.is_empty() {
            return Err(ConfigError::EmptySiteName);
        }
        if !self.sitemap_endpoint.starts_with('/') {
            return Err(ConfigError::InvalidEndpoint(self.sitemap_endpoint));
        }
        let keyword = self.keyword.unwrap_or_else(|| DEFAULT_KEYWORD.to_string());
        if keyword.is_empty() {
            return Err(ConfigError::EmptyKeyword);
        }
        let domain = self.domain.unwrap_or_else(|| DEFAULT_DOMAIN.to_string());
        Url::parse(&format!("{}://{}", domain, site_name)).map_err(|e| ConfigError::InvalidSite {
            domain: domain.clone(),
            site_name: site_name.clone(),
            reason: e.to_string(),
        })?;
        let priority = self.priority.unwrap_or(DEFAULT_PRIORITY);
        if !(0.0..=1.0).contains(&priority) {
            return Err(ConfigError::InvalidPriority(priority));
        }

        Ok(SitemapConfig {
            domain,
            site_name,
            sitemap_endpoint: self.sitemap_endpoint,
            keyword,
            changefreq: self.changefreq.unwrap_or_default(),
            priority,
        })
    }
}
