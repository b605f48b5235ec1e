pub mod errors;
pub mod models;

pub use errors::{PluginError, SitemapError};
pub use models::{ResourceRecord, Route, RouteConfig};
