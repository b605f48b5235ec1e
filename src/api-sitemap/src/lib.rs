pub mod app;
pub mod plugin;
pub mod routes;

pub use app::{App, Plugin, RouteTable};
pub use plugin::SitemapPlugin;
