use anyhow::Context;
use axum::extract::Path;
use core_sitemap::{SitemapConfig, get_api_base_url, setup_logging};
use data_model_sitemap::{ResourceRecord, RouteConfig};

use api_sitemap::{App, SitemapPlugin, routes::health_check};

async fn index() -> &'static str {
    "Welcome!"
}

async fn hello() -> &'static str {
    "Hello!"
}

async fn hello_item(Path((user_id, item)): Path<(u64, String)>) -> String {
    format!("Hello user {}, here is your {}.", user_id, item)
}

fn record(pairs: &[(&str, &str)]) -> ResourceRecord {
    pairs.iter().map(|(k, v)| (k.to_string(), v.to_string())).collect()
}

fn demo_app(config: SitemapConfig) -> anyhow::Result<App> {
    let mut app = App::new();
    app.install(SitemapPlugin::new(config))?;
    app.get("/health", health_check, RouteConfig::new())?
        .get("/", index, RouteConfig::new().add_to_sitemap(true))?
        .get("/hello", hello, RouteConfig::new().add_to_sitemap(true))?
        .get(
            "/hello/<user_id:int>/<item>",
            hello_item,
            RouteConfig::new().add_to_sitemap(true).link_resources([
                record(&[("user_id", "1"), ("item", "foo")]),
                record(&[("user_id", "2"), ("item", "bar")]),
            ]),
        )?;
    Ok(app)
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load environment variables from .env file
    dotenvy::dotenv().ok();

    setup_logging("api_sitemap=debug,core_sitemap=debug,tower_http=debug");

    let config = SitemapConfig::from_env().context("Invalid SITEMAP_* configuration")?;
    let app = demo_app(config)?.into_router();

    let addr = get_api_base_url().context("Invalid HOST or PORT")?;
    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .with_context(|| format!("Failed to bind to address: {}", addr))?;
    tracing::info!(%addr, "serving");
    axum::serve(listener, app).await?;
    Ok(())
}
