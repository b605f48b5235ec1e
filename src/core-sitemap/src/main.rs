use std::path::PathBuf;

use anyhow::Context;
use clap::Parser;
use core_sitemap::{ChangeFreq, SitemapConfig, generate_sitemap, setup_logging};
use data_model_sitemap::Route;

/// Renders a sitemap offline from a JSON route manifest.
///
/// The manifest is a JSON array of routes:
/// `[{"method": "GET", "path": "/hello/<id:int>", "config": {"add_to_sitemap": true, "link_resources": [{"id": "1"}]}}]`
#[derive(Parser)]
#[command(name = "core-sitemap")]
#[command(about = "Render a sitemap.xml from a route manifest", long_about = None)]
struct CoreCli {
    /// JSON file listing the application's routes.
    #[arg(short, long, value_parser = validate_input_file)]
    routes: PathBuf,
    /// Output file for the sitemap. Writes to stdout when omitted.
    #[arg(short, long)]
    output: Option<PathBuf>,
    /// Site host, e.g. test-site.com. Falls back to the SITEMAP_* environment variables when omitted.
    #[arg(short, long)]
    site_name: Option<String>,
    /// URL scheme of every link.
    #[arg(short, long)]
    domain: Option<String>,
    /// changefreq of every entry.
    #[arg(short, long)]
    changefreq: Option<ChangeFreq>,
    /// priority of every entry, between 0.0 and 1.0.
    #[arg(short, long)]
    priority: Option<f64>,
}

fn validate_input_file(s: &str) -> Result<PathBuf, String> {
    let path = PathBuf::from(s);

    if !path.exists() {
        return Err(format!("Input path does not exist: {}", path.display()));
    }

    if !path.is_file() {
        return Err(format!("Input path is not a file: {}", path.display()));
    }

    Ok(path)
}

fn load_config(cli: &CoreCli) -> anyhow::Result<SitemapConfig> {
    let base = match &cli.site_name {
        Some(site_name) => SitemapConfig::builder(site_name.clone(), core_sitemap::config::DEFAULT_ENDPOINT).build()?,
        None => SitemapConfig::from_env().context("no --site-name given and SITEMAP_* environment is incomplete")?,
    };

    let config = SitemapConfig::builder(base.site_name, base.sitemap_endpoint)
        .keyword(base.keyword)
        .domain(cli.domain.clone().unwrap_or(base.domain))
        .changefreq(cli.changefreq.unwrap_or(base.changefreq))
        .priority(cli.priority.unwrap_or(base.priority))
        .build()?;
    Ok(config)
}

fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();
    setup_logging("core_sitemap=info");

    let cli = CoreCli::parse();
    let config = load_config(&cli)?;

    let manifest = std::fs::read_to_string(&cli.routes)
        .with_context(|| format!("Failed to read route manifest {}", cli.routes.display()))?;
    let routes: Vec<Route> = serde_json::from_str(&manifest)
        .with_context(|| format!("Failed to parse route manifest {}", cli.routes.display()))?;
    tracing::info!(routes = routes.len(), manifest = %cli.routes.display(), "loaded routes");

    let xml = generate_sitemap(&config, &routes)?;

    match &cli.output {
        Some(path) => {
            std::fs::write(path, &xml).with_context(|| format!("Failed to write sitemap to {}", path.display()))?;
            tracing::info!(output = %path.display(), "wrote sitemap");
        }
        None => print!("{}", xml),
    }
    Ok(())
}
