//! Wiring & DI. Entry point: pick a record source, load the desk, run the UI.
//! No business logic here.

use dotenv::dotenv;
use response_desk::adapters::source::{FixtureSource, SampleSource};
use response_desk::adapters::ui::tui::TuiInputPort;
use response_desk::ports::{InputPort, RecordSource};
use response_desk::shared::config::AppConfig;
use response_desk::usecases::Desk;
use std::path::PathBuf;
use tracing::{info, warn};
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cwd = std::env::current_dir().unwrap_or_else(|_| PathBuf::from("."));
    let env_loaded = dotenv();
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| "info".into()))
        .with(tracing_subscriber::fmt::layer())
        .init();

    match &env_loaded {
        Ok(path) => info!(path = %path.display(), "loaded .env"),
        Err(_) => info!(cwd = %cwd.display(), "no .env found (check CWD)"),
    }

    let cfg = AppConfig::load().unwrap_or_else(|e| {
        warn!(error = %e, "config invalid; using defaults");
        AppConfig::default()
    });

    response_desk::adapters::ui::init_ui(cfg.show_banner_or_default());

    let source: Box<dyn RecordSource> = match cfg.fixture_path() {
        Some(path) => Box::new(FixtureSource::new(path)),
        None => Box::new(SampleSource),
    };
    info!(source = %source.name(), "record source selected");

    let desk = Desk::load(source.as_ref())
        .await
        .map_err(|e| anyhow::anyhow!("load desk from {}: {}", source.name(), e))?;

    if let Some(cap) = cfg.badge_cap() {
        info!(cap, "unread badges capped");
    }

    let input_port: Box<dyn InputPort> = Box::new(TuiInputPort::new(desk, cfg.badge_cap()));
    input_port
        .run()
        .await
        .map_err(|e| anyhow::anyhow!("{}", e))?;

    Ok(())
}
