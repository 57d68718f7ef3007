//! Application configuration. Record source, badge policy, banner.

use serde::Deserialize;
use std::path::PathBuf;

/// Environment prefix: `RESPONSE_DESK_FIXTURE_PATH`, `RESPONSE_DESK_BADGE_CAP`, ...
pub const ENV_PREFIX: &str = "RESPONSE_DESK";

#[derive(Debug, Deserialize, Default)]
pub struct AppConfig {
    /// JSON fixture to seed the desk from. Read from RESPONSE_DESK_FIXTURE_PATH.
    /// Built-in sample records are used when unset.
    #[serde(default)]
    pub fixture_path: Option<String>,

    /// Unread badges above this render as "{cap}+". Read from RESPONSE_DESK_BADGE_CAP.
    /// Unset means no cap.
    #[serde(default)]
    pub badge_cap: Option<u32>,

    /// Print the welcome banner (default true). Read from RESPONSE_DESK_SHOW_BANNER.
    #[serde(default)]
    pub show_banner: Option<bool>,
}

impl AppConfig {
    pub fn load() -> Result<Self, config::ConfigError> {
        dotenv::dotenv().ok();
        let mut c = config::Config::builder();
        // Optional file first so environment variables override it.
        if let Ok(path) = std::env::var("RESPONSE_DESK_CONFIG") {
            c = c.add_source(config::File::with_name(&path));
        }
        c = c.add_source(config::Environment::with_prefix(ENV_PREFIX));
        c.build()?.try_deserialize()
    }

    pub fn fixture_path(&self) -> Option<PathBuf> {
        self.fixture_path
            .as_deref()
            .filter(|p| !p.trim().is_empty())
            .map(PathBuf::from)
    }

    /// Zero is treated as "no cap": a 0+ badge would hide every count.
    pub fn badge_cap(&self) -> Option<u32> {
        self.badge_cap.filter(|&cap| cap > 0)
    }

    pub fn show_banner_or_default(&self) -> bool {
        self.show_banner.unwrap_or(true)
    }
}
