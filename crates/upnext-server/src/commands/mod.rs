pub mod config;
pub mod fetch;
pub mod serve;

use color_eyre::eyre::Context;
use color_eyre::Result;
use std::path::PathBuf;
use std::time::Duration;
use upnext_config::{Config, PathManager};

/// Resolve the config file (explicit path, else the default one if present) and load it.
pub fn load_config(path: Option<PathBuf>) -> Result<Config> {
    let path = path.or_else(|| {
        let default = PathManager::default().config_file();
        default.exists().then_some(default)
    });

    Config::load(path.as_deref())
        .map_err(|e| color_eyre::eyre::eyre!("Failed to load configuration: {:#}", e))
}

/// One client shared by both upstreams, bounded by the configured timeout
pub fn http_client(config: &Config) -> Result<reqwest::Client> {
    upnext_sources::build_http_client(Duration::from_secs(config.server.request_timeout_secs))
        .wrap_err("Failed to build HTTP client")
}
