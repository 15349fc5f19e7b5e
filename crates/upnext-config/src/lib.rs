pub mod config;
pub mod paths;

pub use config::{Config, ServerConfig, SourceConfig, DEFAULT_RADARR_DAYS_AHEAD, DEFAULT_SONARR_DAYS_AHEAD};
pub use paths::{PathManager, container_base_path};
