use anyhow::{anyhow, Context, Result};
use serde::{Deserialize, Serialize};
use std::path::Path;

pub const DEFAULT_SONARR_DAYS_AHEAD: u32 = 90;
pub const DEFAULT_RADARR_DAYS_AHEAD: u32 = 365;

fn default_bind() -> String {
    "0.0.0.0:5001".to_string()
}

fn default_request_timeout_secs() -> u64 {
    10
}

/// Resolved, validated configuration. Read once at startup and shared read-only.
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct Config {
    pub sonarr: SourceConfig,
    pub radarr: SourceConfig,
    pub server: ServerConfig,
}

/// Connection settings for one upstream scheduler
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct SourceConfig {
    pub url: String,
    pub api_key: String,
    pub days_ahead: u32,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ServerConfig {
    #[serde(default = "default_bind")]
    pub bind: String,
    /// Upper bound for each upstream request
    #[serde(default = "default_request_timeout_secs")]
    pub request_timeout_secs: u64,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            bind: default_bind(),
            request_timeout_secs: default_request_timeout_secs(),
        }
    }
}

// File layout: every field optional so the environment can fill the gaps
#[derive(Debug, Default, Deserialize)]
struct RawConfig {
    #[serde(default)]
    sonarr: RawSource,
    #[serde(default)]
    radarr: RawSource,
    #[serde(default)]
    server: ServerConfig,
}

#[derive(Debug, Default, Deserialize)]
struct RawSource {
    url: Option<String>,
    api_key: Option<String>,
    days_ahead: Option<u32>,
}

impl RawSource {
    fn apply_env<F>(&mut self, prefix: &str, lookup: &F) -> Result<()>
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(url) = lookup(&format!("{}_URL", prefix)) {
            self.url = Some(url);
        }
        if let Some(key) = lookup(&format!("{}_API_KEY", prefix)) {
            self.api_key = Some(key);
        }
        let days_var = format!("{}_DAYS_AHEAD", prefix);
        if let Some(days) = lookup(&days_var) {
            let days = days
                .trim()
                .parse::<u32>()
                .with_context(|| format!("{} must be a non-negative integer, got '{}'", days_var, days))?;
            self.days_ahead = Some(days);
        }
        Ok(())
    }

    fn resolve(self, name: &str, default_days: u32) -> Result<SourceConfig> {
        let url = self
            .url
            .map(|u| u.trim().trim_end_matches('/').to_string())
            .filter(|u| !u.is_empty())
            .ok_or_else(|| anyhow!("{} url is not configured", name))?;
        let api_key = self
            .api_key
            .map(|k| k.trim().to_string())
            .filter(|k| !k.is_empty())
            .ok_or_else(|| anyhow!("{} api_key is not configured", name))?;

        Ok(SourceConfig {
            url,
            api_key,
            days_ahead: self.days_ahead.unwrap_or(default_days),
        })
    }
}

impl Config {
    /// Load from an optional TOML file, then apply process environment overrides.
    pub fn load(path: Option<&Path>) -> Result<Self> {
        Self::load_with_env(path, |key| std::env::var(key).ok())
    }

    /// Same as [`Config::load`] with an injectable environment lookup.
    pub fn load_with_env<F>(path: Option<&Path>, lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut raw = match path {
            Some(path) => {
                let content = std::fs::read_to_string(path)
                    .with_context(|| format!("Failed to read config file {}", path.display()))?;
                toml::from_str::<RawConfig>(&content)
                    .with_context(|| format!("Failed to parse config file {}", path.display()))?
            }
            None => RawConfig::default(),
        };

        raw.sonarr.apply_env("SONARR", &lookup)?;
        raw.radarr.apply_env("RADARR", &lookup)?;
        if let Some(bind) = lookup("UPNEXT_BIND") {
            raw.server.bind = bind;
        }
        if let Some(timeout) = lookup("UPNEXT_REQUEST_TIMEOUT_SECS") {
            raw.server.request_timeout_secs = timeout.trim().parse::<u64>().with_context(|| {
                format!("UPNEXT_REQUEST_TIMEOUT_SECS must be an integer, got '{}'", timeout)
            })?;
        }

        let config = Config {
            sonarr: raw.sonarr.resolve("sonarr", DEFAULT_SONARR_DAYS_AHEAD)?,
            radarr: raw.radarr.resolve("radarr", DEFAULT_RADARR_DAYS_AHEAD)?,
            server: raw.server,
        };
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<()> {
        for (name, source) in [("sonarr", &self.sonarr), ("radarr", &self.radarr)] {
            if !(source.url.starts_with("http://") || source.url.starts_with("https://")) {
                return Err(anyhow!("{} url must start with http:// or https://, got '{}'", name, source.url));
            }
            if source.api_key.is_empty() {
                return Err(anyhow!("{} api_key cannot be empty", name));
            }
        }

        if self.server.request_timeout_secs == 0 {
            return Err(anyhow!("request_timeout_secs must be greater than zero"));
        }
        if self.server.bind.trim().is_empty() {
            return Err(anyhow!("server bind address cannot be empty"));
        }

        Ok(())
    }
}

impl SourceConfig {
    /// API key with all but the last four characters hidden
    pub fn masked_api_key(&self) -> String {
        let visible: String = self
            .api_key
            .chars()
            .rev()
            .take(4)
            .collect::<Vec<_>>()
            .into_iter()
            .rev()
            .collect();
        if self.api_key.chars().count() <= 4 {
            "****".to_string()
        } else {
            format!("****{}", visible)
        }
    }
}
