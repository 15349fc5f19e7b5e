use color_eyre::Result;
use serde_json::json;
use upnext_config::{Config, SourceConfig};

fn describe(source: &SourceConfig, full: bool) -> serde_json::Value {
    json!({
        "url": source.url,
        "api_key": if full { source.api_key.clone() } else { source.masked_api_key() },
        "days_ahead": source.days_ahead,
    })
}

/// Print the resolved configuration; API keys are masked unless `full`
pub fn run_show(config: &Config, full: bool) -> Result<()> {
    let summary = json!({
        "sonarr": describe(&config.sonarr, full),
        "radarr": describe(&config.radarr, full),
        "server": config.server,
    });
    println!("{}", serde_json::to_string_pretty(&summary)?);
    Ok(())
}
