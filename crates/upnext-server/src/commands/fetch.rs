use crate::commands::http_client;
use color_eyre::Result;
use serde::Serialize;
use upnext_config::Config;
use upnext_core::{Aggregator, StatsCollector};

fn print_json<T: Serialize>(value: &T, pretty: bool) -> Result<()> {
    let rendered = if pretty {
        serde_json::to_string_pretty(value)?
    } else {
        serde_json::to_string(value)?
    };
    println!("{}", rendered);
    Ok(())
}

/// Build the feed once and print it; total failure is a non-zero exit
pub async fn run_agenda(config: Config, pretty: bool) -> Result<()> {
    let aggregator = Aggregator::from_config(&config, http_client(&config)?);
    let report = aggregator
        .build()
        .await
        .map_err(|e| color_eyre::eyre::eyre!("Failed to build agenda: {}", e))?;

    for failure in &report.failures {
        eprintln!("warning: {}", failure);
    }
    print_json(&report.feed, pretty)
}

pub async fn run_stats(config: Config, pretty: bool) -> Result<()> {
    let collector = StatsCollector::from_config(&config, http_client(&config)?);
    print_json(&collector.collect().await, pretty)
}
