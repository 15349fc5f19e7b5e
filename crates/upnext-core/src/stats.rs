use reqwest::Client;
use std::sync::Arc;
use tracing::warn;
use upnext_config::Config;
use upnext_models::{LibraryStats, RadarrStats, SonarrStats};
use upnext_sources::{MovieLibrary, RadarrClient, SeriesLibrary, SonarrClient};

/// Collects library totals from both schedulers.
///
/// Never fails as a whole: a source that errors reports zeroed totals and its
/// message lands in [`LibraryStats::error`].
#[derive(Clone)]
pub struct StatsCollector {
    series: Arc<dyn SeriesLibrary>,
    movies: Arc<dyn MovieLibrary>,
}

impl StatsCollector {
    pub fn new(series: Arc<dyn SeriesLibrary>, movies: Arc<dyn MovieLibrary>) -> Self {
        Self { series, movies }
    }

    pub fn from_config(config: &Config, client: Client) -> Self {
        Self::new(
            Arc::new(SonarrClient::new(client.clone(), &config.sonarr)),
            Arc::new(RadarrClient::new(client, &config.radarr)),
        )
    }

    pub async fn collect(&self) -> LibraryStats {
        let (series, movies) = futures::join!(self.series.series_stats(), self.movies.movie_stats());
        let mut errors = Vec::new();

        let sonarr = series.unwrap_or_else(|e| {
            warn!(operation = "stats_source_failed", upstream = e.upstream(), error = %e, "Sonarr stats unavailable");
            errors.push(format!("Sonarr error: {}", e));
            SonarrStats::default()
        });
        let radarr = movies.unwrap_or_else(|e| {
            warn!(operation = "stats_source_failed", upstream = e.upstream(), error = %e, "Radarr stats unavailable");
            errors.push(format!("Radarr error: {}", e));
            RadarrStats::default()
        });

        LibraryStats {
            sonarr,
            radarr,
            error: if errors.is_empty() { None } else { Some(errors.join(" | ")) },
        }
    }
}
