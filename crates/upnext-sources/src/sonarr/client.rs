use async_trait::async_trait;
use chrono::NaiveDate;
use reqwest::Client;
use tracing::{info, warn};
use upnext_config::SourceConfig;
use upnext_models::{SonarrStats, SourceKind};
use crate::batch::CalendarBatch;
use crate::error::SourceError;
use crate::http::get_records;
use crate::sonarr::models::SonarrSeries;
use crate::sonarr::{normalize, stats};
use crate::traits::{window_end, CalendarSource, SeriesLibrary};

const CALENDAR_PATH: &str = "/api/v3/calendar";
const SERIES_PATH: &str = "/api/v3/series";

/// Client for a Sonarr instance
#[derive(Clone)]
pub struct SonarrClient {
    client: Client,
    base_url: String,
    api_key: String,
    days_ahead: u32,
}

impl SonarrClient {
    pub fn new(client: Client, config: &SourceConfig) -> Self {
        Self {
            client,
            base_url: config.url.clone(),
            api_key: config.api_key.clone(),
            days_ahead: config.days_ahead,
        }
    }

    fn upstream(&self) -> &'static str {
        SourceKind::Tv.upstream_name()
    }
}

#[async_trait]
impl CalendarSource for SonarrClient {
    fn kind(&self) -> SourceKind {
        SourceKind::Tv
    }

    fn days_ahead(&self) -> u32 {
        self.days_ahead
    }

    async fn fetch_calendar(&self, start: NaiveDate) -> Result<CalendarBatch, SourceError> {
        let end = window_end(start, self.days_ahead);
        let query = [
            ("start", start.format("%Y-%m-%d").to_string()),
            ("end", end.format("%Y-%m-%d").to_string()),
            ("includeSeries", "true".to_string()),
        ];

        let records = get_records(
            &self.client,
            self.upstream(),
            &self.base_url,
            CALENDAR_PATH,
            &self.api_key,
            &query,
        )
        .await?;
        let received = records.len();

        let batch = CalendarBatch::collect(SourceKind::Tv, records, normalize::normalize_value);

        info!(
            operation = "calendar_fetched",
            upstream = self.upstream(),
            %start,
            %end,
            received,
            items = batch.items.len(),
            skipped = batch.skipped,
            "Fetched Sonarr calendar"
        );
        Ok(batch)
    }
}

#[async_trait]
impl SeriesLibrary for SonarrClient {
    async fn series_stats(&self) -> Result<SonarrStats, SourceError> {
        let records = get_records(
            &self.client,
            self.upstream(),
            &self.base_url,
            SERIES_PATH,
            &self.api_key,
            &[],
        )
        .await?;

        let series: Vec<SonarrSeries> = records
            .into_iter()
            .map(|record| {
                serde_json::from_value(record).unwrap_or_else(|e| {
                    warn!(
                        operation = "record_defaulted",
                        upstream = self.upstream(),
                        error = %e,
                        "Series record has unexpected shape, counting it with empty fields"
                    );
                    SonarrSeries::default()
                })
            })
            .collect();

        Ok(stats::summarize_series(&series))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::http::build_http_client;
    use crate::test_support::{spawn_upstream, unused_base_url};
    use axum::extract::Query;
    use axum::routing::get;
    use axum::{Json, Router};
    use serde_json::{json, Value};
    use std::collections::HashMap;
    use std::time::Duration;

    fn calendar_fixture() -> Value {
        json!([
            {
                "seasonNumber": 1, "episodeNumber": 1, "title": "Pilot",
                "airDateUtc": "2025-08-21T20:00:00Z", "hasFile": false,
                "series": { "title": "Show A" }
            },
            {
                "seasonNumber": 1, "episodeNumber": 2, "title": "Second",
                "airDateUtc": "2025-08-28T20:00:00Z", "hasFile": true,
                "series": { "title": "Show A" }
            },
            {
                "seasonNumber": 3, "episodeNumber": 4,
                "airDateUtc": "not a date",
                "series": { "title": "Broken Show" }
            }
        ])
    }

    fn client_for(base_url: String, days_ahead: u32) -> SonarrClient {
        let config = SourceConfig {
            url: base_url,
            api_key: "sonarr-key".to_string(),
            days_ahead,
        };
        SonarrClient::new(build_http_client(Duration::from_secs(2)).unwrap(), &config)
    }

    #[tokio::test]
    async fn test_fetch_calendar_requests_window_and_skips_bad_records() {
        let app = Router::new().route(
            CALENDAR_PATH,
            get(|Query(params): Query<HashMap<String, String>>| async move {
                assert_eq!(params.get("start").map(String::as_str), Some("2025-08-21"));
                assert_eq!(params.get("end").map(String::as_str), Some("2025-09-20"));
                assert_eq!(params.get("includeSeries").map(String::as_str), Some("true"));
                Json(calendar_fixture())
            }),
        );
        let sonarr = client_for(spawn_upstream(app).await, 30);

        let start = NaiveDate::from_ymd_opt(2025, 8, 21).unwrap();
        let batch = sonarr.fetch_calendar(start).await.unwrap();

        assert_eq!(batch.items.len(), 2);
        assert_eq!(batch.skipped, 1);
        assert_eq!(batch.items[0].details(), "S01E01 - Pilot");
        assert!(batch.items[1].has_file());
    }

    #[tokio::test]
    async fn test_fetch_calendar_unreachable() {
        let sonarr = client_for(unused_base_url().await, 30);
        let start = NaiveDate::from_ymd_opt(2025, 8, 21).unwrap();

        let err = sonarr.fetch_calendar(start).await.unwrap_err();
        assert_eq!(err.tag(), "SourceUnreachable");
    }

    #[tokio::test]
    async fn test_series_stats() {
        let app = Router::new().route(
            SERIES_PATH,
            get(|| async {
                Json(json!([
                    { "status": "continuing", "monitored": true,
                      "statistics": { "totalEpisodeCount": 10, "episodeFileCount": 4, "sizeOnDisk": 0 } },
                    { "status": "ended", "ended": true, "monitored": false },
                    { "status": "continuing", "monitored": "yes",
                      "statistics": { "totalEpisodeCount": "many", "episodeFileCount": 2 } },
                    "garbage"
                ]))
            }),
        );
        let sonarr = client_for(spawn_upstream(app).await, 30);

        let stats = sonarr.series_stats().await.unwrap();
        // Every record counts, even ones whose fields cannot be read
        assert_eq!(stats.series, 4);
        assert_eq!(stats.continuing, 2);
        assert_eq!(stats.ended, 1);
        assert_eq!(stats.monitored, 1);
        assert_eq!(stats.unmonitored, 3);
        assert_eq!(stats.episodes, 10);
        assert_eq!(stats.files, 6);
    }
}
