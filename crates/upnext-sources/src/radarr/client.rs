use async_trait::async_trait;
use chrono::NaiveDate;
use reqwest::Client;
use tracing::{info, warn};
use upnext_config::SourceConfig;
use upnext_models::{RadarrStats, SourceKind};
use crate::batch::CalendarBatch;
use crate::error::SourceError;
use crate::http::get_records;
use crate::radarr::models::RadarrMovie;
use crate::radarr::{normalize, stats};
use crate::traits::{window_end, CalendarSource, MovieLibrary};

const CALENDAR_PATH: &str = "/api/v3/calendar";
const MOVIE_PATH: &str = "/api/v3/movie";

/// Client for a Radarr instance
#[derive(Clone)]
pub struct RadarrClient {
    client: Client,
    base_url: String,
    api_key: String,
    days_ahead: u32,
}

impl RadarrClient {
    pub fn new(client: Client, config: &SourceConfig) -> Self {
        Self {
            client,
            base_url: config.url.clone(),
            api_key: config.api_key.clone(),
            days_ahead: config.days_ahead,
        }
    }

    fn upstream(&self) -> &'static str {
        SourceKind::Movie.upstream_name()
    }
}

#[async_trait]
impl CalendarSource for RadarrClient {
    fn kind(&self) -> SourceKind {
        SourceKind::Movie
    }

    fn days_ahead(&self) -> u32 {
        self.days_ahead
    }

    async fn fetch_calendar(&self, start: NaiveDate) -> Result<CalendarBatch, SourceError> {
        let end = window_end(start, self.days_ahead);
        let query = [
            ("start", start.format("%Y-%m-%d").to_string()),
            ("end", end.format("%Y-%m-%d").to_string()),
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

        let batch = CalendarBatch::collect(SourceKind::Movie, records, |record| {
            normalize::normalize_value(record, start)
        });

        info!(
            operation = "calendar_fetched",
            upstream = self.upstream(),
            %start,
            %end,
            received,
            items = batch.items.len(),
            skipped = batch.skipped,
            "Fetched Radarr calendar"
        );
        Ok(batch)
    }
}

#[async_trait]
impl MovieLibrary for RadarrClient {
    async fn movie_stats(&self) -> Result<RadarrStats, SourceError> {
        let records = get_records(
            &self.client,
            self.upstream(),
            &self.base_url,
            MOVIE_PATH,
            &self.api_key,
            &[],
        )
        .await?;

        let movies: Vec<RadarrMovie> = records
            .into_iter()
            .map(|record| {
                serde_json::from_value(record).unwrap_or_else(|e| {
                    warn!(
                        operation = "record_defaulted",
                        upstream = self.upstream(),
                        error = %e,
                        "Movie record has unexpected shape, counting it with empty fields"
                    );
                    RadarrMovie::default()
                })
            })
            .collect();

        Ok(stats::summarize_movies(&movies))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::http::build_http_client;
    use crate::test_support::spawn_upstream;
    use axum::extract::Query;
    use axum::http::StatusCode;
    use axum::routing::get;
    use axum::{Json, Router};
    use serde_json::json;
    use std::collections::HashMap;
    use std::time::Duration;

    fn client_for(base_url: String, days_ahead: u32) -> RadarrClient {
        let config = SourceConfig {
            url: base_url,
            api_key: "radarr-key".to_string(),
            days_ahead,
        };
        RadarrClient::new(build_http_client(Duration::from_secs(2)).unwrap(), &config)
    }

    #[tokio::test]
    async fn test_fetch_calendar_tolerates_one_bad_record() {
        let app = Router::new().route(
            CALENDAR_PATH,
            get(|Query(params): Query<HashMap<String, String>>| async move {
                assert_eq!(params.get("end").map(String::as_str), Some("2026-08-21"));
                assert!(!params.contains_key("includeSeries"));
                Json(json!([
                    { "title": "One", "digitalRelease": "2025-08-22T00:00:00Z", "hasFile": false },
                    { "title": "Two", "inCinemas": "2025-09-01T00:00:00Z", "hasFile": false },
                    { "title": "Three", "physicalRelease": "2025-10-01", "hasFile": true },
                    { "title": "Four", "digitalRelease": "2025-11-01T00:00:00Z" },
                    { "title": "Five", "inCinemas": "2026-01-01T00:00:00Z" },
                    { "title": "Broken", "digitalRelease": "someday" }
                ]))
            }),
        );
        let radarr = client_for(spawn_upstream(app).await, 365);

        let start = NaiveDate::from_ymd_opt(2025, 8, 21).unwrap();
        let batch = radarr.fetch_calendar(start).await.unwrap();

        assert_eq!(batch.items.len(), 5);
        assert_eq!(batch.skipped, 1);
    }

    #[tokio::test]
    async fn test_fetch_calendar_rejected() {
        let app = Router::new().route(
            CALENDAR_PATH,
            get(|| async { StatusCode::SERVICE_UNAVAILABLE }),
        );
        let radarr = client_for(spawn_upstream(app).await, 365);

        let start = NaiveDate::from_ymd_opt(2025, 8, 21).unwrap();
        let err = radarr.fetch_calendar(start).await.unwrap_err();
        assert_eq!(err, SourceError::Rejected { upstream: "radarr", status: 503 });
    }

    #[tokio::test]
    async fn test_movie_stats() {
        let app = Router::new().route(
            MOVIE_PATH,
            get(|| async {
                Json(json!([
                    { "title": "One", "hasFile": true, "monitored": true, "sizeOnDisk": 1024 },
                    { "title": "Two", "hasFile": false, "monitored": false },
                    { "title": 3, "hasFile": true, "monitored": true },
                    { "title": "Four", "hasFile": "yes", "monitored": true, "sizeOnDisk": -1 }
                ]))
            }),
        );
        let radarr = client_for(spawn_upstream(app).await, 365);

        let stats = radarr.movie_stats().await.unwrap();
        assert_eq!(stats.movies, 4);
        assert_eq!(stats.movie_files, 1);
        assert_eq!(stats.monitored, 2);
        assert_eq!(stats.unmonitored, 2);
        assert_eq!(stats.total_file_size, "0.0 TiB");
    }
}
