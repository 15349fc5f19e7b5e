pub mod agenda;
pub mod health;
pub mod state;
pub mod stats;

use axum::routing::get;
use axum::Router;
pub use state::AppState;

pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/api/agenda", get(agenda::get_agenda))
        .route("/api/stats", get(stats::get_stats))
        .route("/health", get(health::health_check))
        .with_state(state)
}

#[cfg(test)]
pub(crate) mod test_support {
    use super::*;
    use async_trait::async_trait;
    use chrono::NaiveDate;
    use std::sync::Arc;
    use upnext_core::{Aggregator, StatsCollector};
    use upnext_models::{Item, RadarrStats, SonarrStats, SourceKind};
    use upnext_sources::{CalendarBatch, CalendarSource, MovieLibrary, SeriesLibrary, SourceError};

    /// Canned upstream standing in for Sonarr or Radarr
    pub struct FakeUpstream {
        pub kind: SourceKind,
        pub calendar: Result<Vec<Item>, SourceError>,
    }

    #[async_trait]
    impl CalendarSource for FakeUpstream {
        fn kind(&self) -> SourceKind {
            self.kind
        }

        fn days_ahead(&self) -> u32 {
            7
        }

        async fn fetch_calendar(&self, _start: NaiveDate) -> Result<CalendarBatch, SourceError> {
            self.calendar.clone().map(|items| CalendarBatch { items, skipped: 0 })
        }
    }

    #[async_trait]
    impl SeriesLibrary for FakeUpstream {
        async fn series_stats(&self) -> Result<SonarrStats, SourceError> {
            self.calendar
                .clone()
                .map(|items| SonarrStats { series: items.len() as u64, ..SonarrStats::default() })
        }
    }

    #[async_trait]
    impl MovieLibrary for FakeUpstream {
        async fn movie_stats(&self) -> Result<RadarrStats, SourceError> {
            self.calendar
                .clone()
                .map(|items| RadarrStats { movies: items.len() as u64, ..RadarrStats::default() })
        }
    }

    pub fn state(tv: FakeUpstream, movie: FakeUpstream) -> AppState {
        let tv = Arc::new(tv);
        let movie = Arc::new(movie);
        AppState::new(
            Aggregator::new(tv.clone(), movie.clone()),
            StatsCollector::new(tv, movie),
        )
    }

    /// Serve the router on an ephemeral local port and return its base URL
    pub async fn spawn(state: AppState) -> String {
        let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
            .await
            .expect("listener should bind");
        let address = listener.local_addr().expect("local addr should exist");
        tokio::spawn(async move {
            axum::serve(listener, router(state)).await.expect("server should run");
        });
        format!("http://{address}")
    }
}
