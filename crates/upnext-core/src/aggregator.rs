use chrono::{NaiveDate, Utc};
use reqwest::Client;
use std::sync::Arc;
use std::time::Instant;
use thiserror::Error;
use tracing::{debug, error, info, warn};
use upnext_config::Config;
use upnext_models::Feed;
use upnext_sources::{CalendarBatch, CalendarSource, RadarrClient, SonarrClient, SourceError};
use crate::merge::merge_items;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum AggregateError {
    /// Neither upstream produced a usable response
    #[error("all sources failed (tv: {tv}; movie: {movie})")]
    AllSourcesFailed { tv: SourceError, movie: SourceError },
}

/// What one source contributed to a run
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SourceOutcome {
    Fetched(CalendarBatch),
    Failed(SourceError),
}

impl From<Result<CalendarBatch, SourceError>> for SourceOutcome {
    fn from(result: Result<CalendarBatch, SourceError>) -> Self {
        match result {
            Ok(batch) => SourceOutcome::Fetched(batch),
            Err(e) => SourceOutcome::Failed(e),
        }
    }
}

/// A built feed plus what went wrong on the way
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FeedReport {
    pub feed: Feed,
    /// At most one entry: a run with two failures is an error instead
    pub failures: Vec<SourceError>,
    /// Records dropped during normalization across both sources
    pub skipped: usize,
}

/// Fans out to the TV and movie schedulers and merges their releases.
///
/// Holds no mutable state; every call to [`Aggregator::build`] re-fetches
/// everything, so one instance can serve concurrent requests.
#[derive(Clone)]
pub struct Aggregator {
    tv: Arc<dyn CalendarSource>,
    movie: Arc<dyn CalendarSource>,
}

impl Aggregator {
    pub fn new(tv: Arc<dyn CalendarSource>, movie: Arc<dyn CalendarSource>) -> Self {
        Self { tv, movie }
    }

    /// Sonarr and Radarr clients sharing one HTTP client
    pub fn from_config(config: &Config, client: Client) -> Self {
        Self::new(
            Arc::new(SonarrClient::new(client.clone(), &config.sonarr)),
            Arc::new(RadarrClient::new(client, &config.radarr)),
        )
    }

    /// Build the feed for windows starting today (UTC)
    pub async fn build(&self) -> Result<FeedReport, AggregateError> {
        self.build_from(Utc::now().date_naive()).await
    }

    /// Build the feed for windows starting at `start`.
    ///
    /// Both fetches run concurrently and neither waits on the other's outcome.
    /// Dropping the returned future cancels both in-flight requests.
    pub async fn build_from(&self, start: NaiveDate) -> Result<FeedReport, AggregateError> {
        let started = Instant::now();
        info!(
            operation = "feed_build_start",
            %start,
            tv_days_ahead = self.tv.days_ahead(),
            movie_days_ahead = self.movie.days_ahead(),
            "Building agenda feed"
        );

        let (tv, movie) = futures::join!(
            self.tv.fetch_calendar(start),
            self.movie.fetch_calendar(start)
        );

        let report = Self::combine(outcome(&*self.tv, tv), outcome(&*self.movie, movie))?;

        info!(
            operation = "feed_build_complete",
            groups = report.feed.groups.len(),
            items = report.feed.item_count(),
            skipped = report.skipped,
            failed_sources = report.failures.len(),
            duration_ms = started.elapsed().as_millis() as u64,
            "Agenda feed built"
        );
        Ok(report)
    }

    /// Decide feed-vs-error from the pair of outcomes
    pub fn combine(tv: SourceOutcome, movie: SourceOutcome) -> Result<FeedReport, AggregateError> {
        let (batches, failures) = match (tv, movie) {
            (SourceOutcome::Fetched(tv), SourceOutcome::Fetched(movie)) => (vec![tv, movie], Vec::new()),
            (SourceOutcome::Fetched(batch), SourceOutcome::Failed(e))
            | (SourceOutcome::Failed(e), SourceOutcome::Fetched(batch)) => {
                warn!(
                    operation = "source_failed",
                    upstream = e.upstream(),
                    kind = e.tag(),
                    error = %e,
                    "Upstream failed, serving partial feed"
                );
                (vec![batch], vec![e])
            }
            (SourceOutcome::Failed(tv), SourceOutcome::Failed(movie)) => {
                error!(
                    operation = "all_sources_failed",
                    tv_error = %tv,
                    movie_error = %movie,
                    "Both upstreams failed, no feed produced"
                );
                return Err(AggregateError::AllSourcesFailed { tv, movie });
            }
        };

        let skipped = batches.iter().map(|b| b.skipped).sum();
        let feed = merge_items(batches.into_iter().flat_map(|b| b.items));

        Ok(FeedReport { feed, failures, skipped })
    }
}

fn outcome(source: &dyn CalendarSource, result: Result<CalendarBatch, SourceError>) -> SourceOutcome {
    match &result {
        Ok(batch) => debug!(
            operation = "source_fetched",
            source = %source.kind(),
            items = batch.items.len(),
            skipped = batch.skipped,
            "Calendar fetched"
        ),
        Err(e) => debug!(
            operation = "source_fetch_failed",
            source = %source.kind(),
            kind = e.tag(),
            "Calendar fetch failed"
        ),
    }
    SourceOutcome::from(result)
}
