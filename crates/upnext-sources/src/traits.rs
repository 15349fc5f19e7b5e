use async_trait::async_trait;
use chrono::NaiveDate;
use upnext_models::{RadarrStats, SonarrStats, SourceKind};
use crate::batch::CalendarBatch;
use crate::error::SourceError;

/// An upstream scheduler that can list releases in a look-ahead window.
#[async_trait]
pub trait CalendarSource: Send + Sync {
    fn kind(&self) -> SourceKind;

    /// Length of the look-ahead window in days
    fn days_ahead(&self) -> u32;

    /// Fetch and normalize releases in `[start, start + days_ahead]`.
    ///
    /// Errors only when the response as a whole is unusable; individual bad
    /// records are skipped and counted in the batch.
    async fn fetch_calendar(&self, start: NaiveDate) -> Result<CalendarBatch, SourceError>;
}

/// Library totals from the TV scheduler
#[async_trait]
pub trait SeriesLibrary: Send + Sync {
    async fn series_stats(&self) -> Result<SonarrStats, SourceError>;
}

/// Library totals from the movie scheduler
#[async_trait]
pub trait MovieLibrary: Send + Sync {
    async fn movie_stats(&self) -> Result<RadarrStats, SourceError>;
}

/// Inclusive end of a look-ahead window, saturating at the calendar's limit
pub fn window_end(start: NaiveDate, days_ahead: u32) -> NaiveDate {
    start
        .checked_add_days(chrono::Days::new(u64::from(days_ahead)))
        .unwrap_or(NaiveDate::MAX)
}
