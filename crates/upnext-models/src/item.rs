use chrono::{DateTime, NaiveDate, Utc};
use serde::{Serialize, Serializer};
use std::fmt;

/// Wire format of `release_datetime`: always UTC, second precision.
pub const RELEASE_DATETIME_FORMAT: &str = "%Y-%m-%dT%H:%M:%SZ";

/// Which upstream scheduler produced an item
#[derive(Debug, Clone, Copy, Serialize, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[serde(rename_all = "lowercase")]
pub enum SourceKind {
    /// Episodes from Sonarr
    Tv,
    /// Movie releases from Radarr
    Movie,
}

impl SourceKind {
    /// Name of the upstream service backing this kind
    pub fn upstream_name(&self) -> &'static str {
        match self {
            SourceKind::Tv => "sonarr",
            SourceKind::Movie => "radarr",
        }
    }
}

impl fmt::Display for SourceKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SourceKind::Tv => write!(f, "tv"),
            SourceKind::Movie => write!(f, "movie"),
        }
    }
}

/// One normalized scheduled release.
///
/// `date` is derived from `release_datetime` (UTC calendar date) when the item
/// is built and cannot be changed afterwards, so the two never disagree.
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct Item {
    title: String,
    details: String,
    #[serde(serialize_with = "serialize_release_datetime")]
    release_datetime: DateTime<Utc>,
    date: NaiveDate,
    has_file: bool,
    source: SourceKind,
}

impl Item {
    pub fn new(
        title: impl Into<String>,
        details: impl Into<String>,
        release_datetime: DateTime<Utc>,
        has_file: bool,
        source: SourceKind,
    ) -> Self {
        Self {
            title: title.into(),
            details: details.into(),
            date: release_datetime.date_naive(),
            release_datetime,
            has_file,
            source,
        }
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn details(&self) -> &str {
        &self.details
    }

    pub fn release_datetime(&self) -> DateTime<Utc> {
        self.release_datetime
    }

    pub fn date(&self) -> NaiveDate {
        self.date
    }

    pub fn has_file(&self) -> bool {
        self.has_file
    }

    pub fn source(&self) -> SourceKind {
        self.source
    }
}

fn serialize_release_datetime<S>(value: &DateTime<Utc>, serializer: S) -> Result<S::Ok, S::Error>
where
    S: Serializer,
{
    serializer.collect_str(&value.format(RELEASE_DATETIME_FORMAT))
}
