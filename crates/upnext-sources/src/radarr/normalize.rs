use chrono::{DateTime, NaiveDate, Utc};
use serde_json::Value;
use upnext_models::{Item, SourceKind};
use crate::error::SkipReason;
use crate::radarr::models::RadarrMovie;
use crate::timestamp::parse_release_timestamp;

/// Release types, most preferred first
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReleaseType {
    Digital,
    Physical,
    InCinemas,
}

impl ReleaseType {
    pub fn label(&self) -> &'static str {
        match self {
            ReleaseType::Digital => "Digital",
            ReleaseType::Physical => "Physical",
            ReleaseType::InCinemas => "In Cinemas",
        }
    }

    fn field(&self) -> &'static str {
        match self {
            ReleaseType::Digital => "digitalRelease",
            ReleaseType::Physical => "physicalRelease",
            ReleaseType::InCinemas => "inCinemas",
        }
    }
}

/// Map a raw calendar record to an [`Item`]
pub fn normalize_value(value: Value, window_start: NaiveDate) -> Result<Item, SkipReason> {
    let movie: RadarrMovie =
        serde_json::from_value(value).map_err(|e| SkipReason::Malformed(e.to_string()))?;
    normalize_movie(&movie, window_start)
}

/// Pick the first release, in Digital, Physical, In Cinemas order, that is on or
/// after `window_start`; its type becomes the details.
///
/// Radarr lists a movie when any of its release dates falls inside the window,
/// so the other dates can be long past or far beyond it. A later digital date
/// wins over an earlier cinema date because that is when the file can be grabbed.
pub fn normalize_movie(movie: &RadarrMovie, window_start: NaiveDate) -> Result<Item, SkipReason> {
    let title = movie
        .title
        .as_deref()
        .map(str::trim)
        .filter(|t| !t.is_empty())
        .ok_or(SkipReason::MissingField("title"))?;

    let candidates = [
        (ReleaseType::Digital, movie.digital_release.as_deref()),
        (ReleaseType::Physical, movie.physical_release.as_deref()),
        (ReleaseType::InCinemas, movie.in_cinemas.as_deref()),
    ];

    let mut parsed: Vec<(DateTime<Utc>, ReleaseType)> = Vec::new();
    let mut first_invalid: Option<SkipReason> = None;
    for (release_type, raw) in candidates {
        let Some(raw) = raw else { continue };
        match parse_release_timestamp(raw) {
            Some(at) => parsed.push((at, release_type)),
            None => {
                first_invalid.get_or_insert(SkipReason::InvalidTimestamp {
                    field: release_type.field(),
                    value: raw.to_string(),
                });
            }
        }
    }

    if parsed.is_empty() {
        return Err(first_invalid.unwrap_or(SkipReason::MissingField("release date")));
    }

    let latest = parsed.iter().map(|(at, _)| *at).max();
    let (release, release_type) = parsed
        .into_iter()
        .find(|(at, _)| at.date_naive() >= window_start)
        .ok_or_else(|| SkipReason::BeforeWindow {
            release: latest.map(|at| at.date_naive()).unwrap_or(window_start),
            window_start,
        })?;

    Ok(Item::new(
        title,
        release_type.label(),
        release,
        movie.has_file.unwrap_or(false),
        SourceKind::Movie,
    ))
}
