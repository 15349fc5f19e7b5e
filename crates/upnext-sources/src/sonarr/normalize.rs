use serde_json::Value;
use upnext_models::{Item, SourceKind};
use crate::error::SkipReason;
use crate::sonarr::models::SonarrEpisode;
use crate::timestamp::parse_release_timestamp;

/// Map a raw calendar record to an [`Item`]
pub fn normalize_value(value: Value) -> Result<Item, SkipReason> {
    let episode: SonarrEpisode =
        serde_json::from_value(value).map_err(|e| SkipReason::Malformed(e.to_string()))?;
    normalize_episode(&episode)
}

/// Series title becomes the item title; `SxxEyy - Episode Title` the details.
pub fn normalize_episode(episode: &SonarrEpisode) -> Result<Item, SkipReason> {
    let title = episode
        .series
        .as_ref()
        .and_then(|s| s.title.as_deref())
        .map(str::trim)
        .filter(|t| !t.is_empty())
        .ok_or(SkipReason::MissingField("series.title"))?;

    let raw_air_date = episode
        .air_date_utc
        .as_deref()
        .ok_or(SkipReason::MissingField("airDateUtc"))?;
    let release = parse_release_timestamp(raw_air_date).ok_or_else(|| SkipReason::InvalidTimestamp {
        field: "airDateUtc",
        value: raw_air_date.to_string(),
    })?;

    Ok(Item::new(
        title,
        episode_details(episode),
        release,
        episode.has_file.unwrap_or(false),
        SourceKind::Tv,
    ))
}

fn episode_details(episode: &SonarrEpisode) -> String {
    let label = match (episode.season_number, episode.episode_number) {
        (Some(season), Some(number)) => Some(format!("S{:02}E{:02}", season, number)),
        _ => None,
    };
    let name = episode
        .title
        .as_deref()
        .map(str::trim)
        .filter(|t| !t.is_empty());

    match (label, name) {
        (Some(label), Some(name)) => format!("{} - {}", label, name),
        (Some(label), None) => label,
        (None, Some(name)) => name.to_string(),
        (None, None) => String::new(),
    }
}
