use serde::Deserialize;

/// Episode record from `GET /api/v3/calendar?includeSeries=true`.
///
/// Everything is optional here; required-ness is decided during normalization
/// so a missing field skips one record instead of failing the batch.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SonarrEpisode {
    pub series: Option<SonarrSeriesRef>,
    pub season_number: Option<u32>,
    pub episode_number: Option<u32>,
    pub title: Option<String>,
    pub air_date_utc: Option<String>,
    pub has_file: Option<bool>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct SonarrSeriesRef {
    pub title: Option<String>,
}

/// Series record from `GET /api/v3/series`.
///
/// Fields of the wrong type read as missing so the series still counts toward totals.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SonarrSeries {
    #[serde(default, deserialize_with = "crate::de::lenient")]
    pub ended: Option<bool>,
    #[serde(default, deserialize_with = "crate::de::lenient")]
    pub status: Option<String>,
    #[serde(default, deserialize_with = "crate::de::lenient")]
    pub monitored: Option<bool>,
    #[serde(default, deserialize_with = "crate::de::lenient")]
    pub statistics: Option<SonarrSeriesStatistics>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SonarrSeriesStatistics {
    #[serde(default, deserialize_with = "crate::de::lenient")]
    pub total_episode_count: Option<u64>,
    #[serde(default, deserialize_with = "crate::de::lenient")]
    pub episode_file_count: Option<u64>,
    #[serde(default, deserialize_with = "crate::de::lenient")]
    pub size_on_disk: Option<u64>,
}
