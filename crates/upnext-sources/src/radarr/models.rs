use serde::Deserialize;

/// Movie record from `GET /api/v3/calendar` and `GET /api/v3/movie`; the
/// release dates are split across one field per release type.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RadarrMovie {
    pub title: Option<String>,
    pub in_cinemas: Option<String>,
    pub digital_release: Option<String>,
    pub physical_release: Option<String>,
    #[serde(default, deserialize_with = "crate::de::lenient")]
    pub has_file: Option<bool>,
    #[serde(default, deserialize_with = "crate::de::lenient")]
    pub monitored: Option<bool>,
    #[serde(default, deserialize_with = "crate::de::lenient")]
    pub size_on_disk: Option<u64>,
}
