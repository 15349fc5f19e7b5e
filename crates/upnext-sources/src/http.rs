use reqwest::Client;
use serde_json::Value;
use std::time::Duration;
use tracing::debug;
use crate::error::SourceError;

/// Header both schedulers read the API key from
const API_KEY_HEADER: &str = "X-Api-Key";

/// Shared HTTP client; `timeout` bounds every upstream request end to end.
pub fn build_http_client(timeout: Duration) -> reqwest::Result<Client> {
    Client::builder()
        .timeout(timeout)
        .user_agent(concat!("upnext/", env!("CARGO_PKG_VERSION")))
        .build()
}

/// GET `{base_url}{path}` and return the body as a list of raw JSON records.
///
/// The body is read in full before parsing so a mid-body disconnect surfaces as
/// `Unreachable` rather than a partially parsed list.
pub(crate) async fn get_records(
    client: &Client,
    upstream: &'static str,
    base_url: &str,
    path: &str,
    api_key: &str,
    query: &[(&str, String)],
) -> Result<Vec<Value>, SourceError> {
    let url = format!("{}{}", base_url, path);
    debug!(operation = "upstream_request", upstream, url = %url, "Requesting upstream");

    let response = client
        .get(&url)
        .header(API_KEY_HEADER, api_key)
        .header("Accept", "application/json")
        .query(query)
        .send()
        .await
        .map_err(|e| SourceError::from_transport(upstream, &e))?;

    let status = response.status();
    if !status.is_success() {
        return Err(SourceError::Rejected {
            upstream,
            status: status.as_u16(),
        });
    }

    let body = response
        .bytes()
        .await
        .map_err(|e| SourceError::from_transport(upstream, &e))?;

    serde_json::from_slice::<Vec<Value>>(&body).map_err(|e| SourceError::InvalidPayload {
        upstream,
        reason: e.to_string(),
    })
}
