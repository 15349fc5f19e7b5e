use axum::extract::State;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde_json::json;
use tracing::error;
use crate::api::state::AppState;

/// Build the feed fresh for this request.
///
/// Total upstream failure is a 502 with an error body, never an empty 200,
/// so the widget can tell "nothing scheduled" from "aggregation broken".
pub async fn get_agenda(State(state): State<AppState>) -> Response {
    match state.aggregator.build().await {
        Ok(report) => Json(report.feed).into_response(),
        Err(e) => {
            error!(operation = "agenda_request_failed", error = %e, "Serving agenda error response");
            (StatusCode::BAD_GATEWAY, Json(json!({ "error": e.to_string() }))).into_response()
        }
    }
}
