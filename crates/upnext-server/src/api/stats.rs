use axum::extract::State;
use axum::Json;
use upnext_models::LibraryStats;
use crate::api::state::AppState;

/// Always 200; per-source failures are reported in the `error` field
pub async fn get_stats(State(state): State<AppState>) -> Json<LibraryStats> {
    Json(state.stats.collect().await)
}
