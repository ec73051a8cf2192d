use axum::Json;
use contracts::analytics::StatusResponse;

use crate::shared::config::AnalyticsMode;
use crate::shared::data::store;
use crate::shared::source;

/// GET /status
pub async fn status() -> Json<StatusResponse> {
    let mode = match source::current_mode() {
        AnalyticsMode::Preview => "preview",
        AnalyticsMode::Live => "live",
    };

    Json(StatusResponse {
        mode: mode.to_string(),
        vendor_count: store::vendor_count(),
        last_updated: store::last_updated(),
        last_upload_id: store::last_upload_id(),
        message: "Backend is up".to_string(),
    })
}
