use axum::{extract::Query, Json};
use contracts::dashboard::{DashboardData, VendorSummary};
use contracts::vendors::Scope;
use serde::Deserialize;

use crate::shared::preview;

#[derive(Deserialize)]
pub struct PreviewParams {
    /// "Overall" or a vendor key. Defaults to the overall tab.
    pub tab: Option<String>,
    pub year: Option<i32>,
}

/// GET /api/dashboard/preview
pub async fn preview(Query(params): Query<PreviewParams>) -> Json<DashboardData> {
    let tab = match params.tab.as_deref() {
        None => Scope::All,
        Some(tab) if tab.eq_ignore_ascii_case("overall") => Scope::All,
        Some(tab) => Scope::from(tab.to_string()),
    };
    let year = params.year.unwrap_or(2024);

    let mut rng = rand::thread_rng();
    Json(preview::generate_dashboard_data(&mut rng, &tab, year))
}

/// GET /api/dashboard/vendor-summary
pub async fn vendor_summary() -> Json<VendorSummary> {
    Json(preview::generate_vendor_summary())
}
