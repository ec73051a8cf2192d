use axum::{extract::Query, http::StatusCode, Extension, Json};
use contracts::analytics::{
    RefreshResponse, SpendSeriesResponse, TopItemsResponse, VendorRowCount, VendorTotalsResponse,
};
use contracts::system::auth::TokenClaims;
use contracts::vendors::Scope;
use serde::Deserialize;

use crate::shared::analytics::vendor_totals;
use crate::shared::config;
use crate::shared::data::{fixture, store};
use crate::shared::source;

const DEFAULT_LIMIT: usize = 20;

#[derive(Deserialize)]
pub struct TopItemsParams {
    pub vendor: Option<String>,
    pub limit: Option<usize>,
}

fn scope_from(vendor: Option<String>) -> Scope {
    vendor.map(Scope::from).unwrap_or(Scope::All)
}

/// GET /api/analytics/top-items
pub async fn top_items(
    Extension(claims): Extension<TokenClaims>,
    Query(params): Query<TopItemsParams>,
) -> Result<Json<TopItemsResponse>, StatusCode> {
    let scope = scope_from(params.vendor);
    let limit = params.limit.unwrap_or(DEFAULT_LIMIT);

    match source::get_source()
        .top_items(&claims.sub, &scope, limit)
        .await
    {
        Ok(data) => Ok(Json(TopItemsResponse { data })),
        Err(e) => {
            tracing::error!("Failed to compute top items: {}", e);
            Err(StatusCode::INTERNAL_SERVER_ERROR)
        }
    }
}

#[derive(Deserialize)]
pub struct SpendParams {
    pub vendor: Option<String>,
}

/// GET /api/analytics/spend-over-time
pub async fn spend_over_time(
    Extension(claims): Extension<TokenClaims>,
    Query(params): Query<SpendParams>,
) -> Result<Json<SpendSeriesResponse>, StatusCode> {
    let scope = scope_from(params.vendor);

    match source::get_source()
        .spend_over_time(&claims.sub, &scope)
        .await
    {
        Ok(data) => Ok(Json(SpendSeriesResponse { data })),
        Err(e) => {
            tracing::error!("Failed to compute spend series: {}", e);
            Err(StatusCode::INTERNAL_SERVER_ERROR)
        }
    }
}

/// GET /api/analytics/vendors
pub async fn vendors() -> Json<VendorTotalsResponse> {
    let datasets = store::snapshot();
    Json(VendorTotalsResponse {
        data: vendor_totals(&datasets),
    })
}

/// POST /refresh
///
/// Reload the vendor fixtures from disk and report per-vendor row counts
/// so the dashboard can show what the reload picked up.
pub async fn refresh() -> Result<Json<RefreshResponse>, StatusCode> {
    let reload = || -> anyhow::Result<RefreshResponse> {
        let config = config::load_config()?;
        let dir = config::get_fixtures_dir(&config)?;
        let datasets = fixture::load_datasets(&dir)?;
        let series = fixture::load_spend_series(&dir)?;

        let result = datasets
            .iter()
            .map(|(vendor, records)| VendorRowCount {
                vendor: vendor.to_string(),
                rows: records.len(),
            })
            .collect();

        let upload_id = store::replace(datasets, series);
        Ok(RefreshResponse {
            status: "ok".to_string(),
            upload_id,
            result,
        })
    };

    match reload() {
        Ok(response) => {
            tracing::info!("Fixtures reloaded");
            Ok(Json(response))
        }
        Err(e) => {
            tracing::error!("Refresh failed: {}", e);
            Err(StatusCode::INTERNAL_SERVER_ERROR)
        }
    }
}
