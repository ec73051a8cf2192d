//! HTTP client for the external analytics endpoint.
//!
//! The remote service returns data already aggregated to the same shape the
//! local aggregator produces, wrapped in a `{ "data": [...] }` envelope.

use anyhow::Result;
use contracts::analytics::{SpendPoint, SpendSeriesResponse, TopItem, TopItemsResponse};
use contracts::vendors::Scope;
use serde::Serialize;

pub struct AnalyticsApiClient {
    client: reqwest::Client,
    base_url: String,
}

#[derive(Serialize)]
struct TopItemsQuery<'a> {
    user_id: &'a str,
    #[serde(skip_serializing_if = "Option::is_none")]
    vendor: Option<&'a str>,
    limit: usize,
}

#[derive(Serialize)]
struct SpendQuery<'a> {
    user_id: &'a str,
    #[serde(skip_serializing_if = "Option::is_none")]
    vendor: Option<&'a str>,
}

fn vendor_param(scope: &Scope) -> Option<&str> {
    match scope {
        Scope::All => None,
        Scope::Vendor(key) => Some(key.as_str()),
    }
}

impl AnalyticsApiClient {
    pub fn new(base_url: impl Into<String>) -> Result<Self> {
        let client = reqwest::Client::builder()
            .timeout(std::time::Duration::from_secs(30))
            .build()?;
        Ok(Self {
            client,
            base_url: base_url.into(),
        })
    }

    /// GET {base}/analytics/top-items?user_id=..&vendor=..&limit=..
    pub async fn fetch_top_items(
        &self,
        user_id: &str,
        scope: &Scope,
        limit: usize,
    ) -> Result<Vec<TopItem>> {
        let url = format!("{}/analytics/top-items", self.base_url);
        let query = TopItemsQuery {
            user_id,
            vendor: vendor_param(scope),
            limit,
        };

        let response = self.client.get(&url).query(&query).send().await?;
        let status = response.status();
        if !status.is_success() {
            anyhow::bail!("analytics endpoint returned HTTP {status} for {url}");
        }

        let body: TopItemsResponse = response.json().await?;
        Ok(body.data)
    }

    /// GET {base}/analytics/spend-over-time?user_id=..&vendor=..
    pub async fn fetch_spend_over_time(
        &self,
        user_id: &str,
        scope: &Scope,
    ) -> Result<Vec<SpendPoint>> {
        let url = format!("{}/analytics/spend-over-time", self.base_url);
        let query = SpendQuery {
            user_id,
            vendor: vendor_param(scope),
        };

        let response = self.client.get(&url).query(&query).send().await?;
        let status = response.status();
        if !status.is_success() {
            anyhow::bail!("analytics endpoint returned HTTP {status} for {url}");
        }

        let body: SpendSeriesResponse = response.json().await?;
        Ok(body.data)
    }
}
