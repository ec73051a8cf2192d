//! Seam between the analytics handlers and whatever backs them: the local
//! fixtures plus pure aggregator in preview mode, or the remote
//! pre-aggregated endpoint in live mode. Picked once at startup from
//! configuration; handlers never branch on the mode themselves.

use anyhow::Result;
use async_trait::async_trait;
use contracts::analytics::{SpendPoint, TopItem};
use contracts::vendors::{display_label, Scope};
use once_cell::sync::OnceCell;

use crate::shared::analytics;
use crate::shared::config::{AnalyticsMode, Config};
use crate::shared::data::store;
use crate::shared::remote::AnalyticsApiClient;

#[async_trait]
pub trait AnalyticsSource: Send + Sync {
    async fn top_items(&self, user_id: &str, scope: &Scope, limit: usize)
        -> Result<Vec<TopItem>>;

    async fn spend_over_time(&self, user_id: &str, scope: &Scope) -> Result<Vec<SpendPoint>>;
}

/// Local source: snapshot the loaded datasets and aggregate per call.
pub struct PreviewSource;

#[async_trait]
impl AnalyticsSource for PreviewSource {
    async fn top_items(
        &self,
        _user_id: &str,
        scope: &Scope,
        limit: usize,
    ) -> Result<Vec<TopItem>> {
        let datasets = store::snapshot();
        let mut items = analytics::aggregate_top_items(&datasets, scope, display_label);
        items.truncate(limit);
        Ok(items)
    }

    async fn spend_over_time(&self, _user_id: &str, scope: &Scope) -> Result<Vec<SpendPoint>> {
        let series = store::spend_series_snapshot();
        Ok(analytics::aggregate_spend_series(&series, scope))
    }
}

/// Remote source: forward to the external analytics endpoint.
pub struct RemoteSource {
    client: AnalyticsApiClient,
}

#[async_trait]
impl AnalyticsSource for RemoteSource {
    async fn top_items(&self, user_id: &str, scope: &Scope, limit: usize) -> Result<Vec<TopItem>> {
        self.client.fetch_top_items(user_id, scope, limit).await
    }

    async fn spend_over_time(&self, user_id: &str, scope: &Scope) -> Result<Vec<SpendPoint>> {
        self.client.fetch_spend_over_time(user_id, scope).await
    }
}

static SOURCE: OnceCell<Box<dyn AnalyticsSource>> = OnceCell::new();
static MODE: OnceCell<AnalyticsMode> = OnceCell::new();

/// Build the source selected by configuration. Called once at startup.
pub fn initialize_source(config: &Config) -> Result<()> {
    let source: Box<dyn AnalyticsSource> = match config.analytics.mode {
        AnalyticsMode::Preview => Box::new(PreviewSource),
        AnalyticsMode::Live => {
            let base_url = config.analytics.remote_base_url.as_deref().ok_or_else(|| {
                anyhow::anyhow!("analytics.remote_base_url is required in live mode")
            })?;
            Box::new(RemoteSource {
                client: AnalyticsApiClient::new(base_url)?,
            })
        }
    };

    SOURCE
        .set(source)
        .map_err(|_| anyhow::anyhow!("analytics source already initialized"))?;
    let _ = MODE.set(config.analytics.mode);
    Ok(())
}

pub fn get_source() -> &'static dyn AnalyticsSource {
    SOURCE
        .get()
        .expect("Analytics source not initialized")
        .as_ref()
}

pub fn current_mode() -> AnalyticsMode {
    MODE.get().copied().unwrap_or(AnalyticsMode::Preview)
}

#[cfg(test)]
mod tests {
    use super::*;
    use contracts::analytics::{RawPurchaseRecord, VendorDatasets};

    #[tokio::test]
    async fn test_preview_source_respects_limit() {
        let mut datasets = VendorDatasets::new();
        datasets.insert(
            "amazon",
            (0..5)
                .map(|i| RawPurchaseRecord {
                    clean_item_name: format!("item-{i}"),
                    count: 5 - i,
                    total_spent: 1.0,
                })
                .collect(),
        );
        let _ = store::replace(datasets, Vec::new());

        let items = PreviewSource
            .top_items("user-1", &Scope::All, 2)
            .await
            .unwrap();
        assert_eq!(items.len(), 2);
        assert_eq!(items[0].clean_item_name, "item-0");
    }
}
