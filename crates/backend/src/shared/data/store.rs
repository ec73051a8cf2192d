//! Process-global holder of the loaded vendor datasets.
//!
//! Handlers take a snapshot per request and run the pure aggregator over it,
//! so the aggregation itself never reads shared state. Reload replaces the
//! whole snapshot atomically; a request that raced the reload keeps working
//! on the datasets it already took.

use std::sync::RwLock;

use chrono::Utc;
use contracts::analytics::{SpendPoint, VendorDatasets};
use once_cell::sync::OnceCell;

struct StoreInner {
    datasets: VendorDatasets,
    spend_series: Vec<(String, Vec<SpendPoint>)>,
    last_updated: Option<String>,
    last_upload_id: Option<String>,
}

static STORE: OnceCell<RwLock<StoreInner>> = OnceCell::new();

fn store() -> &'static RwLock<StoreInner> {
    STORE.get_or_init(|| {
        RwLock::new(StoreInner {
            datasets: VendorDatasets::new(),
            spend_series: Vec::new(),
            last_updated: None,
            last_upload_id: None,
        })
    })
}

/// Replace the loaded data with a freshly loaded set. Every replacement
/// gets its own upload id, as uploads did in the ingest pipeline.
pub fn replace(datasets: VendorDatasets, spend_series: Vec<(String, Vec<SpendPoint>)>) -> String {
    let upload_id = uuid::Uuid::new_v4().to_string();
    let mut guard = store().write().expect("datasets store poisoned");
    guard.datasets = datasets;
    guard.spend_series = spend_series;
    guard.last_updated = Some(Utc::now().to_rfc3339());
    guard.last_upload_id = Some(upload_id.clone());
    upload_id
}

/// Clone of the current datasets for one aggregation pass.
pub fn snapshot() -> VendorDatasets {
    store().read().expect("datasets store poisoned").datasets.clone()
}

/// Clone of the per-vendor monthly spend series.
pub fn spend_series_snapshot() -> Vec<(String, Vec<SpendPoint>)> {
    store()
        .read()
        .expect("datasets store poisoned")
        .spend_series
        .clone()
}

pub fn last_updated() -> Option<String> {
    store()
        .read()
        .expect("datasets store poisoned")
        .last_updated
        .clone()
}

pub fn last_upload_id() -> Option<String> {
    store()
        .read()
        .expect("datasets store poisoned")
        .last_upload_id
        .clone()
}

pub fn vendor_count() -> usize {
    store().read().expect("datasets store poisoned").datasets.len()
}
