//! Loading vendor datasets from the fixtures directory.
//!
//! Two layouts are accepted:
//! - a combined `datasets.json` object mapping vendor key -> record array;
//! - per-vendor files, `<vendor>.json` (record array) or `<vendor>.csv`
//!   (raw export, cleaned by the ingest module), for each known vendor.
//!
//! A missing directory or vendor file yields an empty dataset for that
//! vendor, never an error; the dashboard then simply has nothing to show.

use std::path::Path;

use contracts::analytics::{RawPurchaseRecord, SpendPoint, VendorDatasets};
use contracts::vendors::KNOWN_VENDORS;

use super::DataError;
use crate::shared::ingest;

pub fn load_datasets(dir: &Path) -> Result<VendorDatasets, DataError> {
    if !dir.is_dir() {
        tracing::warn!("Fixtures directory not found: {}", dir.display());
        return Ok(VendorDatasets::new());
    }

    let combined = dir.join("datasets.json");
    if combined.is_file() {
        let contents = std::fs::read_to_string(&combined)?;
        let datasets =
            serde_json::from_str(&contents).map_err(|source| DataError::InvalidFixture {
                path: combined.display().to_string(),
                source,
            })?;
        return Ok(datasets);
    }

    let mut datasets = VendorDatasets::new();
    for vendor in KNOWN_VENDORS {
        let json_path = dir.join(format!("{vendor}.json"));
        let csv_path = dir.join(format!("{vendor}.csv"));

        if json_path.is_file() {
            datasets.insert(*vendor, load_record_array(&json_path)?);
        } else if csv_path.is_file() {
            let spec = ingest::csv_spec(vendor);
            datasets.insert(*vendor, ingest::records_from_csv_path(&csv_path, &spec)?);
        } else {
            tracing::debug!("No fixture for vendor '{vendor}' in {}", dir.display());
            datasets.insert(*vendor, Vec::new());
        }
    }
    Ok(datasets)
}

/// Load the per-vendor monthly spend series. Only CSV exports carry
/// transaction dates, so vendors without a CSV fixture contribute nothing.
pub fn load_spend_series(dir: &Path) -> Result<Vec<(String, Vec<SpendPoint>)>, DataError> {
    let mut series = Vec::new();
    if !dir.is_dir() {
        return Ok(series);
    }

    for vendor in KNOWN_VENDORS {
        let csv_path = dir.join(format!("{vendor}.csv"));
        if csv_path.is_file() {
            let spec = ingest::csv_spec(vendor);
            series.push((
                vendor.to_string(),
                ingest::spend_series_from_csv_path(&csv_path, &spec)?,
            ));
        }
    }
    Ok(series)
}

/// Parse a per-vendor JSON fixture. Anything that is not an array counts as
/// malformed and yields an empty record list; non-object elements are
/// skipped.
fn load_record_array(path: &Path) -> Result<Vec<RawPurchaseRecord>, DataError> {
    let contents = std::fs::read_to_string(path)?;
    let value: serde_json::Value =
        serde_json::from_str(&contents).map_err(|source| DataError::InvalidFixture {
            path: path.display().to_string(),
            source,
        })?;

    let serde_json::Value::Array(entries) = value else {
        tracing::warn!("Fixture {} is not an array, skipping", path.display());
        return Ok(Vec::new());
    };

    Ok(entries
        .into_iter()
        .filter_map(|entry| serde_json::from_value(entry).ok())
        .collect())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn temp_dir(name: &str) -> std::path::PathBuf {
        let dir = std::env::temp_dir().join(format!("fixture-tests-{name}-{}", std::process::id()));
        let _ = std::fs::remove_dir_all(&dir);
        std::fs::create_dir_all(&dir).unwrap();
        dir
    }

    #[test]
    fn test_missing_directory_is_empty() {
        let dir = std::env::temp_dir().join("fixture-tests-does-not-exist");
        let datasets = load_datasets(&dir).unwrap();
        assert!(datasets.is_empty());
    }

    #[test]
    fn test_combined_fixture() {
        let dir = temp_dir("combined");
        std::fs::write(
            dir.join("datasets.json"),
            r#"{"amazon": [{"clean_item_name": "Paper", "count": 2, "total_spent": 8.0}], "pcard": []}"#,
        )
        .unwrap();

        let datasets = load_datasets(&dir).unwrap();
        assert_eq!(datasets.len(), 2);
        assert_eq!(datasets.get("amazon").unwrap().len(), 1);
    }

    #[test]
    fn test_per_vendor_json_fixture() {
        let dir = temp_dir("per-vendor");
        std::fs::write(
            dir.join("amazon.json"),
            r#"[{"clean_item_name": "Paper", "count": 2, "total_spent": 8.0}]"#,
        )
        .unwrap();

        let datasets = load_datasets(&dir).unwrap();
        assert_eq!(datasets.get("amazon").unwrap().len(), 1);
        // Vendors without files are present but empty.
        assert_eq!(datasets.get("pcard").unwrap().len(), 0);
    }

    #[test]
    fn test_non_array_vendor_fixture_is_skipped() {
        let dir = temp_dir("non-array");
        std::fs::write(dir.join("amazon.json"), r#"{"rows": 3}"#).unwrap();

        let datasets = load_datasets(&dir).unwrap();
        assert_eq!(datasets.get("amazon").unwrap().len(), 0);
    }
}
