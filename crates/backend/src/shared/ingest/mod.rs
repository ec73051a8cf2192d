//! Cleaning raw vendor CSV exports into purchase records.
//!
//! Mirrors the cleaning pipeline the summaries are built from: trim item
//! names, drop placeholder rows, strip currency formatting from prices, and
//! group occurrences per item.

use std::collections::HashMap;
use std::path::Path;

use chrono::NaiveDate;
use contracts::analytics::{RawPurchaseRecord, SpendPoint};

use crate::shared::data::DataError;

/// Placeholder item names produced by the purchasing systems. Matched
/// case-insensitively after trimming.
const ITEM_NAME_BLACKLIST: &[&str] = &[
    "",
    "nan",
    "none",
    "null",
    "undefined",
    "product",
    "sq hosted product",
    "noncatalog product",
    "punchout product",
    "order summary",
    "shipping",
    "freight",
    "placeholder - do not close",
];

/// Column mapping for one vendor's CSV export.
#[derive(Debug, Clone)]
pub struct VendorCsvSpec {
    pub item_column: &'static str,
    pub price_column: &'static str,
    pub date_column: &'static str,
}

/// Column layout per known vendor. The card program export names its item
/// column differently from the online retailers.
pub fn csv_spec(vendor: &str) -> VendorCsvSpec {
    match vendor {
        "pcard" => VendorCsvSpec {
            item_column: "Item Name",
            price_column: "Subtotal",
            date_column: "Transaction Date",
        },
        _ => VendorCsvSpec {
            item_column: "Item Description",
            price_column: "Subtotal",
            date_column: "Transaction Date",
        },
    }
}

/// Read a vendor CSV and fold it into one record per distinct item name,
/// with `count` = number of rows and `total_spent` = summed price.
pub fn records_from_csv_path(
    path: &Path,
    spec: &VendorCsvSpec,
) -> Result<Vec<RawPurchaseRecord>, DataError> {
    let mut reader = csv::Reader::from_path(path).map_err(|source| DataError::Csv {
        path: path.display().to_string(),
        source,
    })?;
    records_from_reader(&mut reader, spec).map_err(|source| DataError::Csv {
        path: path.display().to_string(),
        source,
    })
}

fn records_from_reader<R: std::io::Read>(
    reader: &mut csv::Reader<R>,
    spec: &VendorCsvSpec,
) -> Result<Vec<RawPurchaseRecord>, csv::Error> {
    let headers = reader.headers()?.clone();
    let item_idx = find_column(&headers, spec.item_column);
    let price_idx = find_column(&headers, spec.price_column);

    let Some(item_idx) = item_idx else {
        tracing::warn!("Item column '{}' not found, skipping file", spec.item_column);
        return Ok(Vec::new());
    };

    let mut records: Vec<RawPurchaseRecord> = Vec::new();
    let mut index: HashMap<String, usize> = HashMap::new();

    for row in reader.records() {
        let row = row?;
        let name = row.get(item_idx).unwrap_or("").trim().to_string();
        if !is_valid_item_name(&name) {
            continue;
        }
        let price = price_idx
            .and_then(|idx| row.get(idx))
            .map(parse_price)
            .unwrap_or(0.0);

        let slot = *index.entry(name.clone()).or_insert_with(|| {
            records.push(RawPurchaseRecord {
                clean_item_name: name.clone(),
                count: 0,
                total_spent: 0.0,
            });
            records.len() - 1
        });
        records[slot].count += 1;
        records[slot].total_spent += price;
    }

    Ok(records)
}

/// Bucket a vendor CSV into a monthly spend series ("YYYY-MM" periods).
pub fn spend_series_from_csv_path(
    path: &Path,
    spec: &VendorCsvSpec,
) -> Result<Vec<SpendPoint>, DataError> {
    let mut reader = csv::Reader::from_path(path).map_err(|source| DataError::Csv {
        path: path.display().to_string(),
        source,
    })?;
    spend_series_from_reader(&mut reader, spec).map_err(|source| DataError::Csv {
        path: path.display().to_string(),
        source,
    })
}

fn spend_series_from_reader<R: std::io::Read>(
    reader: &mut csv::Reader<R>,
    spec: &VendorCsvSpec,
) -> Result<Vec<SpendPoint>, csv::Error> {
    let headers = reader.headers()?.clone();
    let date_idx = find_column(&headers, spec.date_column);
    let price_idx = find_column(&headers, spec.price_column);

    let (Some(date_idx), Some(price_idx)) = (date_idx, price_idx) else {
        return Ok(Vec::new());
    };

    let mut by_period: std::collections::BTreeMap<String, f64> = std::collections::BTreeMap::new();
    for row in reader.records() {
        let row = row?;
        let Some(period) = row.get(date_idx).and_then(parse_period) else {
            continue;
        };
        let spend = row.get(price_idx).map(parse_price).unwrap_or(0.0);
        *by_period.entry(period).or_insert(0.0) += spend;
    }

    Ok(by_period
        .into_iter()
        .map(|(period, spend)| SpendPoint { period, spend })
        .collect())
}

fn find_column(headers: &csv::StringRecord, name: &str) -> Option<usize> {
    headers
        .iter()
        .position(|header| header.trim().eq_ignore_ascii_case(name))
}

/// Single-character names are junk alongside the blacklist entries.
fn is_valid_item_name(name: &str) -> bool {
    name.chars().count() > 1 && !ITEM_NAME_BLACKLIST.contains(&name.to_lowercase().as_str())
}

/// Strip currency formatting ("$1,234.50" -> 1234.5). Non-numeric values
/// contribute zero rather than failing the row.
fn parse_price(raw: &str) -> f64 {
    let cleaned: String = raw
        .trim()
        .chars()
        .filter(|c| *c != '$' && *c != ',')
        .collect();
    cleaned.parse::<f64>().unwrap_or(0.0)
}

/// Accepts the date formats seen across the vendor exports and buckets
/// them into "YYYY-MM".
fn parse_period(raw: &str) -> Option<String> {
    let raw = raw.trim();
    for format in ["%Y-%m-%d", "%m/%d/%Y", "%m/%d/%y"] {
        if let Ok(date) = NaiveDate::parse_from_str(raw, format) {
            return Some(date.format("%Y-%m").to_string());
        }
    }
    None
}

#[cfg(test)]
mod tests {
    use super::*;

    fn reader(data: &str) -> csv::Reader<&[u8]> {
        csv::Reader::from_reader(data.as_bytes())
    }

    #[test]
    fn test_records_group_per_item() {
        let data = "\
Item Description,Subtotal,Transaction Date
Printer Paper,\"$1,200.50\",2024-01-15
USB Drives,$25.00,2024-01-16
Printer Paper,$10.00,2024-02-01
";
        let spec = csv_spec("amazon");
        let records = records_from_reader(&mut reader(data), &spec).unwrap();
        assert_eq!(records.len(), 2);
        assert_eq!(records[0].clean_item_name, "Printer Paper");
        assert_eq!(records[0].count, 2);
        assert_eq!(records[0].total_spent, 1210.5);
        assert_eq!(records[1].count, 1);
    }

    #[test]
    fn test_blacklisted_and_junk_rows_dropped() {
        let data = "\
Item Description,Subtotal,Transaction Date
SQ Hosted Product,$5.00,2024-01-01
X,$5.00,2024-01-01
 ,$5.00,2024-01-01
Notebooks,$5.00,2024-01-01
";
        let spec = csv_spec("amazon");
        let records = records_from_reader(&mut reader(data), &spec).unwrap();
        assert_eq!(records.len(), 1);
        assert_eq!(records[0].clean_item_name, "Notebooks");
    }

    #[test]
    fn test_non_numeric_price_is_zero() {
        let data = "\
Item Name,Subtotal,Transaction Date
Coffee Pods,pending,2024-01-01
";
        let spec = csv_spec("pcard");
        let records = records_from_reader(&mut reader(data), &spec).unwrap();
        assert_eq!(records[0].count, 1);
        assert_eq!(records[0].total_spent, 0.0);
    }

    #[test]
    fn test_missing_item_column_yields_empty() {
        let data = "Wrong Column,Subtotal\nA,1.0\n";
        let spec = csv_spec("amazon");
        let records = records_from_reader(&mut reader(data), &spec).unwrap();
        assert!(records.is_empty());
    }

    #[test]
    fn test_spend_series_buckets_by_month() {
        let data = "\
Item Description,Subtotal,Transaction Date
Paper,$10.00,2024-01-15
Drives,$5.00,01/20/2024
Chairs,$7.50,2024-02-02
Junk,$1.00,not-a-date
";
        let spec = csv_spec("amazon");
        let series = spend_series_from_reader(&mut reader(data), &spec).unwrap();
        assert_eq!(
            series,
            vec![
                SpendPoint {
                    period: "2024-01".to_string(),
                    spend: 15.0,
                },
                SpendPoint {
                    period: "2024-02".to_string(),
                    spend: 7.5,
                },
            ]
        );
    }

    #[test]
    fn test_price_parsing() {
        assert_eq!(parse_price("$1,234.50"), 1234.5);
        assert_eq!(parse_price(" 42 "), 42.0);
        assert_eq!(parse_price("n/a"), 0.0);
    }
}
