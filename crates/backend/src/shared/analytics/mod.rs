//! Pure aggregation over raw vendor purchase data.
//!
//! Both operations here share the same fold-and-merge shape: group by a key,
//! sum the numeric fields, order by a defined comparator. They are stateless
//! and recomputed on every call; callers own any caching or sequencing.

use std::collections::{BTreeMap, HashMap};

use contracts::analytics::{SpendPoint, TopItem, VendorDatasets, VendorTotals};
use contracts::vendors::Scope;

/// Merge the scoped vendor datasets into a ranked list of distinct items.
///
/// For each record the accumulator keyed by `clean_item_name` receives the
/// record's count and spend; the vendor's display label (produced by `label`)
/// is appended once, in first-seen order. The result is sorted descending by
/// count; ties keep encounter order (the sort is stable).
///
/// An unknown scope key selects nothing and yields an empty list.
pub fn aggregate_top_items<F>(datasets: &VendorDatasets, scope: &Scope, label: F) -> Vec<TopItem>
where
    F: Fn(&str) -> String,
{
    let mut items: Vec<TopItem> = Vec::new();
    let mut index: HashMap<String, usize> = HashMap::new();

    for (vendor, records) in datasets.iter() {
        if !scope.includes(vendor) {
            continue;
        }
        let vendor_label = label(vendor);
        for record in records {
            let slot = *index
                .entry(record.clean_item_name.clone())
                .or_insert_with(|| {
                    items.push(TopItem {
                        clean_item_name: record.clean_item_name.clone(),
                        count: 0,
                        total_spent: 0.0,
                        vendors: Vec::new(),
                    });
                    items.len() - 1
                });
            let item = &mut items[slot];
            item.count += record.count;
            item.total_spent += record.total_spent;
            if !item.vendors.contains(&vendor_label) {
                item.vendors.push(vendor_label.clone());
            }
        }
    }

    // Stable sort: equal counts stay in first-seen order.
    items.sort_by(|a, b| b.count.cmp(&a.count));
    items
}

/// Merge per-vendor spend series by summing same-period contributions.
/// Output is ascending by period, which is chronological for "YYYY-MM" keys.
pub fn aggregate_spend_series(
    series: &[(String, Vec<SpendPoint>)],
    scope: &Scope,
) -> Vec<SpendPoint> {
    let mut by_period: BTreeMap<String, f64> = BTreeMap::new();

    for (vendor, points) in series {
        if !scope.includes(vendor) {
            continue;
        }
        for point in points {
            *by_period.entry(point.period.clone()).or_insert(0.0) += point.spend;
        }
    }

    by_period
        .into_iter()
        .map(|(period, spend)| SpendPoint { period, spend })
        .collect()
}

/// Per-vendor grand totals across all records, in dataset order.
pub fn vendor_totals(datasets: &VendorDatasets) -> Vec<VendorTotals> {
    datasets
        .iter()
        .map(|(vendor, records)| VendorTotals {
            vendor: vendor.to_string(),
            count: records.iter().map(|r| r.count).sum(),
            total_spent: records.iter().map(|r| r.total_spent).sum(),
        })
        .collect()
}

/// Sum of record counts in the scoped datasets. Used by tests and the status
/// endpoint to check the conservation property cheaply.
pub fn total_count(datasets: &VendorDatasets, scope: &Scope) -> u64 {
    datasets
        .iter()
        .filter(|(vendor, _)| scope.includes(vendor))
        .flat_map(|(_, records)| records.iter())
        .map(|r| r.count)
        .sum()
}

#[cfg(test)]
mod tests {
    use super::*;
    use contracts::analytics::RawPurchaseRecord;
    use contracts::vendors::display_label;

    fn record(name: &str, count: u64, total_spent: f64) -> RawPurchaseRecord {
        RawPurchaseRecord {
            clean_item_name: name.to_string(),
            count,
            total_spent,
        }
    }

    fn two_vendor_fixture() -> VendorDatasets {
        let mut datasets = VendorDatasets::new();
        datasets.insert("a", vec![record("X", 2, 10.0)]);
        datasets.insert("b", vec![record("X", 3, 5.0)]);
        datasets
    }

    #[test]
    fn test_merge_across_vendors() {
        let items = aggregate_top_items(&two_vendor_fixture(), &Scope::All, display_label);
        assert_eq!(items.len(), 1);
        assert_eq!(items[0].clean_item_name, "X");
        assert_eq!(items[0].count, 5);
        assert_eq!(items[0].total_spent, 15.0);
        assert_eq!(items[0].vendors, vec!["A", "B"]);
    }

    #[test]
    fn test_single_vendor_scope() {
        let scope = Scope::Vendor("a".to_string());
        let items = aggregate_top_items(&two_vendor_fixture(), &scope, display_label);
        assert_eq!(items.len(), 1);
        assert_eq!(items[0].count, 2);
        assert_eq!(items[0].total_spent, 10.0);
        assert_eq!(items[0].vendors, vec!["A"]);
    }

    #[test]
    fn test_unknown_scope_yields_empty() {
        let scope = Scope::Vendor("walmart".to_string());
        let items = aggregate_top_items(&two_vendor_fixture(), &scope, display_label);
        assert!(items.is_empty());
    }

    #[test]
    fn test_empty_datasets() {
        let items = aggregate_top_items(&VendorDatasets::new(), &Scope::All, display_label);
        assert!(items.is_empty());
    }

    #[test]
    fn test_count_conservation() {
        let mut datasets = VendorDatasets::new();
        datasets.insert(
            "amazon",
            vec![record("A", 7, 1.0), record("B", 3, 2.0), record("A", 1, 0.5)],
        );
        datasets.insert("pcard", vec![record("B", 4, 8.0), record("C", 2, 3.0)]);

        let items = aggregate_top_items(&datasets, &Scope::All, display_label);
        let output_sum: u64 = items.iter().map(|i| i.count).sum();
        assert_eq!(output_sum, total_count(&datasets, &Scope::All));
        assert_eq!(output_sum, 17);
    }

    #[test]
    fn test_names_are_distinct() {
        let mut datasets = VendorDatasets::new();
        datasets.insert("amazon", vec![record("A", 1, 1.0), record("A", 2, 2.0)]);
        datasets.insert("pcard", vec![record("A", 3, 3.0), record("B", 1, 1.0)]);

        let items = aggregate_top_items(&datasets, &Scope::All, display_label);
        let mut names: Vec<&str> = items.iter().map(|i| i.clean_item_name.as_str()).collect();
        names.sort();
        names.dedup();
        assert_eq!(names.len(), items.len());
    }

    #[test]
    fn test_vendor_labels_not_duplicated() {
        let mut datasets = VendorDatasets::new();
        datasets.insert("amazon", vec![record("A", 1, 1.0), record("A", 2, 2.0)]);

        let items = aggregate_top_items(&datasets, &Scope::All, display_label);
        assert_eq!(items[0].vendors, vec!["Amazon"]);
    }

    #[test]
    fn test_ties_keep_encounter_order() {
        let mut datasets = VendorDatasets::new();
        datasets.insert(
            "amazon",
            vec![
                record("three", 3, 0.0),
                record("five-first", 5, 0.0),
                record("five-second", 5, 0.0),
                record("one", 1, 0.0),
            ],
        );

        let items = aggregate_top_items(&datasets, &Scope::All, display_label);
        let names: Vec<&str> = items.iter().map(|i| i.clean_item_name.as_str()).collect();
        assert_eq!(names, vec!["five-first", "five-second", "three", "one"]);
    }

    #[test]
    fn test_idempotence() {
        let datasets = two_vendor_fixture();
        let first = aggregate_top_items(&datasets, &Scope::All, display_label);
        let second = aggregate_top_items(&datasets, &Scope::All, display_label);
        assert_eq!(first, second);
    }

    #[test]
    fn test_injected_label_function() {
        let items = aggregate_top_items(&two_vendor_fixture(), &Scope::All, |key| {
            key.to_uppercase()
        });
        assert_eq!(items[0].vendors, vec!["A", "B"]);

        let items = aggregate_top_items(&two_vendor_fixture(), &Scope::All, |key| {
            format!("vendor:{key}")
        });
        assert_eq!(items[0].vendors, vec!["vendor:a", "vendor:b"]);
    }

    fn point(period: &str, spend: f64) -> SpendPoint {
        SpendPoint {
            period: period.to_string(),
            spend,
        }
    }

    #[test]
    fn test_spend_series_merges_periods() {
        let series = vec![
            (
                "amazon".to_string(),
                vec![point("2024-02", 100.0), point("2024-01", 50.0)],
            ),
            (
                "pcard".to_string(),
                vec![point("2024-01", 25.0), point("2024-03", 10.0)],
            ),
        ];

        let merged = aggregate_spend_series(&series, &Scope::All);
        assert_eq!(
            merged,
            vec![
                point("2024-01", 75.0),
                point("2024-02", 100.0),
                point("2024-03", 10.0),
            ]
        );
    }

    #[test]
    fn test_spend_series_scoped() {
        let series = vec![
            ("amazon".to_string(), vec![point("2024-01", 50.0)]),
            ("pcard".to_string(), vec![point("2024-01", 25.0)]),
        ];

        let merged = aggregate_spend_series(&series, &Scope::Vendor("pcard".to_string()));
        assert_eq!(merged, vec![point("2024-01", 25.0)]);
    }

    #[test]
    fn test_vendor_totals() {
        let mut datasets = VendorDatasets::new();
        datasets.insert("amazon", vec![record("A", 2, 4.0), record("B", 3, 6.0)]);
        datasets.insert("pcard", vec![]);

        let totals = vendor_totals(&datasets);
        assert_eq!(
            totals,
            vec![
                VendorTotals {
                    vendor: "amazon".to_string(),
                    count: 5,
                    total_spent: 10.0,
                },
                VendorTotals {
                    vendor: "pcard".to_string(),
                    count: 0,
                    total_spent: 0.0,
                },
            ]
        );
    }
}
