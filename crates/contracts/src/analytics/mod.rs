use serde::de::{Deserializer, MapAccess, Visitor};
use serde::ser::SerializeMap;
use serde::{Deserialize, Serialize, Serializer};

/// One raw purchase line from a vendor dataset.
///
/// Numeric fields are lenient on the wire: absent or non-numeric values
/// deserialize as zero instead of failing the whole dataset.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RawPurchaseRecord {
    #[serde(default)]
    pub clean_item_name: String,
    #[serde(default, deserialize_with = "count_or_zero")]
    pub count: u64,
    #[serde(default, deserialize_with = "amount_or_zero")]
    pub total_spent: f64,
}

fn count_or_zero<'de, D>(deserializer: D) -> Result<u64, D::Error>
where
    D: Deserializer<'de>,
{
    let value = serde_json::Value::deserialize(deserializer)?;
    Ok(value
        .as_u64()
        .or_else(|| value.as_f64().filter(|f| *f >= 0.0).map(|f| f as u64))
        .unwrap_or(0))
}

fn amount_or_zero<'de, D>(deserializer: D) -> Result<f64, D::Error>
where
    D: Deserializer<'de>,
{
    let value = serde_json::Value::deserialize(deserializer)?;
    Ok(value.as_f64().unwrap_or(0.0))
}

/// Ordered mapping vendor key -> raw purchase records.
///
/// Deserialized from a JSON object. Document order is preserved because it
/// defines encounter order for tie-breaking downstream. A vendor entry whose
/// value is not an array is skipped; array elements that are not objects are
/// skipped as well.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct VendorDatasets(pub Vec<(String, Vec<RawPurchaseRecord>)>);

impl VendorDatasets {
    pub fn new() -> Self {
        Self(Vec::new())
    }

    pub fn insert(&mut self, vendor: impl Into<String>, records: Vec<RawPurchaseRecord>) {
        self.0.push((vendor.into(), records));
    }

    pub fn get(&self, vendor: &str) -> Option<&[RawPurchaseRecord]> {
        self.0
            .iter()
            .find(|(key, _)| key == vendor)
            .map(|(_, records)| records.as_slice())
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &[RawPurchaseRecord])> {
        self.0
            .iter()
            .map(|(key, records)| (key.as_str(), records.as_slice()))
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl Serialize for VendorDatasets {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        let mut map = serializer.serialize_map(Some(self.0.len()))?;
        for (vendor, records) in &self.0 {
            map.serialize_entry(vendor, records)?;
        }
        map.end()
    }
}

impl<'de> Deserialize<'de> for VendorDatasets {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        struct DatasetsVisitor;

        impl<'de> Visitor<'de> for DatasetsVisitor {
            type Value = VendorDatasets;

            fn expecting(&self, formatter: &mut std::fmt::Formatter) -> std::fmt::Result {
                formatter.write_str("a map of vendor key to record array")
            }

            fn visit_map<A>(self, mut access: A) -> Result<Self::Value, A::Error>
            where
                A: MapAccess<'de>,
            {
                let mut datasets = VendorDatasets::new();
                while let Some((vendor, value)) =
                    access.next_entry::<String, serde_json::Value>()?
                {
                    let serde_json::Value::Array(entries) = value else {
                        // Malformed vendor entry: skip, do not fail the load.
                        continue;
                    };
                    let records = entries
                        .into_iter()
                        .filter_map(|entry| {
                            serde_json::from_value::<RawPurchaseRecord>(entry).ok()
                        })
                        .collect();
                    datasets.insert(vendor, records);
                }
                Ok(datasets)
            }
        }

        deserializer.deserialize_map(DatasetsVisitor)
    }
}

/// Aggregated purchase item: merged across vendor datasets by name.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TopItem {
    pub clean_item_name: String,
    pub count: u64,
    pub total_spent: f64,
    /// Vendor display labels in first-seen order, no duplicates.
    pub vendors: Vec<String>,
}

/// One point of a time-bucketed spend series (period is "YYYY-MM").
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SpendPoint {
    pub period: String,
    #[serde(default, deserialize_with = "amount_or_zero")]
    pub spend: f64,
}

/// Wire envelope of the analytics endpoints: `{ "data": [...] }`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TopItemsResponse {
    pub data: Vec<TopItem>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SpendSeriesResponse {
    pub data: Vec<SpendPoint>,
}

/// Per-vendor totals for the vendor summary endpoint.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct VendorTotals {
    pub vendor: String,
    pub count: u64,
    pub total_spent: f64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct VendorTotalsResponse {
    pub data: Vec<VendorTotals>,
}

/// Row counts reported by the refresh endpoint, one entry per vendor.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct VendorRowCount {
    pub vendor: String,
    pub rows: usize,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RefreshResponse {
    pub status: String,
    pub upload_id: String,
    pub result: Vec<VendorRowCount>,
}

/// Service status payload for `GET /status`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StatusResponse {
    pub mode: String,
    pub vendor_count: usize,
    pub last_updated: Option<String>,
    pub last_upload_id: Option<String>,
    pub message: String,
}
