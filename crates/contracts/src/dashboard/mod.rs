use serde::{Deserialize, Serialize};

/// Spending for one calendar month of the preview trend.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MonthlyPoint {
    pub month: String,
    pub amount: u64,
}

/// Transaction volume for one calendar month.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TransactionPoint {
    pub month: String,
    pub transactions: u64,
}

/// One slice of the category breakdown pie.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CategorySlice {
    pub name: String,
    pub value: u64,
}

/// One bar of the vendor comparison chart. On the "Overall" tab the name is
/// a vendor; on a vendor tab it is a quarter label.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct VendorSlice {
    pub name: String,
    pub amount: u64,
}

/// Current vs previous year spend for one quarter.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct QuarterPoint {
    pub quarter: String,
    pub current: u64,
    pub previous: u64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NamedAmount {
    pub name: String,
    pub amount: u64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NamedCount {
    pub name: String,
    pub count: u64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NamedQuantity {
    pub name: String,
    pub quantity: u64,
}

/// Full preview payload consumed by the dashboard grid.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DashboardData {
    pub total_spend: u64,
    pub total_transactions: u64,
    pub top_vendor_spend: NamedAmount,
    pub top_vendor_transactions: NamedCount,
    pub top_category: NamedAmount,
    pub most_purchased_item: NamedQuantity,
    pub monthly_data: Vec<MonthlyPoint>,
    pub transaction_data: Vec<TransactionPoint>,
    pub category_data: Vec<CategorySlice>,
    pub vendor_data: Vec<VendorSlice>,
    pub top_products: Vec<CategorySlice>,
    pub quarterly_data: Vec<QuarterPoint>,
}

/// Most/least purchased item highlight of the vendor summary.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PurchaseHighlight {
    pub name: String,
    pub vendor: String,
    pub quantity: u64,
    pub spent: u64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct VendorSummaryRow {
    pub name: String,
    pub total_items: u64,
}

/// Vendor-level preview payload: per-vendor totals plus item highlights.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct VendorSummary {
    pub summary: Vec<VendorSummaryRow>,
    pub most_purchased: Vec<PurchaseHighlight>,
    pub least_purchased: Vec<PurchaseHighlight>,
}
