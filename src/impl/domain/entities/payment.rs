use chrono::{DateTime, Utc};

/// Money applied toward a budget item. `transaction_ref` is the resolved
/// foreign-key-like link to a transaction row, when any of the candidate
/// columns carried one.
#[derive(Debug, Clone)]
pub struct Payment {
    pub id: String,
    pub budget_item_id: Option<String>,
    pub amount: f64,
    pub currency: Option<String>,
    pub date: Option<DateTime<Utc>>,
    pub transaction_ref: Option<String>,
}

/// Paid sums in the reporting currency, keyed by item and rolled up by
/// category.
#[derive(Debug, Clone, Default)]
pub struct PaymentTotals {
    pub paid_by_item: std::collections::HashMap<String, f64>,
    pub paid_by_category: std::collections::HashMap<String, f64>,
}
