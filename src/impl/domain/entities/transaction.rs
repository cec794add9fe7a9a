use chrono::{DateTime, Utc};

/// Classification of a transaction, driving sign and display convention.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AmountIntent {
    Income,
    Expense,
    TransferIn,
    TransferOut,
    Transfer,
    Other,
}

impl AmountIntent {
    pub fn display_type(&self, signed: f64) -> &'static str {
        match self {
            AmountIntent::Income => "Income",
            AmountIntent::Expense => "Expense",
            AmountIntent::TransferIn => "Transfer In",
            AmountIntent::TransferOut => "Transfer Out",
            AmountIntent::Transfer => "Transfer",
            AmountIntent::Other => {
                if signed >= 0.0 {
                    "Income"
                } else {
                    "Expense"
                }
            }
        }
    }
}

/// Normalized transfer direction.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TransferDirection {
    In,
    Out,
    Unspecified,
}

/// Sign/intent metadata for one raw amount. Produced by
/// [`crate::logic::compute_amount_meta`], which is pure and total.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AmountMeta {
    pub signed: f64,
    pub abs: f64,
    pub intent: AmountIntent,
    /// `"+"`, `"-"`, or `""` for zero.
    pub display_sign: &'static str,
    pub direction: TransferDirection,
}

/// One transaction row after boundary parsing.
#[derive(Debug, Clone)]
pub struct Transaction {
    pub id: String,
    pub amount: f64,
    pub currency: Option<String>,
    pub entry_type: Option<String>,
    pub transfer_direction: Option<String>,
    pub date: Option<DateTime<Utc>>,
    pub created_at: Option<DateTime<Utc>>,
    pub payment_method: Option<String>,
    pub account_label: Option<String>,
    pub category: Option<String>,
    pub merchant: Option<String>,
    pub description: Option<String>,
}

impl Transaction {
    /// Label used for fuzzy account matching: payment method first, then the
    /// free-text account column.
    pub fn account_reference(&self) -> Option<&str> {
        self.payment_method.as_deref().or(self.account_label.as_deref())
    }
}

/// Annotated, display-ready transaction row.
#[derive(Debug, Clone)]
pub struct TransactionDisplay {
    pub id: String,
    pub merchant: String,
    pub meta: AmountMeta,
    pub currency: String,
    pub date: Option<DateTime<Utc>>,
    pub account: String,
    pub is_credit: bool,
    pub category: String,
    pub display_type: &'static str,
    /// Pre-formatted amount, e.g. `+$1,234.56` or `-COP 50,000`.
    pub display_amount: String,
    pub description: String,
}
