/// One account row after boundary parsing. Classification inputs are kept
/// raw; the classifier heuristic runs over them in domain logic.
#[derive(Debug, Clone)]
pub struct Account {
    pub id: String,
    pub name: String,
    /// Explicit credit flag, when the schema stores one.
    pub credit_flag: Option<bool>,
    /// Free-text `type`/`account_type` column, when present.
    pub kind: Option<String>,
    pub starting_balance: f64,
    /// Stored balance resolved from the credit-card fallback priority list.
    pub stored_balance: Option<f64>,
    pub currency: Option<String>,
}

/// Display-ready account with derived classification and balances.
#[derive(Debug, Clone)]
pub struct AccountDisplay {
    pub id: String,
    pub name: String,
    pub is_credit_card: bool,
    /// Balance in the account's native currency (regular accounts only; for
    /// credit cards this mirrors `converted_balance`).
    pub native_balance: f64,
    pub currency: Option<String>,
    /// Balance in the reporting currency.
    pub converted_balance: f64,
}

/// Accounts split by the classifier, plus the net-worth total over regular
/// accounts (credit-card debt is reported separately, never subtracted).
#[derive(Debug, Clone, Default)]
pub struct NetWorthSummary {
    pub regular: Vec<AccountDisplay>,
    pub credit_cards: Vec<AccountDisplay>,
    pub net_worth: f64,
}
