use std::collections::HashMap;

use super::{
    account::NetWorthSummary,
    budget::{BudgetDisplay, CategoryAggregate},
    goal::GoalDisplay,
    month_window::MonthWindow,
    transaction::{Transaction, TransactionDisplay},
};

/// Domain output of one reconciliation pass, before presentation formatting.
/// Transactions stay raw here; the rendering layer annotates and formats
/// them.
#[derive(Debug, Clone)]
pub struct ReconciledRecords {
    pub window: MonthWindow,
    /// Sorted by progress desc, then planned desc.
    pub categories: Vec<CategoryAggregate>,
    /// Per category id, sorted by planned desc.
    pub budget_items_by_category: HashMap<String, Vec<BudgetDisplay>>,
    pub net_worth: NetWorthSummary,
    pub goals: Vec<GoalDisplay>,
    pub transactions: Vec<Transaction>,
    /// Transactions reachable from budget payments, grouped by budget item.
    pub linked_transactions: HashMap<String, Vec<Transaction>>,
}

/// Everything the rendering surface consumes for one reconciliation pass:
/// display-ready, pre-converted to the reporting currency, pre-sorted.
#[derive(Debug, Clone)]
pub struct DashboardSnapshot {
    pub window: MonthWindow,
    /// Sorted by progress desc, then planned desc.
    pub categories: Vec<CategoryAggregate>,
    /// Per category (lowercased key), sorted by planned desc.
    pub budget_items_by_category: HashMap<String, Vec<BudgetDisplay>>,
    pub net_worth: NetWorthSummary,
    pub goals: Vec<GoalDisplay>,
    /// Sorted by transaction day desc, created-at tiebreak.
    pub transactions: Vec<TransactionDisplay>,
    /// Transactions reachable from budget payments, grouped by budget item.
    pub linked_transactions: HashMap<String, Vec<TransactionDisplay>>,
    /// Distinct, sorted account labels seen in transactions (filter options).
    pub account_options: Vec<String>,
}
