use chrono::{DateTime, Utc};

use super::category::CategoryIdentity;

/// One planned spending line, parsed fresh each fetch cycle.
#[derive(Debug, Clone)]
pub struct BudgetItem {
    pub id: String,
    pub name: String,
    pub category: CategoryIdentity,
    /// Non-negative, in the budget reporting currency.
    pub planned_amount: f64,
    pub due_date: Option<DateTime<Utc>>,
}

/// Rolled-up planned/paid totals across all items sharing a category.
/// `progress_pct` is deliberately unbounded above 100 so overspend stays
/// visible to the caller.
#[derive(Debug, Clone)]
pub struct CategoryAggregate {
    pub category_id: String,
    pub label: String,
    pub planned: f64,
    pub paid: f64,
    pub progress_pct: f64,
    /// Earliest parseable due date across the category's items.
    pub due_date: Option<DateTime<Utc>>,
}

/// Item-level display record for the budget breakdown sheet.
#[derive(Debug, Clone)]
pub struct BudgetDisplay {
    pub id: String,
    pub name: String,
    pub category_id: String,
    pub planned: f64,
    pub paid: f64,
    pub progress_pct: f64,
    pub due_date: Option<DateTime<Utc>>,
}

pub(crate) fn progress_pct(planned: f64, paid: f64) -> f64 {
    if planned > 0.0 {
        (paid / planned) * 100.0
    } else {
        0.0
    }
}
