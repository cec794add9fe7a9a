use chrono::{DateTime, Utc};

/// One savings/debt goal row after boundary parsing.
#[derive(Debug, Clone)]
pub struct Goal {
    pub id: String,
    pub name: String,
    pub goal_type: Option<String>,
    pub target_amount: f64,
    /// Base currency contributions must match to count.
    pub target_currency: Option<String>,
    pub deadline: Option<DateTime<Utc>>,
    pub status: Option<String>,
}

/// One contribution toward a goal.
#[derive(Debug, Clone)]
pub struct GoalContribution {
    pub goal_id: Option<String>,
    pub amount: f64,
    pub currency: Option<String>,
}

/// Display-ready goal with computed progress. Unlike budget categories,
/// `progress_pct` here is clamped to `[0, 100]`; `contributed` is clamped to
/// `>= 0` but may exceed the target.
#[derive(Debug, Clone)]
pub struct GoalDisplay {
    pub id: String,
    pub name: String,
    pub goal_type: Option<String>,
    pub target_amount: f64,
    pub target_currency: Option<String>,
    pub deadline: Option<DateTime<Utc>>,
    pub contributed: f64,
    pub progress_pct: f64,
    pub status: String,
}
