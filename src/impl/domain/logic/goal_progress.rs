use crate::entities::{Goal, GoalContribution, GoalDisplay};

/// Contribution total and progress for one goal. Contributions in a currency
/// other than the goal's base currency are skipped, not converted; the sum is
/// clamped to >= 0 and progress to [0, 100].
pub(crate) fn compute_goal_progress(
    goal: &Goal,
    contributions: &[GoalContribution],
) -> (f64, f64) {
    let base = goal
        .target_currency
        .as_deref()
        .unwrap_or("")
        .trim()
        .to_uppercase();
    let contributed: f64 = contributions
        .iter()
        .filter(|c| c.goal_id.as_deref() == Some(goal.id.as_str()))
        .filter(|c| {
            let code = c.currency.as_deref().unwrap_or("").trim().to_uppercase();
            code == base
        })
        .map(|c| c.amount)
        .sum();
    let contributed = contributed.max(0.0);

    let progress_pct = if goal.target_amount > 0.0 {
        (contributed / goal.target_amount * 100.0).clamp(0.0, 100.0)
    } else {
        0.0
    };
    (contributed, progress_pct)
}

pub(crate) fn goal_displays(goals: &[Goal], contributions: &[GoalContribution]) -> Vec<GoalDisplay> {
    goals
        .iter()
        .map(|goal| {
            let (contributed, progress_pct) = compute_goal_progress(goal, contributions);
            GoalDisplay {
                id: goal.id.clone(),
                name: goal.name.clone(),
                goal_type: goal.goal_type.clone(),
                target_amount: goal.target_amount,
                target_currency: goal.target_currency.clone(),
                deadline: goal.deadline,
                contributed,
                progress_pct,
                status: goal.status.clone().unwrap_or_else(|| {
                    if progress_pct >= 100.0 {
                        "completed".to_string()
                    } else {
                        "active".to_string()
                    }
                }),
            }
        })
        .collect()
}
