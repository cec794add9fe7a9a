use crate::data::models::{
    row_model::{sniff_numeric_key, RowModel},
    timestamp_model::parse_timestamp,
};
use crate::entities::{Goal, GoalContribution};

const TARGET_AMOUNT_KEYS: &[&str] = &["target_amount", "goal_amount", "amount"];
const NAME_KEYS: &[&str] = &["name", "title", "label"];
const DEADLINE_KEYS: &[&str] = &["deadline", "target_date", "due_date"];
const GOAL_REF_KEYS: &[&str] = &["goal_id", "saving_goal_id", "goal"];
const CONTRIBUTION_AMOUNT_KEYS: &[&str] = &["amount", "contributed_amount", "value"];

pub(crate) fn goals_from_rows(rows: &[RowModel]) -> Vec<Goal> {
    let target_key = sniff_numeric_key(rows, TARGET_AMOUNT_KEYS);
    rows.iter()
        .filter_map(|row| {
            let id = row.id_string("id")?;
            Some(Goal {
                id,
                name: row.first_text(NAME_KEYS).unwrap_or("Goal").to_string(),
                goal_type: row.first_text(&["goal_type", "type"]).map(str::to_string),
                target_amount: match target_key {
                    Some(key) => row.numeric(key).unwrap_or(0.0),
                    None => row.resolve_numeric(TARGET_AMOUNT_KEYS),
                },
                target_currency: row.text("currency").map(str::to_string),
                deadline: parse_timestamp(row.first_text(DEADLINE_KEYS)),
                status: row.text("status").map(str::to_string),
            })
        })
        .collect()
}

pub(crate) fn contributions_from_rows(rows: &[RowModel]) -> Vec<GoalContribution> {
    let amount_key = sniff_numeric_key(rows, CONTRIBUTION_AMOUNT_KEYS);
    rows.iter()
        .map(|row| GoalContribution {
            goal_id: row.first_id(GOAL_REF_KEYS),
            amount: match amount_key {
                Some(key) => row.numeric(key).unwrap_or(0.0),
                None => row.resolve_numeric(CONTRIBUTION_AMOUNT_KEYS),
            },
            currency: row.text("currency").map(str::to_string),
        })
        .collect()
}
