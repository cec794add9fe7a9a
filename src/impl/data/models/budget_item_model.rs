use crate::data::models::{
    category_model::resolve_category,
    row_model::{sniff_numeric_key, RowModel},
    timestamp_model::parse_timestamp,
};
use crate::entities::BudgetItem;

pub(crate) const PLANNED_AMOUNT_KEYS: &[&str] = &["planned_amount", "amount", "expected_amount"];
const NAME_KEYS: &[&str] = &["name", "title", "label"];
const DUE_KEYS: &[&str] = &["due_date", "due", "deadline", "dueDate", "due_at"];

/// Builds budget items from one raw batch. The planned-amount column is
/// sniffed from the first row and applied batch-wide; rows without an id are
/// skipped (nothing downstream can reference them).
pub(crate) fn from_rows(rows: &[RowModel]) -> Vec<BudgetItem> {
    let amount_key = sniff_numeric_key(rows, PLANNED_AMOUNT_KEYS);
    rows.iter()
        .filter_map(|row| {
            let id = row.id_string("id")?;
            let planned_amount = match amount_key {
                Some(key) => row.numeric(key).unwrap_or(0.0),
                None => row.resolve_numeric(PLANNED_AMOUNT_KEYS),
            };
            Some(BudgetItem {
                id,
                name: row
                    .first_text(NAME_KEYS)
                    .unwrap_or("Item")
                    .to_string(),
                category: resolve_category(row),
                planned_amount,
                due_date: parse_timestamp(row.first_text(DUE_KEYS)),
            })
        })
        .collect()
}
