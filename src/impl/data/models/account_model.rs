use serde_json::Value;

use crate::data::models::row_model::RowModel;
use crate::entities::Account;

const NAME_KEYS: &[&str] = &["name", "title", "label"];
const KIND_KEYS: &[&str] = &["type", "account_type"];
const STARTING_BALANCE_KEYS: &[&str] = &["starting_balance", "initial_balance", "balance", "amount"];

/// Stored-balance fallback order for credit cards without matched
/// transactions.
const STORED_BALANCE_KEYS: &[&str] = &[
    "current_balance",
    "statement_balance",
    "outstanding_balance",
    "due_amount",
    "balance",
    "starting_balance",
];

pub(crate) fn from_rows(rows: &[RowModel]) -> Vec<Account> {
    rows.iter()
        .enumerate()
        .map(|(i, row)| Account {
            id: row.id_string("id").unwrap_or_else(|| i.to_string()),
            name: row.first_text(NAME_KEYS).unwrap_or("").to_string(),
            credit_flag: match row.get("is_credit_card") {
                Some(Value::Bool(b)) => Some(*b),
                _ => None,
            },
            kind: row.first_text(KIND_KEYS).map(str::to_string),
            starting_balance: row.resolve_numeric(STARTING_BALANCE_KEYS),
            stored_balance: STORED_BALANCE_KEYS.iter().find_map(|k| row.numeric(k)),
            currency: row.text("currency").map(str::to_string),
        })
        .collect()
}
