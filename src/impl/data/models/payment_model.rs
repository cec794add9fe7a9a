use crate::data::models::{
    row_model::{sniff_numeric_key, RowModel},
    timestamp_model::parse_timestamp,
};
use crate::entities::Payment;

const AMOUNT_KEYS: &[&str] = &["amount", "paid_amount", "value"];
const ITEM_REF_KEYS: &[&str] = &["budget_item_id", "item_id", "budget_item"];

/// Candidate columns a payment may use to reference its transaction row.
pub(crate) const TRANSACTION_REF_KEYS: &[&str] = &[
    "transaction_id",
    "tx_id",
    "expense_id",
    "transaction",
    "transaction_ref",
    "transactionId",
    "expenseId",
];

pub(crate) fn from_rows(rows: &[RowModel]) -> Vec<Payment> {
    let amount_key = sniff_numeric_key(rows, AMOUNT_KEYS);
    rows.iter()
        .enumerate()
        .map(|(i, row)| Payment {
            id: row.id_string("id").unwrap_or_else(|| i.to_string()),
            budget_item_id: row.first_id(ITEM_REF_KEYS),
            amount: match amount_key {
                Some(key) => row.numeric(key).unwrap_or(0.0),
                None => row.resolve_numeric(AMOUNT_KEYS),
            },
            currency: row.text("currency").map(str::to_string),
            date: parse_timestamp(row.text("date")),
            transaction_ref: row.first_id(TRANSACTION_REF_KEYS),
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn rows(values: &[serde_json::Value]) -> Vec<RowModel> {
        values
            .iter()
            .map(|v| match v {
                serde_json::Value::Object(map) => RowModel::new(map.clone()),
                _ => panic!("test rows must be objects"),
            })
            .collect()
    }

    #[test]
    fn resolves_item_and_transaction_refs() {
        let payments = from_rows(&rows(&[json!({
            "id": "p1",
            "budget_item_id": 3,
            "amount": "25.5",
            "tx_id": 900,
            "date": "2026-08-10T12:00:00Z",
        })]));
        let p = &payments[0];
        assert_eq!(p.budget_item_id.as_deref(), Some("3"));
        assert_eq!(p.amount, 25.5);
        assert_eq!(p.transaction_ref.as_deref(), Some("900"));
        assert!(p.date.is_some());
    }

    #[test]
    fn bad_fields_degrade_without_dropping_the_row() {
        let payments = from_rows(&rows(&[json!({ "amount": "n/a", "date": "soon" })]));
        assert_eq!(payments.len(), 1);
        assert_eq!(payments[0].amount, 0.0);
        assert!(payments[0].date.is_none());
        assert!(payments[0].budget_item_id.is_none());
    }
}
