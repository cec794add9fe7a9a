use crate::data::models::{row_model::RowModel, timestamp_model::parse_timestamp};
use crate::entities::Transaction;

pub(crate) fn from_rows(rows: &[RowModel]) -> Vec<Transaction> {
    rows.iter()
        .enumerate()
        .map(|(i, row)| Transaction {
            id: row.id_string("id").unwrap_or_else(|| i.to_string()),
            amount: row.resolve_numeric(&["amount"]),
            currency: row.text("currency").map(str::to_string),
            entry_type: row.text("entry_type").map(str::to_string),
            transfer_direction: row
                .first_text(&["transfer_direction", "direction"])
                .map(str::to_string),
            date: parse_timestamp(row.text("date")),
            created_at: parse_timestamp(row.text("created_at")),
            payment_method: row.text("payment_method").map(str::to_string),
            account_label: row.text("account").map(str::to_string),
            category: row.text("category").map(str::to_string),
            merchant: row.text("merchant").map(str::to_string),
            description: row.text("description").map(str::to_string),
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn account_reference_prefers_payment_method() {
        let rows = match json!([
            { "id": "t1", "amount": -50, "payment_method": "Visa Card", "account": "Checking" },
            { "id": "t2", "amount": 10, "account": "Checking" },
        ]) {
            serde_json::Value::Array(v) => v
                .into_iter()
                .map(|r| match r {
                    serde_json::Value::Object(map) => RowModel::new(map),
                    _ => unreachable!(),
                })
                .collect::<Vec<_>>(),
            _ => unreachable!(),
        };
        let txs = from_rows(&rows);
        assert_eq!(txs[0].account_reference(), Some("Visa Card"));
        assert_eq!(txs[1].account_reference(), Some("Checking"));
    }
}
