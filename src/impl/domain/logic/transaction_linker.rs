use std::collections::HashMap;

use crate::entities::{Payment, Transaction};

/// Groups transactions per budget item by following each payment's resolved
/// transaction reference. Payments without a reference, without an item, or
/// referencing an unknown transaction contribute nothing.
pub(crate) fn link_transactions<'a>(
    payments: &[Payment],
    transactions: &'a [Transaction],
) -> HashMap<String, Vec<&'a Transaction>> {
    let by_id: HashMap<&str, &Transaction> =
        transactions.iter().map(|tx| (tx.id.as_str(), tx)).collect();

    let mut by_item: HashMap<String, Vec<&Transaction>> = HashMap::new();
    for payment in payments {
        let Some(tx_ref) = payment.transaction_ref.as_deref() else {
            continue;
        };
        let Some(item_id) = payment.budget_item_id.as_deref() else {
            continue;
        };
        if let Some(tx) = by_id.get(tx_ref) {
            by_item.entry(item_id.to_string()).or_default().push(tx);
        }
    }
    by_item
}
