use std::collections::HashMap;

use crate::domain::logic::currency_converter::CurrencyConverter;
use crate::entities::{MonthWindow, Payment, PaymentTotals};

/// Sums payment magnitudes per budget item within the month window, then
/// rolls item sums up to categories via `item_to_category`.
///
/// The window filter re-runs here even when the fetch layer already filtered
/// server-side; payments with a missing or unparsable date are excluded.
/// Items without a known category are dropped from the category roll-up
/// rather than bucketed into "uncategorized", to avoid double counting
/// against the budget items' own uncategorized bucket.
pub(crate) async fn aggregate_payments(
    payments: &[Payment],
    window: &MonthWindow,
    item_to_category: &HashMap<String, String>,
    converter: &CurrencyConverter,
) -> PaymentTotals {
    let mut paid_by_item: HashMap<String, f64> = HashMap::new();
    for payment in payments {
        let in_window = payment.date.is_some_and(|d| window.contains(d));
        if !in_window {
            continue;
        }
        let Some(item_id) = payment.budget_item_id.as_deref() else {
            continue;
        };
        let paid = converter
            .to_reporting(payment.amount.abs(), payment.currency.as_deref())
            .await;
        *paid_by_item.entry(item_id.to_string()).or_default() += paid;
    }

    let mut paid_by_category: HashMap<String, f64> = HashMap::new();
    for (item_id, paid) in &paid_by_item {
        if *paid == 0.0 {
            continue;
        }
        if let Some(category_id) = item_to_category.get(item_id) {
            *paid_by_category.entry(category_id.clone()).or_default() += paid;
        }
    }

    PaymentTotals {
        paid_by_item,
        paid_by_category,
    }
}
