use chrono::{DateTime, Utc};

use crate::domain::logic::{amount_meta::compute_amount_meta, utils};
use crate::entities::{Transaction, TransactionDisplay};
use crate::presentation::money_fmt::{currency_symbol, format_amount};

const DEFAULT_CURRENCY: &str = "USD";

/// Annotates one raw transaction for display: sign/intent metadata, credit
/// detection against the credit-card account names, and a pre-formatted
/// amount string like `+$1,234.56` or `-$50,000.00 COP`.
pub(crate) fn display_row(tx: &Transaction, credit_card_names: &[String]) -> TransactionDisplay {
    let meta = compute_amount_meta(
        tx.amount,
        tx.entry_type.as_deref(),
        tx.transfer_direction.as_deref(),
    );
    let currency = tx
        .currency
        .as_deref()
        .unwrap_or(DEFAULT_CURRENCY)
        .trim()
        .to_uppercase();
    let account = tx.account_reference().unwrap_or("—").to_string();
    let is_credit = credit_card_names
        .iter()
        .any(|name| utils::fuzzy_label_match(&account, name));

    let suffix = if currency == DEFAULT_CURRENCY {
        String::new()
    } else {
        format!(" {}", currency)
    };
    let display_amount = format!(
        "{}{}{}{}",
        meta.display_sign,
        currency_symbol(&currency),
        format_amount(meta.abs, &currency),
        suffix
    );

    TransactionDisplay {
        id: tx.id.clone(),
        merchant: tx.merchant.clone().unwrap_or_else(|| "—".to_string()),
        meta,
        currency,
        date: tx.date.or(tx.created_at),
        account,
        is_credit,
        category: tx.category.clone().unwrap_or_else(|| "—".to_string()),
        display_type: meta.intent.display_type(meta.signed),
        display_amount,
        description: tx.description.clone().unwrap_or_default(),
    }
}

/// Display rows sorted by transaction day descending, created-at descending
/// as the tiebreak within a day.
pub(crate) fn transaction_displays(
    transactions: &[Transaction],
    credit_card_names: &[String],
) -> Vec<TransactionDisplay> {
    let mut keyed: Vec<(DateTime<Utc>, DateTime<Utc>, TransactionDisplay)> = transactions
        .iter()
        .map(|tx| {
            let when = tx.date.or(tx.created_at).unwrap_or(DateTime::<Utc>::MIN_UTC);
            let day = when
                .date_naive()
                .and_hms_opt(0, 0, 0)
                .expect("midnight is always a valid time")
                .and_utc();
            let created = tx.created_at.unwrap_or(when);
            (day, created, display_row(tx, credit_card_names))
        })
        .collect();
    keyed.sort_by(|a, b| b.0.cmp(&a.0).then_with(|| b.1.cmp(&a.1)));
    keyed.into_iter().map(|(_, _, row)| row).collect()
}

/// Distinct, sorted account labels for the account filter dropdown.
pub(crate) fn account_options(transactions: &[Transaction]) -> Vec<String> {
    let mut options: Vec<String> = transactions
        .iter()
        .filter_map(|tx| tx.account_reference())
        .map(|label| label.trim().to_string())
        .filter(|label| !label.is_empty())
        .collect();
    options.sort();
    options.dedup();
    options
}
