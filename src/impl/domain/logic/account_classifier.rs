use std::cmp::Ordering;

use crate::domain::logic::{amount_meta::compute_amount_meta, currency_converter::CurrencyConverter, utils};
use crate::entities::{Account, AccountDisplay, NetWorthSummary, Transaction};

/// Credit-card heuristic, first match wins: explicit flag, then a
/// type/account-type string containing "credit" or "card", then an account
/// name containing "card".
pub(crate) fn is_credit_card(account: &Account) -> bool {
    if let Some(flag) = account.credit_flag {
        return flag;
    }
    let kind = account.kind.as_deref().unwrap_or("").to_lowercase();
    if kind.contains("credit") || kind.contains("card") {
        return true;
    }
    account.name.to_lowercase().contains("card")
}

fn matching_transactions<'a>(
    account: &Account,
    transactions: &'a [Transaction],
) -> Vec<&'a Transaction> {
    transactions
        .iter()
        .filter(|tx| {
            tx.account_reference()
                .is_some_and(|label| utils::fuzzy_label_match(label, &account.name))
        })
        .collect()
}

/// Splits accounts into regular vs credit-card, attaches transaction-derived
/// balances, and totals net worth over regular accounts only (credit-card
/// debt is reported separately, never subtracted).
pub(crate) async fn classify_accounts(
    accounts: &[Account],
    transactions: &[Transaction],
    converter: &CurrencyConverter,
) -> NetWorthSummary {
    let mut regular = Vec::new();
    let mut credit_cards = Vec::new();

    for account in accounts {
        let matched = matching_transactions(account, transactions);
        if is_credit_card(account) {
            let converted = if matched.is_empty() {
                // No activity matched; fall back to the stored balance.
                converter
                    .to_reporting(
                        account.stored_balance.unwrap_or(0.0),
                        account.currency.as_deref(),
                    )
                    .await
            } else {
                let mut sum = 0.0;
                for tx in &matched {
                    let meta = compute_amount_meta(
                        tx.amount,
                        tx.entry_type.as_deref(),
                        tx.transfer_direction.as_deref(),
                    );
                    sum += converter
                        .to_reporting(meta.signed, tx.currency.as_deref())
                        .await;
                }
                sum
            };
            credit_cards.push(AccountDisplay {
                id: account.id.clone(),
                name: account.name.clone(),
                is_credit_card: true,
                native_balance: converted,
                currency: account.currency.clone(),
                converted_balance: converted,
            });
        } else {
            // Running total in the account's own currency; matched amounts
            // are assumed to share it.
            let native = account.starting_balance
                + matched
                    .iter()
                    .map(|tx| {
                        compute_amount_meta(
                            tx.amount,
                            tx.entry_type.as_deref(),
                            tx.transfer_direction.as_deref(),
                        )
                        .signed
                    })
                    .sum::<f64>();
            let converted = converter
                .to_reporting(native, account.currency.as_deref())
                .await;
            regular.push(AccountDisplay {
                id: account.id.clone(),
                name: account.name.clone(),
                is_credit_card: false,
                native_balance: native,
                currency: account.currency.clone(),
                converted_balance: converted,
            });
        }
    }

    let net_worth = regular.iter().map(|a| a.converted_balance).sum();
    sort_for_display(&mut regular);
    sort_for_display(&mut credit_cards);

    NetWorthSummary {
        regular,
        credit_cards,
        net_worth,
    }
}

/// Descending by converted balance, tie-broken by descending name.
fn sort_for_display(accounts: &mut [AccountDisplay]) {
    accounts.sort_by(|a, b| {
        b.converted_balance
            .partial_cmp(&a.converted_balance)
            .unwrap_or(Ordering::Equal)
            .then_with(|| b.name.cmp(&a.name))
    });
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::datasources::{FixedClock, StaticFxRate};
    use chrono::{TimeZone, Utc};
    use std::sync::Arc;

    fn converter() -> CurrencyConverter {
        CurrencyConverter::new(
            "COP",
            Arc::new(StaticFxRate(4000.0)),
            Arc::new(FixedClock(
                Utc.with_ymd_and_hms(2026, 8, 15, 0, 0, 0).unwrap(),
            )),
        )
    }

    fn account(name: &str) -> Account {
        Account {
            id: name.to_string(),
            name: name.to_string(),
            credit_flag: None,
            kind: None,
            starting_balance: 0.0,
            stored_balance: None,
            currency: None,
        }
    }

    fn tx(method: &str, amount: f64, entry_type: &str) -> Transaction {
        Transaction {
            id: "t".to_string(),
            amount,
            currency: None,
            entry_type: Some(entry_type.to_string()),
            transfer_direction: None,
            date: None,
            created_at: None,
            payment_method: Some(method.to_string()),
            account_label: None,
            category: None,
            merchant: None,
            description: None,
        }
    }

    #[test]
    fn heuristic_first_match_wins() {
        let mut a = account("Everyday Checking");
        assert!(!is_credit_card(&a));
        a.kind = Some("Credit Line".to_string());
        assert!(is_credit_card(&a));
        // Explicit flag overrides the type string.
        a.credit_flag = Some(false);
        assert!(!is_credit_card(&a));
        assert!(is_credit_card(&account("Gold Card")));
    }

    #[tokio::test]
    async fn regular_balance_adds_signed_matches_and_converts() {
        let mut checking = account("Checking");
        checking.starting_balance = 200.0;
        checking.currency = Some("USD".to_string());
        let txs = vec![tx("checking", 50.0, "expense")];
        let summary = classify_accounts(&[checking], &txs, &converter()).await;
        assert_eq!(summary.regular[0].native_balance, 150.0);
        assert_eq!(summary.regular[0].converted_balance, 600_000.0);
        assert_eq!(summary.net_worth, 600_000.0);
    }

    #[tokio::test]
    async fn credit_card_sums_converted_matches() {
        let mut card = account("Visa Card");
        card.stored_balance = Some(9999.0);
        let mut usd_tx = tx("visa card", 10.0, "expense");
        usd_tx.currency = Some("USD".to_string());
        let summary = classify_accounts(&[card], &[usd_tx], &converter()).await;
        assert_eq!(summary.credit_cards[0].converted_balance, -40_000.0);
        // Credit cards never feed net worth.
        assert_eq!(summary.net_worth, 0.0);
    }

    #[tokio::test]
    async fn credit_card_without_matches_uses_stored_balance() {
        let mut card = account("Visa Card");
        card.stored_balance = Some(120.0);
        card.currency = Some("USD".to_string());
        let summary = classify_accounts(&[card], &[], &converter()).await;
        assert_eq!(summary.credit_cards[0].converted_balance, 480_000.0);
    }

    #[tokio::test]
    async fn display_sort_is_balance_desc_then_name_desc() {
        let mut a = account("Alpha");
        a.starting_balance = 100.0;
        let mut b = account("Beta");
        b.starting_balance = 100.0;
        let mut c = account("Gamma");
        c.starting_balance = 500.0;
        let summary = classify_accounts(&[a, b, c], &[], &converter()).await;
        let names: Vec<_> = summary.regular.iter().map(|x| x.name.as_str()).collect();
        assert_eq!(names, vec!["Gamma", "Beta", "Alpha"]);
    }

    #[tokio::test]
    async fn fuzzy_match_works_in_both_directions() {
        let mut checking = account("Bancolombia Checking Primary");
        checking.starting_balance = 0.0;
        let txs = vec![tx("bancolombia checking primary extra suffix", 10.0, "income")];
        let summary = classify_accounts(&[checking], &txs, &converter()).await;
        assert_eq!(summary.regular[0].native_balance, 10.0);
    }
}
