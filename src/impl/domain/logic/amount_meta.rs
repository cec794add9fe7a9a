use crate::entities::{AmountIntent, AmountMeta, TransferDirection};

fn normalize_entry_type(entry_type: Option<&str>) -> String {
    entry_type.unwrap_or("").trim().to_lowercase()
}

fn normalize_direction(direction: Option<&str>) -> TransferDirection {
    match direction.unwrap_or("").trim().to_lowercase().as_str() {
        "in" => TransferDirection::In,
        "out" => TransferDirection::Out,
        _ => TransferDirection::Unspecified,
    }
}

/// Sign and intent for one raw amount. Pure and total: every input produces a
/// defined `AmountMeta`, non-finite amounts are treated as zero.
///
/// `income`/`expense` force the sign regardless of how the amount was stored;
/// `transfer*` follows the direction when present and otherwise leaves the
/// raw sign untouched; unknown entry types fall back to the amount's own
/// sign, with zero classified as `Other`.
pub fn compute_amount_meta(
    amount: f64,
    entry_type: Option<&str>,
    transfer_direction: Option<&str>,
) -> AmountMeta {
    let base = if amount.is_finite() { amount } else { 0.0 };
    let entry_type = normalize_entry_type(entry_type);
    let direction = normalize_direction(transfer_direction);

    let (signed, intent) = if entry_type == "income" {
        (base.abs(), AmountIntent::Income)
    } else if entry_type == "expense" {
        (-base.abs(), AmountIntent::Expense)
    } else if entry_type.starts_with("transfer") {
        match direction {
            TransferDirection::In => (base.abs(), AmountIntent::TransferIn),
            TransferDirection::Out => (-base.abs(), AmountIntent::TransferOut),
            TransferDirection::Unspecified => (base, AmountIntent::Transfer),
        }
    } else if base > 0.0 {
        (base, AmountIntent::Income)
    } else if base < 0.0 {
        (base, AmountIntent::Expense)
    } else {
        (base, AmountIntent::Other)
    };

    AmountMeta {
        signed,
        abs: signed.abs(),
        intent,
        display_sign: if signed > 0.0 {
            "+"
        } else if signed < 0.0 {
            "-"
        } else {
            ""
        },
        direction,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn income_forces_positive_sign() {
        let meta = compute_amount_meta(100.0, Some("income"), None);
        assert_eq!(meta.signed, 100.0);
        assert_eq!(meta.display_sign, "+");
        assert_eq!(meta.intent, AmountIntent::Income);
    }

    #[test]
    fn expense_forces_negative_sign() {
        let meta = compute_amount_meta(100.0, Some("expense"), None);
        assert_eq!(meta.signed, -100.0);
        assert_eq!(meta.display_sign, "-");
        assert_eq!(meta.intent, AmountIntent::Expense);
    }

    #[test]
    fn unknown_type_falls_back_to_raw_sign() {
        let meta = compute_amount_meta(-50.0, None, None);
        assert_eq!(meta.signed, -50.0);
        assert_eq!(meta.intent, AmountIntent::Expense);
    }

    #[test]
    fn zero_is_other_with_empty_sign() {
        let meta = compute_amount_meta(0.0, None, None);
        assert_eq!(meta.signed, 0.0);
        assert_eq!(meta.intent, AmountIntent::Other);
        assert_eq!(meta.display_sign, "");
    }

    #[test]
    fn transfer_directions() {
        let meta = compute_amount_meta(-30.0, Some("Transfer"), Some("IN"));
        assert_eq!(meta.signed, 30.0);
        assert_eq!(meta.intent, AmountIntent::TransferIn);

        let meta = compute_amount_meta(30.0, Some("transfer_out"), Some("out"));
        assert_eq!(meta.signed, -30.0);
        assert_eq!(meta.intent, AmountIntent::TransferOut);

        let meta = compute_amount_meta(-30.0, Some("transfer"), None);
        assert_eq!(meta.signed, -30.0);
        assert_eq!(meta.intent, AmountIntent::Transfer);
    }

    #[test]
    fn total_on_non_finite_input() {
        let meta = compute_amount_meta(f64::NAN, Some("weird"), Some("sideways"));
        assert_eq!(meta.signed, 0.0);
        assert_eq!(meta.intent, AmountIntent::Other);
        let meta = compute_amount_meta(f64::INFINITY, None, None);
        assert_eq!(meta.signed, 0.0);
    }
}
