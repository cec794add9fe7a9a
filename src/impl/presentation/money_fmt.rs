use iso_currency::Currency;
use num_format::{Locale, ToFormattedString as _};

/// Display symbol for an ISO currency code; unknown codes fall back to `$`,
/// matching the reference dashboard.
pub(crate) fn currency_symbol(code: &str) -> String {
    Currency::from_code(code.trim().to_uppercase().as_str())
        .map(|c| c.symbol().to_string())
        .unwrap_or_else(|| "$".to_string())
}

fn decimal_places(code: &str) -> usize {
    Currency::from_code(code.trim().to_uppercase().as_str())
        .and_then(|c| c.exponent())
        .unwrap_or(0) as usize
}

/// Format a magnitude with proper thousands separators and the currency's
/// standard decimal places (ex. JPY = 0, USD = 2).
///
/// For consistency, uses en locale ('.' as decimal mark, i.e. 1,000.00)
/// regardless of user's locale or currency.
pub(crate) fn format_amount(amount: f64, code: &str) -> String {
    let decimal_places = decimal_places(code);
    if decimal_places == 0 {
        (amount.round() as i64).to_formatted_string(&Locale::en)
    } else {
        let integer_part = (amount.trunc() as i64).to_formatted_string(&Locale::en);
        let fractional_part = format!("{:.decimal_places$}", amount.fract().abs())
            .split('.')
            .nth(1)
            .map(|f| f.to_string())
            .unwrap_or_default();
        format!("{}.{:0decimal_places$}", integer_part, fractional_part)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn usd_uses_two_decimals_and_separators() {
        assert_eq!(format_amount(1234.5, "USD"), "1,234.50");
    }

    #[test]
    fn cop_uses_iso_decimal_places() {
        assert_eq!(format_amount(600000.0, "COP"), "600,000.00");
    }

    #[test]
    fn jpy_has_no_decimals() {
        assert_eq!(format_amount(1234.4, "JPY"), "1,234");
    }

    #[test]
    fn unknown_codes_fall_back() {
        assert_eq!(currency_symbol("???"), "$");
        assert_eq!(format_amount(12.0, "???"), "12");
    }
}
