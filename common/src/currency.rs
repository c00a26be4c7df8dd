//! Display formatting for prices in Brazilian reais.

use num_format::{Locale, ToFormattedString};

const SYMBOL: &str = "R$";

/// Formats a price as `R$ 1.234,56`. Negative values get a leading minus.
///
/// Values are rounded to cents. Non-finite values are shown as-is since they
/// can only come from a misbehaving service.
pub fn format_currency(value: f64) -> String {
    if !value.is_finite() {
        return format!("{SYMBOL} {value}");
    }

    let cents = (value.abs() * 100.0).round() as u64;
    let sign = if value < 0.0 && cents > 0 { "-" } else { "" };
    let locale = Locale::pt;

    format!(
        "{sign}{SYMBOL} {}{}{:02}",
        (cents / 100).to_formatted_string(&locale),
        locale.decimal(),
        cents % 100
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_formats_cents() {
        assert_eq!(format_currency(10.0), "R$ 10,00");
        assert_eq!(format_currency(0.5), "R$ 0,50");
        assert_eq!(format_currency(9.999), "R$ 10,00");
    }

    #[test]
    fn test_groups_thousands() {
        assert_eq!(format_currency(1234.5), "R$ 1.234,50");
        assert_eq!(format_currency(1_000_000.0), "R$ 1.000.000,00");
    }

    #[test]
    fn test_negative_values() {
        assert_eq!(format_currency(-3.2), "-R$ 3,20");
        assert_eq!(format_currency(-0.001), "R$ 0,00");
    }
}
