//! Display formatting for prices and counters.
//!
//! Integers are grouped the way the ru-RU locale prints them: thousands
//! separated by a no-break space.

use rust_decimal::Decimal;

use super::calculators::{round_to_unit, CalculationResult};

/// Currency suffix appended to every displayed price
pub const CURRENCY_SUFFIX: &str = " ₸";

const GROUP_SEPARATOR: char = '\u{a0}';

/// Group the digits of an integer in threes.
pub fn group_thousands(value: i128) -> String {
    let digits = value.unsigned_abs().to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3 + 1);

    if value < 0 {
        out.push('-');
    }
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(GROUP_SEPARATOR);
        }
        out.push(ch);
    }
    out
}

/// Round to a whole unit and group thousands.
pub fn format_amount(amount: Decimal) -> String {
    let rounded = round_to_unit(amount);
    // Whole number: dropping the scale is exact
    let value = rounded.mantissa() / 10i128.pow(rounded.scale());
    group_thousands(value)
}

/// Formatted amount with the currency suffix, e.g. `6 000 ₸`.
pub fn format_price(amount: Decimal) -> String {
    format!("{}{}", format_amount(amount), CURRENCY_SUFFIX)
}

/// Text of the three breakdown lines shown under the calculator
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BreakdownLines {
    pub base: String,
    pub add_ons: String,
    pub total: String,
}

impl From<&CalculationResult> for BreakdownLines {
    fn from(result: &CalculationResult) -> Self {
        Self {
            base: format_price(result.base),
            add_ons: format_price(result.add_on_cost),
            total: format_price(result.total),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn test_group_thousands() {
        assert_eq!(group_thousands(0), "0");
        assert_eq!(group_thousands(999), "999");
        assert_eq!(group_thousands(1000), "1\u{a0}000");
        assert_eq!(group_thousands(12345), "12\u{a0}345");
        assert_eq!(group_thousands(1234567), "1\u{a0}234\u{a0}567");
        assert_eq!(group_thousands(-4500), "-4\u{a0}500");
    }

    #[test]
    fn test_format_amount_rounds_first() {
        assert_eq!(format_amount(dec!(1999.5)), "2\u{a0}000");
        assert_eq!(format_amount(dec!(527.49)), "527");
        assert_eq!(format_amount(dec!(1000.00)), "1\u{a0}000");
    }

    #[test]
    fn test_breakdown_lines() {
        let result = CalculationResult {
            category: crate::pricing::RoomCategory::House,
            base: dec!(528.6),
            rooms_cost: dec!(1200),
            add_on_cost: dec!(1500),
            total: dec!(3229),
        };
        let lines = BreakdownLines::from(&result);
        assert_eq!(lines.base, "529 ₸");
        assert_eq!(lines.add_ons, "1\u{a0}500 ₸");
        assert_eq!(lines.total, "3\u{a0}229 ₸");
    }

    #[test]
    fn test_format_price() {
        assert_eq!(format_price(dec!(6000)), "6\u{a0}000 ₸");
        assert_eq!(format_price(dec!(-500)), "-500 ₸");
    }
}
