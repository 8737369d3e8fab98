//! Core pricing calculation functions.
//!
//! Pure functions for pricing math - no session or request access.

use std::collections::BTreeSet;

use rust_decimal::Decimal;

use super::models::{AddOn, RoomCategory};

/// Area the base rate is quoted for, in m²
pub const REFERENCE_AREA: i64 = 50;

/// Room count assumed when the field is empty or unreadable
pub const DEFAULT_ROOMS: i64 = 2;

/// Round to a whole unit, halves rounding up.
///
/// Matches how the page has always displayed totals: `2.5 -> 3`,
/// `-2.5 -> -2`.
///
/// # Examples
/// ```
/// use rust_decimal_macros::dec;
/// use sparkle_web::pricing::round_to_unit;
///
/// assert_eq!(round_to_unit(dec!(2.5)), dec!(3));
/// assert_eq!(round_to_unit(dec!(-2.5)), dec!(-2));
/// assert_eq!(round_to_unit(dec!(1.49)), dec!(1));
/// ```
pub fn round_to_unit(amount: Decimal) -> Decimal {
    (amount + Decimal::new(5, 1)).floor()
}

/// Validated calculator input
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CalculationInput {
    pub category: RoomCategory,
    pub area: Decimal,
    pub rooms: i64,
    pub add_ons: BTreeSet<AddOn>,
}

impl Default for CalculationInput {
    fn default() -> Self {
        Self {
            category: RoomCategory::default(),
            area: Decimal::from(REFERENCE_AREA),
            rooms: DEFAULT_ROOMS,
            add_ons: BTreeSet::new(),
        }
    }
}

impl CalculationInput {
    /// Build input from raw form values.
    ///
    /// Area and rooms go through [`parse_leading_int`]; anything missing,
    /// unreadable or zero falls back to 50 m² and 2 rooms. An unknown
    /// category falls back to the first one offered, unknown add-ons are
    /// dropped.
    pub fn from_form<'a>(
        category: Option<&str>,
        area: Option<&str>,
        rooms: Option<&str>,
        add_ons: impl IntoIterator<Item = &'a str>,
    ) -> Self {
        let category = match category {
            Some(raw) => raw.parse().unwrap_or_else(|e| {
                tracing::debug!("{}, using default category", e);
                RoomCategory::default()
            }),
            None => RoomCategory::default(),
        };

        let area = area
            .and_then(parse_leading_int)
            .filter(|v| *v != 0)
            .unwrap_or(REFERENCE_AREA);

        let rooms = rooms
            .and_then(parse_leading_int)
            .filter(|v| *v != 0)
            .unwrap_or(DEFAULT_ROOMS);

        let add_ons = add_ons
            .into_iter()
            .filter_map(|name| match name.parse::<AddOn>() {
                Ok(add_on) => Some(add_on),
                Err(e) => {
                    tracing::debug!("Ignoring {}", e);
                    None
                }
            })
            .collect();

        Self {
            category,
            area: Decimal::from(area),
            rooms,
            add_ons,
        }
    }
}

/// Parse the integer at the start of a form value.
///
/// Leading whitespace and a single sign are accepted, parsing stops at the
/// first non-digit: `"42m2" -> 42`, `"12.7" -> 12`, `"m2" -> None`.
/// Values that do not fit an `i64` are treated as unreadable.
pub fn parse_leading_int(raw: &str) -> Option<i64> {
    let s = raw.trim_start();
    let (negative, digits) = match s.as_bytes().first() {
        Some(b'-') => (true, &s[1..]),
        Some(b'+') => (false, &s[1..]),
        _ => (false, s),
    };

    let digits: &str = {
        let end = digits
            .bytes()
            .position(|b| !b.is_ascii_digit())
            .unwrap_or(digits.len());
        &digits[..end]
    };

    if digits.is_empty() {
        return None;
    }

    let value = digits.parse::<i64>().ok()?;
    Some(if negative { -value } else { value })
}

/// Itemized calculator result
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CalculationResult {
    pub category: RoomCategory,
    /// Base rate scaled by area, unrounded
    pub base: Decimal,
    pub rooms_cost: Decimal,
    pub add_on_cost: Decimal,
    /// Rounded to a whole unit
    pub total: Decimal,
}

/// Calculate the price of a cleaning.
///
/// Out-of-range values (negative area, zero rooms) are applied as given.
pub fn calculate(input: &CalculationInput) -> CalculationResult {
    let rates = input.category.rates();

    let base = rates.base * (input.area / Decimal::from(REFERENCE_AREA));
    let rooms_cost = rates.per_room * Decimal::from(input.rooms);
    let add_on_cost: Decimal = input.add_ons.iter().map(|a| a.surcharge()).sum();

    let total = round_to_unit(base + rooms_cost + add_on_cost);

    CalculationResult {
        category: input.category,
        base,
        rooms_cost,
        add_on_cost,
        total,
    }
}
