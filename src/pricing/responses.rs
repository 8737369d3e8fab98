//! Response DTOs for pricing API endpoints.

use rust_decimal::Decimal;
use serde::Serialize;

use super::calculators::{CalculationInput, CalculationResult};
use super::display::format_price;
use super::models::{AddOn, CategoryRates, RoomCategory};

/// ISO code of the only currency the site quotes in
pub const CURRENCY: &str = "KZT";

/// Money value for JSON responses
#[derive(Debug, Clone, Serialize)]
pub struct MoneyResponse {
    #[serde(with = "rust_decimal::serde::str")]
    pub amount: Decimal,
    pub currency: String,
    /// Rounded, grouped and suffixed for display
    pub display: String,
}

impl MoneyResponse {
    pub fn new(amount: Decimal) -> Self {
        Self {
            amount,
            currency: CURRENCY.to_string(),
            display: format_price(amount),
        }
    }
}

/// Add-on as echoed back in a breakdown
#[derive(Debug, Serialize)]
pub struct AddOnResponse {
    pub key: AddOn,
    pub label: &'static str,
    pub surcharge: MoneyResponse,
}

impl From<AddOn> for AddOnResponse {
    fn from(add_on: AddOn) -> Self {
        Self {
            key: add_on,
            label: add_on.label(),
            surcharge: MoneyResponse::new(add_on.surcharge()),
        }
    }
}

/// Response for a calculation
#[derive(Debug, Serialize)]
pub struct BreakdownResponse {
    pub category: RoomCategory,
    pub category_label: &'static str,
    #[serde(with = "rust_decimal::serde::str")]
    pub area: Decimal,
    pub rooms: i64,
    pub add_ons: Vec<AddOnResponse>,
    pub base: MoneyResponse,
    pub rooms_cost: MoneyResponse,
    pub add_on_cost: MoneyResponse,
    pub total: MoneyResponse,
}

impl BreakdownResponse {
    pub fn new(input: &CalculationInput, result: &CalculationResult) -> Self {
        Self {
            category: result.category,
            category_label: result.category.label(),
            area: input.area,
            rooms: input.rooms,
            add_ons: input.add_ons.iter().copied().map(AddOnResponse::from).collect(),
            base: MoneyResponse::new(result.base),
            rooms_cost: MoneyResponse::new(result.rooms_cost),
            add_on_cost: MoneyResponse::new(result.add_on_cost),
            total: MoneyResponse::new(result.total),
        }
    }
}

/// One row of the price table
#[derive(Debug, Serialize)]
pub struct CategoryRatesResponse {
    pub key: RoomCategory,
    pub label: &'static str,
    #[serde(flatten)]
    pub rates: CategoryRates,
}

/// Response for the price table
#[derive(Debug, Serialize)]
pub struct PriceTableResponse {
    pub currency: &'static str,
    pub categories: Vec<CategoryRatesResponse>,
    pub add_ons: Vec<AddOnResponse>,
}

impl PriceTableResponse {
    pub fn current() -> Self {
        Self {
            currency: CURRENCY,
            categories: RoomCategory::ALL
                .into_iter()
                .map(|c| CategoryRatesResponse {
                    key: c,
                    label: c.label(),
                    rates: c.rates(),
                })
                .collect(),
            add_ons: AddOn::ALL.into_iter().map(AddOnResponse::from).collect(),
        }
    }
}

/// Response for a shareable deep link
#[derive(Debug, Serialize)]
pub struct ShareResponse {
    pub message: String,
    pub url: String,
    pub total: MoneyResponse,
}
