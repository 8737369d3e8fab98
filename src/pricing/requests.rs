//! Request DTOs for the calculator.

use serde::Deserialize;

use super::calculators::CalculationInput;
use super::models::AddOn;

/// A numeric field as sent by a client: either a JSON number or the raw
/// text of an input box.
#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
pub enum FieldValue {
    Number(f64),
    Text(String),
}

impl FieldValue {
    /// Text form, as an input box would hold it.
    ///
    /// Numbers past the `i64` range come out as digit strings too long to
    /// parse, so the calculator treats them like any other unreadable value.
    pub fn to_text(&self) -> String {
        match self {
            FieldValue::Number(n) if n.is_finite() => n.trunc().to_string(),
            FieldValue::Number(_) => String::new(),
            FieldValue::Text(s) => s.clone(),
        }
    }
}

/// JSON request to calculate (or share) a price
#[derive(Debug, Clone, Default, Deserialize)]
pub struct CalculateRequest {
    #[serde(default)]
    pub category: Option<String>,
    #[serde(default)]
    pub area: Option<FieldValue>,
    #[serde(default)]
    pub rooms: Option<FieldValue>,
    #[serde(default)]
    pub add_ons: Vec<String>,
}

impl CalculateRequest {
    pub fn to_input(&self) -> CalculationInput {
        let area = self.area.as_ref().map(FieldValue::to_text);
        let rooms = self.rooms.as_ref().map(FieldValue::to_text);

        CalculationInput::from_form(
            self.category.as_deref(),
            area.as_deref(),
            rooms.as_deref(),
            self.add_ons.iter().map(String::as_str),
        )
    }
}

/// Calculator form fields, from a query string or a posted form.
///
/// Each add-on checkbox is named after its add-on and is only present
/// when ticked.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct CalculatorForm {
    #[serde(default)]
    pub category: Option<String>,
    #[serde(default)]
    pub area: Option<String>,
    #[serde(default)]
    pub rooms: Option<String>,
    #[serde(default)]
    pub windows: Option<String>,
    #[serde(default)]
    pub balcony: Option<String>,
    #[serde(default)]
    pub chandelier: Option<String>,
    #[serde(default)]
    pub disinfection: Option<String>,
}

impl CalculatorForm {
    fn checkbox(&self, add_on: AddOn) -> bool {
        let field = match add_on {
            AddOn::Windows => &self.windows,
            AddOn::Balcony => &self.balcony,
            AddOn::Chandelier => &self.chandelier,
            AddOn::Disinfection => &self.disinfection,
        };
        field.is_some()
    }

    pub fn to_input(&self) -> CalculationInput {
        let ticked = AddOn::ALL
            .into_iter()
            .filter(|a| self.checkbox(*a))
            .map(AddOn::key);

        CalculationInput::from_form(
            self.category.as_deref(),
            self.area.as_deref(),
            self.rooms.as_deref(),
            ticked,
        )
    }
}
