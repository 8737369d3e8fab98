//! Pricing module for the cleaning calculator.
//!
//! A fixed price table, a pure calculation over it and the JSON endpoints
//! the calculator dialog talks to.

pub mod calculators;
pub mod display;
pub mod models;
pub mod requests;
pub mod responses;
pub mod routes;

// Re-export commonly used items
pub use calculators::{calculate, round_to_unit, CalculationInput, CalculationResult};
pub use models::{AddOn, RoomCategory};
pub use requests::{CalculateRequest, CalculatorForm};
pub use routes::router;
