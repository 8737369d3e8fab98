//! Price table and add-on table.
//!
//! Both tables are fixed for the whole process. Amounts are in tenge.

use std::fmt;
use std::str::FromStr;

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Room category offered in the calculator
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RoomCategory {
    #[default]
    Apartment,
    House,
    Office,
    Commercial,
}

/// Rates for one room category
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct CategoryRates {
    #[serde(with = "rust_decimal::serde::str")]
    pub base: Decimal,
    #[serde(with = "rust_decimal::serde::str")]
    pub per_room: Decimal,
}

impl RoomCategory {
    pub const ALL: [RoomCategory; 4] = [
        RoomCategory::Apartment,
        RoomCategory::House,
        RoomCategory::Office,
        RoomCategory::Commercial,
    ];

    /// Base rate (for 50 m²) and per-room rate
    pub const fn rates(self) -> CategoryRates {
        let (base, per_room) = match self {
            RoomCategory::Apartment => (500, 1000),
            RoomCategory::House => (800, 1200),
            RoomCategory::Office => (700, 1500),
            RoomCategory::Commercial => (1000, 2000),
        };
        CategoryRates {
            base: Decimal::from_parts(base, 0, 0, false, 0),
            per_room: Decimal::from_parts(per_room, 0, 0, false, 0),
        }
    }

    pub fn key(self) -> &'static str {
        match self {
            RoomCategory::Apartment => "apartment",
            RoomCategory::House => "house",
            RoomCategory::Office => "office",
            RoomCategory::Commercial => "commercial",
        }
    }

    /// Label shown in the category selector and in shared messages
    pub fn label(self) -> &'static str {
        match self {
            RoomCategory::Apartment => "Квартира",
            RoomCategory::House => "Частный дом",
            RoomCategory::Office => "Офис",
            RoomCategory::Commercial => "Коммерческое помещение",
        }
    }
}

impl fmt::Display for RoomCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

/// Error for unrecognised table keys
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown {kind}: {value}")]
pub struct UnknownKey {
    pub kind: &'static str,
    pub value: String,
}

impl FromStr for RoomCategory {
    type Err = UnknownKey;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        RoomCategory::ALL
            .into_iter()
            .find(|c| c.key() == s.trim())
            .ok_or_else(|| UnknownKey {
                kind: "room category",
                value: s.to_string(),
            })
    }
}

/// Flat-fee service rider applied on top of the base calculation
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AddOn {
    Windows,
    Balcony,
    Chandelier,
    Disinfection,
}

impl AddOn {
    pub const ALL: [AddOn; 4] = [
        AddOn::Windows,
        AddOn::Balcony,
        AddOn::Chandelier,
        AddOn::Disinfection,
    ];

    pub const fn surcharge(self) -> Decimal {
        let amount = match self {
            AddOn::Windows => 2000,
            AddOn::Balcony => 1000,
            AddOn::Chandelier => 1500,
            AddOn::Disinfection => 1000,
        };
        Decimal::from_parts(amount, 0, 0, false, 0)
    }

    /// Form field name of the add-on checkbox
    pub fn key(self) -> &'static str {
        match self {
            AddOn::Windows => "windows",
            AddOn::Balcony => "balcony",
            AddOn::Chandelier => "chandelier",
            AddOn::Disinfection => "disinfection",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            AddOn::Windows => "Мытьё окон",
            AddOn::Balcony => "Уборка балкона",
            AddOn::Chandelier => "Чистка люстр",
            AddOn::Disinfection => "Дезинфекция",
        }
    }
}

impl FromStr for AddOn {
    type Err = UnknownKey;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        AddOn::ALL
            .into_iter()
            .find(|a| a.key() == s.trim())
            .ok_or_else(|| UnknownKey {
                kind: "add-on",
                value: s.to_string(),
            })
    }
}
