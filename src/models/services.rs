//! Service cards on the landing page

use crate::pricing::display::format_price;
use crate::pricing::{calculate, CalculationInput, RoomCategory};

#[derive(Debug, Clone)]
pub struct ServiceCard {
    pub icon: &'static str,
    pub title: &'static str,
    pub description: &'static str,
    /// Price of a default-sized cleaning, e.g. `2 500 ₸`
    pub price_from: String,
}

impl ServiceCard {
    fn new(category: RoomCategory, icon: &'static str, description: &'static str) -> Self {
        let input = CalculationInput {
            category,
            ..Default::default()
        };
        Self {
            icon,
            title: category.label(),
            description,
            price_from: format_price(calculate(&input).total),
        }
    }
}

pub fn service_cards() -> Vec<ServiceCard> {
    vec![
        ServiceCard::new(
            RoomCategory::Apartment,
            "fa-building",
            "Генеральная и поддерживающая уборка квартир любой площади.",
        ),
        ServiceCard::new(
            RoomCategory::House,
            "fa-home",
            "Уборка частных домов и коттеджей, включая террасы и лестницы.",
        ),
        ServiceCard::new(
            RoomCategory::Office,
            "fa-briefcase",
            "Регулярная уборка офисов в удобное для вас время.",
        ),
        ServiceCard::new(
            RoomCategory::Commercial,
            "fa-store",
            "Магазины, салоны и рестораны: уборка после закрытия.",
        ),
    ]
}
