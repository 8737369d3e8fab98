//! Shareable summary of a calculation.

use crate::pricing::display::format_price;
use crate::pricing::{CalculationInput, CalculationResult};

/// Message sent to the business when a visitor shares a calculation.
///
/// Asterisks mark bold text in the messenger.
pub fn share_message(input: &CalculationInput, result: &CalculationResult) -> String {
    let add_ons = if input.add_ons.is_empty() {
        "Не выбраны".to_string()
    } else {
        input
            .add_ons
            .iter()
            .map(|a| format!("• {}", a.label()))
            .collect::<Vec<_>>()
            .join("\n")
    };

    format!(
        "📋 *Расчет стоимости уборки*\n\
         \n\
         🏠 Тип помещения: {}\n\
         📏 Площадь: {} м²\n\
         🚪 Комнат: {}\n\
         💰 Итоговая стоимость: {}\n\
         \n\
         ✨ Дополнительные услуги:\n\
         {}\n\
         \n\
         💬 *Хочу заказать эту услугу!*",
        result.category.label(),
        input.area.normalize(),
        input.rooms,
        format_price(result.total),
        add_ons,
    )
}

/// Greeting pre-filled by the contact dialog's chat link
pub const GREETING: &str = "Здравствуйте! Хочу заказать уборку.";

#[cfg(test)]
mod tests {
    use super::*;
    use crate::pricing::{calculate, AddOn, RoomCategory};
    use rust_decimal::Decimal;

    #[test]
    fn test_message_lists_selected_add_ons() {
        let input = CalculationInput {
            category: RoomCategory::Apartment,
            area: Decimal::from(100),
            rooms: 2,
            add_ons: [AddOn::Windows, AddOn::Balcony].into_iter().collect(),
        };
        let message = share_message(&input, &calculate(&input));

        assert!(message.starts_with("📋 *Расчет стоимости уборки*\n\n"));
        assert!(message.contains("🏠 Тип помещения: Квартира\n"));
        assert!(message.contains("📏 Площадь: 100 м²\n"));
        assert!(message.contains("🚪 Комнат: 2\n"));
        assert!(message.contains("💰 Итоговая стоимость: 6\u{a0}000 ₸\n"));
        assert!(message.contains("• Мытьё окон\n• Уборка балкона\n"));
        assert!(message.ends_with("💬 *Хочу заказать эту услугу!*"));
    }

    #[test]
    fn test_message_without_add_ons() {
        let input = CalculationInput::default();
        let message = share_message(&input, &calculate(&input));

        assert!(message.contains("✨ Дополнительные услуги:\nНе выбраны\n"));
        assert!(message.contains("📏 Площадь: 50 м²"));
    }
}
