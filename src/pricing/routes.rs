//! JSON endpoints for pricing.

use axum::{
    extract::State,
    routing::{get, post},
    Json, Router,
};

use crate::contact::share_message;
use crate::AppState;

use super::calculators::calculate;
use super::requests::CalculateRequest;
use super::responses::{BreakdownResponse, MoneyResponse, PriceTableResponse, ShareResponse};

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/api/pricing/table", get(price_table))
        .route("/api/pricing/calculate", post(calculate_price))
        .route("/api/pricing/share", post(share_calculation))
}

async fn price_table() -> Json<PriceTableResponse> {
    Json(PriceTableResponse::current())
}

async fn calculate_price(Json(request): Json<CalculateRequest>) -> Json<BreakdownResponse> {
    let input = request.to_input();
    let result = calculate(&input);

    tracing::debug!(
        category = %input.category,
        area = %input.area,
        rooms = input.rooms,
        total = %result.total,
        "Calculated price"
    );

    Json(BreakdownResponse::new(&input, &result))
}

async fn share_calculation(
    State(state): State<AppState>,
    Json(request): Json<CalculateRequest>,
) -> Json<ShareResponse> {
    let input = request.to_input();
    let result = calculate(&input);
    let message = share_message(&input, &result);
    let url = state.chat_link().with_text(message.clone()).url();

    Json(ShareResponse {
        message,
        url,
        total: MoneyResponse::new(result.total),
    })
}
