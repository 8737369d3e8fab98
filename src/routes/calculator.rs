//! Calculator dialog handlers

use askama::Template;
use axum::{
    extract::{Query, State},
    response::{Html, IntoResponse, Redirect},
    Form,
};

use crate::contact::share_message;
use crate::error::Result;
use crate::overlay::Overlay;
use crate::pricing::display::BreakdownLines;
use crate::pricing::{calculate, CalculatorForm};
use crate::session::Visitor;
use crate::AppState;

/// Breakdown region of the calculator dialog
#[derive(Template)]
#[template(path = "partials/calculator_result.html")]
struct CalculatorResultTemplate {
    lines: BreakdownLines,
}

/// Re-render the breakdown for the current form values.
///
/// Called on every change of a calculator field. The values are kept in the
/// session so a full page render shows the same numbers.
pub async fn result(
    visitor: Visitor,
    Query(form): Query<CalculatorForm>,
) -> Result<impl IntoResponse> {
    let input = form.to_input();
    let result = calculate(&input);
    tracing::debug!(
        category = %input.category,
        area = %input.area,
        rooms = input.rooms,
        total = %result.total,
        "Calculator recomputed"
    );

    visitor.session.lock().await.calculator = form;

    let template = CalculatorResultTemplate {
        lines: BreakdownLines::from(&result),
    };
    Ok(Html(template.render()?))
}

/// Send the calculation to the business through the messenger.
///
/// Closes the calculator and redirects to the chat deep link.
pub async fn send(
    State(state): State<AppState>,
    visitor: Visitor,
    Form(form): Form<CalculatorForm>,
) -> impl IntoResponse {
    let input = form.to_input();
    let result = calculate(&input);
    let url = state
        .chat_link()
        .with_text(share_message(&input, &result))
        .url();

    {
        let mut session = visitor.session.lock().await;
        session.calculator = form;
        session.overlays.close(Overlay::Calculator);
    }
    tracing::info!(visitor = %visitor.id, total = %result.total, "Calculation sent to messenger");

    Redirect::to(&url)
}
