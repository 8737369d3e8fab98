//! Landing page handlers

use askama::Template;
use axum::{
    extract::State,
    response::{Html, IntoResponse},
};

use crate::contact::{qr_data_uri, GREETING};
use crate::error::Result;
use crate::models::{headline_stats, service_cards, ServiceCard, StatCounter};
use crate::overlay::Overlay;
use crate::pricing::display::{format_price, BreakdownLines};
use crate::pricing::{calculate, AddOn, RoomCategory};
use crate::session::{PageSession, Visitor};
use crate::AppState;

/// Option of the category selector
struct CategoryOption {
    key: &'static str,
    label: &'static str,
    selected: bool,
}

/// Add-on checkbox
struct AddOnOption {
    key: &'static str,
    label: &'static str,
    price: String,
    checked: bool,
}

/// Landing page template
#[derive(Template)]
#[template(path = "landing.html")]
struct LandingTemplate {
    services: Vec<ServiceCard>,
    stats: Vec<StatCounter>,
    scroll_locked: bool,
    menu_open: bool,
    calculator_open: bool,
    contact_open: bool,
    social_open: bool,
    categories: Vec<CategoryOption>,
    add_ons: Vec<AddOnOption>,
    area: String,
    rooms: String,
    /// Only computed while the calculator is showing
    breakdown: Option<BreakdownLines>,
    chat_url: String,
    /// Only rendered while the contact dialog is showing
    chat_qr: Option<String>,
    instagram_url: String,
}

impl LandingTemplate {
    fn new(state: &AppState, session: &PageSession) -> Self {
        let overlays = &session.overlays;
        let input = session.calculator.to_input();

        let breakdown = overlays.is_open(Overlay::Calculator).then(|| {
            let result = calculate(&input);
            tracing::debug!(total = %result.total, "Calculator recomputed on render");
            BreakdownLines::from(&result)
        });

        let chat_url = state.chat_link().with_text(GREETING).url();
        let chat_qr = if overlays.is_open(Overlay::Contact) {
            match qr_data_uri(&chat_url) {
                Ok(uri) => Some(uri),
                Err(e) => {
                    tracing::warn!("Skipping contact QR code: {}", e);
                    None
                }
            }
        } else {
            None
        };

        Self {
            services: service_cards(),
            stats: headline_stats(),
            scroll_locked: overlays.scroll_locked(),
            menu_open: overlays.is_open(Overlay::NavigationDrawer),
            calculator_open: overlays.is_open(Overlay::Calculator),
            contact_open: overlays.is_open(Overlay::Contact),
            social_open: overlays.is_open(Overlay::Social),
            categories: RoomCategory::ALL
                .into_iter()
                .map(|c| CategoryOption {
                    key: c.key(),
                    label: c.label(),
                    selected: c == input.category,
                })
                .collect(),
            add_ons: AddOn::ALL
                .into_iter()
                .map(|a| AddOnOption {
                    key: a.key(),
                    label: a.label(),
                    price: format_price(a.surcharge()),
                    checked: input.add_ons.contains(&a),
                })
                .collect(),
            area: input.area.normalize().to_string(),
            rooms: input.rooms.to_string(),
            breakdown,
            chat_url,
            chat_qr,
            instagram_url: state.config.instagram_url.clone(),
        }
    }
}

/// Homepage handler
pub async fn home(State(state): State<AppState>, visitor: Visitor) -> Result<impl IntoResponse> {
    let template = {
        let session = visitor.session.lock().await;
        LandingTemplate::new(&state, &session)
    };

    Ok(Html(template.render()?))
}

pub async fn health() -> &'static str {
    "OK"
}
