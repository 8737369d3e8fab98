//! Overlay endpoints.
//!
//! Plain form posts redirect back to the page; the `/api` variants answer
//! with JSON for scripts.

use std::str::FromStr;

use axum::{
    extract::{Path, Query},
    response::{IntoResponse, Redirect},
    routing::{get, post},
    Json, Router,
};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::error::{AppError, Result};
use crate::pricing::{calculate, responses::BreakdownResponse};
use crate::session::{PageSession, Visitor};
use crate::AppState;

use super::{Overlay, Transition};

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/overlay/escape", post(escape_form))
        .route("/overlay/:target/:action", post(overlay_form))
        .route("/api/overlay", get(overlay_state))
        .route("/api/overlay/escape", post(escape_json))
        .route("/api/overlay/:target/:action", post(overlay_json))
}

/// What a control asks of an overlay
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OverlayAction {
    Open,
    Close,
    Backdrop,
}

impl FromStr for OverlayAction {
    type Err = AppError;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s {
            "open" => Ok(OverlayAction::Open),
            "close" => Ok(OverlayAction::Close),
            "backdrop" => Ok(OverlayAction::Backdrop),
            _ => Err(AppError::NotFound),
        }
    }
}

fn parse_target(target: &str, action: &str) -> Result<(Overlay, OverlayAction)> {
    let overlay = target.parse::<Overlay>().map_err(|e| {
        tracing::debug!("{}", e);
        AppError::NotFound
    })?;
    Ok((overlay, action.parse()?))
}

fn apply(id: Uuid, session: &mut PageSession, overlay: Overlay, action: OverlayAction) -> Transition {
    let transition = match action {
        OverlayAction::Open => session.overlays.open(overlay),
        OverlayAction::Close => session.overlays.close(overlay),
        OverlayAction::Backdrop => session.overlays.backdrop_click(overlay),
    };
    log_transition(id, transition);
    transition
}

fn log_transition(id: Uuid, transition: Transition) {
    match transition {
        Transition::Opened(overlay) => tracing::info!(visitor = %id, %overlay, "Overlay opened"),
        Transition::Closed(overlay) => tracing::info!(visitor = %id, %overlay, "Overlay closed"),
        Transition::Ignored { requested, open } => {
            tracing::debug!(visitor = %id, %requested, %open, "Overlay already open, ignoring")
        }
        Transition::Unchanged => tracing::debug!(visitor = %id, "No overlay open"),
    }
}

/// Query of the form endpoints
#[derive(Debug, Default, Deserialize)]
pub struct ReturnTo {
    /// Page section to land on afterwards
    #[serde(default)]
    pub anchor: Option<String>,
}

impl ReturnTo {
    fn location(&self) -> String {
        match self.anchor.as_deref() {
            Some(anchor)
                if !anchor.is_empty()
                    && anchor
                        .chars()
                        .all(|c| c.is_ascii_alphanumeric() || c == '-' || c == '_') =>
            {
                format!("/#{}", anchor)
            }
            _ => "/".to_string(),
        }
    }
}

async fn overlay_form(
    visitor: Visitor,
    Path((target, action)): Path<(String, String)>,
    Query(return_to): Query<ReturnTo>,
) -> Result<impl IntoResponse> {
    let (overlay, action) = parse_target(&target, &action)?;

    {
        let mut session = visitor.session.lock().await;
        apply(visitor.id, &mut session, overlay, action);
    }

    Ok(Redirect::to(&return_to.location()))
}

async fn escape_form(visitor: Visitor) -> impl IntoResponse {
    {
        let mut session = visitor.session.lock().await;
        let transition = session.overlays.escape();
        log_transition(visitor.id, transition);
    }

    Redirect::to("/")
}

/// Overlay state for scripts
#[derive(Debug, Serialize)]
pub struct OverlayResponse {
    /// Slug of the open overlay
    pub open: Option<&'static str>,
    pub scroll_locked: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub transition: Option<&'static str>,
    /// Fresh breakdown whenever the calculator is showing
    #[serde(skip_serializing_if = "Option::is_none")]
    pub calculator: Option<BreakdownResponse>,
}

impl OverlayResponse {
    fn new(session: &PageSession, transition: Option<Transition>) -> Self {
        let calculator = session.overlays.is_open(Overlay::Calculator).then(|| {
            let input = session.calculator.to_input();
            BreakdownResponse::new(&input, &calculate(&input))
        });

        Self {
            open: session.overlays.current().map(Overlay::slug),
            scroll_locked: session.overlays.scroll_locked(),
            transition: transition.map(Transition::name),
            calculator,
        }
    }
}

async fn overlay_state(visitor: Visitor) -> impl IntoResponse {
    let session = visitor.session.lock().await;
    Json(OverlayResponse::new(&session, None))
}

async fn overlay_json(
    visitor: Visitor,
    Path((target, action)): Path<(String, String)>,
) -> Result<impl IntoResponse> {
    let (overlay, action) = parse_target(&target, &action)?;

    let mut session = visitor.session.lock().await;
    let transition = apply(visitor.id, &mut session, overlay, action);

    Ok(Json(OverlayResponse::new(&session, Some(transition))))
}

async fn escape_json(visitor: Visitor) -> impl IntoResponse {
    let mut session = visitor.session.lock().await;
    let transition = session.overlays.escape();
    log_transition(visitor.id, transition);

    Json(OverlayResponse::new(&session, Some(transition)))
}
