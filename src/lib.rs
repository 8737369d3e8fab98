//! Sparkle cleaning-service website.
//!
//! Server-rendered landing page with a price calculator, a messenger
//! contact flow and one-at-a-time overlays.

pub mod config;
pub mod contact;
pub mod error;
pub mod models;
pub mod overlay;
pub mod pricing;
pub mod routes;
pub mod session;

use std::sync::Arc;

use axum::Router;
use tower_http::{compression::CompressionLayer, services::ServeDir, trace::TraceLayer};

use crate::config::Config;
use crate::contact::DeepLink;
use crate::session::SessionStore;

/// Shared application state
#[derive(Clone)]
pub struct AppState {
    pub config: Arc<Config>,
    pub sessions: SessionStore,
}

impl AppState {
    pub fn new(config: Config) -> Self {
        Self {
            sessions: SessionStore::new(config.session_idle),
            config: Arc::new(config),
        }
    }

    /// Chat with the business, without a pre-filled message
    pub fn chat_link(&self) -> DeepLink {
        DeepLink::new(
            self.config.messaging_host.clone(),
            self.config.whatsapp_phone.clone(),
        )
    }
}

/// Build the full application router
pub fn app(state: AppState) -> Router {
    let static_dir = ServeDir::new(&state.config.static_dir);
    let sessions = session::session_layer(state.config.session_idle);

    Router::new()
        .merge(routes::router())
        .merge(pricing::router())
        .merge(overlay::router())
        .nest_service("/static", static_dir)
        .layer(sessions)
        .layer(CompressionLayer::new())
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
