//! Per-visitor page sessions
//!
//! The session cookie is issued and read by `tower-sessions`; the session
//! record only holds a visitor id. The visitor's overlay state and last
//! calculator form live in a moka cache under that id. Idle sessions expire;
//! an expired or unknown id simply starts over in the initial state.

use std::sync::Arc;
use std::time::Duration;

use axum::{async_trait, extract::FromRequestParts, http::request::Parts};
use moka::future::Cache;
use tokio::sync::Mutex;
use tower_sessions::{
    cookie::{time, SameSite},
    Expiry, MemoryStore, Session, SessionManagerLayer,
};
use uuid::Uuid;

use crate::error::AppError;
use crate::overlay::OverlayCoordinator;
use crate::pricing::CalculatorForm;
use crate::AppState;

/// Name of the session cookie
pub const SESSION_COOKIE: &str = "sparkle_session";

/// Session record key holding the visitor id
const VISITOR_KEY: &str = "visitor";

const MAX_SESSIONS: u64 = 10_000;

/// Cookie layer for the router. Records expire after `idle` without a request.
pub fn session_layer(idle: Duration) -> SessionManagerLayer<MemoryStore> {
    let idle = time::Duration::seconds(i64::try_from(idle.as_secs()).unwrap_or(i64::MAX));

    SessionManagerLayer::new(MemoryStore::default())
        .with_name(SESSION_COOKIE)
        .with_secure(false)
        .with_same_site(SameSite::Lax)
        .with_expiry(Expiry::OnInactivity(idle))
}

/// State of one visitor's page
#[derive(Debug, Default)]
pub struct PageSession {
    pub overlays: OverlayCoordinator,
    /// Calculator fields as last entered
    pub calculator: CalculatorForm,
}

/// In-memory page state, by visitor id
#[derive(Clone)]
pub struct SessionStore {
    sessions: Cache<Uuid, Arc<Mutex<PageSession>>>,
}

impl SessionStore {
    pub fn new(idle_timeout: Duration) -> Self {
        Self {
            sessions: Cache::builder()
                .max_capacity(MAX_SESSIONS)
                .time_to_idle(idle_timeout)
                .build(),
        }
    }

    /// Session for `id`, created empty if missing or expired
    pub async fn get_or_create(&self, id: Uuid) -> Arc<Mutex<PageSession>> {
        self.sessions
            .get_with(id, async { Arc::new(Mutex::new(PageSession::default())) })
            .await
    }
}

/// The visitor behind a request, with their page state
pub struct Visitor {
    pub id: Uuid,
    pub session: Arc<Mutex<PageSession>>,
}

#[async_trait]
impl FromRequestParts<AppState> for Visitor {
    type Rejection = AppError;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        let cookie_session = Session::from_request_parts(parts, state)
            .await
            .map_err(|(_, reason)| AppError::Internal(reason.to_string()))?;

        let id = match cookie_session.get::<Uuid>(VISITOR_KEY).await? {
            Some(id) => id,
            None => {
                let id = Uuid::new_v4();
                cookie_session.insert(VISITOR_KEY, id).await?;
                tracing::debug!("New visitor session {}", id);
                id
            }
        };

        let session = state.sessions.get_or_create(id).await;
        Ok(Visitor { id, session })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::overlay::Overlay;

    #[tokio::test]
    async fn test_sessions_are_shared_per_id() {
        let store = SessionStore::new(Duration::from_secs(60));
        let id = Uuid::new_v4();

        {
            let session = store.get_or_create(id).await;
            session.lock().await.overlays.open(Overlay::Calculator);
        }

        let again = store.get_or_create(id).await;
        assert!(again.lock().await.overlays.is_open(Overlay::Calculator));

        let other = store.get_or_create(Uuid::new_v4()).await;
        assert!(!other.lock().await.overlays.scroll_locked());
    }

    #[tokio::test]
    async fn test_missing_session_layer_is_an_error() {
        let state = AppState::new(crate::config::Config::default());
        let (mut parts, _) = axum::http::Request::new(()).into_parts();

        let result = Visitor::from_request_parts(&mut parts, &state).await;
        assert!(matches!(result, Err(AppError::Internal(_))));
    }
}
