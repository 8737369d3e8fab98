//! Page route handlers

pub mod calculator;
pub mod pages;

use axum::{
    routing::{get, post},
    Router,
};

use crate::AppState;

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(pages::home))
        .route("/health", get(pages::health))
        .route("/calculator/result", get(calculator::result))
        .route("/calculator/send", post(calculator::send))
}
