// src/api/mod.rs

pub mod handler;

use axum::{routing::get, Router};
use std::sync::Arc;
use tower_http::trace::TraceLayer;

use crate::models::AppState;
pub use handler::{
    method_not_allowed, receive_webhook_handler, send_reminders_handler, verify_webhook_handler,
};

pub async fn health_handler() -> &'static str {
    "OK"
}

pub fn create_router(state: Arc<AppState>) -> Router {
    Router::new()
        .route(
            "/reminders",
            get(send_reminders_handler).post(send_reminders_handler),
        )
        .route(
            "/webhook",
            get(verify_webhook_handler)
                .post(receive_webhook_handler)
                .fallback(method_not_allowed),
        )
        .route("/health", get(health_handler))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
