use axum::{extract::State, http::StatusCode, response::IntoResponse};
use chrono::Utc;
use log::{error, info};
use std::sync::Arc;

use crate::models::AppState;
use crate::services::run_reminders;

pub async fn send_reminders_handler(State(state): State<Arc<AppState>>) -> impl IntoResponse {
    info!("Started send reminders handler");
    match run_reminders(
        state.store.as_ref(),
        state.messenger.as_ref(),
        &state.config.template,
        Utc::now(),
        state.config.utc_offset,
    )
    .await
    {
        Ok(summary) => (StatusCode::OK, summary.message()),
        Err(e) => {
            error!("Error running reminders: {}", e);
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                "Reminder process failed.".to_string(),
            )
        }
    }
}
