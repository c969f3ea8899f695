use axum::{
    body::Bytes,
    extract::{
        rejection::{BytesRejection, QueryRejection},
        Query, State,
    },
    http::StatusCode,
    response::IntoResponse,
};
use log::{error, info, warn};
use std::sync::Arc;

use crate::models::{AppState, VerifyParams, WebhookEnvelope};
use crate::services::{handle_event, verify_subscription};

fn forbidden() -> (StatusCode, String) {
    (
        StatusCode::FORBIDDEN,
        "Verification token mismatch".to_string(),
    )
}

pub async fn verify_webhook_handler(
    State(state): State<Arc<AppState>>,
    query: Result<Query<Vec<(String, String)>>, QueryRejection>,
) -> impl IntoResponse {
    let params = match query {
        Ok(Query(pairs)) => VerifyParams::from_pairs(pairs),
        Err(e) => {
            warn!("Verification failed, unreadable query: {}", e);
            return forbidden();
        }
    };

    match verify_subscription(&params, &state.config.verify_token) {
        Ok(challenge) => {
            info!("Webhook verified");
            (StatusCode::OK, challenge)
        }
        Err(e) => {
            warn!("Verification failed: {}", e);
            forbidden()
        }
    }
}

/// Always acknowledges with 200 so the provider does not redeliver, even when
/// the body cannot be read.
pub async fn receive_webhook_handler(
    State(state): State<Arc<AppState>>,
    body: Result<Bytes, BytesRejection>,
) -> impl IntoResponse {
    let body = match body {
        Ok(body) => body,
        Err(e) => {
            error!("Error reading webhook body: {}", e);
            return (StatusCode::OK, "OK");
        }
    };

    match serde_json::from_slice::<WebhookEnvelope>(&body) {
        Ok(envelope) => {
            info!(
                "Received webhook with {} entries",
                envelope.entry.len()
            );
            let replies = handle_event(&envelope, state.messenger.as_ref()).await;
            info!("Attempted {} replies", replies);
        }
        Err(e) => error!("Error processing webhook: {}", e),
    }
    (StatusCode::OK, "OK")
}

pub async fn method_not_allowed() -> impl IntoResponse {
    (StatusCode::METHOD_NOT_ALLOWED, "Method Not Allowed")
}
