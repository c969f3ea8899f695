use log::{info, warn};

use crate::errors::VerificationError;
use crate::models::{OutgoingMessage, VerifyParams, WebhookEnvelope};
use crate::services::reply_service::keywords::classify;
use crate::utils::{deliver, Messenger};

pub const SUBSCRIBE_MODE: &str = "subscribe";

/// Subscription handshake. Returns the challenge to echo back.
///
/// An empty configured token never verifies.
pub fn verify_subscription(
    params: &VerifyParams,
    verify_token: &str,
) -> Result<String, VerificationError> {
    if params.mode.as_deref() != Some(SUBSCRIBE_MODE) {
        return Err(VerificationError::Mode);
    }
    match params.verify_token.as_deref() {
        Some(token) if !verify_token.is_empty() && token == verify_token => {
            Ok(params.challenge.clone().unwrap_or_default())
        }
        _ => Err(VerificationError::TokenMismatch),
    }
}

/// Replies to every text message in the envelope, one at a time. Returns the
/// number of replies attempted; failed sends are logged and counted.
pub async fn handle_event(envelope: &WebhookEnvelope, messenger: &dyn Messenger) -> usize {
    if !envelope.is_business_account() {
        warn!(
            "Ignoring webhook for object {:?}",
            envelope.object.as_deref().unwrap_or("<missing>")
        );
        return 0;
    }

    let mut attempted = 0;
    for (from, body) in envelope.text_messages() {
        let kind = classify(body);
        info!("Replying to {from} with {kind:?}");
        let reply = OutgoingMessage::text(from, kind.text());
        deliver(messenger, &reply).await;
        attempted += 1;
    }
    attempted
}
