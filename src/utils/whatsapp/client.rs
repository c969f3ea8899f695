use async_trait::async_trait;
use log::{error, info};
use reqwest::header::{ACCEPT, CONTENT_TYPE};
use reqwest::Client;

use crate::config::Config;
use crate::errors::SendError;
use crate::models::{OutgoingMessage, SendMessageResponse};

/// The shared "send message" operation used by the reminder job and the
/// webhook replies.
#[async_trait]
pub trait Messenger: Send + Sync {
    /// Returns the provider's message id when the response carries one.
    async fn send(&self, message: &OutgoingMessage) -> Result<Option<String>, SendError>;
}

/// WhatsApp Cloud API client, authenticated with a bearer token.
#[derive(Clone)]
pub struct GraphApiClient {
    client: Client,
    messages_url: String,
    access_token: String,
}

impl GraphApiClient {
    pub fn new(graph_api_url: &str, business_account_id: &str, access_token: &str) -> Self {
        Self::with_http_client(Client::new(), graph_api_url, business_account_id, access_token)
    }

    pub fn with_http_client(
        client: Client,
        graph_api_url: &str,
        business_account_id: &str,
        access_token: &str,
    ) -> Self {
        Self {
            client,
            messages_url: format!(
                "{}/{}/messages",
                graph_api_url.trim_end_matches('/'),
                business_account_id
            ),
            access_token: access_token.to_string(),
        }
    }

    pub fn from_config(config: &Config) -> Self {
        Self::new(
            &config.graph_api_url,
            &config.business_account_id,
            &config.access_token,
        )
    }

    pub fn messages_url(&self) -> &str {
        &self.messages_url
    }
}

#[async_trait]
impl Messenger for GraphApiClient {
    async fn send(&self, message: &OutgoingMessage) -> Result<Option<String>, SendError> {
        let json_body = serde_json::to_string(message)?;

        let response = self
            .client
            .post(&self.messages_url)
            .header(ACCEPT, "application/json")
            .header(CONTENT_TYPE, "application/json")
            .bearer_auth(&self.access_token)
            .body(json_body)
            .send()
            .await?;

        let status = response.status();
        let raw_response = response.text().await?;
        if !status.is_success() {
            return Err(SendError::Rejected {
                status: status.as_u16(),
                body: raw_response,
            });
        }

        let message_id = serde_json::from_str::<SendMessageResponse>(&raw_response)
            .ok()
            .and_then(|parsed| parsed.messages.into_iter().next())
            .map(|id| id.id);
        Ok(message_id)
    }
}

/// Sends and logs the outcome. Failures are reported, never propagated.
pub async fn deliver(messenger: &dyn Messenger, message: &OutgoingMessage) -> bool {
    match messenger.send(message).await {
        Ok(Some(id)) => {
            info!("Message sent to {}: {}", message.to, id);
            true
        }
        Ok(None) => {
            info!("Message sent to {}", message.to);
            true
        }
        Err(e) => {
            error!("Error sending message to {}: {}", message.to, e);
            false
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builds_messages_url_from_account() {
        let client = GraphApiClient::new("https://graph.facebook.com/v19.0/", "10987654321", "token");
        assert_eq!(
            client.messages_url(),
            "https://graph.facebook.com/v19.0/10987654321/messages"
        );
    }
}
