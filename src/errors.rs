use thiserror::Error;

/// Failure while handing a message to the messaging provider.
#[derive(Debug, Error)]
pub enum SendError {
    #[error("request to messaging provider failed: {0}")]
    Transport(#[from] reqwest::Error),

    #[error("messaging provider rejected message with status {status}: {body}")]
    Rejected { status: u16, body: String },

    #[error("failed to encode message payload: {0}")]
    Encode(#[from] serde_json::Error),
}

#[derive(Debug, Error)]
pub enum StoreError {
    #[error("appointment query failed: {0}")]
    Query(#[from] sqlx::Error),
}

/// Why a subscription handshake was refused.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum VerificationError {
    #[error("hub.mode is not \"subscribe\"")]
    Mode,

    #[error("verify token mismatch")]
    TokenMismatch,
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("invalid value for {name}: {value:?}")]
    Invalid { name: &'static str, value: String },
}
