// src/models/webhook/mod.rs

pub mod envelope;

pub use envelope::{ChangeValue, Change, Entry, InboundMessage, TextContent, WebhookEnvelope};
