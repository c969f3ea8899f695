// src/models/whatsapp/mod.rs

pub mod message;

pub use message::{MessageContent, OutgoingMessage, SendMessageResponse};
