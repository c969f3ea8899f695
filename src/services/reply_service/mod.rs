// src/services/reply_service/mod.rs

pub mod inbound;
pub mod keywords;

pub use inbound::{handle_event, verify_subscription};
pub use keywords::{classify, ReplyKind, BOOKING_REPLY, GREETING_REPLY, TRIAL_REPLY};
