// src/api/handler/mod.rs

pub mod reminders;
pub mod webhook;

pub use reminders::send_reminders_handler;
pub use webhook::{method_not_allowed, receive_webhook_handler, verify_webhook_handler};
