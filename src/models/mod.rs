// src/models/mod.rs

pub mod api;
pub mod app;
pub mod appointments;
pub mod webhook;
pub mod whatsapp;

pub use api::VerifyParams;
pub use app::AppState;
pub use appointments::{Appointment, AppointmentStatus};
pub use webhook::WebhookEnvelope;
pub use whatsapp::{OutgoingMessage, SendMessageResponse};
