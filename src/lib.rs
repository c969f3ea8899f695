//! Appointment reminders and keyword auto-replies over the WhatsApp Cloud API.
//!
//! Two independent entry points share one send operation:
//! the daily reminder job (`/reminders`) and the provider webhook (`/webhook`).

pub mod api;
pub mod config;
pub mod db;
pub mod errors;
pub mod models;
pub mod services;
pub mod utils;

pub use api::create_router;
pub use config::Config;
pub use errors::{ConfigError, SendError, StoreError, VerificationError};
pub use models::AppState;
