pub mod time_utils;
pub mod whatsapp;

pub use time_utils::{format_service_time, tomorrow_window, ReminderWindow};
pub use whatsapp::{deliver, GraphApiClient, Messenger};
