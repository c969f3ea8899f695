// src/services/appointment_service/mod.rs

pub mod remind;

pub use remind::{reminder_message, run_reminders, ReminderSummary};
