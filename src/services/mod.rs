pub mod appointment_service;
pub mod reply_service;

pub use appointment_service::{reminder_message, run_reminders, ReminderSummary};
pub use reply_service::{
    classify, handle_event, verify_subscription, ReplyKind, BOOKING_REPLY, GREETING_REPLY,
    TRIAL_REPLY,
};
