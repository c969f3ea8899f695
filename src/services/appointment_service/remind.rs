use chrono::{DateTime, FixedOffset, Utc};
use log::{info, warn};

use crate::config::ReminderTemplate;
use crate::db::{AppointmentQuery, AppointmentStore};
use crate::errors::StoreError;
use crate::models::{Appointment, OutgoingMessage};
use crate::utils::{deliver, format_service_time, tomorrow_window, Messenger};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ReminderSummary {
    /// Records with a phone number, whatever the send outcome.
    pub attempted: usize,
    /// Attempted sends the provider did not accept.
    pub failed: usize,
    /// Records without a phone number.
    pub skipped: usize,
}

impl ReminderSummary {
    pub fn message(&self) -> String {
        format!(
            "Reminder process complete. {} reminders attempted.",
            self.attempted
        )
    }
}

pub fn reminder_message(
    appointment: &Appointment,
    phone: &str,
    template: &ReminderTemplate,
    offset: FixedOffset,
) -> OutgoingMessage {
    let service_time = format_service_time(appointment.appointment_time, offset);
    OutgoingMessage::template(
        phone,
        &template.name,
        &template.language,
        &[appointment.customer_name(), service_time.as_str()],
    )
}

/// Sends a template reminder for every confirmed appointment on the local
/// day after `now`. Sends run one after another; a failed send is logged and
/// the run moves on. Only a failed query aborts the run.
pub async fn run_reminders(
    store: &dyn AppointmentStore,
    messenger: &dyn Messenger,
    template: &ReminderTemplate,
    now: DateTime<Utc>,
    offset: FixedOffset,
) -> Result<ReminderSummary, StoreError> {
    let window = tomorrow_window(now, offset);
    info!("Searching for appointments in {}", window);

    let appointments = store
        .find(&AppointmentQuery::confirmed_within(window))
        .await?;

    let mut summary = ReminderSummary::default();
    for appointment in &appointments {
        let Some(phone) = appointment.reachable_phone() else {
            warn!(
                "Skipping appointment at {} without a phone number",
                appointment.appointment_time
            );
            summary.skipped += 1;
            continue;
        };

        let message = reminder_message(appointment, phone, template, offset);
        summary.attempted += 1;
        if !deliver(messenger, &message).await {
            summary.failed += 1;
        }
    }

    info!(
        "Reminder run finished: {} attempted, {} failed, {} skipped",
        summary.attempted, summary.failed, summary.skipped
    );
    Ok(summary)
}
