use chrono::{DateTime, Utc};
use std::fmt;

pub const DEFAULT_CUSTOMER_NAME: &str = "Client";

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AppointmentStatus {
    Confirmed,
    Pending,
    Cancelled,
    Completed,
    Other(String),
}

impl AppointmentStatus {
    pub fn as_str(&self) -> &str {
        match self {
            AppointmentStatus::Confirmed => "confirmed",
            AppointmentStatus::Pending => "pending",
            AppointmentStatus::Cancelled => "cancelled",
            AppointmentStatus::Completed => "completed",
            AppointmentStatus::Other(raw) => raw,
        }
    }
}

impl From<&str> for AppointmentStatus {
    fn from(raw: &str) -> Self {
        match raw {
            "confirmed" => AppointmentStatus::Confirmed,
            "pending" => AppointmentStatus::Pending,
            "cancelled" => AppointmentStatus::Cancelled,
            "completed" => AppointmentStatus::Completed,
            other => AppointmentStatus::Other(other.to_string()),
        }
    }
}

impl From<String> for AppointmentStatus {
    fn from(raw: String) -> Self {
        AppointmentStatus::from(raw.as_str())
    }
}

impl fmt::Display for AppointmentStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A booking owned by the external booking system. Read-only here.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Appointment {
    pub phone: Option<String>,
    pub name: Option<String>,
    pub appointment_time: DateTime<Utc>,
    pub status: AppointmentStatus,
}

impl Appointment {
    /// Phone number to remind, if the record has a usable one.
    pub fn reachable_phone(&self) -> Option<&str> {
        self.phone
            .as_deref()
            .map(str::trim)
            .filter(|phone| !phone.is_empty())
    }

    pub fn customer_name(&self) -> &str {
        self.name
            .as_deref()
            .filter(|name| !name.trim().is_empty())
            .unwrap_or(DEFAULT_CUSTOMER_NAME)
    }
}
