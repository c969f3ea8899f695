// src/db/mod.rs

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::postgres::PgPoolOptions;
use sqlx::{PgPool, Row};

use crate::errors::StoreError;
use crate::models::{Appointment, AppointmentStatus};
use crate::utils::ReminderWindow;

const MAX_CONNECTIONS: u32 = 5;

/// Range filter on `appointment_time`, equality filter on `status`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppointmentQuery {
    pub window: ReminderWindow,
    pub status: AppointmentStatus,
}

impl AppointmentQuery {
    pub fn confirmed_within(window: ReminderWindow) -> Self {
        Self {
            window,
            status: AppointmentStatus::Confirmed,
        }
    }

    pub fn matches(&self, appointment: &Appointment) -> bool {
        appointment.status == self.status && self.window.contains(appointment.appointment_time)
    }
}

/// Read-only view of the booking system's appointment documents.
#[async_trait]
pub trait AppointmentStore: Send + Sync {
    async fn find(&self, query: &AppointmentQuery) -> Result<Vec<Appointment>, StoreError>;
}

#[derive(Clone)]
pub struct PgAppointmentStore {
    pool: PgPool,
}

impl PgAppointmentStore {
    pub async fn connect(database_url: &str) -> Result<Self, StoreError> {
        let pool = PgPoolOptions::new()
            .max_connections(MAX_CONNECTIONS)
            .connect(database_url)
            .await?;
        Ok(Self { pool })
    }
}

#[async_trait]
impl AppointmentStore for PgAppointmentStore {
    async fn find(&self, query: &AppointmentQuery) -> Result<Vec<Appointment>, StoreError> {
        let rows = sqlx::query(
            r#"
            SELECT phone, name, appointment_time, status
            FROM appointments
            WHERE appointment_time >= $1
              AND appointment_time < $2
              AND status = $3
            ORDER BY appointment_time
            "#,
        )
        .bind(query.window.start)
        .bind(query.window.end)
        .bind(query.status.as_str())
        .fetch_all(&self.pool)
        .await?;

        let mut appointments = Vec::with_capacity(rows.len());
        for row in rows {
            let status: String = row.try_get("status")?;
            let appointment_time: DateTime<Utc> = row.try_get("appointment_time")?;
            appointments.push(Appointment {
                phone: row.try_get("phone")?,
                name: row.try_get("name")?,
                appointment_time,
                status: AppointmentStatus::from(status),
            });
        }
        Ok(appointments)
    }
}

/// Fixed set of appointments held in memory. Used when no database is
/// configured and in tests.
#[derive(Debug, Clone, Default)]
pub struct MemoryAppointmentStore {
    appointments: Vec<Appointment>,
}

impl MemoryAppointmentStore {
    pub fn new(appointments: Vec<Appointment>) -> Self {
        Self { appointments }
    }

    pub fn is_empty(&self) -> bool {
        self.appointments.is_empty()
    }
}

#[async_trait]
impl AppointmentStore for MemoryAppointmentStore {
    async fn find(&self, query: &AppointmentQuery) -> Result<Vec<Appointment>, StoreError> {
        let mut found: Vec<Appointment> = self
            .appointments
            .iter()
            .filter(|appointment| query.matches(appointment))
            .cloned()
            .collect();
        found.sort_by_key(|appointment| appointment.appointment_time);
        Ok(found)
    }
}
